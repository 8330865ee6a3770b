use std::fmt;
use std::rc::Rc;

use crate::events::{TimepickerEvent, EVENT_COUNT};

/// A shared event callback.
///
/// Equality is identity: two handlers are equal only when they point at the
/// same closure. Cloning keeps the identity, re-wrapping a closure does not.
pub struct Handler<P>(Rc<dyn Fn(&P)>);

impl<P> Handler<P> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&P) + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn call(&self, payload: &P) {
        (self.0)(payload)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl<P> Clone for Handler<P> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<P> PartialEq for Handler<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<P> Eq for Handler<P> {}

impl<P> fmt::Debug for Handler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

impl<P, F> From<F> for Handler<P>
where
    F: Fn(&P) + 'static,
{
    fn from(f: F) -> Self {
        Handler::new(f)
    }
}

/// One optional callback per [`TimepickerEvent`].
///
/// Used both for the callbacks passed directly to the component and for the
/// `callbacks` group embedded in [`crate::TimepickerOptions`].
pub struct CallbackBag<P> {
    slots: [Option<Handler<P>>; EVENT_COUNT],
}

impl<P> CallbackBag<P> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, event: TimepickerEvent, handler: impl Into<Handler<P>>) -> Self {
        self.set(event, Some(handler.into()));
        self
    }

    pub fn set(&mut self, event: TimepickerEvent, handler: Option<Handler<P>>) {
        self.slots[event.index()] = handler;
    }

    pub fn get(&self, event: TimepickerEvent) -> Option<&Handler<P>> {
        self.slots[event.index()].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present callbacks, in [`TimepickerEvent::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TimepickerEvent, &Handler<P>)> + '_ {
        TimepickerEvent::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(event, slot)| slot.as_ref().map(|h| (event, h)))
    }
}

impl<P> Default for CallbackBag<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for CallbackBag<P> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

/// Slot-wise identity comparison.
impl<P> PartialEq for CallbackBag<P> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<P> Eq for CallbackBag<P> {}

impl<P> fmt::Debug for CallbackBag<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(event, h)| (event.prop_name(), h)))
            .finish()
    }
}

impl<P> FromIterator<(TimepickerEvent, Handler<P>)> for CallbackBag<P> {
    fn from_iter<I: IntoIterator<Item = (TimepickerEvent, Handler<P>)>>(iter: I) -> Self {
        let mut bag = CallbackBag::new();
        for (event, handler) in iter {
            bag.set(event, Some(handler));
        }
        bag
    }
}
