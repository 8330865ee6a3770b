//! Event bridge: merges the prop-side and options-side callback bags into a
//! single handler per event and (un)subscribes them on the widget.

use std::rc::Rc;

use log::debug;

use crate::callbacks::{CallbackBag, Handler};
use crate::events::{TimepickerEvent, EVENT_COUNT};
use crate::widget::TimepickerWidget;

/// One combined handler per event that has at least one callback.
pub struct MergedHandlers<P> {
    slots: [Option<Handler<P>>; EVENT_COUNT],
}

impl<P: 'static> MergedHandlers<P> {
    /// Combine both bags. For every event, the combined handler calls the
    /// options-side callback first and the prop-side callback second, both
    /// with the same payload.
    pub fn merge(props: &CallbackBag<P>, options: Option<&CallbackBag<P>>) -> Self {
        let slots = std::array::from_fn(|i| {
            let event = TimepickerEvent::ALL[i];
            let from_options = options.and_then(|bag| bag.get(event)).cloned();
            let from_props = props.get(event).cloned();
            if from_options.is_none() && from_props.is_none() {
                return None;
            }
            Some(Handler::new(move |payload: &P| {
                if let Some(handler) = &from_options {
                    handler.call(payload);
                }
                if let Some(handler) = &from_props {
                    handler.call(payload);
                }
            }))
        });
        Self { slots }
    }
}

impl<P> MergedHandlers<P> {
    pub fn get(&self, event: TimepickerEvent) -> Option<&Handler<P>> {
        self.slots[event.index()].as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimepickerEvent, &Handler<P>)> + '_ {
        TimepickerEvent::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(event, slot)| slot.as_ref().map(|h| (event, h)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn attach<W>(&self, widget: &W)
    where
        W: TimepickerWidget<Payload = P>,
    {
        for (event, handler) in self.iter() {
            widget.on(event, handler);
        }
    }

    pub fn detach<W>(&self, widget: &W)
    where
        W: TimepickerWidget<Payload = P>,
    {
        for (event, handler) in self.iter() {
            widget.off(event, handler);
        }
    }
}

/// Memoized merge.
///
/// The merged set is only rebuilt when a prop-side callback or the
/// options-side bag changes identity, so `detach` always receives the very
/// handlers that `attach` installed.
pub struct EventBridge<P> {
    props: CallbackBag<P>,
    options: Option<Rc<CallbackBag<P>>>,
    merged: Rc<MergedHandlers<P>>,
}

impl<P: 'static> EventBridge<P> {
    pub fn new(props: &CallbackBag<P>, options: Option<&Rc<CallbackBag<P>>>) -> Self {
        Self {
            props: props.clone(),
            options: options.cloned(),
            merged: Rc::new(MergedHandlers::merge(props, options.map(|bag| &**bag))),
        }
    }

    /// Feed the current sources. Returns `true` when the merged set was
    /// rebuilt.
    pub fn update(&mut self, props: &CallbackBag<P>, options: Option<&Rc<CallbackBag<P>>>) -> bool {
        let same_options = match (&self.options, options) {
            (None, None) => true,
            (Some(previous), Some(current)) => Rc::ptr_eq(previous, current),
            _ => false,
        };
        if same_options && self.props == *props {
            return false;
        }

        *self = EventBridge::new(props, options);
        debug!("Rebuilt merged timepicker handlers ({} events)", self.merged.len());
        true
    }
}

impl<P> EventBridge<P> {
    pub fn handlers(&self) -> Rc<MergedHandlers<P>> {
        Rc::clone(&self.merged)
    }
}
