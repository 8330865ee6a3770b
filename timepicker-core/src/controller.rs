//! Lifecycle controller tying the widget instance to component props.
//!
//! A host component owns one [`TimepickerController`]. It calls
//! [`TimepickerController::mount`] once the input element exists,
//! [`TimepickerController::reconcile`] with fresh props after every change,
//! and [`TimepickerController::unmount`] when it goes away. The controller
//! tracks the last observed props so each synchronizer runs only when its
//! input changed:
//!
//! - `value` changed -> value synchronizer
//! - `options` changed identity -> options synchronizer
//! - merged handler set changed identity -> detach old set, attach new set
//!
//! Widget calls are always made with the internal `RefCell` released, since
//! the widget may emit events (and thereby re-enter the controller) from
//! inside any call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use crate::bridge::{EventBridge, MergedHandlers};
use crate::callbacks::{CallbackBag, Handler};
use crate::events::TimepickerEvent;
use crate::options::TimepickerOptions;
use crate::sync::{apply_value, OptionsSync, ValueSync};
use crate::widget::{TimepickerWidget, WidgetLoader};

// ============================================================================
// Props
// ============================================================================

/// Snapshot of the component's props.
pub struct TimepickerProps<P> {
    pub options: Option<Rc<TimepickerOptions<P>>>,
    /// Controlled value. When set, the input is read-only.
    pub value: Option<String>,
    /// Uncontrolled initial value.
    pub default_value: Option<String>,
    pub callbacks: CallbackBag<P>,
}

impl<P> TimepickerProps<P> {
    pub fn new() -> Self {
        Self {
            options: None,
            value: None,
            default_value: None,
            callbacks: CallbackBag::new(),
        }
    }

    pub fn with_options(mut self, options: Rc<TimepickerOptions<P>>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_callback(mut self, event: TimepickerEvent, handler: impl Into<Handler<P>>) -> Self {
        self.callbacks.set(event, Some(handler.into()));
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    /// Value to seed a freshly created widget with; the controlled value
    /// wins over the default.
    pub fn initial_value(&self) -> Option<&str> {
        self.value.as_deref().or(self.default_value.as_deref())
    }

    fn options_callbacks(&self) -> Option<&Rc<CallbackBag<P>>> {
        self.options.as_ref().and_then(|o| o.callbacks.as_ref())
    }
}

impl<P> Default for TimepickerProps<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for TimepickerProps<P> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            value: self.value.clone(),
            default_value: self.default_value.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted yet.
    Idle,
    /// Waiting for the widget library.
    Loading,
    Mounted,
    /// Loading or construction failed. There are no retries.
    Failed,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// No host element, or mount was already attempted.
    Skipped,
    /// The component unmounted while the library was loading.
    Cancelled,
}

struct ControllerState<W: TimepickerWidget> {
    phase: Phase,
    alive: Rc<Cell<bool>>,
    instance: Option<Rc<W>>,
    props: TimepickerProps<W::Payload>,
    values: ValueSync,
    bridge: EventBridge<W::Payload>,
    attached: Option<Rc<MergedHandlers<W::Payload>>>,
    resubscribing: bool,
}

pub struct TimepickerController<W: TimepickerWidget> {
    state: Rc<RefCell<ControllerState<W>>>,
}

impl<W: TimepickerWidget> Clone for TimepickerController<W> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<W: TimepickerWidget> TimepickerController<W> {
    pub fn new(props: TimepickerProps<W::Payload>) -> Self {
        let bridge = EventBridge::new(&props.callbacks, props.options_callbacks());
        Self {
            state: Rc::new(RefCell::new(ControllerState {
                phase: Phase::Idle,
                alive: Rc::new(Cell::new(true)),
                instance: None,
                props,
                values: ValueSync::new(),
                bridge,
                attached: None,
                resubscribing: false,
            })),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn is_mounted(&self) -> bool {
        self.state.borrow().instance.is_some()
    }

    /// Run `f` against the live widget. `None` when there is none.
    pub fn with_instance<R>(&self, f: impl FnOnce(&W) -> R) -> Option<R> {
        let widget = self.state.borrow().instance.clone()?;
        Some(f(&widget))
    }

    /// Load the widget library, construct the widget on `host` and bring it
    /// in line with the current props.
    ///
    /// Without a host this does nothing. Only the first call per controller
    /// has any effect. Load and construction errors are returned to the
    /// caller untouched.
    pub async fn mount<L>(&self, loader: &L, host: Option<L::Host>) -> Result<MountOutcome, L::Error>
    where
        L: WidgetLoader<Widget = W>,
    {
        let Some(host) = host else {
            debug!("No host input for timepicker, skipping construction");
            return Ok(MountOutcome::Skipped);
        };

        let alive = {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Idle {
                warn!("Timepicker mount requested while {:?}, ignoring", state.phase);
                return Ok(MountOutcome::Skipped);
            }
            state.phase = Phase::Loading;
            Rc::clone(&state.alive)
        };

        let module = match loader.load().await {
            Ok(module) => module,
            Err(err) => {
                self.fail(&alive);
                return Err(err);
            }
        };

        if !alive.get() {
            debug!("Timepicker unmounted while loading, dropping construction");
            return Ok(MountOutcome::Cancelled);
        }

        let options = self.state.borrow().props.options.clone();
        let widget = match loader.construct(&module, &host, options.as_deref()) {
            Ok(widget) => Rc::new(widget),
            Err(err) => {
                self.fail(&alive);
                return Err(err);
            }
        };
        widget.create();

        let handlers = self.state.borrow().bridge.handlers();
        handlers.attach(&*widget);

        let seed = {
            let mut state = self.state.borrow_mut();
            state.instance = Some(Rc::clone(&widget));
            state.attached = Some(handlers);
            state.phase = Phase::Mounted;
            let initial = state.props.initial_value().map(str::to_string);
            state.values.plan(initial.as_deref())
        };
        debug!("Timepicker created");

        if let Some(value) = seed {
            apply_value(&*widget, &value);
        }
        Ok(MountOutcome::Mounted)
    }

    fn fail(&self, alive: &Cell<bool>) {
        if alive.get() {
            self.state.borrow_mut().phase = Phase::Failed;
        }
    }

    /// Feed the latest props and push whatever changed into the widget.
    ///
    /// Handlers are brought up to date before any value or options push, since
    /// a push can make the widget emit and re-enter this method.
    pub fn reconcile(&self, props: TimepickerProps<W::Payload>) {
        let (widget, value_push, options_push) = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            if state.phase == Phase::Unmounted {
                return;
            }

            let value_changed = state.props.value != props.value;
            let options_changed = !same_rc(&state.props.options, &props.options);
            state.bridge.update(&props.callbacks, props.options_callbacks());

            let widget = state.instance.clone();
            let mut value_push = None;
            let mut options_push = None;
            if widget.is_some() {
                if value_changed {
                    value_push = state.values.plan(props.value.as_deref());
                }
                if options_changed {
                    options_push = props.options.clone();
                }
            }
            state.props = props;
            (widget, value_push, options_push)
        };

        let Some(widget) = widget else {
            return;
        };
        self.sync_handlers(&widget);

        if let Some(value) = value_push {
            if self.is_current_value(&value) {
                apply_value(&*widget, &value);
            }
        }
        if let Some(options) = options_push {
            if self.is_current_options(&options) {
                OptionsSync::push(Some(&*widget), Some(&*options));
            }
        }
    }

    /// Swap the subscribed handler set for the bridge's current one until
    /// the two agree. A nested call while a swap is running leaves the work
    /// to the outer loop.
    fn sync_handlers(&self, widget: &W) {
        loop {
            let (previous, current) = {
                let mut state = self.state.borrow_mut();
                if state.resubscribing || state.phase == Phase::Unmounted {
                    return;
                }
                let current = state.bridge.handlers();
                let stale = state
                    .attached
                    .as_ref()
                    .map_or(true, |attached| !Rc::ptr_eq(attached, &current));
                if !stale {
                    return;
                }
                state.resubscribing = true;
                (state.attached.take(), current)
            };

            debug!("Re-subscribing timepicker handlers");
            if let Some(previous) = previous {
                previous.detach(widget);
            }
            current.attach(widget);

            let mut state = self.state.borrow_mut();
            state.resubscribing = false;
            if state.phase == Phase::Unmounted {
                // Unmounted mid-swap: the teardown saw no attached set.
                drop(state);
                current.detach(widget);
                return;
            }
            state.attached = Some(current);
        }
    }

    fn is_current_value(&self, value: &str) -> bool {
        self.state.borrow().props.value.as_deref() == Some(value)
    }

    fn is_current_options(&self, options: &Rc<TimepickerOptions<W::Payload>>) -> bool {
        self.state
            .borrow()
            .props
            .options
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, options))
    }

    /// Detach handlers and destroy the widget. Cancels a pending mount.
    /// Calls after the first are no-ops.
    pub fn unmount(&self) {
        let (widget, attached) = {
            let mut state = self.state.borrow_mut();
            if state.phase == Phase::Unmounted {
                return;
            }
            state.phase = Phase::Unmounted;
            state.alive.set(false);
            (state.instance.take(), state.attached.take())
        };

        let Some(widget) = widget else {
            debug!("Timepicker unmounted before creation");
            return;
        };
        if let Some(handlers) = attached {
            handlers.detach(&*widget);
        }
        widget.destroy();
        debug!("Timepicker destroyed");
    }
}

fn same_rc<T>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}
