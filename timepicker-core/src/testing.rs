//! Recording test doubles for the widget and its loader.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use serde_json::{json, Value};

use crate::callbacks::Handler;
use crate::events::TimepickerEvent;
use crate::options::TimepickerOptions;
use crate::widget::{TimepickerWidget, WidgetLoader};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create,
    Destroy,
    Open,
    Close,
    SetValue(String, bool),
    /// Address of the options passed in, and the `create` flag.
    Update(usize, bool),
    On(TimepickerEvent, Handler<Value>),
    Off(TimepickerEvent, Handler<Value>),
    Once(TimepickerEvent, Handler<Value>),
}

#[derive(Default)]
struct MockState {
    calls: Vec<Call>,
    subscribers: Vec<(TimepickerEvent, Handler<Value>)>,
    value: String,
    emit_on_set_value: bool,
}

#[derive(Clone, Default)]
pub struct MockWidget {
    state: Rc<RefCell<MockState>>,
}

impl MockWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn update_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Update(..)))
            .count()
    }

    pub fn set_value_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SetValue(value, _) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn subscriber_count(&self, event: TimepickerEvent) -> usize {
        self.state
            .borrow()
            .subscribers
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }

    /// Fire `event` the way the widget's emitter would.
    pub fn emit(&self, event: TimepickerEvent, payload: &Value) {
        let handlers: Vec<_> = self
            .state
            .borrow()
            .subscribers
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            handler.call(payload);
        }
    }

    /// Make `set_value` fire `update` synchronously, as the real widget
    /// does when `triggerUpdate` is set.
    pub fn emit_update_on_set_value(&self) {
        self.state.borrow_mut().emit_on_set_value = true;
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl TimepickerWidget for MockWidget {
    type Payload = Value;
    type Wrapper = String;

    fn create(&self) {
        self.record(Call::Create);
    }

    fn destroy(&self) {
        self.record(Call::Destroy);
        self.state.borrow_mut().subscribers.clear();
    }

    fn open(&self) {
        self.record(Call::Open);
    }

    fn close(&self) {
        self.record(Call::Close);
    }

    fn set_value(&self, value: &str, trigger_update: bool) {
        self.record(Call::SetValue(value.to_string(), trigger_update));
        self.state.borrow_mut().value = value.to_string();
        if trigger_update && self.state.borrow().emit_on_set_value {
            self.emit(TimepickerEvent::Update, &json!({ "time": value }));
        }
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn update(&self, options: &TimepickerOptions<Value>, create: bool) {
        let address = options as *const TimepickerOptions<Value> as usize;
        self.record(Call::Update(address, create));
    }

    fn on(&self, event: TimepickerEvent, handler: &Handler<Value>) {
        self.record(Call::On(event, handler.clone()));
        self.state
            .borrow_mut()
            .subscribers
            .push((event, handler.clone()));
    }

    fn off(&self, event: TimepickerEvent, handler: &Handler<Value>) {
        self.record(Call::Off(event, handler.clone()));
        self.state
            .borrow_mut()
            .subscribers
            .retain(|(e, h)| !(*e == event && h == handler));
    }

    fn once(&self, event: TimepickerEvent, handler: &Handler<Value>) {
        self.record(Call::Once(event, handler.clone()));
    }

    fn wrapper(&self) -> Option<String> {
        Some("timepicker-ui".to_string())
    }
}

struct LoaderState {
    widget: MockWidget,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    fail: Cell<bool>,
    loads: Cell<usize>,
    constructed: RefCell<Vec<Option<Value>>>,
}

/// Loader resolving to [`MockWidget`]. Optionally held pending until the
/// paired sender fires, or failing.
#[derive(Clone)]
pub struct MockLoader {
    state: Rc<LoaderState>,
}

impl MockLoader {
    pub fn new(widget: MockWidget) -> Self {
        Self {
            state: Rc::new(LoaderState {
                widget,
                gate: RefCell::new(None),
                fail: Cell::new(false),
                loads: Cell::new(0),
                constructed: RefCell::new(Vec::new()),
            }),
        }
    }

    /// A loader whose `load` stays pending until the returned sender fires.
    pub fn gated(widget: MockWidget) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let loader = Self::new(widget);
        *loader.state.gate.borrow_mut() = Some(rx);
        (loader, tx)
    }

    pub fn failing(widget: MockWidget) -> Self {
        let loader = Self::new(widget);
        loader.state.fail.set(true);
        loader
    }

    pub fn loads(&self) -> usize {
        self.state.loads.get()
    }

    /// Serialized options of every construction, in order.
    pub fn constructed(&self) -> Vec<Option<Value>> {
        self.state.constructed.borrow().clone()
    }
}

impl WidgetLoader for MockLoader {
    type Host = String;
    type Module = ();
    type Widget = MockWidget;
    type Error = String;

    fn load(&self) -> LocalBoxFuture<'static, Result<(), String>> {
        self.state.loads.set(self.state.loads.get() + 1);
        let gate = self.state.gate.borrow_mut().take();
        let fail = self.state.fail.get();
        async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if fail {
                Err("Cannot find module 'timepicker-ui'".to_string())
            } else {
                Ok(())
            }
        }
        .boxed_local()
    }

    fn construct(
        &self,
        _module: &(),
        _host: &String,
        options: Option<&TimepickerOptions<Value>>,
    ) -> Result<MockWidget, String> {
        let json = options.map(|o| o.to_json().map_err(|e| e.to_string())).transpose()?;
        self.state.constructed.borrow_mut().push(json);
        Ok(self.state.widget.clone())
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
