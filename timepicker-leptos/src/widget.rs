use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use log::{error, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use timepicker_core::{
    decode_payload, Handler, TimepickerError, TimepickerEvent, TimepickerOptions, TimepickerWidget,
};

use crate::bindings::TimepickerUI;
use crate::loader::options_to_js;

/// Raw payload of a widget event.
#[derive(Debug, Clone)]
pub struct EventData(JsValue);

impl EventData {
    pub fn new(raw: JsValue) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &JsValue {
        &self.0
    }

    /// Decode into one of the typed payloads, e.g.
    /// [`timepicker_core::ConfirmEventData`].
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, TimepickerError> {
        let json = js_sys::JSON::stringify(&self.0)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| "{}".to_string());
        decode_payload(&json)
    }
}

struct Listener {
    event: TimepickerEvent,
    handler: Handler<EventData>,
    closure: Closure<dyn Fn(JsValue)>,
}

/// [`TimepickerWidget`] backed by a JavaScript `TimepickerUI` instance.
///
/// Every Rust handler passed to `on` gets its own JS closure, kept alive here
/// until the matching `off` (or `destroy`) so the emitter can be handed the
/// same function object both times.
#[derive(Clone)]
pub struct JsTimepicker {
    inner: TimepickerUI,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl JsTimepicker {
    pub fn new(inner: TimepickerUI) -> Self {
        Self {
            inner,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn raw(&self) -> &TimepickerUI {
        &self.inner
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl TimepickerWidget for JsTimepicker {
    type Payload = EventData;
    type Wrapper = web_sys::HtmlElement;

    fn create(&self) {
        self.inner.create();
    }

    fn destroy(&self) {
        self.inner.destroy();
        // The instance is gone, nothing will call these anymore.
        self.listeners.borrow_mut().clear();
    }

    fn open(&self) {
        self.inner.open();
    }

    fn close(&self) {
        self.inner.close();
    }

    fn set_value(&self, value: &str, trigger_update: bool) {
        self.inner.set_value(value, trigger_update);
    }

    fn value(&self) -> String {
        let value = self.inner.get_value();
        if let Some(text) = value.as_string() {
            return text;
        }
        Reflect::get(&value, &JsValue::from_str("time"))
            .ok()
            .and_then(|time| time.as_string())
            .unwrap_or_default()
    }

    fn update(&self, options: &TimepickerOptions<EventData>, create: bool) {
        let options = match options_to_js(options) {
            Ok(options) => options,
            Err(err) => {
                error!("Skipping timepicker update: {}", err);
                return;
            }
        };
        let params = Object::new();
        for (key, value) in [("options", options), ("create", JsValue::from_bool(create))] {
            if let Err(err) = Reflect::set(&params, &JsValue::from_str(key), &value) {
                warn!("Could not set {} on timepicker update: {:?}", key, err);
            }
        }
        self.inner.update(&params);
    }

    fn on(&self, event: TimepickerEvent, handler: &Handler<EventData>) {
        let callback = handler.clone();
        let closure = Closure::<dyn Fn(JsValue)>::new(move |data: JsValue| {
            callback.call(&EventData::new(data));
        });
        self.inner.on(event.topic(), closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push(Listener {
            event,
            handler: handler.clone(),
            closure,
        });
    }

    fn off(&self, event: TimepickerEvent, handler: &Handler<EventData>) {
        let listener = {
            let mut listeners = self.listeners.borrow_mut();
            listeners
                .iter()
                .position(|l| l.event == event && l.handler == *handler)
                .map(|index| listeners.remove(index))
        };
        match listener {
            Some(listener) => self
                .inner
                .off(event.topic(), listener.closure.as_ref().unchecked_ref()),
            None => warn!("No timepicker listener registered for {}", event),
        }
    }

    fn once(&self, event: TimepickerEvent, handler: &Handler<EventData>) {
        let callback = handler.clone();
        let function = Closure::once_into_js(move |data: JsValue| {
            callback.call(&EventData::new(data));
        });
        self.inner.once(event.topic(), function.unchecked_ref());
    }

    fn wrapper(&self) -> Option<web_sys::HtmlElement> {
        self.inner.get_wrapper()
    }
}
