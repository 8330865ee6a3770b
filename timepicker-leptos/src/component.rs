use std::rc::Rc;

use leptos::*;
use log::error;
use wasm_bindgen::JsValue;

use timepicker_core::{
    Handler, TimepickerController, TimepickerEvent, TimepickerOptions,
    TimepickerProps as CoreProps,
    TimepickerWidget, EVENT_COUNT,
};

use crate::loader::{is_ssr, JsLoader, LoaderConfig};
use crate::widget::{EventData, JsTimepicker};

/// Options as taken by [`Timepicker`]. Compared by `Rc` identity: wrap a new
/// `Rc` to push an update, keep the same one to avoid it.
pub type Options = Rc<TimepickerOptions<EventData>>;

/// Callback taken by the `on_*` props of [`Timepicker`].
pub type EventHandler = Handler<EventData>;

/// Text input enhanced with the timepicker-ui widget.
///
/// With `value` set the input is controlled and read-only; otherwise
/// `default_value` seeds it once and the widget owns it from then on.
/// Callbacks from `options.callbacks` run before the matching `on_*` prop.
/// Any other attribute (`attr:placeholder`, `attr:class`, ...) is put on the
/// input as-is.
#[component]
pub fn Timepicker(
    #[prop(optional, into)] options: MaybeProp<Options>,
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional, into)] on_confirm: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_cancel: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_open: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_update: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_select_hour: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_select_minute: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_select_am: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_select_pm: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_error: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_timezone_change: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_range_confirm: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_range_switch: MaybeProp<EventHandler>,
    #[prop(optional, into)] on_range_validation: MaybeProp<EventHandler>,
    /// Resolves to the underlying `<input>`.
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Input>>,
    /// Imperative access to the live widget.
    #[prop(optional)]
    picker_ref: Option<TimepickerRef>,
    #[prop(optional)] loader: Option<LoaderConfig>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(create_node_ref::<html::Input>);
    let loader = JsLoader::new(loader.unwrap_or_default());

    let options = Signal::derive(move || options.get());
    let value = Signal::derive(move || value.get());
    let callbacks: [(TimepickerEvent, Signal<Option<EventHandler>>); EVENT_COUNT] = [
        (TimepickerEvent::Confirm, Signal::derive(move || on_confirm.get())),
        (TimepickerEvent::Cancel, Signal::derive(move || on_cancel.get())),
        (TimepickerEvent::Open, Signal::derive(move || on_open.get())),
        (TimepickerEvent::Update, Signal::derive(move || on_update.get())),
        (TimepickerEvent::SelectHour, Signal::derive(move || on_select_hour.get())),
        (TimepickerEvent::SelectMinute, Signal::derive(move || on_select_minute.get())),
        (TimepickerEvent::SelectAm, Signal::derive(move || on_select_am.get())),
        (TimepickerEvent::SelectPm, Signal::derive(move || on_select_pm.get())),
        (TimepickerEvent::Error, Signal::derive(move || on_error.get())),
        (TimepickerEvent::TimezoneChange, Signal::derive(move || on_timezone_change.get())),
        (TimepickerEvent::RangeConfirm, Signal::derive(move || on_range_confirm.get())),
        (TimepickerEvent::RangeSwitch, Signal::derive(move || on_range_switch.get())),
        (TimepickerEvent::RangeValidation, Signal::derive(move || on_range_validation.get())),
    ];

    let read_props = {
        let default_value = default_value.clone();
        move || CoreProps {
            options: options.get(),
            value: value.get(),
            default_value: default_value.clone(),
            callbacks: callbacks
                .iter()
                .filter_map(|(event, handler)| handler.get().map(|h| (*event, h)))
                .collect(),
        }
    };

    let controller = TimepickerController::<JsTimepicker>::new(untrack(&read_props));
    if let Some(picker_ref) = picker_ref {
        picker_ref.bind(controller.clone());
    }

    // Push prop changes into the widget.
    create_effect({
        let controller = controller.clone();
        move |_| controller.reconcile(read_props())
    });

    // Build the widget once the input exists.
    create_effect({
        let controller = controller.clone();
        move |_| {
            let Some(input) = node_ref.get() else {
                return;
            };
            let host = if is_ssr() {
                None
            } else {
                Some((*input).clone())
            };
            let controller = controller.clone();
            let loader = loader.clone();
            // Not awaited: a failed load ends up as an unhandled rejection.
            let _ = wasm_bindgen_futures::future_to_promise(async move {
                match controller.mount(&loader, host).await {
                    Ok(_) => Ok(JsValue::UNDEFINED),
                    Err(err) => {
                        error!("Failed to load timepicker-ui: {}", err);
                        Err(err.into())
                    }
                }
            });
        }
    });

    on_cleanup(move || controller.unmount());

    let displayed = move || value.get().or_else(|| default_value.clone());

    view! {
        <input
            type="text"
            {..attributes}
            node_ref=node_ref
            value=displayed
            readonly=move || value.with(Option::is_some)
        />
    }
}

/// Handle for calling into the widget of a [`Timepicker`].
///
/// Create one with [`create_timepicker_ref`] and pass it as `picker_ref`.
/// Every method is a no-op (or returns `None`) until the widget exists and
/// after it is destroyed.
#[derive(Clone, Copy)]
pub struct TimepickerRef {
    controller: StoredValue<Option<TimepickerController<JsTimepicker>>>,
}

impl TimepickerRef {
    fn bind(&self, controller: TimepickerController<JsTimepicker>) {
        self.controller.set_value(Some(controller));
    }

    fn with_widget<R>(&self, f: impl FnOnce(&JsTimepicker) -> R) -> Option<R> {
        self.controller
            .get_value()
            .and_then(|controller| controller.with_instance(f))
    }

    pub fn is_ready(&self) -> bool {
        self.with_widget(|_| ()).is_some()
    }

    pub fn open(&self) {
        self.with_widget(|widget| widget.open());
    }

    pub fn close(&self) {
        self.with_widget(|widget| widget.close());
    }

    /// Time currently shown by the widget.
    pub fn value(&self) -> Option<String> {
        self.with_widget(|widget| widget.value())
    }
}

pub fn create_timepicker_ref() -> TimepickerRef {
    TimepickerRef {
        controller: store_value(None),
    }
}
