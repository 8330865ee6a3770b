//! Leptos component for the timepicker-ui widget.
//!
//! ```ignore
//! use leptos::*;
//! use timepicker_leptos::*;
//!
//! view! {
//!     <Timepicker
//!         default_value="09:30"
//!         attr:placeholder="Select time"
//!         on_confirm=EventHandler::new(|data: &EventData| {
//!             if let Ok(time) = data.parse::<ConfirmEventData>() {
//!                 log::info!("Picked {}", time.display());
//!             }
//!         })
//!     />
//! }
//! ```

pub mod bindings;
pub mod component;
pub mod loader;
pub mod widget;

pub use component::{create_timepicker_ref, EventHandler, Options, Timepicker, TimepickerRef};
pub use loader::{is_ssr, JsLoader, LoadError, LoaderConfig};
pub use widget::{EventData, JsTimepicker};

pub use timepicker_core::{
    BehaviorOptions, CallbackBag, CancelEventData, ClockOptions, ClockType, ConfirmEventData,
    ErrorEventData, Handler, LabelsOptions, OpenEventData, RangeConfirmEventData, RangePart,
    RangeSwitchEventData, RangeValidationEventData, SelectAmEventData, SelectHourEventData,
    SelectMinuteEventData, SelectPmEventData, TimeEventData, TimepickerError, TimepickerEvent,
    TimepickerOptions, TimezoneChangeEventData, UiOptions, UpdateEventData,
};
