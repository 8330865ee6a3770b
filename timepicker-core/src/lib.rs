//! Framework-independent core of the timepicker-ui bindings.
//!
//! The widget itself is an external collaborator reached through the
//! [`TimepickerWidget`] capability trait. This crate owns everything between
//! a declarative component and that widget: the lifecycle of the instance,
//! value and options synchronization, and the event bridge merging prop
//! callbacks with callbacks set through the options.

pub mod bridge;
pub mod callbacks;
pub mod controller;
pub mod error;
pub mod events;
pub mod options;
pub mod payload;
pub mod sync;
pub mod widget;

#[cfg(test)]
mod testing;

pub use bridge::{EventBridge, MergedHandlers};
pub use callbacks::{CallbackBag, Handler};
pub use controller::{MountOutcome, Phase, TimepickerController, TimepickerProps};
pub use error::{Result, TimepickerError};
pub use events::{TimepickerEvent, EVENT_COUNT};
pub use options::{
    BehaviorOptions, ClockOptions, ClockType, LabelsOptions, TimepickerOptions, UiOptions,
};
pub use payload::{
    decode_payload, CancelEventData, ConfirmEventData, ErrorEventData, OpenEventData,
    RangeConfirmEventData, RangePart, RangeSwitchEventData, RangeValidationEventData,
    SelectAmEventData, SelectHourEventData, SelectMinuteEventData, SelectPmEventData,
    TimeEventData, TimezoneChangeEventData, UpdateEventData,
};
pub use sync::{OptionsSync, ValueSync};
pub use widget::{TimepickerWidget, WidgetLoader};
