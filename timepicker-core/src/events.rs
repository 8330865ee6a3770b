use std::fmt;
use std::str::FromStr;

use crate::error::TimepickerError;

/// Number of events the widget emits that the bindings forward.
pub const EVENT_COUNT: usize = 13;

// ============================================================================
// Event catalogue
// ============================================================================

/// Events emitted by the timepicker-ui widget.
///
/// Each event has a wire topic (the name passed to the widget's `on`/`off`)
/// and a callback prop name (the key used in the widget's `callbacks` option
/// group and, in camelCase, by JavaScript integrators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimepickerEvent {
    Confirm,
    Cancel,
    Open,
    Update,
    SelectHour,
    SelectMinute,
    SelectAm,
    SelectPm,
    Error,
    TimezoneChange,
    RangeConfirm,
    RangeSwitch,
    RangeValidation,
}

impl TimepickerEvent {
    /// All events, in subscription order.
    pub const ALL: [TimepickerEvent; EVENT_COUNT] = [
        TimepickerEvent::Confirm,
        TimepickerEvent::Cancel,
        TimepickerEvent::Open,
        TimepickerEvent::Update,
        TimepickerEvent::SelectHour,
        TimepickerEvent::SelectMinute,
        TimepickerEvent::SelectAm,
        TimepickerEvent::SelectPm,
        TimepickerEvent::Error,
        TimepickerEvent::TimezoneChange,
        TimepickerEvent::RangeConfirm,
        TimepickerEvent::RangeSwitch,
        TimepickerEvent::RangeValidation,
    ];

    /// Topic name on the widget's event emitter.
    pub fn topic(self) -> &'static str {
        match self {
            TimepickerEvent::Confirm => "confirm",
            TimepickerEvent::Cancel => "cancel",
            TimepickerEvent::Open => "open",
            TimepickerEvent::Update => "update",
            TimepickerEvent::SelectHour => "select:hour",
            TimepickerEvent::SelectMinute => "select:minute",
            TimepickerEvent::SelectAm => "select:am",
            TimepickerEvent::SelectPm => "select:pm",
            TimepickerEvent::Error => "error",
            TimepickerEvent::TimezoneChange => "timezone:change",
            TimepickerEvent::RangeConfirm => "range:confirm",
            TimepickerEvent::RangeSwitch => "range:switch",
            TimepickerEvent::RangeValidation => "range:validation",
        }
    }

    /// Callback name as it appears in the widget's `callbacks` options.
    pub fn prop_name(self) -> &'static str {
        match self {
            TimepickerEvent::Confirm => "onConfirm",
            TimepickerEvent::Cancel => "onCancel",
            TimepickerEvent::Open => "onOpen",
            TimepickerEvent::Update => "onUpdate",
            TimepickerEvent::SelectHour => "onSelectHour",
            TimepickerEvent::SelectMinute => "onSelectMinute",
            TimepickerEvent::SelectAm => "onSelectAM",
            TimepickerEvent::SelectPm => "onSelectPM",
            TimepickerEvent::Error => "onError",
            TimepickerEvent::TimezoneChange => "onTimezoneChange",
            TimepickerEvent::RangeConfirm => "onRangeConfirm",
            TimepickerEvent::RangeSwitch => "onRangeSwitch",
            TimepickerEvent::RangeValidation => "onRangeValidation",
        }
    }

    /// Position of the event in [`TimepickerEvent::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimepickerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.topic())
    }
}

impl FromStr for TimepickerEvent {
    type Err = TimepickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimepickerEvent::ALL
            .into_iter()
            .find(|event| event.topic() == s)
            .ok_or_else(|| TimepickerError::UnknownTopic(s.to_string()))
    }
}
