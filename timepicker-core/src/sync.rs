//! Value and options synchronizers.

use log::debug;

use crate::options::TimepickerOptions;
use crate::widget::TimepickerWidget;

/// Pushes controlled values into the widget, skipping repeats.
#[derive(Debug, Default)]
pub struct ValueSync {
    last_pushed: Option<String>,
}

impl ValueSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `value` needs a push and record it if so. Split from
    /// the widget call so callers can release their own borrows first.
    pub fn plan(&mut self, value: Option<&str>) -> Option<String> {
        let value = value?;
        if self.last_pushed.as_deref() == Some(value) {
            return None;
        }
        self.last_pushed = Some(value.to_string());
        Some(value.to_string())
    }
}

pub(crate) fn apply_value<W: TimepickerWidget>(widget: &W, value: &str) {
    debug!("Setting timepicker value to {}", value);
    widget.set_value(value, true);
}

/// Pushes configuration objects into the widget.
///
/// There is no content comparison here: the caller decides when the options
/// changed (by identity) and every call with options present is a push.
pub struct OptionsSync;

impl OptionsSync {
    pub fn push<W: TimepickerWidget>(
        widget: Option<&W>,
        options: Option<&TimepickerOptions<W::Payload>>,
    ) -> bool {
        let (Some(widget), Some(options)) = (widget, options) else {
            return false;
        };
        debug!("Updating timepicker options");
        widget.update(options, true);
        true
    }
}
