use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::callbacks::CallbackBag;

/// Configuration handed to the widget constructor and to `update`.
///
/// Every field is optional; unset fields are left out of the serialized
/// object so the widget falls back to its own defaults. Options groups this
/// crate does not model (for example the `range` and `timezone` plugin
/// groups) go into `extra` and are passed through verbatim.
///
/// The component compares options by `Rc` identity, never by content: a new
/// `Rc` always triggers an update even if it holds equal values.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimepickerOptions<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<ClockOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<BehaviorOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Callbacks set through the options rather than through component
    /// props. They run before the prop callbacks of the same event.
    #[serde(skip)]
    pub callbacks: Option<Rc<CallbackBag<P>>>,
}

impl<P> TimepickerOptions<P> {
    pub fn new() -> Self {
        Self {
            clock: None,
            ui: None,
            labels: None,
            behavior: None,
            extra: Map::new(),
            callbacks: None,
        }
    }

    pub fn with_clock(mut self, clock: ClockOptions) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_ui(mut self, ui: UiOptions) -> Self {
        self.ui = Some(ui);
        self
    }

    pub fn with_labels(mut self, labels: LabelsOptions) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorOptions) -> Self {
        self.behavior = Some(behavior);
        self
    }

    pub fn with_callbacks(mut self, callbacks: CallbackBag<P>) -> Self {
        self.callbacks = Some(Rc::new(callbacks));
        self
    }

    /// Pass an unmodelled option group (e.g. `"range"`) through as-is.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Serialize to the JSON object shape the widget expects.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl<P> Default for TimepickerOptions<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for TimepickerOptions<P> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            ui: self.ui.clone(),
            labels: self.labels.clone(),
            behavior: self.behavior.clone(),
            extra: self.extra.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<P> fmt::Debug for TimepickerOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimepickerOptions")
            .field("clock", &self.clock)
            .field("ui", &self.ui)
            .field("labels", &self.labels)
            .field("behavior", &self.behavior)
            .field("extra", &self.extra)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

// ============================================================================
// Option groups
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockType {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub clock_type: Option<ClockType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_switch_to_minutes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth_hour_snap: Option<bool>,
    /// `{ hours, minutes, interval }` as the widget defines it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_time: Option<Value>,
    /// `true` or `{ time, updateInput, locales, preventClockType }`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiOptions {
    /// Theme name, e.g. `"basic"`, `"dark"`, `"m3-green"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_switch_icon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_scrollbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_modal_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_template_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub am: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_minute: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_input_after_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_trap: Option<bool>,
    /// Debounce in milliseconds for clock interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_handler: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
