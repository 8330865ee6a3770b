use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Decode an event payload, given as JSON text, into one of the typed
/// event data structs below.
pub fn decode_payload<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// The widget reports hours and minutes as strings, but some code paths hand
/// out plain numbers. Accept both.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

// ============================================================================
// Time selection events
// ============================================================================

/// Payload of `confirm`, `cancel`, `update`, `select:am` and `select:pm`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEventData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub hour: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub minutes: Option<String>,
    /// `"AM"` / `"PM"` in 12h mode, absent in 24h mode.
    #[serde(default, rename = "type")]
    pub period: Option<String>,
}

impl TimeEventData {
    /// Render as `HH:MM`, with the period appended when present.
    pub fn display(&self) -> Option<String> {
        let hour = self.hour.as_deref()?;
        let minutes = self.minutes.as_deref()?;
        Some(match self.period.as_deref() {
            Some(period) if !period.is_empty() => format!("{}:{} {}", hour, minutes, period),
            _ => format!("{}:{}", hour, minutes),
        })
    }
}

pub type ConfirmEventData = TimeEventData;
pub type CancelEventData = TimeEventData;
pub type UpdateEventData = TimeEventData;
pub type SelectAmEventData = TimeEventData;
pub type SelectPmEventData = TimeEventData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenEventData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub hour: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub minutes: Option<String>,
    #[serde(default, rename = "type")]
    pub period: Option<String>,
    #[serde(default)]
    pub degrees_hours: Option<f64>,
    #[serde(default)]
    pub degrees_minutes: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectHourEventData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub hour: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectMinuteEventData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub minutes: Option<String>,
}

// ============================================================================
// Validation and plugin events
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEventData {
    #[serde(default)]
    pub error: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_hour: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_min: Option<String>,
    #[serde(default)]
    pub current_type: Option<String>,
    #[serde(default)]
    pub current_length: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimezoneChangeEventData {
    #[serde(default)]
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeConfirmEventData {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    /// Length of the range in minutes.
    #[serde(default)]
    pub duration: Option<i64>,
}

/// Which end of a range is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePart {
    From,
    To,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSwitchEventData {
    pub active: RangePart,
    #[serde(default)]
    pub disabled_time: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeValidationEventData {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub min_duration: Option<i64>,
    #[serde(default)]
    pub max_duration: Option<i64>,
}
