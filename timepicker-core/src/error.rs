use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimepickerError {
    #[error("Unknown timepicker event topic: {0}")]
    UnknownTopic(String),

    #[error("Invalid event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimepickerError>;
