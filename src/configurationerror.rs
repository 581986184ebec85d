use thiserror::Error;

use crate::time::calendarerror::CalendarError;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid holiday rule: {0}")]
    Calendar(#[from] CalendarError),
}
