//! Timestamp formatting for entry headers
//!
//! Entries carry their timestamp already rendered as
//! `yyyy-MM-dd--HH.mm.ss`, in local time or UTC.

use chrono::{DateTime, Local, Utc};

/// strftime pattern for `yyyy-MM-dd--HH.mm.ss`
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d--%H.%M.%S";

/// Clock used when stamping a new entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampMode {
    #[default]
    Local,
    Utc,
}

impl TimestampMode {
    pub fn from_utc_flag(use_utc: bool) -> Self {
        if use_utc {
            TimestampMode::Utc
        } else {
            TimestampMode::Local
        }
    }

    /// Render the current instant
    #[must_use]
    pub fn now(&self) -> String {
        match self {
            TimestampMode::Local => format_local(&Local::now()),
            TimestampMode::Utc => format_utc(&Utc::now()),
        }
    }
}

#[must_use]
pub fn format_utc(datetime: &DateTime<Utc>) -> String {
    datetime.format(TIMESTAMP_PATTERN).to_string()
}

#[must_use]
pub fn format_local(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_PATTERN).to_string()
}
