use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::error::{EventError, EventResult};

/// A Unix timestamp carried by an update field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(epoch: i64) -> Self {
        Self(epoch)
    }

    /// Seconds since the Unix epoch, as received.
    pub fn epoch(self) -> i64 {
        self.0
    }

    /// The timestamp as a UTC date-time.
    pub fn to_datetime(self) -> EventResult<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0).ok_or(EventError::InvalidTimestamp(self.0))
    }

    /// Formats the timestamp in UTC with a strftime-style directive.
    ///
    /// # Errors
    ///
    /// [`EventError::InvalidFormat`] for an unknown or unsupported directive,
    /// [`EventError::InvalidTimestamp`] if the epoch is out of range.
    pub fn format(self, directive: &str) -> EventResult<String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(directive).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(EventError::InvalidFormat(directive.to_string()));
        }
        let datetime = self.to_datetime()?;
        let mut out = String::new();
        write!(out, "{}", datetime.format_with_items(items.iter()))
            .map_err(|_| EventError::InvalidFormat(directive.to_string()))?;
        Ok(out)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
