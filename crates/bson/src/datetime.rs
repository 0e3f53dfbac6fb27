use chrono::{SecondsFormat, TimeZone, Utc};
use std::fmt;

/// A UTC instant stored as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateTime(i64);

impl DateTime {
    /// The Unix epoch.
    pub const UNIX_EPOCH: DateTime = DateTime(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn timestamp_millis(self) -> i64 {
        self.0
    }

    /// Converts to a `chrono` instant. Returns `None` outside chrono's range.
    pub fn to_chrono(self) -> Option<chrono::DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// RFC 3339 with millisecond precision, e.g. `2024-01-02T03:04:05.006Z`.
    pub fn to_rfc3339(self) -> Option<String> {
        self.to_chrono()
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// True when the year lies in `1970..=9999`, the range relaxed extended
    /// JSON prints as an ISO string.
    pub(crate) fn has_iso_form(self) -> bool {
        use chrono::Datelike;
        self.to_chrono()
            .map(|dt| (1970..=9999).contains(&dt.year()))
            .unwrap_or(false)
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_rfc3339() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "DateTime({})", self.0),
        }
    }
}
