use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};

/// Format shared by every timestamp in endpoint payloads.
///
/// Lexicographic order of formatted values is chronological.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn system_time_to_datetime(time: std::io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    time.ok().and_then(|t| {
        t.duration_since(SystemTime::UNIX_EPOCH)
            .ok()
            .and_then(|d| DateTime::from_timestamp(d.as_secs() as i64, d.subsec_nanos()))
    })
}

#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time in [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
