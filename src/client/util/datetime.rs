use chrono::{Local, NaiveDateTime, Timelike};

/// Value format of `datetime-local` inputs
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Current kitchen-local time, truncated to the minute
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();

    now.with_second(0)
        .and_then(|now| now.with_nanosecond(0))
        .unwrap_or(now)
}

pub fn to_input(timestamp: NaiveDateTime) -> String {
    timestamp.format(INPUT_FORMAT).to_string()
}

/// Parses a `datetime-local` value, `None` when blank or malformed
pub fn from_input(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}
