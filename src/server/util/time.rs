//! Kitchen clock helpers.
//!
//! Labels carry kitchen-local wall clock times, so "now" is taken from the server's local
//! time zone rather than UTC. Services receive this value as a parameter, which keeps them
//! deterministic under test.

use chrono::{Local, NaiveDateTime, Timelike};

/// Current kitchen-local time, truncated to whole seconds
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();

    now.with_nanosecond(0).unwrap_or(now)
}
