//! Time helpers
//!
//! "Today" is the UTC calendar day everywhere in the server.

use chrono::{DateTime, NaiveTime, Utc};

/// 00:00:00 UTC of the day containing `now`
pub fn start_of_day_utc(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Compact timestamp for file names, e.g. `20240501_083000`
pub fn file_stamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}
