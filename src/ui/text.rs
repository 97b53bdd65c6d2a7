//! Strings shown by the watchface, recomputed from the clock on every tick.

use alloc::string::{String, ToString};

use chrono::NaiveDateTime;

use crate::host::ClockStyle;

/// `13:05` or `01:05` depending on the hour style.
pub fn format_time(time: &NaiveDateTime, style: ClockStyle) -> String {
    let pattern = match style {
        ClockStyle::TwentyFourHour => "%H:%M",
        ClockStyle::TwelveHour => "%I:%M",
    };
    time.format(pattern).to_string()
}

/// Day and month, `07/03`.
pub fn format_date(time: &NaiveDateTime) -> String {
    time.format("%d/%m").to_string()
}

/// Abbreviated weekday, `Thu`.
pub fn format_weekday(time: &NaiveDateTime) -> String {
    time.format("%a").to_string()
}
