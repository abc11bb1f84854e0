//! `HH:MM:SS` timestamps for the video timeline.
//!
//! The displayed hour carries a +1 offset that every dashboard view has always
//! shown; `0` seconds renders as `01:00:00`.

use chrono::TimeDelta;

const HOUR_OFFSET: i64 = 1;

/// Formats `seconds` as zero-padded `HH:MM:SS`.
///
/// Fractional seconds are floored. Hours and minutes use floor division and
/// the seconds field a Euclidean remainder, so minutes and seconds stay in
/// `0..60` for negative input too (`-1` renders as `00:59:59`). Hours wider
/// than two digits are printed in full. NaN formats like `0`.
pub fn format_duration(seconds: f64) -> String {
    // `as` saturates infinities and maps NaN to 0.
    format_whole_seconds(seconds.floor() as i64)
}

fn format_whole_seconds(total: i64) -> String {
    let hours = total.div_euclid(3600);
    let minutes = total.rem_euclid(3600) / 60;
    let secs = total.rem_euclid(60);

    format!("{:02}:{minutes:02}:{secs:02}", hours + HOUR_OFFSET)
}

/// Same as [`format_duration`], flooring sub-second remainders of negative
/// deltas toward the earlier second.
pub fn format_time_delta(delta: TimeDelta) -> String {
    // `num_seconds` truncates toward zero; `subsec_nanos` carries the sign.
    let mut total = delta.num_seconds();
    if delta.subsec_nanos() < 0 {
        total -= 1;
    }
    format_whole_seconds(total)
}

pub fn format_std_duration(duration: std::time::Duration) -> String {
    format_duration(duration.as_secs_f64())
}
