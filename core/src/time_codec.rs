//! Duration and clock-time codec
//!
//! Respawn intervals are typed as loose `"2h 30m"` text and shown as
//! `HH:MM:SS` countdowns. Kill times are shown and edited as local
//! time-of-day, rendered with an explicit 24-hour format so output does not
//! depend on the browser locale.

use std::fmt::Display;

use chrono::{DateTime, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Format used by the "Time Killed" column
pub const CLOCK_DISPLAY_FORMAT: &str = "%H:%M:%S";

/// Format used to pre-fill the kill time editor (`<input type="time">`)
pub const CLOCK_INPUT_FORMAT: &str = "%H:%M";

/// Parse a respawn duration such as `"10h"`, `"2h 30m"` or `"150m"` into seconds.
///
/// Every `<digits><unit>` token with unit `h` or `m` contributes to the total;
/// anything else is skipped. Text without a single token parses as `0`.
pub fn parse_duration(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let mut total: u64 = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        let unit = match bytes.get(i) {
            Some(b'h') => SECS_PER_HOUR,
            Some(b'm') => SECS_PER_MINUTE,
            _ => continue,
        };

        // Digit runs too long for u64 saturate
        let value = text[start..i].parse::<u64>().unwrap_or(u64::MAX);
        total = total.saturating_add(value.saturating_mul(unit));
        i += 1;
    }

    total
}

/// Format seconds as `HH:MM:SS`.
///
/// Hours are padded to two digits and widen as needed (`"123:00:00"`).
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_secs % SECS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parse a time-of-day from the kill time editor (`HH:MM` or `HH:MM:SS`)
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

/// Render an instant as local wall-clock `HH:MM:SS`
pub fn format_clock_time<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(CLOCK_DISPLAY_FORMAT).to_string()
}

/// Render an instant as `HH:MM` for the kill time editor
pub fn format_clock_input<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(CLOCK_INPUT_FORMAT).to_string()
}

/// Convert epoch milliseconds into the given timezone
pub fn instant_from_millis<Tz: TimeZone>(tz: &Tz, millis: i64) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(millis).single()
}

/// Most recent instant at `time` that is not after `now`.
///
/// Today's occurrence is used when it has already passed, otherwise the same
/// time yesterday. Lets a kill be back-dated to earlier today or late last night.
pub fn most_recent_clock_time<Tz: TimeZone>(
    now: &DateTime<Tz>,
    time: NaiveTime,
) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();
    let candidate = resolve_local(&tz, today.and_time(time));
    if candidate <= *now {
        return candidate;
    }

    match today.pred_opt() {
        Some(yesterday) => resolve_local(&tz, yesterday.and_time(time)),
        None => candidate,
    }
}

/// Map a wall-clock time onto a timezone, tolerating DST transitions.
///
/// Ambiguous times resolve to the earlier instant. Times skipped by a
/// forward transition move forward by the size of the gap (02:30 in a
/// 02:00 to 03:00 jump becomes 03:30).
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(at) => at,
        LocalResult::Ambiguous(a, b) => {
            if a <= b {
                a
            } else {
                b
            }
        }
        LocalResult::None => {
            // Offset in force before the jump; transitions are never a day apart
            let before = tz.offset_from_utc_datetime(&(naive - TimeDelta::days(1)));
            let offset_secs = i64::from(before.fix().local_minus_utc());
            tz.from_utc_datetime(&(naive - TimeDelta::seconds(offset_secs)))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Timelike};
    use chrono_tz::Australia::Sydney;
    use chrono_tz::Tz;

    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        tz.from_local_datetime(
            &NaiveDate::from_ymd_opt(2025, 3, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn parses_hour_and_minute_tokens() {
        assert_eq!(parse_duration("10h"), 36_000);
        assert_eq!(parse_duration("2h30m"), 9_000);
        assert_eq!(parse_duration("2h 30m"), 9_000);
        assert_eq!(parse_duration("150m"), 9_000);
    }

    #[test]
    fn ignores_noise_between_tokens() {
        assert_eq!(parse_duration("respawn: 1h, then 5m!"), 3_900);
        assert_eq!(parse_duration("1h1h"), 7_200);
        // Digits without a unit are dropped
        assert_eq!(parse_duration("90 2m"), 120);
    }

    #[test]
    fn text_without_tokens_is_zero() {
        assert_eq!(parse_duration("garbage"), 0);
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("0h"), 0);
        assert_eq!(parse_duration("2H"), 0);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_duration("99999999999999999999999h"), u64::MAX);
        assert_eq!(parse_duration("18446744073709551615h 1m"), u64::MAX);
    }

    #[test]
    fn formats_clock_style_durations() {
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(48 * 3600), "48:00:00");
    }

    #[test]
    fn hour_field_widens_past_two_digits() {
        assert_eq!(format_duration(100 * 3600 + 61), "100:01:01");
    }

    #[test]
    fn parses_editor_clock_times() {
        assert_eq!(parse_clock_time("09:00"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_clock_time("23:59:30"), NaiveTime::from_hms_opt(23, 59, 30));
        assert_eq!(parse_clock_time(" 07:15 "), NaiveTime::from_hms_opt(7, 15, 0));
        assert_eq!(parse_clock_time(""), None);
        assert_eq!(parse_clock_time("25:00"), None);
        assert_eq!(parse_clock_time("noon"), None);
    }

    #[test]
    fn clock_time_earlier_today_stays_today() {
        let now = at(10, 14, 0);
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(most_recent_clock_time(&now, nine), at(10, 9, 0));
    }

    #[test]
    fn clock_time_later_today_rolls_back_a_day() {
        let now = at(10, 8, 0);
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(most_recent_clock_time(&now, nine), at(9, 9, 0));
    }

    #[test]
    fn clock_time_equal_to_now_is_not_future() {
        let now = at(10, 9, 0);
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(most_recent_clock_time(&now, nine), now);
    }

    #[test]
    fn clock_formats_use_local_offset() {
        let killed = at(10, 21, 5) + chrono::Duration::seconds(7);
        assert_eq!(format_clock_time(&killed), "21:05:07");
        assert_eq!(format_clock_input(&killed), "21:05");

        let utc = killed.with_timezone(&chrono::Utc);
        assert_eq!(utc.hour(), 19);
        assert_eq!(format_clock_time(&utc), "19:05:07");
    }

    fn sydney(day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
        Sydney
            .with_ymd_and_hms(2025, 10, day, hour, minute, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn skipped_clock_time_moves_forward_by_gap() {
        // Sydney jumps from 02:00 AEST to 03:00 AEDT on 2025-10-05
        let now = sydney(5, 14, 0);
        let half_past_two = NaiveTime::from_hms_opt(2, 30, 0).unwrap();

        let killed = most_recent_clock_time(&now, half_past_two);
        assert_eq!(format_clock_input(&killed), "03:30");
        assert_eq!(killed, sydney(5, 3, 30));
    }

    #[test]
    fn skipped_clock_time_after_now_rolls_back_a_day() {
        // 02:30 shifts to 03:30, which is still ahead of 03:10
        let now = sydney(5, 3, 10);
        let half_past_two = NaiveTime::from_hms_opt(2, 30, 0).unwrap();

        let killed = most_recent_clock_time(&now, half_past_two);
        assert_eq!(killed, sydney(4, 2, 30));
    }

    #[test]
    fn repeated_clock_time_picks_earlier_instant() {
        // Sydney falls back from 03:00 AEDT to 02:00 AEST on 2025-04-06
        let now = Sydney.with_ymd_and_hms(2025, 4, 6, 12, 0, 0).single().unwrap();
        let half_past_two = NaiveTime::from_hms_opt(2, 30, 0).unwrap();

        let killed = most_recent_clock_time(&now, half_past_two);
        assert_eq!(killed.offset().fix().local_minus_utc(), 11 * 3600);
        assert_eq!(format_clock_input(&killed), "02:30");
    }

    #[test]
    fn millis_round_trip_through_timezone() {
        let killed = at(10, 6, 30);
        let tz = *killed.offset();
        let back = instant_from_millis(&tz, killed.timestamp_millis()).unwrap();
        assert_eq!(back, killed);
    }
}
