//! Calendar-aware elapsed time and its humanized phrase.

use chrono::{DateTime, Datelike, Months, Utc};

use crate::interpreter::plural::plural_text;

/// Whole units elapsed between two instants.
///
/// Each field is computed on its own against calendar semantics rather than
/// derived from the others, so `months` is not `years * 12 + something`.
/// Fields are never negative: an instant in the future counts as no time
/// elapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Elapsed {
    /// Measure the time from `then` to `now`.
    pub fn between(now: DateTime<Utc>, then: DateTime<Utc>) -> Elapsed {
        let delta = now.signed_duration_since(then);
        let year_span = i64::from(now.year() - then.year());
        let month_span = year_span * 12 + i64::from(now.month()) - i64::from(then.month());

        Elapsed {
            years: whole_months(now, then, year_span, 12),
            months: whole_months(now, then, month_span, 1),
            days: delta.num_days().max(0),
            hours: delta.num_hours().max(0),
            minutes: delta.num_minutes().max(0),
        }
    }
}

/// Largest `n <= candidate` such that `then` plus `n * unit` calendar months
/// does not pass `now`.
fn whole_months(now: DateTime<Utc>, then: DateTime<Utc>, candidate: i64, unit: u32) -> i64 {
    let mut count = candidate.max(0);
    while count > 0 && !reaches(now, then, count, unit) {
        count -= 1;
    }
    count
}

fn reaches(now: DateTime<Utc>, then: DateTime<Utc>, count: i64, unit: u32) -> bool {
    u32::try_from(count)
        .ok()
        .and_then(|count| count.checked_mul(unit))
        .and_then(|months| then.checked_add_months(Months::new(months)))
        .is_some_and(|shifted| shifted <= now)
}

/// Describe how long ago `then` was, relative to `now`.
///
/// Picks the first matching bucket: under five minutes is "right now", then
/// minutes, hours, days (below 31), months (below 12), and finally years.
///
/// # Example
///
/// ```
/// use blame_text::interpreter::humanize;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
/// assert_eq!(humanize(now, now - Duration::minutes(3)), "right now");
/// assert_eq!(humanize(now, now - Duration::hours(1)), "1 hour ago");
/// assert_eq!(humanize(now, now - Duration::days(400)), "1 year ago");
/// ```
pub fn humanize(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = Elapsed::between(now, then);

    if elapsed.minutes < 5 {
        "right now".to_string()
    } else if elapsed.minutes < 60 {
        format!("{} minutes ago", elapsed.minutes)
    } else if elapsed.hours < 24 {
        format!("{} ago", plural_text(elapsed.hours, "hour", "hours"))
    } else if elapsed.days < 31 {
        format!("{} ago", plural_text(elapsed.days, "day", "days"))
    } else if elapsed.months < 12 {
        format!("{} ago", plural_text(elapsed.months, "month", "months"))
    } else {
        format!("{} ago", plural_text(elapsed.years, "year", "years"))
    }
}
