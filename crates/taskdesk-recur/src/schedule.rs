use chrono::{Datelike, Days, NaiveDate};

use crate::error::{RecurrenceError, Result};
use crate::rule::RepeatRule;

/// Canonical wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Yearly rules on Feb 29 scan at most this many years for a leap year.
const LEAP_SEARCH_YEARS: i32 = 100;

/// Parse a strict 8-digit `YYYYMMDD` date.
///
/// chrono's `%Y%m%d` accepts shorter digit runs, so the length is checked
/// explicitly before parsing.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecurrenceError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| RecurrenceError::InvalidDate(raw.to_string()))
}

/// Compute the next occurrence as a `YYYYMMDD` string.
///
/// The empty string is the "never recurs again" sentinel (weekly rule with
/// no match inside the 7-day window, yearly Feb-29 rule with no leap year
/// inside the search bound).
pub fn next_date(now: NaiveDate, date: &str, repeat: &str) -> Result<String> {
    Ok(match next_occurrence(now, date, repeat)? {
        Some(next) => next.format(DATE_FORMAT).to_string(),
        None => String::new(),
    })
}

/// Compute the next occurrence of a task after its stored date.
///
/// `now` is the reference date used by the monthly handler to decide whether
/// a candidate is still ahead; the daily handler deliberately ignores it and
/// always returns `stored + N` days.
pub fn next_occurrence(
    now: NaiveDate,
    date: &str,
    repeat: &str,
) -> Result<Option<NaiveDate>> {
    let rule = RepeatRule::parse(repeat)?;
    let stored = parse_date(date)?;

    match rule {
        // A task with no rule never reaches this path; recurrence is
        // mandatory here.
        RepeatRule::None => Err(RecurrenceError::InvalidRule(repeat.to_string())),
        RepeatRule::Daily { every_days } => Ok(next_daily(stored, every_days)),
        RepeatRule::Weekly { days } => Ok(next_weekly(stored, &days)),
        RepeatRule::Monthly { day } => Ok(next_monthly(now, stored, day)),
        RepeatRule::Yearly => Ok(next_yearly(stored)),
    }
}

/// `stored + N` days, with no reference-date comparison. The result can land
/// in the past relative to "now"; callers that need a future date keep
/// feeding the result back in.
fn next_daily(stored: NaiveDate, every_days: u32) -> Option<NaiveDate> {
    stored.checked_add_days(Days::new(u64::from(every_days)))
}

/// First date in `stored+1 ..= stored+7` whose weekday is in `days`.
///
/// A valid non-empty set always matches inside the window, so `None` is
/// unreachable with parsed input; it is kept as the sentinel anyway.
fn next_weekly(stored: NaiveDate, days: &[u8]) -> Option<NaiveDate> {
    for offset in 1..=7u64 {
        let candidate = stored.checked_add_days(Days::new(offset))?;
        // 1=Sunday … 7=Saturday
        let weekday = candidate.weekday().num_days_from_sunday() as u8 + 1;
        if days.contains(&weekday) {
            return Some(candidate);
        }
    }
    None
}

/// Day-of-month rule with month-length clamping.
///
/// Looks at the stored month first, then exactly one month ahead. The
/// single-month lookahead means a reference date far past the stored date
/// can yield a result that is not after `now`. That limitation is
/// load-bearing for compatibility and must not be "fixed" here.
fn next_monthly(now: NaiveDate, stored: NaiveDate, day: u8) -> Option<NaiveDate> {
    let mut year = stored.year();
    let mut month = stored.month();

    match NaiveDate::from_ymd_opt(year, month, u32::from(day)) {
        // The day exists in the stored month and is still ahead of `now`.
        Some(candidate) if candidate > now => return Some(candidate),
        Some(_) => {}
        // The day overflows the stored month: its last day stands in.
        None => {
            let last = last_day_of_month(year, month)?;
            if last > now {
                return Some(last);
            }
        }
    }

    month += 1;
    if month > 12 {
        month = 1;
        year += 1;
    }
    match NaiveDate::from_ymd_opt(year, month, u32::from(day)) {
        Some(candidate) => Some(candidate),
        None => last_day_of_month(year, month),
    }
}

/// Same month/day one year ahead; Feb 29 waits for the next leap year.
fn next_yearly(stored: NaiveDate) -> Option<NaiveDate> {
    let (year, month, day) = (stored.year(), stored.month(), stored.day());

    if month == 2 && day == 29 {
        // Bounded search keeps the loop finite even if the calendar rules
        // were to change; under Gregorian rules a leap year always exists
        // within the bound.
        for candidate_year in year + 1..=year + LEAP_SEARCH_YEARS {
            if let Some(next) = NaiveDate::from_ymd_opt(candidate_year, 2, 29) {
                return Some(next);
            }
        }
        return None;
    }

    let target = year + 1;
    // The clamp is defensive: with Feb 29 excluded above, every remaining
    // month/day exists in the target year.
    NaiveDate::from_ymd_opt(target, month, day).or_else(|| last_day_of_month(target, month))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|first| first.pred_opt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_date_parse_rejects_short_input() {
        // chrono alone would accept "2023121" as 2023-12-01
        assert!(parse_date("2023121").is_err());
        assert!(parse_date("20231301").is_err());
        assert!(parse_date("2023-12-01").is_err());
        assert_eq!(
            parse_date("20231201").unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
        );
    }

    #[test]
    fn last_day_handles_december_rollover() {
        assert_eq!(
            last_day_of_month(2023, 12).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        assert_eq!(
            last_day_of_month(2024, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
