//! Calendar-accurate age decomposition.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An age decomposed into whole calendar years, months, and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    /// Whole years elapsed.
    pub years: u32,
    /// Whole months beyond the last full year.
    pub months: u32,
    /// Days beyond the last full month.
    pub days: u32,
}

/// Parses a date of birth and decomposes the age as of `today`.
///
/// Returns `None` when the input is empty or not a valid ISO-8601 date
/// (`YYYY-MM-DD`). A date of birth in the future clamps to an all-zero
/// age rather than going negative.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hishab_engine::calculation::calculate_age;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let age = calculate_age("2000-03-10", today).unwrap();
/// assert_eq!((age.years, age.months, age.days), (25, 3, 5));
///
/// assert!(calculate_age("not-a-date", today).is_none());
/// ```
pub fn calculate_age(date_of_birth: &str, today: NaiveDate) -> Option<AgeBreakdown> {
    let trimmed = date_of_birth.trim();
    if trimmed.is_empty() {
        return None;
    }
    let dob: NaiveDate = trimmed.parse().ok()?;
    Some(age_between(dob, today))
}

/// Decomposes the interval from `dob` to `today` into years, months, and
/// days.
///
/// The decomposition anchors whole months at the date of birth's
/// day-of-month, clamping to month end where the target month is shorter
/// (a 31st-of-month birth anniversary lands on the 28th/29th/30th), and
/// counts the remaining days exactly. A future `dob` clamps to zero.
pub fn age_between(dob: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    if dob > today {
        return AgeBreakdown::default();
    }

    let mut total_months =
        (today.year() - dob.year()) * 12 + today.month() as i32 - dob.month() as i32;
    // The month difference overshoots when today's day-of-month has not yet
    // reached the anniversary day.
    if total_months > 0 {
        let anchor = dob
            .checked_add_months(Months::new(total_months as u32))
            .expect("anchor date within calendar range");
        if anchor > today {
            total_months -= 1;
        }
    }

    let anchor = dob
        .checked_add_months(Months::new(total_months as u32))
        .expect("anchor date within calendar range");
    let days = (today - anchor).num_days() as u32;

    AgeBreakdown {
        years: (total_months / 12) as u32,
        months: (total_months % 12) as u32,
        days,
    }
}
