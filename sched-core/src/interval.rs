//! Contiguous inclusive date ranges within one year.

use chrono::NaiveDate;

use crate::error::{SchedError, SchedResult};

/// Number of the last day of `month` in `year`.
///
/// Tries 31, 30, 29 and 28 in that order and keeps the first that forms a
/// real date, so February follows leap years.
pub fn last_day(year: i32, month: u32) -> Option<u32> {
    [31, 30, 29, 28]
        .into_iter()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
}

/// Resolve a month/day pair against `year`.
pub fn date(year: i32, month: u32, day: u32) -> SchedResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(SchedError::InvalidDate { year, month, day })
}

/// Inclusive range `[start, end]`. A range with `start > end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateInterval { start, end }
    }

    /// From `(month, day)` to `(month, day)` in `year`.
    pub fn between(year: i32, start: (u32, u32), end: (u32, u32)) -> SchedResult<Self> {
        Ok(DateInterval::new(
            date(year, start.0, start.1)?,
            date(year, end.0, end.1)?,
        ))
    }

    /// Day 1 of `start_month` through the last day of `end_month`.
    pub fn months(year: i32, start_month: u32, end_month: u32) -> SchedResult<Self> {
        let end_day = last_day(year, end_month).ok_or(SchedError::InvalidDate {
            year,
            month: end_month,
            day: 1,
        })?;
        DateInterval::between(year, (start_month, 1), (end_month, end_day))
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    /// Dates in ascending order.
    pub fn days(&self) -> Days {
        Days {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateInterval {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over the days of a [`DateInterval`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.end);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_day() {
        assert_eq!(last_day(2025, 1), Some(31));
        assert_eq!(last_day(2025, 4), Some(30));
        assert_eq!(last_day(2025, 2), Some(28));
        assert_eq!(last_day(2024, 2), Some(29));
        assert_eq!(last_day(2025, 13), None);
    }

    #[test]
    fn test_months_covers_whole_months() {
        let interval = DateInterval::months(2025, 8, 9).unwrap();
        assert_eq!(interval.start, ymd(2025, 8, 1));
        assert_eq!(interval.end, ymd(2025, 9, 30));
        assert_eq!(interval.len(), 61);
        assert!(interval.contains(ymd(2025, 9, 30)));
        assert!(!interval.contains(ymd(2025, 10, 1)));
    }

    #[test]
    fn test_days_are_ascending_and_inclusive() {
        let days: Vec<NaiveDate> = DateInterval::between(2025, (1, 30), (2, 2)).unwrap().days().collect();
        assert_eq!(
            days,
            vec![ymd(2025, 1, 30), ymd(2025, 1, 31), ymd(2025, 2, 1), ymd(2025, 2, 2)]
        );
    }

    #[test]
    fn test_reversed_interval_is_empty() {
        let interval = DateInterval::between(2025, (3, 10), (3, 1)).unwrap();
        assert!(interval.is_empty());
        assert_eq!(interval.len(), 0);
        assert_eq!(interval.days().count(), 0);
    }

    #[test]
    fn test_days_is_restartable() {
        let interval = DateInterval::between(2025, (5, 1), (5, 3)).unwrap();
        assert_eq!(interval.days().count(), 3);
        assert_eq!(interval.days().count(), 3);
    }

    #[test]
    fn test_nonexistent_day_is_invalid_date() {
        let err = DateInterval::between(2025, (2, 30), (3, 1)).unwrap_err();
        assert!(matches!(
            err,
            SchedError::InvalidDate { year: 2025, month: 2, day: 30 }
        ));
    }

    #[test]
    fn test_century_leap_rules() {
        assert_eq!(last_day(1900, 2), Some(28));
        assert_eq!(last_day(2000, 2), Some(29));
    }
}
