//! Day filters narrowing an interval to particular days or weekdays.

use chrono::{Datelike, NaiveDate};

/// Weekday number of `date`, 1-7 with 1 = Sunday.
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_sunday()
}

/// A set of weekday numbers (1 = Sunday .. 7 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub fn single(weekday: u32) -> Self {
        let mut set = WeekdaySet::default();
        set.insert(weekday);
        set
    }

    /// Walk forward from `start` to `end` inclusive, wrapping from 7 back
    /// to 1. "F-M" is Friday, Saturday, Sunday, Monday.
    pub fn range(start: u32, end: u32) -> Self {
        let mut set = WeekdaySet::default();
        let mut day = start;
        while day != end {
            set.insert(day);
            day = day % 7 + 1;
        }
        set.insert(end);
        set
    }

    pub fn insert(&mut self, weekday: u32) {
        debug_assert!((1..=7).contains(&weekday));
        self.0 |= 1 << (weekday - 1);
    }

    pub fn contains(&self, weekday: u32) -> bool {
        (1..=7).contains(&weekday) && self.0 & (1 << (weekday - 1)) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=7).filter(move |d| self.contains(*d))
    }
}

/// Predicate over a single date. Filters of one clause are OR-combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    /// No filter was written; every date matches.
    AlwaysTrue,
    DayMatch { day: u32 },
    DayRange { low: u32, high: u32 },
    WeekdaySet(WeekdaySet),
}

impl DayFilter {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DayFilter::AlwaysTrue => true,
            DayFilter::DayMatch { day } => date.day() == *day,
            DayFilter::DayRange { low, high } => (*low..=*high).contains(&date.day()),
            DayFilter::WeekdaySet(set) => set.contains(weekday_number(date)),
        }
    }
}

/// True when any filter in `filters` matches.
pub fn any_matches(filters: &[DayFilter], date: NaiveDate) -> bool {
    filters.iter().any(|filter| filter.matches(date))
}
