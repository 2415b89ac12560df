//! Schedule ingestion.
//!
//! Each source line is `<date-expression> | <time-expression> | <description>`.
//! The line's dates and time pairs are crossed and every combination is
//! stored under its date, keyed by time pair.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::date_expr::DateExpression;
use crate::error::{SchedError, SchedResult};
use crate::time_expr::{TimeExpression, TimePair};

/// Events on one day, ordered by time pair.
pub type DayEvents = BTreeMap<TimePair, String>;

/// One dated entry produced from a schedule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub date: NaiveDate,
    pub pair: TimePair,
    pub description: &'a str,
}

/// A parsed, non-blank schedule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLine {
    pub dates: DateExpression,
    pub times: TimeExpression,
    pub description: String,
}

impl ScheduleLine {
    /// Parse one line. Blank lines and `#` comments give `Ok(None)`.
    pub fn parse(line: &str, year: i32) -> SchedResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split('|').collect();
        let [dates, times, description] = fields.as_slice() else {
            return Err(SchedError::MalformedLine(fields.len()));
        };

        Ok(Some(ScheduleLine {
            dates: DateExpression::parse(dates, year)?,
            times: TimeExpression::parse(times)?,
            description: description.trim().to_string(),
        }))
    }

    /// Every (date, time pair) combination, date-major.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.dates.dates().flat_map(move |date| {
            self.times.pairs().map(move |pair| Entry {
                date,
                pair,
                description: &self.description,
            })
        })
    }
}

/// Mapping from date to that day's events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    year: i32,
    days: BTreeMap<NaiveDate, DayEvents>,
}

impl Schedule {
    pub fn new(year: i32) -> Self {
        Schedule {
            year,
            days: BTreeMap::new(),
        }
    }

    /// Read a schedule file.
    pub fn load(path: &Path, year: i32) -> SchedResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut schedule = Schedule::new(year);
        schedule.read_str(&contents)?;
        info!(
            path = %path.display(),
            days = schedule.days.len(),
            entries = schedule.len(),
            "loaded schedule"
        );
        Ok(schedule)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Add the entries of one line. Returns how many (date, pair)
    /// combinations were written; existing keys are overwritten.
    pub fn read_line(&mut self, line: &str) -> SchedResult<usize> {
        let Some(parsed) = ScheduleLine::parse(line, self.year)? else {
            return Ok(0);
        };

        let mut written = 0;
        for entry in parsed.entries() {
            self.insert(entry.date, entry.pair, entry.description);
            written += 1;
        }
        debug!(written, description = %parsed.description, "read schedule line");
        Ok(written)
    }

    /// Add every line of `text`. Stops at the first bad line, reporting its
    /// 1-based number.
    pub fn read_str(&mut self, text: &str) -> SchedResult<usize> {
        let mut written = 0;
        for (index, line) in text.lines().enumerate() {
            written += self.read_line(line).map_err(|source| SchedError::Line {
                number: index + 1,
                line: line.trim().to_string(),
                source: Box::new(source),
            })?;
        }
        Ok(written)
    }

    pub fn insert(&mut self, date: NaiveDate, pair: TimePair, description: &str) {
        self.days
            .entry(date)
            .or_default()
            .insert(pair, description.to_string());
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayEvents> {
        self.days.get(&date)
    }

    /// All days with events, ascending.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &DayEvents)> + '_ {
        self.days.iter().map(|(date, events)| (*date, events))
    }

    /// Days with events within `range`, ascending.
    pub fn range(
        &self,
        range: RangeInclusive<NaiveDate>,
    ) -> impl Iterator<Item = (NaiveDate, &DayEvents)> + '_ {
        self.days.range(range).map(|(date, events)| (*date, events))
    }

    /// Total number of (date, pair) entries.
    pub fn len(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
