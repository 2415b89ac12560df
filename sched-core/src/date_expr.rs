//! Date expressions: intervals narrowed by day filters.
//!
//! ```text
//! Expression   := Clause (','? Clause)* END
//! Clause       := Interval Filter ((',' | ε) Filter)*
//! Interval     := MONTH DAY? (('-'|'--') MONTH? DAY?)?
//! Filter       := DayRange | WeekdayRange | ε
//! DayRange     := DAY (('-'|'--') DAY)?
//! WeekdayRange := WEEKDAY (('-'|'--') WEEKDAY)?
//! ```
//!
//! A comma followed by a month starts a new clause; a comma followed by
//! anything else adds a filter to the current clause. Interval resolution:
//!
//! - `August` is all of August.
//! - `August 3` is one day.
//! - `August 3 - September 9` and `August 3-9` are explicit ranges. After a
//!   numeric start, a dash must be followed by a day.
//! - `August -- September` runs from August 1st to September 30th.
//! - `August -` with no end month is just August.
//!
//! Months and days resolve against the session year.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::SchedResult;
use crate::filter::{DayFilter, WeekdaySet, any_matches};
use crate::interval::DateInterval;
use crate::parser::Parser;
use crate::scanner::{DATE_SCANNER, Tokens};
use crate::token::{DASHES, TokenKind};

/// One interval and the filters applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub interval: DateInterval,
    pub filters: Vec<DayFilter>,
}

impl Clause {
    /// Dates of the interval, ascending, that match any filter.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.interval
            .days()
            .filter(move |date| any_matches(&self.filters, *date))
    }
}

/// A full parsed date expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateExpression {
    year: i32,
    clauses: Vec<Clause>,
}

impl DateExpression {
    pub fn parse(text: &str, year: i32) -> SchedResult<Self> {
        DateExpressionParser::new(text, year)?.parse()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// All matching dates, clause by clause. A date matched by two clauses
    /// appears twice. Each call starts over.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.clauses.iter().flat_map(Clause::dates)
    }
}

impl fmt::Display for DateExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spans: Vec<String> = self
            .clauses
            .iter()
            .map(|c| format!("{}..{}", c.interval.start, c.interval.end))
            .collect();
        write!(f, "{}", spans.join(", "))
    }
}

pub struct DateExpressionParser<'t> {
    parser: Parser<Tokens<'static, 't>>,
    year: i32,
}

impl<'t> DateExpressionParser<'t> {
    pub fn new(text: &'t str, year: i32) -> SchedResult<Self> {
        Ok(DateExpressionParser {
            parser: Parser::new(DATE_SCANNER.tokens(text))?,
            year,
        })
    }

    pub fn parse(mut self) -> SchedResult<DateExpression> {
        let mut clauses = vec![self.clause()?];

        while !self.parser.check(&[TokenKind::End])? {
            if !self.parser.at(&[TokenKind::Month]) {
                return Err(self.parser.unexpected());
            }
            clauses.push(self.clause()?);
        }

        debug!(clauses = clauses.len(), year = self.year, "parsed date expression");
        Ok(DateExpression {
            year: self.year,
            clauses,
        })
    }

    fn clause(&mut self) -> SchedResult<Clause> {
        let interval = self.interval()?;
        let mut filters = vec![self.filter()?];

        loop {
            if self.parser.check(&[TokenKind::Comma])? {
                if self.parser.at(&[TokenKind::Month]) {
                    break;
                }
                filters.push(self.filter()?);
            } else if self.parser.at(&[TokenKind::Day, TokenKind::Weekday]) {
                filters.push(self.filter()?);
            } else {
                break;
            }
        }

        Ok(Clause { interval, filters })
    }

    fn interval(&mut self) -> SchedResult<DateInterval> {
        let start_month = self.parser.expect_number(TokenKind::Month)?;

        if let Some(start_day) = self.parser.accept_number(TokenKind::Day)? {
            let (end_month, end_day) = if self.parser.check(DASHES)? {
                let end_month = self
                    .parser
                    .accept_number(TokenKind::Month)?
                    .unwrap_or(start_month);
                (end_month, self.parser.expect_number(TokenKind::Day)?)
            } else {
                (start_month, start_day)
            };
            return DateInterval::between(self.year, (start_month, start_day), (end_month, end_day));
        }

        let end_month = if self.parser.check(DASHES)? {
            self.parser
                .accept_number(TokenKind::Month)?
                .unwrap_or(start_month)
        } else {
            start_month
        };
        DateInterval::months(self.year, start_month, end_month)
    }

    fn filter(&mut self) -> SchedResult<DayFilter> {
        if let Some(low) = self.parser.accept_number(TokenKind::Day)? {
            if self.parser.check(DASHES)? {
                let high = self.parser.expect_number(TokenKind::Day)?;
                return Ok(DayFilter::DayRange { low, high });
            }
            return Ok(DayFilter::DayMatch { day: low });
        }

        if let Some(start) = self.parser.accept_number(TokenKind::Weekday)? {
            if self.parser.check(DASHES)? {
                let end = self.parser.expect_number(TokenKind::Weekday)?;
                return Ok(DayFilter::WeekdaySet(WeekdaySet::range(start, end)));
            }
            return Ok(DayFilter::WeekdaySet(WeekdaySet::single(start)));
        }

        Ok(DayFilter::AlwaysTrue)
    }
}
