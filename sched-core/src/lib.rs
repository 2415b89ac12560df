//! Core of the sched ecosystem.
//!
//! Turns schedule lines such as
//!
//! ```text
//! August -- September M-F | 7:00pm - 8:30pm, 9pm-10pm | Office hours
//! ```
//!
//! into concrete dated entries:
//! - `scanner` tokenizes date and time text with ordered rules
//! - `date_expr` and `time_expr` are the two grammars
//! - `interval` and `filter` enumerate and narrow dates
//! - `schedule` crosses dates with time pairs into a [`Schedule`]

pub mod config;
pub mod date_expr;
pub mod error;
pub mod filter;
pub mod format;
pub mod interval;
pub mod parser;
pub mod scanner;
pub mod schedule;
pub mod time_expr;
pub mod token;

pub use date_expr::{Clause, DateExpression};
pub use error::{ParseError, ScanError, SchedError, SchedResult};
pub use filter::{DayFilter, WeekdaySet};
pub use interval::DateInterval;
pub use schedule::{Schedule, ScheduleLine};
pub use time_expr::{TimeExpression, TimePair};
pub use token::{Token, TokenKind};
