//! Time expressions: a comma-separated list of start/end pairs.
//!
//! ```text
//! TimeList := TimePair (',' TimePair)* END
//! TimePair := TIME ('-' | '--')? TIME
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use tracing::debug;

use crate::error::{SchedError, SchedResult};
use crate::parser::Parser;
use crate::scanner::{TIME_SCANNER, Tokens};
use crate::token::{DASHES, TokenKind};

/// Start and end of one entry. `start` may be after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimePair {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimePair {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        TimePair { start, end }
    }

    /// Whether the pair runs past midnight.
    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for TimePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// A parsed time expression, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeExpression {
    pairs: Vec<TimePair>,
}

impl TimeExpression {
    pub fn parse(text: &str) -> SchedResult<Self> {
        TimeExpressionParser::new(text)?.parse()
    }

    /// The pairs in source order. Each call starts from the first pair.
    pub fn pairs(&self) -> impl Iterator<Item = TimePair> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromStr for TimeExpression {
    type Err = SchedError;

    fn from_str(s: &str) -> SchedResult<Self> {
        TimeExpression::parse(s)
    }
}

pub struct TimeExpressionParser<'t> {
    parser: Parser<Tokens<'static, 't>>,
}

impl<'t> TimeExpressionParser<'t> {
    pub fn new(text: &'t str) -> SchedResult<Self> {
        Ok(TimeExpressionParser {
            parser: Parser::new(TIME_SCANNER.tokens(text))?,
        })
    }

    pub fn parse(mut self) -> SchedResult<TimeExpression> {
        let mut pairs = vec![self.time_pair()?];
        while self.parser.check(&[TokenKind::Comma])? {
            pairs.push(self.time_pair()?);
        }
        self.parser.expect(&[TokenKind::End])?;

        debug!(count = pairs.len(), "parsed time expression");
        Ok(TimeExpression { pairs })
    }

    fn time_pair(&mut self) -> SchedResult<TimePair> {
        let start = self.parser.expect_time()?;
        self.parser.check(DASHES)?;
        let end = self.parser.expect_time()?;
        Ok(TimePair::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn pairs(text: &str) -> Vec<TimePair> {
        TimeExpression::parse(text).expect("Should parse").pairs().collect()
    }

    #[test]
    fn test_pm_pair() {
        assert_eq!(pairs("7:00pm - 8:30pm"), vec![TimePair::new(hm(19, 0), hm(20, 30))]);
    }

    #[test]
    fn test_bare_hour_pair() {
        assert_eq!(pairs("9-9:30"), vec![TimePair::new(hm(9, 0), hm(9, 30))]);
    }

    #[test]
    fn test_marker_is_not_inherited_by_the_end_time() {
        assert_eq!(pairs("9:00pm-9:30"), vec![TimePair::new(hm(21, 0), hm(9, 30))]);
    }

    #[test]
    fn test_dash_is_optional() {
        assert_eq!(pairs("7:00pm 8:30pm"), pairs("7:00pm-8:30pm"));
        assert_eq!(pairs("7:00pm -- 8:30pm"), pairs("7:00pm-8:30pm"));
    }

    #[test]
    fn test_pair_list_keeps_source_order() {
        assert_eq!(
            pairs("7:00pm-8:30pm, 9:00pm-10:00pm"),
            vec![
                TimePair::new(hm(19, 0), hm(20, 30)),
                TimePair::new(hm(21, 0), hm(22, 0)),
            ]
        );
    }

    #[test]
    fn test_reparse_is_identical() {
        let text = "10am-11:15am, 1pm 2pm";
        let first = TimeExpression::parse(text).unwrap();
        let second = TimeExpression::parse(text).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.pairs().collect::<Vec<_>>(), first.pairs().collect::<Vec<_>>());
    }

    #[test]
    fn test_overnight_pair_is_kept() {
        let pair = pairs("11pm-1")[0];
        assert_eq!(pair, TimePair::new(hm(23, 0), hm(1, 0)));
        assert!(pair.is_overnight());
    }

    #[test]
    fn test_missing_end_time() {
        match TimeExpression::parse("7:00pm -") {
            Err(SchedError::Parse(err)) => {
                assert_eq!(err.found, Token::End);
                assert_eq!(err.expected, vec![TokenKind::Time]);
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_time_is_rejected() {
        match TimeExpression::parse("7pm-8pm 9pm") {
            Err(SchedError::Parse(err)) => {
                assert_eq!(err.found, Token::Time(hm(21, 0)));
                assert_eq!(err.expected, vec![TokenKind::Comma, TokenKind::End]);
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_expression_is_rejected() {
        assert!(matches!(TimeExpression::parse("  "), Err(SchedError::Parse(_))));
    }

    #[test]
    fn test_words_are_a_scan_error() {
        match TimeExpression::parse("noon-1pm") {
            Err(SchedError::Scan(err)) => assert_eq!(err.remainder(), "noon-1pm"),
            other => panic!("Expected scan error, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(pairs("9-9:30")[0].to_string(), "09:00-09:30");
    }
}
