//! Ordered-rule lexical scanner.
//!
//! A [`Scanner`] holds a list of rules tried in declaration order at each
//! position. The first rule whose pattern matches wins, and it takes its own
//! longest match. Two scanners are built from this: [`DATE_SCANNER`] for
//! month/weekday/day text and [`TIME_SCANNER`] for time text. Both share the
//! punctuation and whitespace rules appended by [`Scanner::new`].

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::ScanError;
use crate::token::Token;

/// Converts matched text into a token. `None` rejects the match.
pub type Action = fn(&str) -> Option<Token>;

pub const MONTHS_FULL: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub const MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const WEEKDAYS_FULL: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

pub const WEEKDAYS_THREE: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const WEEKDAYS_ONE: [&str; 7] = ["U", "M", "T", "W", "R", "F", "S"];

/// Aliases outside the three regular tables.
pub const WEEKDAYS_IRREGULAR: [(&str, u32); 2] = [("Tues", 3), ("Thurs", 5)];

const PUNCTUATION_PATTERN: &str = r"--|-|,|:|\.";
const WHITESPACE_PATTERN: &str = r"\s+";
const DAY_PATTERN: &str = r"\d\d?(?:st|nd|rd|th)?";
const TIME_PATTERN: &str = r"\d?\d(?::\d\d)?\s*(?:[paPA]\.?(?:[mM]\.?)?)?";

/// Scanner for date expressions: month names, then weekday names, then day numbers.
pub static DATE_SCANNER: Lazy<Scanner> = Lazy::new(|| {
    let months: Vec<&str> = MONTHS_FULL.iter().chain(MONTHS_ABBR.iter()).copied().collect();
    let weekdays: Vec<&str> = WEEKDAYS_FULL
        .iter()
        .copied()
        .chain(WEEKDAYS_IRREGULAR.iter().map(|(name, _)| *name))
        .chain(WEEKDAYS_THREE.iter().copied())
        .chain(WEEKDAYS_ONE.iter().copied())
        .collect();

    Scanner::new(vec![
        Rule::new(&alternation(&months), month_token).expect("month pattern compiles"),
        Rule::new(&alternation(&weekdays), weekday_token).expect("weekday pattern compiles"),
        Rule::new(DAY_PATTERN, day_token).expect("day pattern compiles"),
    ])
    .expect("built-in date rules compile")
});

/// Scanner for time expressions: `hh[:mm][am|pm]`.
pub static TIME_SCANNER: Lazy<Scanner> = Lazy::new(|| {
    Scanner::new(vec![
        Rule::new(TIME_PATTERN, time_token).expect("time pattern compiles"),
    ])
    .expect("built-in time rules compile")
});

/// One lexical rule. Rules without an action discard what they match.
pub struct Rule {
    pattern: Regex,
    action: Option<Action>,
}

impl Rule {
    pub fn new(pattern: &str, action: Action) -> Result<Self, regex::Error> {
        Ok(Rule {
            pattern: anchored(pattern)?,
            action: Some(action),
        })
    }

    /// A rule whose matches are dropped from the token stream.
    pub fn skip(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Rule {
            pattern: anchored(pattern)?,
            action: None,
        })
    }
}

/// Result of trying the rule list at one position.
enum Lexeme {
    Token(usize, Token),
    Skip(usize),
}

pub struct Scanner {
    rules: Vec<Rule>,
}

impl Scanner {
    /// Build a scanner from `rules`, followed by the shared punctuation and
    /// whitespace rules.
    pub fn new(mut rules: Vec<Rule>) -> Result<Self, regex::Error> {
        rules.push(Rule::new(PUNCTUATION_PATTERN, Token::punctuation)?);
        rules.push(Rule::skip(WHITESPACE_PATTERN)?);
        Ok(Scanner { rules })
    }

    /// Lazily tokenize `text`. The stream ends with a single [`Token::End`],
    /// or stops after the first [`ScanError`].
    pub fn tokens<'s, 't>(&'s self, text: &'t str) -> Tokens<'s, 't> {
        Tokens {
            scanner: self,
            text,
            pos: 0,
            done: false,
        }
    }

    /// Tokenize all of `text`, including the trailing [`Token::End`].
    pub fn scan(&self, text: &str) -> Result<Vec<Token>, ScanError> {
        self.tokens(text).collect()
    }

    fn lexeme_at(&self, rest: &str) -> Option<Lexeme> {
        for rule in &self.rules {
            let Some(m) = rule.pattern.find(rest) else {
                continue;
            };
            if m.end() == 0 {
                continue;
            }
            return match rule.action {
                None => Some(Lexeme::Skip(m.end())),
                // The first matching rule owns this position, even if it rejects the text.
                Some(action) => action(m.as_str()).map(|token| Lexeme::Token(m.end(), token)),
            };
        }
        None
    }
}

/// Lazy token stream over one piece of text.
pub struct Tokens<'s, 't> {
    scanner: &'s Scanner,
    text: &'t str,
    pos: usize,
    done: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if self.pos >= self.text.len() {
                self.done = true;
                return Some(Ok(Token::End));
            }

            match self.scanner.lexeme_at(&self.text[self.pos..]) {
                Some(Lexeme::Skip(len)) => self.pos += len,
                Some(Lexeme::Token(len, token)) => {
                    trace!(%token, offset = self.pos, "scanned token");
                    self.pos += len;
                    return Some(Ok(token));
                }
                None => {
                    self.done = true;
                    return Some(Err(ScanError {
                        text: self.text.to_string(),
                        offset: self.pos,
                    }));
                }
            }
        }
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", pattern))
}

/// Regex alternation of literal names, longest first so a rule always takes
/// its longest match ("Thursday" before "Thurs" before "Thu").
fn alternation(names: &[&str]) -> String {
    let mut sorted: Vec<&str> = Vec::with_capacity(names.len());
    for name in names {
        if !sorted.contains(name) {
            sorted.push(name);
        }
    }
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

/// 1-based position of `name` in `table`.
fn position(table: &[&str], name: &str) -> Option<u32> {
    table
        .iter()
        .position(|entry| *entry == name)
        .map(|i| i as u32 + 1)
}

fn month_token(text: &str) -> Option<Token> {
    position(&MONTHS_FULL, text)
        .or_else(|| position(&MONTHS_ABBR, text))
        .map(Token::Month)
}

fn weekday_token(text: &str) -> Option<Token> {
    if let Some((_, number)) = WEEKDAYS_IRREGULAR.iter().find(|(name, _)| *name == text) {
        return Some(Token::Weekday(*number));
    }

    [&WEEKDAYS_FULL, &WEEKDAYS_THREE, &WEEKDAYS_ONE]
        .iter()
        .find_map(|table| position(table.as_slice(), text))
        .map(Token::Weekday)
}

/// "8", "1st", "23rd", "4th".
fn day_token(text: &str) -> Option<Token> {
    let digits = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(Token::Day(day))
}

/// "7", "7:30", "7:30pm", "7 p.m.", "12" (noon).
///
/// A pm marker adds 12 to hours below 12. Nothing else changes the hour, so
/// a bare 12 and 12am both mean noon.
fn time_token(text: &str) -> Option<Token> {
    let text = text.trim_end();
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let mut hour: u32 = text[..digits_end].parse().ok()?;
    let rest = &text[digits_end..];

    let minute: u32 = match rest.strip_prefix(':') {
        Some(minutes) => minutes.get(..2)?.parse().ok()?,
        None => 0,
    };

    if rest.contains(['p', 'P']) && hour < 12 {
        hour += 12;
    }

    NaiveTime::from_hms_opt(hour, minute, 0).map(Token::Time)
}
