//! Token vocabulary shared by the date and time grammars.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// The kind of a token, without its value.
///
/// Diagnostics print kinds as `MONTH, WEEKDAY, DAY, TIME, '-', '--', ',', ':', '.', END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Month,
    Weekday,
    Day,
    Time,
    Dash,
    DoubleDash,
    Comma,
    Colon,
    Period,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Month => "MONTH",
            TokenKind::Weekday => "WEEKDAY",
            TokenKind::Day => "DAY",
            TokenKind::Time => "TIME",
            TokenKind::Dash => "'-'",
            TokenKind::DoubleDash => "'--'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Period => "'.'",
            TokenKind::End => "END",
        };
        write!(f, "{}", s)
    }
}

/// Either of the two dash kinds, which the grammars treat alike.
pub const DASHES: &[TokenKind] = &[TokenKind::Dash, TokenKind::DoubleDash];

/// A classified lexical unit. The variant carries the value for its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Month number, 1-12.
    Month(u32),
    /// Weekday number, 1-7 with 1 = Sunday.
    Weekday(u32),
    /// Day of month, 1-31.
    Day(u32),
    /// Time of day in 24-hour representation.
    Time(NaiveTime),
    Dash,
    DoubleDash,
    Comma,
    Colon,
    Period,
    /// Emitted once after the last real token.
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Month(_) => TokenKind::Month,
            Token::Weekday(_) => TokenKind::Weekday,
            Token::Day(_) => TokenKind::Day,
            Token::Time(_) => TokenKind::Time,
            Token::Dash => TokenKind::Dash,
            Token::DoubleDash => TokenKind::DoubleDash,
            Token::Comma => TokenKind::Comma,
            Token::Colon => TokenKind::Colon,
            Token::Period => TokenKind::Period,
            Token::End => TokenKind::End,
        }
    }

    /// Punctuation token for a matched punctuation lexeme.
    pub fn punctuation(text: &str) -> Option<Token> {
        match text {
            "--" => Some(Token::DoubleDash),
            "-" => Some(Token::Dash),
            "," => Some(Token::Comma),
            ":" => Some(Token::Colon),
            "." => Some(Token::Period),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Month(m) => write!(f, "MONTH({})", m),
            Token::Weekday(w) => write!(f, "WEEKDAY({})", w),
            Token::Day(d) => write!(f, "DAY({})", d),
            Token::Time(t) => write!(f, "TIME({:02}:{:02})", t.hour(), t.minute()),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Render a set of kinds as `{MONTH, DAY}` for error messages.
pub fn describe_kinds(kinds: &[TokenKind]) -> String {
    let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    format!("{{{}}}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_display_vocabulary() {
        let all = [
            TokenKind::Month,
            TokenKind::Weekday,
            TokenKind::Day,
            TokenKind::Time,
            TokenKind::Dash,
            TokenKind::DoubleDash,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Period,
            TokenKind::End,
        ];
        let rendered: Vec<String> = all.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            rendered.join(", "),
            "MONTH, WEEKDAY, DAY, TIME, '-', '--', ',', ':', '.', END"
        );
    }

    #[test]
    fn test_token_display_includes_value() {
        let t = NaiveTime::from_hms_opt(19, 5, 0).unwrap();
        assert_eq!(Token::Time(t).to_string(), "TIME(19:05)");
        assert_eq!(Token::Month(9).to_string(), "MONTH(9)");
        assert_eq!(Token::Comma.to_string(), "','");
    }

    #[test]
    fn test_describe_kinds() {
        assert_eq!(describe_kinds(&[TokenKind::Month, TokenKind::Day]), "{MONTH, DAY}");
    }
}
