//! Human-readable dates and times for agenda output.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::time_expr::TimePair;

/// English ordinal suffix for a day of the month: 1st, 2nd, 3rd, 11th, 22nd.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// "September 1st"
pub fn short_date(date: NaiveDate) -> String {
    format!("{} {}{}", date.format("%B"), date.day(), ordinal_suffix(date.day()))
}

/// "Monday, September 1st"
pub fn long_date(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%A"), short_date(date))
}

/// "07:00PM"
pub fn time_12h(time: NaiveTime) -> String {
    time.format("%I:%M%p").to_string()
}

/// "07:00PM -- 08:30PM: Algorithms Office Hours"
pub fn event_text(pair: &TimePair, description: &str) -> String {
    format!(
        "{} -- {}: {}",
        time_12h(pair.start),
        time_12h(pair.end),
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(long_date(date), "Monday, September 1st");
        assert_eq!(short_date(date), "September 1st");
    }

    #[test]
    fn test_event_text() {
        let pair = TimePair::new(
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
        );
        assert_eq!(
            event_text(&pair, "Algorithms Office Hours"),
            "07:00PM -- 08:30PM: Algorithms Office Hours"
        );
    }

    #[test]
    fn test_time_12h_noon_and_midnight() {
        assert_eq!(time_12h(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), "12:00PM");
        assert_eq!(time_12h(NaiveTime::from_hms_opt(0, 5, 0).unwrap()), "12:05AM");
    }
}
