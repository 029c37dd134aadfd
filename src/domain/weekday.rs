//! Short weekday names as they appear in the forecast `day` field.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One of the seven canonical short weekday names.
///
/// Discriminants follow the Sunday-first ordering used by the fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayName {
    Sun = 0,
    Mon = 1,
    Tue = 2,
    Wed = 3,
    Thu = 4,
    Fri = 5,
    Sat = 6,
}

impl DayName {
    /// Sunday-first ordering.
    pub const ALL: [DayName; 7] = [
        DayName::Sun,
        DayName::Mon,
        DayName::Tue,
        DayName::Wed,
        DayName::Thu,
        DayName::Fri,
        DayName::Sat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayName::Sun => "Sun",
            DayName::Mon => "Mon",
            DayName::Tue => "Tue",
            DayName::Wed => "Wed",
            DayName::Thu => "Thu",
            DayName::Fri => "Fri",
            DayName::Sat => "Sat",
        }
    }

    /// Index in `0..7` with Sunday as 0.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Match the first three characters of `text` against the canonical names.
    ///
    /// Case-sensitive: `"Monday"` matches, `"mon"` and `"Mo"` do not.
    pub fn from_prefix(text: &str) -> Option<DayName> {
        let prefix: String = text.chars().take(3).collect();
        DayName::ALL.into_iter().find(|d| d.as_str() == prefix)
    }

    pub fn of_date(date: NaiveDate) -> DayName {
        DayName::from(date.weekday())
    }
}

impl From<Weekday> for DayName {
    fn from(value: Weekday) -> Self {
        DayName::ALL[value.num_days_from_sunday() as usize]
    }
}

impl std::fmt::Display for DayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching_is_three_chars_and_case_sensitive() {
        assert_eq!(DayName::from_prefix("Mon"), Some(DayName::Mon));
        assert_eq!(DayName::from_prefix("Monday"), Some(DayName::Mon));
        assert_eq!(DayName::from_prefix("Saturday (partial)"), Some(DayName::Sat));
        assert_eq!(DayName::from_prefix("mon"), None);
        assert_eq!(DayName::from_prefix("MON"), None);
        assert_eq!(DayName::from_prefix("Mo"), None);
        assert_eq!(DayName::from_prefix(""), None);
        assert_eq!(DayName::from_prefix("Zzz"), None);
    }

    #[test]
    fn multibyte_text_does_not_panic() {
        assert_eq!(DayName::from_prefix("Пн"), None);
        assert_eq!(DayName::from_prefix("日曜日"), None);
    }

    #[test]
    fn chrono_weekday_maps_sunday_first() {
        assert_eq!(DayName::from(Weekday::Sun).index(), 0);
        assert_eq!(DayName::from(Weekday::Sat).index(), 6);
        let monday = NaiveDate::from_ymd_opt(2023, 1, 16).unwrap();
        assert_eq!(DayName::of_date(monday), DayName::Mon);
    }
}
