use crate::consts::{
    FALLBACK_HIJRI_YEAR, HIJRI_MONTH_NAMES, MAX_HIJRI_DAY, MAX_HIJRI_MONTH,
};
use crate::prelude::*;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Errors from validating Hijri date components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid Hijri day: {} (must be 1-{})", "_0", MAX_HIJRI_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Invalid Hijri month: {} (must be 1-{})", "_0", MAX_HIJRI_MONTH)]
    InvalidMonth(u8),
}

impl std::error::Error for ParseError {}

/// A Hijri day-of-month guaranteed to be in the range `1..=30`.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// Hijri months run 29 or 30 days; whether day 30 exists in a given
/// month is not knowable from the component alone, so only the outer
/// bound is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HijriDay(NonZeroU8);

impl HijriDay {
    /// Creates a new day, validating that it's non-zero and <= `MAX_HIJRI_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_HIJRI_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay(value))?;
        if value > MAX_HIJRI_DAY {
            return Err(ParseError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for HijriDay {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HijriDay> for u8 {
    fn from(day: HijriDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for HijriDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Hijri month guaranteed to be in the range `1..=12`.
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HijriMonth(NonZeroU8);

impl HijriMonth {
    /// Creates a new month, validating that it's non-zero and <= `MAX_HIJRI_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_HIJRI_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_HIJRI_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the transliterated month name.
    ///
    /// Always a lookup into the fixed 12-entry table.
    pub fn name(self) -> &'static str {
        HIJRI_MONTH_NAMES[(self.get() - 1) as usize]
    }
}

impl TryFrom<u8> for HijriMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HijriMonth> for u8 {
    fn from(month: HijriMonth) -> Self {
        month.0.get()
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A date in the Hijri calendar.
///
/// Transient: computed on demand from a Gregorian date, never stored.
/// The month name is always derived from the month via [`HijriMonth::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HijriDate {
    pub year: i32,
    pub month: HijriMonth,
    pub day: HijriDay,
}

impl HijriDate {
    /// Degraded result substituted when the conversion source fails:
    /// 1 Muharram 1445.
    pub const FALLBACK: Self = Self {
        year: FALLBACK_HIJRI_YEAR,
        month: HijriMonth(NonZeroU8::MIN),
        day: HijriDay(NonZeroU8::MIN),
    };

    /// Creates a date from raw components, validating day and month.
    ///
    /// # Errors
    /// Returns `ParseError` if the day is outside `1..=30` or the month
    /// outside `1..=12`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year,
            month: HijriMonth::new(month)?,
            day: HijriDay::new(day)?,
        })
    }

    /// Returns the transliterated name of the month.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month.name(), self.year)
    }
}

impl Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("HijriDate", 4)?;
        state.serialize_field("day", &self.day)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("month_name", self.month_name())?;
        state.serialize_field("year", &self.year)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // month_name is derived state; it is ignored on the way in
        #[derive(Deserialize)]
        struct Repr {
            day: u8,
            month: u8,
            year: i32,
        }

        let repr = Repr::deserialize(deserializer)?;
        Self::new(repr.year, repr.month, repr.day).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_new_valid() {
        assert!(HijriDay::new(1).is_ok());
        assert!(HijriDay::new(29).is_ok());
        assert!(HijriDay::new(30).is_ok());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(HijriDay::new(0), Err(ParseError::InvalidDay(0))));
        assert!(matches!(HijriDay::new(31), Err(ParseError::InvalidDay(31))));
        assert!(matches!(
            HijriDay::new(255),
            Err(ParseError::InvalidDay(255))
        ));
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(HijriMonth::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(
            HijriMonth::new(0),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            HijriMonth::new(13),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_names() {
        let expected = [
            (1, "Muharram"),
            (9, "Ramadhan"),
            (12, "Dzulhijjah"),
        ];
        for (number, name) in expected {
            let month = HijriMonth::new(number).expect("month in range");
            assert_eq!(name, month.name());
        }
    }

    #[test]
    fn test_every_month_has_a_table_name() {
        for m in 1..=12u8 {
            let month = HijriMonth::new(m).expect("month in range");
            assert_eq!(HIJRI_MONTH_NAMES[(m - 1) as usize], month.name());
        }
    }

    #[test]
    fn test_try_from_and_into() {
        let day: HijriDay = 15.try_into().expect("valid day");
        assert_eq!(15u8, u8::from(day));

        let month: HijriMonth = 9.try_into().expect("valid month");
        assert_eq!(9u8, u8::from(month));

        let bad: Result<HijriDay, _> = 31.try_into();
        assert!(bad.is_err());
    }

    #[test]
    fn test_component_serde() {
        let month = HijriMonth::new(9).expect("valid month");
        let json = serde_json::to_string(&month).expect("month serializes");
        assert_eq!("9", json);

        let parsed: HijriMonth = serde_json::from_str(&json).expect("month parses");
        assert_eq!(month, parsed);

        let rejected: Result<HijriMonth, _> = serde_json::from_str("13");
        assert!(rejected.is_err());
    }

    #[test]
    fn test_date_new_and_display() {
        let date = HijriDate::new(1445, 9, 1).expect("valid date");
        assert_eq!(1445, date.year);
        assert_eq!(9, date.month.get());
        assert_eq!(1, date.day.get());
        assert_eq!("Ramadhan", date.month_name());
        assert_eq!("1 Ramadhan 1445", date.to_string());
    }

    #[test]
    fn test_date_new_invalid_components() {
        assert!(HijriDate::new(1445, 13, 1).is_err());
        assert!(HijriDate::new(1445, 0, 1).is_err());
        assert!(HijriDate::new(1445, 9, 31).is_err());
        assert!(HijriDate::new(1445, 9, 0).is_err());
    }

    #[test]
    fn test_fallback_constant() {
        assert_eq!(1445, HijriDate::FALLBACK.year);
        assert_eq!(1, HijriDate::FALLBACK.month.get());
        assert_eq!(1, HijriDate::FALLBACK.day.get());
        assert_eq!("Muharram", HijriDate::FALLBACK.month_name());
    }

    #[test]
    fn test_date_serde_carries_month_name() {
        let date = HijriDate::new(1445, 9, 1).expect("valid date");
        let json = serde_json::to_string(&date).expect("date serializes");
        assert_eq!(
            r#"{"day":1,"month":9,"month_name":"Ramadhan","year":1445}"#,
            json
        );

        let parsed: HijriDate = serde_json::from_str(&json).expect("date parses");
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_date_serde_rejects_invalid_components() {
        let result: Result<HijriDate, _> =
            serde_json::from_str(r#"{"day":31,"month":9,"year":1445}"#);
        assert!(result.is_err());

        let result: Result<HijriDate, _> =
            serde_json::from_str(r#"{"day":1,"month":13,"year":1445}"#);
        assert!(result.is_err());
    }
}
