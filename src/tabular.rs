//! Arithmetic tabular Hijri calendar, the built-in conversion source.
//!
//! The civil tabular convention distributes 11 leap days over a 30-year
//! cycle from the epoch of Friday, 16 July 622 CE (Julian). It is the
//! standard data-free stand-in for the Umm al-Qura calendar and agrees
//! with it at the anchor this crate scans from (1 Ramadhan 1445 =
//! 2024-03-11).

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::consts::{DZULHIJJAH, MAX_HIJRI_YEAR};

/// Rata Die day number of 1 Muharram 1 AH.
const HIJRI_EPOCH: i64 = 227_015;

/// Years per intercalation cycle.
const CYCLE_YEARS: i64 = 30;
/// Leap years per intercalation cycle.
const CYCLE_LEAP_YEARS: i64 = 11;

/// Error from a Gregorian→Hijri conversion source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The date falls outside the years the source can represent.
    #[error("date {0} is outside the supported Hijri year range")]
    OutOfRange(NaiveDate),

    /// The source produced components that do not form a Hijri date.
    #[error("conversion source produced an unrepresentable result for {0}")]
    Unrepresentable(NaiveDate),
}

/// Gregorian→Hijri conversion capability consumed by the converter.
///
/// Injected so that a failing source can be substituted in tests; the
/// converter never assumes the source succeeds.
pub trait HijriSource {
    /// Converts a civil date into raw Hijri `(year, month, day)` parts.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the date cannot be represented.
    fn hijri_parts(&self, date: NaiveDate) -> Result<(i32, u8, u8), SourceError>;
}

/// The built-in arithmetic tabular source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tabular;

impl Tabular {
    /// Determines if `year` is a leap year of the 30-year cycle.
    pub const fn is_leap_year(year: i32) -> bool {
        (CYCLE_LEAP_YEARS * year as i64 + 14).rem_euclid(CYCLE_YEARS) < CYCLE_LEAP_YEARS
    }

    /// Returns the length of a Hijri month: odd months run 30 days,
    /// even months 29, and Dzulhijjah gains a day in leap years.
    pub const fn days_in_month(year: i32, month: u8) -> u8 {
        if month % 2 == 1 || (month == DZULHIJJAH && Self::is_leap_year(year)) {
            30
        } else {
            29
        }
    }

    /// Returns the number of days in a Hijri year.
    pub const fn days_in_year(year: i32) -> u16 {
        if Self::is_leap_year(year) {
            355
        } else {
            354
        }
    }
}

impl HijriSource for Tabular {
    fn hijri_parts(&self, date: NaiveDate) -> Result<(i32, u8, u8), SourceError> {
        let (year, month, day) = hijri_from_fixed(i64::from(date.num_days_from_ce()));
        if year < 1 || year > MAX_HIJRI_YEAR {
            return Err(SourceError::OutOfRange(date));
        }
        Ok((year, month, day))
    }
}

/// Rata Die day number of a tabular Hijri date.
pub(crate) fn fixed_from_hijri(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    i64::from(day)
        + 29 * (month - 1)
        + month / 2
        + 354 * (year - 1)
        + (3 + CYCLE_LEAP_YEARS * year).div_euclid(CYCLE_YEARS)
        + HIJRI_EPOCH
        - 1
}

/// Tabular Hijri date of a Rata Die day number.
pub(crate) fn hijri_from_fixed(fixed: i64) -> (i32, u8, u8) {
    let year = (30 * (fixed - HIJRI_EPOCH) + 10_646).div_euclid(10_631);
    let year_i32 = year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    let prior_days = fixed - fixed_from_hijri(year_i32, 1, 1);
    let month = ((CYCLE_LEAP_YEARS * prior_days + 330).div_euclid(325)) as u8;
    let day = (fixed - fixed_from_hijri(year_i32, month, 1) + 1) as u8;
    (year_i32, month, day)
}
