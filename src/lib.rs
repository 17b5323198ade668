//! Bidirectional Gregorian ↔ Hijri date conversion with a
//! runtime-switchable display formatter.
//!
//! The Hijri calendar has no fixed arithmetic relation to the Gregorian
//! one: where a month begins is a matter of convention, not formula.
//! Conversion therefore anchors to a known reference date pair and
//! recovers month boundaries with a bounded day-by-day search over a
//! tabular conversion source.
//!
//! The crate favors "approximately right and always available" over
//! "exact but occasionally failing": a broken conversion source
//! degrades to a fixed fallback date, an exhausted boundary search
//! returns a best-effort range flagged [`Precision::Approximate`], and
//! invalid format input renders as `"-"`. Nothing here is ever fatal
//! to the host.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hijriyah::{CalendarMode, DateService, MemoryStore};
//!
//! let service = DateService::new(MemoryStore::default());
//! let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//!
//! assert_eq!(CalendarMode::Civil, service.mode());
//! assert_eq!("11 Maret 2024", service.format_date(date));
//!
//! service.toggle_mode();
//! assert_eq!("1 Ramadhan 1445 H", service.format_date(date));
//! ```

mod consts;
mod convert;
mod format;
mod mode;
mod prelude;
mod range;
mod tabular;
mod types;

pub use consts::*;
pub use convert::Converter;
pub use format::{GregorianOptions, MonthStyle, NumericStyle, TextStyle, format_civil, format_lunar};
pub use mode::{
    CalendarMode, JsonFileStore, MemoryStore, ModeStore, ParseModeError, SettingsStore, StoreError,
};
pub use range::{HijriMonthRange, Precision, RangeError};
pub use tabular::{HijriSource, SourceError, Tabular};
pub use types::{HijriDate, HijriDay, HijriMonth, ParseError};

use chrono::NaiveDate;

/// Input accepted by [`DateService::format_date`].
///
/// Collaborators hand over whatever they hold — a resolved date, raw
/// text, or nothing — and the formatter normalizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Nothing to format.
    Empty,
    /// An already-resolved date.
    Date(NaiveDate),
    /// Text parsed as an ISO date, or an ISO datetime whose date part
    /// is taken.
    Text(String),
}

impl DateInput {
    /// Resolves the input to a concrete date, if possible.
    fn resolve(&self) -> Option<NaiveDate> {
        match self {
            Self::Empty => None,
            Self::Date(date) => Some(*date),
            Self::Text(raw) => parse_date_text(raw),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<Option<NaiveDate>> for DateInput {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::Empty, Self::Date)
    }
}

impl From<&str> for DateInput {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(raw: String) -> Self {
        Self::Text(raw)
    }
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Some(date);
    }
    trimmed
        .parse::<chrono::NaiveDateTime>()
        .ok()
        .or_else(|| chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").ok())
        .map(|dt| dt.date())
}

/// Composition root for date display: owns the mode state and the
/// converter, and builds every date-bearing string the application
/// renders.
///
/// The persistence backend and the conversion source are both injected
/// so hosts and tests can substitute their own.
#[derive(Debug)]
pub struct DateService<S, H = Tabular> {
    modes:     ModeStore<S>,
    converter: Converter<H>,
}

impl<S: SettingsStore> DateService<S> {
    /// Creates a service over `store` with the built-in tabular
    /// conversion source, reading the persisted mode once.
    pub fn new(store: S) -> Self {
        Self {
            modes:     ModeStore::new(store),
            converter: Converter::new(),
        }
    }
}

impl<S: SettingsStore, H: HijriSource> DateService<S, H> {
    /// Creates a service over a custom conversion source.
    pub fn with_source(store: S, source: H) -> Self {
        Self {
            modes:     ModeStore::new(store),
            converter: Converter::with_source(source),
        }
    }

    /// The active display mode.
    pub fn mode(&self) -> CalendarMode {
        self.modes.mode()
    }

    /// Flips the display mode and persists the preference.
    pub fn toggle_mode(&self) -> CalendarMode {
        self.modes.toggle()
    }

    /// Converts a Gregorian date into the Hijri calendar, degrading to
    /// [`HijriDate::FALLBACK`] when the source fails.
    pub fn to_hijri(&self, date: NaiveDate) -> HijriDate {
        self.converter.to_hijri(date)
    }

    /// Fallible form of [`DateService::to_hijri`].
    ///
    /// # Errors
    /// Returns `SourceError` when the conversion source cannot
    /// represent the date.
    pub fn try_to_hijri(&self, date: NaiveDate) -> Result<HijriDate, SourceError> {
        self.converter.try_to_hijri(date)
    }

    /// Resolves a Hijri date to the Gregorian day it falls on.
    pub fn to_gregorian(&self, day: HijriDay, month: HijriMonth, year: i32) -> NaiveDate {
        self.converter.to_gregorian(day, month, year)
    }

    /// Resolves the Gregorian dates bounding one Hijri month.
    pub fn month_range(&self, month: HijriMonth, year: i32) -> HijriMonthRange {
        self.converter.month_range(month, year)
    }

    /// Builds the display string for `input` under the active mode,
    /// with default civil options.
    pub fn format_date(&self, input: impl Into<DateInput>) -> String {
        self.format_date_with(input, GregorianOptions::default())
    }

    /// Builds the display string for `input` under the active mode.
    ///
    /// Empty or unparseable input renders as `"-"`: this runs on every
    /// date-bearing render and must never block the UI. Lunar mode
    /// renders `"{day} {month} {year} H"`; civil mode composes the
    /// Indonesian pattern from `options` merged over the defaults.
    pub fn format_date_with(
        &self,
        input: impl Into<DateInput>,
        options: GregorianOptions,
    ) -> String {
        let Some(date) = input.into().resolve() else {
            return EMPTY_SENTINEL.to_owned();
        };
        match self.mode() {
            CalendarMode::Civil => format_civil(date, options),
            CalendarMode::Lunar => format_lunar(self.to_hijri(date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid Gregorian date")
    }

    fn civil_service() -> DateService<MemoryStore> {
        DateService::new(MemoryStore::default())
    }

    fn lunar_service() -> DateService<MemoryStore> {
        DateService::new(MemoryStore::with_entry(MODE_KEY, MODE_LUNAR))
    }

    #[test]
    fn test_civil_formatting_with_default_options() {
        let service = civil_service();
        assert_eq!(CalendarMode::Civil, service.mode());
        assert_eq!("11 Maret 2024", service.format_date(date(2024, 3, 11)));
    }

    #[test]
    fn test_lunar_formatting() {
        let service = lunar_service();
        assert_eq!(CalendarMode::Lunar, service.mode());
        assert_eq!("1 Ramadhan 1445 H", service.format_date(date(2024, 3, 11)));
    }

    #[test]
    fn test_formatting_follows_toggle() {
        let service = civil_service();
        let input = date(2024, 3, 11);

        assert_eq!("11 Maret 2024", service.format_date(input));
        service.toggle_mode();
        assert_eq!("1 Ramadhan 1445 H", service.format_date(input));
        service.toggle_mode();
        assert_eq!("11 Maret 2024", service.format_date(input));
    }

    #[test]
    fn test_invalid_input_renders_sentinel() {
        let service = civil_service();
        assert_eq!("-", service.format_date(None::<NaiveDate>));
        assert_eq!("-", service.format_date("not-a-date"));
        assert_eq!("-", service.format_date(""));
        assert_eq!("-", service.format_date("   "));

        let service = lunar_service();
        assert_eq!("-", service.format_date(None::<NaiveDate>));
        assert_eq!("-", service.format_date("2024-13-40"));
    }

    #[test]
    fn test_text_input_parses_dates_and_datetimes() {
        let service = civil_service();
        assert_eq!("11 Maret 2024", service.format_date("2024-03-11"));
        assert_eq!("11 Maret 2024", service.format_date("2024-03-11T08:30:00"));
        assert_eq!(
            "11 Maret 2024",
            service.format_date("2024-03-11 08:30:00".to_owned())
        );
    }

    #[test]
    fn test_format_date_with_options() {
        let service = civil_service();
        let options = GregorianOptions {
            weekday: Some(TextStyle::Long),
            ..GregorianOptions::default()
        };
        assert_eq!(
            "Senin, 11 Maret 2024",
            service.format_date_with(date(2024, 3, 11), options)
        );

        // options only affect civil mode
        let service = lunar_service();
        assert_eq!(
            "1 Ramadhan 1445 H",
            service.format_date_with(date(2024, 3, 11), options)
        );
    }

    #[test]
    fn test_service_conversions() {
        let service = civil_service();
        let month = HijriMonth::new(9).expect("month in range");
        let day = HijriDay::new(1).expect("day in range");

        assert_eq!(date(2024, 3, 11), service.to_gregorian(day, month, 1445));
        assert_eq!(
            HijriDate::new(1445, 9, 1).expect("valid date"),
            service.to_hijri(date(2024, 3, 11))
        );

        let range = service.month_range(month, 1445);
        assert!(range.is_exact());
        assert_eq!(date(2024, 3, 11), range.start());
    }

    #[test]
    fn test_month_name_table_order() {
        assert_eq!("Muharram", HIJRI_MONTH_NAMES[0]);
        assert_eq!("Dzulhijjah", HIJRI_MONTH_NAMES[11]);
        assert_eq!(12, HIJRI_MONTH_NAMES.len());
    }

    #[test]
    fn test_lunar_rendering_survives_a_broken_source() {
        struct Unavailable;

        impl HijriSource for Unavailable {
            fn hijri_parts(&self, date: NaiveDate) -> Result<(i32, u8, u8), SourceError> {
                Err(SourceError::OutOfRange(date))
            }
        }

        let service =
            DateService::with_source(MemoryStore::with_entry(MODE_KEY, MODE_LUNAR), Unavailable);
        assert_eq!("1 Muharram 1445 H", service.format_date(date(2024, 3, 11)));
    }
}
