use chrono::{Datelike, NaiveDate};

use crate::consts::{
    GREGORIAN_MONTH_ABBREV, GREGORIAN_MONTH_NAMES, WEEKDAY_ABBREV, WEEKDAY_NAMES,
};
use crate::types::HijriDate;

/// Rendering style for a numeric component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    /// Unpadded, `"3"`.
    Numeric,
    /// Zero-padded, `"03"`.
    TwoDigit,
}

/// Rendering style for the month component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// Full name, `"Maret"`.
    Long,
    /// Abbreviated name, `"Mar"`.
    Short,
    /// Unpadded number; switches to the all-numeric `d/m/y` pattern.
    Numeric,
    /// Zero-padded number; switches to the all-numeric pattern.
    TwoDigit,
}

/// Rendering style for the weekday prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Full name, `"Senin"`.
    Long,
    /// Abbreviated name, `"Sen"`.
    Short,
}

/// Per-component styles for civil formatting, merged field-wise over
/// the defaults: numeric day, long month, numeric year, no weekday.
///
/// Unset fields fall back to the default; the weekday only appears
/// when requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianOptions {
    pub weekday: Option<TextStyle>,
    pub day:     Option<NumericStyle>,
    pub month:   Option<MonthStyle>,
    pub year:    Option<NumericStyle>,
}

impl GregorianOptions {
    fn day_style(self) -> NumericStyle {
        self.day.unwrap_or(NumericStyle::Numeric)
    }

    fn month_style(self) -> MonthStyle {
        self.month.unwrap_or(MonthStyle::Long)
    }

    fn year_style(self) -> NumericStyle {
        self.year.unwrap_or(NumericStyle::Numeric)
    }
}

/// Formats a Gregorian date for Indonesian display.
///
/// Named month styles render `"11 Maret 2024"`; numeric month styles
/// switch to the all-numeric `"11/3/2024"` pattern. Pure composition
/// over fixed tables, cheap enough for per-render use.
pub fn format_civil(date: NaiveDate, options: GregorianOptions) -> String {
    let day = numeric(date.day(), options.day_style());
    let year = year_text(date.year(), options.year_style());

    let month_index = date.month0() as usize;
    let body = match options.month_style() {
        MonthStyle::Long => format!("{day} {} {year}", GREGORIAN_MONTH_NAMES[month_index]),
        MonthStyle::Short => format!("{day} {} {year}", GREGORIAN_MONTH_ABBREV[month_index]),
        MonthStyle::Numeric => format!("{day}/{}/{year}", date.month()),
        MonthStyle::TwoDigit => format!("{day}/{:02}/{year}", date.month()),
    };

    match options.weekday {
        None => body,
        Some(style) => {
            let weekday_index = date.weekday().num_days_from_sunday() as usize;
            let name = match style {
                TextStyle::Long => WEEKDAY_NAMES[weekday_index],
                TextStyle::Short => WEEKDAY_ABBREV[weekday_index],
            };
            format!("{name}, {body}")
        }
    }
}

/// Formats a Hijri date for display: `"{day} {month} {year} H"`.
pub fn format_lunar(date: HijriDate) -> String {
    format!("{date} H")
}

fn numeric(value: u32, style: NumericStyle) -> String {
    match style {
        NumericStyle::Numeric => value.to_string(),
        NumericStyle::TwoDigit => format!("{value:02}"),
    }
}

fn year_text(year: i32, style: NumericStyle) -> String {
    match style {
        NumericStyle::Numeric => year.to_string(),
        NumericStyle::TwoDigit => format!("{:02}", year.rem_euclid(100)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid Gregorian date")
    }

    #[test]
    fn test_default_options() {
        assert_eq!(
            "11 Maret 2024",
            format_civil(date(2024, 3, 11), GregorianOptions::default())
        );
    }

    #[test]
    fn test_short_month() {
        let options = GregorianOptions {
            month: Some(MonthStyle::Short),
            ..GregorianOptions::default()
        };
        assert_eq!("11 Mar 2024", format_civil(date(2024, 3, 11), options));
    }

    #[test]
    fn test_numeric_month_switches_pattern() {
        let options = GregorianOptions {
            month: Some(MonthStyle::Numeric),
            ..GregorianOptions::default()
        };
        assert_eq!("11/3/2024", format_civil(date(2024, 3, 11), options));

        let options = GregorianOptions {
            day: Some(NumericStyle::TwoDigit),
            month: Some(MonthStyle::TwoDigit),
            ..GregorianOptions::default()
        };
        assert_eq!("05/03/2024", format_civil(date(2024, 3, 5), options));
    }

    #[test]
    fn test_two_digit_year() {
        let options = GregorianOptions {
            year: Some(NumericStyle::TwoDigit),
            ..GregorianOptions::default()
        };
        assert_eq!("11 Maret 24", format_civil(date(2024, 3, 11), options));
    }

    #[test]
    fn test_weekday_prefix() {
        // 2024-03-11 was a Monday
        let options = GregorianOptions {
            weekday: Some(TextStyle::Long),
            ..GregorianOptions::default()
        };
        assert_eq!(
            "Senin, 11 Maret 2024",
            format_civil(date(2024, 3, 11), options)
        );

        let options = GregorianOptions {
            weekday: Some(TextStyle::Short),
            ..GregorianOptions::default()
        };
        assert_eq!(
            "Sen, 11 Maret 2024",
            format_civil(date(2024, 3, 11), options)
        );
    }

    #[test]
    fn test_partial_options_keep_other_defaults() {
        // only the month style is overridden; day and year stay numeric
        let options = GregorianOptions {
            month: Some(MonthStyle::Short),
            ..GregorianOptions::default()
        };
        assert_eq!("5 Agu 2024", format_civil(date(2024, 8, 5), options));
    }

    #[test]
    fn test_every_month_name_is_used() {
        for month in 1..=12u32 {
            let formatted = format_civil(date(2024, month, 1), GregorianOptions::default());
            assert!(
                formatted.contains(GREGORIAN_MONTH_NAMES[(month - 1) as usize]),
                "{formatted}"
            );
        }
    }

    #[test]
    fn test_format_lunar() {
        let hijri = HijriDate::new(1445, 9, 1).expect("valid date");
        assert_eq!("1 Ramadhan 1445 H", format_lunar(hijri));

        let hijri = HijriDate::new(1446, 12, 29).expect("valid date");
        assert_eq!("29 Dzulhijjah 1446 H", format_lunar(hijri));
    }

    #[test]
    fn test_format_lunar_fallback_shape() {
        assert_eq!("1 Muharram 1445 H", format_lunar(HijriDate::FALLBACK));
    }
}
