use chrono::NaiveDate;

use crate::consts::{
    ANCHOR_GREGORIAN, ANCHOR_HIJRI_MONTH, ANCHOR_HIJRI_YEAR, FIRST_DAY_SCAN_LIMIT,
    MEAN_MONTH_DAYS, MEAN_YEAR_DAYS, MONTH_END_SCAN_LIMIT, MONTH_TAIL_JUMP_DAYS,
    RESCAN_BACKOFF_DAYS, SEED_BACKOFF_DAYS,
};
use crate::range::{HijriMonthRange, Precision};
use crate::tabular::{HijriSource, SourceError, Tabular};
use crate::types::{HijriDate, HijriDay, HijriMonth};

/// Converts between Gregorian dates and the Hijri calendar.
///
/// The Hijri calendar has no closed-form relation to the Gregorian one:
/// where a month begins depends on the tabular convention of the
/// conversion source, not on arithmetic this side of the seam. Month
/// boundaries are therefore recovered by seeding near a known anchor
/// and scanning day by day under a hard iteration ceiling.
#[derive(Debug, Default, Clone, Copy)]
pub struct Converter<S = Tabular> {
    source: S,
}

impl Converter {
    /// Creates a converter backed by the built-in tabular source.
    pub const fn new() -> Self {
        Self { source: Tabular }
    }
}

impl<S: HijriSource> Converter<S> {
    /// Creates a converter over a custom conversion source.
    pub const fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Converts a Gregorian date into the Hijri calendar.
    ///
    /// # Errors
    /// Returns `SourceError` when the underlying source cannot represent
    /// the date or yields components that do not form a Hijri date.
    pub fn try_to_hijri(&self, date: NaiveDate) -> Result<HijriDate, SourceError> {
        let (year, month, day) = self.source.hijri_parts(date)?;
        HijriDate::new(year, month, day).map_err(|_| SourceError::Unrepresentable(date))
    }

    /// Infallible form of [`Converter::try_to_hijri`].
    ///
    /// A failing source degrades to [`HijriDate::FALLBACK`] so that
    /// rendering never blocks on a calendar fault. Callers that need to
    /// tell the fallback apart from a genuine result use the `try_`
    /// variant.
    pub fn to_hijri(&self, date: NaiveDate) -> HijriDate {
        self.try_to_hijri(date).unwrap_or(HijriDate::FALLBACK)
    }

    /// Resolves the Gregorian dates bounding one Hijri month.
    ///
    /// Seeds from the anchor plus a mean-length offset, backs off, then
    /// scans forward for the exact first day of the target month. When
    /// the scan ceiling is hit the range is marked
    /// [`Precision::Approximate`] instead of failing: callers render
    /// something slightly off rather than nothing.
    pub fn month_range(&self, month: HijriMonth, year: i32) -> HijriMonthRange {
        let offset = (i64::from(year) - i64::from(ANCHOR_HIJRI_YEAR)) * MEAN_YEAR_DAYS
            + (i64::from(month.get()) - i64::from(ANCHOR_HIJRI_MONTH)) * MEAN_MONTH_DAYS;
        let approx = add_days(anchor_date(), offset);
        let seed = add_days(approx, -SEED_BACKOFF_DAYS);
        let target = (year, month.get());

        let first_day = scan_days(seed, FIRST_DAY_SCAN_LIMIT, |date| {
            self.source
                .hijri_parts(date)
                .is_ok_and(|(y, m, d)| (y, m) == target && d == 1)
        });

        let (start, precision) = match first_day {
            Some(date) => (date, Precision::Exact),
            None => {
                // Restart earlier and settle for any day of the target
                // month; near year boundaries the exact first day can
                // fall outside the first window.
                let rescan = scan_days(
                    add_days(seed, -RESCAN_BACKOFF_DAYS),
                    FIRST_DAY_SCAN_LIMIT,
                    |date| {
                        self.source
                            .hijri_parts(date)
                            .is_ok_and(|(y, m, _)| (y, m) == target)
                    },
                );
                (rescan.unwrap_or(approx), Precision::Approximate)
            }
        };

        // Jump past the shortest possible month, then walk to the last
        // day still converting into the target month. Terminates for
        // both 29- and 30-day months.
        let tail = add_days(start, MONTH_TAIL_JUMP_DAYS);
        let end = scan_days(tail, MONTH_END_SCAN_LIMIT + 1, |date| {
            !self
                .source
                .hijri_parts(add_days(date, 1))
                .is_ok_and(|(y, m, _)| (y, m) == target)
        })
        .unwrap_or_else(|| add_days(tail, i64::from(MONTH_END_SCAN_LIMIT)));

        HijriMonthRange::from_parts(start, end, precision)
    }

    /// Resolves a Hijri date to the Gregorian day it falls on.
    ///
    /// `day` is not checked against the actual 29/30-day length of the
    /// month: day 30 of a 29-day month rolls into the first day of the
    /// following month.
    pub fn to_gregorian(&self, day: HijriDay, month: HijriMonth, year: i32) -> NaiveDate {
        let range = self.month_range(month, year);
        add_days(range.start(), i64::from(day.get()) - 1)
    }
}

/// Scans forward one day at a time, at most `limit` steps, returning
/// the first date satisfying the predicate.
fn scan_days<P>(from: NaiveDate, limit: u32, mut pred: P) -> Option<NaiveDate>
where
    P: FnMut(NaiveDate) -> bool,
{
    let mut cursor = from;
    for _ in 0..limit {
        if pred(cursor) {
            return Some(cursor);
        }
        cursor = cursor.succ_opt()?;
    }
    None
}

fn anchor_date() -> NaiveDate {
    let (year, month, day) = ANCHOR_GREGORIAN;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    chrono::TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}
