use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a month boundary was resolved.
///
/// `Approximate` is the non-fatal signal that the bounded scan hit its
/// iteration ceiling and the range is best-effort rather than exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Exact,
    Approximate,
}

/// Error type for month-range construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid month range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Gregorian dates bounding exactly one Hijri month (inclusive).
///
/// Every day within `[start, end]` converts to the same Hijri
/// (month, year); the span is 28 or 29 days for 29- and 30-day months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HijriMonthRange {
    start: NaiveDate,
    end:   NaiveDate,
    precision: Precision,
}

impl HijriMonthRange {
    /// Creates a new month range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        precision: Precision,
    ) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            precision,
        })
    }

    // The scan resolves end at least 27 days after start, so ordering
    // holds by construction.
    pub(crate) fn from_parts(start: NaiveDate, end: NaiveDate, precision: Precision) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            precision,
        }
    }

    /// Returns the first Gregorian day of the month
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last Gregorian day of the month
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both bounds as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// How the boundaries were resolved
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns `true` when both boundaries were pinned exactly
    pub const fn is_exact(&self) -> bool {
        matches!(self.precision, Precision::Exact)
    }

    /// Number of whole days from start to end
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl<'de> Deserialize<'de> for HijriMonthRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            start: NaiveDate,
            end: NaiveDate,
            precision: Precision,
        }

        let repr = Repr::deserialize(deserializer)?;
        Self::new(repr.start, repr.end, repr.precision).map_err(serde::de::Error::custom)
    }
}
