/// Maximum valid Hijri year (inclusive)
pub const MAX_HIJRI_YEAR: i32 = 9999;

/// Maximum valid Hijri month (Dzulhijjah)
pub const MAX_HIJRI_MONTH: u8 = 12;

/// Maximum valid Hijri day-of-month (long months only)
pub const MAX_HIJRI_DAY: u8 = 30;

/// First day of month, used for month starts
pub const MIN_DAY: u8 = 1;

/// Month number for Muharram
pub const MUHARRAM: u8 = 1;
/// Month number for Ramadhan
pub const RAMADHAN: u8 = 9;
/// Month number for Dzulhijjah
pub const DZULHIJJAH: u8 = 12;

/// Transliterated Hijri month names (index 0 = Muharram, month 1)
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Sya'ban",
    "Ramadhan",
    "Syawal",
    "Dzulqa'dah",
    "Dzulhijjah",
];

/// Indonesian Gregorian month names (index 0 = Januari)
pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Abbreviated Indonesian Gregorian month names
pub const GREGORIAN_MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Indonesian day-of-week names (index 0 = Minggu, Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

/// Abbreviated Indonesian day-of-week names
pub const WEEKDAY_ABBREV: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// Rendered in place of empty or unparseable format input
pub const EMPTY_SENTINEL: &str = "-";

/// Storage key holding the persisted display mode
pub const MODE_KEY: &str = "calendar_mode";
/// Persisted literal for Gregorian display
pub const MODE_CIVIL: &str = "masehi";
/// Persisted literal for Hijri display
pub const MODE_LUNAR: &str = "hijriyah";

/// Hijri year of the degraded fallback date
pub(crate) const FALLBACK_HIJRI_YEAR: i32 = 1445;

// Anchor pair: 1 Ramadhan 1445 fell on 2024-03-11. Month-boundary
// searches seed from an approximate offset against this date.
pub(crate) const ANCHOR_HIJRI_YEAR: i32 = 1445;
pub(crate) const ANCHOR_HIJRI_MONTH: u8 = 9;
pub(crate) const ANCHOR_GREGORIAN: (i32, u32, u32) = (2024, 3, 11);

/// Mean Hijri year length in days, used for offset seeding
pub(crate) const MEAN_YEAR_DAYS: i64 = 354;
/// Mean Hijri month length in days, used for offset seeding
pub(crate) const MEAN_MONTH_DAYS: i64 = 29;
/// Days backed off the approximate month start before scanning
pub(crate) const SEED_BACKOFF_DAYS: i64 = 20;
/// Additional back-off before the approximate rescan
pub(crate) const RESCAN_BACKOFF_DAYS: i64 = 15;
/// Iteration ceiling for the first-day scan
pub(crate) const FIRST_DAY_SCAN_LIMIT: u32 = 40;
/// Days jumped past a resolved month start before probing for the end;
/// day 1 + 27 is still inside the shortest possible month
pub(crate) const MONTH_TAIL_JUMP_DAYS: i64 = 27;
/// Iteration ceiling for the month-end scan
pub(crate) const MONTH_END_SCAN_LIMIT: u32 = 10;
