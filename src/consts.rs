/// Earliest supported year (inclusive)
pub const MIN_YEAR: i32 = 1900;
/// Latest supported year (inclusive)
pub const MAX_YEAR: i32 = 2100;

/// Largest year a `SolarDate` can hold
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest possible Gregorian month
pub const MAX_SOLAR_DAY: u8 = 31;
/// Longest possible lunar month (a "big" month)
pub const MAX_LUNAR_DAY: u8 = 30;
/// Length of a "small" lunar month
pub const SMALL_LUNAR_MONTH_DAYS: u8 = 29;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Number of heavenly stems
pub const STEM_CYCLE: u8 = 10;
/// Number of earthly branches
pub const BRANCH_CYCLE: u8 = 12;
/// Length of the combined stem-branch cycle
pub const SEXAGENARY_CYCLE: u8 = 60;

/// A year whose pillar is 갑자 (甲子)
pub const YEAR_CYCLE_ANCHOR: i32 = 1984;

/// Julian day number of solar 1900-01-31, which is lunar 1900-01-01
pub const LUNAR_EPOCH_JDN: i32 = 2_415_051;
/// Sexagenary index of the day pillar on `LUNAR_EPOCH_JDN` (갑진, 甲辰)
pub const LUNAR_EPOCH_DAY_INDEX: i32 = 40;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 1440;

/// Korea Standard Time, UTC+9
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;
/// UTC-12:00
pub const MIN_UTC_OFFSET_MINUTES: i32 = -12 * 60;
/// UTC+14:00
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Mean-time shift per degree of longitude
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Prefix of a leap month in the textual form of a lunar date
pub const LEAP_MONTH_MARKER: &str = "윤";
