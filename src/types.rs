use crate::calendar::CALENDAR;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_MONTH_MARKER, LEAP_YEAR_CYCLE, MAX_GREGORIAN_YEAR, MAX_MONTH, MINUTES_PER_DAY,
    MINUTES_PER_HOUR, MIN_DAY,
};
use crate::error::{DateError, InputField, SajuError, check_range};
use crate::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A proleptic Gregorian calendar date, guaranteed to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Creates a new solar date, validating month and day against the year.
    ///
    /// # Errors
    /// Returns `SajuError::InvalidDate` if the year is not in `1..=9999`, the month is not in
    /// `1..=12`, or the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, SajuError> {
        if !(1..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(DateError::Year(year).into());
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::Month(month).into());
        }
        let max = days_in_month(year, month);
        if day < MIN_DAY || day > max {
            return Err(DateError::SolarDay {
                year,
                month,
                day,
                max,
            }
            .into());
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian day number (JDN) of the date.
    pub const fn jdn(self) -> i32 {
        gregorian_jdn(self.year, self.month, self.day)
    }

    /// Creates a date from a Julian day number.
    ///
    /// The caller must keep `jdn` within the representable years.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) const fn from_jdn(jdn: i32) -> Self {
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Self {
            year,
            month: month as u8,
            day: day as u8,
        }
    }

    /// The date `days` days later (or earlier, if negative).
    pub(crate) const fn add_days(self, days: i32) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_date(s.trim())?;
        Self::new(year, parse_u8(month)?, parse_u8(day)?)
    }
}

/// A date of the lunisolar calendar, guaranteed to exist in the calendar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
    is_leap_month: bool,
}

impl LunarDate {
    /// Creates a new lunar date, validating it against the calendar table.
    ///
    /// # Errors
    /// Returns `SajuError::OutOfRange` if the year is not covered by the table, and
    /// `SajuError::InvalidDate` if the month, the leap flag or the day does not occur that year.
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self, SajuError> {
        CALENDAR.validate(year, month, day, is_leap_month)?;
        Ok(Self::new_unchecked(year, month, day, is_leap_month))
    }

    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    /// Whether the date lies in the intercalary copy of its month.
    pub const fn is_leap_month(self) -> bool {
        self.is_leap_month
    }
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // A leap month follows the ordinary month of the same number.
        (self.year, self.month, self.is_leap_month, self.day).cmp(&(
            other.year,
            other.month,
            other.is_leap_month,
            other.day,
        ))
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_leap_month {
            LEAP_MONTH_MARKER
        } else {
            ""
        };
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{marker}{:02}{DATE_SEPARATOR}{:02}",
            self.year, self.month, self.day
        )
    }
}

impl FromStr for LunarDate {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_date(s.trim())?;
        let (month, is_leap_month) = match month.strip_prefix(LEAP_MONTH_MARKER) {
            Some(rest) => (rest, true),
            None => (month, false),
        };
        Self::new(year, parse_u8(month)?, parse_u8(day)?, is_leap_month)
    }
}

string_serde!(SolarDate);
string_serde!(LunarDate);

/// A civil date and time with minute resolution, in a fixed but unspecified UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    date: SolarDate,
    hour: u8,
    minute: u8,
}

impl LocalDateTime {
    /// Creates a date-time from an already validated date.
    ///
    /// # Errors
    /// Returns `SajuError::InvalidInput` if `hour` or `minute` is out of range.
    pub fn new(date: SolarDate, hour: u8, minute: u8) -> Result<Self, SajuError> {
        check_range(InputField::Hour, i32::from(hour), 0, 23)?;
        check_range(InputField::Minute, i32::from(minute), 0, 59)?;
        Ok(Self { date, hour, minute })
    }

    pub const fn date(self) -> SolarDate {
        self.date
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight starting Julian day number 0.
    pub const fn minutes(self) -> i64 {
        self.date.jdn() as i64 * MINUTES_PER_DAY
            + self.hour as i64 * MINUTES_PER_HOUR
            + self.minute as i64
    }

    /// Inverse of [`LocalDateTime::minutes`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) const fn from_minutes(minutes: i64) -> Self {
        let jdn = minutes.div_euclid(MINUTES_PER_DAY);
        let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
        Self {
            date: SolarDate::from_jdn(jdn as i32),
            hour: (of_day / MINUTES_PER_HOUR) as u8,
            minute: (of_day % MINUTES_PER_HOUR) as u8,
        }
    }

    /// Shifts the time by a signed number of minutes, crossing dates as needed.
    pub(crate) const fn add_minutes(self, minutes: i64) -> Self {
        Self::from_minutes(self.minutes() + minutes)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.date, self.hour, self.minute)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Julian day number of a proleptic Gregorian date; the date is not validated.
pub(crate) const fn gregorian_jdn(year: i32, month: u8, day: u8) -> i32 {
    let (y, m, d) = (year, month as i32, day as i32);
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

fn split_date(s: &str) -> Result<(i32, &str, &str), SajuError> {
    let parts: Vec<&str> = s.split(DATE_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [year, month, day] => {
            let year = year
                .parse::<i32>()
                .map_err(|_| SajuError::InvalidFormat((*year).to_owned()))?;
            Ok((year, month, day))
        }
        _ => Err(SajuError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {s}"
        ))),
    }
}

fn parse_u8(s: &str) -> Result<u8, SajuError> {
    s.parse::<u8>()
        .map_err(|_| SajuError::InvalidFormat(s.to_owned()))
}
