use crate::consts::{MAX_GREGORIAN_YEAR, MAX_MONTH};
use crate::prelude::*;

/// The raw `BirthInfo` or option field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InputField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "longitude")]
    Longitude,
    #[display(fmt = "UTC offset (minutes)")]
    UtcOffset,
}

/// Which calendar a date was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    #[display(fmt = "Solar")]
    Solar,
    #[display(fmt = "Lunar")]
    Lunar,
}

/// A date that cannot exist in its calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid year: {0} (must be 1-{limit})", limit = MAX_GREGORIAN_YEAR)]
    Year(i32),

    #[error("Invalid month: {0} (must be 1-{limit})", limit = MAX_MONTH)]
    Month(u8),

    #[error("Invalid day {day} for month {year:04}-{month:02} (has {max} days)")]
    SolarDay { year: i32, month: u8, day: u8, max: u8 },

    #[error("Lunar year {year} has no leap month {month}")]
    NoLeapMonth { year: i32, month: u8 },

    #[error(
        "Invalid day {day} for lunar {}month {year:04}-{month:02} (has {max} days)",
        leap_prefix(.is_leap_month)
    )]
    LunarDay {
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
        max: u8,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn leap_prefix(is_leap_month: &bool) -> &'static str {
    if *is_leap_month { "leap " } else { "" }
}

/// Error type for every conversion and calculation in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SajuError {
    /// A raw field is outside its numeric range.
    #[error("Invalid {field}: {value} (must be {min}-{max})")]
    InvalidInput {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The date lies outside the span covered by the calendar table.
    #[error("{calendar} date {year:04}-{month:02}-{day:02} is outside the supported span")]
    OutOfRange {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
    },

    /// The date is structurally impossible.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// Text could not be parsed.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl SajuError {
    pub(crate) fn invalid_input(field: InputField, value: impl Into<f64>, min: i32, max: i32) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
            min: f64::from(min),
            max: f64::from(max),
        }
    }
}

/// Checks that `value` is in `min..=max`, naming `field` otherwise.
pub(crate) fn check_range(field: InputField, value: i32, min: i32, max: i32) -> Result<(), SajuError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SajuError::invalid_input(field, value, min, max))
    }
}
