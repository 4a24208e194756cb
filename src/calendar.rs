//! Conversion between the lunisolar calendar and the Gregorian calendar.
//!
//! Every lunar year from [`MIN_YEAR`] to [`MAX_YEAR`] is described by one
//! packed word of `LUNAR_YEAR_INFO`:
//!
//! - bits 0-3: the month that is followed by a leap month, or 0 for none
//! - bits 4-15: one bit per month, January in bit 15; set for a 30-day month
//! - bit 16: set when the leap month has 30 days
//!
//! Lunar 1900-01-01 falls on solar 1900-01-31, which anchors all offsets.
//!
//! The table follows the Korean calendar: a month begins on the civil day of
//! the new moon in Korean standard time, and a month without a principal
//! term becomes the leap month. Korean time was UTC+8:30 before 1912 and
//! again from 1954-03-21 to 1961-08-09, and UTC+9 otherwise. Where the new
//! moon falls near midnight this places months one day later than the
//! Chinese (UTC+8) calendar, and it moves the leap month in some years
//! (2012 has 윤3월 and 2017 has 윤5월).

use crate::consts::{
    LUNAR_EPOCH_JDN, MAX_LUNAR_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, SMALL_LUNAR_MONTH_DAYS,
};
use crate::error::{Calendar, DateError, SajuError};
use crate::types::{LunarDate, SolarDate};

#[allow(clippy::cast_sign_loss)]
const YEAR_COUNT: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

const LEAP_MONTH_MASK: u32 = 0xf;
const BIG_LEAP_MONTH_BIT: u32 = 0x1_0000;

#[rustfmt::skip]
const LUNAR_YEAR_INFO: [u32; YEAR_COUNT] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x05565, 0x0d2a0, 0x0e950, 0x16554, 0x056a0, 0x0aad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5d6, 0x0a4d0, 0x0d250, 0x0da95, 0x0b550, 0x056a0, 0x0ada2, 0x095d0, 0x04bb7, // 1910-1919
    0x049b0, 0x0a4b0, 0x0b4b5, 0x06a90, 0x0ad40, 0x0bb54, 0x02b60, 0x095b0, 0x05372, 0x04970, // 1920-1929
    0x06566, 0x0e4a0, 0x0ea50, 0x16a95, 0x05b50, 0x02b60, 0x18ae3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b690, 0x056d0, 0x125b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0d557, // 1940-1949
    0x0b4a0, 0x0b550, 0x15555, 0x04db0, 0x025b0, 0x18573, 0x052b0, 0x0a9b8, 0x06950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05270, 0x07263, 0x0d950, 0x06b57, 0x056a0, // 1960-1969
    0x09ad0, 0x04dd5, 0x04ae0, 0x0a4e0, 0x0d4d4, 0x0d250, 0x0d598, 0x0b540, 0x0d6a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a9b4, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0b756, 0x02b60, 0x095b0, // 1980-1989
    0x04b75, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06d98, 0x05ad0, 0x02b60, 0x096e5, 0x092e0, // 1990-1999
    0x0c960, 0x0e954, 0x0d4a0, 0x0da50, 0x07552, 0x056c0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x1b4a3, 0x0b550, 0x055d9, 0x04ba0, 0x0a5b0, 0x05575, 0x052b0, 0x0a950, // 2010-2019
    0x0b954, 0x06aa0, 0x0ad50, 0x06b52, 0x04b60, 0x0a6e6, 0x0a570, 0x05270, 0x06a65, 0x0d930, // 2020-2029
    0x05aa0, 0x0b6a3, 0x096d0, 0x04afb, 0x04ae0, 0x0a4d0, 0x1d0d6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b6a0, 0x096d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0b250, 0x1b255, 0x06d40, 0x0ada0, // 2040-2049
    0x18b63, 0x09570, 0x14978, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1aac4, 0x0ab60, // 2050-2059
    0x09370, 0x052e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0aad0, 0x095d4, // 2060-2069
    0x092d0, 0x0c9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b2b3, 0x0a930, 0x07557, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054f4, 0x05260, // 2080-2089
    0x0e968, 0x0d530, 0x05aa0, 0x1aaa6, 0x096d0, 0x04ae0, 0x0aad4, 0x0a4d0, 0x0d260, 0x0f253, // 2090-2099
    0x0d520, // 2100
];

/// The process-wide calendar table.
pub static CALENDAR: CalendarTable = CalendarTable::new();

/// Read-only lunar month data with the day offset of every year from the epoch.
#[derive(Debug)]
pub struct CalendarTable {
    /// `starts[i]` is the number of days from the epoch to the first day of year `MIN_YEAR + i`;
    /// the final entry is one past the last day of the table.
    starts: [u32; YEAR_COUNT + 1],
}

/// One lunar year of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarYear {
    year: i32,
    info: u32,
}

/// A month of a lunar year in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarMonth {
    pub month: u8,
    pub is_leap: bool,
    pub days: u8,
}

impl LunarYear {
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The month followed by a leap month this year, if any.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn leap_month(self) -> Option<u8> {
        match (self.info & LEAP_MONTH_MASK) as u8 {
            0 => None,
            month => Some(month),
        }
    }

    /// Length of ordinary month `month` (1-12).
    pub const fn month_days(self, month: u8) -> u8 {
        debug_assert!(month != 0 && month <= MAX_MONTH);
        if self.info & (BIG_LEAP_MONTH_BIT >> month) == 0 {
            SMALL_LUNAR_MONTH_DAYS
        } else {
            MAX_LUNAR_DAY
        }
    }

    /// Length of the leap month, if the year has one.
    pub const fn leap_month_days(self) -> Option<u8> {
        if self.leap_month().is_none() {
            None
        } else if self.info & BIG_LEAP_MONTH_BIT == 0 {
            Some(SMALL_LUNAR_MONTH_DAYS)
        } else {
            Some(MAX_LUNAR_DAY)
        }
    }

    /// Total number of days in the year.
    pub const fn days(self) -> u32 {
        let mut days = 0;
        let mut month = 1;
        while month <= MAX_MONTH {
            days += self.month_days(month) as u32;
            month += 1;
        }
        if let Some(leap) = self.leap_month_days() {
            days += leap as u32;
        }
        days
    }

    /// All months of the year in order; a leap month directly follows its ordinary month.
    pub fn months(self) -> impl Iterator<Item = LunarMonth> {
        (1..=MAX_MONTH).flat_map(move |month| {
            let common = LunarMonth {
                month,
                is_leap: false,
                days: self.month_days(month),
            };
            let leap = self
                .leap_month_days()
                .filter(|_| self.leap_month() == Some(month))
                .map(|days| LunarMonth {
                    month,
                    is_leap: true,
                    days,
                });
            std::iter::once(common).chain(leap)
        })
    }
}

impl CalendarTable {
    const fn new() -> Self {
        let mut starts = [0; YEAR_COUNT + 1];
        let mut i = 0;
        while i < YEAR_COUNT {
            let year = LunarYear {
                year: MIN_YEAR,
                info: LUNAR_YEAR_INFO[i],
            };
            starts[i + 1] = starts[i] + year.days();
            i += 1;
        }
        Self { starts }
    }

    /// First lunar year of the table.
    pub const fn first_year(&self) -> i32 {
        MIN_YEAR
    }

    /// Last lunar year of the table.
    pub const fn last_year(&self) -> i32 {
        MAX_YEAR
    }

    /// The solar date of lunar `MIN_YEAR`-01-01.
    pub const fn epoch(&self) -> SolarDate {
        SolarDate::from_jdn(LUNAR_EPOCH_JDN)
    }

    /// Looks up one lunar year, or `None` outside the table.
    #[allow(clippy::cast_sign_loss)]
    pub fn year(&self, year: i32) -> Option<LunarYear> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        Some(LunarYear {
            year,
            info: LUNAR_YEAR_INFO[(year - MIN_YEAR) as usize],
        })
    }

    /// Days from the epoch to the given lunar date.
    #[allow(clippy::cast_sign_loss)]
    fn day_offset(&self, year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<u32, SajuError> {
        let lunar_year = self.year(year).ok_or(SajuError::OutOfRange {
            calendar: Calendar::Lunar,
            year,
            month,
            day,
        })?;
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::Month(month).into());
        }
        if is_leap_month && lunar_year.leap_month() != Some(month) {
            return Err(DateError::NoLeapMonth { year, month }.into());
        }

        let mut offset = self.starts[(year - MIN_YEAR) as usize];
        for m in lunar_year.months() {
            if m.month == month && m.is_leap == is_leap_month {
                if day < MIN_DAY || day > m.days {
                    return Err(DateError::LunarDay {
                        year,
                        month,
                        day,
                        is_leap_month,
                        max: m.days,
                    }
                    .into());
                }
                return Ok(offset + u32::from(day - MIN_DAY));
            }
            offset += u32::from(m.days);
        }
        // months() yields every ordinary month and the leap month checked above
        Err(DateError::NoLeapMonth { year, month }.into())
    }

    /// Checks that a lunar date exists in the table.
    pub(crate) fn validate(&self, year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<(), SajuError> {
        self.day_offset(year, month, day, is_leap_month).map(|_| ())
    }

    /// Converts a lunar date to its solar date.
    ///
    /// # Errors
    /// Returns `SajuError::OutOfRange` if `year` is not covered by the table, and
    /// `SajuError::InvalidDate` if the month does not exist, `is_leap_month` is set for a month
    /// without a leap occurrence, or `day` exceeds the length of the month.
    #[allow(clippy::cast_possible_wrap)]
    pub fn lunar_to_solar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
    ) -> Result<SolarDate, SajuError> {
        let offset = self.day_offset(year, month, day, is_leap_month)?;
        let solar = SolarDate::from_jdn(LUNAR_EPOCH_JDN + offset as i32);
        log::debug!(
            "lunar {} -> solar {solar}",
            LunarDate::new_unchecked(year, month, day, is_leap_month)
        );
        Ok(solar)
    }

    /// Converts a solar date to its lunar date.
    ///
    /// # Errors
    /// Returns `SajuError::OutOfRange` if the year is outside the table or the date precedes its
    /// epoch, and `SajuError::InvalidDate` for an impossible Gregorian date inside the table.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn solar_to_lunar(&self, year: i32, month: u8, day: u8) -> Result<LunarDate, SajuError> {
        let out_of_range = SajuError::OutOfRange {
            calendar: Calendar::Solar,
            year,
            month,
            day,
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(out_of_range);
        }
        let solar = SolarDate::new(year, month, day)?;
        if solar.jdn() < LUNAR_EPOCH_JDN {
            return Err(out_of_range);
        }

        let offset = (solar.jdn() - LUNAR_EPOCH_JDN) as u32;
        let index = self.starts.partition_point(|&start| start <= offset) - 1;
        if index >= YEAR_COUNT {
            return Err(out_of_range);
        }
        let lunar_year = LunarYear {
            year: MIN_YEAR + index as i32,
            info: LUNAR_YEAR_INFO[index],
        };

        let mut remaining = offset - self.starts[index];
        for m in lunar_year.months() {
            let days = u32::from(m.days);
            if remaining < days {
                let lunar = LunarDate::new_unchecked(
                    lunar_year.year,
                    m.month,
                    remaining as u8 + MIN_DAY,
                    m.is_leap,
                );
                log::debug!("solar {solar} -> lunar {lunar}");
                return Ok(lunar);
            }
            remaining -= days;
        }
        Err(out_of_range)
    }
}

/// Converts a lunar date to its solar date using the process-wide table.
///
/// # Errors
/// See [`CalendarTable::lunar_to_solar`].
pub fn lunar_to_solar(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<SolarDate, SajuError> {
    CALENDAR.lunar_to_solar(year, month, day, is_leap_month)
}

/// Converts a solar date to its lunar date using the process-wide table.
///
/// # Errors
/// See [`CalendarTable::solar_to_lunar`].
pub fn solar_to_lunar(year: i32, month: u8, day: u8) -> Result<LunarDate, SajuError> {
    CALENDAR.solar_to_lunar(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: u8, d: u8) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(CALENDAR.epoch(), solar(1900, 1, 31));
        assert_eq!(lunar_to_solar(1900, 1, 1, false).unwrap(), solar(1900, 1, 31));
    }

    #[test]
    fn test_year_layout() {
        struct TestCase {
            year: i32,
            leap_month: Option<u8>,
            leap_days: Option<u8>,
            months: [u8; 12],
        }

        let cases = [
            TestCase {
                year: 2017,
                leap_month: Some(5),
                leap_days: Some(29),
                months: [29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 30],
            },
            TestCase {
                year: 2012,
                leap_month: Some(3),
                leap_days: Some(30),
                months: [30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29],
            },
            TestCase {
                year: 2020,
                leap_month: Some(4),
                leap_days: Some(29),
                months: [30, 29, 30, 30, 30, 29, 29, 30, 29, 30, 29, 30],
            },
            TestCase {
                year: 1900,
                leap_month: Some(8),
                leap_days: Some(29),
                months: [29, 30, 29, 29, 30, 29, 30, 30, 30, 30, 29, 30],
            },
            TestCase {
                year: 2024,
                leap_month: None,
                leap_days: None,
                months: [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29],
            },
        ];

        for case in &cases {
            let year = CALENDAR.year(case.year).unwrap();
            assert_eq!(year.leap_month(), case.leap_month, "year {}", case.year);
            assert_eq!(year.leap_month_days(), case.leap_days, "year {}", case.year);
            for (i, &days) in case.months.iter().enumerate() {
                let month = u8::try_from(i + 1).unwrap();
                assert_eq!(year.month_days(month), days, "{}/{month}", case.year);
            }
            let expected_total: u32 = case.months.iter().map(|&d| u32::from(d)).sum::<u32>()
                + case.leap_days.map_or(0, u32::from);
            assert_eq!(year.days(), expected_total, "year {}", case.year);
            assert_eq!(
                year.months().count(),
                12 + usize::from(case.leap_month.is_some())
            );
        }
    }

    #[test]
    fn test_leap_month_follows_its_common_month() {
        let months: Vec<_> = CALENDAR.year(2023).unwrap().months().collect();
        assert_eq!(months[1].month, 2);
        assert!(!months[1].is_leap);
        assert_eq!(months[2].month, 2);
        assert!(months[2].is_leap);
        assert_eq!(months[3].month, 3);
    }

    #[test]
    fn test_year_lookup_bounds() {
        assert!(CALENDAR.year(1899).is_none());
        assert!(CALENDAR.year(1900).is_some());
        assert!(CALENDAR.year(2100).is_some());
        assert!(CALENDAR.year(2101).is_none());
        assert_eq!(CALENDAR.first_year(), 1900);
        assert_eq!(CALENDAR.last_year(), 2100);
    }

    #[test]
    fn test_lunar_new_years() {
        let cases = [
            (1950, solar(1950, 2, 17)),
            (1992, solar(1992, 2, 4)),
            // The new moon fell at 00:06 KST, 23:06 the day before in China
            (1997, solar(1997, 2, 8)),
            (2000, solar(2000, 2, 5)),
            (2024, solar(2024, 2, 10)),
            (2100, solar(2100, 2, 9)),
        ];
        for (year, expected) in cases {
            assert_eq!(lunar_to_solar(year, 1, 1, false).unwrap(), expected, "{year}");
        }
    }

    #[test]
    fn test_leap_month_conversions() {
        assert_eq!(lunar_to_solar(2012, 3, 1, true).unwrap(), solar(2012, 4, 21));
        assert_eq!(lunar_to_solar(2017, 5, 1, true).unwrap(), solar(2017, 6, 24));
        assert_eq!(lunar_to_solar(2020, 4, 1, true).unwrap(), solar(2020, 5, 23));
        assert_eq!(lunar_to_solar(2023, 2, 1, true).unwrap(), solar(2023, 3, 22));

        assert_eq!(
            solar_to_lunar(2012, 4, 21).unwrap(),
            LunarDate::new(2012, 3, 1, true).unwrap()
        );
        assert_eq!(
            solar_to_lunar(2017, 6, 24).unwrap(),
            LunarDate::new(2017, 5, 1, true).unwrap()
        );
        // China counts this day as the first of a leap sixth month
        assert_eq!(
            solar_to_lunar(2017, 7, 23).unwrap(),
            LunarDate::new(2017, 6, 1, false).unwrap()
        );
    }

    #[test]
    fn test_day_after_leap_month_is_next_common_month() {
        let last = lunar_to_solar(2017, 5, 29, true).unwrap();
        assert_eq!(last, solar(2017, 7, 22));

        let next = last.add_days(1);
        let lunar = solar_to_lunar(next.year(), next.month(), next.day()).unwrap();
        assert_eq!(lunar, LunarDate::new(2017, 6, 1, false).unwrap());
    }

    #[test]
    fn test_sample_birth_date() {
        assert_eq!(lunar_to_solar(1992, 9, 29, false).unwrap(), solar(1992, 10, 24));
        assert_eq!(
            solar_to_lunar(1992, 9, 8).unwrap(),
            LunarDate::new(1992, 8, 12, false).unwrap()
        );
    }

    #[test]
    fn test_missing_leap_month_is_rejected() {
        let result = lunar_to_solar(2024, 6, 1, true);
        assert!(matches!(
            result,
            Err(SajuError::InvalidDate(DateError::NoLeapMonth {
                year: 2024,
                month: 6
            }))
        ));

        // Korea intercalated the fifth month of 2017 and the third of 2012
        assert!(matches!(
            lunar_to_solar(2017, 6, 1, true),
            Err(SajuError::InvalidDate(DateError::NoLeapMonth { year: 2017, month: 6 }))
        ));
        assert!(matches!(
            lunar_to_solar(2012, 4, 1, true),
            Err(SajuError::InvalidDate(DateError::NoLeapMonth { year: 2012, month: 4 }))
        ));
    }

    #[test]
    fn test_day_beyond_month_length_is_rejected() {
        // The leap fifth month of 2017 is small, the leap third month of 2012 is big
        assert!(matches!(
            lunar_to_solar(2017, 5, 30, true),
            Err(SajuError::InvalidDate(DateError::LunarDay {
                is_leap_month: true,
                max: 29,
                ..
            }))
        ));
        assert!(lunar_to_solar(2012, 3, 30, true).is_ok());
        assert!(matches!(
            lunar_to_solar(2012, 2, 30, false),
            Err(SajuError::InvalidDate(DateError::LunarDay { max: 29, .. }))
        ));
        assert!(matches!(
            lunar_to_solar(2017, 6, 0, false),
            Err(SajuError::InvalidDate(DateError::LunarDay { day: 0, .. }))
        ));
        assert!(matches!(
            lunar_to_solar(2017, 13, 1, false),
            Err(SajuError::InvalidDate(DateError::Month(13)))
        ));
    }

    #[test]
    fn test_out_of_range_years() {
        for year in [1899, 2101] {
            assert!(
                matches!(
                    lunar_to_solar(year, 1, 1, false),
                    Err(SajuError::OutOfRange {
                        calendar: Calendar::Lunar,
                        ..
                    })
                ),
                "lunar {year}"
            );
            assert!(
                matches!(
                    solar_to_lunar(year, 6, 1),
                    Err(SajuError::OutOfRange {
                        calendar: Calendar::Solar,
                        ..
                    })
                ),
                "solar {year}"
            );
        }
    }

    #[test]
    fn test_solar_dates_before_epoch() {
        assert!(matches!(
            solar_to_lunar(1900, 1, 30),
            Err(SajuError::OutOfRange { .. })
        ));
        assert_eq!(
            solar_to_lunar(1900, 1, 31).unwrap(),
            LunarDate::new(1900, 1, 1, false).unwrap()
        );
    }

    #[test]
    fn test_last_supported_solar_date() {
        assert_eq!(
            solar_to_lunar(2100, 12, 31).unwrap(),
            LunarDate::new(2100, 12, 1, false).unwrap()
        );
    }

    #[test]
    fn test_invalid_solar_date() {
        assert!(matches!(
            solar_to_lunar(2023, 2, 29),
            Err(SajuError::InvalidDate(DateError::SolarDay { .. }))
        ));
    }

    #[test]
    fn test_span_is_checked_before_the_date() {
        for (year, month, day) in [(10_000, 1, 1), (1899, 2, 29), (2101, 2, 30), (0, 1, 1)] {
            assert!(
                matches!(
                    solar_to_lunar(year, month, day),
                    Err(SajuError::OutOfRange {
                        calendar: Calendar::Solar,
                        ..
                    })
                ),
                "{year}-{month}-{day}"
            );
        }
    }

    #[test]
    fn test_solar_round_trip_over_whole_range() {
        let mut date = CALENDAR.epoch();
        let end = solar(2100, 12, 31);
        let mut previous: Option<LunarDate> = None;
        while date <= end {
            let lunar = solar_to_lunar(date.year(), date.month(), date.day()).unwrap();
            let back =
                lunar_to_solar(lunar.year(), lunar.month(), lunar.day(), lunar.is_leap_month())
                    .unwrap();
            assert_eq!(back, date, "{date} -> {lunar}");
            if let Some(prev) = previous {
                assert!(prev < lunar, "{prev} should precede {lunar}");
            }
            previous = Some(lunar);
            date = date.add_days(1);
        }
    }

    #[test]
    fn test_lunar_round_trip_over_whole_table() {
        let last = solar(2100, 12, 31);
        for year in CALENDAR.first_year()..=CALENDAR.last_year() {
            for m in CALENDAR.year(year).unwrap().months() {
                for day in 1..=m.days {
                    let date = lunar_to_solar(year, m.month, day, m.is_leap).unwrap();
                    if date > last {
                        continue;
                    }
                    let lunar = solar_to_lunar(date.year(), date.month(), date.day()).unwrap();
                    assert_eq!(
                        lunar,
                        LunarDate::new(year, m.month, day, m.is_leap).unwrap(),
                        "{date}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_table_totals() {
        let leap_years = (CALENDAR.first_year()..=CALENDAR.last_year())
            .filter(|&y| CALENDAR.year(y).and_then(LunarYear::leap_month).is_some())
            .count();
        assert_eq!(leap_years, 74);
        assert_eq!(
            CALENDAR.epoch().add_days(i32::try_from(CALENDAR.starts[YEAR_COUNT]).unwrap()),
            solar(2101, 1, 29)
        );
    }
}
