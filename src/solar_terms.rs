//! The 24 solar terms (절기) and the instants at which they begin.
//!
//! A term begins when the apparent geocentric longitude of the Sun reaches a
//! multiple of 15°. The crossing is found by bisection on the longitude from
//! [`crate::ephemeris`] in TT, then moved to universal time with ΔT and rounded
//! to the nearest civil minute, as almanacs print it. Instants agree with the
//! tables of the Korea Astronomy and Space Science Institute to within a minute.

use crate::consts::MINUTES_PER_DAY;
use crate::ephemeris::{apparent_solar_longitude, universal_time};
use crate::prelude::*;
use crate::sexagenary::Branch;
use crate::types::{LocalDateTime, gregorian_jdn};

/// Mean spacing between consecutive terms
const DAYS_PER_TERM: f64 = 365.242_19 / 24.0;
const SEARCH_HALF_WIDTH_DAYS: f64 = 4.0;
/// About a tenth of a second
const CONVERGENCE_DAYS: f64 = 1e-6;
const MAX_ITERATIONS: u32 = 64;

/// A solar term, ordered as they fall in a Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum SolarTerm {
    #[display(fmt = "소한")]
    MinorCold,
    #[display(fmt = "대한")]
    MajorCold,
    #[display(fmt = "입춘")]
    StartOfSpring,
    #[display(fmt = "우수")]
    RainWater,
    #[display(fmt = "경칩")]
    AwakeningOfInsects,
    #[display(fmt = "춘분")]
    SpringEquinox,
    #[display(fmt = "청명")]
    PureBrightness,
    #[display(fmt = "곡우")]
    GrainRain,
    #[display(fmt = "입하")]
    StartOfSummer,
    #[display(fmt = "소만")]
    GrainFull,
    #[display(fmt = "망종")]
    GrainInEar,
    #[display(fmt = "하지")]
    SummerSolstice,
    #[display(fmt = "소서")]
    MinorHeat,
    #[display(fmt = "대서")]
    MajorHeat,
    #[display(fmt = "입추")]
    StartOfAutumn,
    #[display(fmt = "처서")]
    EndOfHeat,
    #[display(fmt = "백로")]
    WhiteDew,
    #[display(fmt = "추분")]
    AutumnEquinox,
    #[display(fmt = "한로")]
    ColdDew,
    #[display(fmt = "상강")]
    FrostDescent,
    #[display(fmt = "입동")]
    StartOfWinter,
    #[display(fmt = "소설")]
    MinorSnow,
    #[display(fmt = "대설")]
    MajorSnow,
    #[display(fmt = "동지")]
    WinterSolstice,
}

const TERM_HANJA: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨", "立夏", "小滿", "芒種", "夏至",
    "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

impl SolarTerm {
    pub const ALL: [Self; 24] = [
        Self::MinorCold,
        Self::MajorCold,
        Self::StartOfSpring,
        Self::RainWater,
        Self::AwakeningOfInsects,
        Self::SpringEquinox,
        Self::PureBrightness,
        Self::GrainRain,
        Self::StartOfSummer,
        Self::GrainFull,
        Self::GrainInEar,
        Self::SummerSolstice,
        Self::MinorHeat,
        Self::MajorHeat,
        Self::StartOfAutumn,
        Self::EndOfHeat,
        Self::WhiteDew,
        Self::AutumnEquinox,
        Self::ColdDew,
        Self::FrostDescent,
        Self::StartOfWinter,
        Self::MinorSnow,
        Self::MajorSnow,
        Self::WinterSolstice,
    ];

    /// The twelve sectional terms (절) that open the months of the Four Pillars calendar.
    pub const SECTIONAL: [Self; 12] = [
        Self::MinorCold,
        Self::StartOfSpring,
        Self::AwakeningOfInsects,
        Self::PureBrightness,
        Self::StartOfSummer,
        Self::GrainInEar,
        Self::MinorHeat,
        Self::StartOfAutumn,
        Self::WhiteDew,
        Self::ColdDew,
        Self::StartOfWinter,
        Self::MajorSnow,
    ];

    /// Position within the Gregorian year, 0 for 소한.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn korean(self) -> String {
        self.to_string()
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self as usize]
    }

    /// Apparent solar longitude at which the term begins, in degrees.
    pub fn longitude(self) -> f64 {
        (285.0 + 15.0 * f64::from(self.index())) % 360.0
    }

    /// Whether this is a sectional term (절) rather than a principal term (중기).
    pub const fn is_sectional(self) -> bool {
        self.index() % 2 == 0
    }

    /// The branch of the month a sectional term opens: 소한 opens 축, 입춘 opens 인, …,
    /// 대설 opens 자. `None` for principal terms.
    pub const fn month_branch(self) -> Option<Branch> {
        if self.is_sectional() {
            Some(Branch::from_index(self.index() / 2 + 1))
        } else {
            None
        }
    }
}

/// The local civil minute at which `term` of Gregorian `year` begins.
///
/// `utc_offset_minutes` selects the civil time zone. The instant is rounded to
/// the nearest minute, and a birth moment in that minute counts as after the term.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn solar_term_instant(year: i32, term: SolarTerm, utc_offset_minutes: i32) -> LocalDateTime {
    let jd = universal_time(solar_term_ephemeris_date(year, term));
    let minutes = ((jd + 0.5) * MINUTES_PER_DAY as f64).round() as i64 + i64::from(utc_offset_minutes);
    let instant = LocalDateTime::from_minutes(minutes);
    log::trace!("{term} of {year} begins at {instant} (UTC offset {utc_offset_minutes} min)");
    instant
}

/// Julian ephemeris date (TT) at which `term` of `year` begins.
fn solar_term_ephemeris_date(year: i32, term: SolarTerm) -> f64 {
    // Terms start near 6 January and then arrive every ~15.2 days
    let january_sixth = f64::from(gregorian_jdn(year, 1, 6)) - 0.5;
    let guess = january_sixth + DAYS_PER_TERM * f64::from(term.index());
    let target = term.longitude();
    let offset_at = |jd: f64| normalize_to_pm180(apparent_solar_longitude(jd) - target);

    let t_a = guess - SEARCH_HALF_WIDTH_DAYS;
    let t_b = guess + SEARCH_HALF_WIDTH_DAYS;
    bisect_zero(t_a, offset_at(t_a), t_b, &offset_at)
}

/// Maps an angle difference to `[-180, 180)`.
fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 180.0 { d - 360.0 } else { d }
}

/// Bisect to find the zero crossing of `f_at` between `t_a` and `t_b`.
fn bisect_zero<F>(mut t_a: f64, mut f_a: f64, mut t_b: f64, f_at: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..MAX_ITERATIONS {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid);

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    0.5 * (t_a + t_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_UTC_OFFSET_MINUTES;
    use crate::types::SolarDate;

    fn kst(y: i32, mo: u8, d: u8, h: u8, mi: u8) -> LocalDateTime {
        LocalDateTime::new(SolarDate::new(y, mo, d).unwrap(), h, mi).unwrap()
    }

    fn assert_near(actual: LocalDateTime, expected: LocalDateTime, tolerance: i64) {
        let diff = (actual.minutes() - expected.minutes()).abs();
        assert!(
            diff <= tolerance,
            "{actual} is {diff} minutes from {expected} (tolerance {tolerance})"
        );
    }

    #[test]
    fn test_published_instants_2024() {
        // Korea Astronomy and Space Science Institute almanac for 2024, KST
        let published = [
            (SolarTerm::MinorCold, 1, 6, 5, 49),
            (SolarTerm::MajorCold, 1, 20, 23, 7),
            (SolarTerm::StartOfSpring, 2, 4, 17, 27),
            (SolarTerm::RainWater, 2, 19, 13, 13),
            (SolarTerm::AwakeningOfInsects, 3, 5, 11, 23),
            (SolarTerm::SpringEquinox, 3, 20, 12, 6),
            (SolarTerm::PureBrightness, 4, 4, 16, 2),
            (SolarTerm::GrainRain, 4, 19, 22, 59),
            (SolarTerm::StartOfSummer, 5, 5, 9, 10),
            (SolarTerm::GrainFull, 5, 20, 21, 59),
            (SolarTerm::GrainInEar, 6, 5, 13, 10),
            (SolarTerm::SummerSolstice, 6, 21, 5, 51),
            (SolarTerm::MinorHeat, 7, 6, 23, 20),
            (SolarTerm::MajorHeat, 7, 22, 16, 44),
            (SolarTerm::StartOfAutumn, 8, 7, 9, 9),
            (SolarTerm::EndOfHeat, 8, 22, 23, 55),
            (SolarTerm::WhiteDew, 9, 7, 12, 11),
            (SolarTerm::AutumnEquinox, 9, 22, 21, 44),
            (SolarTerm::ColdDew, 10, 8, 4, 0),
            (SolarTerm::FrostDescent, 10, 23, 7, 15),
            (SolarTerm::StartOfWinter, 11, 7, 7, 20),
            (SolarTerm::MinorSnow, 11, 22, 4, 56),
            (SolarTerm::MajorSnow, 12, 7, 0, 17),
            (SolarTerm::WinterSolstice, 12, 21, 18, 21),
        ];

        for (term, month, day, hour, minute) in published {
            let instant = solar_term_instant(2024, term, DEFAULT_UTC_OFFSET_MINUTES);
            assert_near(instant, kst(2024, month, day, hour, minute), 1);
        }
    }

    #[test]
    fn test_published_instants_other_years() {
        struct TestCase {
            year: i32,
            term: SolarTerm,
            expected: LocalDateTime,
        }

        let cases = [
            TestCase {
                year: 2023,
                term: SolarTerm::StartOfSpring,
                expected: kst(2023, 2, 4, 11, 42),
            },
            TestCase {
                year: 2023,
                term: SolarTerm::MajorSnow,
                expected: kst(2023, 12, 7, 18, 33),
            },
            TestCase {
                year: 2023,
                term: SolarTerm::WinterSolstice,
                expected: kst(2023, 12, 22, 12, 27),
            },
            TestCase {
                year: 2000,
                term: SolarTerm::SpringEquinox,
                expected: kst(2000, 3, 20, 16, 35),
            },
            TestCase {
                year: 2000,
                term: SolarTerm::WinterSolstice,
                expected: kst(2000, 12, 21, 22, 37),
            },
        ];

        for case in &cases {
            let instant = solar_term_instant(case.year, case.term, DEFAULT_UTC_OFFSET_MINUTES);
            assert_near(instant, case.expected, 1);
        }
    }

    #[test]
    fn test_utc_offset_shifts_civil_minute() {
        let kst = solar_term_instant(2024, SolarTerm::StartOfSpring, 540);
        let utc = solar_term_instant(2024, SolarTerm::StartOfSpring, 0);
        assert_eq!(kst.minutes() - utc.minutes(), 540);
    }

    #[test]
    fn test_terms_are_ordered_within_a_year() {
        for year in [1900, 1950, 2000, 2024, 2100] {
            let instants: Vec<_> = SolarTerm::ALL
                .iter()
                .map(|&t| solar_term_instant(year, t, DEFAULT_UTC_OFFSET_MINUTES))
                .collect();
            for (term, instant) in SolarTerm::ALL.iter().zip(&instants) {
                assert_eq!(instant.date().year(), year, "{term} of {year}");
                // Each term falls in month index / 2 + 1, from the 3rd to the 24th
                assert_eq!(instant.date().month(), term.index() / 2 + 1, "{term} of {year}");
                assert!((3..=24).contains(&instant.date().day()), "{term} of {year}");
            }
            for pair in instants.windows(2) {
                let gap = pair[1].minutes() - pair[0].minutes();
                assert!(
                    (14 * 1440..=16 * 1440).contains(&gap),
                    "gap of {gap} minutes in {year}"
                );
            }
        }
    }

    #[test]
    fn test_term_metadata() {
        assert_eq!(SolarTerm::StartOfSpring.korean(), "입춘");
        assert_eq!(SolarTerm::StartOfSpring.hanja(), "立春");
        assert!((SolarTerm::StartOfSpring.longitude() - 315.0).abs() < f64::EPSILON);
        assert!(SolarTerm::SpringEquinox.longitude().abs() < f64::EPSILON);
        assert!((SolarTerm::WinterSolstice.longitude() - 270.0).abs() < f64::EPSILON);

        assert_eq!(SolarTerm::MinorCold.month_branch(), Some(Branch::Chuk));
        assert_eq!(SolarTerm::StartOfSpring.month_branch(), Some(Branch::In));
        assert_eq!(SolarTerm::ColdDew.month_branch(), Some(Branch::Sul));
        assert_eq!(SolarTerm::MajorSnow.month_branch(), Some(Branch::Ja));
        assert_eq!(SolarTerm::WinterSolstice.month_branch(), None);

        assert!(SolarTerm::SECTIONAL.iter().all(|t| t.is_sectional()));
        assert_eq!(
            SolarTerm::ALL.iter().filter(|t| t.is_sectional()).count(),
            12
        );
    }

    #[test]
    fn test_normalize_to_pm180() {
        assert!((normalize_to_pm180(350.0) + 10.0).abs() < 1e-9);
        assert!((normalize_to_pm180(-350.0) - 10.0).abs() < 1e-9);
        assert!((normalize_to_pm180(180.0) + 180.0).abs() < 1e-9);
    }
}
