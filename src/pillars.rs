//! Four Pillars (사주) of a birth moment.
//!
//! The year pillar turns over at 입춘 and the month pillar at each sectional
//! term, both compared against civil time. The day pillar counts days from
//! 1900-01-31 (갑진). The hour pillar follows the two-hour branch windows.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::lunar_to_solar;
use crate::consts::{
    BRANCH_CYCLE, LUNAR_EPOCH_DAY_INDEX, LUNAR_EPOCH_JDN, MAX_LUNAR_DAY, MAX_MONTH, MAX_SOLAR_DAY, MAX_YEAR,
    MIN_DAY, MIN_YEAR, STEM_CYCLE, YEAR_CYCLE_ANCHOR,
};
use crate::error::{Calendar, InputField, SajuError, check_range};
use crate::options::{CalculationOptions, ZiHourRule};
use crate::prelude::*;
use crate::sexagenary::{Branch, Element, Pillar, Stem, YinYang};
use crate::solar_terms::{SolarTerm, solar_term_instant};
use crate::types::{LocalDateTime, SolarDate};

/// A birth moment as entered, in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInfo {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    #[serde(default)]
    pub is_lunar: bool,
    /// Only meaningful when `is_lunar` is set
    #[serde(default)]
    pub is_leap_month: bool,
}

impl BirthInfo {
    pub const fn solar(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            is_lunar: false,
            is_leap_month: false,
        }
    }

    pub const fn lunar(year: i32, month: i32, day: i32, is_leap_month: bool, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            is_lunar: true,
            is_leap_month,
        }
    }

    const fn calendar(&self) -> Calendar {
        if self.is_lunar { Calendar::Lunar } else { Calendar::Solar }
    }

    /// Validates the raw fields and resolves the birth moment to solar civil time.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resolve(&self) -> Result<LocalDateTime, SajuError> {
        let max_day = if self.is_lunar { MAX_LUNAR_DAY } else { MAX_SOLAR_DAY };
        check_range(InputField::Month, self.month, 1, i32::from(MAX_MONTH))?;
        check_range(InputField::Day, self.day, i32::from(MIN_DAY), i32::from(max_day))?;
        check_range(InputField::Hour, self.hour, 0, 23)?;
        check_range(InputField::Minute, self.minute, 0, 59)?;

        // In range after the checks above
        let (month, day) = (self.month as u8, self.day as u8);
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(SajuError::OutOfRange {
                calendar: self.calendar(),
                year: self.year,
                month,
                day,
            });
        }

        let date = if self.is_lunar {
            lunar_to_solar(self.year, month, day, self.is_leap_month)?
        } else {
            SolarDate::new(self.year, month, day)?
        };
        LocalDateTime::new(date, self.hour as u8, self.minute as u8)
    }
}

/// One of the four pillar positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[display(fmt = "연주")]
    Year,
    #[display(fmt = "월주")]
    Month,
    #[display(fmt = "일주")]
    Day,
    #[display(fmt = "시주")]
    Hour,
}

impl Position {
    pub const ALL: [Self; 4] = [Self::Year, Self::Month, Self::Day, Self::Hour];

    /// Hangul label, e.g. `연주`.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Year => "연주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }

    /// Single-character Hanja suffix, e.g. `年`.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "時",
        }
    }
}

/// The year, month, day and hour pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self { year, month, day, hour }
    }

    pub const fn year(self) -> Pillar {
        self.year
    }

    pub const fn month(self) -> Pillar {
        self.month
    }

    pub const fn day(self) -> Pillar {
        self.day
    }

    pub const fn hour(self) -> Pillar {
        self.hour
    }

    pub const fn get(self, position: Position) -> Pillar {
        match position {
            Position::Year => self.year,
            Position::Month => self.month,
            Position::Day => self.day,
            Position::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The four heavenly stems (천간), year first.
    pub fn stems(self) -> [Stem; 4] {
        self.pillars().map(Pillar::stem)
    }

    /// The four earthly branches (지지), year first.
    pub fn branches(self) -> [Branch; 4] {
        self.pillars().map(Pillar::branch)
    }

    /// Space-separated Hanja form, e.g. `壬申年 庚戌月 癸酉日 乙卯時`.
    pub fn to_hanja_string(self) -> String {
        Position::ALL
            .iter()
            .map(|&position| format!("{}{}", self.get(position).hanja(), position.hanja()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Hangul pillar names keyed by position.
    pub fn to_object(self) -> PillarStrings {
        PillarStrings {
            year: self.year.korean(),
            month: self.month.korean(),
            day: self.day.korean(),
            hour: self.hour.korean(),
        }
    }

    /// Hangul and Hanja pillar names keyed by position.
    pub fn to_hanja_object(self) -> PillarLabels {
        PillarLabels {
            year: PillarLabel::from(self.year),
            month: PillarLabel::from(self.month),
            day: PillarLabel::from(self.day),
            hour: PillarLabel::from(self.hour),
        }
    }

    /// Element and yin/yang classification of every stem and branch.
    pub fn detail(self) -> FourPillarsDetail {
        FourPillarsDetail {
            year: PillarDetail::from(self.year),
            month: PillarDetail::from(self.month),
            day: PillarDetail::from(self.day),
            hour: PillarDetail::from(self.hour),
        }
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in Position::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}{position}", self.get(*position))?;
        }
        Ok(())
    }
}

/// Hangul rendering of [`FourPillars`], one string per position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarStrings {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

/// A pillar in both scripts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarLabel {
    pub korean: String,
    pub hanja: String,
}

impl From<Pillar> for PillarLabel {
    fn from(pillar: Pillar) -> Self {
        Self {
            korean: pillar.korean(),
            hanja: pillar.hanja(),
        }
    }
}

/// Two-script rendering of [`FourPillars`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarLabels {
    pub year: PillarLabel,
    pub month: PillarLabel,
    pub day: PillarLabel,
    pub hour: PillarLabel,
}

/// Classification of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarDetail {
    pub pillar: Pillar,
    pub stem: Stem,
    pub branch: Branch,
    pub stem_element: Element,
    pub branch_element: Element,
    pub stem_yin_yang: YinYang,
    pub branch_yin_yang: YinYang,
}

impl From<Pillar> for PillarDetail {
    fn from(pillar: Pillar) -> Self {
        let (stem, branch) = (pillar.stem(), pillar.branch());
        Self {
            pillar,
            stem,
            branch,
            stem_element: stem.element(),
            branch_element: branch.element(),
            stem_yin_yang: stem.yin_yang(),
            branch_yin_yang: branch.yin_yang(),
        }
    }
}

/// Classification of all four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillarsDetail {
    pub year: PillarDetail,
    pub month: PillarDetail,
    pub day: PillarDetail,
    pub hour: PillarDetail,
}

impl FourPillarsDetail {
    /// How many of the eight characters belong to each element, in [`Element::ALL`] order.
    pub fn element_counts(&self) -> [(Element, u8); 5] {
        let mut counts = Element::ALL.map(|element| (element, 0));
        for detail in [self.year, self.month, self.day, self.hour] {
            for element in [detail.stem_element, detail.branch_element] {
                if let Some((_, count)) = counts.iter_mut().find(|(e, _)| *e == element) {
                    *count += 1;
                }
            }
        }
        counts
    }
}

/// Computes the Four Pillars with [`CalculationOptions::default`].
///
/// # Errors
/// See [`calculate_four_pillars_with`].
pub fn calculate_four_pillars(birth: &BirthInfo) -> Result<FourPillars, SajuError> {
    calculate_four_pillars_with(birth, &CalculationOptions::default())
}

/// Computes the Four Pillars of `birth`.
///
/// # Errors
/// - `SajuError::InvalidInput` for a month, day, hour or minute outside its range, or invalid
///   `options`
/// - `SajuError::OutOfRange` for a year outside 1900-2100
/// - `SajuError::InvalidDate` for a date that does not exist in its calendar
pub fn calculate_four_pillars_with(
    birth: &BirthInfo,
    options: &CalculationOptions,
) -> Result<FourPillars, SajuError> {
    options.validate()?;
    let civil = birth.resolve()?;

    let year = year_pillar(civil, options.utc_offset_minutes);
    let month = month_pillar(civil, year.stem(), options.utc_offset_minutes);

    let adjusted = civil.add_minutes(options.correction_minutes());
    let day = day_pillar(day_of(adjusted, options.zi_hour_rule));
    let hour_day = day_pillar(hour_stem_day_of(adjusted, options.zi_hour_rule));
    let hour = hour_pillar(adjusted.hour(), hour_day.stem());

    let pillars = FourPillars::new(year, month, day, hour);
    debug!("{birth:?} resolved to {civil} (pillar clock {adjusted}): {pillars}");
    Ok(pillars)
}

/// The pillar with the given stem and branch indices, which must share parity.
#[allow(clippy::cast_lossless)]
fn pillar_of(stem: u8, branch: u8) -> Pillar {
    debug_assert!(stem % 2 == branch % 2);
    // 6 ≡ 1 (mod 10), 6 ≡ 0 (mod 12); -5 ≡ 0 (mod 10), -5 ≡ 1 (mod 12)
    Pillar::from_cycle(6 * i64::from(stem) - 5 * i64::from(branch))
}

fn year_pillar(civil: LocalDateTime, utc_offset_minutes: i32) -> Pillar {
    let year = civil.date().year();
    let spring = solar_term_instant(year, SolarTerm::StartOfSpring, utc_offset_minutes);
    let pillar_year = if civil < spring { year - 1 } else { year };
    Pillar::from_cycle(i64::from(pillar_year - YEAR_CYCLE_ANCHOR))
}

fn month_pillar(civil: LocalDateTime, year_stem: Stem, utc_offset_minutes: i32) -> Pillar {
    let year = civil.date().year();
    // Before 소한 the 자 month opened by the previous year's 대설 is still running
    let branch = SolarTerm::SECTIONAL
        .iter()
        .rev()
        .find(|term| solar_term_instant(year, **term, utc_offset_minutes) <= civil)
        .and_then(|term| term.month_branch())
        .unwrap_or(Branch::Ja);

    // Five tigers: the 인 month starts at stem (s mod 5) * 2 + 2
    let steps_from_in = (branch.index() + BRANCH_CYCLE - Branch::In.index()) % BRANCH_CYCLE;
    let stem = (year_stem.index() % 5 * 2 + 2 + steps_from_in) % STEM_CYCLE;
    pillar_of(stem, branch.index())
}

/// Date whose day pillar applies at `time`.
const fn day_of(time: LocalDateTime, rule: ZiHourRule) -> SolarDate {
    match rule {
        ZiHourRule::ZiStart if time.hour() == 23 => time.date().add_days(1),
        _ => time.date(),
    }
}

/// Date whose day stem picks the hour stem at `time`.
const fn hour_stem_day_of(time: LocalDateTime, rule: ZiHourRule) -> SolarDate {
    match rule {
        ZiHourRule::ZiStart | ZiHourRule::LateZi if time.hour() == 23 => time.date().add_days(1),
        _ => time.date(),
    }
}

fn day_pillar(date: SolarDate) -> Pillar {
    Pillar::from_cycle(i64::from(LUNAR_EPOCH_DAY_INDEX + date.jdn() - LUNAR_EPOCH_JDN))
}

fn hour_pillar(hour: u8, day_stem: Stem) -> Pillar {
    let branch = Branch::from_hour(hour);
    // Five rats: the 자 hour starts at stem (s mod 5) * 2
    let stem = (day_stem.index() % 5 * 2 + branch.index()) % STEM_CYCLE;
    pillar_of(stem, branch.index())
}
