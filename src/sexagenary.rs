//! Heavenly stems (천간), earthly branches (지지) and the pillars they form.
//!
//! Every symbol carries a Hangul label and a Hanja label, together with its
//! five-element (오행) and yin/yang (음양) classification. All of these are
//! fixed table lookups.

use crate::consts::{BRANCH_CYCLE, SEXAGENARY_CYCLE, STEM_CYCLE};
use crate::error::SajuError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five elements (오행).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[display(fmt = "목")]
    Wood,
    #[display(fmt = "화")]
    Fire,
    #[display(fmt = "토")]
    Earth,
    #[display(fmt = "금")]
    Metal,
    #[display(fmt = "수")]
    Water,
}

impl Element {
    pub const ALL: [Self; 5] = [Self::Wood, Self::Fire, Self::Earth, Self::Metal, Self::Water];

    pub const fn korean(self) -> &'static str {
        ["목", "화", "토", "금", "수"][self as usize]
    }

    pub const fn hanja(self) -> &'static str {
        ["木", "火", "土", "金", "水"][self as usize]
    }
}

/// Yin/yang polarity (음양).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YinYang {
    #[display(fmt = "양")]
    Yang,
    #[display(fmt = "음")]
    Yin,
}

impl YinYang {
    /// Even cycle positions are yang, odd ones yin.
    const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}

const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// A heavenly stem (천간). Two consecutive stems share each element, yang first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Stem {
    #[display(fmt = "갑")]
    Gap,
    #[display(fmt = "을")]
    Eul,
    #[display(fmt = "병")]
    Byeong,
    #[display(fmt = "정")]
    Jeong,
    #[display(fmt = "무")]
    Mu,
    #[display(fmt = "기")]
    Gi,
    #[display(fmt = "경")]
    Gyeong,
    #[display(fmt = "신")]
    Sin,
    #[display(fmt = "임")]
    Im,
    #[display(fmt = "계")]
    Gye,
}

impl Stem {
    pub const ALL: [Self; 10] = [
        Self::Gap,
        Self::Eul,
        Self::Byeong,
        Self::Jeong,
        Self::Mu,
        Self::Gi,
        Self::Gyeong,
        Self::Sin,
        Self::Im,
        Self::Gye,
    ];

    /// Position in the stem cycle, 0 for 갑.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The stem at `index`, wrapping around the cycle.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % STEM_CYCLE) as usize]
    }

    pub const fn korean(self) -> &'static str {
        STEM_KOREAN[self as usize]
    }

    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self as usize]
    }

    pub const fn element(self) -> Element {
        Element::ALL[(self as usize) / 2]
    }

    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_index(self.index())
    }
}

impl FromStr for Stem {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        STEM_KOREAN
            .iter()
            .position(|&k| k == s)
            .or_else(|| STEM_HANJA.iter().position(|&h| h == s))
            .map(|i| Self::ALL[i])
            .ok_or_else(|| SajuError::InvalidFormat(format!("Unknown heavenly stem: {s}")))
    }
}

const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

/// An earthly branch (지지).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Branch {
    #[display(fmt = "자")]
    Ja,
    #[display(fmt = "축")]
    Chuk,
    #[display(fmt = "인")]
    In,
    #[display(fmt = "묘")]
    Myo,
    #[display(fmt = "진")]
    Jin,
    #[display(fmt = "사")]
    Sa,
    #[display(fmt = "오")]
    O,
    #[display(fmt = "미")]
    Mi,
    #[display(fmt = "신")]
    Sin,
    #[display(fmt = "유")]
    Yu,
    #[display(fmt = "술")]
    Sul,
    #[display(fmt = "해")]
    Hae,
}

impl Branch {
    pub const ALL: [Self; 12] = [
        Self::Ja,
        Self::Chuk,
        Self::In,
        Self::Myo,
        Self::Jin,
        Self::Sa,
        Self::O,
        Self::Mi,
        Self::Sin,
        Self::Yu,
        Self::Sul,
        Self::Hae,
    ];

    /// Position in the branch cycle, 0 for 자.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The branch at `index`, wrapping around the cycle.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % BRANCH_CYCLE) as usize]
    }

    pub const fn korean(self) -> &'static str {
        BRANCH_KOREAN[self as usize]
    }

    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self as usize]
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self as usize]
    }

    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_index(self.index())
    }

    /// The civil two-hour window of the branch as `(start, end)` hours, start inclusive and
    /// end exclusive. 자 wraps midnight: `(23, 1)`.
    pub const fn hour_window(self) -> (u8, u8) {
        let start = (self.index() * 2 + 23) % 24;
        (start, (start + 2) % 24)
    }

    /// The branch whose window contains `hour` (0-23).
    pub const fn from_hour(hour: u8) -> Self {
        debug_assert!(hour < 24);
        Self::from_index((hour + 1) / 2)
    }
}

impl FromStr for Branch {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BRANCH_KOREAN
            .iter()
            .position(|&k| k == s)
            .or_else(|| BRANCH_HANJA.iter().position(|&h| h == s))
            .map(|i| Self::ALL[i])
            .ok_or_else(|| SajuError::InvalidFormat(format!("Unknown earthly branch: {s}")))
    }
}

/// A stem-branch pair. Stem and branch always share parity, so 60 of the 120
/// combinations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{stem}{branch}")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pairs a stem with a branch, or `None` when their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// The pillar at position `index` of the sexagenary cycle (0 = 갑자), wrapping in both
    /// directions.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_cycle(index: i64) -> Self {
        let index = index.rem_euclid(SEXAGENARY_CYCLE as i64) as u8;
        Self {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// Position in the sexagenary cycle, 0 for 갑자 and 59 for 계해.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn cycle_index(self) -> u8 {
        // Chinese remainder: 6 ≡ 1 (mod 10) and ≡ 0 (mod 12), -5 ≡ 0 (mod 10) and ≡ 1 (mod 12)
        (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32)
            .rem_euclid(SEXAGENARY_CYCLE as i32) as u8
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Two-syllable Hangul form, e.g. `계유`.
    pub fn korean(self) -> String {
        self.to_string()
    }

    /// Two-character Hanja form, e.g. `癸酉`.
    pub fn hanja(self) -> String {
        [self.stem.hanja(), self.branch.hanja()].concat()
    }
}

impl FromStr for Pillar {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(stem), Some(branch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SajuError::InvalidFormat(format!(
                "Expected two characters for a pillar, found {trimmed:?}"
            )));
        };
        let stem: Stem = stem.to_string().parse()?;
        let branch: Branch = branch.to_string().parse()?;
        Self::new(stem, branch).ok_or_else(|| {
            SajuError::InvalidFormat(format!("{stem}{branch} is not part of the sexagenary cycle"))
        })
    }
}

string_serde!(Stem);
string_serde!(Branch);
string_serde!(Pillar);
