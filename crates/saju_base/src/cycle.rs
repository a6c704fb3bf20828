//! The sexagenary cycle (육십갑자, 六十甲子).
//!
//! A pillar pairs a stem with a branch of the same polarity. Stepping both
//! together from 甲子 visits exactly 60 of the 120 stem×branch pairs before
//! repeating. Cycle index `i` has stem `i % 10` and branch `i % 12`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::CycleError;
use crate::stem::Stem;

/// Length of the cycle.
pub const CYCLE_LEN: u8 = 60;

const PILLAR_HANJA: [&str; 60] = [
    "甲子", "乙丑", "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉",
    "甲戌", "乙亥", "丙子", "丁丑", "戊寅", "己卯", "庚辰", "辛巳", "壬午", "癸未",
    "甲申", "乙酉", "丙戌", "丁亥", "戊子", "己丑", "庚寅", "辛卯", "壬辰", "癸巳",
    "甲午", "乙未", "丙申", "丁酉", "戊戌", "己亥", "庚子", "辛丑", "壬寅", "癸卯",
    "甲辰", "乙巳", "丙午", "丁未", "戊申", "己酉", "庚戌", "辛亥", "壬子", "癸丑",
    "甲寅", "乙卯", "丙辰", "丁巳", "戊午", "己未", "庚申", "辛酉", "壬戌", "癸亥",
];

const PILLAR_HANGUL: [&str; 60] = [
    "갑자", "을축", "병인", "정묘", "무진", "기사", "경오", "신미", "임신", "계유",
    "갑술", "을해", "병자", "정축", "무인", "기묘", "경진", "신사", "임오", "계미",
    "갑신", "을유", "병술", "정해", "무자", "기축", "경인", "신묘", "임진", "계사",
    "갑오", "을미", "병신", "정유", "무술", "기해", "경자", "신축", "임인", "계묘",
    "갑진", "을사", "병오", "정미", "무신", "기유", "경술", "신해", "임자", "계축",
    "갑인", "을묘", "병진", "정사", "무오", "기미", "경신", "신유", "임술", "계해",
];

/// A stem–branch pair from the sexagenary cycle.
///
/// Fields are private: every `Pillar` in existence has matching polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// Cycle index (0..60) of a stem/branch pair.
///
/// Solves `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)`; fails when the
/// polarities differ and no such `i` exists.
pub fn cycle_index(stem: Stem, branch: Branch) -> Result<u8, CycleError> {
    let (s, b) = (stem.index(), branch.index());
    if s % 2 != b % 2 {
        return Err(CycleError::InvalidCombination {
            stem: s,
            branch: b,
        });
    }
    Ok((6 * s as i32 - 5 * b as i32).rem_euclid(60) as u8)
}

/// Pillar from stem and branch ordinals.
pub fn combine(stem_ordinal: u8, branch_ordinal: u8) -> Result<Pillar, CycleError> {
    Pillar::new(Stem::from_index(stem_ordinal)?, Branch::from_index(branch_ordinal)?)
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, CycleError> {
        cycle_index(stem, branch)?;
        Ok(Self { stem, branch })
    }

    /// Pillar at a cycle index, reduced modulo 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        Self {
            stem: Stem::wrapping(index),
            branch: Branch::wrapping(index),
        }
    }

    pub const fn stem(&self) -> Stem {
        self.stem
    }

    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// Position in the cycle (甲子 = 0 .. 癸亥 = 59).
    pub fn cycle_index(&self) -> u8 {
        (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32).rem_euclid(60) as u8
    }

    /// Two-character hanja label, e.g. `甲子`.
    pub fn label(&self) -> &'static str {
        PILLAR_HANJA[self.cycle_index() as usize]
    }

    /// Two-syllable hangul label, e.g. `갑자`.
    pub fn hangul(&self) -> &'static str {
        PILLAR_HANGUL[self.cycle_index() as usize]
    }

    /// The pillar `n` steps later in the cycle.
    pub fn advance(&self, n: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + n)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pillar {
    type Err = CycleError;

    /// Parse a hanja (`甲子`) or hangul (`갑자`) label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(stem), Some(branch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CycleError::MalformedLabel(s.to_string()));
        };
        let stem = Stem::from_symbol(stem.encode_utf8(&mut [0; 4]))?;
        let branch = Branch::from_symbol(branch.encode_utf8(&mut [0; 4]))?;
        Self::new(stem, branch)
    }
}

impl TryFrom<String> for Pillar {
    type Error = CycleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.label().to_string()
    }
}
