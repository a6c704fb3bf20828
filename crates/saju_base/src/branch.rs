//! The twelve Earthly Branches (지지, 地支) and their hidden stems (지장간).
//!
//! Each branch stores one to three stems. The first is the primary (본기),
//! then the secondary (중기) and the residual (여기). Weights are percent of
//! one branch position and always sum to 100.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::CycleError;
use crate::stem::Stem;

/// One of the twelve Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All twelve branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_ANIMALS: [&str; 12] = [
    "rat", "ox", "tiger", "rabbit", "dragon", "snake", "horse", "goat", "monkey", "rooster",
    "dog", "pig",
];

/// Role of a hidden stem inside its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HiddenRole {
    /// 본기 (本氣)
    Primary,
    /// 중기 (中氣)
    Secondary,
    /// 여기 (餘氣)
    Residual,
}

/// A stem buried in a branch, with its share of the branch's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub role: HiddenRole,
    /// Percent of one branch position.
    pub weight: u32,
}

/// Hidden stems per branch with weights, primary first.
const HIDDEN_STEMS: [&[(Stem, u32)]; 12] = [
    &[(Stem::Gye, 100)],                                   // 子
    &[(Stem::Gi, 60), (Stem::Sin, 30), (Stem::Gye, 10)],   // 丑
    &[(Stem::Gap, 60), (Stem::Byeong, 30), (Stem::Mu, 10)], // 寅
    &[(Stem::Eul, 100)],                                   // 卯
    &[(Stem::Mu, 60), (Stem::Gye, 30), (Stem::Eul, 10)],   // 辰
    &[(Stem::Byeong, 60), (Stem::Gyeong, 30), (Stem::Mu, 10)], // 巳
    &[(Stem::Jeong, 70), (Stem::Gi, 30)],                  // 午
    &[(Stem::Gi, 60), (Stem::Eul, 30), (Stem::Jeong, 10)], // 未
    &[(Stem::Gyeong, 60), (Stem::Im, 30), (Stem::Mu, 10)], // 申
    &[(Stem::Sin, 100)],                                   // 酉
    &[(Stem::Mu, 60), (Stem::Jeong, 30), (Stem::Sin, 10)], // 戌
    &[(Stem::Im, 70), (Stem::Gap, 30)],                    // 亥
];

const ROLES: [HiddenRole; 3] = [HiddenRole::Primary, HiddenRole::Secondary, HiddenRole::Residual];

impl Branch {
    /// 0-based ordinal (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, CycleError> {
        ALL_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or_else(|| CycleError::UnknownSymbol(format!("branch ordinal {index}")))
    }

    /// Branch at `index` reduced modulo 12.
    pub const fn wrapping(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    pub fn hangul(self) -> &'static str {
        BRANCH_HANGUL[self.index() as usize]
    }

    /// Zodiac animal in English.
    pub fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    /// Element of the branch (that of its primary hidden stem).
    pub fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    /// Hidden stems, primary first.
    pub fn hidden_stems(self) -> Vec<HiddenStem> {
        HIDDEN_STEMS[self.index() as usize]
            .iter()
            .zip(ROLES)
            .map(|(&(stem, weight), role)| HiddenStem { stem, role, weight })
            .collect()
    }

    /// The primary hidden stem (본기).
    pub fn primary_stem(self) -> Stem {
        HIDDEN_STEMS[self.index() as usize][0].0
    }

    /// Parse a single hanja or hangul character.
    pub fn from_symbol(symbol: &str) -> Result<Self, CycleError> {
        BRANCH_HANJA
            .iter()
            .position(|&s| s == symbol)
            .or_else(|| BRANCH_HANGUL.iter().position(|&s| s == symbol))
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| CycleError::UnknownSymbol(symbol.to_string()))
    }
}
