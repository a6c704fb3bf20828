//! The five elements (오행, 五行) and yin/yang polarity.
//!
//! Order follows the generating cycle: Wood → Fire → Earth → Metal → Water
//! → Wood. The restraining cycle skips one: Wood → Earth → Water → Fire →
//! Metal → Wood.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// Lowercase English key, stable for serialization.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Display label, e.g. `목(木)`.
    pub fn label(self) -> String {
        format!("{}({})", self.hangul(), self.hanja())
    }

    /// The element this one generates (its child).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that generates this one (its parent).
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one restrains.
    pub const fn restrains(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that restrains this one.
    pub const fn restrained_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_ELEMENTS.iter().copied().find(|e| e.key() == key)
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of an ordinal in a stem or branch table: even ordinals are yang.
    pub const fn from_ordinal(ordinal: u8) -> Self {
        if ordinal % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}
