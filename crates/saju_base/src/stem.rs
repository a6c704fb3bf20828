//! The ten Heavenly Stems (천간, 天干).
//!
//! Stem `i` has element `i / 2` and polarity by parity (甲 yang wood,
//! 乙 yin wood, ...).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::CycleError;

/// One of the ten Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All ten stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

impl Stem {
    /// 0-based ordinal (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, CycleError> {
        ALL_STEMS
            .get(index as usize)
            .copied()
            .ok_or_else(|| CycleError::UnknownSymbol(format!("stem ordinal {index}")))
    }

    /// Stem at `index` reduced modulo 10.
    pub const fn wrapping(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    pub fn hangul(self) -> &'static str {
        STEM_HANGUL[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    /// Parse a single hanja or hangul character.
    pub fn from_symbol(symbol: &str) -> Result<Self, CycleError> {
        STEM_HANJA
            .iter()
            .position(|&s| s == symbol)
            .or_else(|| STEM_HANGUL.iter().position(|&s| s == symbol))
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| CycleError::UnknownSymbol(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_pair_up() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Eul.element(), Element::Wood);
        assert_eq!(Stem::Byeong.element(), Element::Fire);
        assert_eq!(Stem::Mu.element(), Element::Earth);
        assert_eq!(Stem::Sin.element(), Element::Metal);
        assert_eq!(Stem::Gye.element(), Element::Water);
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expected = if s.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(s.polarity(), expected);
        }
    }

    #[test]
    fn symbols_round_trip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_symbol(s.hanja()).unwrap(), s);
            assert_eq!(Stem::from_symbol(s.hangul()).unwrap(), s);
        }
        assert!(Stem::from_symbol("子").is_err());
        assert!(Stem::from_index(10).is_err());
    }

    #[test]
    fn wrapping_negative() {
        assert_eq!(Stem::wrapping(-1), Stem::Gye);
        assert_eq!(Stem::wrapping(23), Stem::Jeong);
    }
}
