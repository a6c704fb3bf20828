//! Ten gods (십성, 十星): how any stem relates to the Day Master.
//!
//! The five relations come from the element cycles; polarity splits each
//! into a same-polarity (편, 偏) and opposite-polarity (정, 正) god.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::stem::Stem;

/// Element relation of another element to the Day Master's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Same element (비겁).
    Companion,
    /// Generated by the Day Master (식상).
    Output,
    /// Restrained by the Day Master (재성).
    Wealth,
    /// Restrains the Day Master (관성).
    Officer,
    /// Generates the Day Master (인성).
    Resource,
}

impl Relation {
    /// Relation of `other` seen from `me`.
    pub fn between(me: Element, other: Element) -> Self {
        match (other.index() + 5 - me.index()) % 5 {
            0 => Self::Companion,
            1 => Self::Output,
            2 => Self::Wealth,
            3 => Self::Officer,
            _ => Self::Resource,
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Companion => "비겁",
            Self::Output => "식상",
            Self::Wealth => "재성",
            Self::Officer => "관성",
            Self::Resource => "인성",
        }
    }
}

/// One of the ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum TenGod {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    /// Ten god of `other` relative to Day Master `day_master`.
    pub fn of(day_master: Stem, other: Stem) -> Self {
        let same = day_master.polarity() == other.polarity();
        match (Relation::between(day_master.element(), other.element()), same) {
            (Relation::Companion, true) => Self::Companion,
            (Relation::Companion, false) => Self::RobWealth,
            (Relation::Output, true) => Self::EatingGod,
            (Relation::Output, false) => Self::HurtingOfficer,
            (Relation::Wealth, true) => Self::IndirectWealth,
            (Relation::Wealth, false) => Self::DirectWealth,
            (Relation::Officer, true) => Self::SevenKillings,
            (Relation::Officer, false) => Self::DirectOfficer,
            (Relation::Resource, true) => Self::IndirectResource,
            (Relation::Resource, false) => Self::DirectResource,
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Companion => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;
    use crate::stem::ALL_STEMS;

    #[test]
    fn relation_cycle() {
        for me in ALL_ELEMENTS {
            assert_eq!(Relation::between(me, me), Relation::Companion);
            let seen: Vec<Relation> =
                ALL_ELEMENTS.into_iter().map(|o| Relation::between(me, o)).collect();
            for (i, a) in seen.iter().enumerate() {
                assert!(!seen[i + 1..].contains(a));
            }
        }
        assert_eq!(Relation::between(Element::Wood, Element::Metal), Relation::Officer);
        assert_eq!(Relation::between(Element::Wood, Element::Water), Relation::Resource);
    }

    #[test]
    fn gap_day_master() {
        assert_eq!(TenGod::of(Stem::Gap, Stem::Gap), TenGod::Companion);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Eul), TenGod::RobWealth);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Byeong), TenGod::EatingGod);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Jeong), TenGod::HurtingOfficer);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Mu), TenGod::IndirectWealth);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Gi), TenGod::DirectWealth);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Gyeong), TenGod::SevenKillings);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Sin), TenGod::DirectOfficer);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Im), TenGod::IndirectResource);
        assert_eq!(TenGod::of(Stem::Gap, Stem::Gye), TenGod::DirectResource);
    }

    #[test]
    fn each_day_master_sees_all_ten() {
        for dm in ALL_STEMS {
            let mut gods: Vec<TenGod> = ALL_STEMS.iter().map(|&s| TenGod::of(dm, s)).collect();
            gods.sort_by_key(|g| g.hangul());
            gods.dedup();
            assert_eq!(gods.len(), 10);
        }
    }
}
