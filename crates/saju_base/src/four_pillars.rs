//! The natal chart: four pillars, eight characters (사주팔자).

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::cycle::Pillar;
use crate::error::CycleError;
use crate::stem::Stem;

/// Which pillar a character sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Korean name, e.g. `연주`.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Year => "연주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// Year, month, day and hour pillars of one birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parse four labels in year, month, day, hour order.
    pub fn from_labels(labels: [&str; 4]) -> Result<Self, CycleError> {
        let [y, m, d, h] = labels;
        Ok(Self::new(y.parse()?, m.parse()?, d.parse()?, h.parse()?))
    }

    /// The Day Master (일간): stem of the day pillar.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Branch of the month pillar (월지), which sets the season.
    pub const fn month_branch(&self) -> Branch {
        self.month.branch()
    }

    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(|p| p.stem())
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(|p| p.branch())
    }

    /// Labels in year, month, day, hour order.
    pub fn labels(&self) -> [&'static str; 4] {
        self.pillars().map(|p| p.label())
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}
