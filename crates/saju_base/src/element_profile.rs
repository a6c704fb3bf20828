//! Weighted five-element strength of a chart.
//!
//! Each of the eight characters contributes 100 points: a stem to its own
//! element, a branch split across its hidden stems. The raw tally is then
//! scaled by the season of the month branch (왕상휴수사, 旺相休囚死):
//!
//! | relation to the season's element | state | percent |
//! |---|---|---|
//! | same             | 旺 prosperous | 150 |
//! | generated by it  | 相 assisted   | 120 |
//! | generates it     | 休 resting    | 100 |
//! | restrains it     | 囚 confined   |  80 |
//! | restrained by it | 死 dead       |  60 |
//!
//! Scores are integers (raw points × percent), so a profile is exactly
//! reproducible.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{ALL_ELEMENTS, Element};
use crate::four_pillars::FourPillars;

/// Points contributed by one stem or one branch.
pub const POSITION_WEIGHT: u32 = 100;

/// Seasonal percent by month branch, columns in element order
/// (wood, fire, earth, metal, water).
pub const SEASONAL_PERCENT: [[u32; 5]; 12] = [
    [120, 60, 80, 100, 150],  // 子 water
    [80, 100, 150, 120, 60],  // 丑 earth
    [150, 120, 60, 80, 100],  // 寅 wood
    [150, 120, 60, 80, 100],  // 卯 wood
    [80, 100, 150, 120, 60],  // 辰 earth
    [100, 150, 120, 60, 80],  // 巳 fire
    [100, 150, 120, 60, 80],  // 午 fire
    [80, 100, 150, 120, 60],  // 未 earth
    [60, 80, 100, 150, 120],  // 申 metal
    [60, 80, 100, 150, 120],  // 酉 metal
    [80, 100, 150, 120, 60],  // 戌 earth
    [120, 60, 80, 100, 150],  // 亥 water
];

/// Element ruling the season of a month branch.
pub fn season_element(month_branch: Branch) -> Element {
    match month_branch {
        Branch::In | Branch::Myo => Element::Wood,
        Branch::Sa | Branch::O => Element::Fire,
        Branch::Sin | Branch::Yu => Element::Metal,
        Branch::Hae | Branch::Ja => Element::Water,
        Branch::Jin | Branch::Mi | Branch::Sul | Branch::Chuk => Element::Earth,
    }
}

/// Strength of one element, plus the flags the resolver sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementScore {
    pub element: Element,
    /// Unscaled points from the eight characters.
    pub raw: u32,
    /// Seasonal percent applied to `raw`.
    pub seasonal_percent: u32,
    /// `raw × seasonal_percent`.
    pub score: u32,
    pub is_yong_shen: bool,
    pub is_ki_shen: bool,
}

/// Scores for all five elements, in element order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProfile {
    pub month_branch: Branch,
    pub scores: [ElementScore; 5],
}

impl ElementProfile {
    pub fn get(&self, element: Element) -> &ElementScore {
        &self.scores[element.index() as usize]
    }

    pub fn score(&self, element: Element) -> u32 {
        self.get(element).score
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().map(|s| s.score).sum()
    }

    /// Fraction of the total score held by `element`, in [0, 1].
    pub fn share(&self, element: Element) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.score(element) as f64 / total as f64
        }
    }

    /// Elements ordered weakest first; ties go to the lower ordinal.
    pub fn ascending(&self) -> [Element; 5] {
        let mut order = ALL_ELEMENTS;
        order.sort_by_key(|&e| (self.score(e), e.index()));
        order
    }

    pub fn strongest(&self) -> Element {
        let mut order = ALL_ELEMENTS;
        order.sort_by_key(|&e| (std::cmp::Reverse(self.score(e)), e.index()));
        order[0]
    }

    pub fn yong_shen(&self) -> Option<Element> {
        self.scores.iter().find(|s| s.is_yong_shen).map(|s| s.element)
    }

    pub fn ki_shen(&self) -> Option<Element> {
        self.scores.iter().find(|s| s.is_ki_shen).map(|s| s.element)
    }

    pub(crate) fn flag_yong_shen(&mut self, element: Element) {
        for s in &mut self.scores {
            s.is_yong_shen = s.element == element;
        }
    }

    pub(crate) fn flag_ki_shen(&mut self, element: Option<Element>) {
        for s in &mut self.scores {
            s.is_ki_shen = Some(s.element) == element;
        }
    }
}

/// Tally the eight characters of a chart and apply the seasonal table.
pub fn analyze_elements(pillars: &FourPillars) -> ElementProfile {
    let mut raw = [0u32; 5];
    for stem in pillars.stems() {
        raw[stem.element().index() as usize] += POSITION_WEIGHT;
    }
    for branch in pillars.branches() {
        for hidden in branch.hidden_stems() {
            raw[hidden.stem.element().index() as usize] += hidden.weight * POSITION_WEIGHT / 100;
        }
    }

    let month_branch = pillars.month_branch();
    let percent = SEASONAL_PERCENT[month_branch.index() as usize];
    let scores = ALL_ELEMENTS.map(|element| {
        let i = element.index() as usize;
        ElementScore {
            element,
            raw: raw[i],
            seasonal_percent: percent[i],
            score: raw[i] * percent[i],
            is_yong_shen: false,
            is_ki_shen: false,
        }
    });

    ElementProfile {
        month_branch,
        scores,
    }
}
