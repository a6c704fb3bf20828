//! Useful-element (용신, 用神) resolution.
//!
//! The resolver reads the Day Master's share of the weighted element total
//! and walks a fixed decision order:
//!
//! 1. Outside [`OVERRIDE_BAND`] the chart is one-sided and 억부 (balance) is
//!    forced.
//! 2. Inside [`FORMATION_BAND`], a dominant month-branch element that is
//!    also exposed on a heavenly stem forms a 격국 (formation); the useful
//!    element then drains or checks it.
//! 3. Otherwise 억부: support a weak Day Master with its resource, drain or
//!    check a strong one with whichever of output/officer is weaker, and in
//!    between reinforce the weakest element.
//!
//! The runner-up candidate becomes the secondary element when its share is
//! within [`SECONDARY_MARGIN`] of the primary. The 기신 (忌神) is the element
//! restraining the primary, unless that is the secondary. 조후 (climate)
//! is computed from the month branch and attached as advice only.
//!
//! Every branch taken appends one line to `reasoning`.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::element_profile::{ElementProfile, analyze_elements};
use crate::four_pillars::FourPillars;
use crate::stem::Stem;
use crate::ten_god::Relation;

/// Day-Master shares outside this closed band force the balance method.
pub const OVERRIDE_BAND: (f64, f64) = (0.10, 0.50);
/// Day-Master shares inside this closed band may resolve by formation.
pub const FORMATION_BAND: (f64, f64) = (0.15, 0.35);
/// Below this share the Day Master is weak.
pub const WEAK_THRESHOLD: f64 = 0.18;
/// Above this share the Day Master is strong.
pub const STRONG_THRESHOLD: f64 = 0.28;
/// Minimum share of the month element for a formation.
pub const FORMATION_MIN_SHARE: f64 = 0.35;
/// Largest share gap at which the runner-up becomes the secondary element.
pub const SECONDARY_MARGIN: f64 = 0.05;

/// How the primary element was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// 억부 (抑扶): support or suppress the Day Master.
    Balance,
    /// 격국 (格局): follow the pattern formed by the month element.
    Formation,
}

impl Method {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Formation => "formation",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Balance => "억부(抑扶)",
            Self::Formation => "격국(格局)",
        }
    }
}

/// Method with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledMethod {
    pub key: String,
    pub label: String,
}

impl From<Method> for LabeledMethod {
    fn from(m: Method) -> Self {
        Self {
            key: m.key().to_string(),
            label: m.label().to_string(),
        }
    }
}

/// Element with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledElement {
    pub element: Element,
    pub key: String,
    pub label: String,
}

impl From<Element> for LabeledElement {
    fn from(e: Element) -> Self {
        Self {
            element: e,
            key: e.key().to_string(),
            label: e.label(),
        }
    }
}

/// Direction of a climate adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    /// Winter birth: needs fire.
    Warming,
    /// Summer birth: needs water.
    Cooling,
}

/// 조후 (調候) advisory note derived from the month branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JohuAdjustment {
    pub climate: Climate,
    pub element: LabeledElement,
    pub label: String,
    pub note: String,
}

/// Climate adjustment for a month branch, if its season calls for one.
pub fn johu_adjustment(month_branch: Branch) -> Option<JohuAdjustment> {
    let (climate, element, season) = match month_branch {
        Branch::Hae | Branch::Ja | Branch::Chuk => (Climate::Warming, Element::Fire, "winter"),
        Branch::Sa | Branch::O | Branch::Mi => (Climate::Cooling, Element::Water, "summer"),
        _ => return None,
    };
    let verb = match climate {
        Climate::Warming => "warm",
        Climate::Cooling => "cool",
    };
    Some(JohuAdjustment {
        climate,
        element: element.into(),
        label: "조후(調候)".to_string(),
        note: format!(
            "{} month branch falls in {season}; {} helps {verb} the chart",
            month_branch.hanja(),
            element.label()
        ),
    })
}

/// Verdict of the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YongShenResult {
    pub primary: LabeledElement,
    pub secondary: Option<LabeledElement>,
    pub method: LabeledMethod,
    pub all_elements: ElementProfile,
    pub johu_adjustment: Option<JohuAdjustment>,
    pub reasoning: Vec<String>,
}

impl YongShenResult {
    pub fn ki_shen(&self) -> Option<Element> {
        self.all_elements.ki_shen()
    }
}

fn in_band(x: f64, band: (f64, f64)) -> bool {
    band.0 <= x && x <= band.1
}

fn pct(x: f64) -> String {
    format!("{:.1}%", x * 100.0)
}

/// A formation: the dominant month element and the stem that exposes it.
struct Formation {
    element: Element,
    exposed_on: Stem,
}

/// Month-branch element that dominates the chart and shows on a stem.
fn detect_formation(pillars: &FourPillars, profile: &ElementProfile) -> Option<Formation> {
    let me = pillars.day_master().element();
    let element = pillars.month_branch().primary_stem().element();
    if element == me
        || profile.share(element) < FORMATION_MIN_SHARE
        || profile.strongest() != element
    {
        return None;
    }
    let [year, month, _, hour] = pillars.stems();
    [month, year, hour]
        .into_iter()
        .find(|s| s.element() == element)
        .map(|exposed_on| Formation {
            element,
            exposed_on,
        })
}

/// Candidates in preference order, with the line explaining them.
struct Choice {
    candidates: Vec<Element>,
    reason: String,
}

fn formation_choice(me: Element, formation: &Formation) -> Choice {
    let m = formation.element;
    let candidates: Vec<Element> = [m.generates(), m.restrained_by()]
        .into_iter()
        .filter(|&e| e != me)
        .collect();
    let reason = format!(
        "{} from the month branch dominates and is exposed on stem {} ({} formation); use {} to channel it",
        m.label(),
        formation.exposed_on.hanja(),
        Relation::between(me, m).hangul(),
        candidates[0].label(),
    );
    Choice { candidates, reason }
}

fn balance_choice(me: Element, share: f64, profile: &ElementProfile) -> Choice {
    if share < WEAK_THRESHOLD {
        let resource = me.generated_by();
        Choice {
            candidates: vec![resource, me],
            reason: format!(
                "Day Master is weak ({} < {}); strengthen it with its resource {}",
                pct(share),
                pct(WEAK_THRESHOLD),
                resource.label()
            ),
        }
    } else if share > STRONG_THRESHOLD {
        let output = me.generates();
        let officer = me.restrained_by();
        let mut candidates = vec![output, officer];
        candidates.sort_by_key(|&e| (profile.score(e), e.index()));
        Choice {
            reason: format!(
                "Day Master is strong ({} > {}); drain or check it with the weaker of output {} and officer {}: {}",
                pct(share),
                pct(STRONG_THRESHOLD),
                output.label(),
                officer.label(),
                candidates[0].label()
            ),
            candidates,
        }
    } else {
        let order = profile.ascending();
        Choice {
            candidates: order[..2].to_vec(),
            reason: format!(
                "Day Master is moderate ({}); reinforce the weakest element {}",
                pct(share),
                order[0].label()
            ),
        }
    }
}

/// Resolve the useful element for a chart.
pub fn analyze_yongshen(pillars: &FourPillars) -> YongShenResult {
    resolve(pillars, analyze_elements(pillars))
}

/// Resolve from an already computed profile of `pillars`.
pub fn resolve(pillars: &FourPillars, mut profile: ElementProfile) -> YongShenResult {
    let dm = pillars.day_master();
    let me = dm.element();
    let share = profile.share(me);
    let mut reasoning = vec![format!(
        "Day Master {} ({}) holds {} of weighted strength",
        dm.hanja(),
        me.label(),
        pct(share)
    )];

    let (method, choice) = if !in_band(share, OVERRIDE_BAND) {
        reasoning.push(format!(
            "Self strength {} is outside {}–{}; balance method forced",
            pct(share),
            pct(OVERRIDE_BAND.0),
            pct(OVERRIDE_BAND.1)
        ));
        (Method::Balance, balance_choice(me, share, &profile))
    } else if let Some(formation) = in_band(share, FORMATION_BAND)
        .then(|| detect_formation(pillars, &profile))
        .flatten()
    {
        (Method::Formation, formation_choice(me, &formation))
    } else {
        reasoning.push("No formation pattern applies; using balance method".to_string());
        (Method::Balance, balance_choice(me, share, &profile))
    };
    reasoning.push(choice.reason);

    let primary = choice.candidates[0];
    let secondary = choice.candidates.get(1).copied().filter(|&runner_up| {
        (profile.share(primary) - profile.share(runner_up)).abs() <= SECONDARY_MARGIN
    });
    if let Some(s) = secondary {
        reasoning.push(format!(
            "{} is within {} of {}; kept as secondary",
            s.label(),
            pct(SECONDARY_MARGIN),
            primary.label()
        ));
    }

    let ki_shen = Some(primary.restrained_by()).filter(|&k| Some(k) != secondary);
    match ki_shen {
        Some(k) => reasoning.push(format!(
            "{} restrains {} and is the Ki-Shen",
            k.label(),
            primary.label()
        )),
        None => reasoning.push(format!(
            "{} restrains {} but is the secondary; no Ki-Shen",
            primary.restrained_by().label(),
            primary.label()
        )),
    }

    profile.flag_yong_shen(primary);
    profile.flag_ki_shen(ki_shen);

    let johu = johu_adjustment(pillars.month_branch());
    if let Some(j) = &johu {
        reasoning.push(format!("Climate note: {}", j.note));
    }

    YongShenResult {
        primary: primary.into(),
        secondary: secondary.map(Into::into),
        method: method.into(),
        all_elements: profile,
        johu_adjustment: johu,
        reasoning,
    }
}
