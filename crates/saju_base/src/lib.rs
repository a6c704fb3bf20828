//! Sexagenary cycle and chart analysis for the saju engine.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches (with hidden stems) and the 60-cycle
//! - `FourPillars`, the eight-character natal chart
//! - Ten-god relations to the Day Master
//! - Seasonal five-element strength (`analyze_elements`)
//! - Useful-element resolution (`analyze_yongshen`) and recommendations
//!
//! Everything here is pure table arithmetic with no calendar dependency.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod element_profile;
pub mod error;
pub mod four_pillars;
pub mod recommendation;
pub mod stem;
pub mod ten_god;
pub mod yongshen;

pub use branch::{ALL_BRANCHES, Branch, HiddenRole, HiddenStem};
pub use cycle::{CYCLE_LEN, Pillar, combine, cycle_index};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use element_profile::{
    ElementProfile, ElementScore, SEASONAL_PERCENT, analyze_elements, season_element,
};
pub use error::CycleError;
pub use four_pillars::{ALL_POSITIONS, FourPillars, PillarPosition};
pub use recommendation::{
    ElementRecommendations, ElementTraits, element_traits, get_element_recommendations,
};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{Relation, TenGod};
pub use yongshen::{
    Climate, JohuAdjustment, LabeledElement, LabeledMethod, Method, YongShenResult,
    analyze_yongshen, johu_adjustment, resolve,
};
