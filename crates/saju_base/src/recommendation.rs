//! Colors, directions and numbers associated with an element.
//!
//! Numbers follow the 하도 (河圖) pairs: water 1·6, fire 2·7, wood 3·8,
//! metal 4·9, earth 5·10.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::yongshen::YongShenResult;

/// Lookup row for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementTraits {
    pub colors: &'static [&'static str],
    pub directions: &'static [&'static str],
    pub numbers: &'static [u8],
}

/// Traits of an element.
pub const fn element_traits(element: Element) -> ElementTraits {
    match element {
        Element::Wood => ElementTraits {
            colors: &["green", "blue"],
            directions: &["east"],
            numbers: &[3, 8],
        },
        Element::Fire => ElementTraits {
            colors: &["red", "purple"],
            directions: &["south"],
            numbers: &[2, 7],
        },
        Element::Earth => ElementTraits {
            colors: &["yellow", "brown"],
            directions: &["center"],
            numbers: &[5, 10],
        },
        Element::Metal => ElementTraits {
            colors: &["white", "gold"],
            directions: &["west"],
            numbers: &[4, 9],
        },
        Element::Water => ElementTraits {
            colors: &["black", "navy"],
            directions: &["north"],
            numbers: &[1, 6],
        },
    }
}

/// Suggestions for a resolved chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecommendations {
    pub colors: Vec<String>,
    pub directions: Vec<String>,
    pub numbers: Vec<u8>,
}

impl ElementRecommendations {
    fn append(&mut self, element: Element) {
        let t = element_traits(element);
        self.colors.extend(t.colors.iter().map(|s| s.to_string()));
        self.directions.extend(t.directions.iter().map(|s| s.to_string()));
        self.numbers.extend_from_slice(t.numbers);
    }

    /// Recommendations for a single element.
    pub fn for_element(element: Element) -> Self {
        let mut r = Self::default();
        r.append(element);
        r
    }
}

/// Primary element's suggestions, followed by the secondary's if present.
pub fn get_element_recommendations(result: &YongShenResult) -> ElementRecommendations {
    let mut r = ElementRecommendations::for_element(result.primary.element);
    if let Some(secondary) = &result.secondary {
        r.append(secondary.element);
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hetu_numbers() {
        assert_eq!(element_traits(Element::Water).numbers, &[1, 6]);
        assert_eq!(element_traits(Element::Earth).numbers, &[5, 10]);
    }

    #[test]
    fn single_element() {
        let r = ElementRecommendations::for_element(Element::Metal);
        assert_eq!(r.colors, vec!["white", "gold"]);
        assert_eq!(r.directions, vec!["west"]);
        assert_eq!(r.numbers, vec![4, 9]);
    }
}
