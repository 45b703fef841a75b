//! Catalog of common cognitive distortions with illustrative examples.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// A named thinking pattern and an example of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CognitiveDistortion {
    pub name: &'static str,
    pub example: &'static str,
}

pub const COGNITIVE_DISTORTIONS: [CognitiveDistortion; 6] = [
    CognitiveDistortion {
        name: "Labeling",
        example: "e.g., 'I’m such a failure.'",
    },
    CognitiveDistortion {
        name: "Emotional Reasoning",
        example: "e.g., 'I feel scared, so I must be in danger.'",
    },
    CognitiveDistortion {
        name: "Catastrophizing",
        example: "e.g., 'Everything is going to go wrong.'",
    },
    CognitiveDistortion {
        name: "Personalization",
        example: "e.g., 'It’s my fault that others are unhappy.'",
    },
    CognitiveDistortion {
        name: "Mind Reading",
        example: "e.g., 'They probably don’t like me.'",
    },
    CognitiveDistortion {
        name: "Mental Filtering",
        example: "e.g., focusing only on negatives.",
    },
];

static CATALOG: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    COGNITIVE_DISTORTIONS
        .iter()
        .map(|d| (d.name, d.example))
        .collect()
});

/// Name to example mapping, built once on first use.
pub fn distortion_catalog() -> &'static BTreeMap<&'static str, &'static str> {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_every_distortion() {
        let catalog = distortion_catalog();
        assert_eq!(catalog.len(), COGNITIVE_DISTORTIONS.len());
        for distortion in COGNITIVE_DISTORTIONS {
            assert_eq!(catalog.get(distortion.name), Some(&distortion.example));
        }
    }

    #[test]
    fn catalog_examples_are_verbatim() {
        let catalog = distortion_catalog();
        assert_eq!(catalog["Catastrophizing"], "e.g., 'Everything is going to go wrong.'");
        assert_eq!(catalog["Mental Filtering"], "e.g., focusing only on negatives.");
    }
}
