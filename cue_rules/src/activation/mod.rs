//! Activation tiers - the threshold ladder mapping cluster scores to
//! qualitative labels.

use serde::{Deserialize, Serialize};

/// Qualitative activation tier for a cluster score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    Strong,
    Moderate,
    Low,
    Negative,
}

impl Activation {
    /// Map a score to its tier.
    ///
    /// Evaluated top-down with closed lower bounds: exactly 50, 20, and 0
    /// each belong to the higher tier.
    pub fn from_score(score: i32) -> Activation {
        if score >= 50 {
            Activation::Strong
        } else if score >= 20 {
            Activation::Moderate
        } else if score >= 0 {
            Activation::Low
        } else {
            Activation::Negative
        }
    }

    /// Headline shown next to the score.
    pub fn headline(self) -> &'static str {
        match self {
            Activation::Strong => "Strong Activation — build for this mindset",
            Activation::Moderate => "Moderate Activation — test and learn",
            Activation::Low => "Low Signal — weak fit",
            Activation::Negative => "Negative Activation — avoid",
        }
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.headline())
    }
}
