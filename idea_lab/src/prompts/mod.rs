//! Strategy prompts - canned suggestions triggered by cue combinations.

use cue_rules::Cue;
use serde::{Deserialize, Serialize};

use crate::selection::CueSelection;

/// Cue count at which the bundle A/B-test prompt fires.
const BUNDLE_PROMPT_THRESHOLD: usize = 4;

/// The canned strategy prompts, declared in their fixed emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyPrompt {
    /// `nature_cleanse` and `clean_wear` both active.
    BotanicalClinical,
    /// `cosy_calm` and `plant_pure` both active.
    CozyNaturalCare,
    /// Four or more cues active.
    BundleAbTest,
}

impl StrategyPrompt {
    /// All prompts in emission order.
    pub const ALL: [StrategyPrompt; 3] = [
        StrategyPrompt::BotanicalClinical,
        StrategyPrompt::CozyNaturalCare,
        StrategyPrompt::BundleAbTest,
    ];

    /// The suggestion text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            StrategyPrompt::BotanicalClinical => {
                "Position this combo as Botanical + Clinical Clean — ideal for aluminum-free messaging"
            }
            StrategyPrompt::CozyNaturalCare => {
                "Use cozy comfort + natural care — suitable for calming narratives on digital channels"
            }
            StrategyPrompt::BundleAbTest => {
                "Consider testing this cue bundle in a targeted A/B test across 2 personas"
            }
        }
    }

    /// Whether this prompt's condition holds for the selection.
    ///
    /// Conditions are independent; any number of prompts can fire at once.
    pub fn applies_to(self, selection: &CueSelection) -> bool {
        match self {
            StrategyPrompt::BotanicalClinical => {
                selection.contains_all(&[Cue::NatureCleanse, Cue::CleanWear])
            }
            StrategyPrompt::CozyNaturalCare => {
                selection.contains_all(&[Cue::CosyCalm, Cue::PlantPure])
            }
            StrategyPrompt::BundleAbTest => selection.active_count() >= BUNDLE_PROMPT_THRESHOLD,
        }
    }

    /// Prompts that fire for the selection, in fixed emission order.
    pub fn matching(selection: &CueSelection) -> Vec<StrategyPrompt> {
        StrategyPrompt::ALL
            .into_iter()
            .filter(|prompt| prompt.applies_to(selection))
            .collect()
    }
}
