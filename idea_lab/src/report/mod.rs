//! Assembled per-interaction output - everything the interaction surface
//! renders after a toggle, selector change, or button press.

use cue_rules::{Activation, Cluster};
use serde::{Deserialize, Serialize};

use crate::prompts::StrategyPrompt;
use crate::scoring::compute_scores;
use crate::selection::CueSelection;

/// One cluster's row in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterReading {
    pub cluster: Cluster,
    pub score: i32,
    pub activation: Activation,
    pub headline: String,
    pub profile: String,
}

/// The full result of one interaction: a reading per cluster plus whatever
/// strategy prompts fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabReport {
    pub readings: Vec<ClusterReading>,
    pub prompts: Vec<StrategyPrompt>,
}

impl LabReport {
    /// Score the selection and bundle everything the surface needs.
    ///
    /// Stateless: called with the current toggle state on every
    /// interaction, retaining nothing in between.
    pub fn assemble(selection: &CueSelection) -> LabReport {
        let scores = compute_scores(selection);

        let readings = Cluster::ALL
            .into_iter()
            .map(|cluster| {
                let score = scores.get(cluster);
                let activation = Activation::from_score(score);
                ClusterReading {
                    cluster,
                    score,
                    activation,
                    headline: activation.headline().to_string(),
                    profile: cluster.profile().to_string(),
                }
            })
            .collect();

        LabReport {
            readings,
            prompts: StrategyPrompt::matching(selection),
        }
    }

    /// The reading for one cluster.
    pub fn reading(&self, cluster: Cluster) -> Option<&ClusterReading> {
        self.readings.iter().find(|reading| reading.cluster == cluster)
    }
}
