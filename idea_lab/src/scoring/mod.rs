//! Cluster scoring - summing the fixed weight vectors over the active cues.

use cue_rules::{Activation, Cluster};
use serde::{Deserialize, Serialize};

use crate::selection::CueSelection;

/// Integer scores for all three clusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterScores {
    scores: [i32; Cluster::ALL.len()],
}

impl ClusterScores {
    /// Score for one cluster.
    pub fn get(&self, cluster: Cluster) -> i32 {
        self.scores[cluster as usize]
    }

    /// Activation tier for one cluster's score.
    pub fn activation(&self, cluster: Cluster) -> Activation {
        Activation::from_score(self.get(cluster))
    }

    /// Iterate scores in cluster order.
    pub fn iter(&self) -> impl Iterator<Item = (Cluster, i32)> + '_ {
        Cluster::ALL.into_iter().map(|cluster| (cluster, self.get(cluster)))
    }
}

/// Sum each cluster's weights over the active cues.
///
/// Pure function of the selection and the fixed weight table. Integer
/// addition over the chosen subset makes the result independent of the
/// order cues were toggled in.
pub fn compute_scores(selection: &CueSelection) -> ClusterScores {
    let mut scores = [0i32; Cluster::ALL.len()];

    for cue in selection.active_cues() {
        for cluster in Cluster::ALL {
            scores[cluster as usize] += cluster.weight_for(cue);
        }
    }

    ClusterScores { scores }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_rules::Cue;

    #[test]
    fn test_empty_selection_scores_zero() {
        let scores = compute_scores(&CueSelection::new());

        for cluster in Cluster::ALL {
            assert_eq!(scores.get(cluster), 0);
            assert_eq!(scores.activation(cluster), Activation::Low);
        }
    }

    #[test]
    fn test_full_selection() {
        let selection: CueSelection = Cue::ALL.into_iter().collect();
        let scores = compute_scores(&selection);

        assert_eq!(scores.get(Cluster::Cluster1), 71);
        assert_eq!(scores.get(Cluster::Cluster2), 90);
        assert_eq!(scores.get(Cluster::Cluster3), -56);

        assert_eq!(scores.activation(Cluster::Cluster1), Activation::Strong);
        assert_eq!(scores.activation(Cluster::Cluster2), Activation::Strong);
        assert_eq!(scores.activation(Cluster::Cluster3), Activation::Negative);
    }

    #[test]
    fn test_single_cue() {
        let selection: CueSelection = [Cue::NatureCleanse].into_iter().collect();
        let scores = compute_scores(&selection);

        assert_eq!(scores.get(Cluster::Cluster1), 6);
        assert_eq!(scores.get(Cluster::Cluster2), 16);
        assert_eq!(scores.get(Cluster::Cluster3), -42);
    }

    #[test]
    fn test_subset_equals_member_weight_sum() {
        let subset = [Cue::CosyCalm, Cue::PlantPure, Cue::CareNight];
        let selection: CueSelection = subset.into_iter().collect();
        let scores = compute_scores(&selection);

        for cluster in Cluster::ALL {
            let expected: i32 = subset.iter().map(|cue| cluster.weight_for(*cue)).sum();
            assert_eq!(scores.get(cluster), expected);
        }
    }

    #[test]
    fn test_toggle_order_does_not_matter() {
        let forward: CueSelection = [Cue::CleanWear, Cue::SweatAway, Cue::TouchSmooth]
            .into_iter()
            .collect();
        let backward: CueSelection = [Cue::TouchSmooth, Cue::SweatAway, Cue::CleanWear]
            .into_iter()
            .collect();

        assert_eq!(compute_scores(&forward), compute_scores(&backward));
    }

    #[test]
    fn test_iter_order() {
        let scores = compute_scores(&CueSelection::new());
        let clusters: Vec<Cluster> = scores.iter().map(|(cluster, _)| cluster).collect();
        assert_eq!(clusters, Cluster::ALL.to_vec());
    }
}
