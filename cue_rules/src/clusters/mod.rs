//! Cluster definitions - the three scored persona segments and their fixed
//! weight vectors.

use serde::{Deserialize, Serialize};

use crate::cues::Cue;

const CLUSTER_1_WEIGHTS: [i32; Cue::COUNT] = [6, 19, 11, 4, 5, 10, 5, 4, 7];
const CLUSTER_2_WEIGHTS: [i32; Cue::COUNT] = [16, 12, 14, 5, 6, 14, 6, 6, 11];
const CLUSTER_3_WEIGHTS: [i32; Cue::COUNT] = [-42, -9, -1, 0, -3, 2, -2, -1, 0];

/// A cluster is a persona segment whose affinity to the active cues is
/// scored via a fixed weight vector aligned to cue declaration order.
///
/// The `[i32; Cue::COUNT]` weight arrays make the length-equals-cue-count
/// invariant a compile-time fact, and the enum key makes an unknown-cluster
/// lookup unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    Cluster1,
    Cluster2,
    Cluster3,
}

impl Cluster {
    /// All clusters in scoring order.
    pub const ALL: [Cluster; 3] = [Cluster::Cluster1, Cluster::Cluster2, Cluster::Cluster3];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Cluster::Cluster1 => "Cluster 1",
            Cluster::Cluster2 => "Cluster 2",
            Cluster::Cluster3 => "Cluster 3",
        }
    }

    /// The fixed weight vector, aligned to `Cue::index`.
    pub fn weights(self) -> &'static [i32; Cue::COUNT] {
        match self {
            Cluster::Cluster1 => &CLUSTER_1_WEIGHTS,
            Cluster::Cluster2 => &CLUSTER_2_WEIGHTS,
            Cluster::Cluster3 => &CLUSTER_3_WEIGHTS,
        }
    }

    /// Weight this cluster contributes when the given cue is active.
    pub fn weight_for(self, cue: Cue) -> i32 {
        self.weights()[cue.index()]
    }

    /// Persona description shown alongside the cluster's score.
    pub fn profile(self) -> &'static str {
        match self {
            Cluster::Cluster1 => {
                "Female-leaning, open to aluminum-free, prefers clean + natural cues"
            }
            Cluster::Cluster2 => "Males, heavy sweaters, prefer performance and comfort themes",
            Cluster::Cluster3 => "Minimalist mindsets, sensitive to over-claim or over-scent",
        }
    }

    /// Parse a display name back into a cluster.
    ///
    /// Returns `None` for names outside the fixed three; callers treat that
    /// as an integrity error rather than recovering.
    pub fn from_name(name: &str) -> Option<Cluster> {
        Cluster::ALL.into_iter().find(|cluster| cluster.name() == name)
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
