//! Active cue selection - the toggle state scored on every interaction.

use cue_rules::Cue;
use serde::{Deserialize, Serialize};

/// The set of cues currently toggled on.
///
/// Backed by a fixed boolean mask keyed by `Cue::index`, so a membership
/// check cannot miss and iteration is always in declaration order no matter
/// which order the user toggled cues in. Serializes as a list of cue ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Cue>", from = "Vec<Cue>")]
pub struct CueSelection {
    active: [bool; Cue::COUNT],
}

impl CueSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cue is toggled on.
    pub fn is_active(&self, cue: Cue) -> bool {
        self.active[cue.index()]
    }

    /// Set a cue to an explicit state.
    pub fn set_active(&mut self, cue: Cue, active: bool) {
        self.active[cue.index()] = active;
    }

    /// Toggle a cue on.
    pub fn activate(&mut self, cue: Cue) {
        self.set_active(cue, true);
    }

    /// Toggle a cue off.
    pub fn deactivate(&mut self, cue: Cue) {
        self.set_active(cue, false);
    }

    /// Flip a cue, returning its new state.
    pub fn toggle(&mut self, cue: Cue) -> bool {
        let next = !self.is_active(cue);
        self.set_active(cue, next);
        next
    }

    /// Active cues in fixed declaration order, regardless of toggle order.
    pub fn active_cues(&self) -> Vec<Cue> {
        Cue::ALL
            .into_iter()
            .filter(|cue| self.is_active(*cue))
            .collect()
    }

    /// Number of active cues.
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|on| **on).count()
    }

    /// Whether no cue is active.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Whether every listed cue is active.
    pub fn contains_all(&self, cues: &[Cue]) -> bool {
        cues.iter().all(|cue| self.is_active(*cue))
    }

    /// Toggle every cue off.
    pub fn clear(&mut self) {
        self.active = [false; Cue::COUNT];
    }
}

impl FromIterator<Cue> for CueSelection {
    fn from_iter<I: IntoIterator<Item = Cue>>(iter: I) -> Self {
        let mut selection = CueSelection::new();
        for cue in iter {
            selection.activate(cue);
        }
        selection
    }
}

impl From<Vec<Cue>> for CueSelection {
    fn from(cues: Vec<Cue>) -> Self {
        cues.into_iter().collect()
    }
}

impl From<CueSelection> for Vec<Cue> {
    fn from(selection: CueSelection) -> Self {
        selection.active_cues()
    }
}
