//! Named scenarios - saved snapshots of the active cue set, and the store
//! that persists them.
//!
//! A store is a flat table of `(name, cues)` rows. The engine-level
//! semantics live here as free functions over any [`ScenarioStore`]:
//! upsert-by-name on save (last write wins), first matching row on load,
//! and "unknown name reads as the empty selection".

mod csv_store;

pub use csv_store::*;

use cue_rules::Cue;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::CueSelection;

/// Delimiter between cue ids in a stored row.
const CUE_DELIMITER: &str = ",";

/// Errors from scenario persistence.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario name must not be empty")]
    EmptyName,

    #[error("scenario name '{name}' may not contain a comma")]
    InvalidName { name: String },

    #[error("unknown cue id '{token}' in stored scenario")]
    UnknownCue { token: String },

    #[error("malformed scenario row at line {line}")]
    MalformedRow { line: usize },

    #[error("scenario store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A saved snapshot of which cues were active, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Active cues in fixed declaration order.
    pub cues: Vec<Cue>,
}

impl Scenario {
    /// Snapshot the given selection under a name.
    pub fn from_selection(name: impl Into<String>, selection: &CueSelection) -> Self {
        Self {
            name: name.into(),
            cues: selection.active_cues(),
        }
    }

    /// Comma-joined cue ids, in declaration order.
    pub fn cue_list(&self) -> String {
        self.cues
            .iter()
            .map(|cue| cue.id())
            .collect::<Vec<_>>()
            .join(CUE_DELIMITER)
    }

    /// Parse a comma-joined cue id list back into cues.
    ///
    /// The empty string parses to no cues. An unknown id is an integrity
    /// error, never silently skipped.
    pub fn parse_cue_list(list: &str) -> Result<Vec<Cue>, ScenarioError> {
        if list.is_empty() {
            return Ok(Vec::new());
        }

        list.split(CUE_DELIMITER)
            .map(|token| {
                let token = token.trim();
                Cue::from_id(token).ok_or_else(|| ScenarioError::UnknownCue {
                    token: token.to_string(),
                })
            })
            .collect()
    }

    /// Reconstruct the selection this scenario captured.
    pub fn to_selection(&self) -> CueSelection {
        self.cues.iter().copied().collect()
    }
}

/// Durable table of scenario rows.
///
/// `read_all` returns rows in natural (insertion) order, and a store that
/// has never been written reads as empty rather than failing. `write_all`
/// replaces the whole table. The read-modify-write sequence in
/// [`save_scenario`] assumes a single writer; concurrent sessions sharing
/// one store would need to serialize saves externally.
pub trait ScenarioStore {
    fn read_all(&self) -> Result<Vec<Scenario>, ScenarioError>;
    fn write_all(&mut self, scenarios: &[Scenario]) -> Result<(), ScenarioError>;
}

/// Save the selection under `name`, replacing any existing row with the
/// same name.
///
/// Exactly one row per name survives; a replaced row keeps its position and
/// a new name appends. Empty and whitespace-only names are rejected.
pub fn save_scenario<S: ScenarioStore>(
    store: &mut S,
    name: &str,
    selection: &CueSelection,
) -> Result<(), ScenarioError> {
    if name.trim().is_empty() {
        return Err(ScenarioError::EmptyName);
    }

    let mut scenarios = store.read_all()?;
    let scenario = Scenario::from_selection(name, selection);
    match scenarios.iter_mut().find(|existing| existing.name == name) {
        Some(existing) => *existing = scenario,
        None => scenarios.push(scenario),
    }
    store.write_all(&scenarios)?;

    info!("saved scenario '{name}' with {} cues", selection.active_count());
    Ok(())
}

/// Load the named scenario as a selection.
///
/// An unknown name yields the empty selection, mirroring "no scenario
/// selected". In a damaged store holding duplicate names, the first
/// matching row wins.
pub fn load_scenario<S: ScenarioStore>(
    store: &S,
    name: &str,
) -> Result<CueSelection, ScenarioError> {
    let scenarios = store.read_all()?;
    match scenarios.iter().find(|scenario| scenario.name == name) {
        Some(scenario) => {
            debug!("loaded scenario '{name}' with {} cues", scenario.cues.len());
            Ok(scenario.to_selection())
        }
        None => {
            debug!("scenario '{name}' not found, loading empty selection");
            Ok(CueSelection::new())
        }
    }
}

/// Stored names in natural row order, for a scenario selector.
pub fn scenario_names<S: ScenarioStore>(store: &S) -> Result<Vec<String>, ScenarioError> {
    Ok(store
        .read_all()?
        .into_iter()
        .map(|scenario| scenario.name)
        .collect())
}

/// In-memory store for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryScenarioStore {
    scenarios: Vec<Scenario>,
}

impl MemoryScenarioStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioStore for MemoryScenarioStore {
    fn read_all(&self) -> Result<Vec<Scenario>, ScenarioError> {
        Ok(self.scenarios.clone())
    }

    fn write_all(&mut self, scenarios: &[Scenario]) -> Result<(), ScenarioError> {
        self.scenarios = scenarios.to_vec();
        Ok(())
    }
}
