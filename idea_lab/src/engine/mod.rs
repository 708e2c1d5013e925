//! The engine facade an interaction surface drives.

use crate::report::LabReport;
use crate::scenario::{
    load_scenario, save_scenario, scenario_names, ScenarioError, ScenarioStore,
};
use crate::selection::CueSelection;

/// Single entry point for an interaction surface.
///
/// Evaluates the current selection and saves/loads/lists named scenarios
/// through the owned store. The engine itself holds no toggle state; the
/// surface passes the current selection into every call.
pub struct IdeaEngine<S: ScenarioStore> {
    store: S,
}

impl<S: ScenarioStore> IdeaEngine<S> {
    /// Create an engine over the given scenario store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// One full recomputation for the current toggle state.
    pub fn evaluate(&self, selection: &CueSelection) -> LabReport {
        LabReport::assemble(selection)
    }

    /// Persist the selection under `name`, last write winning per name.
    pub fn save(&mut self, name: &str, selection: &CueSelection) -> Result<(), ScenarioError> {
        save_scenario(&mut self.store, name, selection)
    }

    /// Reload a saved selection; unknown names read as the empty selection.
    pub fn load(&self, name: &str) -> Result<CueSelection, ScenarioError> {
        load_scenario(&self.store, name)
    }

    /// Names available for a scenario selector, in stored order.
    pub fn scenario_names(&self) -> Result<Vec<String>, ScenarioError> {
        scenario_names(&self.store)
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
