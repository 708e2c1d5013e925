//! Flat-file scenario store - a two-column comma-separated table.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::{Scenario, ScenarioError, ScenarioStore};

/// Header row written at the top of the file.
const HEADER: &str = "name,cues";

/// Scenario store backed by a flat text file.
///
/// Format: the `name,cues` header row, then one row per scenario. The name
/// is everything before the first comma and the cues column is the
/// remainder; cue ids never contain commas, so no further escaping exists.
/// Names therefore may not contain commas either, and `write_all` rejects
/// ones that do.
///
/// A missing file reads as an empty table. Every write replaces the whole
/// file, so a failed save needs no cleanup.
#[derive(Debug, Clone)]
pub struct CsvScenarioStore {
    path: PathBuf,
}

impl CsvScenarioStore {
    /// Create a store over the given file path. The file is not touched
    /// until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ScenarioStore for CsvScenarioStore {
    fn read_all(&self) -> Result<Vec<Scenario>, ScenarioError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no scenario file at {}, reading as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut scenarios = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            if line_no == 0 && line == HEADER {
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            let (name, cue_list) = line
                .split_once(',')
                .ok_or(ScenarioError::MalformedRow { line: line_no + 1 })?;
            scenarios.push(Scenario {
                name: name.to_string(),
                cues: Scenario::parse_cue_list(cue_list)?,
            });
        }

        debug!(
            "read {} scenario rows from {}",
            scenarios.len(),
            self.path.display()
        );
        Ok(scenarios)
    }

    fn write_all(&mut self, scenarios: &[Scenario]) -> Result<(), ScenarioError> {
        let mut table = String::from(HEADER);
        table.push('\n');

        for scenario in scenarios {
            if scenario.name.contains(',') {
                return Err(ScenarioError::InvalidName {
                    name: scenario.name.clone(),
                });
            }
            table.push_str(&scenario.name);
            table.push(',');
            table.push_str(&scenario.cue_list());
            table.push('\n');
        }

        fs::write(&self.path, table)?;
        debug!(
            "wrote {} scenario rows to {}",
            scenarios.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{load_scenario, save_scenario};
    use crate::selection::CueSelection;
    use cue_rules::Cue;

    fn store_in(dir: &tempfile::TempDir) -> CsvScenarioStore {
        CsvScenarioStore::new(dir.path().join("scenarios.csv"))
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.exists());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_read_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let rows = vec![
            Scenario {
                name: "summer".to_string(),
                cues: vec![Cue::FreshVitality, Cue::SweatAway],
            },
            Scenario {
                name: "night".to_string(),
                cues: vec![Cue::CareNight],
            },
        ];
        store.write_all(&rows).unwrap();

        assert_eq!(store.read_all().unwrap(), rows);
    }

    #[test]
    fn test_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store
            .write_all(&[Scenario {
                name: "combo".to_string(),
                cues: vec![Cue::NatureCleanse, Cue::CleanWear],
            }])
            .unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "name,cues\ncombo,nature_cleanse,clean_wear\n");
    }

    #[test]
    fn test_empty_cue_set_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store
            .write_all(&[Scenario {
                name: "blank".to_string(),
                cues: Vec::new(),
            }])
            .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].cues.is_empty());
    }

    #[test]
    fn test_malformed_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "name,cues\nrow-without-a-comma\n").unwrap();

        let err = store.read_all().unwrap_err();
        assert!(matches!(err, ScenarioError::MalformedRow { line: 2 }));
    }

    #[test]
    fn test_unknown_cue_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "name,cues\nbad,nature_cleanse,space_lasers\n").unwrap();

        let err = store.read_all().unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownCue { token } if token == "space_lasers"));
    }

    #[test]
    fn test_comma_in_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let err = store
            .write_all(&[Scenario {
                name: "a,b".to_string(),
                cues: Vec::new(),
            }])
            .unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidName { .. }));
    }

    #[test]
    fn test_save_load_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let saved: CueSelection = [Cue::CosyCalm, Cue::PlantPure].into_iter().collect();
        save_scenario(&mut store, "calm", &saved).unwrap();

        // Fresh store handle over the same file, as a new session would use
        let reopened = CsvScenarioStore::new(store.path());
        assert_eq!(load_scenario(&reopened, "calm").unwrap(), saved);
    }
}
