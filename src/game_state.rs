use crate::error::ScriptError;
use crate::records::SelectionRecords;
use serde::{Deserialize, Serialize};
use std::path::Path;

// The host's persistent per-adventure state, shared by every script of a scenario.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ScenarioState {
    pub save_name: String, // File name of the save, without extension.
    #[serde(default)]
    pub initialized: bool, // Scripts have run their first turn setup.
    #[serde(default)]
    pub message: Option<String>, // Shown to the player by the host.
    #[serde(default)]
    pub previous_selections: SelectionRecords, // One selection ledger per table name.
    #[serde(default)]
    pub page_num: usize, // Next info manual page to show.
    #[serde(default)]
    pub do_progress: bool, // Similar character generation has been started.
    #[serde(default)]
    pub saved_at: Option<String>, // Local time of the last save.
}

impl ScenarioState {
    // Create a fresh state that will be saved under the given name.
    pub fn new(save_name: impl Into<String>) -> Self {
        ScenarioState {
            save_name: save_name.into(),
            ..Default::default()
        }
    }

    // Load a state from a json file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let file = std::fs::File::open(path)?; // Open the save for reading.
        let state: ScenarioState = serde_json::from_reader(file)?; // Missing fields fall back to defaults.
        Ok(state)
    }

    // Write the state to a json file, replacing any previous content.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let file = std::fs::File::create(path)?; // Create or overwrite the file.
        serde_json::to_writer_pretty(file, self)?; // Pretty so saves stay readable by hand.
        Ok(())
    }
}
