// Import necessary modules for file I/O and serialization.
use crate::commands::CommandConfig;
use crate::context::ContextTuning;
use crate::manual::ManualTuning;
use crate::selector::Selector;
use crate::similar::GeneratorTuning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const SETTINGS_PATH: &str = "./data/settings.json"; // Default settings location.

// Tuning for every script, with serialization so scenarios can ship their own.
// Missing sections and fields fall back to their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub context: ContextTuning,     // World info enforcement limits.
    pub commands: CommandConfig,    // Command symbols and inline commands.
    pub manual: ManualTuning,       // Info manual hints.
    pub generator: GeneratorTuning, // Similar character generator prompts.
    pub selector: Selector,         // Exhaustion and reconciliation rules.
    pub debug_mode: bool,           // Log at debug level.
    pub data_dir: String,           // Where saves and the log file go.
}

// Implement the Default trait for Settings to provide the stock tuning.
impl Default for Settings {
    fn default() -> Self {
        Settings {
            context: ContextTuning::default(),
            commands: CommandConfig::default(),
            manual: ManualTuning::default(),
            generator: GeneratorTuning::default(),
            selector: Selector::default(),
            debug_mode: false,              // Debug logging disabled by default.
            data_dir: "./data".to_string(), // Relative to the working directory.
        }
    }
}

impl Settings {
    // Constructor function to create new settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // Load settings from the default file path.
    pub fn load() -> io::Result<Self> {
        Self::load_settings_from_file(SETTINGS_PATH)
    }

    // Save current settings to the default file path.
    pub fn save(&self) -> io::Result<()> {
        self.save_to_file(SETTINGS_PATH)
    }

    // Load settings from a specified file path.
    pub fn load_settings_from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let data = fs::read_to_string(path)?; // Read settings from file.
        let settings = serde_json::from_str(&data)?; // Deserialize JSON data into settings.
        Ok(settings)
    }

    // Save current settings to a specified file path.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let data = serde_json::to_string_pretty(self)?; // Serialize settings into pretty JSON format.
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?; // Create the directory if it doesn't exist.
        }
        let mut file = fs::File::create(path)?; // Create or overwrite the file.
        file.write_all(data.as_bytes())?; // Write the serialized data to the file.
        Ok(())
    }
}
