// Import necessary modules for save file handling.
use crate::error::ScriptError;
use crate::game_state::ScenarioState;

use chrono::Local;
use std::fs::{create_dir_all, read_dir, remove_file};
use std::path::{Component, Path, PathBuf};

pub const SAVE_DIR: &str = "./data/save"; // Default directory for scenario saves.

#[derive(Clone, Debug)]
pub struct SaveManager {
    pub save_dir: PathBuf,            // Directory holding one json file per save.
    pub available_saves: Vec<String>, // Save names found on the last scan, sorted.
}

impl Default for SaveManager {
    fn default() -> Self {
        Self::new(SAVE_DIR)
    }
}

impl SaveManager {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        let save_dir = save_dir.into();
        Self {
            available_saves: Self::scan_save_files(&save_dir), // Pick up saves already on disk.
            save_dir,
        }
    }

    // Names of every json save in the directory, sorted.
    pub fn scan_save_files(save_dir: &Path) -> Vec<String> {
        let Ok(entries) = read_dir(save_dir) else {
            return Vec::new(); // A missing directory simply means no saves yet.
        };

        let mut saves: Vec<String> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if path.is_file() && path.extension()? == "json" {
                    path.file_stem()?.to_str().map(String::from) // Save name without extension.
                } else {
                    None
                }
            })
            .collect();
        saves.sort();
        saves
    }

    pub fn refresh(&mut self) {
        self.available_saves = Self::scan_save_files(&self.save_dir);
    }

    // Path of a save, refusing names that would leave the save directory.
    fn save_path(&self, save_name: &str) -> Result<PathBuf, ScriptError> {
        let mut components = Path::new(save_name).components();
        let single_file_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_file_name || save_name.contains(['/', '\\']) {
            return Err(ScriptError::InvalidSaveName(save_name.to_string()));
        }
        Ok(self.save_dir.join(format!("{save_name}.json")))
    }

    pub fn load(&self, save_name: &str) -> Result<ScenarioState, ScriptError> {
        let path = self.save_path(save_name)?;
        if !path.is_file() {
            return Err(ScriptError::SaveNotFound(save_name.to_string()));
        }

        let state = ScenarioState::load_from_file(&path)?;
        log::debug!("load: {save_name} ({} selection tables)", state.previous_selections.len());
        Ok(state)
    }

    // Write the state under its save name, stamping when it was saved.
    pub fn save(&mut self, state: &mut ScenarioState) -> Result<(), ScriptError> {
        if state.save_name.trim().is_empty() {
            return Err(ScriptError::MissingSaveName);
        }
        let path = self.save_path(&state.save_name)?; // Checked before anything touches the disk.

        create_dir_all(&self.save_dir)?; // Ensure the save directory exists.
        state.saved_at = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
        state.save_to_file(path)?;
        log::info!("Saved scenario state '{}'", state.save_name);
        self.refresh(); // Keep the list of saves in sync with the disk.
        Ok(())
    }

    pub fn delete_save(&mut self, save_name: &str) -> Result<(), ScriptError> {
        let path = self.save_path(save_name)?;
        if !path.is_file() {
            return Err(ScriptError::SaveNotFound(save_name.to_string()));
        }
        remove_file(path)?;
        self.refresh();
        Ok(())
    }
}
