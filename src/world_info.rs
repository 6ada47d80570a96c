use serde::{Deserialize, Serialize};

// A World Info entry as the host exposes it: comma separated trigger keys and the lore text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorldInfoEntry {
    pub keys: String,
    pub entry: String,
    #[serde(default)]
    pub hidden: bool,
}

impl WorldInfoEntry {
    pub fn new(keys: impl Into<String>, entry: impl Into<String>) -> Self {
        WorldInfoEntry {
            keys: keys.into(),
            entry: entry.into(),
            hidden: false,
        }
    }

    // Trimmed, lowercased trigger keys. Blank keys (e.g. from a trailing comma) are skipped.
    pub fn key_list(&self) -> Vec<String> {
        self.keys
            .split(',')
            .map(|key| key.trim().to_lowercase())
            .filter(|key| !key.is_empty())
            .collect()
    }

    // Whether any of the keys occurs in already lowercased text.
    fn is_triggered_by(&self, lower_text: &str) -> bool {
        self.key_list().iter().any(|key| lower_text.contains(key.as_str()))
    }
}

/// Indexes of every entry with at least one key occurring in `text`, ignoring case.
pub fn find_keys_in_text(text: &str, entries: &[WorldInfoEntry]) -> Vec<usize> {
    let lower_text = text.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_triggered_by(&lower_text))
        .map(|(index, _)| index)
        .collect()
}

/// First entry whose keys contain `key`, ignoring case.
pub fn find_world_info<'a>(entries: &'a [WorldInfoEntry], key: &str) -> Option<&'a WorldInfoEntry> {
    let key = key.to_lowercase();
    entries
        .iter()
        .find(|entry| entry.keys.to_lowercase().contains(&key))
}
