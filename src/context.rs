// Context modifier that pulls World Info in from pinned text, game text and other World Info,
// and shares the context budget between that extra info and the game text.
use crate::hook::HookOutput;
use crate::utils::{char_len, first_chars, last_chars, skip_chars};
use crate::world_info::{WorldInfoEntry, find_keys_in_text};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextTuning {
    pub extra_info_length: usize, // Budget for World Info + pinned info when the context overflows.
    pub search_pinned: bool,      // Search the pinned text for World Info keys.
    pub search_game: bool,        // Search the game text for World Info keys.
    pub search_world_info: bool,  // Let loaded World Info trigger more World Info.
    pub max_context_length: usize,
    pub pinned_priority: bool, // Keep the pinned end of the extra info when it has to be cut.
}

impl Default for ContextTuning {
    fn default() -> Self {
        ContextTuning {
            extra_info_length: 1500,
            search_pinned: true,
            search_game: true,
            search_world_info: true,
            // The host caps contexts at 3000 but trims the start before reaching it.
            max_context_length: 2900,
            pinned_priority: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    pub tuning: ContextTuning,
}

impl ContextBuilder {
    pub fn new(tuning: ContextTuning) -> Self {
        ContextBuilder { tuning }
    }

    /// Indexes of every World Info entry that should be loaded, in ascending order.
    pub fn triggered_entries(
        &self,
        pinned_info: &str,
        game_info: &str,
        world_info: &[WorldInfoEntry],
    ) -> BTreeSet<usize> {
        let mut loaded = BTreeSet::new();

        if self.tuning.search_pinned {
            loaded.extend(find_keys_in_text(pinned_info, world_info));
        }
        if self.tuning.search_game {
            loaded.extend(find_keys_in_text(game_info, world_info));
        }

        if self.tuning.search_world_info {
            // Keep going until the loaded entries stop pulling in new ones.
            loop {
                let loaded_text = join_entries(&loaded, world_info);
                let before = loaded.len();
                loaded.extend(find_keys_in_text(&loaded_text, world_info));
                if loaded.len() == before {
                    break;
                }
            }
        }

        loaded
    }

    /// Assemble the context from the host's text, its pinned memory and the World Info.
    ///
    /// `memory_length` is how many leading characters of `text` are the host's own memory section.
    pub fn build_context(
        &self,
        text: &str,
        memory: &str,
        memory_length: usize,
        world_info: &[WorldInfoEntry],
    ) -> HookOutput {
        let pinned_info = memory;
        let game_info = if memory_length > 0 {
            skip_chars(text, memory_length)
        } else {
            text
        };

        let loaded = self.triggered_entries(pinned_info, game_info, world_info);
        let world_info_text = join_entries(&loaded, world_info);
        log::debug!("Loaded {} World Info entries into context", loaded.len());

        let max = self.tuning.max_context_length;
        let game_length = char_len(game_info);

        if char_len(&world_info_text) + char_len(pinned_info) + game_length <= max {
            return HookOutput::pass(format!("{world_info_text}{pinned_info}\n{game_info}"));
        }

        let uncut = format!("{world_info_text}{pinned_info}");
        let limit = self.tuning.extra_info_length;
        let extra_info = if char_len(&uncut) <= limit {
            uncut.as_str()
        } else if self.tuning.pinned_priority {
            last_chars(&uncut, limit)
        } else {
            first_chars(&uncut, limit)
        };
        let extra_length = char_len(extra_info);

        if game_length + extra_length <= max {
            HookOutput::pass(format!("{extra_info}\n{game_info}"))
        } else {
            // One character of the budget goes to the separating newline.
            let kept = max.saturating_sub(extra_length + 1);
            log::debug!("Cutting game info from {game_length} to {kept} characters");
            HookOutput::pass(format!("{extra_info}\n{}", last_chars(game_info, kept)))
        }
    }
}

// Text of the given entries, one per line.
fn join_entries(indexes: &BTreeSet<usize>, world_info: &[WorldInfoEntry]) -> String {
    indexes
        .iter()
        .filter_map(|index| world_info.get(*index))
        .map(|info| format!("{}\n", info.entry))
        .collect()
}
