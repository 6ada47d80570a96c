// Generates characters similar to a handful of example characters kept in World Info.
// The player adds examples, enters the ready command, and from then on the context is rebuilt from
// those examples so the AI writes another entry in the same style.
use crate::game_state::ScenarioState;
use crate::hook::HookOutput;
use crate::world_info::WorldInfoEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorTuning {
    pub max_characters: usize, // Example entries pulled in from the start of World Info.
    pub start_prompt: String,  // First prompt line, trimmed from the context. Keep the newline.
    pub prepare_message: String,
    pub working_message: String,
    pub ready_command: String,
    pub cleaned_key: String, // Replaces every entry's keys so the host stops triggering them.
}

impl Default for GeneratorTuning {
    fn default() -> Self {
        GeneratorTuning {
            max_characters: 4,
            start_prompt: "Note: The AI doesn't know that there's a 600 character limit for character entries, so you may have to cut it down yourself.\n".to_string(),
            prepare_message: r##"Add up to 4 characters to this adventure's world info, then enter "#ready" to begin."##.to_string(),
            working_message: "Character generation has begun! Press continue.".to_string(),
            ready_command: "#ready".to_string(),
            cleaned_key: "the_script_has_cleaned_this_so_it_doesnt_trigger".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimilarCharacterGenerator {
    pub tuning: GeneratorTuning,
}

impl SimilarCharacterGenerator {
    pub fn new(tuning: GeneratorTuning) -> Self {
        SimilarCharacterGenerator { tuning }
    }

    /// Input modifier. Only the adventure's first input (the prompt) reaches the AI.
    pub fn input_modifier(
        &self,
        state: &mut ScenarioState,
        text: &str,
        world_info: &mut [WorldInfoEntry],
    ) -> HookOutput {
        let mut modified_text = String::new();

        if !state.initialized {
            state.initialized = true;
            state.do_progress = false;
            state.message = Some(self.tuning.prepare_message.clone());
            modified_text = text.to_string();
        }

        let ready = text
            .to_lowercase()
            .contains(&self.tuning.ready_command.to_lowercase());
        if !state.do_progress && ready {
            // Wipe the keys so the host doesn't add the examples to the context on its own.
            for entry in world_info.iter_mut() {
                entry.keys = self.tuning.cleaned_key.clone();
                entry.hidden = false;
            }

            state.do_progress = true;
            state.message = Some(self.tuning.working_message.clone());
            log::info!("Similar character generation started with {} entries", world_info.len());
        }

        HookOutput::pass(modified_text)
    }

    /// Context modifier. Generation stays stopped until the player is ready.
    pub fn context_modifier(
        &self,
        state: &ScenarioState,
        text: &str,
        world_info: &[WorldInfoEntry],
    ) -> HookOutput {
        if !state.do_progress {
            return HookOutput::stop(text);
        }

        let examples: String = world_info
            .iter()
            .take(self.tuning.max_characters)
            .map(|info| format!("{}\n\n", info.entry))
            .collect();

        HookOutput::pass(format!("{examples}{}", self.strip_start_prompt(text)))
    }

    // The game text without its leading start prompt line, if it has one.
    fn strip_start_prompt<'a>(&self, text: &'a str) -> &'a str {
        match text.find('\n') {
            Some(newline) if text[..=newline] == self.tuning.start_prompt => &text[newline + 1..],
            _ => text,
        }
    }
}
