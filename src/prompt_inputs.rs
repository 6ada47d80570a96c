// Captures what the player typed into a prompt's ${...} custom inputs and writes it into World Info.
// Each pattern names the literal text right before and right after an input in the prompt or pinned
// text; any World Info keys or entries mentioning the pattern's id get the player's answer instead.
use crate::error::ScriptError;
use crate::game_state::ScenarioState;
use crate::hook::HookOutput;
use crate::utils::skip_chars;
use crate::world_info::WorldInfoEntry;
use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPattern {
    pub start: String, // Text leading up to the custom input.
    pub end: String,   // Text right after it. Start + end must be unique in the prompt.
    pub id: String,    // Placeholder used in World Info, e.g. "#player_name".
}

impl InputPattern {
    pub fn new(start: impl Into<String>, end: impl Into<String>, id: impl Into<String>) -> Self {
        InputPattern {
            start: start.into(),
            end: end.into(),
            id: id.into(),
        }
    }
}

// A captured input, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInput {
    pub id: String,
    pub text: String,
}

/// The first, shortest match of every pattern in `text`. Patterns that don't match are skipped.
pub fn get_custom_inputs(
    text: &str,
    patterns: &[InputPattern],
) -> Result<Vec<CustomInput>, ScriptError> {
    let mut inputs = Vec::new();

    for pattern in patterns {
        let matcher = Regex::new(&format!(
            "{}(.*?){}",
            regex::escape(&pattern.start),
            regex::escape(&pattern.end)
        ))?;

        if let Some(captures) = matcher.captures(text) {
            inputs.push(CustomInput {
                id: pattern.id.clone(),
                text: captures[1].trim().to_string(),
            });
        }
    }

    Ok(inputs)
}

/// Replace every occurrence of each input's id, ignoring case, with the input's text.
pub fn replace_ids(text: &str, inputs: &[CustomInput]) -> Result<String, ScriptError> {
    let mut new_text = text.to_string();

    for input in inputs {
        let id = RegexBuilder::new(&regex::escape(&input.id))
            .case_insensitive(true)
            .build()?;
        new_text = id
            .replace_all(&new_text, NoExpand(&input.text))
            .into_owned();
    }

    Ok(new_text)
}

// Rewrite the keys and text of every entry. Hidden entries stay hidden.
pub fn apply_inputs_to_world_info(
    entries: &mut [WorldInfoEntry],
    inputs: &[CustomInput],
) -> Result<(), ScriptError> {
    for entry in entries.iter_mut() {
        entry.keys = replace_ids(&entry.keys, inputs)?;
        entry.entry = replace_ids(&entry.entry, inputs)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptInputExtractor {
    pub patterns: Vec<InputPattern>,
}

impl PromptInputExtractor {
    pub fn new(patterns: Vec<InputPattern>) -> Self {
        PromptInputExtractor { patterns }
    }

    /// Input modifier. Only does its work on the adventure's first input; the text always passes.
    ///
    /// Later edits to the prompt or pinned text are not carried over into World Info.
    pub fn input_modifier(
        &self,
        state: &mut ScenarioState,
        text: &str,
        memory: &str,
        memory_length: usize,
        world_info: &mut [WorldInfoEntry],
    ) -> Result<HookOutput, ScriptError> {
        if !state.initialized {
            state.initialized = true;

            let game_info = if memory_length > 0 {
                skip_chars(text, memory_length)
            } else {
                text
            };

            let from_prompt = get_custom_inputs(game_info, &self.patterns)?;
            let from_pinned = get_custom_inputs(memory, &self.patterns)?;
            log::info!(
                "Captured {} custom inputs from the prompt and {} from pinned info",
                from_prompt.len(),
                from_pinned.len()
            );

            apply_inputs_to_world_info(world_info, &from_prompt)?;
            apply_inputs_to_world_info(world_info, &from_pinned)?;
        }

        Ok(HookOutput::pass(text))
    }
}
