// Paged info manual, for scenarios with more to explain than fits in a prompt.
// Every input shows the next page; the context modifier stops the AI from generating anything.
use crate::game_state::ScenarioState;
use crate::hook::HookOutput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualTuning {
    pub more_to_go_hint: String, // Shown while there are pages left. Any input turns the page.
    pub finished_hint: String,
}

impl Default for ManualTuning {
    fn default() -> Self {
        ManualTuning {
            more_to_go_hint: r#"Enter "next" to continue..."#.to_string(),
            finished_hint: "End of manual".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfoManual {
    pub entries: Vec<String>,
    #[serde(default)]
    pub tuning: ManualTuning,
}

impl InfoManual {
    pub fn new(entries: Vec<String>, tuning: ManualTuning) -> Self {
        InfoManual { entries, tuning }
    }

    // A blank entry ends the manual just like a missing one.
    fn page(&self, page_num: usize) -> Option<&str> {
        self.entries
            .get(page_num)
            .map(String::as_str)
            .filter(|page| !page.is_empty())
    }

    pub fn input_modifier(&self, state: &mut ScenarioState, text: &str) -> HookOutput {
        if !state.initialized {
            state.initialized = true;
            state.page_num = 0;
            state.message = Some(self.tuning.more_to_go_hint.clone());
        }

        let mut modified_text = text.to_string();
        if let Some(page) = self.page(state.page_num) {
            modified_text = format!("{page}\n");
            state.page_num += 1;
        }

        if self.page(state.page_num).is_none() {
            state.message = Some(self.tuning.finished_hint.clone());
        }

        HookOutput::pass(modified_text)
    }

    pub fn context_modifier(&self, text: &str) -> HookOutput {
        HookOutput::stop(text)
    }
}
