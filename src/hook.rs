use serde::{Deserialize, Serialize};

// What every input, context and output hook hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HookOutput {
    pub text: String,
    #[serde(default)]
    pub stop: bool, // Tells the host to halt generation for this turn.
}

impl HookOutput {
    // Let the text through and carry on generating.
    pub fn pass(text: impl Into<String>) -> Self {
        HookOutput {
            text: text.into(),
            stop: false,
        }
    }

    pub fn stop(text: impl Into<String>) -> Self {
        HookOutput {
            text: text.into(),
            stop: true,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
