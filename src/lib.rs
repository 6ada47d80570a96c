pub mod commands;
pub mod context;
pub mod error;
pub mod fields;
pub mod game_state;
pub mod hook;
pub mod logging;
pub mod manual;
pub mod prompt_inputs;
pub mod pronoun;
pub mod records;
pub mod save;
pub mod selector;
pub mod settings;
pub mod similar;
pub mod utils;
pub mod world_info;

// Re-export commonly used items for easier access
pub use commands::{CommandConfig, CommandRegistry, CommandReport, ParsedCommand};
pub use context::{ContextBuilder, ContextTuning};
pub use error::{ScriptError, SelectionError};
pub use game_state::ScenarioState;
pub use hook::HookOutput;
pub use manual::{InfoManual, ManualTuning};
pub use prompt_inputs::{CustomInput, InputPattern, PromptInputExtractor};
pub use pronoun::{Gender, PronounForm};
pub use records::SelectionRecords;
pub use save::SaveManager;
pub use selector::{Ledger, OptionPool, Selection, Selector, reconcile, select};
pub use settings::Settings;
pub use similar::{GeneratorTuning, SimilarCharacterGenerator};
pub use world_info::WorldInfoEntry;
