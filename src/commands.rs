// Command processing for player input.
// Each command goes on its own line: a command symbol directly followed by the command name, then its
// arguments, e.g. "/roll 2d6". Only one command per line is picked up, even inline.
use crate::error::ScriptError;
use crate::hook::HookOutput;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    // Look for commands anywhere in a line, so they work in "do" and "say" modes too.
    // Can pick up commands by accident when the player's text happens to share the format.
    pub allow_inline: bool,
    pub command_symbols: String, // Symbols which denote the start of a command.
}

impl Default for CommandConfig {
    fn default() -> Self {
        CommandConfig {
            allow_inline: true,
            command_symbols: ":/".to_string(),
        }
    }
}

impl CommandConfig {
    pub fn pattern(&self) -> Result<Regex, ScriptError> {
        let anchor = if self.allow_inline { "" } else { "^" };
        let symbols = regex::escape(&self.command_symbols);
        Ok(Regex::new(&format!(r"(?i){anchor}[{symbols}](\w+)(.*)"))?)
    }
}

// A line that meets the command format. The command itself may or may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub name: String, // Lowercased command name.
    pub args: String,
}

// Handlers receive the trimmed arguments and may return text to replace the player's input with.
pub type CommandHandler<'a> = Box<dyn FnMut(&str) -> Option<String> + 'a>;

// Outcome of running the commands found in a passage of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandReport {
    pub executed: Vec<ParsedCommand>,
    pub replacement: Option<String>, // Last text returned by a handler.
}

impl CommandReport {
    pub fn command_executed(&self) -> bool {
        !self.executed.is_empty()
    }

    // Input modifier result: untouched text when nothing ran, otherwise stop with the replacement.
    pub fn into_hook_output(self, original: &str) -> HookOutput {
        if !self.command_executed() {
            return HookOutput::pass(original);
        }
        HookOutput::stop(self.replacement.unwrap_or_default())
    }
}

pub struct CommandRegistry<'a> {
    pattern: Regex,
    commands: HashMap<String, CommandHandler<'a>>,
    aliases: HashMap<String, String>,
}

impl<'a> CommandRegistry<'a> {
    pub fn new(config: CommandConfig) -> Result<Self, ScriptError> {
        let pattern = config.pattern()?;
        Ok(CommandRegistry {
            pattern,
            commands: HashMap::new(),
            aliases: HashMap::new(),
        })
    }

    pub fn register(
        &mut self,
        name: &str,
        handler: impl FnMut(&str) -> Option<String> + 'a,
    ) -> &mut Self {
        self.commands.insert(name.to_lowercase(), Box::new(handler));
        self
    }

    // Shorthand name for an already registered command, e.g. "exam" for "example".
    pub fn alias(&mut self, alias: &str, command: &str) -> &mut Self {
        self.aliases
            .insert(alias.to_lowercase(), command.to_lowercase());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    fn resolve(&self, name: &str) -> Option<String> {
        let name = name.to_lowercase();
        if self.commands.contains_key(&name) {
            return Some(name);
        }
        self.aliases
            .get(&name)
            .filter(|target| self.commands.contains_key(*target))
            .cloned()
    }

    /// Every line of `text` that meets the command format, whether or not the command exists.
    pub fn parse_commands(&self, text: &str) -> Vec<ParsedCommand> {
        text.split('\n')
            .filter_map(|line| self.pattern.captures(line))
            .map(|captures| ParsedCommand {
                name: captures[1].trim().to_lowercase(),
                args: captures[2].trim().to_string(),
            })
            .collect()
    }

    /// Run every known command found in the text. Unknown commands are ignored.
    pub fn process(&mut self, text: &str) -> CommandReport {
        let mut report = CommandReport::default();

        for command in self.parse_commands(text) {
            let Some(target) = self.resolve(&command.name) else {
                log::debug!("Ignoring unknown command '{}'", command.name);
                continue;
            };
            let Some(handler) = self.commands.get_mut(&target) else {
                continue;
            };

            log::info!("Running command '{}' with args '{}'", target, command.args);
            if let Some(replacement) = handler(&command.args) {
                report.replacement = Some(replacement);
            }
            report.executed.push(command);
        }

        report
    }
}
