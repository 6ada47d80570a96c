use thiserror::Error;

// Enum for handling the crate-level errors surfaced by the ambient layer (files, logger, regex).
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError), // Errors raised by the frequency balanced selector.

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to data serialization.

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error), // Input/output errors.

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error), // A pattern built from user supplied text failed to compile.

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError), // The log facade refused our logger.

    #[error("Logger already set")]
    LoggerAlreadySet,

    #[error("Save not found: {0}")]
    SaveNotFound(String), // No json file with that name in the save directory.

    #[error("Invalid save name: {0}")]
    InvalidSaveName(String), // Save names must be a single file name inside the save directory.

    #[error("Scenario state has no save name")]
    MissingSaveName,
}

// Errors raised by the selector. Exhaustion is not one of them, it is a regular outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String), // Caller bug, e.g. selecting from an empty pool.
}
