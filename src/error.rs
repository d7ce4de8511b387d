use std::path::PathBuf;

// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT: i32 = 1;
pub const EXIT_OUTPUT: i32 = 2;
pub const EXIT_CONFIG: i32 = 4;

/// Why a scoring run stopped. Bad cell values never end up here: utilities
/// absorb them into neutral defaults.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("No path given, exiting.")]
    NoInputPath,

    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Error reading CSV: {0:#}")]
    Input(anyhow::Error),

    #[error("Error writing output CSV: {0:#}")]
    Output(anyhow::Error),

    #[error("Config error: {0:#}")]
    Config(anyhow::Error),

    #[error("Invalid weights:\n  - {}", .0.join("\n  - "))]
    Weights(Vec<String>),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::NoInputPath | RunError::InputNotFound(_) | RunError::Input(_) => EXIT_INPUT,
            RunError::Output(_) => EXIT_OUTPUT,
            RunError::Config(_) | RunError::Weights(_) => EXIT_CONFIG,
        }
    }
}
