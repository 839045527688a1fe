use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] folio_core::EngineError),

    #[error(transparent)]
    Source(#[from] folio_data::SourceError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Engine(_) | Self::Command(_) => 2,
            Self::Source(_) => 6,
            Self::Serialization(_) => 10,
        }
    }
}
