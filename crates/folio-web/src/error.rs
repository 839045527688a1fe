use thiserror::Error;

use folio_core::EngineError;
use folio_data::SourceError;

/// Failures surfaced while serving a request.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("{0}")]
    Form(String),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WebError {
    /// Message safe to show above the re-rendered form. Internal failures
    /// collapse to a generic line rather than leaking details.
    pub fn user_message(&self) -> String {
        match self {
            Self::Engine(error) => error.to_string(),
            Self::Source(error) => error.message().to_owned(),
            Self::Form(message) => message.clone(),
            Self::Join(_) | Self::Io(_) => String::from("internal error, please retry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_surface_verbatim() {
        let error = WebError::from(EngineError::EmptyAllocations);
        assert_eq!(
            error.user_message(),
            "allocations must contain at least one position"
        );
    }

    #[test]
    fn source_errors_drop_the_code_suffix() {
        let error = WebError::from(SourceError::no_data("no rows"));
        assert_eq!(error.user_message(), "no rows");
    }
}
