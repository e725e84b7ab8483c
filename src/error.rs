use thiserror::Error;

/// Public error type for the crate.
///
/// Lookups never fail: unknown tags resolve to [`crate::UNDETERMINED`] and
/// reverse lookups return `Option`. Only file-name building and registry
/// construction can report an error.
#[derive(Debug, Error)]
pub enum LangError {
    #[error("subtitle index `{0}` is not an integer")]
    InvalidSubsIndex(String),

    #[error("language catalogue is empty")]
    EmptyCatalogue,

    #[error("failed to compile language pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type LangResult<T> = Result<T, LangError>;
