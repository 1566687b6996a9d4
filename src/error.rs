//! Error types for pipeline runs.
//!
//! The pipeline is all-or-nothing: any stage failure aborts the whole run
//! and the caller receives no output collection. There are no recoverable
//! or per-record error paths.

use thiserror::Error;

/// Boxed error object produced by a collaborator's backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised by an external collaborator while transforming text.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The backend produced no text for an input record. Loosely typed
    /// backends can hand back a null where text was expected; typed
    /// adapters report that case with this variant.
    #[error("collaborator produced no text")]
    MissingText,

    /// Any other backend failure.
    #[error(transparent)]
    Backend(#[from] BoxError),
}

impl CollaboratorError {
    /// Wrap an arbitrary error message as a backend failure.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into().into())
    }
}

/// Fatal failure of a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A record's text stopped being usable text after a stage ran.
    #[error("record text lost in stage `{stage}`")]
    MalformedRecord { stage: &'static str },

    /// An external collaborator failed. Nothing is caught or retried.
    #[error("collaborator failed in stage `{stage}`: {source}")]
    Collaborator {
        stage: &'static str,
        #[source]
        source: BoxError,
    },
}

impl PipelineError {
    pub(crate) fn from_collaborator(stage: &'static str, err: CollaboratorError) -> Self {
        match err {
            CollaboratorError::MissingText => Self::MalformedRecord { stage },
            CollaboratorError::Backend(source) => Self::Collaborator { stage, source },
        }
    }

    /// Name of the stage in which the run failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::MalformedRecord { stage } => stage,
            Self::Collaborator { stage, .. } => stage,
        }
    }
}
