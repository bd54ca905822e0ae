//! Error handling for Tubelink

use thiserror::Error;

/// Reasons a pasted string could not be turned into a [`VideoReference`].
///
/// [`VideoReference`]: crate::extractor::VideoReference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The input could not be parsed as an absolute URL.
    ///
    /// Deliberately carries no detail; callers only get the kind.
    #[error("invalid URL")]
    InvalidUrl,

    #[error("URL must be from youtube.com, music.youtube.com or youtu.be")]
    UnsupportedHost,

    #[error("URL must contain the watch?v= parameter")]
    MissingVideoParam,

    #[error("URL must contain the video ID after youtu.be/")]
    MissingVideoId,

    /// Only produced by `probe`: the URL is on a watch host but not a `/watch` page.
    #[error("URL is not a watch page")]
    NotWatchPage,
}

/// Link construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("at least one of the video or audio formats must be selected")]
    InvalidSelection,

    #[error("invalid service base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Display formatting errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("count must be a finite, non-negative number")]
    InvalidInput,
}

/// Main error type for Tubelink
#[derive(Debug, Error)]
pub enum TubelinkError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Formatting(#[from] DisplayError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
