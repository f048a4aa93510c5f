//! Error types for the card rendering pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a card
///
/// No error is recovered or retried anywhere in the pipeline; any failure in
/// any stage terminates the whole run and no partial artifact is written.
#[derive(Error, Debug)]
pub enum Error {
    /// A required external resource (remote font asset, local font file)
    /// could not be located or retrieved
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The layout tree references a font family absent from the resolved set
    #[error("Missing font family: {0}")]
    MissingFont(String),

    /// Two resolved fonts share the same family/weight/style identity
    #[error("Duplicate font: {0}")]
    DuplicateFont(String),

    /// Transport-level failure during a fetch (DNS, TLS, timeout, bad status)
    #[error("Network error: {0}")]
    Network(String),

    /// The vector document could not be produced or rasterized
    #[error("Rendering failed: {0}")]
    Render(String),

    /// The final artifact could not be persisted
    #[error("Failed to write output: {0}")]
    Write(String),
}
