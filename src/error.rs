//! Error type for the filter pipeline.
//!
//! Content-level mismatches are never errors: a list item that does not
//! carry a task marker is simply left alone. The variants here cover only
//! the HTML plumbing underneath the filter, where the decoder or the
//! serializer can genuinely fail.

use thiserror::Error;

/// Errors surfaced by the tree backend.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The HTML decoder failed while reading input or replacement content.
    #[error("parse error: {0}")]
    ParseError(String),

    /// The HTML serializer failed while reading tree content back out.
    #[error("serialization error: {0}")]
    SerializationError(String),
}
