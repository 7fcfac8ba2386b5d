//! Extraction error types.

/// A structurally-required part of the javadoc page was not found.
///
/// Optional parts (doc bodies, notes, parameter lists, whole member sections)
/// never produce this; they come back as empty values instead.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("missing {what} (expected `{selector}`)")]
    MissingMarker {
        what: &'static str,
        selector: &'static str,
    },
}
