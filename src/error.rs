//! Error types for store construction and serialization.

use thiserror::Error;

/// Errors that can occur when building or serializing a store.
///
/// Construction-time variants mean the store was never built; the
/// serialization variant aborts the `marshal` call without producing
/// partial output.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A reducer was registered under an empty key.
    #[error("Reducer key cannot be empty")]
    EmptyKey,

    /// Two reducers were registered under the same key.
    #[error("Duplicate reducer key '{key}'")]
    DuplicateKey { key: String },

    /// The aggregate state could not be encoded as JSON.
    #[error("Failed to serialize state: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}
