use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store unreachable, write not committed, or constraint violated.
    #[error("storage error: {0}")]
    Storage(String),
    /// Stored payload does not parse as the requested type. Distinct from
    /// absence, which `load` reports as `Ok(None)`.
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// The value handed to `save` cannot be JSON-encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}
