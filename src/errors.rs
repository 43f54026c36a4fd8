use std::fmt;

/// Errors surfaced by the persistence edge of the engine. The combat
/// formulas themselves are infallible; only snapshotting a store to and from
/// disk can fail.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying file I/O failed
    Io(std::io::Error),
    /// Record data could not be serialized or deserialized
    Serialization(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "store I/O error: {}", err),
            StoreError::Serialization(err) => write!(f, "store serialization error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err)
    }
}

/// Convenience alias for store snapshot operations.
pub type StoreResult<T> = Result<T, StoreError>;
