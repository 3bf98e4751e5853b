/// Error types for the map layer
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// The mapping library never became available
    #[error("Map library unavailable: {0}")]
    LibraryUnavailable(String),

    /// The DOM element to render into does not exist
    #[error("Map container not found: {0}")]
    ContainerNotFound(String),

    /// The provider rejected a call
    #[error("Map provider call failed: {0}")]
    Provider(String),

    /// The session was used after `dispose`
    #[error("Map session already disposed")]
    Disposed,
}

/// Type alias for Results using MapError
pub type Result<T> = std::result::Result<T, MapError>;
