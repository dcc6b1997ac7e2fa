use std::fmt;

// === StoreError ===

/// Errors related to bookmark store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// The filter threshold is outside the 0-5 range.
    InvalidThreshold(u8),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            StoreError::InvalidThreshold(value) => {
                write!(f, "Invalid filter threshold: {}", value)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === ApiError ===

/// Errors related to bookmark service calls.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be completed (transport failure).
    Network(String),
    /// The service answered with a non-success status.
    Remote { status: u16, message: String },
    /// The response body could not be decoded.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Bookmark service network error: {}", msg),
            ApiError::Remote { status, message } => {
                write!(f, "Bookmark service error {}: {}", status, message)
            }
            ApiError::Serialization(msg) => {
                write!(f, "Bookmark service response error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

// === ControllerError ===

/// Errors surfaced by the event controller.
///
/// Every variant leaves application state exactly as it was before the
/// attempted operation; none is fatal.
#[derive(Debug)]
pub enum ControllerError {
    /// A store mutation was rejected (unknown id, bad threshold).
    Store(StoreError),
    /// A service-backed operation failed; no local mutation happened.
    Api(ApiError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Store(err) => write!(f, "Store error: {}", err),
            ControllerError::Api(err) => write!(f, "Service error: {}", err),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::Store(err) => Some(err),
            ControllerError::Api(err) => Some(err),
        }
    }
}

impl From<StoreError> for ControllerError {
    fn from(err: StoreError) -> Self {
        ControllerError::Store(err)
    }
}

impl From<ApiError> for ControllerError {
    fn from(err: ApiError) -> Self {
        ControllerError::Api(err)
    }
}
