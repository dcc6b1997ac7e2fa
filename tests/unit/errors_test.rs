use linkmark::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_not_found_display() {
    let err = StoreError::NotFound("bm-123".to_string());
    assert_eq!(err.to_string(), "Bookmark not found: bm-123");
}

#[test]
fn store_error_invalid_threshold_display() {
    let err = StoreError::InvalidThreshold(9);
    assert_eq!(err.to_string(), "Invalid filter threshold: 9");
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === ApiError Tests ===

#[test]
fn api_error_display_variants() {
    assert_eq!(
        ApiError::Network("connection refused".to_string()).to_string(),
        "Bookmark service network error: connection refused"
    );
    assert_eq!(
        ApiError::Remote {
            status: 404,
            message: "not found".to_string()
        }
        .to_string(),
        "Bookmark service error 404: not found"
    );
    assert_eq!(
        ApiError::Serialization("missing field id".to_string()).to_string(),
        "Bookmark service response error: missing field id"
    );
}

// === ControllerError Tests ===

#[test]
fn controller_error_wraps_store_error() {
    let err = ControllerError::from(StoreError::NotFound("bm-1".to_string()));
    assert_eq!(err.to_string(), "Store error: Bookmark not found: bm-1");
    let err: Box<dyn std::error::Error> = Box::new(err);
    assert!(err.source().is_some());
}

#[test]
fn controller_error_wraps_api_error() {
    let err = ControllerError::from(ApiError::Network("timed out".to_string()));
    assert_eq!(
        err.to_string(),
        "Service error: Bookmark service network error: timed out"
    );
}
