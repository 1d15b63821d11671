use crate::error::ManifestError;

/// Result alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;
