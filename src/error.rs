//! Marshalling error types.
//!
//! The adapter surfaces a single failure classification to its callers:
//! "internal error during (de)serialization". Encode and decode failures are
//! not distinguished in the classification, but the original serializer
//! failure is always attached as the source for server-side diagnosis.

use thiserror::Error;

/// Boxed, type-erased error used for serializer failures.
///
/// Serializer implementations report failures through this alias so the
/// adapter can attach the original error as a cause without translating it.
/// The concrete type is recoverable at the framework boundary via
/// [`downcast`](std::error::Error::downcast_ref).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The internal-error classification reported to RPC callers when a
/// server-side conversion step fails.
///
/// This is the only error kind the marshalling layer produces. The remote
/// caller sees the generic classification; the original cause is preserved
/// for diagnostics and reachable through [`MarshalError::cause`] or the
/// standard [`std::error::Error::source`] chain.
///
/// # Example
///
/// ```
/// use wiremarshal::MarshalError;
///
/// let err = MarshalError::internal(std::io::Error::other("disk on fire"));
/// assert_eq!(err.cause().to_string(), "disk on fire");
/// ```
#[derive(Debug, Error)]
#[error("internal error during message (de)serialization")]
pub struct MarshalError {
    #[source]
    cause: BoxError,
}

impl MarshalError {
    /// Wraps a serializer failure in the internal-error classification.
    ///
    /// # Arguments
    ///
    /// * `cause` - The original failure, preserved unmodified as the source
    pub fn internal(cause: impl Into<BoxError>) -> Self {
        MarshalError {
            cause: cause.into(),
        }
    }

    /// Borrows the original failure that triggered this error.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Consumes the error and returns the original failure.
    ///
    /// Useful at the framework boundary to downcast back to the serializer's
    /// concrete error type.
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

pub type Result<T> = std::result::Result<T, MarshalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("bad byte at offset {0}")]
    struct BadByte(usize);

    #[test]
    fn test_internal_preserves_cause() {
        let err = MarshalError::internal(BadByte(7));
        assert_eq!(err.cause().to_string(), "bad byte at offset 7");
    }

    #[test]
    fn test_source_chain_exposes_cause() {
        let err = MarshalError::internal(BadByte(0));
        let source = std::error::Error::source(&err).expect("source must be attached");
        assert!(source.downcast_ref::<BadByte>().is_some());
    }

    #[test]
    fn test_into_cause_recovers_original_type() {
        let err = MarshalError::internal(BadByte(42));
        let cause = err.into_cause();
        let bad = cause.downcast::<BadByte>().expect("cause should downcast");
        assert_eq!(bad.0, 42);
    }

    #[test]
    fn test_display_is_generic() {
        // The remote caller must only ever see the generic classification,
        // not the underlying cause.
        let err = MarshalError::internal(BadByte(7));
        assert_eq!(
            err.to_string(),
            "internal error during message (de)serialization"
        );
    }
}
