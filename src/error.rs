//! Internal error type for contained extraction failures.
//!
//! The public parsing contract is total: callers always get a
//! [`crate::BookRecord`] back. `TierError` exists only inside the extractor,
//! where it is the error arm of a per-tier result. "Zero matches" is expected
//! control flow and is NOT represented here; a `TierError` means a tier's
//! matching logic itself blew up and was contained at the tier boundary.

/// A contained failure inside one extraction tier.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TierError {
    /// The tier panicked; the payload message is preserved for logging.
    #[error("extraction tier panicked: {0}")]
    Panicked(String),
}
