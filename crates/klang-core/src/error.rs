//! Parameter validation errors.
//!
//! Synthesis primitives validate their parameters once, at construction or
//! reconfiguration. Runtime processing never fails: a constructed filter or
//! generator produces samples unconditionally.

use thiserror::Error;

/// Errors raised when a primitive is configured with parameters outside its
/// valid domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A parameter value makes the requested configuration meaningless,
    /// e.g. a non-positive Q or decay time.
    #[error("invalid parameter `{param}` for {context}: {reason}")]
    InvalidParameter {
        /// The primitive being configured ("low-pass filter", "decaying sine", ...).
        context: &'static str,
        /// Name of the rejected parameter.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Convenience alias for fallible constructors.
pub type Result<T> = core::result::Result<T, ParamError>;
