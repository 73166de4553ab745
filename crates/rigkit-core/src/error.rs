//! Error types for rigkit.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`RigError`] as the error type. Backend hooks, transport
//! implementations, and the generic dispatch layer all share this single
//! error code space, so a failure propagates from the wire to the caller
//! without translation.
//!
//! Each error kind also has a stable integer code (see [`RigError::code`])
//! for callers that exchange results with non-Rust software. Code `0` is
//! reserved for success; every error kind maps to a distinct negative value.

/// The error type for all rigkit operations.
///
/// Variants cover the failure modes seen when talking to transceivers:
/// transport failures, protocol decode errors, timeouts, operations a
/// given model does not implement, and registry misses.
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    /// An invalid parameter was passed to a rig operation.
    #[error("invalid parameter")]
    InvalidParameter,

    /// The handle or descriptor configuration is invalid for the operation.
    #[error("invalid configuration")]
    InvalidConfiguration,

    /// A required allocation or resource acquisition failed.
    #[error("memory shortage")]
    MemoryShortage,

    /// The requested operation is not implemented by this rig model.
    #[error("operation not implemented")]
    NotImplemented,

    /// Timed out waiting for a response from the rig.
    ///
    /// This typically indicates the rig is powered off, the baud rate is
    /// wrong, or the wrong port was configured.
    #[error("communication timed out")]
    Timeout,

    /// An underlying I/O error from the transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal rigkit error; a bug if it ever surfaces.
    #[error("internal error")]
    Internal,

    /// A protocol-level error (malformed frame, unexpected response).
    #[error("protocol error")]
    Protocol,

    /// The rig understood the command but refused to execute it.
    #[error("command rejected by the rig")]
    Rejected,

    /// The command completed but the result was truncated.
    #[error("argument truncated, result not guaranteed")]
    Truncated,

    /// No registered backend matches the requested model identifier.
    #[error("rig model not found")]
    ModelNotFound,
}

/// Code returned for a successful operation.
pub const RIG_OK: i32 = 0;

/// Fixed human-readable message per result code, indexed by `-code`.
const ERROR_MESSAGES: [&str; 12] = [
    "Command completed successfully",
    "Invalid parameter",
    "Invalid configuration",
    "Memory shortage",
    "Feature not implemented",
    "Communication timed out",
    "IO error",
    "Internal rigkit error",
    "Protocol error",
    "Command rejected by the rig",
    "Command performed, but arg truncated, result not guaranteed",
    "Rig model not found",
];

impl RigError {
    /// The stable negative integer code for this error kind.
    ///
    /// Success is `0` ([`RIG_OK`]); failures are distinct negative values,
    /// so `code < 0` is always "failed".
    pub fn code(&self) -> i32 {
        match self {
            RigError::InvalidParameter => -1,
            RigError::InvalidConfiguration => -2,
            RigError::MemoryShortage => -3,
            RigError::NotImplemented => -4,
            RigError::Timeout => -5,
            RigError::Io(_) => -6,
            RigError::Internal => -7,
            RigError::Protocol => -8,
            RigError::Rejected => -9,
            RigError::Truncated => -10,
            RigError::ModelNotFound => -11,
        }
    }
}

/// Look up the fixed human-readable message for a result code.
///
/// Accepts [`RIG_OK`] and any code produced by [`RigError::code`]. Returns
/// `None` for out-of-range codes rather than reading past the table.
///
/// # Example
///
/// ```
/// use rigkit_core::error::{error_message, RigError};
///
/// assert_eq!(error_message(0), Some("Command completed successfully"));
/// assert_eq!(error_message(RigError::Timeout.code()),
///            Some("Communication timed out"));
/// assert_eq!(error_message(-999), None);
/// ```
pub fn error_message(code: i32) -> Option<&'static str> {
    if code > 0 {
        return None;
    }
    // checked_neg: i32::MIN has no negation and is out of range anyway.
    let index = code.checked_neg()? as usize;
    ERROR_MESSAGES.get(index).copied()
}

/// A convenience `Result` alias using [`RigError`] as the error type.
pub type Result<T> = std::result::Result<T, RigError>;
