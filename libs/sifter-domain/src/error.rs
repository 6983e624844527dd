//! Domain errors for sifter calls
//!
//! Gateways report every failed call as a [`SifterError`]. The status codes
//! mirror the gRPC code space so that diagnostics keep the numeric value the
//! service reported, without this crate depending on a transport library.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status code attached to a failed remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum RpcCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl RpcCode {
    /// Map a raw status value to a code; out-of-range values become `Unknown`
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Ok,
            1 => Self::Cancelled,
            2 => Self::Unknown,
            3 => Self::InvalidArgument,
            4 => Self::DeadlineExceeded,
            5 => Self::NotFound,
            6 => Self::AlreadyExists,
            7 => Self::PermissionDenied,
            8 => Self::ResourceExhausted,
            9 => Self::FailedPrecondition,
            10 => Self::Aborted,
            11 => Self::OutOfRange,
            12 => Self::Unimplemented,
            13 => Self::Internal,
            14 => Self::Unavailable,
            15 => Self::DataLoss,
            16 => Self::Unauthenticated,
            _ => Self::Unknown,
        }
    }

    /// The numeric value as it appears on the wire
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for RpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "ok",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
            Self::InvalidArgument => "invalid argument",
            Self::DeadlineExceeded => "deadline exceeded",
            Self::NotFound => "not found",
            Self::AlreadyExists => "already exists",
            Self::PermissionDenied => "permission denied",
            Self::ResourceExhausted => "resource exhausted",
            Self::FailedPrecondition => "failed precondition",
            Self::Aborted => "aborted",
            Self::OutOfRange => "out of range",
            Self::Unimplemented => "unimplemented",
            Self::Internal => "internal",
            Self::Unavailable => "unavailable",
            Self::DataLoss => "data loss",
            Self::Unauthenticated => "unauthenticated",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur while talking to the sifter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SifterError {
    /// The call could not be completed (unreachable, deadline, bad reply, RPC status)
    #[error("{}: {message}", .code.as_i32())]
    Transport { code: RpcCode, message: String },

    /// The target address cannot be used as an endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SifterError {
    /// Create a transport error with a code and message
    pub fn transport(code: RpcCode, message: impl Into<String>) -> Self {
        Self::Transport {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid endpoint error with a message
    pub fn invalid_endpoint(msg: impl Into<String>) -> Self {
        Self::InvalidEndpoint(msg.into())
    }

    /// Create a config error with a message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Status code for diagnostics
    ///
    /// Construction-time errors have no wire status and report `InvalidArgument`.
    pub fn code(&self) -> RpcCode {
        match self {
            Self::Transport { code, .. } => *code,
            Self::InvalidEndpoint(_) | Self::ConfigError(_) => RpcCode::InvalidArgument,
        }
    }

    /// Human-readable detail without the code prefix
    pub fn detail(&self) -> String {
        match self {
            Self::Transport { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for sifter operations
pub type Result<T> = std::result::Result<T, SifterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_code_from_i32() {
        assert_eq!(RpcCode::from_i32(0), RpcCode::Ok);
        assert_eq!(RpcCode::from_i32(4), RpcCode::DeadlineExceeded);
        assert_eq!(RpcCode::from_i32(14), RpcCode::Unavailable);
        assert_eq!(RpcCode::from_i32(16), RpcCode::Unauthenticated);
    }

    #[test]
    fn test_rpc_code_out_of_range_is_unknown() {
        assert_eq!(RpcCode::from_i32(-1), RpcCode::Unknown);
        assert_eq!(RpcCode::from_i32(17), RpcCode::Unknown);
    }

    #[test]
    fn test_rpc_code_numeric_value() {
        for value in 0..=16 {
            assert_eq!(RpcCode::from_i32(value).as_i32(), value);
        }
    }

    #[test]
    fn test_transport_error_display() {
        let err = SifterError::transport(RpcCode::Unavailable, "tcp connect error");
        assert_eq!(err.to_string(), "14: tcp connect error");
        assert_eq!(err.code(), RpcCode::Unavailable);
        assert_eq!(err.detail(), "tcp connect error");
    }

    #[test]
    fn test_invalid_endpoint_error() {
        let err = SifterError::invalid_endpoint("not a uri");
        assert!(matches!(err, SifterError::InvalidEndpoint(_)));
        assert_eq!(err.code(), RpcCode::InvalidArgument);
        assert_eq!(err.detail(), "Invalid endpoint: not a uri");
    }

    #[test]
    fn test_config_error() {
        let err = SifterError::config_error("SIFTER_REQUEST_TIMEOUT_MS is not a number");
        assert!(err.to_string().contains("Configuration error"));
    }
}
