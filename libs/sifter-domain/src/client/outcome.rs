//! Outcome of a single sifter call
//!
//! Separates "the sifter said no" from "the call never completed", which a
//! plain bool or string cannot express.

use serde::{Deserialize, Serialize};

use crate::error::{RpcCode, SifterError};

/// Result of one remote call, as seen by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome<T = ()> {
    /// The sifter validated the input and accepted it
    Accepted(T),

    /// The sifter validated the input and declined it
    Rejected(T),

    /// The call could not be completed
    TransportError { code: RpcCode, message: String },
}

/// Outcome of a configuration check
pub type ConfigOutcome = Outcome<()>;

/// Outcome of an event batch submission, carrying the sifter's message
pub type BatchOutcome = Outcome<String>;

impl<T> Outcome<T> {
    /// Build an accepted or rejected outcome from the service's flag
    pub fn from_verdict(accepted: bool, payload: T) -> Self {
        if accepted {
            Self::Accepted(payload)
        } else {
            Self::Rejected(payload)
        }
    }

    /// `true` only when the sifter accepted the input
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::TransportError { .. })
    }

    /// The payload of an accepted or rejected call
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Accepted(payload) | Self::Rejected(payload) => Some(payload),
            Self::TransportError { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Accepted(payload) | Self::Rejected(payload) => Some(payload),
            Self::TransportError { .. } => None,
        }
    }

    /// Code and message of a failed call
    pub fn transport_failure(&self) -> Option<(RpcCode, &str)> {
        match self {
            Self::TransportError { code, message } => Some((*code, message.as_str())),
            _ => None,
        }
    }
}

impl Outcome<String> {
    /// The sifter's message, or `""` if the call failed
    pub fn message(&self) -> &str {
        self.payload().map(String::as_str).unwrap_or_default()
    }
}

impl<T> From<SifterError> for Outcome<T> {
    fn from(err: SifterError) -> Self {
        Self::TransportError {
            code: err.code(),
            message: err.detail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verdict() {
        assert!(ConfigOutcome::from_verdict(true, ()).is_accepted());
        assert!(ConfigOutcome::from_verdict(false, ()).is_rejected());
    }

    #[test]
    fn test_rejected_keeps_message() {
        let outcome = BatchOutcome::from_verdict(false, "no events in batch".to_string());

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.message(), "no events in batch");
        assert!(outcome.transport_failure().is_none());
    }

    #[test]
    fn test_transport_error_has_empty_message() {
        let outcome: BatchOutcome =
            SifterError::transport(RpcCode::DeadlineExceeded, "deadline has elapsed").into();

        assert!(outcome.is_transport_error());
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.message(), "");
        assert_eq!(
            outcome.transport_failure(),
            Some((RpcCode::DeadlineExceeded, "deadline has elapsed"))
        );
        assert!(outcome.into_payload().is_none());
    }
}
