//! Ports (trait definitions) for external dependencies
//!
//! The domain defines what it needs from the remote sifter; adapter crates
//! provide it over a concrete transport.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait`, so every gateway is monomorphized into the client.

use std::future::Future;

use crate::{
    configuration::{ConfigRequest, ConfigResponse},
    error::SifterError,
    events::{EventBatchRequest, EventBatchResponse},
};

/// Port for the remote sifter service
///
/// Each method performs exactly one request/response exchange with its own
/// call context. Implementations must:
/// - Send the request contents unchanged (no validation, no reordering)
/// - Return the service's reply as-is, including rejections
/// - Convert every transport or protocol failure to `SifterError::Transport`
/// - Leave the underlying connection usable after a failed call
pub trait SifterGateway: Send + Sync {
    /// Ask the sifter to validate a configuration document
    ///
    /// # Errors
    ///
    /// Returns `SifterError::Transport` if the call cannot be completed
    fn check_configuration(
        &self,
        request: ConfigRequest,
    ) -> impl Future<Output = Result<ConfigResponse, SifterError>> + Send;

    /// Submit one batch of detection events
    ///
    /// # Errors
    ///
    /// Returns `SifterError::Transport` if the call cannot be completed
    fn submit_event_batch(
        &self,
        request: EventBatchRequest,
    ) -> impl Future<Output = Result<EventBatchResponse, SifterError>> + Send;
}
