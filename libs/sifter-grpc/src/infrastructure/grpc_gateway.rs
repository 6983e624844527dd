//! gRPC Sifter Gateway Implementation
//!
//! This module implements the `SifterGateway` port over a tonic channel.
//! It converts domain requests to wire messages and every `tonic::Status`
//! to a domain transport error.

use sifter_domain::{
    ConfigRequest, ConfigResponse, EventBatchRequest, EventBatchResponse, RpcCode, SifterError,
    SifterGateway,
};
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info, instrument, warn, Instrument};

use super::config::GrpcSifterConfig;
use crate::proto::{frb_sifter_client::FrbSifterClient, ConfigMessage, FrbEventsMessage};

/// gRPC implementation of the SifterGateway port
///
/// The channel is plaintext HTTP/2 with no credentials. It is created lazily:
/// the first call dials the endpoint, and a failed call leaves the channel
/// ready to reconnect on the next one.
///
/// ## Error Handling
///
/// Every failed call becomes `SifterError::Transport` carrying the gRPC
/// status code and message.
#[derive(Clone)]
pub struct GrpcSifterGateway {
    client: FrbSifterClient<Channel>,
    target: String,
}

impl GrpcSifterGateway {
    /// Create a gateway for the configured target
    ///
    /// Must be called from within a tokio runtime. No connection is attempted
    /// here, so an unreachable sifter does not fail construction.
    ///
    /// # Errors
    ///
    /// Returns `SifterError::InvalidEndpoint` if the target is not a valid URI
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sifter_grpc::infrastructure::{GrpcSifterConfig, GrpcSifterGateway};
    ///
    /// # async fn example() -> Result<(), sifter_domain::SifterError> {
    /// let gateway = GrpcSifterGateway::new(&GrpcSifterConfig::new("localhost:50051"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &GrpcSifterConfig) -> Result<Self, SifterError> {
        let uri = config.endpoint_uri()?;
        let mut endpoint = Endpoint::from_shared(uri.clone()).map_err(|err| {
            SifterError::invalid_endpoint(format!("'{}': {}", config.target, err))
        })?;

        if let Some(timeout) = config.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout {
            endpoint = endpoint.timeout(timeout);
        }

        info!(uri = %uri, "Opening plaintext channel to sifter");

        Ok(Self {
            client: FrbSifterClient::new(endpoint.connect_lazy()),
            target: config.target.clone(),
        })
    }

    /// The configured target address
    pub fn target(&self) -> &str {
        &self.target
    }
}

fn status_to_error(status: tonic::Status) -> SifterError {
    SifterError::transport(RpcCode::from_i32(status.code() as i32), status.message())
}

impl SifterGateway for GrpcSifterGateway {
    #[instrument(skip(self, request), fields(endpoint = %self.target, document_len = request.document().len()))]
    fn check_configuration(
        &self,
        request: ConfigRequest,
    ) -> impl std::future::Future<Output = Result<ConfigResponse, SifterError>> + Send {
        let mut client = self.client.clone();
        let message = ConfigMessage::from(request);

        async move {
            debug!("Sending CheckConfiguration");

            match client.check_configuration(tonic::Request::new(message)).await {
                Ok(response) => {
                    let reply = response.into_inner();
                    debug!(ok = reply.ok, "CheckConfiguration answered");
                    Ok(reply.into())
                }
                Err(status) => {
                    warn!(code = ?status.code(), error = %status.message(), "CheckConfiguration failed");
                    Err(status_to_error(status))
                }
            }
        }
        .in_current_span()
    }

    #[instrument(skip(self, request), fields(endpoint = %self.target, event_count = request.len()))]
    fn submit_event_batch(
        &self,
        request: EventBatchRequest,
    ) -> impl std::future::Future<Output = Result<EventBatchResponse, SifterError>> + Send {
        let mut client = self.client.clone();
        let message = FrbEventsMessage::from(request);

        async move {
            debug!(beam_set_id = message.beam_set_id, "Sending FrbEvents");

            match client.frb_events(tonic::Request::new(message)).await {
                Ok(response) => {
                    let reply = response.into_inner();
                    debug!(ok = reply.ok, reply = %reply.message, "FrbEvents answered");
                    Ok(reply.into())
                }
                Err(status) => {
                    warn!(code = ?status.code(), error = %status.message(), "FrbEvents failed");
                    Err(status_to_error(status))
                }
            }
        }
        .in_current_span()
    }
}
