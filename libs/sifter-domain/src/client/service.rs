//! Sifter client - call orchestration
//!
//! Wraps a [`SifterGateway`] and turns each exchange into an [`Outcome`].
//! Failed calls are logged with their status code and message and never
//! propagate to the caller as errors.

use tracing::{error, info, instrument, warn};

use super::outcome::{BatchOutcome, ConfigOutcome, Outcome};
use crate::{
    configuration::ConfigRequest,
    error::SifterError,
    events::{BeamSetId, DetectionEvent, EventBatchRequest, FpgaCount},
    ports::SifterGateway,
};

/// Client for the remote sifter service
///
/// The client holds the gateway (and through it the connection) for its whole
/// lifetime and keeps no other state between calls. It never retries: every
/// failure is final for the call that saw it.
///
/// ## Static Dispatch
///
/// The client is generic over any `SifterGateway` implementation.
pub struct SifterClient<G> {
    gateway: G,
}

impl<G> SifterClient<G>
where
    G: SifterGateway,
{
    /// Create a new client over the given gateway
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Get the underlying gateway
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Submit a configuration document for validation
    ///
    /// The document is sent verbatim; the client does not check that it is
    /// YAML or anything else.
    ///
    /// # Returns
    ///
    /// - `Outcome::Accepted(())` / `Outcome::Rejected(())` per the sifter's verdict
    /// - `Outcome::TransportError` if the call failed (also logged at error level)
    #[instrument(skip(self, document))]
    pub async fn check_configuration(&self, document: impl Into<String>) -> ConfigOutcome {
        let request = ConfigRequest::new(document);
        let document_len = request.document().len();

        match self.gateway.check_configuration(request).await {
            Ok(response) => {
                if response.accepted() {
                    info!(document_len, "Sifter accepted configuration");
                } else {
                    warn!(document_len, "Sifter rejected configuration");
                }
                Outcome::from_verdict(response.accepted(), ())
            }
            Err(err) => {
                log_failure("CheckConfiguration", &err);
                err.into()
            }
        }
    }

    /// Submit the events of one processing chunk for one beam set
    ///
    /// # Arguments
    ///
    /// * `events` - Detections in caller order; may be empty
    /// * `has_injections` - Whether the batch contains synthetic events
    /// * `beam_set_id` - Beam set the events were observed in
    /// * `chunk_fpga_count` - Chunk duration in FPGA samples
    pub async fn submit_event_batch(
        &self,
        events: Vec<DetectionEvent>,
        has_injections: bool,
        beam_set_id: BeamSetId,
        chunk_fpga_count: FpgaCount,
    ) -> BatchOutcome {
        self.submit(EventBatchRequest::new(
            events,
            has_injections,
            beam_set_id,
            chunk_fpga_count,
        ))
        .await
    }

    /// Submit an already assembled batch
    ///
    /// # Returns
    ///
    /// - `Outcome::Accepted(message)` / `Outcome::Rejected(message)` per the sifter's reply
    /// - `Outcome::TransportError` if the call failed (also logged at error level)
    #[instrument(skip(self, batch), fields(
        event_count = batch.len(),
        beam_set_id = %batch.beam_set_id(),
        has_injections = batch.has_injections()
    ))]
    pub async fn submit(&self, batch: EventBatchRequest) -> BatchOutcome {
        match self.gateway.submit_event_batch(batch).await {
            Ok(response) => {
                let accepted = response.accepted();
                if accepted {
                    info!(reply = %response.message(), "Sifter accepted event batch");
                } else {
                    warn!(reply = %response.message(), "Sifter rejected event batch");
                }
                Outcome::from_verdict(accepted, response.into_message())
            }
            Err(err) => {
                log_failure("FrbEvents", &err);
                err.into()
            }
        }
    }
}

fn log_failure(call: &'static str, err: &SifterError) {
    error!(
        call,
        code = err.code().as_i32(),
        detail = %err.detail(),
        "Sifter call failed: {}",
        err
    );
}
