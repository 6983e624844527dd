//! Domain entities for detection-event submission
//!
//! A [`DetectionEvent`] is one candidate burst seen by the upstream search.
//! Events travel to the sifter in an [`EventBatchRequest`] covering one
//! processing chunk of one beam set, and the sifter answers with a single
//! [`EventBatchResponse`].

use serde::{Deserialize, Serialize};

use crate::events::ids::{BeamId, BeamSetId, FpgaCount};

/// One candidate astrophysical burst detection
///
/// Events are immutable: every field is set at construction and only exposed
/// through accessors.
///
/// # Example
///
/// ```rust
/// use sifter_domain::events::{BeamId, DetectionEvent, FpgaCount};
///
/// let event = DetectionEvent::new(BeamId::new(42), FpgaCount::new(0), 100.0, 1.0, 9.5, 0.1);
/// assert_eq!(event.beam_id().value(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionEvent {
    beam_id: BeamId,

    /// FPGA sample count at which the burst was detected
    fpga_timestamp: FpgaCount,

    /// Dispersion measure, pc cm^-3
    dm: f32,

    dm_error: f32,

    /// Signal-to-noise ratio
    snr: f32,

    /// Probability that the event is radio-frequency interference
    rfi_probability: f32,
}

impl DetectionEvent {
    /// Create a new event; values are taken as-is
    pub fn new(
        beam_id: BeamId,
        fpga_timestamp: FpgaCount,
        dm: f32,
        dm_error: f32,
        snr: f32,
        rfi_probability: f32,
    ) -> Self {
        Self {
            beam_id,
            fpga_timestamp,
            dm,
            dm_error,
            snr,
            rfi_probability,
        }
    }

    pub fn beam_id(&self) -> BeamId {
        self.beam_id
    }

    pub fn fpga_timestamp(&self) -> FpgaCount {
        self.fpga_timestamp
    }

    pub fn dm(&self) -> f32 {
        self.dm
    }

    pub fn dm_error(&self) -> f32 {
        self.dm_error
    }

    pub fn snr(&self) -> f32 {
        self.snr
    }

    pub fn rfi_probability(&self) -> f32 {
        self.rfi_probability
    }
}

/// All events observed in one processing chunk for one beam set
///
/// Event order is the caller's order and is kept as-is all the way to the
/// wire. Empty batches are valid; size limits are the service's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBatchRequest {
    events: Vec<DetectionEvent>,

    /// Marks the batch as containing synthetic (injected) events
    has_injections: bool,

    beam_set_id: BeamSetId,

    /// Duration of the processing chunk in FPGA samples
    chunk_fpga_count: FpgaCount,
}

impl EventBatchRequest {
    pub fn new(
        events: Vec<DetectionEvent>,
        has_injections: bool,
        beam_set_id: BeamSetId,
        chunk_fpga_count: FpgaCount,
    ) -> Self {
        Self {
            events,
            has_injections,
            beam_set_id,
            chunk_fpga_count,
        }
    }

    pub fn events(&self) -> &[DetectionEvent] {
        &self.events
    }

    pub fn has_injections(&self) -> bool {
        self.has_injections
    }

    pub fn beam_set_id(&self) -> BeamSetId {
        self.beam_set_id
    }

    pub fn chunk_fpga_count(&self) -> FpgaCount {
        self.chunk_fpga_count
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the batch, keeping only its events
    pub fn into_events(self) -> Vec<DetectionEvent> {
        self.events
    }
}

/// The sifter's answer to an event batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBatchResponse {
    accepted: bool,

    /// Human-readable outcome or rejection reason
    message: String,
}

impl EventBatchResponse {
    pub fn new(accepted: bool, message: impl Into<String>) -> Self {
        Self {
            accepted,
            message: message.into(),
        }
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
