//! Detection events and the batches that carry them to the sifter

pub mod entity;
pub mod ids;

pub use entity::{DetectionEvent, EventBatchRequest, EventBatchResponse};
pub use ids::{BeamId, BeamSetId, FpgaCount, FPGA_COUNTS_PER_SECOND};
