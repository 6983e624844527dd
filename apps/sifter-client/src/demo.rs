//! Demonstration exchange with the sifter

use sifter_domain::{
    BatchOutcome, BeamId, BeamSetId, ConfigOutcome, DetectionEvent, EventBatchRequest, FpgaCount,
    SifterClient, SifterGateway,
};
use tracing::info;

/// Deliberately not YAML: validation happens on the sifter, never here
pub const DEMO_CONFIG: &str = "ceci n'est pas yaml";

/// Results of one demonstration run
#[derive(Debug)]
pub struct DemoReport {
    pub config: ConfigOutcome,
    pub batch: BatchOutcome,
}

/// Two real-looking detections for beam set 0
pub fn demo_batch() -> EventBatchRequest {
    let events = vec![
        DetectionEvent::new(BeamId::new(42), FpgaCount::new(0), 100.0, 1.0, 9.5, 0.1),
        DetectionEvent::new(BeamId::new(44), FpgaCount::new(0), 100.0, 1.0, 8.0, 0.1),
    ];

    EventBatchRequest::new(events, false, BeamSetId::new(0), FpgaCount::new(0))
}

/// Run both calls once, in order
pub async fn run<G: SifterGateway>(client: &SifterClient<G>) -> DemoReport {
    info!("Checking demo configuration");
    let config = client.check_configuration(DEMO_CONFIG).await;

    let batch = demo_batch();
    info!(event_count = batch.len(), "Submitting demo event batch");
    let batch = client.submit(batch).await;

    DemoReport { config, batch }
}
