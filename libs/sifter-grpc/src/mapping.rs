//! Conversions between domain entities and wire messages
//!
//! Every mapping is total and field-for-field; nothing is validated,
//! rounded or reordered on the way.

use sifter_domain::{
    BeamId, BeamSetId, ConfigRequest, ConfigResponse, DetectionEvent, EventBatchRequest,
    EventBatchResponse, FpgaCount,
};

use crate::proto::{ConfigMessage, ConfigReply, FrbEvent, FrbEventsMessage, FrbEventsReply};

impl From<ConfigRequest> for ConfigMessage {
    fn from(request: ConfigRequest) -> Self {
        Self {
            yaml: request.into_document(),
        }
    }
}

impl From<ConfigMessage> for ConfigRequest {
    fn from(message: ConfigMessage) -> Self {
        ConfigRequest::new(message.yaml)
    }
}

impl From<ConfigReply> for ConfigResponse {
    fn from(reply: ConfigReply) -> Self {
        ConfigResponse::new(reply.ok)
    }
}

impl From<&DetectionEvent> for FrbEvent {
    fn from(event: &DetectionEvent) -> Self {
        Self {
            beam_id: event.beam_id().value(),
            fpga_timestamp: event.fpga_timestamp().value(),
            dm: event.dm(),
            dm_error: event.dm_error(),
            snr: event.snr(),
            rfi_prob: event.rfi_probability(),
        }
    }
}

impl From<FrbEvent> for DetectionEvent {
    fn from(event: FrbEvent) -> Self {
        DetectionEvent::new(
            BeamId::new(event.beam_id),
            FpgaCount::new(event.fpga_timestamp),
            event.dm,
            event.dm_error,
            event.snr,
            event.rfi_prob,
        )
    }
}

impl From<EventBatchRequest> for FrbEventsMessage {
    fn from(batch: EventBatchRequest) -> Self {
        Self {
            has_injections: batch.has_injections(),
            beam_set_id: batch.beam_set_id().value(),
            chunk_fpga_count: batch.chunk_fpga_count().value(),
            events: batch.events().iter().map(FrbEvent::from).collect(),
        }
    }
}

impl From<FrbEventsMessage> for EventBatchRequest {
    fn from(message: FrbEventsMessage) -> Self {
        EventBatchRequest::new(
            message.events.into_iter().map(DetectionEvent::from).collect(),
            message.has_injections,
            BeamSetId::new(message.beam_set_id),
            FpgaCount::new(message.chunk_fpga_count),
        )
    }
}

impl From<FrbEventsReply> for EventBatchResponse {
    fn from(reply: FrbEventsReply) -> Self {
        EventBatchResponse::new(reply.ok, reply.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> EventBatchRequest {
        EventBatchRequest::new(
            vec![
                DetectionEvent::new(BeamId::new(44), FpgaCount::new(i64::MAX), 1500.25, 3.5, 8.0, 0.9),
                DetectionEvent::new(BeamId::new(42), FpgaCount::new(-1), 0.0, 0.0, 9.5, 0.0),
            ],
            true,
            BeamSetId::new(7),
            FpgaCount::from_seconds(10),
        )
    }

    #[test]
    fn test_batch_maps_every_field_in_order() {
        let message = FrbEventsMessage::from(sample_batch());

        assert!(message.has_injections);
        assert_eq!(message.beam_set_id, 7);
        assert_eq!(message.chunk_fpga_count, 3_906_250);
        assert_eq!(message.events.len(), 2);
        assert_eq!(message.events[0].beam_id, 44);
        assert_eq!(message.events[0].fpga_timestamp, i64::MAX);
        assert_eq!(message.events[0].dm, 1500.25);
        assert_eq!(message.events[0].dm_error, 3.5);
        assert_eq!(message.events[0].rfi_prob, 0.9);
        assert_eq!(message.events[1].beam_id, 42);
        assert_eq!(message.events[1].snr, 9.5);
    }

    #[test]
    fn test_batch_survives_wire_mapping() {
        let batch = sample_batch();
        let back = EventBatchRequest::from(FrbEventsMessage::from(batch.clone()));

        assert_eq!(back, batch);
    }

    #[test]
    fn test_config_document_maps_verbatim() {
        let message = ConfigMessage::from(ConfigRequest::new("ceci n'est pas yaml"));
        assert_eq!(message.yaml, "ceci n'est pas yaml");
    }

    #[test]
    fn test_replies_map_to_responses() {
        assert!(!ConfigResponse::from(ConfigReply { ok: false }).accepted());

        let response = EventBatchResponse::from(FrbEventsReply {
            ok: true,
            message: "ok".to_string(),
        });
        assert!(response.accepted());
        assert_eq!(response.message(), "ok");
    }
}
