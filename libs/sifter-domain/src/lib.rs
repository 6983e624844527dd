//! # Sifter Domain Layer
//!
//! Pure domain model for talking to the CHORD FRB sifter service. It follows
//! hexagonal architecture principles:
//!
//! - **Entities**: configuration documents, detection events and event batches
//! - **Ports**: [`SifterGateway`], the contract a transport adapter implements
//! - **Services**: [`SifterClient`], which turns gateway results into [`Outcome`]s
//!
//! ## Architecture
//!
//! This layer has NO dependency on gRPC, HTTP or any other transport. The
//! wire protocol lives in an adapter crate that implements [`SifterGateway`].
//!
//! ## Example
//!
//! ```rust
//! use sifter_domain::{SifterClient, SifterGateway};
//!
//! async fn example<G: SifterGateway>(client: SifterClient<G>) {
//!     let outcome = client.check_configuration("beams: 1024").await;
//!     println!("Config accepted: {}", outcome.is_accepted());
//! }
//! ```

pub mod client;
pub mod configuration;
pub mod error;
pub mod events;
pub mod ports;

// Re-export commonly used types
pub use client::{BatchOutcome, ConfigOutcome, Outcome, SifterClient};
pub use configuration::{ConfigRequest, ConfigResponse};
pub use error::{Result, RpcCode, SifterError};
pub use events::{BeamId, BeamSetId, DetectionEvent, EventBatchRequest, EventBatchResponse, FpgaCount};
pub use ports::SifterGateway;
