//! gRPC adapter for the sifter client
//!
//! Implements [`sifter_domain::SifterGateway`] against the `FrbSifter`
//! service using tonic over a plaintext channel.

pub mod infrastructure;
pub mod mapping;
pub mod proto;

pub use infrastructure::{GrpcSifterConfig, GrpcSifterGateway, DEFAULT_TARGET};
