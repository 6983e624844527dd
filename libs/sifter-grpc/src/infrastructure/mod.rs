mod config;
mod grpc_gateway;

pub use config::{GrpcSifterConfig, DEFAULT_TARGET};
pub use grpc_gateway::GrpcSifterGateway;
