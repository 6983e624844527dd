//! Generates the `FrbSifter` client and server stubs.
//!
//! The messages are hand-written prost structs in `src/proto.rs`, so the
//! service is described with tonic-build's manual builder and no `protoc`
//! is needed at build time.

use tonic_build::manual::{Builder, Method, Service};

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::proto::{}", input))
        .output_type(format!("crate::proto::{}", output))
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // No protobuf package: routes are `/FrbSifter/<Method>`
    let service = Service::builder()
        .name("FrbSifter")
        .package("")
        .method(unary(
            "check_configuration",
            "CheckConfiguration",
            "ConfigMessage",
            "ConfigReply",
        ))
        .method(unary(
            "frb_events",
            "FrbEvents",
            "FrbEventsMessage",
            "FrbEventsReply",
        ))
        .build();

    Builder::new().compile(&[service]);
}
