//! Wire messages of the `FrbSifter` service
//!
//! The generated `frb_sifter_client` and `frb_sifter_server` modules are
//! included at the bottom of this file.

/// Configuration document sent for validation
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigMessage {
    #[prost(string, tag = "1")]
    pub yaml: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigReply {
    #[prost(bool, tag = "1")]
    pub ok: bool,
}

/// One detection event
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrbEvent {
    #[prost(int32, tag = "1")]
    pub beam_id: i32,
    #[prost(int64, tag = "2")]
    pub fpga_timestamp: i64,
    #[prost(float, tag = "3")]
    pub dm: f32,
    #[prost(float, tag = "4")]
    pub dm_error: f32,
    #[prost(float, tag = "5")]
    pub snr: f32,
    #[prost(float, tag = "6")]
    pub rfi_prob: f32,
}

/// All events of one chunk for one beam set
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrbEventsMessage {
    #[prost(bool, tag = "1")]
    pub has_injections: bool,
    #[prost(int32, tag = "2")]
    pub beam_set_id: i32,
    #[prost(int64, tag = "3")]
    pub chunk_fpga_count: i64,
    #[prost(message, repeated, tag = "4")]
    pub events: ::prost::alloc::vec::Vec<FrbEvent>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrbEventsReply {
    #[prost(bool, tag = "1")]
    pub ok: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}

include!(concat!(env!("OUT_DIR"), "/.FrbSifter.rs"));
