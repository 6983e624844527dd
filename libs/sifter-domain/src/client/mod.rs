//! Sifter client module
//!
//! The client issues configuration checks and event batch submissions
//! through a gateway and reports each call as an [`Outcome`].

mod outcome;
mod service;

pub use outcome::{BatchOutcome, ConfigOutcome, Outcome};
pub use service::SifterClient;
