use serde::{Deserialize, Serialize};
use std::fmt;

/// FPGA sample-clock rate of the upstream instrument, in counts per second
pub const FPGA_COUNTS_PER_SECOND: i64 = 390_625;

/// Identifier of a single beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BeamId(i32);

impl BeamId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for BeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BeamId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Identifier grouping beams observed simultaneously
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BeamSetId(i32);

impl BeamSetId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for BeamSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BeamSetId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// A count of FPGA samples
///
/// Used both for event timestamps and for chunk durations. The value is
/// opaque to the client and passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FpgaCount(i64);

impl FpgaCount {
    pub fn new(count: i64) -> Self {
        Self(count)
    }

    /// Convert a whole number of seconds using [`FPGA_COUNTS_PER_SECOND`]
    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds * FPGA_COUNTS_PER_SECOND)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FpgaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FpgaCount {
    fn from(count: i64) -> Self {
        Self(count)
    }
}
