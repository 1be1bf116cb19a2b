//! Execution device selection.
//!
//! The device is chosen once at startup and threaded explicitly through every
//! stage call, never read from ambient global state, so tests can exercise
//! both branches deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where model inference runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
    Cuda,
}

impl Device {
    /// Pick the accelerator when this build carries a GPU backend, CPU otherwise.
    pub fn auto() -> Self {
        if cfg!(feature = "cuda") {
            Device::Cuda
        } else {
            Device::Cpu
        }
    }

    /// The diarization collaborator has no CPU execution path, so speaker
    /// attribution is only offered on the accelerator.
    pub fn supports_diarization(&self) -> bool {
        matches!(self, Device::Cuda)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda => write!(f, "cuda"),
        }
    }
}

impl std::str::FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" => Ok(Device::Cuda),
            other => Err(format!("unknown device '{other}' (expected cpu or cuda)")),
        }
    }
}
