use candle_core::Device;
use tracing::{debug, info, warn};

use super::error::EmbeddingError;

/// Compute backend the encoder ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Cpu,
    Metal,
    Cuda,
}

impl Backend {
    /// Classifies a candle device.
    pub fn of(device: &Device) -> Self {
        match device {
            Device::Cpu => Backend::Cpu,
            Device::Metal(_) => Backend::Metal,
            Device::Cuda(_) => Backend::Cuda,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Cpu => "cpu",
            Backend::Metal => "metal",
            Backend::Cuda => "cuda",
        }
    }
}

/// Picks the first GPU backend compiled in (Metal, then CUDA), else the CPU.
///
/// GPU initialisation failures are logged and never fatal.
pub fn select_device() -> Result<Device, EmbeddingError> {
    let mut failures: Vec<String> = Vec::new();

    if cfg!(feature = "metal") {
        match Device::new_metal(0) {
            Ok(device) => {
                info!(backend = "metal", "Using GPU acceleration for the encoder");
                return Ok(device);
            }
            Err(e) => {
                warn!(error = %e, "Metal device unavailable");
                failures.push(format!("metal failed: {e}"));
            }
        }
    }

    if cfg!(feature = "cuda") {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!(backend = "cuda", "Using GPU acceleration for the encoder");
                return Ok(device);
            }
            Err(e) => {
                warn!(error = %e, "CUDA device unavailable");
                failures.push(format!("cuda failed: {e}"));
            }
        }
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, running the encoder on CPU");
    } else {
        warn!(reason = %failures.join("; "), "Falling back to CPU device");
    }

    Ok(Device::Cpu)
}
