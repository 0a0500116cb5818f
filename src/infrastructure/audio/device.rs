use std::path::Path;

/// Inference device, resolved once at startup. GPU gets the lower-precision
/// compute type; CPU the higher-precision quantized one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Cuda,
}

impl Device {
    /// Picks CUDA when an NVIDIA driver is present, unless forced to CPU.
    pub fn detect(force_cpu: bool) -> Self {
        if force_cpu {
            return Self::Cpu;
        }
        if Path::new("/proc/driver/nvidia/version").exists() {
            Self::Cuda
        } else {
            Self::Cpu
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
        }
    }

    pub fn compute_type(&self) -> &'static str {
        match self {
            Self::Cpu => "int8",
            Self::Cuda => "float16",
        }
    }
}
