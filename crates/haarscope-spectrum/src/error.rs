//! Spectrum error types

use thiserror::Error;

/// Spectrum-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SpectrumError {
    /// Smoothing coefficient outside the stable (0, 1] range
    #[error("smoothing coefficient {name} = {value} is outside (0, 1]")]
    InvalidCoefficient { name: &'static str, value: f32 },
}
