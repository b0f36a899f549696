//! Session-scoped spectrum smoothing
//!
//! A visualization host keeps two exponentially smoothed copies of the
//! spectrum: a fast one for the bars and a slow one for the peak line. The
//! state lives in an explicit object owned by the session rather than in
//! process-wide storage; sharing one instance across threads is the
//! caller's serialization problem.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SpectrumError;
use crate::estimator::{octave_spectrum_db, BLOCK_SIZE, DB_FLOOR, NUM_BANDS};

/// First-order low-pass coefficients for the two smoothed spectra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// Coefficient for the fast (bar) spectrum.
    pub fast_coeff: f32,
    /// Coefficient for the slow (peak line) spectrum.
    pub slow_coeff: f32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            fast_coeff: 0.2,
            slow_coeff: 0.01,
        }
    }
}

impl SmootherConfig {
    fn validate(&self) -> Result<(), SpectrumError> {
        for (name, value) in [
            ("fast_coeff", self.fast_coeff),
            ("slow_coeff", self.slow_coeff),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(SpectrumError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}

/// Spectrum smoother holding per-session filter state.
///
/// Both spectra start at the noise floor and converge toward incoming
/// frames at their respective rates.
#[derive(Debug, Clone)]
pub struct SpectrumSmoother {
    config: SmootherConfig,
    fast: [f32; NUM_BANDS],
    slow: [f32; NUM_BANDS],
}

impl SpectrumSmoother {
    /// Create a smoother with the default coefficients.
    pub fn new() -> Self {
        Self {
            config: SmootherConfig::default(),
            fast: [DB_FLOOR; NUM_BANDS],
            slow: [DB_FLOOR; NUM_BANDS],
        }
    }

    /// Create a smoother with the given coefficients.
    pub fn with_config(config: SmootherConfig) -> Result<Self, SpectrumError> {
        config.validate()?;
        Ok(Self {
            config,
            fast: [DB_FLOOR; NUM_BANDS],
            slow: [DB_FLOOR; NUM_BANDS],
        })
    }

    /// Analyze one block and fold it into both smoothed spectra.
    ///
    /// Returns `false` without touching any state when the block is not
    /// [`BLOCK_SIZE`] samples long.
    pub fn process_block(&mut self, block: &[f32]) -> bool {
        if block.len() != BLOCK_SIZE {
            debug!(
                "smoother skipping mismatched block: {} != {}",
                block.len(),
                BLOCK_SIZE
            );
            return false;
        }

        let mut frame = [DB_FLOOR; NUM_BANDS];
        octave_spectrum_db(&mut frame, block);

        for (band, &value) in frame.iter().enumerate() {
            self.fast[band] = low_pass(value, self.config.fast_coeff, self.fast[band]);
            self.slow[band] = low_pass(value, self.config.slow_coeff, self.slow[band]);
        }

        true
    }

    /// Fast-smoothed spectrum, coarsest band first.
    pub fn fast(&self) -> &[f32; NUM_BANDS] {
        &self.fast
    }

    /// Slow-smoothed spectrum, coarsest band first.
    pub fn slow(&self) -> &[f32; NUM_BANDS] {
        &self.slow
    }

    /// Active configuration.
    pub fn config(&self) -> SmootherConfig {
        self.config
    }

    /// Return both spectra to the noise floor.
    pub fn reset(&mut self) {
        self.fast = [DB_FLOOR; NUM_BANDS];
        self.slow = [DB_FLOOR; NUM_BANDS];
    }
}

impl Default for SpectrumSmoother {
    fn default() -> Self {
        Self::new()
    }
}

/// One-pole low pass: `state + b0 * (input - state)`.
#[inline]
fn low_pass(input: f32, b0: f32, state: f32) -> f32 {
    (b0 * (input - state)) + state
}
