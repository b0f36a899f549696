//! haarscope-spectrum - Octave-band spectral energy for visualization
//!
//! Runs the orthonormal Haar transform on a copy of a fixed-size audio
//! block, aggregates the wavelet coefficients into per-octave L1 energies
//! and converts them to decibels with a fixed -128 dB noise floor. A
//! session-scoped smoother folds successive frames into fast and slow
//! first-order low-pass spectra for display.

pub mod error;
pub mod estimator;
pub mod smoother;

pub use error::SpectrumError;
pub use estimator::{octave_spectrum_db, SpectrumFrame, BLOCK_SIZE, DB_FLOOR, NUM_BANDS};
pub use smoother::{SmootherConfig, SpectrumSmoother};
