//! Octave-band spectrum estimator
//!
//! Transforms a copy of the input block and reduces the coefficients to one
//! decibel value per octave. Band k holds `2^k` coefficients, laid out
//! contiguously from band 0 (the single coarsest coefficient) upward.

use haarscope_dsp::float;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of octave bands, also the transform radix.
pub const NUM_BANDS: usize = 10;

/// Fixed analysis block length.
pub const BLOCK_SIZE: usize = 1 << NUM_BANDS;

/// Decibel value emitted for near-silent bands.
pub const DB_FLOOR: f32 = -128.0;

// 10^(DB_FLOOR / 20): magnitudes below this clamp to the floor.
const DB_FLOOR_LINEAR: f32 = 3.981_071_7e-7;

/// Estimate per-octave L1 energies of `block` in decibels.
///
/// Writes `NUM_BANDS` values into `out`, coarsest band first. The caller's
/// block is never mutated; the transform runs on a fixed-size stack copy,
/// so the call performs no heap allocation.
///
/// If `block` is not exactly [`BLOCK_SIZE`] samples long, or `out` does not
/// hold exactly [`NUM_BANDS`] slots, the call leaves `out` untouched and
/// returns. A transient size glitch in a fire-and-forget per-block analysis
/// must not disrupt the audio path, and the stale values feed the caller's
/// own temporal smoothing.
pub fn octave_spectrum_db(out: &mut [f32], block: &[f32]) {
    if block.len() != BLOCK_SIZE || out.len() != NUM_BANDS {
        debug!(
            "skipping spectrum frame: block {} / out {} (expected {} / {})",
            block.len(),
            out.len(),
            BLOCK_SIZE,
            NUM_BANDS
        );
        return;
    }

    let mut scratch = [0.0f32; BLOCK_SIZE];
    scratch.copy_from_slice(block);
    float::forward(&mut scratch, NUM_BANDS as u32);

    // Bands of doubling size: 1, 2, 4, ... coefficients per octave.
    let mut start = 0usize;
    let mut band_size = 1usize;

    for slot in out.iter_mut() {
        let sum: f32 = scratch[start..start + band_size]
            .iter()
            .map(|c| c.abs())
            .sum();

        // 2^-k scale, an arithmetic-mean style L1 energy per band.
        *slot = db20(sum / band_size as f32);

        start += band_size;
        band_size <<= 1;
    }
}

/// `20 * log10(|x|)`, clamped to [`DB_FLOOR`] below the linear threshold.
fn db20(x: f32) -> f32 {
    let x = x.abs();
    if x < DB_FLOOR_LINEAR {
        DB_FLOOR
    } else {
        20.0 * x.log10()
    }
}

/// One analyzed block as an owned, serializable value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumFrame {
    /// Per-octave decibel values, coarsest band first.
    pub bands: [f32; NUM_BANDS],
}

impl SpectrumFrame {
    /// Analyze one block, or `None` if it is not [`BLOCK_SIZE`] samples
    /// long.
    pub fn analyze(block: &[f32]) -> Option<Self> {
        if block.len() != BLOCK_SIZE {
            return None;
        }

        let mut bands = [DB_FLOOR; NUM_BANDS];
        octave_spectrum_db(&mut bands, block);
        Some(Self { bands })
    }
}
