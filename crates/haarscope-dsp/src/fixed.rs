//! Q15 fixed-point Haar transform
//!
//! The sum channel stores a biased rounded average (`(a + b + 1) >> 1`) and
//! the difference channel stays unscaled. Compared to the orthonormal float
//! path this grows energy by a factor of two per level, but every butterfly
//! output stays representable in 16 bits without discarding the
//! least-significant detail bit. The +1 bias makes the pair
//! information-preserving against the unscaled difference, so the inverse
//! reconstructs exactly whenever no intermediate overflows 16 bits.

use crate::bitrev::bit_reverse_permute;

/// Forward Haar transform over `2^radix` Q15 samples, in place.
///
/// Runs `radix` butterfly stages with the pair stride doubling each stage,
/// then a single bit-reversal pass to restore sub-band order: index 0 holds
/// the coarsest approximation, increasing indices progressively finer
/// detail.
///
/// The slice must hold exactly `1 << radix` samples; the hot path performs
/// no validation. Near-full-scale input can overflow the 16-bit narrowing,
/// which is likewise the caller's precondition.
pub fn forward(data: &mut [i16], radix: u32) {
    let len = 1usize << radix;
    debug_assert_eq!(data.len(), len);

    let mut hlen = len >> 1;
    let mut skip = 1usize;

    for _ in 0..radix {
        for j in 0..hlen {
            let even = 2 * j * skip;
            let odd = (2 * j + 1) * skip;

            let a = i32::from(data[even]);
            let b = i32::from(data[odd]);

            let x = (a + b + 1) >> 1;
            let y = a - b;

            data[even] = x as i16;
            data[odd] = y as i16;
        }

        skip <<= 1;
        hlen >>= 1;
    }

    bit_reverse_permute(data, radix);
}

/// Inverse of [`forward`]: permute first, then run the stages mirrored with
/// the stride halving from `len / 2` down to 1.
///
/// Lossless only when the forward rounding discarded no information; lossy
/// at extreme magnitudes, acceptable for visualization but not for lossless
/// coding.
pub fn inverse(data: &mut [i16], radix: u32) {
    let len = 1usize << radix;
    debug_assert_eq!(data.len(), len);

    bit_reverse_permute(data, radix);

    let mut hlen = 1usize;
    let mut skip = len >> 1;

    for _ in 0..radix {
        for j in 0..hlen {
            let even = 2 * j * skip;
            let odd = (2 * j + 1) * skip;

            let a = i32::from(data[even]);
            let b = i32::from(data[odd]);

            let x = ((a << 1) + b) >> 1;
            let y = ((a << 1) - b) >> 1;

            data[even] = x as i16;
            data[odd] = y as i16;
        }

        skip >>= 1;
        hlen <<= 1;
    }
}
