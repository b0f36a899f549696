//! Orthonormal 32-bit float Haar transform
//!
//! Each butterfly computes `(a + b) * c` and `(a - b) * c` with
//! `c = 1/sqrt(2)`, so forward and inverse share identical stage arithmetic
//! and differ only in where the bit-reversal permutation sits. The
//! symmetric scale leaves no gain mismatch between decomposition and
//! reconstruction, which is why the spectrum estimator runs on this path.

use std::f32::consts::FRAC_1_SQRT_2;

use crate::bitrev::bit_reverse_permute;

/// Forward orthonormal Haar transform over `2^radix` samples, in place.
///
/// After the butterfly stages a single bit-reversal pass restores sub-band
/// order, coarsest coefficient first.
///
/// The slice must hold exactly `1 << radix` samples; the hot path performs
/// no validation.
pub fn forward(data: &mut [f32], radix: u32) {
    let len = 1usize << radix;
    debug_assert_eq!(data.len(), len);

    let mut hlen = len >> 1;
    let mut skip = 1usize;

    for _ in 0..radix {
        for j in 0..hlen {
            let even = 2 * j * skip;
            let odd = (2 * j + 1) * skip;

            let a = data[even];
            let b = data[odd];

            data[even] = (a + b) * FRAC_1_SQRT_2;
            data[odd] = (a - b) * FRAC_1_SQRT_2;
        }

        skip <<= 1;
        hlen >>= 1;
    }

    bit_reverse_permute(data, radix);
}

/// Inverse of [`forward`]: permute first, then run the mirrored stage order
/// with the same symmetric scale.
pub fn inverse(data: &mut [f32], radix: u32) {
    let len = 1usize << radix;
    debug_assert_eq!(data.len(), len);

    bit_reverse_permute(data, radix);

    let mut hlen = 1usize;
    let mut skip = len >> 1;

    for _ in 0..radix {
        for j in 0..hlen {
            let even = 2 * j * skip;
            let odd = (2 * j + 1) * skip;

            let a = data[even];
            let b = data[odd];

            data[even] = (a + b) * FRAC_1_SQRT_2;
            data[odd] = (a - b) * FRAC_1_SQRT_2;
        }

        skip >>= 1;
        hlen <<= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn test_signal(len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| {
                let t = i as f32 / len as f32;
                (2.0 * PI * 3.0 * t).sin() + 0.25 * (2.0 * PI * 17.0 * t).cos()
            })
            .collect()
    }

    #[test]
    fn test_round_trip() {
        for radix in 1..=12u32 {
            let original = test_signal(1usize << radix);
            let mut data = original.clone();

            forward(&mut data, radix);
            inverse(&mut data, radix);

            for (i, (&got, &want)) in data.iter().zip(original.iter()).enumerate() {
                assert!(
                    (got - want).abs() < 1e-5,
                    "radix {} index {}: {} vs {}",
                    radix,
                    i,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn test_energy_preserved() {
        for radix in 1..=12u32 {
            let original = test_signal(1usize << radix);
            let before: f32 = original.iter().map(|x| x * x).sum();

            let mut data = original;
            forward(&mut data, radix);
            let after: f32 = data.iter().map(|x| x * x).sum();

            assert!(
                (before - after).abs() < before * 1e-3,
                "radix {}: {} vs {}",
                radix,
                before,
                after
            );
        }
    }

    #[test]
    fn test_known_vector_all_ones() {
        // Constant block of ones: the coarsest coefficient carries the whole
        // signal, sum / sqrt(8) = 2 * sqrt(2).
        let mut data = [1.0f32; 8];
        forward(&mut data, 3);

        let expected = 8.0 / 8.0f32.sqrt();
        assert!((data[0] - expected).abs() < 1e-6, "coarse: {}", data[0]);
        for (i, &c) in data[1..].iter().enumerate() {
            assert!(c.abs() < 1e-6, "detail {}: {}", i + 1, c);
        }
    }

    #[test]
    fn test_impulse_spreads_evenly() {
        // An impulse has flat energy across all coefficients after an
        // orthonormal transform.
        let mut data = [0.0f32; 16];
        data[0] = 1.0;
        forward(&mut data, 4);

        let energy: f32 = data.iter().map(|x| x * x).sum();
        assert!((energy - 1.0).abs() < 1e-6);
        assert!((data[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_single_element_round_trip() {
        let mut data = [0.75f32];
        forward(&mut data, 0);
        inverse(&mut data, 0);
        assert_eq!(data, [0.75]);
    }
}
