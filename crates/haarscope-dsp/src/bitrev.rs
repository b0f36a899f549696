//! Bit-reversal permutation
//!
//! Shared index reshuffle for the transforms: converts between butterfly
//! stage order and natural sub-band order.

/// Reverse the low `radix` bits of `i`.
///
/// Valid for `1 <= radix <= 32`: all 32 bits are reversed, then shifted
/// back down by `32 - radix`.
#[inline]
pub fn bit_reverse(i: u32, radix: u32) -> u32 {
    debug_assert!((1..=32).contains(&radix));
    i.reverse_bits() >> (32 - radix)
}

/// Apply the bit-reversal permutation to `data` in place.
///
/// Each index is swapped with its reversed counterpart once (only when the
/// reversed index is greater), so the pass runs in O(n) time and O(1) extra
/// space. The permutation is an involution: applying it twice with the same
/// radix restores the original order. `radix == 0` is a no-op on a
/// single-element array.
pub fn bit_reverse_permute<T>(data: &mut [T], radix: u32) {
    if radix == 0 {
        return;
    }

    for i in 0..data.len() {
        let rev = bit_reverse(i as u32, radix) as usize;
        if i < rev {
            data.swap(i, rev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_reverse_known_values() {
        // 3-bit field: 001 -> 100, 110 -> 011, 111 -> 111
        assert_eq!(bit_reverse(1, 3), 4);
        assert_eq!(bit_reverse(6, 3), 3);
        assert_eq!(bit_reverse(7, 3), 7);

        // Full-width reversal
        assert_eq!(bit_reverse(1, 32), 0x8000_0000);
        assert_eq!(bit_reverse(0, 16), 0);
    }

    #[test]
    fn test_permute_matches_index_reversal() {
        let radix = 4;
        let mut data: Vec<u32> = (0..16).collect();
        bit_reverse_permute(&mut data, radix);

        for (i, &v) in data.iter().enumerate() {
            assert_eq!(v, bit_reverse(i as u32, radix));
        }
    }

    #[test]
    fn test_permute_is_involution() {
        for radix in 1..=10u32 {
            let len = 1usize << radix;
            let original: Vec<usize> = (0..len).map(|i| i * 31 % 97).collect();
            let mut data = original.clone();

            bit_reverse_permute(&mut data, radix);
            bit_reverse_permute(&mut data, radix);

            assert_eq!(data, original, "radix {}", radix);
        }
    }

    #[test]
    fn test_permute_radix_zero_is_noop() {
        let mut data = [42.0f32];
        bit_reverse_permute(&mut data, 0);
        assert_eq!(data, [42.0]);
    }
}
