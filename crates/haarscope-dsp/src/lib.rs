//! haarscope-dsp - In-place Haar wavelet transforms
//!
//! Provides the numeric core of haarscope: a radix-2 butterfly network with
//! bit-reversal reordering, implemented over two numeric domains (Q15 fixed
//! point and 32-bit float). Every operation runs in place on caller-owned
//! memory, with no heap allocation, no locking and no internal state, so
//! the transforms are safe to call from a real-time audio callback.
//!
//! A block of `2^radix` samples is decomposed into `radix` octave sub-bands;
//! after the trailing bit-reversal pass, index 0 holds the coarsest
//! approximation and increasing indices hold progressively finer detail.

pub mod bitrev;
pub mod fixed;
pub mod float;

pub use bitrev::{bit_reverse, bit_reverse_permute};
