//! Power-of-two and population-count primitives shared across domains.
//!
//! The [`BitWord`] default method bodies are the portable implementations
//! and the single source of truth for every word width. The widths with
//! hardware-special-cased device instructions (`u32`, `u64`) override the
//! loop-based operations with single-instruction paths when compiled for
//! the device target; the dispatch is resolved entirely by `cfg`, never at
//! runtime, so shared source carries no branch cost in either domain.

use std::ops::{BitAnd, BitAndAssign, Shr, Sub};

/// Portable loop implementations, valid at every word width.
mod portable {
    use super::BitWord;

    /// Shift-and-count: the index of the highest set bit.
    pub(super) fn log2_pow2<T: BitWord>(number: T) -> u32 {
        let mut result = 0;
        let mut shifted = number >> 1;
        while shifted != T::ZERO {
            shifted = shifted >> 1;
            result += 1;
        }
        result
    }

    /// Count iterations of clearing the least significant set bit.
    pub(super) fn popcount<T: BitWord>(number: T) -> u32 {
        let mut n = number;
        let mut result = 0;
        while n != T::ZERO {
            n &= n - T::ONE;
            result += 1;
        }
        result
    }
}

/// Unsigned integer words the bit primitives operate on.
///
/// Implemented for `u8` through `u128` and `usize`. The default bodies
/// are the portable fallbacks; `u32` and `u64` override [`log2_pow2`]
/// and [`popcount`] with device fast paths, and `usize` forwards to the
/// width-matching override so pointer arithmetic picks them up too.
///
/// [`log2_pow2`]: BitWord::log2_pow2
/// [`popcount`]: BitWord::popcount
pub trait BitWord:
    Copy
    + PartialEq
    + PartialOrd
    + BitAnd<Output = Self>
    + BitAndAssign
    + Sub<Output = Self>
    + Shr<u32, Output = Self>
{
    /// The zero word.
    const ZERO: Self;
    /// The one word.
    const ONE: Self;

    /// Whether the word is strictly positive with exactly one set bit.
    ///
    /// Total: zero is not a power of two.
    fn is_pow2(self) -> bool {
        self != Self::ZERO && (self & (self - Self::ONE)) == Self::ZERO
    }

    /// `self mod divisor` for a power-of-two divisor, computed as a mask.
    ///
    /// Drop-in replacement for `%` wherever the divisor is known to be a
    /// power of two; device code has no cheap integer division. The result
    /// is always strictly less than `divisor`.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `divisor` is not a power of two. Release
    /// builds skip the check and the result is unspecified.
    fn mod_pow2(self, divisor: Self) -> Self {
        debug_assert!(
            divisor.is_pow2(),
            "mod_pow2 divisor must be a power of two"
        );
        let result = self & (divisor - Self::ONE);
        debug_assert!(result < divisor);
        result
    }

    /// The bit index of a power of two's single set bit.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `self` is not a power of two. Release
    /// builds skip the check and the result is unspecified.
    fn log2_pow2(self) -> u32 {
        debug_assert!(self.is_pow2(), "log2_pow2 input must be a power of two");
        portable::log2_pow2(self)
    }

    /// The number of set bits. Total: zero has none.
    fn popcount(self) -> u32 {
        portable::popcount(self)
    }
}

impl BitWord for u8 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl BitWord for u16 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl BitWord for u128 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

// Hardware-special-cased widths: the device exposes single-instruction
// bit-find and population count for 32- and 64-bit operands.

impl BitWord for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn log2_pow2(self) -> u32 {
        debug_assert!(self.is_pow2(), "log2_pow2 input must be a power of two");
        #[cfg(target_arch = "nvptx64")]
        {
            // Lowers to a single bfind.u32 on the device.
            31 - self.leading_zeros()
        }
        #[cfg(not(target_arch = "nvptx64"))]
        {
            portable::log2_pow2(self)
        }
    }

    fn popcount(self) -> u32 {
        #[cfg(target_arch = "nvptx64")]
        {
            // Lowers to a single popc.b32 on the device.
            self.count_ones()
        }
        #[cfg(not(target_arch = "nvptx64"))]
        {
            portable::popcount(self)
        }
    }
}

impl BitWord for u64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn log2_pow2(self) -> u32 {
        debug_assert!(self.is_pow2(), "log2_pow2 input must be a power of two");
        #[cfg(target_arch = "nvptx64")]
        {
            // Lowers to a single bfind.u64 on the device.
            63 - self.leading_zeros()
        }
        #[cfg(not(target_arch = "nvptx64"))]
        {
            portable::log2_pow2(self)
        }
    }

    fn popcount(self) -> u32 {
        #[cfg(target_arch = "nvptx64")]
        {
            // Lowers to a single popc.b64 on the device.
            self.count_ones()
        }
        #[cfg(not(target_arch = "nvptx64"))]
        {
            portable::popcount(self)
        }
    }
}

// usize forwards to the 64-bit override (zero-extension preserves both
// the power-of-two property and the set-bit count on 32-bit targets).

impl BitWord for usize {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn log2_pow2(self) -> u32 {
        (self as u64).log2_pow2()
    }

    fn popcount(self) -> u32 {
        (self as u64).popcount()
    }
}
