//! The opaque allocation address key.

use std::fmt;

use crate::bit::BitWord;

/// Untyped base address of an allocation.
///
/// Addresses are registry keys and are never dereferenced. Keeping the
/// raw pointer's integer representation (rather than the pointer itself)
/// leaves the registry free of type and lifetime parameters and makes the
/// key `Send + Sync` unconditionally. Size recovery is a property of
/// allocation identity: only the exact address returned by the allocator
/// matches, never an address offset into the block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub usize);

impl Address {
    /// The null address. Never a valid registry key.
    pub const NULL: Address = Address(0);

    /// The address of a raw pointer.
    pub fn of<T>(ptr: *const T) -> Self {
        Self(ptr as usize)
    }

    /// Whether this is the null address.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Whether the address is a multiple of `align`.
    ///
    /// `align` must be a power of two (always true for Rust type
    /// alignments). The check is a mask, not a division, so it is equally
    /// cheap in device code.
    pub fn is_aligned_to(self, align: usize) -> bool {
        self.0.mod_pow2(align) == 0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl<T> From<*const T> for Address {
    fn from(ptr: *const T) -> Self {
        Self::of(ptr)
    }
}

impl<T> From<*mut T> for Address {
    fn from(ptr: *mut T) -> Self {
        Self::of(ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_detection() {
        assert!(Address::NULL.is_null());
        assert!(Address::of(std::ptr::null::<u32>()).is_null());
        assert!(!Address(0x1000).is_null());
    }

    #[test]
    fn of_matches_pointer_value() {
        let value = 7u64;
        let ptr = &value as *const u64;
        assert_eq!(Address::of(ptr), Address(ptr as usize));
    }

    #[test]
    fn alignment_check() {
        assert!(Address(0x1000).is_aligned_to(8));
        assert!(Address(0x1004).is_aligned_to(4));
        assert!(!Address(0x1004).is_aligned_to(8));
        assert!(!Address(0x1001).is_aligned_to(2));
        // Everything is 1-aligned, including null.
        assert!(Address(0x1001).is_aligned_to(1));
        assert!(Address::NULL.is_aligned_to(1));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Address(0x2a).to_string(), "0x2a");
    }
}
