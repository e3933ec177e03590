//! Allocation metadata records.

use std::fmt;

use memlane_core::Address;

/// Metadata describing one live allocation.
///
/// Created when the allocation provider registers a freshly allocated
/// block and destroyed when the provider unregisters it before release.
/// The registry owns only this metadata; the provider owns the memory's
/// lifetime and must register/unregister in lock-step with allocate/free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct AllocationRecord {
    /// Exact base address returned by the allocator. Never null.
    pub base: Address,
    /// Number of elements in the allocation.
    pub len: usize,
    /// Size of one element in bytes. Always positive.
    pub elem_size: usize,
}

impl AllocationRecord {
    /// Create a new record.
    pub(crate) fn new(base: Address, len: usize, elem_size: usize) -> Self {
        Self {
            base,
            len,
            elem_size,
        }
    }

    /// Total byte extent of the allocation: `len * elem_size`.
    pub fn size_bytes(&self) -> usize {
        self.len * self.elem_size
    }

    /// Whether the allocation holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for AllocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocationRecord(base={}, len={}, elem_size={})",
            self.base, self.len, self.elem_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_extent_is_len_times_elem_size() {
        let record = AllocationRecord::new(Address(0x1000), 42, 4);
        assert_eq!(record.size_bytes(), 168);
        assert!(!record.is_empty());
    }

    #[test]
    fn zero_length_allocation_is_empty() {
        let record = AllocationRecord::new(Address(0x1000), 0, 8);
        assert!(record.is_empty());
        assert_eq!(record.size_bytes(), 0);
    }

    #[test]
    fn display_round_trip() {
        let record = AllocationRecord::new(Address(0x20), 3, 8);
        assert_eq!(
            record.to_string(),
            "AllocationRecord(base=0x20, len=3, elem_size=8)"
        );
    }
}
