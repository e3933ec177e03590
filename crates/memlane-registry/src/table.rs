//! The per-domain allocation table.

use indexmap::IndexMap;

use memlane_core::{Address, Domain};

use crate::error::RegistryError;
use crate::record::AllocationRecord;

/// Maps base addresses to live allocation records for one domain.
///
/// Plain data with no locking of its own; the process-wide instances in
/// [`crate::global`] wrap one table per domain in a mutex. `IndexMap`
/// keeps iteration in registration order, which makes leak reports
/// deterministic.
#[derive(Debug)]
pub struct RegistryTable {
    domain: Domain,
    entries: IndexMap<Address, AllocationRecord>,
    allocations: u64,
    deallocations: u64,
}

impl RegistryTable {
    /// Create an empty table for `domain`.
    pub fn new(domain: Domain) -> Self {
        Self::with_capacity(domain, 0)
    }

    /// Create an empty table with `capacity` record slots reserved.
    pub fn with_capacity(domain: Domain, capacity: usize) -> Self {
        Self {
            domain,
            entries: IndexMap::with_capacity(capacity),
            allocations: 0,
            deallocations: 0,
        }
    }

    /// The domain this table describes.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Insert a record for a freshly allocated block.
    ///
    /// Fails with [`RegistryError::DuplicateAllocation`] if `base` is
    /// already live. A null `base` is a provider contract violation and
    /// asserts in debug builds.
    pub fn register(
        &mut self,
        base: Address,
        len: usize,
        elem_size: usize,
    ) -> Result<(), RegistryError> {
        debug_assert!(!base.is_null(), "allocation base address must not be null");
        debug_assert!(elem_size > 0, "element size must be positive");
        if self.entries.contains_key(&base) {
            return Err(RegistryError::DuplicateAllocation {
                domain: self.domain,
                base,
            });
        }
        self.entries
            .insert(base, AllocationRecord::new(base, len, elem_size));
        self.allocations += 1;
        Ok(())
    }

    /// Remove and return the record for `base`.
    ///
    /// An absent address is a silent no-op returning `None`: queries
    /// against never-registered or already-freed addresses are a normal
    /// occurrence, never an error.
    pub fn unregister(&mut self, base: Address) -> Option<AllocationRecord> {
        let removed = self.entries.swap_remove(&base);
        if removed.is_some() {
            self.deallocations += 1;
        }
        removed
    }

    /// The record whose base address is exactly `addr`.
    ///
    /// Interior addresses, one-past-the-end addresses, and addresses that
    /// were never registered all miss.
    pub fn lookup(&self, addr: Address) -> Option<AllocationRecord> {
        self.entries.get(&addr).copied()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no live records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total registers observed over the table's lifetime (monotonic).
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Total successful unregisters observed (monotonic).
    pub fn deallocations(&self) -> u64 {
        self.deallocations
    }

    /// Iterate live records in registration order.
    pub fn records(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.entries.values()
    }

    /// Drop every record, returning how many were live.
    ///
    /// A non-zero return at provider shutdown means allocations leaked.
    /// Lifetime counters are not reset.
    pub fn clear(&mut self) -> usize {
        let leaked = self.entries.len();
        self.entries.clear();
        leaked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RegistryTable {
        RegistryTable::new(Domain::Host)
    }

    #[test]
    fn register_then_lookup_round_trips() {
        let mut t = table();
        t.register(Address(0x1000), 42, 4).unwrap();

        let record = t.lookup(Address(0x1000)).unwrap();
        assert_eq!(record.base, Address(0x1000));
        assert_eq!(record.len, 42);
        assert_eq!(record.elem_size, 4);
        assert_eq!(record.size_bytes(), 168);
    }

    #[test]
    fn interior_and_past_end_addresses_miss() {
        let mut t = table();
        t.register(Address(0x1000), 42, 4).unwrap();

        assert!(t.lookup(Address(0x1004)).is_none());
        assert!(t.lookup(Address(0x1000 + 24 * 4)).is_none());
        assert!(t.lookup(Address(0x1000 + 42 * 4)).is_none());
    }

    #[test]
    fn duplicate_register_is_rejected() {
        let mut t = table();
        t.register(Address(0x1000), 1, 4).unwrap();

        let err = t.register(Address(0x1000), 9, 8).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateAllocation {
                domain: Domain::Host,
                base: Address(0x1000),
            }
        );
        // The original record is untouched.
        assert_eq!(t.lookup(Address(0x1000)).unwrap().len, 1);
    }

    #[test]
    fn unregister_removes_permanently() {
        let mut t = table();
        t.register(Address(0x1000), 42, 4).unwrap();

        let removed = t.unregister(Address(0x1000)).unwrap();
        assert_eq!(removed.len, 42);
        assert!(t.lookup(Address(0x1000)).is_none());
        assert!(t.is_empty());
    }

    #[test]
    fn unregister_absent_is_silent_noop() {
        let mut t = table();
        assert!(t.unregister(Address(0x9999)).is_none());
        assert_eq!(t.deallocations(), 0);
    }

    #[test]
    fn same_base_can_be_reused_after_unregister() {
        let mut t = table();
        t.register(Address(0x2000), 4, 4).unwrap();
        t.unregister(Address(0x2000));
        t.register(Address(0x2000), 8, 2).unwrap();

        assert_eq!(t.lookup(Address(0x2000)).unwrap().len, 8);
    }

    #[test]
    fn counters_are_monotonic() {
        let mut t = table();
        t.register(Address(0x1000), 1, 1).unwrap();
        t.register(Address(0x2000), 1, 1).unwrap();
        t.unregister(Address(0x1000));

        assert_eq!(t.allocations(), 2);
        assert_eq!(t.deallocations(), 1);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn clear_reports_leak_count() {
        let mut t = table();
        t.register(Address(0x1000), 1, 1).unwrap();
        t.register(Address(0x2000), 1, 1).unwrap();

        assert_eq!(t.clear(), 2);
        assert!(t.is_empty());
        // Lifetime counters survive the clear.
        assert_eq!(t.allocations(), 2);
    }

    #[test]
    fn records_iterate_in_registration_order() {
        let mut t = table();
        t.register(Address(0x3000), 1, 1).unwrap();
        t.register(Address(0x1000), 2, 1).unwrap();
        t.register(Address(0x2000), 3, 1).unwrap();

        let lens: Vec<usize> = t.records().map(|r| r.len).collect();
        assert_eq!(lens, vec![1, 2, 3]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "must not be null")]
    fn null_base_asserts_in_debug() {
        let mut t = table();
        let _ = t.register(Address::NULL, 1, 1);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn live_count_tracks_register_minus_unregister(
                bases in proptest::collection::btree_set(1usize..1_000_000, 1..50),
                drop_every in 1usize..5,
            ) {
                let mut t = RegistryTable::new(Domain::Host);
                let bases: Vec<usize> = bases.into_iter().collect();
                for &b in &bases {
                    t.register(Address(b << 4), 8, 4).unwrap();
                }
                let mut dropped = 0;
                for (i, &b) in bases.iter().enumerate() {
                    if i % drop_every == 0 {
                        t.unregister(Address(b << 4));
                        dropped += 1;
                    }
                }
                prop_assert_eq!(t.len(), bases.len() - dropped);
                prop_assert_eq!(t.allocations(), bases.len() as u64);
                prop_assert_eq!(t.deallocations(), dropped as u64);
            }

            #[test]
            fn lookup_misses_everything_after_clear(
                bases in proptest::collection::btree_set(1usize..100_000, 1..20),
            ) {
                let mut t = RegistryTable::new(Domain::Device);
                let bases: Vec<usize> = bases.into_iter().collect();
                for &b in &bases {
                    t.register(Address(b << 4), 1, 1).unwrap();
                }
                t.clear();
                for &b in &bases {
                    prop_assert!(t.lookup(Address(b << 4)).is_none());
                }
            }
        }
    }
}
