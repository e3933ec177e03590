//! Process-wide registries, one per execution domain.
//!
//! Allocation/free sites are decoupled from query sites, so the registry
//! must be reachable without threading a handle through every call. Each
//! domain gets exactly one table, materialized on first touch (or
//! explicitly via [`init`]) and guarded by a single mutex. Every
//! operation's critical section is one map read or one map mutation;
//! the two domains' registries never block each other.

use std::mem;
use std::sync::{Mutex, OnceLock};

use memlane_core::{Address, Domain};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::record::AllocationRecord;
use crate::table::RegistryTable;

static HOST: OnceLock<Mutex<RegistryTable>> = OnceLock::new();
static DEVICE: OnceLock<Mutex<RegistryTable>> = OnceLock::new();

// Compile-time assertion: the registry cell must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Mutex<RegistryTable>>();
};

fn cell(domain: Domain) -> &'static OnceLock<Mutex<RegistryTable>> {
    match domain {
        Domain::Host => &HOST,
        Domain::Device => &DEVICE,
    }
}

fn table(domain: Domain) -> &'static Mutex<RegistryTable> {
    cell(domain).get_or_init(|| {
        Mutex::new(RegistryTable::with_capacity(
            domain,
            RegistryConfig::default().initial_capacity,
        ))
    })
}

/// Materialize `domain`'s registry with an explicit configuration.
///
/// Returns `true` if this call created the registry. Returns `false` if
/// it already existed, in which case `config` is ignored and the existing
/// table is kept.
pub fn init(domain: Domain, config: RegistryConfig) -> bool {
    let mut created = false;
    cell(domain).get_or_init(|| {
        created = true;
        Mutex::new(RegistryTable::with_capacity(domain, config.initial_capacity))
    });
    created
}

/// Record a new allocation in `domain`'s registry.
///
/// The provider must pass the exact base address returned by the
/// allocator, the element count requested, and the element size in bytes,
/// immediately after a successful allocation.
///
/// # Errors
///
/// [`RegistryError::DuplicateAllocation`] if `base` is already live in
/// `domain` — a provider bug, since unregister must precede reuse.
pub fn register(
    domain: Domain,
    base: Address,
    len: usize,
    elem_size: usize,
) -> Result<(), RegistryError> {
    table(domain).lock().unwrap().register(base, len, elem_size)
}

/// Remove the record for `base` from `domain`'s registry.
///
/// Called by the provider immediately before releasing the memory. An
/// absent address is a silent no-op returning `None`: double-free-style
/// queries against this metadata layer are safe to make defensively.
pub fn unregister(domain: Domain, base: Address) -> Option<AllocationRecord> {
    table(domain).lock().unwrap().unregister(base)
}

/// The record whose base address is exactly `addr`, if one is live.
///
/// Interior addresses, one-past-the-end addresses, and addresses never
/// registered all miss: size recovery is a property of allocation
/// identity, not of pointer arithmetic.
///
/// A lookup racing a register/unregister of the *same* address observes
/// either the pre- or the post-mutation state, never a torn record.
/// Lookups on distinct addresses are unaffected by concurrent mutation
/// elsewhere in the table.
pub fn lookup(domain: Domain, addr: Address) -> Option<AllocationRecord> {
    table(domain).lock().unwrap().lookup(addr)
}

/// Number of elements at `ptr` when interpreted as `T`.
///
/// Returns 0 when `ptr` is not the exact base of a live allocation in
/// `domain`, when its address is not a multiple of `T`'s alignment, or
/// when `T` is zero-sized. The alignment check is a `mod_pow2` mask, not
/// a division. Otherwise the byte extent divided by `size_of::<T>()`.
pub fn sized_len<T>(domain: Domain, ptr: *const T) -> usize {
    let addr = Address::of(ptr);
    if mem::size_of::<T>() == 0 || !addr.is_aligned_to(mem::align_of::<T>()) {
        return 0;
    }
    match lookup(domain, addr) {
        Some(record) => record.size_bytes() / mem::size_of::<T>(),
        None => 0,
    }
}

/// Byte extent of the allocation based at `addr`, or 0 on a miss.
pub fn size_bytes(domain: Domain, addr: Address) -> usize {
    lookup(domain, addr).map_or(0, |record| record.size_bytes())
}

/// The domain whose registry holds `addr` as a live base address.
///
/// Probes host first, then device. An address registered in both domains
/// (the tables are independent) reports host.
pub fn domain_of(addr: Address) -> Option<Domain> {
    Domain::ALL
        .into_iter()
        .find(|&domain| lookup(domain, addr).is_some())
}

/// Number of live records in `domain`'s registry.
pub fn live_allocations(domain: Domain) -> usize {
    table(domain).lock().unwrap().len()
}

/// Total registers observed in `domain` since process start (monotonic).
pub fn allocation_count(domain: Domain) -> u64 {
    table(domain).lock().unwrap().allocations()
}

/// Total successful unregisters observed in `domain` (monotonic).
pub fn deallocation_count(domain: Domain) -> u64 {
    table(domain).lock().unwrap().deallocations()
}

/// Drop every record in `domain`'s registry.
///
/// For provider shutdown and tests. Returns the number of records that
/// were still live; a non-zero count at shutdown means the provider
/// leaked allocations. Lifetime counters are not reset, and unlike
/// [`unregister`] the dropped records do not count as deallocations.
pub fn reset(domain: Domain) -> usize {
    table(domain).lock().unwrap().clear()
}
