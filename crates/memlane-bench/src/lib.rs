//! Benchmark fixtures and utilities for the memlane workspace.
//!
//! Provides deterministic synthetic inputs so benchmark runs are
//! reproducible without a random-number dependency:
//!
//! - [`synthetic_addresses`]: pairwise-distinct, well-aligned addresses
//! - [`mixed_words`]: a spread of bit patterns for the bit primitives

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use memlane_core::Address;

/// Generate `n` pairwise-distinct synthetic addresses, 64-byte aligned.
///
/// Deterministic: the same seed always yields the same sequence. The
/// addresses are registry keys only and are never dereferenced.
pub fn synthetic_addresses(n: usize, seed: u64) -> Vec<Address> {
    let mut addresses = Vec::with_capacity(n);
    let mut taken = HashSet::with_capacity(n);

    for i in 0..n as u64 {
        // Simple deterministic spread across a synthetic address window.
        let mut slot = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % (1 << 24);

        // Linear probe to avoid collisions.
        while taken.contains(&slot) {
            slot = (slot + 1) % (1 << 24);
        }
        taken.insert(slot);
        addresses.push(Address(0x1000_0000 + (slot as usize) * 64));
    }

    addresses
}

/// A deterministic spread of 64-bit patterns: sparse, dense, alternating.
pub fn mixed_words(n: usize) -> Vec<u64> {
    (0..n as u64)
        .map(|i| match i % 4 {
            0 => 1u64 << (i % 64),
            1 => u64::MAX >> (i % 64),
            2 => 0xaaaa_aaaa_aaaa_aaaa ^ i,
            _ => i.wrapping_mul(0x9e37_79b9_7f4a_7c15),
        })
        .collect()
}
