//! Memlane: pointer-addressed size recovery and iteration across host and
//! device memory.
//!
//! An external allocation provider registers each allocation's base
//! address, element count, and element size in the registry for its
//! execution domain; from then on, callers recover sizes and bounded
//! spans from the bare pointer alone — no allocation metadata travels
//! with the pointer, and no header is attached to the memory itself.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all memlane sub-crates. For most users, adding `memlane` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use memlane::prelude::*;
//!
//! // Provider side: register a freshly allocated block.
//! let block: Vec<u32> = vec![0; 64];
//! let base = Address::of(block.as_ptr());
//! registry::register(Domain::Host, base, block.len(), std::mem::size_of::<u32>()).unwrap();
//!
//! // Client side: recover the size and a bounded span from the pointer.
//! assert_eq!(registry::sized_len(Domain::Host, block.as_ptr()), 64);
//! let span = host_span(block.as_ptr());
//! assert_eq!(span.len(), 64);
//!
//! // Drain the span through an inserter adapter.
//! let mut out = Vec::new();
//! // SAFETY: `block` is alive and host-resident while the slice is read.
//! let values = unsafe { span.as_slice() };
//! copy_into(values.iter().copied(), &mut back_inserter(&mut out));
//! assert_eq!(out.len(), 64);
//!
//! // Provider side again: unregister before the memory is released.
//! registry::unregister(Domain::Host, base);
//! assert_eq!(registry::sized_len(Domain::Host, block.as_ptr()), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `memlane-core` | Domains, addresses, bit primitives, shape traits |
//! | [`registry`] | `memlane-registry` | Per-domain registries and size recovery |
//! | [`iter`] | `memlane-iter` | Span resolution and inserter adapters |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, bit primitives, and shape traits (`memlane-core`).
///
/// Contains the [`types::Domain`] tag, the opaque [`types::Address`] key,
/// the [`types::BitWord`] primitives, and the container-shape traits the
/// inserter adapters build on.
pub use memlane_core as types;

/// Per-domain allocation registries (`memlane-registry`).
///
/// The register/unregister/lookup contract for allocation providers, and
/// the defensive size-recovery queries ([`registry::sized_len`],
/// [`registry::size_bytes`], [`registry::domain_of`]) for clients.
pub use memlane_registry as registry;

/// Span resolution and inserter adapters (`memlane-iter`).
///
/// [`iter::host_span`]/[`iter::device_span`] turn a bare pointer back
/// into a bounded range; [`iter::back_inserter`], [`iter::front_inserter`],
/// and [`iter::inserter`] generalize container shapes behind one sink
/// interface.
pub use memlane_iter as iter;

/// Common imports for typical memlane usage.
///
/// ```rust
/// use memlane::prelude::*;
/// ```
///
/// This imports the domain and address types, the bit primitives, the
/// registry module, span resolution, and the inserter adapters.
pub mod prelude {
    // Core types and traits
    pub use memlane_core::{Address, BitWord, Domain, KeyedInsert, PushBack, PushFront, Sink};

    // Registry operations (as a module, mirroring provider call sites)
    pub use memlane_registry::{self as registry, AllocationRecord, RegistryConfig, RegistryError};

    // Spans and inserters
    pub use memlane_iter::{
        back_inserter, copy_into, device_span, device_span_mut, front_inserter, host_span,
        host_span_mut, inserter, Span, SpanMut,
    };
}
