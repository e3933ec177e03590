//! Per-domain allocation registries for the memlane workspace.
//!
//! An external allocation provider registers each allocation's base
//! address, element count, and element size immediately after allocating,
//! and unregisters immediately before freeing. Everything else — size
//! recovery, span resolution, leak accounting — is derived from a bare
//! pointer by consulting the registry for the matching [`Domain`].
//!
//! The registry stores metadata only. It never owns, touches, or
//! dereferences the memory it describes.
//!
//! # Query semantics
//!
//! Queries are defensive by design: an address that was never registered,
//! was already unregistered, sits inside an allocation rather than at its
//! base, or is misaligned for the requested element type yields a
//! zero/empty result, never an error. The only hard failure in this crate
//! is [`RegistryError::DuplicateAllocation`], which indicates a provider
//! bug.
//!
//! [`Domain`]: memlane_core::Domain

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod global;
pub mod record;
pub mod table;

// Public re-exports for the primary API surface.
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use global::{
    allocation_count, deallocation_count, domain_of, init, live_allocations, lookup, register,
    reset, size_bytes, sized_len, unregister,
};
pub use record::AllocationRecord;
pub use table::RegistryTable;
