//! Core types and bit primitives for the memlane memory registry.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the memlane workspace:
//! the execution [`Domain`] tag, the opaque [`Address`] key, the portable
//! [`BitWord`] primitives, and the container-shape traits consumed by the
//! inserter adapters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod address;
pub mod bit;
pub mod domain;
pub mod traits;

// Public re-exports for the primary API surface.
pub use address::Address;
pub use bit::BitWord;
pub use domain::Domain;
pub use traits::{KeyedInsert, PushBack, PushFront, Sink};
