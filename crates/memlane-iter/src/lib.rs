//! Span resolution and inserter adapters for registered allocations.
//!
//! Given a bare pointer, [`host_span`]/[`device_span`] (and their `_mut`
//! variants) recover a bounded `[begin, end)` view by consulting the
//! matching allocation registry. The inserter adapters generalize
//! tail-append, head-append, and keyed-insert container shapes behind the
//! one-method [`Sink`](memlane_core::Sink) interface, so a copy routine
//! written once drives any of them.
//!
//! # Safety
//!
//! This is the only memlane crate that may contain `unsafe` code: slice
//! materialization from registered pointers in [`span`]. Every `unsafe`
//! block carries a `// SAFETY:` comment; span construction and pointer
//! iteration themselves are safe, since no dereference happens until the
//! caller opts in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod inserter;
pub mod span;

// Public re-exports for the primary API surface.
pub use inserter::{
    back_inserter, copy_into, front_inserter, inserter, BackInserter, FrontInserter, Inserter,
};
pub use span::{
    device_span, device_span_mut, host_span, host_span_mut, span_in, span_in_mut, Span, SpanMut,
};
