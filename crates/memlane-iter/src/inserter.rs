//! Inserter adapters over the container-shape traits.
//!
//! Each adapter wraps one insertion shape — tail append, head append, or
//! keyed insert — behind the one-method [`Sink`] interface. The shape is
//! chosen when the adapter is constructed; nothing downstream inspects
//! the target again.

use memlane_core::{KeyedInsert, PushBack, PushFront, Sink};

/// Copy every value from `source` into `sink`.
///
/// The one generic copy routine: written against [`Sink`] alone, so it
/// works unchanged with [`BackInserter`], [`FrontInserter`], [`Inserter`],
/// and any future adapter.
pub fn copy_into<I, S>(source: I, sink: &mut S)
where
    I: IntoIterator<Item = S::Item>,
    S: Sink,
{
    for value in source {
        sink.put(value);
    }
}

/// [`Sink`] adapter over a tail-append target.
#[derive(Debug)]
pub struct BackInserter<'a, C: PushBack> {
    target: &'a mut C,
}

/// Wrap a tail-append target in a [`Sink`] adapter.
pub fn back_inserter<C: PushBack>(target: &mut C) -> BackInserter<'_, C> {
    BackInserter { target }
}

impl<C: PushBack> Sink for BackInserter<'_, C> {
    type Item = C::Item;

    fn put(&mut self, item: C::Item) {
        self.target.push_back(item);
    }
}

/// [`Sink`] adapter over a head-append target.
///
/// The adapter hands values to the target in call order and never
/// reorders them itself. Whether earlier values end up after later ones
/// is the wrapped target's own head-insertion semantics; a target whose
/// `push_front` actually appends will simply accumulate values in call
/// order.
#[derive(Debug)]
pub struct FrontInserter<'a, C: PushFront> {
    target: &'a mut C,
}

/// Wrap a head-append target in a [`Sink`] adapter.
pub fn front_inserter<C: PushFront>(target: &mut C) -> FrontInserter<'_, C> {
    FrontInserter { target }
}

impl<C: PushFront> Sink for FrontInserter<'_, C> {
    type Item = C::Item;

    fn put(&mut self, item: C::Item) {
        self.target.push_front(item);
    }
}

/// [`Sink`] adapter over a keyed-insert target.
///
/// The insertion position is chosen by the target per value.
#[derive(Debug)]
pub struct Inserter<'a, C: KeyedInsert> {
    target: &'a mut C,
}

/// Wrap a keyed-insert target in a [`Sink`] adapter.
pub fn inserter<C: KeyedInsert>(target: &mut C) -> Inserter<'_, C> {
    Inserter { target }
}

impl<C: KeyedInsert> Sink for Inserter<'_, C> {
    type Item = C::Item;

    fn put(&mut self, item: C::Item) {
        self.target.insert(item);
    }
}
