//! # Sequence capabilities
//!
//! Two traits describe what the generic algorithms need from a container:
//!
//! - [`Sequence`]: ordered, sized, traversable (slices, arrays, `Vec`,
//!   `VecDeque`).
//! - [`GrowableSequence`]: a `Sequence` that can reserve room, push at the
//!   back, and truncate back to a previous length (`Vec`, `VecDeque`).
//!
//! Read-only sources only need `Sequence`; destinations need
//! `GrowableSequence`.

use std::collections::{TryReserveError, VecDeque};

/// An ordered collection with a known length and forward traversal.
pub trait Sequence {
    /// Element type
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// `true` when the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements front to back.
    fn items(&self) -> impl Iterator<Item = &Self::Item> + '_;
}

/// A [`Sequence`] that can grow at the back.
pub trait GrowableSequence: Sequence {
    /// Reserves room for at least `additional` more elements.
    ///
    /// On error the sequence is unchanged.
    fn try_grow(&mut self, additional: usize) -> Result<(), TryReserveError>;

    /// Appends one element. Must not reallocate after a successful
    /// `try_grow` covering it.
    fn push_item(&mut self, item: Self::Item);

    /// Shortens the sequence to `len` elements, dropping the tail.
    fn truncate_to(&mut self, len: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> + '_ {
        <[T]>::iter(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.as_slice().iter()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.as_slice().iter()
    }
}

impl<T> GrowableSequence for Vec<T> {
    #[inline]
    fn try_grow(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.try_reserve(additional)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> + '_ {
        VecDeque::iter(self)
    }
}

impl<T> GrowableSequence for VecDeque<T> {
    #[inline]
    fn try_grow(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.try_reserve(additional)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }
}
