//! # Append
//!
//! Concatenates a source sequence onto the back of a destination, in place.
//!
//! ## Guarantees
//!
//! - One reservation, one pass over the source.
//! - Empty source: the destination is not touched at all.
//! - Reservation failure: `FerruleError::Reserve`, destination unchanged.
//! - A panicking `Clone` truncates the destination back to its original
//!   length before the panic propagates.
//!
//! `source` and `destination` can never alias: one is borrowed shared, the
//! other exclusively.

use crate::error::{FerruleError, FerruleResult};
use crate::sequence::{GrowableSequence, Sequence};

/// Appends clones of every element of `source` to `destination`.
///
/// Returns the destination's new length.
///
/// ```
/// use ferrule_core::append::append;
///
/// let mut destination = vec![4, 5];
/// let len = append(&[1, 2, 3], &mut destination).unwrap();
/// assert_eq!(len, 5);
/// assert_eq!(destination, vec![4, 5, 1, 2, 3]);
/// ```
pub fn append<S, D>(source: &S, destination: &mut D) -> FerruleResult<usize>
where
    S: Sequence + ?Sized,
    D: GrowableSequence<Item = S::Item> + ?Sized,
    S::Item: Clone,
{
    let additional = source.len();
    if additional == 0 {
        return Ok(destination.len());
    }

    destination
        .try_grow(additional)
        .map_err(|err| FerruleError::Reserve { requested: additional, source: err })?;

    let mut guard = Rollback::new(destination);
    for item in source.items() {
        guard.sequence.push_item(item.clone());
    }
    Ok(guard.commit())
}

/// By-value form of [`append`], for call chains.
///
/// ```
/// use ferrule_core::append::appended;
///
/// let joined = appended(&vec!['c'], vec!['a', 'b']).unwrap();
/// assert_eq!(joined, vec!['a', 'b', 'c']);
/// ```
pub fn appended<S, D>(source: &S, mut destination: D) -> FerruleResult<D>
where
    S: Sequence + ?Sized,
    D: GrowableSequence<Item = S::Item>,
    S::Item: Clone,
{
    append(source, &mut destination)?;
    Ok(destination)
}

/// Truncates the sequence to its entry length on drop unless committed.
struct Rollback<'a, D: GrowableSequence + ?Sized> {
    sequence: &'a mut D,
    original_len: usize,
    committed: bool,
}

impl<'a, D: GrowableSequence + ?Sized> Rollback<'a, D> {
    fn new(sequence: &'a mut D) -> Self {
        let original_len = sequence.len();
        Self {
            sequence,
            original_len,
            committed: false,
        }
    }

    fn commit(mut self) -> usize {
        self.committed = true;
        self.sequence.len()
    }
}

impl<D: GrowableSequence + ?Sized> Drop for Rollback<'_, D> {
    fn drop(&mut self) {
        if !self.committed {
            self.sequence.truncate_to(self.original_len);
        }
    }
}
