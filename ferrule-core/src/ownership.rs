//! # Owned clones
//!
//! Produces heap-owned copies of values. The returned `Box` is the owning
//! handle: dropping it releases the copy, and it never aliases the input.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | `clone_owned` | `&T` | `Box<T>` |
//! | `clone_optional` | `Option<&T>` | `Option<Box<T>>` |
//!
//! Allocation failure goes through the global allocator's
//! `handle_alloc_error`, which aborts the process.

/// Clones `value` into a new heap allocation owned by the caller.
///
/// ```
/// use ferrule_core::ownership::clone_owned;
///
/// let original = 42;
/// let copy = clone_owned(&original);
/// assert_eq!(*copy, 42);
/// ```
#[inline]
pub fn clone_owned<T: Clone>(value: &T) -> Box<T> {
    Box::new(value.clone())
}

/// Clones the referenced value, if any.
///
/// `None` short-circuits without touching the allocator.
///
/// ```
/// use ferrule_core::ownership::clone_optional;
///
/// assert_eq!(clone_optional::<String>(None), None);
/// let name = String::from("sil");
/// assert_eq!(clone_optional(Some(&name)).as_deref(), Some(&name));
/// ```
#[inline]
pub fn clone_optional<T: Clone>(value: Option<&T>) -> Option<Box<T>> {
    value.map(clone_owned)
}
