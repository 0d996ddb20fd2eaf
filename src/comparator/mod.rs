//! Ordering predicates shared by every sort and search routine.
//!
//! A comparator answers a single question: does `a` precede `b`? Two values
//! are equivalent when neither precedes the other.

/// Binary "precedes" predicate over values of type `T`.
pub trait Comparator<T: ?Sized> {
    /// Returns true when `a` strictly precedes `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;

    /// Returns true when neither value precedes the other.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.precedes(a, b) && !self.precedes(b, a)
    }
}

/// Natural (`Ord`) ordering, lexicographic for strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverts another comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.0.precedes(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
