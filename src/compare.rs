//! Comparator abstraction.
//!
//! The queue is ordered by a caller-supplied comparator rather than a
//! blanket `T: Ord` bound, so the same element type can be queued under
//! different orderings and the comparator can close over external context
//! (tie-break tables, clock epochs, and so on).

use std::cmp::Ordering;

/// A total order over queue elements.
///
/// `compare` must be a total order: if it is inconsistent the queue's
/// structure silently degrades, exactly as with a broken `Ord` impl and
/// `BinaryHeap`. Returning [`Ordering::Less`] means `a` has the *higher*
/// priority (the queue is a min-heap).
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their own [`Ord`] implementation.
///
/// This is the default comparator used by [`PriQueue::new`](crate::PriQueue::new).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrd;

impl<T: Ord> Compare<T> for NaturalOrd {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Wraps any `Fn(&T, &T) -> Ordering` as a comparator.
///
/// # Example
///
/// ```rust
/// use pri_queue::{FnCompare, PriQueue};
///
/// // A max-queue over i32, by reversing the natural order.
/// let mut pq = PriQueue::with_comparator(FnCompare(|a: &i32, b: &i32| b.cmp(a)));
/// pq.insert(1);
/// pq.insert(5);
/// pq.insert(3);
/// assert_eq!(pq.pop_min(), Some(5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<T, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
