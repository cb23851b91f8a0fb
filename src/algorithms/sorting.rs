//! Comparison sorts with an injected comparator.
//!
//! The hull builder never sorts on its own: it hands its polar comparator to a
//! [`Sorter`]. Any sorter that respects the comparator produces the same hull.
use std::cmp::Ordering;

mod heap;
mod insertion;
mod quick;

pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;

pub trait Sorter {
  /// Sort `items` in place so that `compare(items[i], items[i + 1]) != Greater`.
  fn sort_by<E, F>(&self, items: &mut [E], compare: F)
  where
    F: FnMut(&E, &E) -> Ordering;
}

/// The standard library's unstable sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSort;

impl Sorter for StdSort {
  fn sort_by<E, F>(&self, items: &mut [E], compare: F)
  where
    F: FnMut(&E, &E) -> Ordering,
  {
    items.sort_unstable_by(compare)
  }
}

impl<S: Sorter + ?Sized> Sorter for &S {
  fn sort_by<E, F>(&self, items: &mut [E], compare: F)
  where
    F: FnMut(&E, &E) -> Ordering,
  {
    (**self).sort_by(items, compare)
  }
}
