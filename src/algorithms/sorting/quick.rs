use std::cmp::Ordering;

use super::insertion::insertion_sort;
use super::Sorter;

/// $O(n \log n)$ expected. Quicksort with a median-of-three pivot.
///
/// Partitions of at most `insertion_threshold` elements are finished with
/// insertion sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort {
  pub insertion_threshold: usize,
}

impl QuickSort {
  pub fn with_insertion_threshold(insertion_threshold: usize) -> QuickSort {
    QuickSort {
      insertion_threshold,
    }
  }
}

impl Sorter for QuickSort {
  fn sort_by<E, F>(&self, items: &mut [E], mut compare: F)
  where
    F: FnMut(&E, &E) -> Ordering,
  {
    quick_sort(items, self.insertion_threshold, &mut compare)
  }
}

fn quick_sort<E, F>(mut items: &mut [E], threshold: usize, compare: &mut F)
where
  F: FnMut(&E, &E) -> Ordering,
{
  // Recurse into the smaller half and loop on the larger one.
  loop {
    if items.len() <= 1 {
      return;
    }
    if items.len() <= threshold {
      insertion_sort(items, compare);
      return;
    }
    let pivot = select_pivot(items, compare);
    let mid = partition(items, pivot, compare);
    let (left, rest) = std::mem::take(&mut items).split_at_mut(mid);
    let right = &mut rest[1..];
    if left.len() < right.len() {
      quick_sort(left, threshold, compare);
      items = right;
    } else {
      quick_sort(right, threshold, compare);
      items = left;
    }
  }
}

// Index of the median of the first, middle, and last element.
fn select_pivot<E, F>(items: &[E], compare: &mut F) -> usize
where
  F: FnMut(&E, &E) -> Ordering,
{
  let (lo, mid, hi) = (0, items.len() / 2, items.len() - 1);
  let less = |compare: &mut F, a: usize, b: usize| compare(&items[a], &items[b]) == Ordering::Less;
  if less(compare, lo, mid) {
    if less(compare, mid, hi) {
      mid
    } else if less(compare, lo, hi) {
      hi
    } else {
      lo
    }
  } else if less(compare, lo, hi) {
    lo
  } else if less(compare, mid, hi) {
    hi
  } else {
    mid
  }
}

// Lomuto partition. Returns the final index of the pivot; everything before it
// compares less than or equal to the pivot.
fn partition<E, F>(items: &mut [E], pivot: usize, compare: &mut F) -> usize
where
  F: FnMut(&E, &E) -> Ordering,
{
  let last = items.len() - 1;
  items.swap(pivot, last);
  let mut store = 0;
  for i in 0..last {
    if compare(&items[i], &items[last]) != Ordering::Greater {
      items.swap(i, store);
      store += 1;
    }
  }
  items.swap(last, store);
  store
}
