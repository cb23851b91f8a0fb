use std::cmp::Ordering;

use super::Sorter;

/// $O(n^2)$ Stable insertion sort. Fast on short or nearly sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
  fn sort_by<E, F>(&self, items: &mut [E], mut compare: F)
  where
    F: FnMut(&E, &E) -> Ordering,
  {
    insertion_sort(items, &mut compare)
  }
}

pub(super) fn insertion_sort<E, F>(items: &mut [E], compare: &mut F)
where
  F: FnMut(&E, &E) -> Ordering,
{
  for i in 1..items.len() {
    let mut j = i;
    while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
      items.swap(j - 1, j);
      j -= 1;
    }
  }
}
