use std::cmp::Ordering;

use super::Sorter;

/// $O(n \log n)$ In-place heap sort. Not stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl Sorter for HeapSort {
  fn sort_by<E, F>(&self, items: &mut [E], mut compare: F)
  where
    F: FnMut(&E, &E) -> Ordering,
  {
    let n = items.len();
    for i in (0..n / 2).rev() {
      sift_down(items, i, n, &mut compare);
    }
    for end in (1..n).rev() {
      items.swap(0, end);
      sift_down(items, 0, end, &mut compare);
    }
  }
}

// Restore the max-heap property below `root`, ignoring indices >= `end`.
fn sift_down<E, F>(items: &mut [E], mut root: usize, end: usize, compare: &mut F)
where
  F: FnMut(&E, &E) -> Ordering,
{
  loop {
    let left = 2 * root + 1;
    let right = left + 1;
    let mut largest = root;
    if left < end && compare(&items[left], &items[largest]) == Ordering::Greater {
      largest = left;
    }
    if right < end && compare(&items[right], &items[largest]) == Ordering::Greater {
      largest = right;
    }
    if largest == root {
      return;
    }
    items.swap(root, largest);
    root = largest;
  }
}
