use std::cmp::Ordering;

use crate::algorithms::sorting::Sorter;
use crate::data::Point;
use crate::{HullScalar, TotalOrd};

/// Angular order around a fixed origin, largest polar angle first.
///
/// Points at the same angle are ordered by decreasing distance from the origin,
/// so the farthest point of every ray comes first. Identical points compare
/// equal. The order is total: ties in the angle are always resolved by distance,
/// and points with equal angle and distance are identical.
#[derive(Debug, Clone, Copy)]
pub struct ReversePolarOrder<T> {
  origin: Point<T>,
}

impl<T: HullScalar> ReversePolarOrder<T> {
  pub fn new(origin: Point<T>) -> ReversePolarOrder<T> {
    ReversePolarOrder { origin }
  }

  pub fn origin(&self) -> &Point<T> {
    &self.origin
  }

  pub fn compare(&self, a: &Point<T>, b: &Point<T>) -> Ordering {
    if a == b {
      return Ordering::Equal;
    }
    let origin = &self.origin;
    TotalOrd::total_cmp(&origin.angle_to(b), &origin.angle_to(a))
      .then_with(|| origin.cmp_distance_to(b, a))
  }
}

/// $O(n \log n)$ Sort `pts` by [`ReversePolarOrder`] around `origin`.
pub fn sort_around<T, S>(origin: &Point<T>, pts: &mut [Point<T>], sorter: S)
where
  T: HullScalar,
  S: Sorter,
{
  let order = ReversePolarOrder::new(*origin);
  sorter.sort_by(pts, |a, b| order.compare(a, b));
}
