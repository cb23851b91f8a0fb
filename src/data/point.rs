use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation, TotalOrd};

/// Immutable planar point. Equality is exact coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    let [x, y] = self.array.clone();
    Point { array: [f(x), f(y)] }
  }
}

impl<T: HullScalar> Point<T> {
  /// Lexicographic order on `(y, x)`. The lowest point in this order is
  /// guaranteed to be a vertex of the convex hull.
  pub fn cmp_yx(&self, other: &Point<T>) -> Ordering {
    let key = |pt: &Point<T>| (pt.array[1].canonical(), pt.array[0].canonical());
    key(self).total_cmp(&key(other))
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    let dx = rhs.array[0] - self.array[0];
    let dy = rhs.array[1] - self.array[1];
    dx * dx + dy * dy
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    TotalOrd::total_cmp(
      &self.squared_euclidean_distance(p).canonical(),
      &self.squared_euclidean_distance(q).canonical(),
    )
  }

  /// Polar angle of `other` as seen from `self`, measured counter-clockwise from
  /// the positive x-axis. The result lies in `(-pi, pi]`.
  pub fn angle_to(&self, other: &Point<T>) -> T {
    // Signed zeros would put equal points at angles 0 and pi.
    let dx = (other.array[0] - self.array[0]).canonical();
    let dy = (other.array[1] - self.array[1]).canonical();
    dy.atan2(dx)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.array[0], self.array[1])
  }
}
