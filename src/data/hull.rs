use std::cmp::Ordering;
use std::ops::Deref;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar};

/// Boundary of the convex hull of a point set.
///
/// Vertices are listed clockwise, starting at the lowest (then leftmost) input
/// point. Hulls of fewer than three input points, and of colinear input, have
/// fewer than three vertices and are called degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T> {
  vertices: Vec<Point<T>>,
}

impl<T> Hull<T> {
  /// $O(1)$ Wrap an ordered vertex sequence without checking it.
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> Hull<T> {
    Hull { vertices }
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.vertices
  }

  /// A single point, a segment, or (for `n < 3` input) the input itself.
  pub fn is_degenerate(&self) -> bool {
    self.vertices.len() < 3
  }
}

impl<T: HullScalar> Hull<T> {
  /// $O(n \log n)$ Check that the vertices form a strictly convex polygon
  /// walked clockwise. Degenerate hulls are accepted as they are.
  pub fn validate(&self) -> Result<(), Error> {
    let vs = &self.vertices;
    if vs.len() < 3 {
      return Ok(());
    }

    let mut sorted = vs.clone();
    sorted.sort_unstable_by(|a, b| a.cmp_yx(b));
    if sorted.windows(2).any(|w| w[0].cmp_yx(&w[1]) == Ordering::Equal) {
      return Err(Error::DuplicatePoints);
    }

    let n = vs.len();
    for i in 0..n {
      let (a, b, c) = (&vs[i], &vs[(i + 1) % n], &vs[(i + 2) % n]);
      if !a.orientation(b, c).is_cw() {
        return Err(Error::ConvexViolation);
      }
    }
    // Local turns alone admit polygons that wind more than once.
    for w in vs[1..].windows(2) {
      if !vs[0].orientation(&w[0], &w[1]).is_cw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.vertices.as_slice() {
      [] => PointLocation::Outside,
      [a] if a == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] => {
        if a.orientation(b, pt).is_colinear() && within_box(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      vs => {
        let mut on_edge = false;
        for (i, a) in vs.iter().enumerate() {
          let b = &vs[(i + 1) % vs.len()];
          match a.orientation(b, pt) {
            crate::Orientation::CounterClockWise => return PointLocation::Outside,
            crate::Orientation::CoLinear => on_edge = true,
            crate::Orientation::ClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }
}

fn within_box<T: HullScalar>(a: &Point<T>, b: &Point<T>, pt: &Point<T>) -> bool {
  (0..2).all(|i| pt[i] >= a[i].min(b[i]) && pt[i] <= a[i].max(b[i]))
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &Self::Target {
    &self.vertices
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.vertices
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}
