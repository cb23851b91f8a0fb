use std::cmp::Ordering;

use super::{select_pivot, sort_around};
use crate::algorithms::sorting::{Sorter, StdSort};
use crate::data::{Hull, Point};
use crate::{Error, HullScalar};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All vertices are input points, none repeated.
//    No input points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The input is not modified.
///
/// The vertices of the hull are listed clockwise, starting at the lowest
/// (then leftmost) input point. Degenerate input gives a degenerate hull:
/// * fewer than three points: the input, unchanged;
/// * all points identical: that single point;
/// * all points colinear: the two end points of the line segment.
///
/// # Errors
/// Will return an error iff the input set is empty.
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use graham::algorithms::convex_hull;
/// # use graham::data::Point;
/// # use graham::Error;
/// let empty_set: Vec<Point<f64>> = vec![];
/// assert_eq!(
///   convex_hull(&empty_set).err(),
///   Some(Error::InsufficientVertices))
/// # }
/// ```
///
/// ```rust
/// # pub fn main() {
/// # use graham::algorithms::convex_hull;
/// # use graham::data::Point;
/// let colinear = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([3.0, 3.0]),
/// ];
/// let hull = convex_hull(&colinear).unwrap();
/// assert_eq!(hull.vertices(), &[Point::new([0.0, 0.0]), Point::new([3.0, 3.0])]);
/// # }
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: &[Point<T>]) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  convex_hull_with(pts, StdSort)
}

/// $O(n \log n)$ Like [`convex_hull`] but the angular sort is delegated to `sorter`.
///
/// ```rust
/// # use graham::algorithms::convex_hull_with;
/// # use graham::algorithms::sorting::HeapSort;
/// # use graham::data::Point;
/// let pts = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([4.0, 0.0]),
///   Point::new([0.0, 4.0]),
///   Point::new([1.0, 1.0]),
/// ];
/// let hull = convex_hull_with(&pts, HeapSort).unwrap();
/// assert_eq!(hull.len(), 3);
/// ```
pub fn convex_hull_with<T, S>(pts: &[Point<T>], sorter: S) -> Result<Hull<T>, Error>
where
  T: HullScalar,
  S: Sorter,
{
  if pts.is_empty() {
    return Err(Error::InsufficientVertices);
  }
  if pts.len() < 3 {
    log::trace!("{} points, nothing to reduce", pts.len());
    return Ok(Hull::new_unchecked(pts.to_vec()));
  }

  let (pivot, mut rest) = select_pivot(pts)?;
  rest.retain(|pt| pt != &pivot);
  log::debug!("pivot {:?}, {} other distinct candidates", pivot, rest.len());

  sort_around(&pivot, &mut rest, sorter);
  rest.dedup();

  let (first, last) = match (rest.first(), rest.last()) {
    (Some(first), Some(last)) => (*first, *last),
    _ => {
      log::debug!("all {} points coincide", pts.len());
      return Ok(Hull::new_unchecked(vec![pivot]));
    }
  };
  // Every point lies on a single ray from the pivot.
  if pivot.orientation(&first, &last).is_colinear() {
    log::debug!("all {} points are colinear", pts.len());
    let farthest = rest
      .iter()
      .copied()
      .max_by(|p, q| pivot.cmp_distance_to(p, q))
      .unwrap_or(first);
    return Ok(Hull::new_unchecked(vec![pivot, farthest]));
  }

  let rays = farthest_per_ray(&pivot, rest);
  let vertices = scan(pivot, &rays);
  log::debug!(
    "{} input points, {} after ray reduction, {} hull vertices",
    pts.len(),
    rays.len(),
    vertices.len()
  );
  Ok(Hull::new_unchecked(vertices))
}

// Keep the farthest point of every run of points sharing a ray from the pivot.
// The nearer points lie on the segment between it and the pivot and cannot be
// hull vertices. Within a run, atan2 may disagree with the orientation test by
// an ulp, so the farthest point is not necessarily the first.
fn farthest_per_ray<T>(pivot: &Point<T>, sorted: Vec<Point<T>>) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let mut rays: Vec<Point<T>> = Vec::with_capacity(sorted.len());
  for pt in sorted {
    match rays.last_mut() {
      Some(prev) if pivot.orientation(&*prev, &pt).is_colinear() => {
        if pivot.cmp_distance_to(&*prev, &pt) == Ordering::Less {
          *prev = pt;
        }
      }
      _ => rays.push(pt),
    }
  }
  rays
}

// `rays` holds at least two points in strictly decreasing polar angle around the
// pivot. The stack starts with the edge from the minimum-angle point to the
// pivot and walks clockwise. Reading the stack bottom to top never gives a
// left turn or a colinear triple.
fn scan<T>(pivot: Point<T>, rays: &[Point<T>]) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let start = match rays.last() {
    Some(start) => *start,
    None => return vec![pivot],
  };
  let mut hull: Vec<Point<T>> = Vec::with_capacity(rays.len() + 2);
  hull.push(start);
  hull.push(pivot);
  for pt in rays {
    while hull.len() >= 2 && !hull[hull.len() - 2].orientation(&hull[hull.len() - 1], pt).is_cw() {
      hull.pop();
    }
    hull.push(*pt);
  }
  // The sweep ends where it started.
  if hull.len() > 1 && hull.first() == hull.last() {
    hull.pop();
  }
  // Start at the pivot.
  hull.rotate_left(1);
  hull
}
