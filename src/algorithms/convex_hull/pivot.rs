use crate::data::Point;
use crate::{Error, HullScalar};

/// $O(n)$ Split a point set into its pivot and the remaining points.
///
/// The pivot is the lowest point, ties broken by the lowest x-coordinate. If
/// the minimum occurs more than once, the first occurrence is the pivot and the
/// copies stay in the remainder. The remainder keeps the input order.
///
/// # Errors
/// Will return [`Error::InsufficientVertices`] iff the input set is empty.
///
/// # Examples
///
/// ```rust
/// # use graham::algorithms::convex_hull::select_pivot;
/// # use graham::data::Point;
/// let pts = vec![Point::new([2.0, 1.0]), Point::new([5.0, 0.0]), Point::new([3.0, 0.0])];
/// let (pivot, rest) = select_pivot(&pts).unwrap();
/// assert_eq!(pivot, Point::new([3.0, 0.0]));
/// assert_eq!(rest, vec![Point::new([2.0, 1.0]), Point::new([5.0, 0.0])]);
/// ```
pub fn select_pivot<T>(pts: &[Point<T>]) -> Result<(Point<T>, Vec<Point<T>>), Error>
where
  T: HullScalar,
{
  let (index, pivot) = pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp_yx(b))
    .ok_or(Error::InsufficientVertices)?;
  let rest = pts[..index].iter().chain(&pts[index + 1..]).copied().collect();
  Ok((*pivot, rest))
}
