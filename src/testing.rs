// Strategies for points and point sets.
//
// Coordinates are small integers stored as floats. Products of their
// differences are exact, so orientation tests on generated points never suffer
// from rounding and properties can be checked exactly.
use crate::data::Point;

use proptest::collection::*;
use proptest::prelude::*;

const EXTENT: i16 = 100;

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (-EXTENT..=EXTENT, -EXTENT..=EXTENT).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn any_points(max: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_point(), 0..max)
}

// A tiny grid produces plenty of duplicates and colinear triples.
pub fn any_grid_points(max: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(
    (-3i16..=3, -3i16..=3).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)])),
    0..max,
  )
}

// Points on a single line, in random order and possibly repeated.
pub fn colinear_points(max: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  let direction = (-5i16..=5, -5i16..=5).prop_filter("direction must not vanish", |d| *d != (0, 0));
  (any_point(), direction, vec(-10i16..=10, 1..max)).prop_map(|(base, (dx, dy), steps)| {
    steps
      .into_iter()
      .map(|k| {
        Point::new([
          base.x_coord() + f64::from(k * dx),
          base.y_coord() + f64::from(k * dy),
        ])
      })
      .collect()
  })
}

// Two points on one ray from the origin, `near` and `far = k * near`, with
// arbitrary fractional coordinates. The product is rounded, so atan2 and the
// orientation test do not always agree on the pair.
pub fn float_ray() -> impl Strategy<Value = (Point<f64>, Point<f64>)> {
  (0.001f64..10.0, 0.001f64..10.0, 2u32..50).prop_map(|(x, y, k)| {
    let k = f64::from(k);
    (Point::new([x, y]), Point::new([x * k, y * k]))
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_strategy::proptest;

  #[proptest]
  fn colinear_points_are_colinear(#[strategy(colinear_points(20))] pts: Vec<Point<f64>>) {
    for w in pts.windows(3) {
      prop_assert!(w[0].orientation(&w[1], &w[2]).is_colinear());
    }
  }
}
