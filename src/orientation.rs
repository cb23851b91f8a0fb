use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  /// Left turn.
  CounterClockWise,
  /// Right turn.
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign of the cross product `(p2 - p1) x (p3 - p1)` decides the turn. No
  /// epsilon is applied: results that cancel to (or near) zero in floating point
  /// are taken at face value.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham::data::Point;
  /// # use graham::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    let cross = (p2[0] - p1[0]) * (p3[1] - p1[1]) - (p2[1] - p1[1]) * (p3[0] - p1[0]);
    if cross > T::zero() {
      CounterClockWise
    } else if cross < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn turns() {
    let origin = [0.0_f64, 0.0];
    assert_eq!(Orientation::new(&origin, &[4.0, 0.0], &[4.0, 4.0]), CounterClockWise);
    assert_eq!(Orientation::new(&origin, &[0.0, 4.0], &[4.0, 4.0]), ClockWise);
    assert_eq!(Orientation::new(&origin, &[1.0, 1.0], &[3.0, 3.0]), CoLinear);
    assert_eq!(Orientation::new(&origin, &origin, &origin), CoLinear);
  }

  #[test]
  fn nan_is_colinear() {
    assert_eq!(
      Orientation::new(&[f64::NAN, 0.0], &[1.0, 0.0], &[0.0, 1.0]),
      CoLinear
    );
  }

  #[proptest]
  fn orientation_reverse(
    #[strategy(any_point())] a: Point<f64>,
    #[strategy(any_point())] b: Point<f64>,
    #[strategy(any_point())] c: Point<f64>,
  ) {
    let abc = Orientation::new(&a, &b, &c);
    let cba = Orientation::new(&c, &b, &a);
    prop_assert_eq!(abc, cba.reverse());
  }

  #[proptest]
  fn orientation_rotate(
    #[strategy(any_point())] a: Point<f64>,
    #[strategy(any_point())] b: Point<f64>,
    #[strategy(any_point())] c: Point<f64>,
  ) {
    prop_assert_eq!(Orientation::new(&a, &b, &c), Orientation::new(&b, &c, &a));
  }
}
