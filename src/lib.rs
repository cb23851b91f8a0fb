#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets with [Graham's scan][wiki].
//!
//! ```rust
//! # use graham::algorithms::convex_hull;
//! # use graham::data::Point;
//! let square = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([0.0, 4.0]),
//!   Point::new([4.0, 4.0]),
//!   Point::new([4.0, 0.0]),
//!   Point::new([2.0, 2.0]),
//! ];
//! let hull = convex_hull(&square).unwrap();
//! assert_eq!(hull.len(), 4);
//! ```
//!
//! [wiki]: https://en.wikipedia.org/wiki/Graham_scan
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The input set is empty. There is no hull of zero points.
  InsufficientVertices,
  DuplicatePoints,
  /// Three consecutive hull vertices are either colinear or turn left.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type accepted by the hull algorithms.
///
/// Orientation tests are computed with plain floating point arithmetic. Inputs
/// where the cross product of three nearly colinear points cancels to the wrong
/// sign may produce a slightly wrong hull. Exact predicates are out of scope.
pub trait HullScalar: Float + TotalOrd + Debug {
  /// Maps `-0.0` to `0.0` so that total comparisons agree with `==` on zero.
  fn canonical(self) -> Self {
    self + Self::zero()
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl HullScalar for $ty {}
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
