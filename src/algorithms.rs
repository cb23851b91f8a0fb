pub mod convex_hull;
pub mod sorting;

#[doc(inline)]
pub use convex_hull::graham_scan::{convex_hull, convex_hull_with};
