pub mod graham_scan;
pub mod pivot;
pub mod polar_order;

pub use pivot::select_pivot;
pub use polar_order::{sort_around, ReversePolarOrder};
