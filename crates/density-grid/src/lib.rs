//! Density grids for geographic point sets.
//!
//! Turns a list of points into a normalized density surface:
//!
//! ```text
//! points
//!   │
//!   ▼
//! compute_bounding_rect(points, TrimMode)
//!   │
//!   ▼
//! Histogram::new(width, &rect)          height from the aspect ratio
//!   │
//!   ├─► count_points / count_points_parallel
//!   │
//!   ▼
//! FrequencyField::from_histogram(&h, NormalizationRank)
//!   │
//!   ▼
//! values in [0, 1], row-major, row 0 = southernmost
//! ```

pub mod frequency;
pub mod histogram;

pub use frequency::FrequencyField;
pub use histogram::{CountSummary, Histogram};
