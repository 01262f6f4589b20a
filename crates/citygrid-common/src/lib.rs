//! Common types and utilities shared across the citygrid crates.

pub mod bbox;
pub mod config;
pub mod error;
pub mod point;

pub use bbox::{compute_bounding_rect, Axis, BoundingRect, TrimMode};
pub use config::{HeatmapConfig, NormalizationRank, DEFAULT_ASPECT_RATIO};
pub use error::{CityGridError, CityGridResult};
pub use point::{Location, Point};
