//! Point-density heatmaps for address lists.
//!
//! Bins geographic points into a grid, normalizes the counts into a
//! `[0, 1]` frequency surface and paints it as a single-hue raster.
//!
//! # Architecture
//!
//! ```text
//! &[impl Location]
//!      │
//!      ▼
//! compute_bounding_rect(points, config.trim)
//!      │
//!      ▼
//! Histogram::with_aspect_ratio(config.width, &rect, config.aspect_ratio)
//!      │
//!      ├─► count_points_parallel (out-of-grid points are cropped)
//!      │
//!      ▼
//! FrequencyField::from_histogram(&histogram, config.normalization)
//!      │
//!      ▼
//! render_heatmap(&field, config.pixel_scale, &style) ──► RgbaImage ──► PNG
//! ```
//!
//! # Example
//!
//! ```
//! use citygrid::{render_points, HeatmapConfig, Point};
//!
//! let points = vec![
//!     Point::new(39.70, -105.00),
//!     Point::new(39.75, -104.95),
//!     Point::new(39.80, -104.90),
//! ];
//! let config = HeatmapConfig { width: 64, pixel_scale: 2, ..Default::default() };
//! let image = render_points(&points, &config).unwrap();
//! assert_eq!(image.width(), 128);
//! ```

pub mod pipeline;

pub use citygrid_common::{
    compute_bounding_rect, BoundingRect, CityGridError, CityGridResult, HeatmapConfig, Location,
    NormalizationRank, Point, TrimMode, DEFAULT_ASPECT_RATIO,
};
pub use density_grid::{CountSummary, FrequencyField, Histogram};
pub use pipeline::{render_points, Heatmap};
pub use renderer::{encode_png, write_png, HeatmapStyle};
