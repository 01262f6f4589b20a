//! Image rendering for point density grids.
//!
//! - Color models: RGB <-> HSV / HSL and generic color adapters
//! - Heatmap: frequency field to single-hue raster
//! - PNG encoding of the raster

pub mod colorspace;
pub mod heatmap;
pub mod png;

pub use colorspace::{
    hsl_model, hsl_to_rgb, hsv_model, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, Color, ColorValue, Hsl,
    Hsv,
};
pub use heatmap::{render_heatmap, HeatmapStyle, MAX_IMAGE_PIXELS};
pub use png::{encode_png, write_png};
