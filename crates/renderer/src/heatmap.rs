//! Single-hue density heatmap rendering.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use citygrid_common::{CityGridError, CityGridResult};
use density_grid::FrequencyField;

use crate::colorspace::{hsl_to_rgb, Hsl};

/// Upper bound on output pixels (1 GiB of RGBA).
pub const MAX_IMAGE_PIXELS: usize = 1 << 28;

/// Colors for the density ramp. Only lightness varies with density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapStyle {
    /// HSL hue of every cell.
    pub hue: f64,
    /// HSL saturation of every cell.
    pub saturation: f64,
    /// How far lightness drops at full density; below 1.0 so the densest
    /// cell never turns black.
    pub max_lightness: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            hue: 0.5944,
            saturation: 0.92,
            max_lightness: 0.9,
        }
    }
}

impl HeatmapStyle {
    /// Lightness for a frequency in `[0, 1]`.
    ///
    /// The square root blunts the extremes so mid-density cells stay
    /// distinguishable. Zero density is white (`l = 1.0`).
    pub fn lightness(&self, frequency: f64) -> f64 {
        let v = if frequency != 0.0 {
            frequency.sqrt()
        } else {
            0.0
        };
        1.0 - v * self.max_lightness
    }

    /// Opaque pixel color for a frequency.
    pub fn color(&self, frequency: f64) -> Rgba<u8> {
        let (r, g, b) = hsl_to_rgb(Hsl::new(self.hue, self.saturation, self.lightness(frequency)));
        Rgba([r, g, b, 255])
    }
}

/// Render a frequency field as a heatmap.
///
/// Every cell becomes a `pixel_scale x pixel_scale` solid block. Grid row 0
/// is the southern edge, so rows are flipped: cell row `y` is painted at
/// image row `(height - y - 1) * pixel_scale`.
///
/// # Returns
/// An RGBA image of `width * pixel_scale` by `height * pixel_scale` pixels,
/// fully opaque.
pub fn render_heatmap(
    field: &FrequencyField,
    pixel_scale: usize,
    style: &HeatmapStyle,
) -> CityGridResult<RgbaImage> {
    let (width, height) = (field.width(), field.height());
    if pixel_scale == 0 {
        return Err(CityGridError::invalid_parameter("pixel_scale", "must be > 0"));
    }

    let image_width = checked_dimension(width, pixel_scale)?;
    let image_height = checked_dimension(height, pixel_scale)?;
    check_image_size(image_width, image_height)?;

    let mut image = RgbaImage::new(image_width, image_height);
    let line_len = width * pixel_scale * 4;
    let values = field.values();

    // One band per grid row, top band holding the northernmost row.
    let pixels: &mut [u8] = &mut image;
    pixels
        .par_chunks_mut(line_len * pixel_scale)
        .enumerate()
        .for_each(|(band, band_pixels)| {
            let y = height - band - 1;
            let row = &values[y * width..(y + 1) * width];
            let colors: Vec<Rgba<u8>> = row.iter().map(|&v| style.color(v)).collect();

            for line in band_pixels.chunks_exact_mut(line_len) {
                for (block, color) in line.chunks_exact_mut(pixel_scale * 4).zip(&colors) {
                    for px in block.chunks_exact_mut(4) {
                        px.copy_from_slice(&color.0);
                    }
                }
            }
        });

    tracing::debug!(
        width,
        height,
        pixel_scale,
        image_width,
        image_height,
        "Rendered heatmap"
    );

    Ok(image)
}

fn checked_dimension(cells: usize, pixel_scale: usize) -> CityGridResult<u32> {
    cells
        .checked_mul(pixel_scale)
        .and_then(|px| u32::try_from(px).ok())
        .ok_or_else(|| {
            CityGridError::invalid_parameter(
                "pixel_scale",
                format!("{} cells x {} px does not fit an image", cells, pixel_scale),
            )
        })
}

fn check_image_size(image_width: u32, image_height: u32) -> CityGridResult<()> {
    let pixels = (image_width as usize).checked_mul(image_height as usize);
    match pixels {
        Some(px) if px <= MAX_IMAGE_PIXELS => Ok(()),
        _ => Err(CityGridError::invalid_parameter(
            "pixel_scale",
            format!(
                "{}x{} image exceeds {} pixels",
                image_width, image_height, MAX_IMAGE_PIXELS
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightness_endpoints() {
        let style = HeatmapStyle::default();
        assert_eq!(style.lightness(0.0), 1.0);
        assert!((style.lightness(1.0) - 0.1).abs() < 1e-12);
        assert!((style.lightness(0.25) - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_empty_cell_is_white() {
        assert_eq!(HeatmapStyle::default().color(0.0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_full_density_is_dark_blue() {
        let Rgba([r, g, b, a]) = HeatmapStyle::default().color(1.0);
        assert_eq!(a, 255);
        assert!(b > r && b > g);
        assert!(r < 64 && b < 128);
    }

    #[test]
    fn test_zero_scale_rejected() {
        let field = FrequencyField::from_values(1, 1, vec![0.5]).unwrap();
        assert!(render_heatmap(&field, 0, &HeatmapStyle::default()).is_err());
    }
}
