//! End-to-end heatmap generation.

use std::path::Path;

use image::RgbaImage;

use citygrid_common::{compute_bounding_rect, BoundingRect, CityGridResult, HeatmapConfig, Location};
use density_grid::{CountSummary, FrequencyField, Histogram};
use renderer::{encode_png, render_heatmap, write_png, HeatmapStyle};

/// Every intermediate stage of one heatmap run.
#[derive(Debug, Clone)]
pub struct Heatmap {
    pub rect: BoundingRect,
    pub histogram: Histogram,
    pub summary: CountSummary,
    pub field: FrequencyField,
    pub image: RgbaImage,
}

impl Heatmap {
    /// Build a heatmap over the extent of `locations` with the default style.
    pub fn build<L: Location + Sync>(
        locations: &[L],
        config: &HeatmapConfig,
    ) -> CityGridResult<Self> {
        Self::build_with_style(locations, config, &HeatmapStyle::default())
    }

    /// Build a heatmap over the extent of `locations`.
    pub fn build_with_style<L: Location + Sync>(
        locations: &[L],
        config: &HeatmapConfig,
        style: &HeatmapStyle,
    ) -> CityGridResult<Self> {
        config.validate()?;
        let rect = compute_bounding_rect(locations, config.trim)?;
        Self::build_in_rect(locations, rect, config, style)
    }

    /// Build a heatmap over a fixed rectangle, ignoring `config.trim`.
    ///
    /// Useful to render several point sets onto the same viewport.
    pub fn build_in_rect<L: Location + Sync>(
        locations: &[L],
        rect: BoundingRect,
        config: &HeatmapConfig,
        style: &HeatmapStyle,
    ) -> CityGridResult<Self> {
        config.validate()?;

        let mut histogram = Histogram::with_aspect_ratio(config.width, &rect, config.aspect_ratio)?;
        let summary = histogram.count_points_parallel(locations);
        let field = FrequencyField::from_histogram(&histogram, config.normalization)?;
        let image = render_heatmap(&field, config.pixel_scale, style)?;

        tracing::info!(
            points = locations.len(),
            counted = summary.counted,
            dropped = summary.dropped,
            width = histogram.width(),
            height = histogram.height(),
            denominator = field.denominator(),
            trim = %config.trim,
            "Built heatmap"
        );

        Ok(Self {
            rect,
            histogram,
            summary,
            field,
            image,
        })
    }

    /// Encode the rendered image as PNG.
    pub fn to_png(&self) -> CityGridResult<Vec<u8>> {
        encode_png(&self.image)
    }

    /// Write the rendered image to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> CityGridResult<()> {
        write_png(&self.image, path)
    }
}

/// Render `locations` straight to an image.
pub fn render_points<L: Location + Sync>(
    locations: &[L],
    config: &HeatmapConfig,
) -> CityGridResult<RgbaImage> {
    Heatmap::build(locations, config).map(|heatmap| heatmap.image)
}
