//! Configuration for heatmap generation.

use serde::{Deserialize, Serialize};

use crate::bbox::TrimMode;
use crate::error::{CityGridError, CityGridResult};

/// Ratio of latitude to longitude degree length at 45 deg N/S.
///
/// A latitude span covers about 41% more ground than the same longitude
/// span there, so grids get that many more rows than the raw ratio implies.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.40944;

/// Which sorted cell count becomes the normalization denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationRank {
    /// The densest cell (rank `width * height - 1`).
    #[default]
    Max,
    /// The cell `k` positions below the densest (rank `width * height - 1 - k`).
    SubMax(usize),
}

impl NormalizationRank {
    /// Build from an offset below the maximum; zero means `Max`.
    pub fn from_offset(k: usize) -> Self {
        if k == 0 {
            Self::Max
        } else {
            Self::SubMax(k)
        }
    }

    /// Offset below the maximum.
    pub fn offset(&self) -> usize {
        match self {
            Self::Max => 0,
            Self::SubMax(k) => *k,
        }
    }

    /// Resolve to an index into the ascending sorted counts of `cells` cells.
    pub fn resolve(&self, cells: usize) -> CityGridResult<usize> {
        let k = self.offset();
        if k >= cells {
            return Err(CityGridError::invalid_parameter(
                "rank",
                format!("offset {} exceeds grid of {} cells", k, cells),
            ));
        }
        Ok(cells - 1 - k)
    }
}

/// Configuration for the heatmap pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Grid columns (pixels before scaling).
    pub width: usize,

    /// Edge length of the solid block painted per cell.
    pub pixel_scale: usize,

    /// Normalization denominator selection.
    pub normalization: NormalizationRank,

    /// Bounding rectangle extrema selection.
    pub trim: TrimMode,

    /// Latitude/longitude distortion multiplier.
    pub aspect_ratio: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 512,
            pixel_scale: 1,
            normalization: NormalizationRank::Max,
            trim: TrimMode::Exact,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }
}

impl HeatmapConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CITYGRID_WIDTH") {
            if let Ok(width) = val.parse() {
                config.width = width;
            }
        }

        if let Ok(val) = std::env::var("CITYGRID_PIXEL_SCALE") {
            if let Ok(scale) = val.parse() {
                config.pixel_scale = scale;
            }
        }

        if let Ok(val) = std::env::var("CITYGRID_RANK_OFFSET") {
            if let Ok(k) = val.parse() {
                config.normalization = NormalizationRank::from_offset(k);
            }
        }

        if let Ok(val) = std::env::var("CITYGRID_TRIM") {
            if let Some(mode) = TrimMode::from_str(&val) {
                config.trim = mode;
            }
        }

        if let Ok(val) = std::env::var("CITYGRID_ASPECT_RATIO") {
            if let Ok(ratio) = val.parse() {
                config.aspect_ratio = ratio;
            }
        }

        config
    }

    /// Parse from a JSON document; missing fields take their defaults.
    pub fn from_json(s: &str) -> CityGridResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> CityGridResult<()> {
        if self.width == 0 {
            return Err(CityGridError::invalid_parameter("width", "must be > 0"));
        }

        if self.pixel_scale == 0 {
            return Err(CityGridError::invalid_parameter("pixel_scale", "must be > 0"));
        }

        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(CityGridError::invalid_parameter(
                "aspect_ratio",
                format!("must be a positive number, got {}", self.aspect_ratio),
            ));
        }

        Ok(())
    }

    /// Output image size in pixels for a grid of `height` rows.
    pub fn image_size(&self, height: usize) -> (usize, usize) {
        (self.width * self.pixel_scale, height * self.pixel_scale)
    }
}
