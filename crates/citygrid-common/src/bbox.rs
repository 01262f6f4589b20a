//! Bounding rectangle types and extrema computation.
//!
//! Rectangles live in (longitude, latitude) space: longitude is the X axis
//! and latitude is the Y axis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CityGridError, CityGridResult};
use crate::point::Location;

/// Coordinate axis of a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Longitude.
    X,
    /// Latitude.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "longitude"),
            Axis::Y => write!(f, "latitude"),
        }
    }
}

/// How the extrema of a point set are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    /// True minimum and maximum of every axis.
    #[default]
    Exact,
    /// Discard the outermost 0.1% of values per axis.
    #[serde(rename = "trim_0_1_pct")]
    Trim0_1Pct,
    /// Discard the outermost 0.01% of values per axis.
    #[serde(rename = "trim_0_01_pct")]
    Trim0_01Pct,
}

impl TrimMode {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exact" | "none" => Some(Self::Exact),
            "0.1pct" | "0.1%" | "p999" | "trim_0_1_pct" => Some(Self::Trim0_1Pct),
            "0.01pct" | "0.01%" | "p9999" | "trim_0_01_pct" => Some(Self::Trim0_01Pct),
            _ => None,
        }
    }

    /// Fraction of the sorted values kept below the upper cut, if trimming.
    pub fn percentile(&self) -> Option<f64> {
        match self {
            Self::Exact => None,
            Self::Trim0_1Pct => Some(0.999),
            Self::Trim0_01Pct => Some(0.9999),
        }
    }

    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Trim0_1Pct => "0.1pct",
            Self::Trim0_01Pct => "0.01pct",
        }
    }
}

impl fmt::Display for TrimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An axis-aligned rectangle in (longitude, latitude) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingRect {
    /// Create a rectangle from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Longitude span.
    pub fn range_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Latitude span.
    pub fn range_y(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a (longitude, latitude) pair lies inside, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Ensure both axes have a positive, finite span.
    ///
    /// A zero span would make every binning division blow up, so it is
    /// reported instead of being patched over.
    pub fn validate(&self) -> CityGridResult<()> {
        check_span(Axis::X, self.min_x, self.max_x)?;
        check_span(Axis::Y, self.min_y, self.max_y)
    }
}

fn check_span(axis: Axis, min: f64, max: f64) -> CityGridResult<()> {
    let span = max - min;
    if span.is_finite() && span > 0.0 {
        Ok(())
    } else {
        Err(CityGridError::InvalidRange { axis, min, max })
    }
}

/// Compute the bounding rectangle of a point set.
///
/// `TrimMode::Exact` scans once for the running extrema. The trim modes sort
/// latitudes and longitudes independently and take the mirrored percentile
/// band from each, so the points dropped on one axis are not necessarily the
/// ones dropped on the other.
///
/// The returned rectangle is not validated; a single point (or a set on one
/// meridian) yields a zero span that `BoundingRect::validate` rejects.
pub fn compute_bounding_rect<L: Location>(
    locations: &[L],
    mode: TrimMode,
) -> CityGridResult<BoundingRect> {
    if locations.is_empty() {
        return Err(CityGridError::EmptyInput);
    }

    for (index, location) in locations.iter().enumerate() {
        let (latitude, longitude) = location.lat_long();
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CityGridError::InvalidCoordinate {
                index,
                latitude,
                longitude,
            });
        }
    }

    match mode.percentile() {
        None => Ok(exact_extrema(locations)),
        Some(p) => Ok(trimmed_extrema(locations, p)),
    }
}

fn exact_extrema<L: Location>(locations: &[L]) -> BoundingRect {
    // Remember: lat is y, long is x
    let (lat, long) = locations[0].lat_long();
    let mut rect = BoundingRect::new(long, lat, long, lat);

    for location in &locations[1..] {
        let (lat, long) = location.lat_long();
        rect.min_x = rect.min_x.min(long);
        rect.max_x = rect.max_x.max(long);
        rect.min_y = rect.min_y.min(lat);
        rect.max_y = rect.max_y.max(lat);
    }
    rect
}

fn trimmed_extrema<L: Location>(locations: &[L], percentile: f64) -> BoundingRect {
    let (mut lats, mut longs): (Vec<f64>, Vec<f64>) =
        locations.iter().map(|l| l.lat_long()).unzip();

    lats.sort_by(f64::total_cmp);
    longs.sort_by(f64::total_cmp);

    let (min_lat, max_lat) = percentile_band(&lats, percentile);
    let (min_long, max_long) = percentile_band(&longs, percentile);

    BoundingRect::new(min_long, min_lat, max_long, max_lat)
}

/// Mirrored percentile band of a sorted, non-empty slice.
///
/// The upper index is `floor(p * n)` and the lower index mirrors it from the
/// bottom as `n - upper`. Both are clamped so tiny inputs stay in bounds.
fn percentile_band(sorted: &[f64], percentile: f64) -> (f64, f64) {
    let n = sorted.len();
    let upper = ((percentile * n as f64).floor() as usize).min(n - 1);
    let lower = (n - upper).min(upper);
    (sorted[lower], sorted[upper])
}
