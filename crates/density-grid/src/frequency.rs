//! Normalized density surface derived from a histogram.

use citygrid_common::{CityGridError, CityGridResult, NormalizationRank};

use crate::histogram::Histogram;

/// Per-cell density in `[0, 1]`, row-major, same layout as the histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyField {
    width: usize,
    height: usize,
    values: Vec<f64>,
    denominator: u64,
}

impl FrequencyField {
    /// Normalize by the densest cell.
    pub fn max_frequency(histogram: &Histogram) -> Self {
        let denominator = histogram.blocks().iter().copied().max().unwrap_or(0);
        Self::with_denominator(histogram, denominator)
    }

    /// Normalize by the count `k` positions below the densest cell.
    pub fn with_offset(histogram: &Histogram, k: usize) -> CityGridResult<Self> {
        Self::from_histogram(histogram, NormalizationRank::from_offset(k))
    }

    /// Normalize by the count found at `rank` in the ascending sort of all
    /// cell counts.
    ///
    /// Picking a rank below the top keeps a single overcrowded cell from
    /// flattening the rest of the surface; cells above the chosen count are
    /// clamped to `1.0`.
    pub fn from_histogram(histogram: &Histogram, rank: NormalizationRank) -> CityGridResult<Self> {
        let index = rank.resolve(histogram.blocks().len())?;

        let mut counts = histogram.blocks().to_vec();
        let (_, denominator, _) = counts.select_nth_unstable(index);
        let denominator = *denominator;

        tracing::debug!(
            rank = index,
            offset = rank.offset(),
            denominator,
            "Selected normalization denominator"
        );

        Ok(Self::with_denominator(histogram, denominator))
    }

    /// Wrap precomputed values, e.g. from another density source.
    pub fn from_values(width: usize, height: usize, values: Vec<f64>) -> CityGridResult<Self> {
        match width.checked_mul(height) {
            Some(cells) if cells > 0 && cells == values.len() => {}
            _ => return Err(CityGridError::InvalidDimensions { width, height }),
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(CityGridError::invalid_parameter(
                "values",
                format!("frequency {} is outside [0, 1]", bad),
            ));
        }
        Ok(Self {
            width,
            height,
            values,
            denominator: 0,
        })
    }

    fn with_denominator(histogram: &Histogram, denominator: u64) -> Self {
        let values = if denominator == 0 {
            tracing::debug!("All cells empty; frequency field is zero");
            vec![0.0; histogram.blocks().len()]
        } else {
            let max = denominator as f64;
            histogram
                .blocks()
                .iter()
                .map(|&count| (count as f64 / max).min(1.0))
                .collect()
        };

        Self {
            width: histogram.width(),
            height: histogram.height(),
            values,
            denominator,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All frequencies, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Frequency at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.values[y * self.width + x])
        } else {
            None
        }
    }

    /// The count every cell was divided by; zero for a degenerate field or
    /// one built from raw values.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// No cell has any density.
    pub fn is_degenerate(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citygrid_common::{BoundingRect, Point};

    fn ten_by_ten() -> Histogram {
        let rect = BoundingRect::new(0.0, 0.0, 10.0, 10.0);
        Histogram::with_aspect_ratio(10, &rect, 1.0).unwrap()
    }

    #[test]
    fn test_empty_histogram_is_all_zero() {
        let field = FrequencyField::max_frequency(&ten_by_ten());
        assert!(field.is_degenerate());
        assert_eq!(field.denominator(), 0);
        assert_eq!(field.values().len(), 100);
    }

    #[test]
    fn test_sub_max_clamps_outlier() {
        let mut h = ten_by_ten();
        let mut points = vec![Point::new(0.5, 0.5); 10];
        points.extend(vec![Point::new(5.5, 5.5); 4]);
        points.extend(vec![Point::new(8.5, 1.5); 2]);
        h.count_points(&points);

        // Sorted tail: ..., 2, 4, 10 -> offset 1 selects 4.
        let field = FrequencyField::with_offset(&h, 1).unwrap();
        assert_eq!(field.denominator(), 4);
        assert_eq!(field.get(0, 0), Some(1.0));
        assert_eq!(field.get(5, 5), Some(1.0));
        assert_eq!(field.get(1, 8), Some(0.5));
    }

    #[test]
    fn test_offset_beyond_grid_is_error() {
        assert!(FrequencyField::with_offset(&ten_by_ten(), 100).is_err());
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        assert!(FrequencyField::from_values(2, 1, vec![0.0, 1.5]).is_err());
        assert!(FrequencyField::from_values(2, 2, vec![0.0, 1.0]).is_err());
        assert!(FrequencyField::from_values(2, 1, vec![0.0, 1.0]).is_ok());
    }

    #[test]
    fn test_from_values_overflowing_dimensions() {
        assert!(matches!(
            FrequencyField::from_values(usize::MAX, 2, vec![0.0; 4]),
            Err(CityGridError::InvalidDimensions { height: 2, .. })
        ));
    }
}
