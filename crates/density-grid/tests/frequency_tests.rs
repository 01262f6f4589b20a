//! Tests for density normalization.

use citygrid_common::{BoundingRect, NormalizationRank, Point};
use density_grid::{FrequencyField, Histogram};
use test_utils::{assert_unit_interval, create_cluster, create_scatter, rect};

fn unit_grid(width: usize) -> Histogram {
    Histogram::with_aspect_ratio(width, &rect::UNIT_TEN, 1.0).unwrap()
}

// ============================================================================
// Max frequency tests
// ============================================================================

#[test]
fn test_shared_cell_is_one_lone_cell_is_half() {
    let mut histogram = unit_grid(10);
    histogram.count_points(&[
        Point::new(1.2, 1.2),
        Point::new(1.8, 1.7),
        Point::new(6.5, 3.5),
    ]);

    let field = FrequencyField::max_frequency(&histogram);
    assert_eq!(field.get(1, 1), Some(1.0));
    assert_eq!(field.get(3, 6), Some(0.5));
    assert_eq!(field.get(0, 0), Some(0.0));
}

#[test]
fn test_max_rank_matches_max_frequency() {
    let mut histogram = unit_grid(32);
    histogram.count_points(&create_scatter(&rect::UNIT_TEN, 2_000, 5));

    let by_rank = FrequencyField::from_histogram(&histogram, NormalizationRank::Max).unwrap();
    assert_eq!(by_rank, FrequencyField::max_frequency(&histogram));
}

#[test]
fn test_values_bounded_for_every_rank() {
    let mut histogram = unit_grid(16);
    histogram.count_points(&create_scatter(&rect::UNIT_TEN, 3_000, 9));
    histogram.count_points(&create_cluster(Point::new(5.1, 5.1), 500));

    for k in [0, 1, 5, 50, 255] {
        let field = FrequencyField::with_offset(&histogram, k).unwrap();
        assert_unit_interval!(field.values());
        assert_eq!(field.values().len(), 256);
    }
}

#[test]
fn test_rank_cell_maps_to_one() {
    let mut histogram = unit_grid(16);
    histogram.count_points(&create_scatter(&rect::UNIT_TEN, 3_000, 21));

    let field = FrequencyField::with_offset(&histogram, 3).unwrap();
    let denominator = field.denominator();
    let hits = histogram
        .blocks()
        .iter()
        .zip(field.values())
        .filter(|(&count, _)| count == denominator)
        .count();
    assert!(hits > 0);
    for (&count, &value) in histogram.blocks().iter().zip(field.values()) {
        if count == denominator {
            assert_eq!(value, 1.0);
        }
    }
}

// ============================================================================
// Degenerate input tests
// ============================================================================

#[test]
fn test_all_points_cropped_gives_zero_field() {
    let mut histogram = unit_grid(8);
    histogram.count_points(&[Point::new(50.0, 50.0)]);
    let field = FrequencyField::max_frequency(&histogram);
    assert!(field.is_degenerate());
    assert!(field.values().iter().all(|v| !v.is_nan()));
}

#[test]
fn test_sub_max_on_sparse_grid_is_zero() {
    // One occupied cell out of 64: offset 1 selects an empty cell.
    let rect = BoundingRect::new(0.0, 0.0, 8.0, 8.0);
    let mut histogram = Histogram::with_aspect_ratio(8, &rect, 1.0).unwrap();
    histogram.count_points(&[Point::new(4.5, 4.5)]);

    let field = FrequencyField::with_offset(&histogram, 1).unwrap();
    assert_eq!(field.denominator(), 0);
    assert!(field.is_degenerate());
}
