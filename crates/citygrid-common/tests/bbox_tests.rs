//! Tests for bounding rectangle computation.

use citygrid_common::bbox::{compute_bounding_rect, Axis, BoundingRect, TrimMode};
use citygrid_common::{CityGridError, Point};
use test_utils::{create_lattice, create_scatter, rect, theme_parks, WALLY_LAND, WALLY_WORLD};

// ============================================================================
// Exact mode tests
// ============================================================================

#[test]
fn test_exact_theme_parks() {
    let rect = compute_bounding_rect(&theme_parks(), TrimMode::Exact).unwrap();
    assert_eq!(rect.min_x, WALLY_LAND.longitude);
    assert_eq!(rect.max_x, WALLY_WORLD.longitude);
    assert_eq!(rect.min_y, WALLY_WORLD.latitude);
    assert_eq!(rect.max_y, WALLY_LAND.latitude);
}

#[test]
fn test_exact_single_point() {
    let rect = compute_bounding_rect(&[Point::new(39.7, -105.0)], TrimMode::Exact).unwrap();
    assert_eq!(rect, BoundingRect::new(-105.0, 39.7, -105.0, 39.7));
    assert!(matches!(
        rect.validate(),
        Err(CityGridError::InvalidRange { axis: Axis::X, .. })
    ));
}

#[test]
fn test_exact_accepts_tuples() {
    let points = [(39.0, -105.0), (40.0, -104.0), (39.5, -106.0)];
    let rect = compute_bounding_rect(&points, TrimMode::Exact).unwrap();
    assert_eq!(rect, BoundingRect::new(-106.0, 39.0, -104.0, 40.0));
}

#[test]
fn test_exact_contains_every_point() {
    let points = create_scatter(&rect::DENVER, 1_000, 99);
    let rect = compute_bounding_rect(&points, TrimMode::Exact).unwrap();
    assert!(points.iter().all(|p| rect.contains(p.longitude, p.latitude)));
    assert!(rect.validate().is_ok());
}

// ============================================================================
// Trim mode tests
// ============================================================================

#[test]
fn test_trim_drops_outliers_per_axis() {
    let mut points = create_lattice(&rect::UNIT_TEN, 50, 40);
    // A bad longitude and an unrelated bad latitude.
    points.push(Point::new(5.0, 500.0));
    points.push(Point::new(-300.0, 5.0));

    let exact = compute_bounding_rect(&points, TrimMode::Exact).unwrap();
    assert_eq!(exact.max_x, 500.0);
    assert_eq!(exact.min_y, -300.0);

    let trimmed = compute_bounding_rect(&points, TrimMode::Trim0_1Pct).unwrap();
    assert!(trimmed.max_x < 10.0);
    assert!(trimmed.min_y > 0.0);
    assert!(rect::UNIT_TEN.contains(trimmed.min_x, trimmed.min_y));
    assert!(rect::UNIT_TEN.contains(trimmed.max_x, trimmed.max_y));
}

#[test]
fn test_trim_band_indices() {
    // 10,000 distinct latitudes and longitudes 0..9999.
    let points: Vec<Point> = (0..10_000)
        .map(|i| Point::new(i as f64, (9_999 - i) as f64))
        .collect();

    // upper = floor(0.999 * 10000) = 9990, lower = 10000 - 9990 = 10
    let rect = compute_bounding_rect(&points, TrimMode::Trim0_1Pct).unwrap();
    assert_eq!(rect, BoundingRect::new(10.0, 10.0, 9990.0, 9990.0));

    // upper = floor(0.9999 * 10000) = 9999, lower = 1
    let rect = compute_bounding_rect(&points, TrimMode::Trim0_01Pct).unwrap();
    assert_eq!(rect, BoundingRect::new(1.0, 1.0, 9999.0, 9999.0));
}

#[test]
fn test_trim_tiny_input_stays_in_bounds() {
    let rect = compute_bounding_rect(&[Point::new(1.0, 2.0)], TrimMode::Trim0_01Pct).unwrap();
    assert_eq!(rect, BoundingRect::new(2.0, 1.0, 2.0, 1.0));
}

// ============================================================================
// Error tests
// ============================================================================

#[test]
fn test_empty_input() {
    let points: Vec<Point> = Vec::new();
    for mode in [TrimMode::Exact, TrimMode::Trim0_1Pct, TrimMode::Trim0_01Pct] {
        assert!(matches!(
            compute_bounding_rect(&points, mode),
            Err(CityGridError::EmptyInput)
        ));
    }
}

#[test]
fn test_non_finite_coordinate() {
    let points = [Point::new(39.0, -105.0), Point::new(f64::NAN, -104.0)];
    let err = compute_bounding_rect(&points, TrimMode::Exact).unwrap_err();
    assert!(matches!(err, CityGridError::InvalidCoordinate { index: 1, .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_validate_rejects_inverted_rect() {
    assert!(BoundingRect::new(10.0, 10.0, 5.0, 5.0).validate().is_err());
    assert!(rect::ZERO_HEIGHT.validate().is_err());
    assert!(rect::DENVER.validate().is_ok());
}

// ============================================================================
// TrimMode parsing tests
// ============================================================================

#[test]
fn test_trim_mode_from_str() {
    assert_eq!(TrimMode::from_str("EXACT"), Some(TrimMode::Exact));
    assert_eq!(TrimMode::from_str("0.1pct"), Some(TrimMode::Trim0_1Pct));
    assert_eq!(TrimMode::from_str("p9999"), Some(TrimMode::Trim0_01Pct));
    assert_eq!(TrimMode::from_str("median"), None);
    assert_eq!(TrimMode::Trim0_1Pct.to_string(), "0.1pct");
}
