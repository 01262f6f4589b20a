//! Common test fixtures for citygrid tests.
//!
//! Pre-defined points and rectangles for the scenarios the pipeline is
//! exercised with.

use citygrid_common::{BoundingRect, Point};

/// Disneyland, Anaheim CA.
pub const WALLY_LAND: Point = Point {
    latitude: 33.809,
    longitude: -117.919,
};

/// Walt Disney World, Orlando FL.
pub const WALLY_WORLD: Point = Point {
    latitude: 28.418611,
    longitude: -81.581111,
};

/// The two theme parks, west coast first.
pub fn theme_parks() -> Vec<Point> {
    vec![WALLY_LAND, WALLY_WORLD]
}

/// Common rectangles for testing.
pub mod rect {
    use super::BoundingRect;

    /// A 10 x 10 degree square with its corner at the origin.
    pub const UNIT_TEN: BoundingRect = BoundingRect {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 10.0,
        max_y: 10.0,
    };

    /// Roughly the Denver metro area.
    pub const DENVER: BoundingRect = BoundingRect {
        min_x: -105.11,
        min_y: 39.61,
        max_x: -104.6,
        max_y: 39.91,
    };

    /// Degenerate: every point on one meridian.
    pub const ZERO_WIDTH: BoundingRect = BoundingRect {
        min_x: -105.0,
        min_y: 39.0,
        max_x: -105.0,
        max_y: 40.0,
    };

    /// Degenerate: every point on one parallel.
    pub const ZERO_HEIGHT: BoundingRect = BoundingRect {
        min_x: -105.0,
        min_y: 39.0,
        max_x: -104.0,
        max_y: 39.0,
    };
}
