//! Deterministic point generators.
//!
//! These generators create predictable, verifiable point sets so that
//! expected cell counts can be worked out by hand.

use citygrid_common::{BoundingRect, Point};

/// Points on a regular lattice covering `rect`.
///
/// Produces `cols * rows` points at the centres of a `cols x rows`
/// subdivision, so none of them sits on the rectangle's edges.
///
/// # Example
///
/// ```
/// use citygrid_common::BoundingRect;
/// use test_utils::create_lattice;
///
/// let points = create_lattice(&BoundingRect::new(0.0, 0.0, 4.0, 2.0), 4, 2);
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0].longitude, 0.5);
/// assert_eq!(points[0].latitude, 0.5);
/// ```
pub fn create_lattice(rect: &BoundingRect, cols: usize, rows: usize) -> Vec<Point> {
    let dx = rect.range_x() / cols as f64;
    let dy = rect.range_y() / rows as f64;
    let mut points = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            points.push(Point::new(
                rect.min_y + (row as f64 + 0.5) * dy,
                rect.min_x + (col as f64 + 0.5) * dx,
            ));
        }
    }
    points
}

/// `count` copies of a single location.
pub fn create_cluster(center: Point, count: usize) -> Vec<Point> {
    vec![center; count]
}

/// A pseudo-random scatter inside `rect`, reproducible from `seed`.
///
/// # Arguments
///
/// * `rect` - Area to scatter over
/// * `count` - Number of points
/// * `seed` - Seed value for deterministic generation
pub fn create_scatter(rect: &BoundingRect, count: usize, seed: u32) -> Vec<Point> {
    (0..count as u32)
        .map(|i| {
            let fx = unit(simple_hash(i, 0, seed));
            let fy = unit(simple_hash(i, 1, seed));
            Point::new(
                rect.min_y + fy * rect.range_y(),
                rect.min_x + fx * rect.range_x(),
            )
        })
        .collect()
}

fn unit(h: u32) -> f64 {
    h as f64 / u32::MAX as f64
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
