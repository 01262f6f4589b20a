//! Two-dimensional point histogram over a bounding rectangle.

use rayon::prelude::*;

use citygrid_common::{
    BoundingRect, CityGridError, CityGridResult, Location, DEFAULT_ASPECT_RATIO,
};

/// Upper bound on grid cells, so a sliver of a rectangle cannot request an
/// absurd allocation.
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Minimum points per shard for parallel counting
const PARALLEL_MIN_CHUNK: usize = 16_384;

/// Outcome of a counting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Points that landed in a cell.
    pub counted: usize,
    /// Points projected outside the grid and silently cropped.
    pub dropped: usize,
}

impl CountSummary {
    pub fn total(&self) -> usize {
        self.counted + self.dropped
    }
}

impl std::ops::Add for CountSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            counted: self.counted + other.counted,
            dropped: self.dropped + other.dropped,
        }
    }
}

/// Point counts per grid cell, stored row-major.
///
/// Row 0 is the southern edge of the rectangle; rows grow with latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    width: usize,
    height: usize,
    blocks: Vec<u64>,
    min_x: f64,
    min_y: f64,
    range_x: f64,
    range_y: f64,
    aspect_ratio: f64,
}

impl Histogram {
    /// Build an empty histogram `width` columns wide, using the default
    /// mid-latitude aspect ratio to derive the row count.
    pub fn new(width: usize, rect: &BoundingRect) -> CityGridResult<Self> {
        Self::with_aspect_ratio(width, rect, DEFAULT_ASPECT_RATIO)
    }

    /// Build an empty histogram with an explicit aspect ratio.
    pub fn with_aspect_ratio(
        width: usize,
        rect: &BoundingRect,
        aspect_ratio: f64,
    ) -> CityGridResult<Self> {
        let height = Self::derive_height(width, rect, aspect_ratio)?;

        Ok(Self {
            width,
            height,
            blocks: vec![0; width * height],
            min_x: rect.min_x,
            min_y: rect.min_y,
            range_x: rect.range_x(),
            range_y: rect.range_y(),
            aspect_ratio,
        })
    }

    /// Rows needed for `width` columns: `round(width * range_y / range_x * aspect_ratio)`.
    pub fn derive_height(
        width: usize,
        rect: &BoundingRect,
        aspect_ratio: f64,
    ) -> CityGridResult<usize> {
        rect.validate()?;

        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(CityGridError::invalid_parameter(
                "aspect_ratio",
                format!("must be a positive number, got {}", aspect_ratio),
            ));
        }

        let rows = (width as f64 * (rect.range_y() / rect.range_x()) * aspect_ratio).round();
        let max_rows = MAX_GRID_CELLS / width.max(1);
        if width == 0 || !rows.is_finite() || rows < 1.0 || rows > max_rows as f64 {
            return Err(CityGridError::InvalidDimensions {
                width,
                height: if rows.is_finite() && rows >= 0.0 {
                    rows as usize
                } else {
                    0
                },
            });
        }
        Ok(rows as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// The rectangle the grid was built over.
    pub fn rect(&self) -> BoundingRect {
        BoundingRect::new(
            self.min_x,
            self.min_y,
            self.min_x + self.range_x,
            self.min_y + self.range_y,
        )
    }

    /// All counts, row-major.
    pub fn blocks(&self) -> &[u64] {
        &self.blocks
    }

    /// Count at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<u64> {
        if x < self.width && y < self.height {
            Some(self.blocks[y * self.width + x])
        } else {
            None
        }
    }

    /// One row of counts.
    pub fn row(&self, y: usize) -> Option<&[u64]> {
        if y < self.height {
            Some(&self.blocks[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.blocks.iter().sum()
    }

    /// Grid cell `(x, y)` a coordinate falls into, or `None` if it is cropped.
    ///
    /// The latitude fraction is scaled by `height * aspect_ratio`, so the
    /// northern part of the rectangle beyond `range_y / aspect_ratio` lands
    /// past the last row and is cropped.
    pub fn cell_of(&self, latitude: f64, longitude: f64) -> Option<(usize, usize)> {
        // Remember, lat is y, long is x
        let x = (((longitude - self.min_x) / self.range_x) * self.width as f64).floor();
        let y = (((latitude - self.min_y) / self.range_y) * self.height as f64 * self.aspect_ratio)
            .floor();

        if !(0.0..self.width as f64).contains(&x) || !(0.0..self.height as f64).contains(&y) {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Add every location to its cell. Out-of-grid locations are dropped.
    pub fn count_points<L: Location>(&mut self, locations: &[L]) -> CountSummary {
        let summary = self.count_into_blocks(locations);
        tracing::debug!(
            counted = summary.counted,
            dropped = summary.dropped,
            width = self.width,
            height = self.height,
            "Counted points"
        );
        summary
    }

    /// Same as [`count_points`](Self::count_points), sharding the input
    /// across the rayon pool.
    ///
    /// Each shard fills a private grid; shards are merged by elementwise
    /// addition, so the result equals the sequential count.
    pub fn count_points_parallel<L: Location + Sync>(&mut self, locations: &[L]) -> CountSummary {
        if locations.len() < PARALLEL_MIN_CHUNK * 2 {
            return self.count_points(locations);
        }

        let chunk_size = (locations.len() / rayon::current_num_threads()).max(PARALLEL_MIN_CHUNK);
        let cells = self.blocks.len();
        let this = &*self;

        let (blocks, summary) = locations
            .par_chunks(chunk_size)
            .map(|chunk| {
                let mut shard = this.empty_like();
                let summary = shard.count_into_blocks(chunk);
                (shard.blocks, summary)
            })
            .reduce(
                || (vec![0; cells], CountSummary::default()),
                |(mut acc, a), (shard, b)| {
                    for (total, count) in acc.iter_mut().zip(shard) {
                        *total += count;
                    }
                    (acc, a + b)
                },
            );

        for (total, count) in self.blocks.iter_mut().zip(blocks) {
            *total += count;
        }

        tracing::debug!(
            counted = summary.counted,
            dropped = summary.dropped,
            shards = locations.len().div_ceil(chunk_size),
            "Counted points in parallel"
        );
        summary
    }

    fn count_into_blocks<L: Location>(&mut self, locations: &[L]) -> CountSummary {
        let mut summary = CountSummary::default();
        for location in locations {
            let (lat, long) = location.lat_long();
            match self.cell_of(lat, long) {
                Some((x, y)) => {
                    self.blocks[y * self.width + x] += 1;
                    summary.counted += 1;
                }
                None => summary.dropped += 1,
            }
        }
        summary
    }

    fn empty_like(&self) -> Self {
        Self {
            blocks: vec![0; self.blocks.len()],
            ..*self
        }
    }
}
