//! Geographic point records.

use serde::{Deserialize, Serialize};

/// Anything that can report a latitude and longitude.
///
/// Address records from any upstream parser only need to implement this
/// to be fed into the pipeline.
pub trait Location {
    /// Returns `(latitude, longitude)` in degrees.
    fn lat_long(&self) -> (f64, f64);
}

/// A plain latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl Location for Point {
    fn lat_long(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Tuples are read as `(latitude, longitude)`.
impl Location for (f64, f64) {
    fn lat_long(&self) -> (f64, f64) {
        *self
    }
}

impl<L: Location + ?Sized> Location for &L {
    fn lat_long(&self) -> (f64, f64) {
        (**self).lat_long()
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
