use crate::geo::*;

/// A geofence: a circular region around a center coordinate.
///
/// Immutable value object. Every update constructs a new `Location` that
/// replaces the old one atomically, so observers never see a transient
/// half-updated state.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Location {
    pub pos: MapPoint,
    pub radius: Distance,
}

impl Location {
    pub const fn new(pos: MapPoint, radius: Distance) -> Self {
        Self { pos, radius }
    }

    /// Creates a location from raw values, clamping out-of-range input.
    pub fn from_deg_and_meters(lat_deg: f64, lng_deg: f64, radius_meters: f64) -> Self {
        Self {
            pos: MapPoint::from_lat_lng_deg(lat_deg, lng_deg),
            radius: Distance::from_meters(radius_meters),
        }
    }

    pub fn with_pos(self, pos: MapPoint) -> Self {
        Self { pos, ..self }
    }

    pub fn with_radius(self, radius: Distance) -> Self {
        Self { radius, ..self }
    }
}
