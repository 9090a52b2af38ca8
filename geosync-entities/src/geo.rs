use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Coordinate out of range")]
pub struct CoordRangeError;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Distance out of range")]
pub struct DistanceRangeError;

/// Geographical latitude in degrees, within `[-90, 90]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-90.0)
    }

    pub const fn max() -> Self {
        Self(90.0)
    }

    /// Clamps the given value into the valid range.
    ///
    /// Non-finite input falls back to the equator.
    pub fn from_deg(deg: f64) -> Self {
        if !deg.is_finite() {
            Self::default()
        } else if deg < Self::min().0 {
            Self::min()
        } else if deg > Self::max().0 {
            Self::max()
        } else {
            Self(deg)
        }
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        if (Self::min().0..=Self::max().0).contains(&deg) {
            Ok(Self(deg))
        } else {
            Err(CoordRangeError)
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }
}

/// Geographical longitude in degrees, within `[-180, 180]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-180.0)
    }

    pub const fn max() -> Self {
        Self(180.0)
    }

    /// Clamps the given value into the valid range.
    ///
    /// Non-finite input falls back to the prime meridian.
    pub fn from_deg(deg: f64) -> Self {
        if !deg.is_finite() {
            Self::default()
        } else if deg < Self::min().0 {
            Self::min()
        } else if deg > Self::max().0 {
            Self::max()
        } else {
            Self(deg)
        }
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        if (Self::min().0..=Self::max().0).contains(&deg) {
            Ok(Self(deg))
        } else {
            Err(CoordRangeError)
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }
}

/// A point on the map, valid by construction.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    /// Creates a point from degrees, clamping out-of-range values.
    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        Self {
            lat: LatCoord::from_deg(lat_deg),
            lng: LngCoord::from_deg(lng_deg),
        }
    }

    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Result<Self, CoordRangeError> {
        Ok(Self {
            lat: LatCoord::try_from_deg(lat_deg)?,
            lng: LngCoord::try_from_deg(lng_deg)?,
        })
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat.to_deg(), self.lng.to_deg())
    }
}

/// A non-negative distance in meters.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Clamps negative and non-finite values to zero.
    ///
    /// A zero distance is valid and describes a degenerate region.
    pub fn from_meters(meters: f64) -> Self {
        if meters.is_finite() && meters > 0.0 {
            Self(meters)
        } else {
            Self::zero()
        }
    }

    pub fn try_from_meters(meters: f64) -> Result<Self, DistanceRangeError> {
        if meters.is_finite() && meters >= 0.0 {
            Ok(Self(meters))
        } else {
            Err(DistanceRangeError)
        }
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_latitude() {
        assert_eq!(LatCoord::max(), LatCoord::from_deg(95.0));
        assert_eq!(LatCoord::min(), LatCoord::from_deg(-100.0));
        assert_eq!(51.34, LatCoord::from_deg(51.34).to_deg());
    }

    #[test]
    fn clamp_longitude() {
        assert_eq!(LngCoord::max(), LngCoord::from_deg(200.0));
        assert_eq!(LngCoord::min(), LngCoord::from_deg(-180.5));
        assert_eq!(13.41, LngCoord::from_deg(13.41).to_deg());
    }

    #[test]
    fn non_finite_degrees_fall_back_to_zero() {
        for deg in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(LatCoord::default(), LatCoord::from_deg(deg));
            assert_eq!(LngCoord::default(), LngCoord::from_deg(deg));
        }
    }

    #[test]
    fn reject_out_of_range_coordinates() {
        assert!(LatCoord::try_from_deg(90.000001).is_err());
        assert!(LatCoord::try_from_deg(f64::NAN).is_err());
        assert!(LngCoord::try_from_deg(-180.000001).is_err());
        assert!(LatCoord::try_from_deg(90.0).is_ok());
        assert!(LngCoord::try_from_deg(-180.0).is_ok());
    }

    #[test]
    fn clamped_points_stay_in_range() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let lat_deg: f64 = rng.gen_range(-1000.0..1000.0);
            let lng_deg: f64 = rng.gen_range(-1000.0..1000.0);
            let pos = MapPoint::from_lat_lng_deg(lat_deg, lng_deg);
            assert!(LatCoord::try_from_deg(pos.lat().to_deg()).is_ok());
            assert!(LngCoord::try_from_deg(pos.lng().to_deg()).is_ok());
        }
    }

    #[test]
    fn zero_distance_is_valid() {
        assert_eq!(Distance::zero(), Distance::from_meters(0.0));
        assert!(Distance::try_from_meters(0.0).is_ok());
        assert!(Distance::try_from_meters(-1.0).is_err());
        assert_eq!(Distance::zero(), Distance::from_meters(-5.0));
    }
}
