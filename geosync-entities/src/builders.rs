pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{geo::*, location::*};

    #[derive(Debug, Default)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn pos(mut self, lat_deg: f64, lng_deg: f64) -> Self {
            self.location.pos = MapPoint::from_lat_lng_deg(lat_deg, lng_deg);
            self
        }
        pub fn radius_m(mut self, meters: f64) -> Self {
            self.location.radius = Distance::from_meters(meters);
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> Self::Build {
            Default::default()
        }
    }
}
