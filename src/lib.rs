#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geosync
//!
//! Geofence-aware location synchronization with bidirectional map/record
//! consistency.
//!
//! A [`GeoSession`] owns a presentation surface (map, marker, radius
//! indicator) and keeps it consistent with a [`Location`] value bound to an
//! external record. Host frameworks integrate through thin adapters
//! implementing [`gateways::RecordGateway`] and
//! [`gateways::PresentationSurface`]; the session itself is synchronous,
//! single-threaded and free of any rendering or transport code.
//!
//! A session without a surface still tracks external updates:
//!
//! ```
//! use geosync::{entities::*, gateways::*, GeoSession};
//!
//! #[derive(Debug, Default)]
//! struct HeadlessRecord;
//!
//! impl RecordGateway for HeadlessRecord {
//!     fn latitude_deg(&self) -> Option<f64> {
//!         None
//!     }
//!     fn longitude_deg(&self) -> Option<f64> {
//!         None
//!     }
//!     fn radius_m(&self) -> Option<f64> {
//!         None
//!     }
//!     fn request_update(&self, _pos: MapPoint) {}
//! }
//!
//! #[derive(Debug)]
//! enum NoSurface {}
//!
//! impl PresentationSurface for NoSurface {
//!     fn mount(&mut self, _: &Location) -> Result<(), SurfaceError> {
//!         match *self {}
//!     }
//!     fn move_to(&mut self, _: &Location) {
//!         match *self {}
//!     }
//!     fn relayout(&mut self) {
//!         match *self {}
//!     }
//!     fn release(&mut self) {
//!         match *self {}
//!     }
//! }
//!
//! let defaults = Location::from_deg_and_meters(-6.2088, 106.8456, 100.0);
//! let mut session = GeoSession::<_, NoSurface>::mount(HeadlessRecord, None, defaults);
//! assert!(session.is_headless());
//! assert_eq!(defaults, session.current());
//!
//! let pushed = Location::from_deg_and_meters(52.52, 13.405, 250.0);
//! session.apply_external(pushed);
//! assert_eq!(pushed, session.current());
//! ```
//!
//! [`Location`]: entities::Location

pub use geosync_core::{entities, gateways, kanban, session, timeline, GeoSession};
