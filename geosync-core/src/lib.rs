#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geosync-core
//!
//! Keeps a geofence (marker + radius indicator) and a structured [`Location`]
//! value mutually consistent, in either direction of change, without feedback
//! loops. Host frameworks integrate through thin adapters implementing the
//! [`gateways`] traits; no rendering or transport code lives here.
//!
//! [`Location`]: geosync_entities::location::Location

pub mod entities {
    pub use geosync_entities::{geo::*, location::*, time::*};
}

pub mod gateways;
pub mod kanban;
pub mod session;
pub mod timeline;

pub use self::session::GeoSession;
