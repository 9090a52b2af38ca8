#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geosync-entities
//!
//! Reusable, framework-agnostic value types for geofence synchronization.
//!
//! The entities only contain generic functionality that does not reveal any
//! host-specific integration logic.

pub mod geo;
pub mod location;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
