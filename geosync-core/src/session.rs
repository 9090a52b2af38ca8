use crate::{
    entities::*,
    gateways::{PresentationSurface, RecordGateway},
};

/// Binds one [`Location`] to one presentation surface and keeps both
/// synchronized in either direction of change.
///
/// Two event sources exist: USER (marker drag) and EXTERNAL (record push).
/// User events update internal state and notify outward through the record
/// gateway; external events update internal state and the surface but never
/// notify outward. Drag events fired synchronously while an external update
/// is applied are suppressed.
///
/// All operations run on the host's event loop and are synchronous. The
/// deferred relayout scheduled by [`mount`](Self::mount) is the only
/// suspension point; [`teardown`](Self::teardown) cancels it.
#[derive(Debug)]
pub struct GeoSession<R, S> {
    record: R,
    surface: Option<S>,
    current: Location,
    defaults: Location,
    dirty: bool,
    applying_external: bool,
    relayout_pending: bool,
    released: bool,
}

impl<R, S> GeoSession<R, S>
where
    R: RecordGateway,
    S: PresentationSurface,
{
    /// Creates a session for the given record and mounts the surface.
    ///
    /// The initial location is read from the record, falling back to
    /// `defaults` per field when the record value is absent or zero. A
    /// missing surface or a failing mount degrades the session to headless
    /// tracking instead of propagating the error: the record stays logically
    /// consistent even with no visual surface, but drag events can never
    /// occur in that state.
    pub fn mount(record: R, surface: Option<S>, defaults: Location) -> Self {
        let current = initial_location(&record, defaults);
        let mut session = Self {
            record,
            surface: None,
            current,
            defaults,
            dirty: false,
            applying_external: false,
            relayout_pending: false,
            released: false,
        };
        match surface {
            Some(mut surface) => match surface.mount(&session.current) {
                Ok(()) => {
                    session.surface = Some(surface);
                    // The container may not have a measurable size yet.
                    session.relayout_pending = true;
                }
                Err(err) => {
                    log::warn!("Unable to mount presentation surface, tracking headless: {err}");
                }
            },
            None => {
                log::warn!("No presentation surface, tracking headless");
            }
        }
        session
    }

    /// Performs the deferred relayout scheduled at mount time.
    ///
    /// The host calls this once after the surface container has stabilized.
    /// No-op when nothing is pending or after teardown.
    pub fn relayout_due(&mut self) {
        if self.released || !self.relayout_pending {
            return;
        }
        self.relayout_pending = false;
        if let Some(surface) = &mut self.surface {
            surface.relayout();
        }
    }

    /// Completes a drag gesture at the given raw coordinates.
    ///
    /// The sole path by which user interaction produces a change. Call once
    /// per gesture, not per intermediate move frame. Out-of-range
    /// coordinates are clamped before anything observes them. Notifies the
    /// record gateway exactly once with the new position; the radius is
    /// unchanged.
    pub fn drag_end(&mut self, lat_deg: f64, lng_deg: f64) {
        if self.released || self.applying_external || self.surface.is_none() {
            return;
        }
        let pos = MapPoint::from_lat_lng_deg(lat_deg, lng_deg);
        self.current = self.current.with_pos(pos);
        self.dirty = true;
        if let Some(surface) = &mut self.surface {
            surface.move_to(&self.current);
        }
        self.record.request_update(pos);
    }

    /// Applies a change of the bound record from a source other than this
    /// session's own drag.
    ///
    /// Updates marker position, map center and radius indicator, and clears
    /// the dirty flag. Never notifies the record gateway, which breaks the
    /// record-to-surface-to-record cycle. Last write wins; `current` is
    /// updated even when headless.
    pub fn apply_external(&mut self, location: Location) {
        if self.released {
            return;
        }
        self.applying_external = true;
        self.current = location;
        if let Some(surface) = &mut self.surface {
            surface.move_to(&self.current);
        }
        self.dirty = false;
        self.applying_external = false;
    }

    /// Releases the presentation surface and detaches the session.
    ///
    /// Cancels the pending relayout. Safe to call multiple times and before
    /// mount completed; afterwards every operation is a no-op, so
    /// late-arriving host callbacks cannot resurrect the session.
    pub fn teardown(&mut self) {
        self.relayout_pending = false;
        if let Some(mut surface) = self.surface.take() {
            surface.release();
        }
        self.released = true;
    }

    pub const fn current(&self) -> Location {
        self.current
    }

    pub const fn defaults(&self) -> Location {
        self.defaults
    }

    /// True between a local edit and its acknowledgement by the owning
    /// record.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn is_headless(&self) -> bool {
        self.surface.is_none()
    }

    pub const fn is_released(&self) -> bool {
        self.released
    }

    pub const fn relayout_pending(&self) -> bool {
        self.relayout_pending
    }
}

fn initial_location<R: RecordGateway>(record: &R, defaults: Location) -> Location {
    // The record abstraction reports unset numeric fields as zero, so zero
    // counts as absent here.
    let field = |value: Option<f64>| value.filter(|v| *v != 0.0);
    let lat = field(record.latitude_deg())
        .map(LatCoord::from_deg)
        .unwrap_or(defaults.pos.lat());
    let lng = field(record.longitude_deg())
        .map(LngCoord::from_deg)
        .unwrap_or(defaults.pos.lng());
    let radius = field(record.radius_m())
        .map(Distance::from_meters)
        .unwrap_or(defaults.radius);
    Location::new(MapPoint::new(lat, lng), radius)
}
