use crate::entities::*;

/// Narrow interface to the host's data-binding layer.
///
/// Reads return the raw field values of the bound record; a missing field is
/// `None`. Updates are fire-and-forget: the session updates its own state
/// optimistically and accepts a later external push correcting the value if
/// the write is rejected or transformed server-side.
pub trait RecordGateway {
    fn latitude_deg(&self) -> Option<f64>;
    fn longitude_deg(&self) -> Option<f64>;
    fn radius_m(&self) -> Option<f64>;

    /// Requests an asynchronous update of the record's coordinate fields.
    fn request_update(&self, pos: MapPoint);
}
