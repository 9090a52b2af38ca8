use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Presentation container not found")]
    ContainerMissing,
    #[error("Presentation library unavailable")]
    LibraryUnavailable,
}

/// The rendering target owned by a session: map canvas, marker and radius
/// indicator. Implementations must tolerate repeated `release` calls.
pub trait PresentationSurface {
    /// Places the marker and radius indicator and centers the view.
    fn mount(&mut self, location: &Location) -> Result<(), SurfaceError>;

    /// Moves marker and radius indicator and recenters to follow `location`.
    fn move_to(&mut self, location: &Location);

    /// Recomputes the layout after the container size has stabilized.
    fn relayout(&mut self);

    /// Releases all surface resources.
    fn release(&mut self);
}
