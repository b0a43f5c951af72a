//! Surface abstraction.
//!
//! Responsibilities:
//! - `Frame`: a CPU pixel buffer representing one acquired drawable target
//! - `RenderSurface`: the acquire/publish contract a host surface implements
//! - `SurfaceEvents`: the platform lifecycle callbacks the view layer reacts to
//! - `BufferSurface`: in-memory implementation for tests and headless hosts

mod buffer;
mod events;
mod frame;

use std::fmt;

pub use buffer::BufferSurface;
pub use events::SurfaceEvents;
pub use frame::Frame;

/// Error returned by [`RenderSurface`] operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The surface is torn down or not yet ready.
    ///
    /// A normal, frequent outcome — callers skip the current frame and retry
    /// later. Never treated as fatal.
    Unavailable,
    /// The backend rejected the frame. Logged by callers; rendering continues.
    Backend(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Unavailable => write!(f, "surface unavailable"),
            SurfaceError::Backend(msg) => write!(f, "surface backend error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Contract implemented by concrete drawing surfaces.
///
/// The render loop pulls a [`Frame`], paints into it, and publishes it back.
/// Implementations are owned by the loop's shared state and accessed from the
/// background worker, hence `Send`.
pub trait RenderSurface: Send {
    /// Acquires a drawable frame.
    ///
    /// Returns [`SurfaceError::Unavailable`] while the surface is torn down
    /// or not yet ready; the caller skips the iteration.
    fn begin_frame(&mut self) -> Result<Frame, SurfaceError>;

    /// Publishes a painted frame.
    fn present(&mut self, frame: Frame) -> Result<(), SurfaceError>;
}
