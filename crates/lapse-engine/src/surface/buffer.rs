use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use super::{Frame, RenderSurface, SurfaceError};

/// In-memory [`RenderSurface`].
///
/// A cheap clonable handle over shared state: the render loop owns one clone
/// and the host keeps another to flip availability, read back published
/// frames, and inspect publish timing. Substitutes for a real platform
/// surface in tests and headless hosts.
#[derive(Clone)]
pub struct BufferSurface {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    width: u32,
    height: u32,
    available: bool,
    /// Most recently published frame, replaced on every present.
    front: Option<Frame>,
    presented: u64,
    present_times: Vec<Instant>,
}

impl BufferSurface {
    /// Creates an available surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                width,
                height,
                available: true,
                front: None,
                presented: 0,
                present_times: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking peer must not wedge the surface; the pixel state stays
        // usable either way.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Marks the surface ready, adopting the new size.
    pub fn make_available(&self, width: u32, height: u32) {
        let mut inner = self.lock();
        inner.width = width;
        inner.height = height;
        inner.available = true;
    }

    /// Tears the surface down; `begin_frame` reports `Unavailable` until
    /// [`make_available`](Self::make_available) is called again.
    pub fn destroy(&self) {
        let mut inner = self.lock();
        inner.available = false;
        inner.front = None;
    }

    pub fn is_available(&self) -> bool {
        self.lock().available
    }

    /// Takes the most recently published frame, leaving none behind.
    pub fn take_front(&self) -> Option<Frame> {
        self.lock().front.take()
    }

    /// Number of frames published over the surface's lifetime.
    pub fn frames_presented(&self) -> u64 {
        self.lock().presented
    }

    /// Monotonic timestamps of every publish, in order.
    pub fn present_times(&self) -> Vec<Instant> {
        self.lock().present_times.clone()
    }
}

impl RenderSurface for BufferSurface {
    fn begin_frame(&mut self) -> Result<Frame, SurfaceError> {
        let inner = self.lock();
        if !inner.available {
            return Err(SurfaceError::Unavailable);
        }
        Ok(Frame::new(inner.width, inner.height))
    }

    fn present(&mut self, frame: Frame) -> Result<(), SurfaceError> {
        let mut inner = self.lock();
        if !inner.available {
            // Torn down between acquire and publish; the frame is dropped.
            return Err(SurfaceError::Unavailable);
        }
        inner.front = Some(frame);
        inner.presented += 1;
        inner.present_times.push(Instant::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn begin_present_cycle_updates_front() {
        let mut surface = BufferSurface::new(8, 4);
        let mut frame = surface.begin_frame().unwrap();
        frame.clear(Color::white());
        surface.present(frame).unwrap();

        assert_eq!(surface.frames_presented(), 1);
        let front = surface.take_front().unwrap();
        assert_eq!(front.pixel(7, 3), Color::white());
        assert!(surface.take_front().is_none());
    }

    #[test]
    fn destroyed_surface_is_unavailable() {
        let mut surface = BufferSurface::new(8, 4);
        surface.destroy();
        assert_eq!(surface.begin_frame(), Err(SurfaceError::Unavailable));

        surface.make_available(16, 8);
        let frame = surface.begin_frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (16, 8));
    }

    #[test]
    fn present_after_destroy_drops_the_frame() {
        let mut surface = BufferSurface::new(8, 4);
        let frame = surface.begin_frame().unwrap();
        surface.destroy();
        assert_eq!(surface.present(frame), Err(SurfaceError::Unavailable));
        assert_eq!(surface.frames_presented(), 0);
    }
}
