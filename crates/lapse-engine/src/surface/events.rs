/// Platform surface lifecycle callbacks.
///
/// The host embedding layer forwards its surface events through this trait;
/// the view layer implements it. All calls arrive on the owning/UI thread.
pub trait SurfaceEvents {
    /// The surface became ready to accept frames.
    fn on_surface_available(&mut self, width: u32, height: u32);

    /// The surface was resized.
    fn on_surface_size_changed(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// The surface is being torn down.
    ///
    /// Returns `true` when the platform may release the surface resources and
    /// stop emitting frame-update events for it.
    fn on_surface_destroyed(&mut self) -> bool;

    /// A published frame reached the screen.
    fn on_surface_updated(&mut self) {}
}
