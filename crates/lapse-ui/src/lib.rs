//! Lapse UI — a countdown display component on top of `lapse-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lapse_ui::prelude::*;
//!
//! let mut fonts = FontSystem::new();
//! let font = fonts.load_font(include_bytes!("my_font.ttf")).unwrap();
//!
//! let surface = BufferSurface::new(132, 34);
//! let mut view = CountdownView::new(
//!     surface.clone(),
//!     fonts,
//!     CountdownStyle::new().font(font),
//!     Density(2.0),
//! );
//! view.set_time(0, 1, 30);
//! view.set_listener(Arc::downgrade(&listener));
//!
//! // Forward the platform's surface lifecycle:
//! view.on_surface_available(132, 34);
//!
//! // On the owning thread, deliver pending notifications each frame:
//! view.pump_callbacks();
//! ```
//!
//! The view runs one background worker while counting; everything else —
//! lifecycle events, start/stop, callback delivery — happens on the owning
//! thread.

pub mod clock;
pub mod listener;
pub mod painter;
pub mod render_loop;
pub mod style;
pub mod view;

// Top-level re-export for the common entry point — `use lapse_ui::CountdownView`
pub use view::CountdownView;

/// Everything a host needs to embed the countdown.
pub mod prelude {
    pub use crate::clock::{CountdownClock, TimeFields};
    pub use crate::listener::CountdownListener;
    pub use crate::painter::CountdownPainter;
    pub use crate::render_loop::RunState;
    pub use crate::style::{BorderStyle, CountdownStyle, Density, ResolvedStyle};
    pub use crate::view::CountdownView;

    // Re-export the engine pieces hosts touch directly.
    pub use lapse_engine::paint::Color;
    pub use lapse_engine::surface::{BufferSurface, RenderSurface, SurfaceEvents};
    pub use lapse_engine::text::{FontId, FontSystem};
}
