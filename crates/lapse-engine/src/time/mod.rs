//! Tick timing.

mod pacer;

pub use pacer::TickPacer;
