//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - keep shape-specific payloads and push helpers isolated per shape file
//!   under `scene::shapes`
//!
//! Paint order is insertion order: the painter records back-to-front.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::Border;
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::text::{TextAlign, TextCmd};
