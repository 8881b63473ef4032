//! Preview surface rendering and session lifecycle.

pub mod layout;
mod renderer;
mod session;

pub use layout::{PreviewLayout, Rect};
pub use renderer::render;
pub use session::{PreviewError, PreviewSession};
