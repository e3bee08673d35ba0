//! Board rendering
//!
//! `shapes` builds a backend-neutral frame; `canvas` paints it with the
//! Canvas 2D API in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Frame, build_frame};
