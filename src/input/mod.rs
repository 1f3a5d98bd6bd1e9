//! Platform-agnostic input events forwarded to the picker.

/// Pointer events.
pub mod event;

pub use event::{InputEvent, MouseButton};
