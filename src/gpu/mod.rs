//! GPU resource management for the picking pass.
//!
//! Provides wgpu device initialization, the off-screen picking target, and
//! the wgpu implementation of [`PickRenderer`](crate::picking::PickRenderer).

/// wgpu implementation of the picking renderer.
pub mod pick_renderer;
/// wgpu device and queue initialization.
pub mod render_context;
/// Off-screen color + depth picking target.
pub mod texture;
