//! The renderer contract the picker draws with.

use super::scene::{PickRecord, PickingScene};
use crate::error::PickError;

/// A renderer able to draw the picking scene off-screen and read it back.
///
/// The picker owns the target it gets from [`create_target`]; the renderer
/// and camera are only borrowed for the duration of a call.
///
/// [`create_target`]: PickRenderer::create_target
pub trait PickRenderer {
    /// Off-screen render destination.
    type Target;
    /// Camera handle passed through to [`render`](PickRenderer::render).
    type Camera: ?Sized;

    /// Current output size in physical pixels.
    fn output_size(&self) -> (u32, u32);

    /// Allocate an off-screen target of the given size.
    fn create_target(&mut self, width: u32, height: u32) -> Self::Target;

    /// Draw `scene` from `camera` into `target`, cleared to white first.
    ///
    /// # Errors
    ///
    /// Backend-specific GPU failures.
    fn render(
        &mut self,
        scene: &PickingScene,
        camera: &Self::Camera,
        target: &mut Self::Target,
    ) -> Result<(), PickError>;

    /// Copy the whole target into `out` as RGBA8, bottom row first.
    ///
    /// # Errors
    ///
    /// [`PickError::BufferSize`] if `out` does not match the target, or
    /// [`PickError::Readback`] if the copy could not be mapped.
    fn read_pixels(
        &mut self,
        target: &Self::Target,
        out: &mut [u8],
    ) -> Result<(), PickError>;

    /// Free the GPU material and texture-map resources held for `record`.
    /// Called when the record is removed, and at teardown for every record
    /// still in the scene.
    ///
    /// Geometry is shared with the visible scene and must be left alone.
    fn release_material(&mut self, record: &PickRecord) {
        let _ = record;
    }
}
