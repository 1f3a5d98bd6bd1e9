//! GPU color-ID picking.
//!
//! Pickable objects are drawn into an off-screen target in flat colors that
//! encode their IDs. A query reads the target back and decodes the pixel
//! under the cursor.

mod backend;
pub mod color_id;
mod events;
mod picker;
pub mod readback;
pub mod scene;

pub use backend::PickRenderer;
pub use color_id::{IdAllocator, PickId, BACKGROUND_SENTINEL, MAX_PICK_ID};
pub use events::{PickEvents, SubscriptionId};
pub use picker::Picker;
pub use readback::{PixelSample, ReadbackBuffer};
pub use scene::{Geometry, GeometryId, PickMaterial, PickRecord, PickingScene, TextureMap};
