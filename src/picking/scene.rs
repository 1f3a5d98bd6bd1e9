//! The picking scene: ordered color-coded render records that share their
//! geometry with the visible scene.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use glam::Mat4;

use super::color_id::PickId;

static NEXT_GEOMETRY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Geometry`], used to key GPU buffer caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId(u64);

/// Indexed triangle mesh shared between the visible and picking scenes.
///
/// Held through `Arc`; the picking pass never frees it.
#[derive(Debug)]
pub struct Geometry {
    id: GeometryId,
    /// Object-space vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates, one per position (may be empty if no record
    /// using this geometry carries a texture map).
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list indices into `positions`.
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Create a shared geometry handle.
    #[must_use]
    pub fn new(
        positions: Vec<[f32; 3]>,
        uvs: Vec<[f32; 2]>,
        indices: Vec<u32>,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: GeometryId(NEXT_GEOMETRY_ID.fetch_add(1, Ordering::Relaxed)),
            positions,
            uvs,
            indices,
        })
    }

    /// Axis-aligned quad in the XY plane spanning `min..max` at depth `z`.
    #[must_use]
    pub fn quad(min: [f32; 2], max: [f32; 2], z: f32) -> Arc<Self> {
        Self::new(
            vec![
                [min[0], min[1], z],
                [max[0], min[1], z],
                [max[0], max[1], z],
                [min[0], max[1], z],
            ],
            vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    /// Cache key for this geometry.
    #[must_use]
    pub fn id(&self) -> GeometryId {
        self.id
    }

    /// Number of indices to draw.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// RGBA8 image used as an alpha cutout in the picking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureMap {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Tightly packed RGBA8 texels, top row first.
    pub texels: Vec<u8>,
}

/// Flat pick color plus an optional cutout map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickMaterial {
    /// RGB color encoding the owning record's ID.
    pub color: [u8; 3],
    /// Optional alpha mask.
    pub map: Option<TextureMap>,
}

/// One color-coded object in the picking scene.
#[derive(Debug, Clone)]
pub struct PickRecord {
    id: PickId,
    /// Shared mesh.
    pub geometry: Arc<Geometry>,
    /// Object-to-world transform.
    pub transform: Mat4,
    material: PickMaterial,
}

impl PickRecord {
    /// Build a record whose material color encodes `id`.
    #[must_use]
    pub fn new(id: PickId, geometry: Arc<Geometry>, transform: Mat4) -> Self {
        Self {
            id,
            geometry,
            transform,
            material: PickMaterial {
                color: id.color(),
                map: None,
            },
        }
    }

    /// Attach an alpha cutout map.
    #[must_use]
    pub fn with_map(mut self, map: TextureMap) -> Self {
        self.material.map = Some(map);
        self
    }

    /// The object's pick ID.
    #[must_use]
    pub fn id(&self) -> PickId {
        self.id
    }

    /// The color-coded material.
    #[must_use]
    pub fn material(&self) -> &PickMaterial {
        &self.material
    }
}

/// Ordered collection of pick records, disjoint from the visible scene.
#[derive(Debug, Default)]
pub struct PickingScene {
    records: Vec<PickRecord>,
}

impl PickingScene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns the clashing ID, and drops `record`, if a record with the
    /// same ID is already present.
    pub fn add(&mut self, record: PickRecord) -> Result<(), PickId> {
        if self.contains(record.id) {
            return Err(record.id);
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove the record with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: PickId) -> Option<PickRecord> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    /// Remove and return the last record.
    pub fn pop(&mut self) -> Option<PickRecord> {
        self.records.pop()
    }

    /// Whether a record with `id` is present.
    #[must_use]
    pub fn contains(&self, id: PickId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Records in draw order.
    #[must_use]
    pub fn records(&self) -> &[PickRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the scene has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> PickId {
        PickId::new(raw).unwrap()
    }

    #[test]
    fn record_color_encodes_its_id() {
        let geom = Geometry::quad([0.0, 0.0], [1.0, 1.0], 0.0);
        let record = PickRecord::new(id(300), geom, Mat4::IDENTITY);
        assert_eq!(record.material().color, [45, 1, 0]);
        assert!(record.material().map.is_none());
    }

    #[test]
    fn geometry_is_shared_not_copied() {
        let geom = Geometry::quad([0.0, 0.0], [1.0, 1.0], 0.0);
        let visible = Arc::clone(&geom);
        let mut scene = PickingScene::new();
        scene
            .add(PickRecord::new(id(1), Arc::clone(&geom), Mat4::IDENTITY))
            .unwrap();
        assert_eq!(Arc::strong_count(&geom), 3);

        let removed = scene.remove(id(1)).unwrap();
        drop(removed);
        assert_eq!(Arc::strong_count(&geom), 2);
        assert_eq!(visible.id(), geom.id());
    }

    #[test]
    fn remove_keeps_order_and_rejects_duplicates() {
        let geom = Geometry::quad([0.0, 0.0], [1.0, 1.0], 0.0);
        let mut scene = PickingScene::new();
        for raw in 1..=3 {
            scene
                .add(PickRecord::new(id(raw), Arc::clone(&geom), Mat4::IDENTITY))
                .unwrap();
        }
        let dup = PickRecord::new(id(2), Arc::clone(&geom), Mat4::IDENTITY);
        assert_eq!(scene.add(dup), Err(id(2)));

        assert!(scene.remove(id(2)).is_some());
        assert!(scene.remove(id(2)).is_none());
        let order: Vec<u32> =
            scene.records().iter().map(|r| r.id().get()).collect();
        assert_eq!(order, vec![1, 3]);
    }

    #[test]
    fn geometry_ids_are_distinct() {
        let a = Geometry::quad([0.0, 0.0], [1.0, 1.0], 0.0);
        let b = Geometry::quad([0.0, 0.0], [1.0, 1.0], 0.0);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.index_count(), 6);
    }
}
