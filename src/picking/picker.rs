//! The picker: owns the picking scene, its off-screen target and the CPU
//! readback, and turns button releases into pick notifications.

use super::backend::PickRenderer;
use super::color_id::{IdAllocator, PickId};
use super::events::{PickEvents, SubscriptionId};
use super::readback::{PixelSample, ReadbackBuffer};
use super::scene::{PickRecord, PickingScene};
use crate::error::PickError;
use crate::input::InputEvent;
use crate::options::PickingOptions;
use crate::world::WorldEvent;

/// Resources that only exist until [`Picker::destroy`].
struct Live<T> {
    scene: PickingScene,
    target: T,
    pixels: ReadbackBuffer,
}

/// GPU color-ID picker.
///
/// The renderer and camera are borrowed per call. Everything the picker
/// draws with is owned here and released by [`destroy`](Self::destroy).
pub struct Picker<R: PickRenderer> {
    live: Option<Live<R::Target>>,
    ids: IdAllocator,
    events: PickEvents,
    options: PickingOptions,
    mouse_pos: (f32, f32),
    hovered: Option<PickId>,
    stale: bool,
    render_count: u64,
}

impl<R: PickRenderer> Picker<R> {
    /// Create a picker with a target sized to the renderer's output.
    pub fn new(renderer: &mut R, options: PickingOptions) -> Self {
        let (width, height) = renderer.output_size();
        let target = renderer.create_target(width, height);
        log::debug!("picking target allocated at {width}x{height}");
        Self {
            live: Some(Live {
                scene: PickingScene::new(),
                target,
                pixels: ReadbackBuffer::new(width, height),
            }),
            ids: IdAllocator::new(),
            events: PickEvents::new(),
            options,
            mouse_pos: (0.0, 0.0),
            hovered: None,
            stale: true,
            render_count: 0,
        }
    }

    fn live_mut(&mut self) -> Result<&mut Live<R::Target>, PickError> {
        self.live.as_mut().ok_or(PickError::Destroyed)
    }

    /// Hand out the next unused pick ID.
    ///
    /// # Errors
    ///
    /// [`PickError::Destroyed`] after teardown,
    /// [`PickError::IdSpaceExhausted`] once every encodable ID is taken.
    pub fn next_id(&mut self) -> Result<PickId, PickError> {
        if self.live.is_none() {
            return Err(PickError::Destroyed);
        }
        self.ids.next_id()
    }

    /// Insert a record into the picking scene.
    ///
    /// # Errors
    ///
    /// [`PickError::Destroyed`] after teardown, [`PickError::DuplicateId`]
    /// if a record with the same ID is already present.
    pub fn add(&mut self, record: PickRecord) -> Result<(), PickError> {
        self.live_mut()?
            .scene
            .add(record)
            .map_err(PickError::DuplicateId)?;
        self.stale = true;
        Ok(())
    }

    /// Remove the record with `id`, release its material and hand the
    /// record back. The geometry stays with the caller.
    ///
    /// # Errors
    ///
    /// [`PickError::Destroyed`] after teardown.
    pub fn remove(
        &mut self,
        renderer: &mut R,
        id: PickId,
    ) -> Result<Option<PickRecord>, PickError> {
        let removed = self.live_mut()?.scene.remove(id);
        if let Some(record) = &removed {
            renderer.release_material(record);
            self.stale = true;
        }
        Ok(removed)
    }

    /// Reallocate the target and readback buffer for a new viewport size.
    ///
    /// Zero-sized viewports (minimized windows) are ignored.
    pub fn viewport_changed(&mut self, renderer: &mut R, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring zero-sized viewport {width}x{height}");
            return;
        }
        let Some(live) = self.live.as_mut() else {
            log::warn!("viewport change after picker teardown ignored");
            return;
        };
        live.target = renderer.create_target(width, height);
        live.pixels.resize(width, height);
        self.stale = true;
        log::debug!("picking target reallocated at {width}x{height}");
    }

    /// React to a world notification.
    pub fn handle_world_event(&mut self, renderer: &mut R, event: WorldEvent) {
        if self.live.is_none() {
            log::warn!("world event after picker teardown ignored: {event:?}");
            return;
        }
        match event {
            WorldEvent::Moved => self.stale = true,
            WorldEvent::ViewportChanged { width, height } => {
                self.viewport_changed(renderer, width, height);
            }
        }
    }

    /// React to an input event.
    ///
    /// Cursor moves are tracked (and hover-picked if enabled); a release of
    /// the configured button picks at the last cursor position. Returns the
    /// ID picked by a button release, if any.
    ///
    /// # Errors
    ///
    /// Renderer failures while refreshing the picking image.
    pub fn handle_input(
        &mut self,
        renderer: &mut R,
        camera: &R::Camera,
        event: InputEvent,
    ) -> Result<Option<PickId>, PickError> {
        if self.live.is_none() {
            log::warn!("input after picker teardown ignored");
            return Ok(None);
        }
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.mouse_pos = (x, y);
                if self.options.hover {
                    self.update_hover(renderer, camera)?;
                }
                Ok(None)
            }
            InputEvent::MouseButton {
                button,
                pressed: false,
            } if button == self.options.button => {
                let Some((x, y)) = screen_point(self.mouse_pos) else {
                    return Ok(None);
                };
                self.pick(renderer, camera, x, y)
            }
            _ => Ok(None),
        }
    }

    /// Resolve the object at screen point `(x, y)` (`y` from the top) and
    /// notify subscribers.
    ///
    /// Background and out-of-viewport points return `Ok(None)` and notify
    /// nobody.
    ///
    /// # Errors
    ///
    /// [`PickError::Destroyed`] after teardown, or renderer failures while
    /// refreshing the picking image.
    pub fn pick(
        &mut self,
        renderer: &mut R,
        camera: &R::Camera,
        x: u32,
        y: u32,
    ) -> Result<Option<PickId>, PickError> {
        let sample = self.sample(renderer, camera, x, y)?;
        let Some(id) = sample.id() else {
            return Ok(None);
        };
        if self.options.log_picks {
            log::debug!("pick id: {id}");
        }
        self.events.emit_pick(id);
        Ok(Some(id))
    }

    fn update_hover(
        &mut self,
        renderer: &mut R,
        camera: &R::Camera,
    ) -> Result<(), PickError> {
        let hovered = match screen_point(self.mouse_pos) {
            Some((x, y)) => self.sample(renderer, camera, x, y)?.id(),
            None => None,
        };
        if hovered != self.hovered {
            self.hovered = hovered;
            self.events.emit_hover(hovered);
        }
        Ok(())
    }

    fn sample(
        &mut self,
        renderer: &mut R,
        camera: &R::Camera,
        x: u32,
        y: u32,
    ) -> Result<PixelSample, PickError> {
        let _ = self.live_mut()?;
        let (width, height) = renderer.output_size();
        if width == 0 || height == 0 {
            // Nothing is on screen, so every point is outside the viewport.
            return Ok(PixelSample::OutOfBounds);
        }
        self.sync_target_size(renderer)?;
        self.refresh(renderer, camera)?;
        let live = self.live_mut()?;
        Ok(live.pixels.sample(x, y))
    }

    /// Catch a resize the host forgot to report before reading the buffer.
    fn sync_target_size(&mut self, renderer: &mut R) -> Result<(), PickError> {
        let (width, height) = renderer.output_size();
        let live = self.live_mut()?;
        if (live.pixels.width(), live.pixels.height()) != (width, height) {
            log::debug!("output size changed without notification");
            self.viewport_changed(renderer, width, height);
        }
        Ok(())
    }

    fn refresh(
        &mut self,
        renderer: &mut R,
        camera: &R::Camera,
    ) -> Result<(), PickError> {
        if !self.stale {
            return Ok(());
        }
        let live = self.live.as_mut().ok_or(PickError::Destroyed)?;
        renderer.render(&live.scene, camera, &mut live.target)?;
        renderer.read_pixels(&live.target, live.pixels.bytes_mut())?;
        self.stale = false;
        self.render_count += 1;
        log::debug!(
            "picking scene rendered ({} records)",
            live.scene.len()
        );
        Ok(())
    }

    /// Tear down: release every record's material (never its geometry),
    /// then drop the scene, target and readback buffer.
    ///
    /// Calling it again is a no-op.
    pub fn destroy(&mut self, renderer: &mut R) {
        let Some(mut live) = self.live.take() else {
            return;
        };
        while let Some(record) = live.scene.pop() {
            renderer.release_material(&record);
        }
        self.events.clear();
        self.hovered = None;
        log::debug!("picker destroyed");
    }

    /// Whether [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.live.is_none()
    }

    /// Whether the next query will re-render.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Number of render+readback round trips performed so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// The picking scene, `None` after teardown.
    #[must_use]
    pub fn scene(&self) -> Option<&PickingScene> {
        self.live.as_ref().map(|live| &live.scene)
    }

    /// Most recently hovered object (hover picking only).
    #[must_use]
    pub fn hovered(&self) -> Option<PickId> {
        self.hovered
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &PickingOptions {
        &self.options
    }

    /// Subscriber registry.
    pub fn events_mut(&mut self) -> &mut PickEvents {
        &mut self.events
    }

    /// Call `callback` for every resolved pick.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(PickId) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    /// Call `callback` only when `id` is picked.
    pub fn subscribe_to(
        &mut self,
        id: PickId,
        callback: impl FnMut(PickId) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe_to(id, callback)
    }
}

/// Convert a cursor position to pixel coordinates; `None` if negative.
fn screen_point((x, y): (f32, f32)) -> Option<(u32, u32)> {
    (x >= 0.0 && y >= 0.0).then_some((x as u32, y as u32))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use glam::Mat4;

    use super::*;
    use crate::input::MouseButton;
    use crate::picking::scene::{Geometry, PickingScene, TextureMap};

    /// Screen-space rectangle rasterizer standing in for the GPU.
    ///
    /// Record geometry is read as `[x0, y0]..[x1, y1]` in screen pixels
    /// (the quad's min and max corners); later records draw over earlier
    /// ones.
    struct FakeRenderer {
        size: (u32, u32),
        renders: u32,
        released: Vec<u32>,
    }

    struct FakeTarget {
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    }

    impl FakeRenderer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: (width, height),
                renders: 0,
                released: Vec::new(),
            }
        }
    }

    impl PickRenderer for FakeRenderer {
        type Target = FakeTarget;
        type Camera = ();

        fn output_size(&self) -> (u32, u32) {
            self.size
        }

        fn create_target(&mut self, width: u32, height: u32) -> FakeTarget {
            FakeTarget {
                width,
                height,
                rgba: vec![0; (4 * width * height) as usize],
            }
        }

        fn render(
            &mut self,
            scene: &PickingScene,
            _camera: &(),
            target: &mut FakeTarget,
        ) -> Result<(), PickError> {
            self.renders += 1;
            target.rgba.fill(255);
            for record in scene.records() {
                let p = &record.geometry.positions;
                let (x0, y0) = (p[0][0] as u32, p[0][1] as u32);
                let (x1, y1) = (p[2][0] as u32, p[2][1] as u32);
                for y in y0..y1.min(target.height) {
                    // Screen row y lands in buffer row height - 1 - y.
                    let row = target.height - 1 - y;
                    for x in x0..x1.min(target.width) {
                        let i = ((row * target.width + x) * 4) as usize;
                        target.rgba[i..i + 3]
                            .copy_from_slice(&record.material().color);
                    }
                }
            }
            Ok(())
        }

        fn read_pixels(
            &mut self,
            target: &FakeTarget,
            out: &mut [u8],
        ) -> Result<(), PickError> {
            if out.len() != target.rgba.len() {
                return Err(PickError::BufferSize {
                    expected: target.rgba.len(),
                    actual: out.len(),
                });
            }
            out.copy_from_slice(&target.rgba);
            Ok(())
        }

        fn release_material(&mut self, record: &PickRecord) {
            self.released.push(record.id().get());
        }
    }

    fn rect(id: PickId, min: [f32; 2], max: [f32; 2]) -> PickRecord {
        PickRecord::new(id, Geometry::quad(min, max, 0.0), Mat4::IDENTITY)
    }

    fn picker(renderer: &mut FakeRenderer) -> Picker<FakeRenderer> {
        Picker::new(renderer, PickingOptions::default())
    }

    fn release_left() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }
    }

    #[test]
    fn end_to_end_pick_and_remove() {
        let mut renderer = FakeRenderer::new(100, 100);
        let mut picker = picker(&mut renderer);
        let id = PickId::new(42).unwrap();

        let generic = Rc::new(RefCell::new(Vec::new()));
        let specific = Rc::new(RefCell::new(Vec::new()));
        let g = Rc::clone(&generic);
        let _ = picker.subscribe(move |id| g.borrow_mut().push(id.get()));
        let s = Rc::clone(&specific);
        let _ = picker.subscribe_to(id, move |id| s.borrow_mut().push(id.get()));

        picker.add(rect(id, [0.0, 0.0], [100.0, 100.0])).unwrap();
        assert_eq!(picker.pick(&mut renderer, &(), 50, 50).unwrap(), Some(id));
        assert_eq!(*generic.borrow(), vec![42]);
        assert_eq!(*specific.borrow(), vec![42]);

        let removed = picker.remove(&mut renderer, id).unwrap().unwrap();
        assert_eq!(removed.id(), id);
        for (x, y) in [(0, 0), (50, 50), (99, 100)] {
            assert_eq!(picker.pick(&mut renderer, &(), x, y).unwrap(), None);
        }
        assert_eq!(generic.borrow().len(), 1);
        assert_eq!(specific.borrow().len(), 1);
    }

    #[test]
    fn ids_come_from_the_picker_counter() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let a = picker.next_id().unwrap();
        let b = picker.next_id().unwrap();
        assert_eq!((a.get(), b.get()), (1, 2));
        // Removing never frees an ID for reuse.
        picker.add(rect(b, [0.0, 0.0], [1.0, 1.0])).unwrap();
        let _ = picker.remove(&mut renderer, b).unwrap();
        assert_eq!(picker.next_id().unwrap().get(), 3);
    }

    #[test]
    fn renders_once_per_invalidation() {
        let mut renderer = FakeRenderer::new(20, 20);
        let mut picker = picker(&mut renderer);
        assert!(picker.is_stale());

        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [20.0, 20.0])).unwrap();
        let _ = picker.pick(&mut renderer, &(), 5, 5).unwrap();
        let _ = picker.pick(&mut renderer, &(), 6, 6).unwrap();
        assert_eq!(renderer.renders, 1);
        assert!(!picker.is_stale());

        picker.handle_world_event(&mut renderer, WorldEvent::Moved);
        let _ = picker.pick(&mut renderer, &(), 5, 5).unwrap();
        let _ = picker.pick(&mut renderer, &(), 5, 5).unwrap();
        assert_eq!(renderer.renders, 2);

        let other = picker.next_id().unwrap();
        picker.add(rect(other, [0.0, 0.0], [2.0, 2.0])).unwrap();
        let _ = picker.pick(&mut renderer, &(), 5, 5).unwrap();
        assert_eq!(renderer.renders, 3);

        let _ = picker.remove(&mut renderer, other).unwrap();
        let _ = picker.pick(&mut renderer, &(), 5, 5).unwrap();
        let _ = picker.pick(&mut renderer, &(), 5, 5).unwrap();
        assert_eq!(renderer.renders, 4);
        assert_eq!(picker.render_count(), 4);
    }

    #[test]
    fn removing_an_absent_id_keeps_the_image() {
        let mut renderer = FakeRenderer::new(4, 4);
        let mut picker = picker(&mut renderer);
        let _ = picker.pick(&mut renderer, &(), 1, 1).unwrap();
        assert!(picker
            .remove(&mut renderer, PickId::new(9).unwrap())
            .unwrap()
            .is_none());
        assert!(renderer.released.is_empty());
        assert!(!picker.is_stale());
    }

    #[test]
    fn resize_reallocates_before_the_next_pick() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [200.0, 200.0])).unwrap();
        let _ = picker.pick(&mut renderer, &(), 5, 5).unwrap();

        renderer.size = (200, 150);
        picker.handle_world_event(
            &mut renderer,
            WorldEvent::ViewportChanged {
                width: 200,
                height: 150,
            },
        );
        assert!(picker.is_stale());
        assert_eq!(picker.pick(&mut renderer, &(), 180, 140).unwrap(), Some(id));
        assert_eq!(renderer.renders, 2);
    }

    #[test]
    fn unreported_resize_is_caught_at_query_time() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [64.0, 64.0])).unwrap();
        let _ = picker.pick(&mut renderer, &(), 1, 1).unwrap();

        renderer.size = (64, 64);
        assert_eq!(picker.pick(&mut renderer, &(), 60, 60).unwrap(), Some(id));
    }

    #[test]
    fn zero_sized_viewport_is_ignored() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let _ = picker.pick(&mut renderer, &(), 1, 1).unwrap();
        picker.viewport_changed(&mut renderer, 0, 10);
        assert!(!picker.is_stale());
    }

    #[test]
    fn later_record_overdraws_earlier_and_background_is_silent() {
        let mut renderer = FakeRenderer::new(50, 50);
        let mut picker = picker(&mut renderer);
        let back = picker.next_id().unwrap();
        let front = picker.next_id().unwrap();
        picker.add(rect(back, [0.0, 0.0], [30.0, 30.0])).unwrap();
        picker.add(rect(front, [10.0, 10.0], [20.0, 20.0])).unwrap();

        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let _ = picker.subscribe(move |_| *c.borrow_mut() += 1);

        assert_eq!(picker.pick(&mut renderer, &(), 15, 15).unwrap(), Some(front));
        assert_eq!(picker.pick(&mut renderer, &(), 5, 5).unwrap(), Some(back));
        assert_eq!(picker.pick(&mut renderer, &(), 40, 40).unwrap(), None);
        assert_eq!(picker.pick(&mut renderer, &(), 50, 10).unwrap(), None);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn only_primary_release_triggers_a_pick() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [10.0, 10.0])).unwrap();

        let moved = InputEvent::CursorMoved { x: 4.0, y: 4.0 };
        assert_eq!(picker.handle_input(&mut renderer, &(), moved).unwrap(), None);
        assert_eq!(renderer.renders, 0);

        let press = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        };
        let right = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        };
        assert_eq!(picker.handle_input(&mut renderer, &(), press).unwrap(), None);
        assert_eq!(picker.handle_input(&mut renderer, &(), right).unwrap(), None);
        assert_eq!(renderer.renders, 0);

        assert_eq!(
            picker.handle_input(&mut renderer, &(), release_left()).unwrap(),
            Some(id)
        );
    }

    #[test]
    fn configured_button_replaces_primary() {
        let mut renderer = FakeRenderer::new(10, 10);
        let options = PickingOptions {
            button: MouseButton::Right,
            ..PickingOptions::default()
        };
        let mut picker = Picker::new(&mut renderer, options);
        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [10.0, 10.0])).unwrap();

        assert_eq!(
            picker.handle_input(&mut renderer, &(), release_left()).unwrap(),
            None
        );
        let right = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        };
        assert_eq!(
            picker.handle_input(&mut renderer, &(), right).unwrap(),
            Some(id)
        );
    }

    #[test]
    fn hover_reports_changes_only() {
        let mut renderer = FakeRenderer::new(20, 20);
        let options = PickingOptions {
            hover: true,
            ..PickingOptions::default()
        };
        let mut picker = Picker::new(&mut renderer, options);
        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [10.0, 10.0])).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _ = picker.events_mut().on_hover(move |h| s.borrow_mut().push(h));

        for (x, y) in [(2.0, 2.0), (3.0, 3.0), (15.0, 15.0), (-1.0, 4.0)] {
            let _ = picker
                .handle_input(&mut renderer, &(), InputEvent::CursorMoved { x, y })
                .unwrap();
        }
        assert_eq!(*seen.borrow(), vec![Some(id), None]);
        assert_eq!(picker.hovered(), None);
        assert_eq!(renderer.renders, 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [1.0, 1.0])).unwrap();
        let _ = picker.pick(&mut renderer, &(), 0, 1).unwrap();
        assert!(matches!(
            picker.add(rect(id, [0.0, 0.0], [1.0, 1.0])),
            Err(PickError::DuplicateId(dup)) if dup == id
        ));
        assert!(!picker.is_stale());
    }

    #[test]
    fn destroy_releases_materials_in_reverse_and_is_idempotent() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let shared = Geometry::quad([0.0, 0.0], [10.0, 10.0], 0.0);
        for _ in 0..3 {
            let id = picker.next_id().unwrap();
            let record = PickRecord::new(id, Arc::clone(&shared), Mat4::IDENTITY)
                .with_map(TextureMap {
                    width: 1,
                    height: 1,
                    texels: vec![255; 4],
                });
            picker.add(record).unwrap();
        }
        let _ = picker.subscribe(|_| {});

        picker.destroy(&mut renderer);
        assert_eq!(renderer.released, vec![3, 2, 1]);
        assert!(picker.is_destroyed());
        assert!(picker.scene().is_none());
        assert!(picker.events_mut().is_empty());
        // Geometry survives: only the caller's handle is left.
        assert_eq!(Arc::strong_count(&shared), 1);

        picker.destroy(&mut renderer);
        assert_eq!(renderer.released.len(), 3);
    }

    #[test]
    fn removed_records_release_their_material_without_a_render() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        let first = picker.next_id().unwrap();
        let second = picker.next_id().unwrap();
        picker.add(rect(first, [0.0, 0.0], [5.0, 5.0])).unwrap();
        picker.add(rect(second, [5.0, 5.0], [10.0, 10.0])).unwrap();
        let _ = picker.pick(&mut renderer, &(), 1, 1).unwrap();

        let _ = picker.remove(&mut renderer, first).unwrap();
        assert_eq!(renderer.released, vec![1]);

        picker.destroy(&mut renderer);
        assert_eq!(renderer.released, vec![1, 2]);
        assert_eq!(renderer.renders, 1);
    }

    #[test]
    fn empty_viewport_picks_nothing_until_it_grows() {
        let mut renderer = FakeRenderer::new(0, 0);
        let mut picker = picker(&mut renderer);
        let id = picker.next_id().unwrap();
        picker.add(rect(id, [0.0, 0.0], [10.0, 10.0])).unwrap();

        assert_eq!(picker.pick(&mut renderer, &(), 0, 0).unwrap(), None);
        assert_eq!(renderer.renders, 0);

        renderer.size = (10, 10);
        assert_eq!(picker.pick(&mut renderer, &(), 5, 5).unwrap(), Some(id));
        assert_eq!(renderer.renders, 1);
    }

    #[test]
    fn operations_after_destroy_are_rejected_without_panicking() {
        let mut renderer = FakeRenderer::new(10, 10);
        let mut picker = picker(&mut renderer);
        picker.destroy(&mut renderer);

        let id = PickId::new(1).unwrap();
        assert!(matches!(
            picker.pick(&mut renderer, &(), 1, 1),
            Err(PickError::Destroyed)
        ));
        assert!(matches!(
            picker.add(rect(id, [0.0, 0.0], [1.0, 1.0])),
            Err(PickError::Destroyed)
        ));
        assert!(matches!(
            picker.remove(&mut renderer, id),
            Err(PickError::Destroyed)
        ));
        assert!(matches!(picker.next_id(), Err(PickError::Destroyed)));
        assert_eq!(
            picker.handle_input(&mut renderer, &(), release_left()).unwrap(),
            None
        );
        picker.handle_world_event(&mut renderer, WorldEvent::Moved);
        picker.viewport_changed(&mut renderer, 5, 5);
        assert_eq!(renderer.renders, 0);
    }
}
