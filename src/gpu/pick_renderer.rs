//! wgpu implementation of the picking renderer.
//!
//! Draws every pick record in its flat ID color into an off-screen
//! `Rgba8Unorm` target cleared to white, with depth testing so the nearest
//! record wins each pixel. Readback copies the whole target into a padded
//! staging buffer, waits for the map, and repacks it bottom row first.

use std::sync::mpsc;
use std::sync::{Arc, Weak};

use rustc_hash::{FxHashMap, FxHashSet};
use wgpu::util::DeviceExt;

use super::render_context::RenderContext;
use super::texture::{
    unpad_and_flip, PickTarget, PICK_COLOR_FORMAT, PICK_DEPTH_FORMAT,
};
use crate::camera::{Camera, CameraUniform};
use crate::error::PickError;
use crate::picking::{
    Geometry, GeometryId, PickId, PickRecord, PickRenderer, PickingScene,
    TextureMap,
};

const SHADER_SOURCE: &str =
    include_str!("../../assets/shaders/picking_flat.wgsl");

/// Vertex layout of the picking pass.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PickVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

impl PickVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-record uniform: transform, ID color and cutout parameters.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct RecordUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    /// x: 1.0 when a cutout map is bound, y: alpha cutoff
    map_params: [f32; 4],
}

/// GPU buffers for one shared geometry. Dropped once the geometry is gone.
struct GpuMesh {
    geometry: Weak<Geometry>,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// GPU material for one pick record.
struct GpuMaterial {
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Whether the record asked for a cutout map when this was built.
    requested_map: bool,
    /// Whether a valid map is actually bound.
    has_map: bool,
    /// Keeps the cutout texture alive for the bind group.
    _map: Option<wgpu::Texture>,
}

/// Picking renderer backed by a wgpu device.
pub struct WgpuPickRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    size: (u32, u32),
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    record_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    /// 1x1 opaque white bound when a record has no cutout map.
    blank_map: wgpu::TextureView,
    meshes: FxHashMap<GeometryId, GpuMesh>,
    materials: FxHashMap<PickId, GpuMaterial>,
    staging: Option<(u64, wgpu::Buffer)>,
    alpha_cutoff: f32,
}

impl WgpuPickRenderer {
    /// Build the picking pipeline on `context`'s device.
    #[must_use]
    pub fn new(context: &RenderContext, alpha_cutoff: f32) -> Self {
        let device = context.device.clone();
        let queue = context.queue.clone();

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Picking Camera Buffer"),
                contents: bytemuck::bytes_of(&CameraUniform::new()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Picking Camera Bind Group Layout"),
                entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Picking Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let record_layout = record_bind_group_layout(&device);
        let pipeline =
            create_pipeline(&device, &camera_layout, &record_layout);

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Picking Cutout Sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let blank_map = upload_map(
            &device,
            &queue,
            &TextureMap {
                width: 1,
                height: 1,
                texels: vec![255; 4],
            },
        )
        .create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            device,
            queue,
            size: context.size(),
            pipeline,
            camera_buffer,
            camera_bind_group,
            record_layout,
            sampler,
            blank_map,
            meshes: FxHashMap::default(),
            materials: FxHashMap::default(),
            staging: None,
            alpha_cutoff,
        }
    }

    /// Record a new output size; the picker reallocates its target on the
    /// next query or on an explicit viewport notification.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size = (width, height);
        }
    }

    /// Number of geometries with live GPU buffers.
    #[must_use]
    pub fn cached_mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of records with live GPU materials.
    #[must_use]
    pub fn cached_material_count(&self) -> usize {
        self.materials.len()
    }

    /// Upload buffers and materials for the scene, dropping anything the
    /// scene no longer references.
    fn sync_scene(&mut self, scene: &PickingScene) {
        self.meshes.retain(|_, mesh| mesh.geometry.strong_count() > 0);
        let live: FxHashSet<PickId> =
            scene.records().iter().map(PickRecord::id).collect();
        self.materials.retain(|id, _| live.contains(id));

        for record in scene.records() {
            let geometry = &record.geometry;
            if geometry.index_count() > 0
                && !self.meshes.contains_key(&geometry.id())
            {
                let mesh = upload_mesh(&self.device, geometry);
                let _ = self.meshes.insert(geometry.id(), mesh);
            }
            let wants_map = record.material().map.is_some();
            let cached = matches!(
                self.materials.get(&record.id()),
                Some(material) if material.requested_map == wants_map
            );
            if !cached {
                let material = self.create_material(record);
                let _ = self.materials.insert(record.id(), material);
            }
            if let Some(material) = self.materials.get(&record.id()) {
                let uniform = record_uniform(
                    record,
                    material.has_map,
                    self.alpha_cutoff,
                );
                self.queue.write_buffer(
                    &material.uniform,
                    0,
                    bytemuck::bytes_of(&uniform),
                );
            }
        }
    }

    fn create_material(&self, record: &PickRecord) -> GpuMaterial {
        let map = record
            .material()
            .map
            .as_ref()
            .filter(|map| {
                let valid = map.width > 0
                    && map.height > 0
                    && map.texels.len()
                        == 4 * map.width as usize * map.height as usize;
                if !valid {
                    log::warn!(
                        "ignoring malformed cutout map on pick id {}",
                        record.id()
                    );
                }
                valid
            })
            .map(|map| upload_map(&self.device, &self.queue, map));
        let map_view = map.as_ref().map(|texture| {
            texture.create_view(&wgpu::TextureViewDescriptor::default())
        });

        let uniform = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Picking Record Uniform"),
            size: size_of::<RecordUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group =
            self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Picking Record Bind Group"),
                layout: &self.record_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(
                            map_view.as_ref().unwrap_or(&self.blank_map),
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(
                            &self.sampler,
                        ),
                    },
                ],
            });

        GpuMaterial {
            uniform,
            bind_group,
            requested_map: record.material().map.is_some(),
            has_map: map.is_some(),
            _map: map,
        }
    }

    fn encode_picking_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        scene: &PickingScene,
        target: &PickTarget,
    ) {
        let mut render_pass =
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Picking Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // White decodes to the background sentinel.
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &target.depth_view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        for record in scene.records() {
            let (Some(mesh), Some(material)) = (
                self.meshes.get(&record.geometry.id()),
                self.materials.get(&record.id()),
            ) else {
                continue;
            };
            render_pass.set_bind_group(1, &material.bind_group, &[]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(
                mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    fn staging_buffer(&mut self, size: u64) -> wgpu::Buffer {
        if let Some((cached, buffer)) = &self.staging {
            if *cached == size {
                return buffer.clone();
            }
        }
        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Picking Staging Buffer"),
            size,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });
        self.staging = Some((size, buffer.clone()));
        buffer
    }
}

impl PickRenderer for WgpuPickRenderer {
    type Target = PickTarget;
    type Camera = Camera;

    fn output_size(&self) -> (u32, u32) {
        self.size
    }

    fn create_target(&mut self, width: u32, height: u32) -> PickTarget {
        PickTarget::new(&self.device, width, height)
    }

    fn render(
        &mut self,
        scene: &PickingScene,
        camera: &Camera,
        target: &mut PickTarget,
    ) -> Result<(), PickError> {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(camera);
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&uniform),
        );
        self.sync_scene(scene);

        let mut encoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Picking Encoder"),
                });
        self.encode_picking_pass(&mut encoder, scene, target);
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }

    fn read_pixels(
        &mut self,
        target: &PickTarget,
        out: &mut [u8],
    ) -> Result<(), PickError> {
        if out.len() != target.byte_len() {
            return Err(PickError::BufferSize {
                expected: target.byte_len(),
                actual: out.len(),
            });
        }
        let pitch = target.padded_bytes_per_row();
        let size = u64::from(pitch) * u64::from(target.height());
        let staging = self.staging_buffer(size);

        let mut encoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Picking Readback Encoder"),
                });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &target.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &staging,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(pitch),
                    rows_per_image: Some(target.height()),
                },
            },
            wgpu::Extent3d {
                width: target.width(),
                height: target.height(),
                depth_or_array_layers: 1,
            },
        );
        let _ = self.queue.submit(std::iter::once(encoder.finish()));

        let slice = staging.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        let _ = self.device
            .poll(wgpu::PollType::Wait)
            .map_err(|e| PickError::Readback(e.to_string()))?;
        rx.recv()
            .map_err(|e| PickError::Readback(e.to_string()))?
            .map_err(|e| PickError::Readback(e.to_string()))?;

        {
            let data = slice.get_mapped_range();
            unpad_and_flip(&data, target.width(), target.height(), out);
        }
        staging.unmap();
        Ok(())
    }

    fn release_material(&mut self, record: &PickRecord) {
        let _ = self.materials.remove(&record.id());
    }
}

fn uniform_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn record_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Picking Record Bind Group Layout"),
        entries: &[
            uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float {
                        filterable: true,
                    },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(
                    wgpu::SamplerBindingType::Filtering,
                ),
                count: None,
            },
        ],
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    camera_layout: &wgpu::BindGroupLayout,
    record_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Picking Flat Shader"),
        source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
    });

    let layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Picking Pipeline Layout"),
            bind_group_layouts: &[camera_layout, record_layout],
            push_constant_ranges: &[],
        });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Picking Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[PickVertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: PICK_COLOR_FORMAT,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: PICK_DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn upload_mesh(device: &wgpu::Device, geometry: &Arc<Geometry>) -> GpuMesh {
    let vertices: Vec<PickVertex> = geometry
        .positions
        .iter()
        .enumerate()
        .map(|(i, &position)| PickVertex {
            position,
            uv: geometry.uvs.get(i).copied().unwrap_or([0.0; 2]),
        })
        .collect();

    let vertex_buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Picking Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
    let index_buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Picking Index Buffer"),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

    GpuMesh {
        geometry: Arc::downgrade(geometry),
        vertex_buffer,
        index_buffer,
        index_count: geometry.index_count(),
    }
}

fn upload_map(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    map: &TextureMap,
) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: map.width,
        height: map.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Picking Cutout Map"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &map.texels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * map.width),
            rows_per_image: Some(map.height),
        },
        size,
    );
    texture
}

fn record_uniform(
    record: &PickRecord,
    has_map: bool,
    alpha_cutoff: f32,
) -> RecordUniform {
    let [r, g, b] = record.material().color;
    RecordUniform {
        model: record.transform.to_cols_array_2d(),
        color: [
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        ],
        map_params: [if has_map { 1.0 } else { 0.0 }, alpha_cutoff, 0.0, 0.0],
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::options::{CameraOptions, PickingOptions};
    use crate::picking::Picker;

    #[test]
    fn record_uniform_carries_normalized_id_color() {
        let id = PickId::new(70_000).unwrap();
        let record = PickRecord::new(
            id,
            Geometry::quad([0.0, 0.0], [1.0, 1.0], 0.0),
            Mat4::IDENTITY,
        );
        let uniform = record_uniform(&record, false, 0.5);
        let [r, g, b] = id.color();
        let bytes = uniform.color.map(|c| (c * 255.0).round() as u8);
        assert_eq!(&bytes[..3], &[r, g, b]);
        assert_eq!(bytes[3], 255);
        assert_eq!(uniform.map_params, [0.0, 0.5, 0.0, 0.0]);
        assert_eq!(size_of::<RecordUniform>() % 16, 0);
    }

    fn headless(test: &str) -> Option<RenderContext> {
        match pollster::block_on(RenderContext::new_headless(64, 64)) {
            Ok(context) => Some(context),
            Err(e) => {
                eprintln!("skipping {test}: {e}");
                None
            }
        }
    }

    fn camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            1.0,
            &CameraOptions::default(),
        )
    }

    /// Renders on a real adapter when one is available; skipped otherwise.
    #[test]
    fn gpu_pick_resolves_quadrants() {
        let Some(context) = headless("gpu_pick_resolves_quadrants") else {
            return;
        };
        let mut renderer = WgpuPickRenderer::new(&context, 0.5);
        let mut picker =
            Picker::new(&mut renderer, PickingOptions::default());
        let camera = camera();

        // Top-left quadrant in front, full-screen backdrop behind it.
        let back = picker.next_id().unwrap();
        let front = picker.next_id().unwrap();
        let backdrop = Geometry::quad([-10.0, -10.0], [10.0, 10.0], -1.0);
        let corner = Geometry::quad([-10.0, 0.0], [0.0, 10.0], 0.0);
        picker
            .add(PickRecord::new(back, Arc::clone(&backdrop), Mat4::IDENTITY))
            .unwrap();
        picker
            .add(PickRecord::new(front, corner, Mat4::IDENTITY))
            .unwrap();

        assert_eq!(picker.pick(&mut renderer, &camera, 10, 10).unwrap(), Some(front));
        assert_eq!(picker.pick(&mut renderer, &camera, 54, 10).unwrap(), Some(back));
        assert_eq!(picker.pick(&mut renderer, &camera, 10, 54).unwrap(), Some(back));
        assert_eq!(renderer.cached_mesh_count(), 2);

        let _ = picker.remove(&mut renderer, back).unwrap();
        assert_eq!(picker.pick(&mut renderer, &camera, 54, 54).unwrap(), None);
        assert_eq!(renderer.cached_material_count(), 1);

        picker.destroy(&mut renderer);
        assert_eq!(renderer.cached_material_count(), 0);
    }

    /// A half-transparent cutout map leaves its transparent half unpickable,
    /// also when an ID is re-added with a map before the next render.
    #[test]
    fn gpu_cutout_map_discards_transparent_texels() {
        let Some(context) =
            headless("gpu_cutout_map_discards_transparent_texels")
        else {
            return;
        };
        let mut renderer = WgpuPickRenderer::new(&context, 0.5);
        let mut picker =
            Picker::new(&mut renderer, PickingOptions::default());
        let camera = camera();

        // Covers the whole 64x64 view; u runs left to right.
        let quad = Geometry::quad([-2.0, -2.0], [2.0, 2.0], 0.0);
        let id = picker.next_id().unwrap();
        picker
            .add(PickRecord::new(id, Arc::clone(&quad), Mat4::IDENTITY))
            .unwrap();
        assert_eq!(picker.pick(&mut renderer, &camera, 54, 32).unwrap(), Some(id));

        let _ = picker.remove(&mut renderer, id).unwrap();
        let half = TextureMap {
            width: 2,
            height: 1,
            texels: vec![0, 0, 0, 255, 0, 0, 0, 0],
        };
        picker
            .add(PickRecord::new(id, quad, Mat4::IDENTITY).with_map(half))
            .unwrap();
        assert_eq!(picker.pick(&mut renderer, &camera, 10, 32).unwrap(), Some(id));
        assert_eq!(picker.pick(&mut renderer, &camera, 54, 32).unwrap(), None);
    }
}
