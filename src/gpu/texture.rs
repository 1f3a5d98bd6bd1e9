//! Off-screen picking target.

/// Color format of the picking target. Linear (not sRGB) so byte values
/// survive the pass unchanged.
pub const PICK_COLOR_FORMAT: wgpu::TextureFormat =
    wgpu::TextureFormat::Rgba8Unorm;

/// Depth format of the picking target.
pub const PICK_DEPTH_FORMAT: wgpu::TextureFormat =
    wgpu::TextureFormat::Depth32Float;

/// Color and depth textures for the picking pass.
///
/// The color texture is created with `RENDER_ATTACHMENT | COPY_SRC` so it
/// can be drawn into and then copied to a staging buffer for readback.
pub struct PickTarget {
    /// Color texture holding encoded pick IDs.
    pub texture: wgpu::Texture,
    /// Default view of the color texture.
    pub view: wgpu::TextureView,
    /// Depth view for occlusion.
    pub depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl PickTarget {
    /// Create a target with the given dimensions (clamped to at least 1x1).
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let size = wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Picking Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: PICK_COLOR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Picking Depth Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: PICK_DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view =
            depth_texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            depth_view,
            width: size.width,
            height: size.height,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in a tightly packed RGBA8 copy of the whole target.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        4 * self.width as usize * self.height as usize
    }

    /// Row pitch of the staging copy, padded to wgpu's copy alignment.
    #[must_use]
    pub fn padded_bytes_per_row(&self) -> u32 {
        padded_bytes_per_row(self.width)
    }
}

/// RGBA8 row pitch for `width` pixels, rounded up to
/// [`wgpu::COPY_BYTES_PER_ROW_ALIGNMENT`].
#[must_use]
pub fn padded_bytes_per_row(width: u32) -> u32 {
    (width * 4).div_ceil(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT)
        * wgpu::COPY_BYTES_PER_ROW_ALIGNMENT
}

/// Copy a padded, top-down staging image into `out` as tightly packed rows,
/// bottom row first.
pub fn unpad_and_flip(
    padded: &[u8],
    width: u32,
    height: u32,
    out: &mut [u8],
) {
    let row_bytes = width as usize * 4;
    let pitch = padded_bytes_per_row(width) as usize;
    for (dst_row, src_row) in (0..height as usize).rev().enumerate() {
        let src = &padded[src_row * pitch..src_row * pitch + row_bytes];
        out[dst_row * row_bytes..(dst_row + 1) * row_bytes].copy_from_slice(src);
    }
}
