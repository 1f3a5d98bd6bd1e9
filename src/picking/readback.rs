//! CPU-side mirror of the picking target.
//!
//! Rows are stored bottom-to-top while screen coordinates run top-to-bottom,
//! so lookups flip the vertical axis before indexing.

use super::color_id::{self, PickId};

/// Result of sampling the readback buffer at a screen point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSample {
    /// The point lies outside the target.
    OutOfBounds,
    /// Background or a value no pickable is assigned.
    Background,
    /// A pickable object.
    Hit(PickId),
}

impl PixelSample {
    /// The picked ID, if any.
    #[must_use]
    pub fn id(self) -> Option<PickId> {
        match self {
            Self::Hit(id) => Some(id),
            Self::OutOfBounds | Self::Background => None,
        }
    }
}

/// RGBA8 pixel buffer of `4 * width * height` bytes.
#[derive(Debug, Clone)]
pub struct ReadbackBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl ReadbackBuffer {
    /// Allocate a zeroed buffer for a `width` x `height` target.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; byte_len(width, height)],
        }
    }

    /// Reallocate for new target dimensions. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.bytes = vec![0; byte_len(width, height)];
    }

    /// Buffer width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes, bottom row first.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable raw bytes for the renderer to fill.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Flat pixel index of screen point `(x, y)`, `None` if outside.
    #[must_use]
    pub fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y > self.height || self.height == 0 {
            return None;
        }
        // y == 0 flips to row `height`, one past the top row.
        let row = buffer_row(y, self.height).min(self.height - 1);
        Some(x as usize + row as usize * self.width as usize)
    }

    /// Decode the raw value stored at screen point `(x, y)`.
    #[must_use]
    pub fn raw_at(&self, x: u32, y: u32) -> Option<u32> {
        let offset = self.pixel_index(x, y)? * 4;
        let px = self.bytes.get(offset..offset + 3)?;
        Some(color_id::decode([px[0], px[1], px[2]]))
    }

    /// Sample the pick ID at screen point `(x, y)`.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> PixelSample {
        self.raw_at(x, y)
            .map_or(PixelSample::OutOfBounds, |raw| {
                color_id::resolve(raw)
                    .map_or(PixelSample::Background, PixelSample::Hit)
            })
    }
}

/// Buffer row for screen row `y` in a target `height` pixels tall.
#[must_use]
pub fn buffer_row(y: u32, height: u32) -> u32 {
    height.saturating_sub(y)
}

fn byte_len(width: u32, height: u32) -> usize {
    4 * width as usize * height as usize
}
