//! Color-ID encoding: pick IDs as base-255 digits in the RGB channels.
//!
//! Channel 0 (red) holds the least significant digit and channel 2 (blue)
//! the most significant one. Every digit is at most 254, so an encoded
//! color is never pure white; the picking target is cleared to white, which
//! decodes to [`BACKGROUND_SENTINEL`].

use std::fmt;
use std::num::NonZeroU32;

use crate::error::PickError;

/// Radix of the per-channel encoding.
pub const CHANNEL_BASE: u32 = 255;

/// Decoded value of a pure-white pixel: the cleared background.
pub const BACKGROUND_SENTINEL: u32 =
    255 * CHANNEL_BASE * CHANNEL_BASE + 255 * CHANNEL_BASE + 255;

/// Largest ID whose three base-255 digits each fit in a channel byte.
pub const MAX_PICK_ID: u32 = CHANNEL_BASE * CHANNEL_BASE * CHANNEL_BASE - 1;

/// Identifier of a pickable object. Always in `1..=MAX_PICK_ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickId(NonZeroU32);

impl PickId {
    /// Wrap a raw value, rejecting `0`, the background sentinel, and values
    /// too large to encode.
    #[must_use]
    pub fn new(raw: u32) -> Option<Self> {
        if raw > MAX_PICK_ID || raw == BACKGROUND_SENTINEL {
            return None;
        }
        NonZeroU32::new(raw).map(Self)
    }

    /// The raw integer value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Flat RGB color encoding this ID.
    #[must_use]
    pub fn color(self) -> [u8; 3] {
        encode(self.get())
    }
}

impl fmt::Display for PickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split `value` into three base-255 digits, least significant first.
///
/// Values above [`MAX_PICK_ID`] are truncated to their low three digits.
#[must_use]
pub fn encode(value: u32) -> [u8; 3] {
    [
        (value % CHANNEL_BASE) as u8,
        ((value / CHANNEL_BASE) % CHANNEL_BASE) as u8,
        ((value / (CHANNEL_BASE * CHANNEL_BASE)) % CHANNEL_BASE) as u8,
    ]
}

/// Recombine the first three bytes of an RGBA pixel into a raw value.
///
/// Uses raw byte values, not normalized floats:
/// `c2 * 255² + c1 * 255 + c0`.
#[must_use]
pub fn decode(pixel: [u8; 3]) -> u32 {
    u32::from(pixel[2]) * CHANNEL_BASE * CHANNEL_BASE
        + u32::from(pixel[1]) * CHANNEL_BASE
        + u32::from(pixel[0])
}

/// Resolve a decoded raw value to a pick ID.
///
/// `None` for the white background and for black, which no pickable is
/// ever assigned.
#[must_use]
pub fn resolve(raw: u32) -> Option<PickId> {
    PickId::new(raw)
}

/// Monotonic pick-ID allocator. IDs start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator whose first ID is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next unused ID and advance the counter.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::IdSpaceExhausted`] once all encodable IDs are
    /// taken. The counter does not wrap.
    pub fn next_id(&mut self) -> Result<PickId, PickError> {
        let id = PickId::new(self.next).ok_or(PickError::IdSpaceExhausted)?;
        self.next += 1;
        Ok(id)
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }
}
