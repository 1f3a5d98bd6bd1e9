//! Notifications from the host "world" that invalidate the picking image.

#[cfg(feature = "viewer")]
use winit::event::WindowEvent;

/// World-level change the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// The camera or view moved; the picking image is stale.
    Moved,
    /// The viewport was resized. Must be delivered before the next pick.
    ViewportChanged {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

#[cfg(feature = "viewer")]
impl WorldEvent {
    /// Translate a winit window event, if it affects the picking image.
    #[must_use]
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::Resized(size) => Some(Self::ViewportChanged {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}
