//! Backend contract for the windowing subsystem
//!
//! Two traits split the subsystem the way GLFW does: process-wide state
//! ([`Platform`]) and per-window state including the GL context ([`WindowBackend`]).

use crate::config::{ClearColor, ContextHints, WindowConfig};
use crate::diagnostics::PlatformError;
use crate::error::ShellResult;
use crate::input::ShellEvent;
use crate::placement::VideoMode;

/// Process-wide windowing subsystem
///
/// Implementations must have their error handler in place before [`Platform::init`]
/// touches the native library, and must queue every reported error until
/// [`Platform::drain_errors`] is called.
pub trait Platform {
    /// Window type created by this platform
    type Window: WindowBackend;

    /// Initialize the subsystem
    fn init(&mut self) -> ShellResult<()>;

    /// Apply hints for the GL context of windows created afterwards
    fn apply_context_hints(&mut self, hints: &ContextHints);

    /// Create a window with its GL context
    fn create_window(&mut self, config: &WindowConfig) -> ShellResult<Self::Window>;

    /// Current video mode of the primary monitor, if there is one
    fn primary_video_mode(&mut self) -> Option<VideoMode>;

    /// Take the errors reported since the last call, oldest first
    fn drain_errors(&mut self) -> Vec<PlatformError>;

    /// Release the subsystem
    ///
    /// Every window must be dropped first. Safe to call more than once.
    fn terminate(&mut self);
}

/// A window and the GL context it owns
///
/// Not `Send`: the context is bound to the thread that made it current.
pub trait WindowBackend {
    /// Bind this window's GL context to the calling thread
    fn make_context_current(&mut self);

    /// Resolve GL function pointers through the window system
    fn load_gl(&mut self) -> ShellResult<()>;

    /// Sync buffer swaps to the display refresh, or swap immediately
    fn set_vsync(&mut self, enabled: bool);

    /// Start delivering framebuffer-resize, key and mouse-button events
    fn enable_event_delivery(&mut self);

    /// Move the window's top-left corner to screen coordinates
    fn set_position(&mut self, x: i32, y: i32);

    /// Whether the close flag is set
    fn should_close(&self) -> bool;

    /// Set or clear the close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Cursor position relative to the window's top-left corner
    fn cursor_position(&self) -> (f64, f64);

    /// Clear the color buffer
    fn clear(&mut self, color: ClearColor);

    /// Map rendering to a region of the framebuffer
    fn set_viewport(&mut self, viewport: Viewport);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window system events without blocking
    fn poll_events(&mut self) -> Vec<ShellEvent>;
}

/// Framebuffer region rendering is mapped to, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a whole framebuffer of the given size
    #[must_use]
    pub const fn full(width: i32, height: i32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}
