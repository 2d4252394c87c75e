//! Application context and event handling
//!
//! [`AppContext`] owns the state the shell's handlers read and write: the window size
//! record, the last sampled mouse position and the diagnostic stream. Handlers run on
//! the main thread, right after each poll.

use std::io::Write;

use crate::diagnostics::{self, PlatformErrorCode};
use crate::input::{Action, KeyCode, MouseButton, ShellEvent};
use crate::window::{Viewport, WindowBackend};

/// Window dimensions recorded at startup
///
/// Resizes only move the viewport; this record keeps the configured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in screen coordinates
    pub width: u32,
    /// Height in screen coordinates
    pub height: u32,
}

/// Cursor position sampled on the last left click, window-local
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MousePosition {
    /// Horizontal offset from the left edge
    pub x: f64,
    /// Vertical offset from the top edge
    pub y: f64,
}

/// Event callbacks installed on the window
pub trait EventHandler {
    /// The framebuffer was resized to `width` x `height` pixels
    fn on_resize(&mut self, window: &mut dyn WindowBackend, width: i32, height: i32);

    /// A key changed state
    fn on_key(&mut self, window: &mut dyn WindowBackend, key: KeyCode, action: Action);

    /// A mouse button changed state
    fn on_mouse_button(&mut self, window: &mut dyn WindowBackend, button: MouseButton, action: Action);

    /// The windowing subsystem reported an error
    ///
    /// Must not panic and must not affect control flow.
    fn on_error(&mut self, code: PlatformErrorCode, description: &str);
}

/// State shared by the shell's event handlers
pub struct AppContext<W: Write> {
    window_size: WindowSize,
    mouse: MousePosition,
    out: W,
}

impl<W: Write> AppContext<W> {
    /// Create a context for a window of the given size, reporting to `out`
    pub const fn new(window_size: WindowSize, out: W) -> Self {
        Self {
            window_size,
            mouse: MousePosition { x: 0.0, y: 0.0 },
            out,
        }
    }

    /// Window size record
    pub const fn window_size(&self) -> WindowSize {
        self.window_size
    }

    /// Last sampled mouse position
    pub const fn mouse(&self) -> MousePosition {
        self.mouse
    }

    /// Diagnostic stream
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Write a line to the diagnostic stream, ignoring write failures
    pub fn print_line(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    /// Route one polled event to its handler
    pub fn dispatch(&mut self, window: &mut dyn WindowBackend, event: ShellEvent) {
        match event {
            ShellEvent::FramebufferResized { width, height } => self.on_resize(window, width, height),
            ShellEvent::Key { key, action } => self.on_key(window, key, action),
            ShellEvent::MouseButton { button, action } => self.on_mouse_button(window, button, action),
            // The window system already raised the close flag
            ShellEvent::CloseRequested => log::debug!("Close requested by the window system"),
        }
    }
}

impl<W: Write> EventHandler for AppContext<W> {
    fn on_resize(&mut self, window: &mut dyn WindowBackend, width: i32, height: i32) {
        log::debug!("Framebuffer resized to {}x{}", width, height);
        window.set_viewport(Viewport::full(width, height));
    }

    fn on_key(&mut self, window: &mut dyn WindowBackend, key: KeyCode, action: Action) {
        if key == KeyCode::Escape && action == Action::Press {
            log::info!("Escape pressed, closing window");
            window.set_should_close(true);
        }
    }

    fn on_mouse_button(&mut self, window: &mut dyn WindowBackend, button: MouseButton, action: Action) {
        if button == MouseButton::Left && action == Action::Press {
            let (x, y) = window.cursor_position();
            self.mouse = MousePosition { x, y };
            let line = format!(
                "Mouse X: {}, Mouse Y: {}",
                diagnostics::format_general(x),
                diagnostics::format_general(y)
            );
            self.print_line(&line);
        }
    }

    fn on_error(&mut self, code: PlatformErrorCode, description: &str) {
        diagnostics::report(&mut self.out, code, description);
    }
}
