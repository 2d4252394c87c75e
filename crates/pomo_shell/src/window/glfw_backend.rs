//! GLFW window system with an OpenGL context
//!
//! GL entry points are loaded with the `gl` crate through GLFW's proc address lookup.
//! GLFW reports errors through a process-wide callback; this backend forwards them into
//! a channel so the shell can hand them to its [`crate::EventHandler`] in order.

#![allow(unsafe_code)] // Raw GL calls

use std::sync::mpsc::{self, Receiver, Sender};

use glfw::Context;

use crate::config::{ClearColor, ContextHints, WindowConfig};
use crate::diagnostics::{PlatformError, PlatformErrorCode};
use crate::error::{ShellError, ShellResult};
use crate::input::{Action, KeyCode, MouseButton, ShellEvent};
use crate::placement::VideoMode;
use crate::window::backend::{Platform, Viewport, WindowBackend};

/// GLFW subsystem handle
pub struct GlfwPlatform {
    glfw: Option<glfw::Glfw>,
    error_tx: Sender<PlatformError>,
    error_rx: Receiver<PlatformError>,
}

impl GlfwPlatform {
    /// Create an uninitialized platform
    #[must_use]
    pub fn new() -> Self {
        let (error_tx, error_rx) = mpsc::channel();
        Self { glfw: None, error_tx, error_rx }
    }

    fn glfw_mut(&mut self) -> ShellResult<&mut glfw::Glfw> {
        self.glfw.as_mut().ok_or(ShellError::SubsystemInit)
    }
}

impl Default for GlfwPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for GlfwPlatform {
    type Window = GlfwWindow;

    fn init(&mut self) -> ShellResult<()> {
        let sender = self.error_tx.clone();
        // Installed by glfw::init ahead of glfwInit itself
        let callback = move |error: glfw::Error, description: String| {
            log::warn!("GLFW reported {:?}: {}", error, description);
            let _ = sender.send(PlatformError::new(PlatformErrorCode::from(error), description));
        };

        let glfw = glfw::init(callback).map_err(|e| {
            log::error!("glfwInit failed: {:?}", e);
            ShellError::SubsystemInit
        })?;

        log::info!("GLFW {} initialized", glfw::get_version_string());
        self.glfw = Some(glfw);
        Ok(())
    }

    fn apply_context_hints(&mut self, hints: &ContextHints) {
        let Ok(glfw) = self.glfw_mut() else {
            log::warn!("Context hints ignored: GLFW is not initialized");
            return;
        };

        glfw.window_hint(glfw::WindowHint::ContextVersion(hints.major, hints.minor));
        if hints.core_profile {
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        }
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(hints.forward_compatible));
    }

    fn create_window(&mut self, config: &WindowConfig) -> ShellResult<GlfwWindow> {
        let glfw = self.glfw_mut().map_err(|_| ShellError::WindowCreation)?;

        let (window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(ShellError::WindowCreation)?;

        log::info!("Created {}x{} window '{}'", config.width, config.height, config.title);
        Ok(GlfwWindow { window, events })
    }

    fn primary_video_mode(&mut self) -> Option<VideoMode> {
        let glfw = self.glfw.as_mut()?;
        glfw.with_primary_monitor(|_, monitor| monitor.and_then(|m| m.get_video_mode()))
            .map(VideoMode::from)
    }

    fn drain_errors(&mut self) -> Vec<PlatformError> {
        self.error_rx.try_iter().collect()
    }

    fn terminate(&mut self) {
        // glfwTerminate runs once the last Glfw handle is dropped
        if self.glfw.take().is_some() {
            log::info!("GLFW terminated");
        }
    }
}

/// A GLFW window with a current-capable OpenGL context
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowBackend for GlfwWindow {
    fn make_context_current(&mut self) {
        self.window.make_current();
    }

    fn load_gl(&mut self) -> ShellResult<()> {
        let window = &mut self.window;
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        if gl::Clear::is_loaded() && gl::ClearColor::is_loaded() && gl::Viewport::is_loaded() {
            Ok(())
        } else {
            Err(ShellError::FunctionLoader)
        }
    }

    fn set_vsync(&mut self, enabled: bool) {
        let interval = if enabled { glfw::SwapInterval::Sync(1) } else { glfw::SwapInterval::None };
        self.window.glfw.set_swap_interval(interval);
    }

    fn enable_event_delivery(&mut self) {
        self.window.set_framebuffer_size_polling(true);
        self.window.set_key_polling(true);
        self.window.set_mouse_button_polling(true);
        self.window.set_close_polling(true);
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.window.set_pos(x, y);
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.window.get_cursor_pos()
    }

    fn clear(&mut self, color: ClearColor) {
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        unsafe {
            gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        }
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) -> Vec<ShellEvent> {
        self.window.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }
}

fn translate_event(event: glfw::WindowEvent) -> Option<ShellEvent> {
    match event {
        glfw::WindowEvent::FramebufferSize(width, height) => {
            Some(ShellEvent::FramebufferResized { width, height })
        }
        glfw::WindowEvent::Key(key, _, action, _) => Some(ShellEvent::Key {
            key: translate_key(key),
            action: translate_action(action),
        }),
        glfw::WindowEvent::MouseButton(button, action, _) => Some(ShellEvent::MouseButton {
            button: translate_button(button),
            action: translate_action(action),
        }),
        glfw::WindowEvent::Close => Some(ShellEvent::CloseRequested),
        _ => None,
    }
}

fn translate_key(key: glfw::Key) -> KeyCode {
    match key {
        glfw::Key::Escape => KeyCode::Escape,
        glfw::Key::Space => KeyCode::Space,
        glfw::Key::Enter => KeyCode::Enter,
        other => KeyCode::Other(other as i32),
    }
}

const fn translate_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        glfw::MouseButton::Button4 => MouseButton::Other(4),
        glfw::MouseButton::Button5 => MouseButton::Other(5),
        glfw::MouseButton::Button6 => MouseButton::Other(6),
        glfw::MouseButton::Button7 => MouseButton::Other(7),
        glfw::MouseButton::Button8 => MouseButton::Other(8),
    }
}

const fn translate_action(action: glfw::Action) -> Action {
    match action {
        glfw::Action::Press => Action::Press,
        glfw::Action::Release => Action::Release,
        glfw::Action::Repeat => Action::Repeat,
    }
}
