//! Recording mock of the windowing subsystem for tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::{ClearColor, ContextHints, WindowConfig};
use crate::diagnostics::PlatformError;
use crate::error::{ShellError, ShellResult};
use crate::input::ShellEvent;
use crate::placement::VideoMode;
use crate::window::{Platform, Viewport, WindowBackend};

/// Calls made on a [`MockWindow`]
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCall {
    MakeContextCurrent,
    LoadGl,
    SetVsync(bool),
    EnableEventDelivery,
    SetPosition(i32, i32),
    SetShouldClose(bool),
    Clear(ClearColor),
    SetViewport(Viewport),
    SwapBuffers,
    PollEvents,
}

/// Calls made on a [`MockPlatform`]
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Init,
    ApplyContextHints(ContextHints),
    CreateWindow(WindowConfig),
    PrimaryVideoMode,
    Terminate,
}

/// Window double that records every call
#[derive(Default)]
pub struct MockWindow {
    pub cursor: (f64, f64),
    pub fail_load: bool,
    /// Event batches handed out by successive polls; polls past the end return nothing
    pub polls: VecDeque<Vec<ShellEvent>>,
    /// Raise the close flag on this poll (1-based)
    pub close_on_poll: Option<usize>,
    pub should_close: bool,
    pub poll_count: usize,
    pub calls: Vec<WindowCall>,
    pub shared: Option<Rc<RefCell<Vec<WindowCall>>>>,
}

impl MockWindow {
    pub fn calls(&self) -> &[WindowCall] {
        &self.calls
    }

    pub fn count(&self, call: &WindowCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn record(&mut self, call: WindowCall) {
        if let Some(shared) = &self.shared {
            shared.borrow_mut().push(call.clone());
        }
        self.calls.push(call);
    }
}

impl WindowBackend for MockWindow {
    fn make_context_current(&mut self) {
        self.record(WindowCall::MakeContextCurrent);
    }

    fn load_gl(&mut self) -> ShellResult<()> {
        self.record(WindowCall::LoadGl);
        if self.fail_load {
            Err(ShellError::FunctionLoader)
        } else {
            Ok(())
        }
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.record(WindowCall::SetVsync(enabled));
    }

    fn enable_event_delivery(&mut self) {
        self.record(WindowCall::EnableEventDelivery);
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.record(WindowCall::SetPosition(x, y));
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.record(WindowCall::SetShouldClose(should_close));
        self.should_close = should_close;
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    fn clear(&mut self, color: ClearColor) {
        self.record(WindowCall::Clear(color));
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.record(WindowCall::SetViewport(viewport));
    }

    fn swap_buffers(&mut self) {
        self.record(WindowCall::SwapBuffers);
    }

    fn poll_events(&mut self) -> Vec<ShellEvent> {
        self.record(WindowCall::PollEvents);
        self.poll_count += 1;
        if self.close_on_poll == Some(self.poll_count) {
            self.should_close = true;
        }
        self.polls.pop_front().unwrap_or_default()
    }
}

/// Platform double that hands out a prepared [`MockWindow`]
#[derive(Default)]
pub struct MockPlatform {
    pub fail_init: bool,
    pub fail_create: bool,
    pub video_mode: Option<VideoMode>,
    /// Errors reported during the matching platform call
    pub init_errors: Vec<PlatformError>,
    pub create_errors: Vec<PlatformError>,
    pub window: Option<MockWindow>,
    pub calls: Vec<PlatformCall>,
    /// Every window call, visible after the shell has dropped the window
    pub window_calls: Rc<RefCell<Vec<WindowCall>>>,
    pub pending_errors: Vec<PlatformError>,
    pub initialized: bool,
}

impl MockPlatform {
    pub fn with_window(window: MockWindow) -> Self {
        Self {
            window: Some(window),
            video_mode: Some(VideoMode { width: 1920, height: 1080, refresh_rate: 60 }),
            ..Self::default()
        }
    }

    pub fn window_calls(&self) -> Vec<WindowCall> {
        self.window_calls.borrow().clone()
    }
}

impl Platform for MockPlatform {
    type Window = MockWindow;

    fn init(&mut self) -> ShellResult<()> {
        self.calls.push(PlatformCall::Init);
        self.pending_errors.append(&mut self.init_errors);
        if self.fail_init {
            return Err(ShellError::SubsystemInit);
        }
        self.initialized = true;
        Ok(())
    }

    fn apply_context_hints(&mut self, hints: &ContextHints) {
        self.calls.push(PlatformCall::ApplyContextHints(*hints));
    }

    fn create_window(&mut self, config: &WindowConfig) -> ShellResult<MockWindow> {
        self.calls.push(PlatformCall::CreateWindow(config.clone()));
        self.pending_errors.append(&mut self.create_errors);
        if self.fail_create || !self.initialized {
            return Err(ShellError::WindowCreation);
        }
        let mut window = self.window.take().ok_or(ShellError::WindowCreation)?;
        window.shared = Some(Rc::clone(&self.window_calls));
        Ok(window)
    }

    fn primary_video_mode(&mut self) -> Option<VideoMode> {
        self.calls.push(PlatformCall::PrimaryVideoMode);
        self.video_mode
    }

    fn drain_errors(&mut self) -> Vec<PlatformError> {
        std::mem::take(&mut self.pending_errors)
    }

    fn terminate(&mut self) {
        self.calls.push(PlatformCall::Terminate);
        self.initialized = false;
    }
}
