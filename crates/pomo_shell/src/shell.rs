//! Application shell lifecycle
//!
//! [`Shell::run`] drives a [`Platform`] from nothing to a running window and back:
//!
//! ```text
//! Uninitialized → SubsystemReady → WindowCreated → ContextActive → Running → Terminated
//! ```
//!
//! Any failure before `Running` jumps straight to `Terminated` after releasing whatever
//! was already acquired. No state is entered twice.

use std::io::Write;

use crate::config::ShellConfig;
use crate::context::{AppContext, EventHandler, WindowSize};
use crate::error::ShellResult;
use crate::placement::centered_position;
use crate::window::{Platform, WindowBackend};

/// Lifecycle states of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellState {
    /// Nothing acquired yet
    Uninitialized,
    /// Windowing subsystem initialized
    SubsystemReady,
    /// Window and GL context exist
    WindowCreated,
    /// GL context current on this thread
    ContextActive,
    /// Render and poll loop running
    Running,
    /// Everything released
    Terminated,
}

/// Owns the platform and the application context for one run
pub struct Shell<P: Platform, W: Write> {
    platform: P,
    config: ShellConfig,
    context: AppContext<W>,
    state: ShellState,
    history: Vec<ShellState>,
    frames: u64,
}

impl<P: Platform, W: Write> Shell<P, W> {
    /// Create a shell that reports diagnostics to `out`
    pub fn new(platform: P, config: ShellConfig, out: W) -> Self {
        let window_size = WindowSize {
            width: config.window.width,
            height: config.window.height,
        };

        Self {
            platform,
            config,
            context: AppContext::new(window_size, out),
            state: ShellState::Uninitialized,
            history: vec![ShellState::Uninitialized],
            frames: 0,
        }
    }

    /// Run until the window closes
    ///
    /// Initialization failures are printed to the diagnostic stream and returned; the
    /// caller maps them to an exit status with [`crate::ShellError::exit_code`].
    pub fn run(&mut self) -> ShellResult<()> {
        if self.state != ShellState::Uninitialized {
            log::warn!("Shell already ran (state {:?}), ignoring run()", self.state);
            return Ok(());
        }

        let result = self.execute();
        self.report_platform_errors();
        if let Err(e) = &result {
            log::error!("Shell startup failed: {}", e);
            self.context.print_line(&e.to_string());
        }

        self.transition(ShellState::Terminated);
        result
    }

    fn execute(&mut self) -> ShellResult<()> {
        self.config.validate()?;

        let init = self.platform.init();
        self.report_platform_errors();
        init?;
        self.transition(ShellState::SubsystemReady);

        self.platform.apply_context_hints(&self.config.context);
        let created = self.platform.create_window(&self.config.window);
        self.report_platform_errors();
        let mut window = match created {
            Ok(window) => window,
            Err(e) => {
                self.platform.terminate();
                return Err(e);
            }
        };
        self.transition(ShellState::WindowCreated);

        window.make_context_current();
        self.transition(ShellState::ContextActive);

        if let Err(e) = window.load_gl() {
            self.report_platform_errors();
            drop(window);
            self.platform.terminate();
            return Err(e);
        }

        window.set_vsync(self.config.window.vsync);
        window.enable_event_delivery();
        if self.config.window.center_on_primary_monitor {
            self.center(&mut window);
        }

        self.transition(ShellState::Running);
        self.render_loop(&mut window);

        log::info!("Window closed after {} frames", self.frames);
        self.report_platform_errors();
        drop(window);
        self.platform.terminate();
        Ok(())
    }

    fn center(&mut self, window: &mut P::Window) {
        match self.platform.primary_video_mode() {
            Some(mode) => {
                let size = (self.config.window.width, self.config.window.height);
                let (x, y) = centered_position(mode, size);
                log::debug!("Centering on {}x{} monitor at ({}, {})", mode.width, mode.height, x, y);
                window.set_position(x, y);
            }
            None => log::warn!("No primary monitor video mode, leaving window position to the window system"),
        }
    }

    fn render_loop(&mut self, window: &mut P::Window) {
        let clear_color = self.config.clear_color;

        while !window.should_close() {
            window.clear(clear_color);
            window.swap_buffers();

            for event in window.poll_events() {
                self.context.dispatch(&mut *window, event);
            }
            self.report_platform_errors();
            self.frames += 1;
        }
    }

    fn report_platform_errors(&mut self) {
        for error in self.platform.drain_errors() {
            self.context.on_error(error.code, &error.description);
        }
    }

    fn transition(&mut self, next: ShellState) {
        log::debug!("Shell state {:?} -> {:?}", self.state, next);
        self.state = next;
        self.history.push(next);
    }

    /// Current lifecycle state
    pub const fn state(&self) -> ShellState {
        self.state
    }

    /// Every state entered so far, in order
    pub fn history(&self) -> &[ShellState] {
        &self.history
    }

    /// Completed clear/swap/poll iterations
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Application context
    pub const fn context(&self) -> &AppContext<W> {
        &self.context
    }

    /// Underlying platform
    pub const fn platform(&self) -> &P {
        &self.platform
    }
}
