//! # Pomo Shell
//!
//! The window and event shell that hosts the PomoApp Pomodoro timer.
//!
//! ## Features
//!
//! - **Single Window**: One fixed-size OpenGL 3.3 core window, centered on the primary monitor
//! - **Event Dispatch**: Resize, key, mouse-button and platform-error events routed through [`EventHandler`]
//! - **Backend Abstraction**: GLFW in production, a recording mock in tests
//! - **Fail Fast**: Every initialization failure ends the run with exit status 1
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pomo_shell::prelude::*;
//!
//! fn main() -> std::process::ExitCode {
//!     pomo_shell::logging::init();
//!
//!     let mut shell = Shell::new(GlfwPlatform::new(), ShellConfig::default(), std::io::stdout());
//!     match shell.run() {
//!         Ok(()) => std::process::ExitCode::SUCCESS,
//!         Err(e) => std::process::ExitCode::from(e.exit_code()),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod logging;
pub mod placement;
pub mod shell;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ClearColor, Config, ConfigError, ContextHints, ShellConfig, WindowConfig};
pub use context::{AppContext, EventHandler, MousePosition, WindowSize};
pub use error::{ShellError, ShellResult};
pub use shell::{Shell, ShellState};

/// Common imports for shell users
pub mod prelude {
    pub use crate::{
        config::{ClearColor, Config, ContextHints, ShellConfig, WindowConfig},
        context::{AppContext, EventHandler},
        diagnostics::PlatformErrorCode,
        error::{ShellError, ShellResult},
        input::{Action, KeyCode, MouseButton, ShellEvent},
        shell::{Shell, ShellState},
        window::{GlfwPlatform, Platform, WindowBackend},
    };
}
