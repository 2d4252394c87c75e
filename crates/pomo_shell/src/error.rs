//! Shell error types
//!
//! Every variant except [`ShellError::Config`] is an initialization failure that ends
//! the run. Asynchronous platform errors are not represented here; they are only
//! reported, see [`crate::diagnostics`].

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal shell errors
#[derive(Error, Debug)]
pub enum ShellError {
    /// The windowing subsystem could not be initialized
    #[error("Unable to initialise GLFW")]
    SubsystemInit,

    /// The window (and its GL context) could not be created
    #[error("Unable to create GLFW window")]
    WindowCreation,

    /// GL function pointers could not be resolved through the window system
    #[error("Failed to load OpenGL function pointers")]
    FunctionLoader,

    /// The shell configuration was rejected before startup
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl ShellError {
    /// Process exit status for this error
    ///
    /// All failures share status 1; success is reported separately as 0.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SubsystemInit | Self::WindowCreation | Self::FunctionLoader | Self::Config(_) => 1,
        }
    }
}

/// Result alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
