//! # Shell Configuration
//!
//! Typed configuration for the window, the requested GL context and the frame clear
//! color. The defaults are the fixed PomoApp values; the CLI never reads a file, but
//! embedders and tests can load a TOML document through [`Config`].

use serde::Deserialize;

/// Configuration trait
pub trait Config: for<'de> Deserialize<'de> + Default {
    /// Parse configuration from a TOML document
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        Self::from_toml_str(&contents)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level shell configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Requested OpenGL context
    pub context: ContextHints,

    /// Color the framebuffer is cleared to every frame
    pub clear_color: ClearColor,
}

impl ShellConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.context.validate()?;
        self.clear_color.validate()
    }
}

impl Config for ShellConfig {}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in screen coordinates
    pub width: u32,

    /// Window height in screen coordinates
    pub height: u32,

    /// Center the window on the primary monitor before the first frame
    pub center_on_primary_monitor: bool,

    /// Sync buffer swaps to the display refresh
    pub vsync: bool,
}

impl WindowConfig {
    /// Validate the window configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "PomoApp".to_string(),
            width: 480,
            height: 480,
            center_on_primary_monitor: true,
            vsync: true,
        }
    }
}

/// OpenGL context hints applied before window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContextHints {
    /// Context major version
    pub major: u32,

    /// Context minor version
    pub minor: u32,

    /// Request the core profile
    pub core_profile: bool,

    /// Request a forward-compatible context
    pub forward_compatible: bool,
}

impl ContextHints {
    /// Validate the requested context
    ///
    /// Profiles only exist from 3.2 onwards, so a core profile request below that is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.core_profile && (self.major, self.minor) < (3, 2) {
            return Err(ConfigError::Invalid(format!(
                "core profile requires OpenGL 3.2 or newer, got {}.{}",
                self.major, self.minor
            )));
        }
        Ok(())
    }
}

impl Default for ContextHints {
    fn default() -> Self {
        Self {
            major: 3,
            minor: 3,
            core_profile: true,
            forward_compatible: true,
        }
    }
}

/// RGBA clear color, each channel in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClearColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl ClearColor {
    /// Create a clear color
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let channels = [self.r, self.g, self.b, self.a];
        if channels.iter().all(|c| (0.0..=1.0).contains(c)) {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!("clear color out of range: {:?}", self)))
        }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::new(0.2, 0.4, 0.35, 1.0)
    }
}
