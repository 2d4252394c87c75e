//! Platform error reporting
//!
//! GLFW reports errors asynchronously with an integer code and a description. These are
//! observational only: they are written to the diagnostic stream as a name line followed
//! by the raw description and never alter control flow.

use std::fmt;
use std::io::Write;

/// Closed set of GLFW error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformErrorCode {
    /// No error has occurred
    NoError,
    /// A function was called before the library was initialized
    NotInitialized,
    /// A context function was called with no current context
    NoCurrentContext,
    /// An enum argument was not valid for the function
    InvalidEnum,
    /// A value argument was not valid for the function
    InvalidValue,
    /// A memory allocation failed
    OutOfMemory,
    /// The requested client API is not available
    ApiUnavailable,
    /// The requested context version is not available
    VersionUnavailable,
    /// A platform-specific error occurred
    PlatformError,
    /// The requested pixel format is not available
    FormatUnavailable,
    /// The window has no context
    NoWindowContext,
    /// Any code outside the known set
    Unknown(i32),
}

impl PlatformErrorCode {
    /// Map a raw GLFW error code
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        match code {
            0x0000_0000 => Self::NoError,
            0x0001_0001 => Self::NotInitialized,
            0x0001_0002 => Self::NoCurrentContext,
            0x0001_0003 => Self::InvalidEnum,
            0x0001_0004 => Self::InvalidValue,
            0x0001_0005 => Self::OutOfMemory,
            0x0001_0006 => Self::ApiUnavailable,
            0x0001_0007 => Self::VersionUnavailable,
            0x0001_0008 => Self::PlatformError,
            0x0001_0009 => Self::FormatUnavailable,
            0x0001_000A => Self::NoWindowContext,
            other => Self::Unknown(other),
        }
    }

    /// Line printed ahead of the description, `None` for [`Self::NoError`]
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::NoError => None,
            Self::NotInitialized => Some("GLFW_NOT_INITIALISED"),
            Self::NoCurrentContext => Some("GLFW_NO_CURRENT_CONTEXT"),
            Self::InvalidEnum => Some("GLFW_INVALID_ENUM"),
            Self::InvalidValue => Some("GLFW_INVALID_VALUE"),
            Self::OutOfMemory => Some("GLFW_OUT_OF_MEMORY"),
            Self::ApiUnavailable => Some("GLFW_API_UNAVAILABLE"),
            Self::VersionUnavailable => Some("GLFW_VERSION_UNAVAILABLE"),
            Self::PlatformError => Some("GLFW_PLATFORM_ERROR"),
            Self::FormatUnavailable => Some("GLFW_FORMAT_UNAVAILABLE"),
            Self::NoWindowContext => Some("GLFW_NO_WINDOW_CONTEXT"),
            Self::Unknown(_) => Some("Invalid GLFW error code"),
        }
    }
}

impl From<glfw::Error> for PlatformErrorCode {
    fn from(error: glfw::Error) -> Self {
        Self::from_raw(error as i32)
    }
}

impl fmt::Display for PlatformErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoError => f.write_str("GLFW_NO_ERROR"),
            Self::Unknown(code) => write!(f, "unknown GLFW error 0x{:08X}", code),
            known => f.write_str(known.label().unwrap_or_default()),
        }
    }
}

/// An error reported by the windowing subsystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    /// Error category
    pub code: PlatformErrorCode,
    /// Human-readable description supplied by the platform
    pub description: String,
}

impl PlatformError {
    /// Create a platform error record
    pub fn new(code: PlatformErrorCode, description: impl Into<String>) -> Self {
        Self { code, description: description.into() }
    }
}

/// Write a platform error to the diagnostic stream
///
/// Never fails: a broken diagnostic stream is ignored.
pub fn report<W: Write + ?Sized>(out: &mut W, code: PlatformErrorCode, description: &str) {
    if let Some(label) = code.label() {
        let _ = writeln!(out, "{}", label);
    }
    let _ = writeln!(out, "{}", description);
}

/// Significant digits of a default-formatted stream float
const GENERAL_PRECISION: i32 = 6;

/// Format a float like a default C++ output stream (`%g` with 6 significant digits)
///
/// Fixed notation when the decimal exponent is in `-4..6`, scientific with a signed
/// two-digit exponent otherwise. Trailing zeros and a bare decimal point are dropped.
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Round to the target precision first; the rounded exponent picks the notation
    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..GENERAL_PRECISION).contains(&exponent) {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
