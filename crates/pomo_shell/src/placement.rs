//! Window placement on the primary monitor

/// Active resolution of a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    /// Horizontal resolution in screen coordinates
    pub width: u32,
    /// Vertical resolution in screen coordinates
    pub height: u32,
    /// Refresh rate in Hz
    pub refresh_rate: u32,
}

impl From<glfw::VidMode> for VideoMode {
    fn from(mode: glfw::VidMode) -> Self {
        Self {
            width: mode.width,
            height: mode.height,
            refresh_rate: mode.refresh_rate,
        }
    }
}

/// Top-left position that centers a window of `size` on a monitor in `mode`
///
/// Each axis halves both extents before subtracting (integer division), so odd sizes
/// round toward the top-left. Negative when the window is larger than the monitor.
#[must_use]
pub const fn centered_position(mode: VideoMode, size: (u32, u32)) -> (i32, i32) {
    let (width, height) = size;
    let x = (mode.width / 2) as i32 - (width / 2) as i32;
    let y = (mode.height / 2) as i32 - (height / 2) as i32;
    (x, y)
}
