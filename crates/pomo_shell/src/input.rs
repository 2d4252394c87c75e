//! Backend-agnostic input and window events

/// Key codes the shell distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Any other key, carrying the backend key code
    Other(i32),
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Extra buttons (4 through 8)
    Other(u8),
}

/// Key or button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Pressed down
    Press,
    /// Released
    Release,
    /// Held long enough to auto-repeat
    Repeat,
}

/// Events delivered to the shell after each poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellEvent {
    /// The framebuffer changed size, in pixels
    FramebufferResized {
        /// New framebuffer width
        width: i32,
        /// New framebuffer height
        height: i32,
    },

    /// Key input event
    Key {
        /// The key
        key: KeyCode,
        /// What happened to it
        action: Action,
    },

    /// Mouse button event
    MouseButton {
        /// The button
        button: MouseButton,
        /// What happened to it
        action: Action,
    },

    /// The window system asked the window to close
    CloseRequested,
}
