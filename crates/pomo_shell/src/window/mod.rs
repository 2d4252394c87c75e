//! Window management subsystem
//!
//! The shell never talks to GLFW directly. It drives a [`Platform`] (subsystem
//! lifetime, context hints, monitors) and the [`WindowBackend`] the platform creates.
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Shell / AppContext          │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ Platform +      │ ← Traits (backend.rs)
//!      │ WindowBackend   │
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ GlfwPlatform          │ ← GLFW + gl (glfw_backend.rs)
//!   │ MockPlatform          │ ← Recording mock (tests only)
//!   └───────────────────────┘
//! ```

pub mod backend;
pub mod glfw_backend;

pub use backend::{Platform, Viewport, WindowBackend};
pub use glfw_backend::{GlfwPlatform, GlfwWindow};
