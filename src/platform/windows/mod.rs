//! Windows-specific implementation using the Win32 API.
//!
//! - Registry: autostart via the per-user Run key
//! - Work area: taskbar-aware primary screen rectangle

pub mod registry;
pub mod work_area;

pub use registry::RunKey;
