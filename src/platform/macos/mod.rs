//! macOS-specific implementation using the objc2 AppKit bindings.
//!
//! Autostart is file based and lives in `platform::launch_agent`.

pub mod work_area;
