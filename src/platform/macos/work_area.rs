//! Main screen visible frame (screen minus menu bar and Dock).

use objc2::MainThreadMarker;
use objc2_app_kit::NSScreen;

use crate::countdown::ScreenRect;

/// Visible frame of the main screen in points, top-left origin.
///
/// Returns `None` off the main thread or without a screen.
pub fn main_screen_visible_frame() -> Option<ScreenRect> {
    let mtm = MainThreadMarker::new()?;
    let screen = NSScreen::mainScreen(mtm)?;
    let frame = screen.frame();
    let visible = screen.visibleFrame();

    // AppKit's origin is bottom-left; flip to top-left like winit.
    let top = frame.size.height - (visible.origin.y + visible.size.height);

    Some(ScreenRect::new(
        visible.origin.x as f32,
        top as f32,
        visible.size.width as f32,
        visible.size.height as f32,
    ))
}
