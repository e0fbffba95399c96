//! Primary monitor work area (screen minus taskbar).

use std::ffi::c_void;

use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::{
    SystemParametersInfoW, SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
};

use crate::countdown::ScreenRect;

/// Work area in physical pixels.
pub fn primary_work_area() -> Option<ScreenRect> {
    let mut rect = RECT::default();

    // SAFETY: SPI_GETWORKAREA writes a RECT into the provided buffer
    let result = unsafe {
        SystemParametersInfoW(
            SPI_GETWORKAREA,
            0,
            Some(&mut rect as *mut RECT as *mut c_void),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "SPI_GETWORKAREA failed");
        return None;
    }

    Some(ScreenRect::new(
        rect.left as f32,
        rect.top as f32,
        (rect.right - rect.left) as f32,
        (rect.bottom - rect.top) as f32,
    ))
}
