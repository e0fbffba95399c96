//! Startup resources: window icon and CJK font fallback.

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily, IconData};

use crate::model::constants::{APPLICATION, ICON_FILE, ORGANIZATION};

const CJK_FONT_NAME: &str = "cjk-fallback";

/// System fonts able to render the Chinese default prefix and suffixes.
const CJK_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
];

/// Places searched for the window icon, in order: working directory,
/// executable directory, application data directory.
pub fn icon_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(ICON_FILE)];
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
    {
        paths.push(dir.join(ICON_FILE));
    }
    if let Some(data) = dirs::data_dir() {
        paths.push(data.join(ORGANIZATION).join(APPLICATION).join(ICON_FILE));
    }
    paths
}

/// Decode the first icon found. `None` means run without one.
pub fn load_icon() -> Option<IconData> {
    let path = icon_candidates().into_iter().find(|p| p.is_file())?;
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read icon");
            return None;
        }
    };
    match eframe::icon_data::from_png_bytes(&bytes) {
        Ok(icon) => {
            tracing::debug!(path = %path.display(), "loaded window icon");
            Some(icon)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to decode icon");
            None
        }
    }
}

/// Append the first available CJK system font to every font family.
///
/// Returns the font path that was installed.
pub fn install_cjk_font(ctx: &egui::Context) -> Option<PathBuf> {
    let found = CJK_FONT_CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (PathBuf::from(p), b)));
    let Some((path, bytes)) = found else {
        tracing::debug!("no CJK system font found");
        return None;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    tracing::debug!(path = %path.display(), "installed CJK font fallback");
    Some(path)
}
