//! Utility functions

use std::path::PathBuf;

// Square viewBox — used for the window/taskbar icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#18181b"/><g fill="#fff"><path d="M12 12h18v18H12Zm4 4v10h10V16Z"/><rect x="19" y="19" width="4" height="4" fill="#818cf8"/><path d="M34 12h18v18H34Zm4 4v10h10V16Z"/><rect x="41" y="19" width="4" height="4" fill="#818cf8"/><path d="M12 34h18v18H12Zm4 4v10h10V38Z"/><rect x="19" y="41" width="4" height="4" fill="#818cf8"/><rect x="34" y="34" width="5" height="5"/><rect x="43" y="34" width="5" height="5" fill="#818cf8"/><rect x="38" y="39" width="5" height="5"/><rect x="47" y="39" width="5" height="5"/><rect x="34" y="43" width="5" height="5"/><rect x="43" y="43" width="5" height="5"/><rect x="38" y="47" width="5" height="5" fill="#818cf8"/><rect x="47" y="47" width="5" height="5"/></g></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (holds the log files, nothing else)
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("QR Studio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_at_requested_size() {
        let (rgba, w, h) = rasterize_icon(64);
        assert_eq!((w, h), (64, 64));
        assert_eq!(rgba.len(), 64 * 64 * 4);
    }
}
