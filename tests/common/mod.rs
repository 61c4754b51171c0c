//! Test fixtures: QR symbols rendered into `image` buffers

#![allow(dead_code)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use qrcode::{Color, QrCode};
use std::path::{Path, PathBuf};

/// Pixels per module in rendered fixtures
pub const MODULE_PX: u32 = 3;
/// Quiet zone width in modules
pub const QUIET_MODULES: u32 = 4;

/// Module grid of a symbol carrying `data` (true = dark)
pub fn modules(data: &[u8]) -> (u32, Vec<bool>) {
    let code = QrCode::new(data).expect("payload fits in a QR code");
    let width = code.width() as u32;
    let dark = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
    (width, dark)
}

/// Side length in pixels of a rendered symbol including its quiet zone
pub fn rendered_side(data: &[u8]) -> u32 {
    let (width, _) = modules(data);
    (width + 2 * QUIET_MODULES) * MODULE_PX
}

/// Draw `data` as a symbol with its top-left quiet-zone corner at (ox, oy)
pub fn draw_symbol(canvas: &mut GrayImage, data: &[u8], ox: u32, oy: u32) {
    let (width, dark) = modules(data);
    for my in 0..width {
        for mx in 0..width {
            if !dark[(my * width + mx) as usize] {
                continue;
            }
            let px = ox + (mx + QUIET_MODULES) * MODULE_PX;
            let py = oy + (my + QUIET_MODULES) * MODULE_PX;
            for dy in 0..MODULE_PX {
                for dx in 0..MODULE_PX {
                    canvas.put_pixel(px + dx, py + dy, Luma([0]));
                }
            }
        }
    }
}

/// White canvas holding one symbol per payload, laid out left to right
pub fn render_row<P: AsRef<[u8]>>(payloads: &[P]) -> GrayImage {
    let sides: Vec<u32> = payloads.iter().map(|p| rendered_side(p.as_ref())).collect();
    let width = sides.iter().sum::<u32>().max(1);
    let height = sides.iter().copied().max().unwrap_or(1);
    let mut canvas = GrayImage::from_pixel(width, height, Luma([255]));
    let mut x = 0;
    for (payload, side) in payloads.iter().zip(&sides) {
        draw_symbol(&mut canvas, payload.as_ref(), x, 0);
        x += side;
    }
    canvas
}

/// Same layout as [`render_row`], painted dark navy on pale yellow
pub fn render_row_rgb<P: AsRef<[u8]>>(payloads: &[P]) -> RgbImage {
    let gray = render_row(payloads);
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] == 0 {
            Rgb([20, 20, 90])
        } else {
            Rgb([250, 240, 180])
        }
    })
}

/// Save a gray fixture as PNG under `dir`
pub fn save_gray(dir: &Path, name: &str, img: &GrayImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("write fixture");
    path
}
