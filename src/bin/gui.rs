// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use audible_export::{config::{consts::SETTINGS_FILE, settings}, gui};
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 64;

/// Orange rounded square with three white "rows".
fn app_icon() -> IconData {
    let n = ICON_SIZE as f32;
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        let r = n * 0.18;
        let cx = fx.clamp(r, n - r);
        let cy = fy.clamp(r, n - r);
        if (fx - cx).powi(2) + (fy - cy).powi(2) > r * r {
            return Rgba([0, 0, 0, 0]);
        }
        let row = (fy / n * 8.0) as u32;
        let in_row = matches!(row, 2 | 4 | 6) && fx > n * 0.2 && fx < n * 0.8;
        if in_row { Rgba([255, 255, 255, 255]) } else { Rgba([247, 153, 28, 255]) }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let state = settings::load(Path::new(SETTINGS_FILE));
    let size = [state.gui.window_w as f32, state.gui.window_h as f32];

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(size)
            .with_drag_and_drop(true)
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
