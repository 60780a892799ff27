// src/bin/dashboard.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use laptop_market::{config::state::AppState, file::require_input, gui};

const ICON_SIZE: u32 = 64;

/// Small laptop glyph: dark screen with a bezel over a lighter base.
fn app_icon() -> IconData {
    let (bezel, screen, base, clear) = (
        Rgba([0x30, 0x36, 0x40, 0xFF]),
        Rgba([0x4A, 0x90, 0xE2, 0xFF]),
        Rgba([0xB0, 0xB8, 0xC4, 0xFF]),
        Rgba([0, 0, 0, 0]),
    );
    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| match (x, y) {
        (12..=51, 10..=43) => {
            if (15..=48).contains(&x) && (13..=40).contains(&y) { screen } else { bezel }
        }
        (4..=59, 44..=51) => base,
        _ => clear,
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let state = AppState::default();

    // Nothing to show without the normalizer's output.
    if let Err(e) = require_input(&state.options.dashboard.in_path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
