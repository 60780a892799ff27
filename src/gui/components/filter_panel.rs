// src/gui/components/filter_panel.rs
//
// Left sidebar: brand multiselect, price range, RAM tiers.
// Writes straight into `app.state.gui.filter`; the central panel re-filters
// every frame.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    ui.horizontal(|ui| {
        if ui.button("Reset").on_hover_text("Default brands, full price range, all RAM").clicked() {
            app.reset_filters();
            logf!("UI: filters reset by user");
        }
        if ui.button("Reload data").on_hover_text("Re-read the cleaned file if it changed").clicked() {
            app.reload(false);
        }
    });

    ui.separator();
    brands(ui, app);
    ui.separator();
    price(ui, app);
    ui.separator();
    rams(ui, app);
}

fn brands(ui: &mut egui::Ui, app: &mut App) {
    let filter = &mut app.state.gui.filter;

    ui.horizontal(|ui| {
        ui.strong("Brand");
        if ui.small_button("All").clicked() {
            filter.brands = app.brands.iter().cloned().collect();
        }
        if ui.small_button("None").clicked() {
            filter.brands.clear();
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("brand_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            for brand in &app.brands {
                let mut on = filter.brands.contains(brand);
                if ui.checkbox(&mut on, brand.as_str()).changed() {
                    if on { filter.brands.insert(brand.clone()); } else { filter.brands.remove(brand); }
                    logd!("UI: brand {} → {}", brand, on);
                }
            }
        });
}

fn price(ui: &mut egui::Ui, app: &mut App) {
    let bounds = app.bounds;
    let range = &mut app.state.gui.filter.price;

    ui.strong("Price range (TL)");
    let min_changed = ui
        .add(egui::Slider::new(&mut range.min, bounds.min..=bounds.max).text("min").step_by(1.0))
        .changed();
    let max_changed = ui
        .add(egui::Slider::new(&mut range.max, bounds.min..=bounds.max).text("max").step_by(1.0))
        .changed();

    // Keep the interval well-formed: the handle being dragged wins.
    if range.min > range.max {
        if min_changed { range.max = range.min; } else if max_changed { range.min = range.max; }
    }
}

fn rams(ui: &mut egui::Ui, app: &mut App) {
    let filter = &mut app.state.gui.filter;

    ui.horizontal(|ui| {
        ui.strong("RAM (GB)");
        if ui.small_button("All").clicked() {
            filter.rams = app.rams.iter().copied().collect();
        }
        if ui.small_button("None").clicked() {
            filter.rams.clear();
        }
    });

    ui.horizontal_wrapped(|ui| {
        for &ram in &app.rams {
            let mut on = filter.rams.contains(&ram);
            if ui.checkbox(&mut on, format!("{ram} GB")).changed() {
                if on { filter.rams.insert(ram); } else { filter.rams.remove(&ram); }
                logd!("UI: RAM {} → {}", ram, on);
            }
        }
    });
}
