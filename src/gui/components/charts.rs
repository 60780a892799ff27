// src/gui/components/charts.rs
//
// Grouped figures as bar rows: mean price per brand, price distribution,
// price against reviews, and a RAM / storage tab.

use eframe::egui::{self, RichText};

use crate::analysis::{
    by_mean_desc, mean_price_by_brand, mean_price_by_ram, price_histogram, price_review_correlation,
    price_review_points, storage_share, FilteredView, GroupMean,
};
use crate::config::state::HardwareTab;
use crate::gui::app::App;
use crate::report::format_price;

const LABEL_W: f32 = 150.0;
const BAR_W: f32 = 320.0;
const TOP_REVIEWED: usize = 10;

/// One labelled bar. `fraction` is clamped to [0, 1].
fn bar_row(ui: &mut egui::Ui, label: &str, fraction: f32, value: String) {
    ui.horizontal(|ui| {
        ui.add_sized([LABEL_W, 18.0], egui::Label::new(label).truncate());
        ui.add(egui::ProgressBar::new(fraction.clamp(0.0, 1.0)).desired_width(BAR_W));
        ui.label(value);
    });
}

fn group_bars<K>(ui: &mut egui::Ui, groups: &[GroupMean<K>], label: impl Fn(&K) -> String) {
    let max = groups.iter().map(|g| g.mean_price).fold(0.0, f64::max);
    for g in groups {
        let frac = if max > 0.0 { (g.mean_price / max) as f32 } else { 0.0 };
        bar_row(ui, &label(&g.key), frac, format!("{} ({})", format_price(g.mean_price), g.count));
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App, view: &FilteredView<'_>) {
    ui.columns(2, |cols| {
        brand_means(&mut cols[0], view);
        histogram(&mut cols[1], app, view);
    });
    ui.separator();
    ui.columns(2, |cols| {
        price_vs_reviews(&mut cols[0], view);
        hardware(&mut cols[1], app, view);
    });
}

fn brand_means(ui: &mut egui::Ui, view: &FilteredView<'_>) {
    ui.label(RichText::new("Average price by brand").strong());
    let groups = by_mean_desc(&mean_price_by_brand(view.cleaned()));
    group_bars(ui, &groups, |b| b.clone());
}

fn histogram(ui: &mut egui::Ui, app: &App, view: &FilteredView<'_>) {
    ui.label(RichText::new("Price distribution").strong());
    let bins = price_histogram(view.cleaned(), app.state.options.dashboard.histogram_bins);
    let max = bins.iter().map(|b| b.count).max().unwrap_or(0);
    for b in &bins {
        let frac = if max > 0 { b.count as f32 / max as f32 } else { 0.0 };
        bar_row(ui, &format!("{} +", format_price(b.lo)), frac, b.count.to_string());
    }
}

fn price_vs_reviews(ui: &mut egui::Ui, view: &FilteredView<'_>) {
    ui.label(RichText::new("Price vs. review count").strong());
    let points = price_review_points(view.cleaned());
    match price_review_correlation(&points) {
        Some(r) => ui.label(format!("Correlation {r:+.3} over {} listing(s)", points.len())),
        None => ui.label(format!("Correlation n/a over {} listing(s)", points.len())),
    };

    let mut top: Vec<_> = points.iter().collect();
    top.sort_by(|a, b| b.reviews.cmp(&a.reviews).then(a.price.total_cmp(&b.price)));
    egui::Grid::new("most_reviewed").striped(true).show(ui, |ui| {
        for p in top.into_iter().take(TOP_REVIEWED) {
            ui.label(p.reviews.to_string());
            ui.label(format_price(p.price));
            ui.add(egui::Label::new(p.title).truncate());
            ui.end_row();
        }
    });
}

fn hardware(ui: &mut egui::Ui, app: &mut App, view: &FilteredView<'_>) {
    ui.horizontal(|ui| {
        let tab = &mut app.state.gui.hardware_tab;
        ui.selectable_value(&mut *tab, HardwareTab::Ram, "RAM vs. price");
        ui.selectable_value(&mut *tab, HardwareTab::Storage, "SSD share");
    });

    match app.state.gui.hardware_tab {
        HardwareTab::Ram => {
            let groups = mean_price_by_ram(view);
            group_bars(ui, &groups, |r| format!("{r} GB"));
        }
        HardwareTab::Storage => {
            for s in storage_share(view) {
                bar_row(
                    ui,
                    &format!("{} GB", s.storage_gb),
                    s.fraction as f32,
                    format!("{:.1}% ({})", s.fraction * 100.0, s.count),
                );
            }
        }
    }
}
