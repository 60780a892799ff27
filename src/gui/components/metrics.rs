// src/gui/components/metrics.rs

use eframe::egui::{self, RichText};

use crate::analysis::Summary;
use crate::report::format_price;

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).size(24.0).strong());
    });
}

pub fn draw(ui: &mut egui::Ui, summary: &Summary) {
    ui.columns(4, |cols| {
        metric(&mut cols[0], "Total products", summary.count.to_string());
        metric(&mut cols[1], "Average price", format_price(summary.mean_price));
        metric(&mut cols[2], "Lowest price", format_price(summary.min_price));
        let ram = summary.modal_ram.map(|r| format!("{r} GB")).unwrap_or_else(|| s!("-"));
        metric(&mut cols[3], "Most common RAM", ram);
    });
}
