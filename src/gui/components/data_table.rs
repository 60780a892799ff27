// src/gui/components/data_table.rs
//
// Read-only listing table for the filtered view. Rows are drawn lazily by
// index, so the view's `row_ix` is all the table needs.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::analysis::FilteredView;
use crate::model::Listing;
use crate::report::format_price;

const HEADERS: [&str; 6] = ["Title", "Brand", "Price", "RAM", "SSD", "Reviews"];
const WIDTHS: [f32; 6] = [420.0, 90.0, 110.0, 60.0, 70.0, 70.0];
// Title and Brand are text; the rest are right-aligned numbers.
const TEXT_COLS: usize = 2;

fn cell_text(l: &Listing, ci: usize) -> String {
    match ci {
        0 => s!(l.title()),
        1 => s!(l.brand()),
        2 => l.price().map(format_price).unwrap_or_else(|| s!("N/A")),
        3 => l.ram_gb.map(|r| format!("{r} GB")).unwrap_or_default(),
        4 => l.storage_gb.map(|g| format!("{g} GB")).unwrap_or_default(),
        5 => l.review_count().to_string(),
        _ => s!(),
    }
}

pub fn draw(ui: &mut egui::Ui, view: &FilteredView<'_>) {
    ui.heading("Listings");
    ui.label(format!("{} row(s)", view.len()));

    let mut table = TableBuilder::new(ui)
        .id_salt("listing_table")
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(360.0);
    for (ci, &w) in WIDTHS.iter().enumerate() {
        let col = Column::initial(w).at_least(40.0).clip(true);
        // last column soaks up the remaining width
        table = table.column(if ci + 1 == WIDTHS.len() { col.resizable(false) } else { col });
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    let text = RichText::new(*h).strong();
                    if ci < TEXT_COLS {
                        ui.label(text);
                    } else {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(listing) = view.row(row.index()) else { return };
                for ci in 0..HEADERS.len() {
                    let text = cell_text(listing, ci);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if ci < TEXT_COLS {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                        } else {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                        }
                    });
                }
            });
        });
}
