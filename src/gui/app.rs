// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    analysis::{all_brands, all_rams, FilterSpec, FilteredView, PriceRange, Summary},
    config::state::AppState,
    store::{DataSet, DatasetCache, Loaded},
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Laptop Market Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    cache: DatasetCache,

    // loaded rows + what the sidebar can offer
    pub data: DataSet,
    pub brands: Vec<String>,
    pub rams: Vec<u32>,
    pub bounds: PriceRange,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let cache = DatasetCache::new(state.options.dashboard.max_ram_gb);
        let mut app = Self {
            state,
            cache,
            data: Arc::from(Vec::new()),
            brands: Vec::new(),
            rams: Vec::new(),
            bounds: PriceRange::default(),
            status: s!("Idle"),
        };
        app.reload(true);
        app
    }

    /// Pull the dataset through the cache. A changed file resets the
    /// filters to their defaults; an unchanged one leaves them alone.
    pub fn reload(&mut self, reset_filters: bool) {
        let path = self.state.options.dashboard.in_path.clone();
        match self.cache.get(&path) {
            Ok((data, loaded)) => {
                let fresh = loaded == Loaded::Fresh;
                self.set_data(data);
                if reset_filters || fresh {
                    self.reset_filters();
                }
                self.status = match loaded {
                    Loaded::Fresh => format!("Loaded {} listing(s) from {}", self.data.len(), path.display()),
                    Loaded::Cached => s!("Data unchanged"),
                };
                logf!("UI: reload {:?} rows={}", loaded, self.data.len());
            }
            Err(e) => {
                loge!("UI: load failed: {e}");
                self.status = format!("Error: {e}");
            }
        }
    }

    fn set_data(&mut self, data: DataSet) {
        self.brands = all_brands(&data);
        self.rams = all_rams(&data);
        self.bounds = PriceRange::covering(data.iter().map(|l| &l.clean)).unwrap_or(PriceRange::new(0.0, 0.0));
        self.data = data;
    }

    pub fn reset_filters(&mut self) {
        let n = self.state.options.dashboard.default_brand_count;
        self.state.gui.filter = FilterSpec::defaults_for(&self.data, n);
        logd!("UI: filters reset → {:?}", self.state.gui.filter);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Laptop Market Analysis");
            ui.label("Listings collected from the category page. Use the filters on the left.");
            ui.separator();

            let data = Arc::clone(&self.data);
            let view = FilteredView::apply(&data, &self.state.gui.filter);

            // Empty selection ends this pass: no figures from nothing.
            let Some(summary) = Summary::of(&view) else {
                ui.colored_label(
                    egui::Color32::from_rgb(0xE0, 0xA0, 0x20),
                    "No products match the selected filters. Try widening them.",
                );
                return;
            };

            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::metrics::draw(ui, &summary);
                    ui.separator();
                    components::charts::draw(ui, self, &view);
                    ui.separator();
                    components::data_table::draw(ui, &view);
                    ui.separator();
                    components::word_cloud::draw(ui, self, &view);
                });
        });
    }
}
