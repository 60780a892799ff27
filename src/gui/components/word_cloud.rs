// src/gui/components/word_cloud.rs
//
// Title word frequencies, drawn as wrapped labels sized by count.

use eframe::egui::{self, RichText};

use crate::analysis::{word_frequencies, FilteredView};
use crate::config::consts::STOP_WORDS;
use crate::gui::app::App;

const MIN_SIZE: f32 = 12.0;
const MAX_SIZE: f32 = 36.0;

pub fn draw(ui: &mut egui::Ui, app: &App, view: &FilteredView<'_>) {
    ui.heading("Most frequent words in titles");

    let words = word_frequencies(view.iter().map(|l| l.title()), STOP_WORDS, app.state.options.dashboard.word_limit);
    let Some(top) = words.first().map(|(_, n)| *n) else {
        ui.label("No words to show.");
        return;
    };
    let low = words.last().map(|(_, n)| *n).unwrap_or(top);
    let span = (top - low).max(1) as f32;

    ui.horizontal_wrapped(|ui| {
        for (word, n) in &words {
            let t = (*n - low) as f32 / span;
            let size = MIN_SIZE + t * (MAX_SIZE - MIN_SIZE);
            ui.label(RichText::new(word).size(size))
                .on_hover_text(format!("{n}×"));
        }
    });
}
