// src/config/state.rs
use super::options::AppOptions;
use crate::analysis::FilterSpec;

/// Which lower tab of the dashboard is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HardwareTab {
    #[default]
    Ram,
    Storage,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Current sidebar selection
    pub filter: FilterSpec,

    pub hardware_tab: HardwareTab,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 860,
            filter: FilterSpec::default(),
            hardware_tab: HardwareTab::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
