// src/gui/components/mod.rs
pub mod charts;
pub mod data_table;
pub mod filter_panel;
pub mod metrics;
pub mod word_cloud;
