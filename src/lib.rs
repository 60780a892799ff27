// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod analysis;
pub mod collect;
pub mod extract;
pub mod normalize;
pub mod report;
pub mod store;
pub mod table;

pub mod cli;
pub mod file;
pub mod gui;
pub mod progress;
