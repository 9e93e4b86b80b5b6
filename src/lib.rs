mod common;
mod features;

pub mod app;
pub mod config;
pub mod data_model;
pub mod probe;
pub mod probe_engine;
pub mod runtime;
pub mod settings;
pub mod status;
pub mod status_fetch;
pub mod ui;
