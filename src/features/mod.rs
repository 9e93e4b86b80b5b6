pub mod app;
pub mod probe;
pub mod status;
pub mod ui;
