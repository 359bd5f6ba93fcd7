pub mod app;
pub mod cli;
pub mod logging;
pub mod settings;
pub mod utils;
pub mod views;
