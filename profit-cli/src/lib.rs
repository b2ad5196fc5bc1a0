pub mod app;
pub mod batch;
pub mod config;
pub mod interactive;
pub mod logging;
pub mod render;
