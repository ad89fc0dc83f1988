//! Terminal host for the triage dialog: input, rendering and effect execution.
mod announcer;
mod app;
mod clipboard;
mod config;
mod effects;
mod input;
mod logging;
mod ui;

pub use app::run_app;
