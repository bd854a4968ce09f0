//! citycast - city weather TUI on tui-dispatch
//!
//! The library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod i18n;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
