//! Launch records dashboard.
//!
//! The dataset is loaded once into a [`app::DashboardContext`]; two pure
//! chart handlers turn the current [`state::SelectionState`] into chart
//! specifications, and [`server::DashboardServer`] exposes the page over
//! HTTP.

pub mod app;
pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod layout;
pub mod server;
pub mod state;
