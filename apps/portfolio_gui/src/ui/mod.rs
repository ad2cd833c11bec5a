//! UI layer: app shell, section views and small layout helpers.

pub mod app;
pub mod sections;

pub use app::{PortfolioApp, StartupConfig};
