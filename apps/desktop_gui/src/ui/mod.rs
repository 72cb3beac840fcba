//! UI layer for the desktop app: app shell, screens, widgets, and theme.

pub mod app;
pub mod profile_menu;
pub mod theme;
pub mod widgets;

pub use app::{CarspireApp, StartupConfig};
