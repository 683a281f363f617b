//! UI layer for the desktop GUI: app shell, form, table, and dialogs.

pub mod app;

pub use app::DesktopGuiApp;
