//! Bridge between the GUI thread and the tokio-backed API worker.

pub mod commands;
pub mod runtime;
