//! UI layer: the single-page chat creation form.

pub mod app;

pub use app::ChatFormApp;
