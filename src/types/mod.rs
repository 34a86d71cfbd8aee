// PaperBrowser shared type definitions
// Each submodule defines types used across the application.

pub mod download;
pub mod errors;
pub mod events;
pub mod list_view;
pub mod settings;
pub mod tab;
