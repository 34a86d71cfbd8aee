// PaperBrowser services
// Stateless helpers and the settings reader used by the managers and the UI.

pub mod address_resolver;
pub mod settings_loader;
