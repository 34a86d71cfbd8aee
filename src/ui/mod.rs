//! Windowed front end.
//!
//! Uses `wry` for WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The chrome, downloads panel and list overlay are HTML pages talking to the
//! session over wry IPC; each ordinary tab gets its own page webview.

pub mod chrome_shell;
pub mod rfd_chooser;
pub mod webview_app;
pub mod wry_engine;
