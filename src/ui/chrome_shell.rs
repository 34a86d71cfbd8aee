//! Presentation shell drawn with webviews.
//!
//! The window is split into a chrome strip at the top (tab strip, toolbar,
//! progress bar) and a content area below. The content area shows exactly one
//! of: the active tab's page webview, the downloads panel, or the history /
//! bookmark list overlay.

use std::rc::Rc;

use serde_json::{json, Value};
use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::warn;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{Rect, WebView, WebViewBuilder};

use crate::collaborators::PresentationShell;
use crate::ipc_handler::parse_command;
use crate::types::download::DownloadRecord;
use crate::types::list_view::ListView;
use crate::types::tab::{TabId, TabKind};

use super::webview_app::UserEvent;
use super::wry_engine::PageRegistry;

const CHROME_HTML: &str = include_str!("../../resources/ui/chrome.html");
const DOWNLOADS_HTML: &str = include_str!("../../resources/ui/downloads.html");
const LIST_HTML: &str = include_str!("../../resources/ui/list.html");

/// Height of the tab strip + toolbar + progress bar, in logical pixels.
pub const CHROME_HEIGHT: f64 = 84.0;

fn logical_size(window: &Window) -> LogicalSize<f64> {
    window.inner_size().to_logical(window.scale_factor())
}

pub fn chrome_rect(window: &Window) -> Rect {
    let size = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(size.width, CHROME_HEIGHT).into(),
    }
}

pub fn content_rect(window: &Window) -> Rect {
    let size = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, CHROME_HEIGHT).into(),
        size: LogicalSize::new(size.width, (size.height - CHROME_HEIGHT).max(0.0)).into(),
    }
}

/// IPC handler shared by the chrome, downloads panel and list overlay.
fn chrome_ipc(
    proxy: EventLoopProxy<UserEvent>,
) -> impl Fn(wry::http::Request<String>) + 'static {
    move |request| match parse_command(request.body()) {
        Ok(command) => {
            let _ = proxy.send_event(UserEvent::Chrome(command));
        }
        Err(e) => warn!("{}", e),
    }
}

pub struct ChromeShell {
    window: Rc<Window>,
    chrome: WebView,
    downloads_panel: WebView,
    list_overlay: WebView,
    pages: PageRegistry,
    active: Option<TabId>,
    downloads_tab: Option<TabId>,
    list_open: bool,
}

impl ChromeShell {
    pub fn new(
        window: Rc<Window>,
        proxy: EventLoopProxy<UserEvent>,
        pages: PageRegistry,
    ) -> Result<Self, wry::Error> {
        let chrome = WebViewBuilder::new()
            .with_html(CHROME_HTML)
            .with_bounds(chrome_rect(&window))
            .with_ipc_handler(chrome_ipc(proxy.clone()))
            .build_as_child(&*window)?;

        let downloads_panel = WebViewBuilder::new()
            .with_html(DOWNLOADS_HTML)
            .with_bounds(content_rect(&window))
            .with_visible(false)
            .build_as_child(&*window)?;

        let list_overlay = WebViewBuilder::new()
            .with_html(LIST_HTML)
            .with_bounds(content_rect(&window))
            .with_visible(false)
            .with_ipc_handler(chrome_ipc(proxy))
            .build_as_child(&*window)?;

        Ok(Self {
            window,
            chrome,
            downloads_panel,
            list_overlay,
            pages,
            active: None,
            downloads_tab: None,
            list_open: false,
        })
    }

    /// Re-applies bounds after the window was resized.
    pub fn layout(&self) {
        let content = content_rect(&self.window);
        log_err(self.chrome.set_bounds(chrome_rect(&self.window)));
        log_err(self.downloads_panel.set_bounds(content));
        log_err(self.list_overlay.set_bounds(content));
        for page in self.pages.borrow().values().filter_map(|p| p.upgrade()) {
            log_err(page.set_bounds(content));
        }
    }

    fn refresh_visibility(&self) {
        let showing_downloads =
            !self.list_open && self.active.is_some() && self.active == self.downloads_tab;
        for (id, page) in self.pages.borrow().iter() {
            if let Some(page) = page.upgrade() {
                log_err(page.set_visible(!self.list_open && Some(*id) == self.active));
            }
        }
        log_err(self.downloads_panel.set_visible(showing_downloads));
        log_err(self.list_overlay.set_visible(self.list_open));
    }

    fn call(view: &WebView, function: &str, arg: Value) {
        let script = format!("window.__pb && window.__pb.{}({})", function, arg);
        log_err(view.evaluate_script(&script));
    }
}

fn log_err(result: wry::Result<()>) {
    if let Err(e) = result {
        warn!("webview call failed: {}", e);
    }
}

impl PresentationShell for ChromeShell {
    fn add_tab(&mut self, tab: TabId, kind: TabKind, title: &str) {
        if kind == TabKind::Downloads {
            self.downloads_tab = Some(tab);
        }
        Self::call(
            &self.chrome,
            "addTab",
            json!({"id": tab, "kind": kind, "title": title}),
        );
    }

    fn remove_tab(&mut self, tab: TabId) {
        self.pages.borrow_mut().remove(&tab);
        Self::call(&self.chrome, "removeTab", json!(tab));
    }

    fn set_tab_label(&mut self, tab: TabId, label: &str) {
        Self::call(&self.chrome, "setLabel", json!({"id": tab, "label": label}));
    }

    fn set_active_tab(&mut self, tab: TabId) {
        self.active = Some(tab);
        self.refresh_visibility();
        Self::call(&self.chrome, "setActive", json!(tab));
    }

    fn set_address_text(&mut self, text: &str) {
        Self::call(&self.chrome, "setAddress", json!(text));
    }

    fn show_progress(&mut self) {
        Self::call(&self.chrome, "showProgress", Value::Null);
    }

    fn hide_progress(&mut self) {
        Self::call(&self.chrome, "hideProgress", Value::Null);
    }

    fn set_progress(&mut self, percent: u8) {
        Self::call(&self.chrome, "setProgress", json!(percent));
    }

    fn open_list_view(&mut self, view: &ListView) {
        self.list_open = true;
        self.refresh_visibility();
        Self::call(&self.list_overlay, "openList", json!(view));
    }

    fn close_list_view(&mut self) {
        self.list_open = false;
        self.refresh_visibility();
    }

    fn add_download_row(&mut self, record: &DownloadRecord) {
        Self::call(&self.downloads_panel, "upsertDownload", json!(record));
    }

    fn update_download_row(&mut self, record: &DownloadRecord) {
        Self::call(&self.downloads_panel, "upsertDownload", json!(record));
    }
}
