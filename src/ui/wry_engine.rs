//! Render engine backed by one `wry` webview per tab.
//!
//! Webview callbacks run on the event-loop thread but outside the session
//! borrow, so page notifications are forwarded through the event-loop proxy
//! tagged with the tab's id. The download prompt is the exception: the engine
//! needs the destination synchronously, so it borrows the session directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::{Rc, Weak};

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::warn;
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::collaborators::{EngineFactory, RenderEngine};
use crate::types::download::DownloadRequest;
use crate::types::errors::EngineError;
use crate::types::events::EngineEvent;
use crate::types::tab::TabId;

use super::chrome_shell::content_rect;
use super::webview_app::{BrowserSession, SharedSession, UserEvent};

/// Page webviews by tab, shared with the shell so it can show, hide and
/// resize them. Holds weak handles: the engine owns its webview.
pub type PageRegistry = Rc<RefCell<HashMap<TabId, Weak<WebView>>>>;

pub struct WryEngine {
    tab: TabId,
    webview: Rc<WebView>,
}

impl WryEngine {
    fn eval(&self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!(tab = %self.tab, "script failed: {}", e);
        }
    }
}

impl RenderEngine for WryEngine {
    fn set_address(&mut self, url: &str) {
        if let Err(e) = self.webview.load_url(url) {
            warn!(tab = %self.tab, url, "load failed: {}", e);
        }
    }

    fn go_back(&mut self) {
        self.eval("history.back()");
    }

    fn go_forward(&mut self) {
        self.eval("history.forward()");
    }

    fn reload(&mut self) {
        self.eval("location.reload()");
    }
}

pub struct WryEngineFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
    pages: PageRegistry,
    session: Weak<RefCell<Option<BrowserSession>>>,
}

impl WryEngineFactory {
    pub fn new(
        window: Rc<Window>,
        proxy: EventLoopProxy<UserEvent>,
        pages: PageRegistry,
        session: &SharedSession,
    ) -> Self {
        Self {
            window,
            proxy,
            pages,
            session: Rc::downgrade(session),
        }
    }
}

impl EngineFactory for WryEngineFactory {
    type Engine = WryEngine;

    fn create_engine(&mut self, tab: TabId) -> Result<WryEngine, EngineError> {
        let load_proxy = self.proxy.clone();
        let title_proxy = self.proxy.clone();
        let window_proxy = self.proxy.clone();
        let started_proxy = self.proxy.clone();
        let completed_proxy = self.proxy.clone();
        let session = self.session.clone();

        let webview = WebViewBuilder::new()
            .with_bounds(content_rect(&self.window))
            .with_visible(false)
            .with_on_page_load_handler(move |event, url| {
                let events = if matches!(event, PageLoadEvent::Started) {
                    [EngineEvent::LoadStarted, EngineEvent::AddressChanged(url)]
                } else {
                    [EngineEvent::AddressChanged(url), EngineEvent::LoadFinished { ok: true }]
                };
                for event in events {
                    let _ = load_proxy.send_event(UserEvent::Engine(tab, event));
                }
            })
            .with_document_title_changed_handler(move |title| {
                let event = EngineEvent::TitleChanged(title);
                let _ = title_proxy.send_event(UserEvent::Engine(tab, event));
            })
            .with_new_window_req_handler(move |url, _features| {
                if url.starts_with("http://") || url.starts_with("https://") {
                    let _ = window_proxy.send_event(UserEvent::OpenInNewTab(url));
                }
                wry::NewWindowResponse::Deny
            })
            .with_download_started_handler(move |url: String, path: &mut PathBuf| -> bool {
                request_download(&session, &started_proxy, url, path)
            })
            .with_download_completed_handler(move |url, path, _success| {
                let _ = completed_proxy.send_event(UserEvent::DownloadCompleted { url, path });
            })
            .build_as_child(&*self.window)
            .map_err(|e| EngineError::Creation(e.to_string()))?;

        let webview = Rc::new(webview);
        self.pages.borrow_mut().insert(tab, Rc::downgrade(&webview));
        Ok(WryEngine { tab, webview })
    }
}

/// Runs the save prompt through the session and fills in the destination.
/// Returns whether the webview should go ahead with the download.
fn request_download(
    session: &Weak<RefCell<Option<BrowserSession>>>,
    proxy: &EventLoopProxy<UserEvent>,
    url: String,
    path: &mut PathBuf,
) -> bool {
    let Some(shared) = session.upgrade() else {
        return false;
    };

    let accepted = {
        let Ok(mut slot) = shared.try_borrow_mut() else {
            warn!(url, "session busy, download rejected");
            return false;
        };
        let Some(session) = slot.as_mut() else {
            return false;
        };
        session.on_download_requested(DownloadRequest {
            source_url: url,
            proposed_path: path.clone(),
            size_hint: None,
        })
    };

    // Events that arrived while the dialog was open were parked; wake the loop.
    let _ = proxy.send_event(UserEvent::Resume);

    match accepted {
        Some(accepted) => {
            *path = accepted.destination;
            true
        }
        None => false,
    }
}
