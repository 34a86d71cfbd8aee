//! Windowed browser built on `wry` + `tao`.
//!
//! One tao window hosts several child webviews: the chrome strip, one page
//! per ordinary tab, the downloads panel and the list overlay. All of them
//! report back through the event-loop proxy as [`UserEvent`]s, which are
//! applied to the session on the event-loop thread.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::error::Error;
use std::path::PathBuf;
use std::rc::Rc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};

use crate::app::App;
use crate::ipc_handler::{dispatch, ChromeCommand};
use crate::types::events::EngineEvent;
use crate::types::tab::TabId;

use super::chrome_shell::ChromeShell;
use super::rfd_chooser::RfdChooser;
use super::wry_engine::{PageRegistry, WryEngineFactory};

#[derive(Debug)]
pub enum UserEvent {
    /// Notification from a tab's page webview.
    Engine(TabId, EngineEvent),
    /// Message posted by the chrome or the list overlay.
    Chrome(ChromeCommand),
    /// A page asked for a new window.
    OpenInNewTab(String),
    DownloadCompleted { url: String, path: Option<PathBuf> },
    /// Wakes the loop so parked events get applied.
    Resume,
}

pub type BrowserSession =
    crate::managers::session_manager::SessionManager<WryEngineFactory, ChromeShell, RfdChooser>;

/// Empty until the session is built; webview callbacks hold a weak handle.
pub type SharedSession = Rc<RefCell<Option<BrowserSession>>>;

pub fn run(app: App) -> Result<(), Box<dyn Error>> {
    let settings = app.settings().clone();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = Rc::new(
        WindowBuilder::new()
            .with_title(&settings.window.title)
            .with_inner_size(tao::dpi::LogicalSize::new(
                settings.window.width as f64,
                settings.window.height as f64,
            ))
            .build(&event_loop)?,
    );

    let shared: SharedSession = Rc::new(RefCell::new(None));
    let pages: PageRegistry = Rc::new(RefCell::new(HashMap::new()));

    let shell = ChromeShell::new(window.clone(), proxy.clone(), pages.clone())?;
    let factory = WryEngineFactory::new(window.clone(), proxy, pages, &shared);

    let mut session = app.build_session(factory, shell, RfdChooser);
    session.startup()?;
    *shared.borrow_mut() = Some(session);
    info!("browser window ready");

    let mut pending: VecDeque<UserEvent> = VecDeque::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                if let Ok(slot) = shared.try_borrow() {
                    if let Some(session) = slot.as_ref() {
                        session.shell().layout();
                    }
                }
            }

            Event::UserEvent(user_event) => {
                pending.push_back(user_event);
                drain_pending(&shared, &mut pending);
            }

            _ => {}
        }
    });
}

/// Applies parked events unless the session is already borrowed further up
/// the stack (a download prompt is open, for instance).
fn drain_pending(shared: &SharedSession, pending: &mut VecDeque<UserEvent>) {
    let Ok(mut slot) = shared.try_borrow_mut() else {
        debug!(parked = pending.len(), "session busy");
        return;
    };
    let Some(session) = slot.as_mut() else {
        return;
    };
    while let Some(event) = pending.pop_front() {
        handle_user_event(session, event);
    }
}

fn handle_user_event(session: &mut BrowserSession, event: UserEvent) {
    match event {
        UserEvent::Engine(tab, event) => session.handle_engine_event(tab, event),
        UserEvent::Chrome(command) => {
            if let Err(e) = dispatch(session, command) {
                warn!("{}", e);
            }
        }
        UserEvent::OpenInNewTab(url) => {
            if let Err(e) = session.open_tab(Some(&url)) {
                warn!("{}", e);
            }
        }
        UserEvent::DownloadCompleted { url, path } => {
            let Some(id) = path.as_deref().and_then(|p| session.download_by_destination(p)) else {
                debug!(url, "completed download is not tracked");
                return;
            };
            if let Err(e) = session.on_download_finished(id) {
                warn!("{}", e);
            }
        }
        UserEvent::Resume => {}
    }
}
