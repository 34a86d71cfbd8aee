//! PaperBrowser: a small tabbed web browser.
//!
//! Entry point: loads settings and opens the browser window.
//! When built without the `gui` feature, drives a scripted session against
//! the recording collaborators and logs what the window would show.

use paperbrowser::app::App;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("paperbrowser=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    let mut app = App::new(None);
    app.startup();

    if let Err(e) = paperbrowser::ui::webview_app::run(app) {
        tracing::error!("failed to start browser window: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    let mut app = App::new(None);
    app.startup();

    if let Err(e) = demo::run(&app) {
        tracing::error!("demo aborted: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
mod demo {
    use std::error::Error;

    use paperbrowser::app::App;
    use paperbrowser::headless::{RecordingEngineFactory, RecordingShell, ScriptedChooser};
    use paperbrowser::types::download::DownloadRequest;
    use paperbrowser::types::events::EngineEvent;
    use tracing::info;

    pub fn run(app: &App) -> Result<(), Box<dyn Error>> {
        let mut session = app.build_session(
            RecordingEngineFactory::new(),
            RecordingShell::new(),
            ScriptedChooser::new(),
        );

        let first = session.startup()?;
        info!(tab = %first, address = session.address_text(), "started");

        // Search, then let the engine report where it ended up.
        if let Some(url) = session.navigate("rust ownership") {
            session.handle_engine_event(first, EngineEvent::LoadStarted);
            session.handle_engine_event(first, EngineEvent::LoadProgress(60));
            session.handle_engine_event(first, EngineEvent::AddressChanged(url));
            let title = "rust ownership - Search".to_string();
            session.handle_engine_event(first, EngineEvent::TitleChanged(title));
            session.handle_engine_event(first, EngineEvent::LoadFinished { ok: true });
        }
        session.add_bookmark();

        let second = session.open_tab(Some("http://example.org"))?;
        let landed = "http://example.org/".to_string();
        session.handle_engine_event(second, EngineEvent::AddressChanged(landed));
        session.add_bookmark();
        info!(tabs = session.tab_count(), active = ?session.active_tab_id(), "second tab open");

        session.show_history();
        if let Some(view) = session.list_view() {
            info!(title = %view.title, entries = ?view.items, "list opened");
        }
        if let Some(entry) = session.history().first().cloned() {
            session.activate_list_entry(&entry);
        }

        let accepted = session.on_download_requested(DownloadRequest {
            source_url: "http://example.org/paper.pdf".into(),
            proposed_path: "paper.pdf".into(),
            size_hint: Some(4096),
        });
        if let Some(accepted) = accepted {
            session.on_download_progress(accepted.id, 1024, 4096)?;
            session.on_download_finished(accepted.id)?;
        }
        for row in session.shell().download_rows() {
            info!(label = %row.label, progress = row.progress_percent, "download");
        }

        session.close_tab(second)?;
        session.close_tab(first)?;
        info!(
            tabs = session.tab_count(),
            address = session.address_text(),
            history = session.history().len(),
            bookmarks = session.bookmarks().len(),
            "demo finished"
        );
        Ok(())
    }
}
