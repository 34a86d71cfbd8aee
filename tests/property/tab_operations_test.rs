//! Property-based tests for tab lifecycle operations on a session.
//!
//! For any sequence of opens, closes and switches (with or without a
//! downloads tab in the strip), at least one ordinary tab stays open, the
//! active tab always exists, and the shell shows exactly the session's tabs.

use paperbrowser::headless::{RecordingEngineFactory, RecordingShell, ScriptedChooser};
use paperbrowser::managers::session_manager::{CloseOutcome, SessionManager};
use paperbrowser::types::download::DownloadRequest;
use paperbrowser::types::settings::BrowserSettings;
use paperbrowser::types::tab::TabKind;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Close(usize),
    Switch(usize),
    Download,
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Open),
            3 => (0..20usize).prop_map(TabOp::Close),
            2 => (0..20usize).prop_map(TabOp::Switch),
            1 => Just(TabOp::Download),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_ordinary_tab_always_survives(ops in arb_tab_ops()) {
        let mut session = SessionManager::new(
            &BrowserSettings::default(),
            RecordingEngineFactory::new(),
            RecordingShell::new(),
            ScriptedChooser::new(),
        );
        session.startup().unwrap();

        for op in ops {
            let order = session.tab_order();
            match op {
                TabOp::Open => {
                    session.open_tab(None).unwrap();
                }
                TabOp::Close(i) => {
                    let id = order[i % order.len()];
                    let before = session.ordinary_tab_count();
                    let outcome = session.close_tab(id).unwrap();
                    match outcome {
                        CloseOutcome::Removed => {
                            prop_assert_eq!(session.ordinary_tab_count(), before - 1)
                        }
                        CloseOutcome::Reset => prop_assert_eq!(before, 1),
                        CloseOutcome::Ignored => {
                            prop_assert_eq!(Some(id), session.downloads_tab_id())
                        }
                    }
                }
                TabOp::Switch(i) => {
                    session.switch_tab(order[i % order.len()]).unwrap();
                }
                TabOp::Download => {
                    session.on_download_requested(DownloadRequest {
                        source_url: "http://files.example/a".to_string(),
                        proposed_path: "/tmp/a".into(),
                        size_hint: None,
                    });
                }
            }

            prop_assert!(session.ordinary_tab_count() >= 1);
            let active = session.active_tab_id();
            prop_assert!(active.is_some_and(|id| session.tab(id).is_some()));

            let shell_ids: Vec<_> = session.shell().tabs().iter().map(|t| t.id).collect();
            prop_assert_eq!(shell_ids, session.tab_order());
            let shell_downloads = session
                .shell()
                .tabs()
                .iter()
                .filter(|t| t.kind == TabKind::Downloads)
                .count();
            prop_assert!(shell_downloads <= 1);
        }
    }
}
