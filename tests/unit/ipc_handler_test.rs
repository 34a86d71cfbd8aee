use paperbrowser::headless::{RecordingEngineFactory, RecordingShell, ScriptedChooser};
use paperbrowser::ipc_handler::{dispatch, parse_command, ChromeCommand};
use paperbrowser::managers::session_manager::SessionManager;
use paperbrowser::types::errors::IpcError;
use paperbrowser::types::settings::BrowserSettings;
use paperbrowser::types::tab::TabId;

type Session = SessionManager<RecordingEngineFactory, RecordingShell, ScriptedChooser>;

fn started() -> Session {
    let mut session = SessionManager::new(
        &BrowserSettings::default(),
        RecordingEngineFactory::new(),
        RecordingShell::new(),
        ScriptedChooser::new(),
    );
    session.startup().unwrap();
    session
}

fn run(session: &mut Session, message: &str) -> Result<(), IpcError> {
    dispatch(session, parse_command(message)?)
}

#[test]
fn test_parse_unit_commands() {
    assert_eq!(parse_command(r#"{"cmd":"new_tab"}"#).unwrap(), ChromeCommand::NewTab);
    assert_eq!(parse_command(r#"{"cmd":"reload"}"#).unwrap(), ChromeCommand::Reload);
    assert_eq!(
        parse_command(r#"{"cmd":"dismiss_list"}"#).unwrap(),
        ChromeCommand::DismissList
    );
}

#[test]
fn test_parse_commands_with_fields() {
    assert_eq!(
        parse_command(r#"{"cmd":"navigate","input":"rust lang"}"#).unwrap(),
        ChromeCommand::Navigate {
            input: "rust lang".to_string()
        }
    );

    let id = TabId::new();
    let message = format!(r#"{{"cmd":"switch_tab","id":"{}"}}"#, id);
    assert_eq!(parse_command(&message).unwrap(), ChromeCommand::SwitchTab { id });
}

#[test]
fn test_parse_rejects_malformed() {
    assert!(matches!(parse_command("not json"), Err(IpcError::Malformed(_))));
    assert!(matches!(parse_command(r#"{"cmd":"fly"}"#), Err(IpcError::Malformed(_))));
    assert!(matches!(parse_command(r#"{"cmd":"navigate"}"#), Err(IpcError::Malformed(_))));
    assert!(matches!(
        parse_command(r#"{"cmd":"close_tab","id":"nope"}"#),
        Err(IpcError::Malformed(_))
    ));
}

#[test]
fn test_navigate_updates_field_and_engine() {
    let mut session = started();
    run(&mut session, r#"{"cmd":"navigate","input":"example.com"}"#).unwrap();

    assert_eq!(session.address_text(), "example.com");
    assert_eq!(
        session.current_tab().unwrap().engine().last_address(),
        Some("http://example.com")
    );
}

#[test]
fn test_new_close_and_switch_tab() {
    let mut session = started();
    let first = session.active_tab_id().unwrap();

    run(&mut session, r#"{"cmd":"new_tab"}"#).unwrap();
    assert_eq!(session.tab_count(), 2);
    let second = session.active_tab_id().unwrap();

    run(&mut session, &format!(r#"{{"cmd":"switch_tab","id":"{}"}}"#, first)).unwrap();
    assert_eq!(session.active_tab_id(), Some(first));

    run(&mut session, &format!(r#"{{"cmd":"close_tab","id":"{}"}}"#, second)).unwrap();
    assert_eq!(session.tab_count(), 1);
}

#[test]
fn test_unknown_tab_surfaces_tab_error() {
    let mut session = started();
    let message = format!(r#"{{"cmd":"close_tab","id":"{}"}}"#, TabId::new());
    assert!(matches!(run(&mut session, &message), Err(IpcError::Tab(_))));
}

#[test]
fn test_new_tab_engine_failure_surfaces_engine_error() {
    let mut session = started();
    session.factory_mut().fail_next();
    assert!(matches!(
        run(&mut session, r#"{"cmd":"new_tab"}"#),
        Err(IpcError::Engine(_))
    ));
}

#[test]
fn test_bookmark_and_list_flow() {
    let mut session = started();
    run(&mut session, r#"{"cmd":"add_bookmark"}"#).unwrap();
    run(&mut session, r#"{"cmd":"show_bookmarks"}"#).unwrap();
    assert_eq!(session.shell().list_view().unwrap().items, ["http://www.google.com"]);

    run(
        &mut session,
        r#"{"cmd":"pick_list_entry","entry":"http://www.google.com"}"#,
    )
    .unwrap();
    assert!(session.list_view().is_none());

    run(&mut session, r#"{"cmd":"show_history"}"#).unwrap();
    run(&mut session, r#"{"cmd":"dismiss_list"}"#).unwrap();
    assert!(session.shell().list_view().is_none());
}

#[test]
fn test_show_downloads_without_downloads_is_noop() {
    let mut session = started();
    let active = session.active_tab_id();
    run(&mut session, r#"{"cmd":"show_downloads"}"#).unwrap();
    assert_eq!(session.active_tab_id(), active);
}
