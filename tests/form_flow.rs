//! End-to-end form flow tests driven through the event dispatcher.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use qrdrop::camera::CameraCmd;
use qrdrop::events::handle_event;
use qrdrop::logic;
use qrdrop::state::{AppState, FieldId, FormKind, Language, Screen};
use qrdrop::upload::UploadRequest;

struct Wires {
    upload_tx: mpsc::UnboundedSender<UploadRequest>,
    upload_rx: mpsc::UnboundedReceiver<UploadRequest>,
    camera_tx: mpsc::UnboundedSender<CameraCmd>,
    #[allow(dead_code)]
    camera_rx: mpsc::UnboundedReceiver<CameraCmd>,
}

fn wires() -> Wires {
    let (upload_tx, upload_rx) = mpsc::unbounded_channel();
    let (camera_tx, camera_rx) = mpsc::unbounded_channel();
    Wires {
        upload_tx,
        upload_rx,
        camera_tx,
        camera_rx,
    }
}

fn press(app: &mut AppState, wires: &Wires, code: KeyCode) -> bool {
    press_mod(app, wires, code, KeyModifiers::NONE)
}

fn press_mod(app: &mut AppState, wires: &Wires, code: KeyCode, mods: KeyModifiers) -> bool {
    handle_event(
        CEvent::Key(KeyEvent::new(code, mods)),
        app,
        &wires.upload_tx,
        &wires.camera_tx,
    )
}

fn type_text(app: &mut AppState, wires: &Wires, text: &str) {
    for ch in text.chars() {
        press(app, wires, KeyCode::Char(ch));
    }
}

#[test]
fn submit_empty_form_reports_all_errors_and_no_qr() {
    let mut app = AppState::default();
    let w = wires();

    press_mod(&mut app, &w, KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(app.screen, Screen::Form);
    assert!(app.qr.is_none());
    assert!(app.form.errors.contains_key(&FieldId::Name));
    assert!(app.form.errors.contains_key(&FieldId::PackageCount));
    assert!(app.form.errors.contains_key(&FieldId::ContactNumber));
    assert!(app.form.errors.contains_key(&FieldId::Photo));
}

#[test]
fn editing_a_field_clears_its_error_before_next_validation() {
    let mut app = AppState::default();
    let w = wires();

    press_mod(&mut app, &w, KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert!(app.form.errors.contains_key(&FieldId::Name));

    // Focus starts on the name field; one keystroke clears its error
    press(&mut app, &w, KeyCode::Char('F'));
    assert!(!app.form.errors.contains_key(&FieldId::Name));
    assert!(app.form.errors.contains_key(&FieldId::ContactNumber));
}

#[test]
fn full_delivery_flow_produces_qr_payload() {
    let mut app = AppState::default();
    let w = wires();
    let mount = app.form.mounted_at;

    type_text(&mut app, &w, "Flash Express");
    press(&mut app, &w, KeyCode::Tab);
    type_text(&mut app, &w, "3");
    press(&mut app, &w, KeyCode::Tab);
    type_text(&mut app, &w, "012-345 6789");

    // Simulate a completed upload (the upload path is covered separately)
    app.form.set_uploaded("https://img.example/box.jpg".to_string());

    std::thread::sleep(std::time::Duration::from_millis(2));
    press_mod(&mut app, &w, KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(app.screen, Screen::Result);
    let view = app.qr.as_ref().expect("QR view should be built");
    assert_eq!(view.record["courier"], "Flash Express");
    assert_eq!(view.record["packages"], "3");
    assert_eq!(view.record["phone"], "012-345 6789");
    assert_eq!(view.record["image"], "https://img.example/box.jpg");
    assert_eq!(view.record["id"], app.form.id.to_string());
    let ts = view.record["timestamp"]
        .as_str()
        .expect("timestamp is a string");
    let parsed = chrono::DateTime::parse_from_rfc3339(ts).expect("timestamp parses");
    assert!(parsed.with_timezone(&chrono::Utc) > mount);
    assert!(!view.art.is_empty());
}

#[test]
fn create_new_resets_identifier_and_returns_to_form() {
    let mut app = AppState::default();
    let w = wires();

    type_text(&mut app, &w, "Flash Express");
    press(&mut app, &w, KeyCode::Tab);
    type_text(&mut app, &w, "2");
    press(&mut app, &w, KeyCode::Tab);
    type_text(&mut app, &w, "0812345678");
    app.form.set_uploaded("https://img.example/box.jpg".to_string());
    press_mod(&mut app, &w, KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(app.screen, Screen::Result);

    let old_id = app.form.id;
    press(&mut app, &w, KeyCode::Char('n'));
    assert_eq!(app.screen, Screen::Form);
    assert_ne!(app.form.id, old_id);
    assert_eq!(app.form.value(FieldId::Name), "");
    assert!(app.qr.is_none());
}

#[test]
fn phone_keystrokes_keep_separators_but_drop_letters() {
    let mut app = AppState::default();
    let w = wires();

    press(&mut app, &w, KeyCode::Tab);
    press(&mut app, &w, KeyCode::Tab);
    type_text(&mut app, &w, "01x2-345 6789");
    assert_eq!(app.form.value(FieldId::ContactNumber), "012-345 6789");
}

#[test]
fn service_hours_stay_clamped_for_any_typed_magnitude() {
    let mut app = AppState {
        form_kind: FormKind::Service,
        ..AppState::default()
    };
    let w = wires();

    press(&mut app, &w, KeyCode::Tab); // to hours
    type_text(&mut app, &w, "4815162342");
    let stored = app.form.value(FieldId::ServiceHours);
    let n: u32 = stored.parse().expect("hours stay numeric");
    assert!(n <= 24);
}

#[test]
fn service_type_cycles_with_arrow_keys() {
    let mut app = AppState {
        form_kind: FormKind::Service,
        ..AppState::default()
    };
    let w = wires();

    // Name -> Hours -> Phone -> ServiceType
    for _ in 0..3 {
        press(&mut app, &w, KeyCode::Tab);
    }
    press(&mut app, &w, KeyCode::Right);
    assert_eq!(app.form.value(FieldId::ServiceType), "maintenance");
    press(&mut app, &w, KeyCode::Right);
    assert_eq!(app.form.value(FieldId::ServiceType), "cleaning");
    press(&mut app, &w, KeyCode::Left);
    assert_eq!(app.form.value(FieldId::ServiceType), "maintenance");
}

#[test]
fn oversized_file_is_rejected_before_any_upload_request() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("big.jpg");
    std::fs::write(&path, vec![0u8; 10 * 1024 * 1024 + 1]).expect("file written");

    let mut app = AppState::default();
    let mut w = wires();

    // Move focus to the photo field (last delivery field) and enter the path
    let field_count = logic::spec_for(app.form_kind).fields.len();
    for _ in 0..field_count - 1 {
        press(&mut app, &w, KeyCode::Tab);
    }
    type_text(&mut app, &w, &path.to_string_lossy());
    press(&mut app, &w, KeyCode::Enter);

    assert!(!app.uploading);
    let expected = qrdrop::i18n::t(&app, "errorMessages.fileTooLarge");
    assert_eq!(app.inline_error.as_deref(), Some(expected.as_str()));
    assert!(
        w.upload_rx.try_recv().is_err(),
        "no upload request may reach the worker"
    );
}

#[test]
fn language_toggle_switches_message_language() {
    let mut app = AppState::default();
    let w = wires();
    assert_eq!(app.language, Language::Th);

    press_mod(&mut app, &w, KeyCode::Char('l'), KeyModifiers::CONTROL);
    assert_eq!(app.language, Language::En);

    press_mod(&mut app, &w, KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert!(app.form.errors.contains_key(&FieldId::Name));
    press_mod(&mut app, &w, KeyCode::Char('l'), KeyModifiers::CONTROL);
    assert_eq!(app.language, Language::Th);
}

#[test]
fn ctrl_c_requests_exit() {
    let mut app = AppState::default();
    let w = wires();
    assert!(press_mod(
        &mut app,
        &w,
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    ));
}
