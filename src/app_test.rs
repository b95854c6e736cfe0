use super::*;
use crate::assistant::AssistantError;
use crate::model::chat::{ERROR_REPLY, EMPTY_REPLY_FALLBACK};
use crate::model::xray::{ImageFormat, XRayState};
use crate::model::{ChatRole, XRayImage};
use iced::widget::image::Handle;

struct CannedAssistant(Result<String, AssistantError>);

#[async_trait::async_trait]
impl Assistant for CannedAssistant {
    async fn generate(
        &self,
        _prompt: &str,
        _instruction: &str,
        _temperature: f32,
    ) -> Result<String, AssistantError> {
        self.0.clone()
    }
}

fn app_with(assistant: Arc<dyn Assistant>) -> App {
    App::new(assistant, Duration::from_secs(5)).0
}

fn app() -> App {
    app_with(Arc::new(Unconfigured))
}

fn image(name: &str) -> XRayImage {
    XRayImage {
        file_name: name.to_string(),
        size_bytes: 4,
        format: ImageFormat::Png,
        preview: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
    }
}

fn send(app: &mut App, draft: &str) {
    let _ = app.update(Message::ChatDraftChanged(draft.to_string()));
    let _ = app.update(Message::SendChat);
}

#[test]
fn selecting_a_tab_shows_only_that_panel() {
    let mut app = app();
    for tab in Tab::ALL {
        let _ = app.update(Message::SelectTab(tab));
        let visible: Vec<_> = Tab::ALL
            .into_iter()
            .filter(|t| app.view_state.is_visible(*t))
            .collect();
        assert_eq!(visible, vec![tab]);
    }
}

#[test]
fn toggle_role_round_trips() {
    let mut app = app();
    let _ = app.update(Message::ToggleRole);
    assert_eq!(app.view_state.role().display_name(), "Dr. Smith");
    let _ = app.update(Message::ToggleRole);
    assert_eq!(app.view_state.role().display_name(), "John Doe");
}

#[test]
fn whitespace_send_is_ignored() {
    let mut app = app();
    send(&mut app, "   ");

    assert_eq!(app.chat.transcript().len(), 1);
    assert!(!app.chat.is_typing());
}

#[tokio::test]
async fn successful_reply_appends_two_messages() {
    let assistant: Arc<dyn Assistant> = Arc::new(CannedAssistant(Ok("Hello".into())));
    let mut app = app_with(assistant.clone());

    send(&mut app, "I have a headache");
    assert!(app.chat.is_typing());

    let reply = generate_reply(
        assistant,
        "I have a headache".into(),
        SYSTEM_INSTRUCTION,
        TEMPERATURE,
        Duration::from_secs(5),
    )
    .await;
    let _ = app.update(Message::ChatReplyReceived(reply));

    let transcript = app.chat.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].role, ChatRole::User);
    assert_eq!(transcript[1].content, "I have a headache");
    assert_eq!(transcript[2].role, ChatRole::Assistant);
    assert_eq!(transcript[2].content, "Hello");
    assert!(!app.chat.is_typing());
}

#[test]
fn empty_reply_uses_fallback() {
    let mut app = app();
    send(&mut app, "hi");
    let _ = app.update(Message::ChatReplyReceived(Ok(String::new())));

    assert_eq!(app.chat.transcript()[2].content, EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn unconfigured_assistant_yields_disclaimer() {
    let mut app = app();
    send(&mut app, "hi");

    let reply = generate_reply(
        Arc::clone(&app.assistant),
        "hi".into(),
        SYSTEM_INSTRUCTION,
        TEMPERATURE,
        app.request_timeout,
    )
    .await;
    assert_eq!(reply, Err(AssistantError::MissingApiKey));
    let _ = app.update(Message::ChatReplyReceived(reply));

    let transcript = app.chat.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[2].content, ERROR_REPLY);
    assert!(transcript[2].content.starts_with("DISCLAIMER"));
    assert!(!app.chat.is_typing());
}

#[test]
fn second_send_while_typing_is_ignored() {
    let mut app = app();
    send(&mut app, "first");
    send(&mut app, "second");

    assert_eq!(app.chat.transcript().len(), 2);
    assert_eq!(app.chat.draft(), "second");
}

#[test]
fn upload_runs_to_completion_once() {
    let mut app = app();
    let before = app.records.files().len();

    let _ = app.update(Message::BeginUpload);
    assert!(app.records.is_uploading());
    let _ = app.update(Message::BeginUpload);
    assert_eq!(app.records.upload().percent(), 0);

    let _ = app.update(Message::UploadTick(Instant::now() + Duration::from_secs(60)));

    assert!(!app.records.is_uploading());
    assert_eq!(app.records.files().len(), before + 1);
    assert_eq!(app.records.files()[0].name, "Scan_Result_New.pdf");
}

#[test]
fn search_query_filters_records() {
    let mut app = app();
    let _ = app.update(Message::SearchChanged("BLOOD".into()));

    let visible = app.records.visible(&app.search_query);
    assert!(!visible.is_empty());
    assert!(visible
        .iter()
        .all(|file| file.name.to_lowercase().contains("blood")));
}

#[test]
fn diagnostics_cycle_produces_finding() {
    let mut app = app();
    let _ = app.update(Message::XRayLoaded(Some(Ok(image("chest.png")))));
    let _ = app.update(Message::RunDiagnostics);

    let ticket = match app.xray.state() {
        XRayState::Analyzing { ticket, .. } => *ticket,
        other => panic!("expected Analyzing, got {other:?}"),
    };

    let _ = app.update(Message::DiagnosticsElapsed(ticket));
    let finding = app.xray.finding().expect("finding");
    assert_eq!(finding.risk.headline(), "Low Risk Detected");
    assert!((finding.confidence - 98.4).abs() < f32::EPSILON);
}

#[test]
fn run_diagnostics_without_image_stays_empty() {
    let mut app = app();
    let _ = app.update(Message::RunDiagnostics);
    assert!(matches!(app.xray.state(), XRayState::Empty));
}

#[test]
fn clearing_mid_analysis_discards_completion() {
    let mut app = app();
    let _ = app.update(Message::XRayLoaded(Some(Ok(image("chest.png")))));
    let _ = app.update(Message::RunDiagnostics);
    let ticket = match app.xray.state() {
        XRayState::Analyzing { ticket, .. } => *ticket,
        other => panic!("expected Analyzing, got {other:?}"),
    };

    let _ = app.update(Message::ClearXRay);
    let _ = app.update(Message::DiagnosticsElapsed(ticket));

    assert!(matches!(app.xray.state(), XRayState::Empty));
    assert!(app.xray.finding().is_none());
}

#[test]
fn load_error_is_shown_and_cleared_by_next_image() {
    let mut app = app();
    let _ = app.update(Message::XRayLoaded(Some(Err("scan.dcm: unreadable".into()))));
    assert_eq!(app.xray_error.as_deref(), Some("scan.dcm: unreadable"));

    let _ = app.update(Message::XRayLoaded(Some(Ok(image("chest.png")))));
    assert!(app.xray_error.is_none());
    assert_eq!(app.xray.image().map(|i| i.file_name.as_str()), Some("chest.png"));
}

#[test]
fn cancelled_picker_changes_nothing() {
    let mut app = app();
    let _ = app.update(Message::XRayLoaded(Some(Ok(image("chest.png")))));
    let _ = app.update(Message::XRayLoaded(None));

    assert!(matches!(app.xray.state(), XRayState::ImageSelected(_)));
}

#[test]
fn picker_offers_every_loadable_format() {
    for extension in ["png", "jpg", "jpeg", "gif", "bmp", "webp", "dcm"] {
        assert!(XRAY_EXTENSIONS.contains(&extension), "{extension} missing");
    }
}

#[test]
fn run_diagnostics_schedules_without_a_runtime() {
    let mut app = app();
    let _ = app.update(Message::XRayLoaded(Some(Ok(image("chest.png")))));

    let _task = app.update(Message::RunDiagnostics);

    assert!(app.xray.is_analyzing());
}
