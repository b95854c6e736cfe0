use crate::assistant::{self, generate_reply, Assistant, Unconfigured};
use crate::config::AssistantConfig;
use crate::message::Message;
use crate::model::chat::{SYSTEM_INSTRUCTION, TEMPERATURE};
use crate::model::loader::load_xray;
use crate::model::xray::ANALYSIS_DELAY;
use crate::model::{ChatSession, RecordsState, Tab, ViewState, XRayAnalysis};
use crate::views::{
    appointments_panel, chatbot_panel, dashboard_panel, records_panel, shell, transcript_id,
    xray_panel,
};
use iced::widget::scrollable::{self, RelativeOffset};
use iced::{application, event, window, Element, Event, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::sync::Arc;
use std::time::{Duration, Instant};

const APP_TITLE: &str = "MediBOT";
const XRAY_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "dcm"];

pub fn run() -> iced::Result {
    let _ = dotenvy::dotenv();
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let (assistant, request_timeout) = match AssistantConfig::from_env() {
        Ok(config) => (
            assistant::from_config(&config),
            Duration::from_secs(config.timeouts.request_secs),
        ),
        Err(err) => {
            log::error!("Invalid assistant configuration: {err}");
            let fallback = AssistantConfig::default();
            (
                Arc::new(Unconfigured) as Arc<dyn Assistant>,
                Duration::from_secs(fallback.timeouts.request_secs),
            )
        }
    };

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((1280.0, 820.0))
        .run_with(move || App::new(assistant, request_timeout))
}

pub struct App {
    view_state: ViewState,
    search_query: String,
    chat: ChatSession,
    records: RecordsState,
    xray: XRayAnalysis,
    xray_error: Option<String>,
    assistant: Arc<dyn Assistant>,
    request_timeout: Duration,
}

impl App {
    pub fn new(assistant: Arc<dyn Assistant>, request_timeout: Duration) -> (Self, Task<Message>) {
        let app = Self {
            view_state: ViewState::default(),
            search_query: String::new(),
            chat: ChatSession::default(),
            records: RecordsState::default(),
            xray: XRayAnalysis::default(),
            xray_error: None,
            assistant,
            request_timeout,
        };
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                self.view_state.select_tab(tab);
                if tab == Tab::Chatbot {
                    return snap_transcript();
                }
                Task::none()
            }
            Message::ToggleRole => {
                self.view_state.toggle_role();
                Task::none()
            }
            Message::SearchChanged(query) => {
                self.search_query = query;
                Task::none()
            }
            Message::ChatDraftChanged(draft) => {
                self.chat.set_draft(draft);
                Task::none()
            }
            Message::SendChat => {
                let Some(pending) = self.chat.send() else {
                    return Task::none();
                };
                log::info!("Sending chat prompt ({} chars)", pending.prompt.len());

                let request = generate_reply(
                    Arc::clone(&self.assistant),
                    pending.prompt,
                    SYSTEM_INSTRUCTION,
                    TEMPERATURE,
                    self.request_timeout,
                );
                Task::batch([
                    snap_transcript(),
                    Task::perform(request, Message::ChatReplyReceived),
                ])
            }
            Message::ChatReplyReceived(reply) => {
                if self.chat.receive(reply) {
                    return snap_transcript();
                }
                Task::none()
            }
            Message::BeginUpload => {
                self.records.begin_upload(Instant::now());
                Task::none()
            }
            Message::UploadTick(now) => {
                self.records.advance_upload(now);
                Task::none()
            }
            Message::SetRecordFilter(filter) => {
                self.records.set_filter(filter);
                Task::none()
            }
            Message::PickXRay => {
                if self.xray.is_analyzing() {
                    return Task::none();
                }
                Task::perform(
                    async {
                        let handle = AsyncFileDialog::new()
                            .add_filter("X-ray image", &XRAY_EXTENSIONS)
                            .pick_file()
                            .await?;
                        Some(load_xray(handle.path().to_path_buf()))
                    },
                    Message::XRayLoaded,
                )
            }
            Message::FileDropped(path) => {
                if !self.view_state.is_visible(Tab::XRay) || self.xray.is_analyzing() {
                    return Task::none();
                }
                Task::perform(async move { Some(load_xray(path)) }, Message::XRayLoaded)
            }
            Message::XRayLoaded(None) => Task::none(),
            Message::XRayLoaded(Some(Ok(image))) => {
                let name = image.file_name.clone();
                if self.xray.select_image(image) {
                    self.xray_error = None;
                } else {
                    log::warn!("Ignoring {name}: analysis in progress");
                }
                Task::none()
            }
            Message::XRayLoaded(Some(Err(err))) => {
                self.xray_error = Some(err);
                Task::none()
            }
            Message::ClearXRay => {
                self.xray.clear();
                self.xray_error = None;
                Task::none()
            }
            Message::RunDiagnostics => match self.xray.run_diagnostics() {
                // The timer is created on first poll, inside the executor's runtime.
                Some(ticket) => Task::perform(
                    async { tokio::time::sleep(ANALYSIS_DELAY).await },
                    move |()| Message::DiagnosticsElapsed(ticket),
                ),
                None => Task::none(),
            },
            Message::DiagnosticsElapsed(ticket) => {
                if self.xray.complete(ticket) {
                    log::info!("Diagnostics finished");
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let active = self.view_state.active_tab();
        shell(
            self.view_state,
            &self.search_query,
            active != Tab::Chatbot,
            move || match active {
                Tab::Dashboard => dashboard_panel(),
                Tab::Chatbot => chatbot_panel(&self.chat),
                Tab::Records => records_panel(&self.records, &self.search_query),
                Tab::XRay => xray_panel(&self.xray, self.xray_error.as_deref()),
                Tab::Appointments => appointments_panel(),
            },
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let drops = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        });

        if self.records.is_uploading() {
            let interval = self.records.upload().timing().step_interval;
            Subscription::batch([drops, iced::time::every(interval).map(Message::UploadTick)])
        } else {
            drops
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn snap_transcript() -> Task<Message> {
    scrollable::snap_to(transcript_id(), RelativeOffset::END)
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
