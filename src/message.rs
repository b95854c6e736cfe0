use crate::assistant::AssistantError;
use crate::model::{AnalysisTicket, RecordCategory, Tab, XRayImage};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    ToggleRole,
    SearchChanged(String),

    ChatDraftChanged(String),
    SendChat,
    ChatReplyReceived(Result<String, AssistantError>),

    BeginUpload,
    UploadTick(Instant),
    SetRecordFilter(Option<RecordCategory>),

    PickXRay,
    FileDropped(PathBuf),
    XRayLoaded(Option<Result<XRayImage, String>>),
    ClearXRay,
    RunDiagnostics,
    DiagnosticsElapsed(AnalysisTicket),
}
