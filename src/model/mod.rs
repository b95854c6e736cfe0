pub mod appointments;
pub mod chat;
pub mod health;
pub mod loader;
pub mod records;
pub mod upload;
pub mod view_state;
pub mod xray;

pub use chat::{ChatMessage, ChatRole, ChatSession};
pub use records::{MedicalFileRecord, RecordCategory, RecordsState};
pub use view_state::{Tab, ViewState};
pub use xray::{AnalysisTicket, XRayAnalysis, XRayImage};
