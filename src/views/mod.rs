pub mod appointments;
pub mod chatbot;
pub mod dashboard;
pub mod records;
pub mod shell;
pub mod xray;

pub use appointments::appointments_panel;
pub use chatbot::{chatbot_panel, transcript_id};
pub use dashboard::dashboard_panel;
pub use records::records_panel;
pub use shell::shell;
pub use xray::xray_panel;
