#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Chatbot,
    Records,
    XRay,
    Appointments,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Chatbot,
        Tab::Records,
        Tab::XRay,
        Tab::Appointments,
    ];

    /// Bottom bar order used by the compact layout.
    pub const COMPACT: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Chatbot,
        Tab::XRay,
        Tab::Records,
        Tab::Appointments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Chatbot => "AI Medical Chat",
            Tab::Records => "Health Records",
            Tab::XRay => "X-Ray Analysis",
            Tab::Appointments => "Appointments",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Tab::Dashboard => "▦",
            Tab::Chatbot => "✉",
            Tab::Records => "☰",
            Tab::XRay => "◎",
            Tab::Appointments => "✓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Patient,
    Doctor,
}

impl UserRole {
    pub fn toggled(self) -> Self {
        match self {
            UserRole::Patient => UserRole::Doctor,
            UserRole::Doctor => UserRole::Patient,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UserRole::Patient => "John Doe",
            UserRole::Doctor => "Dr. Smith",
        }
    }

    pub fn initials(self) -> &'static str {
        match self {
            UserRole::Patient => "JD",
            UserRole::Doctor => "Dr",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            UserRole::Patient => "Patient",
            UserRole::Doctor => "Doctor",
        }
    }

    /// Label for the button that flips to the other role.
    pub fn switch_label(self) -> String {
        format!("Switch to {}", self.toggled().caption())
    }
}

/// Shell-wide state: which panel is on screen and who is "signed in".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    active_tab: Tab,
    role: UserRole,
}

impl ViewState {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            log::debug!("Switching to {:?}", tab);
            self.active_tab = tab;
        }
    }

    pub fn toggle_role(&mut self) {
        self.role = self.role.toggled();
    }

    pub fn is_visible(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }
}

#[cfg(test)]
#[path = "view_state_test.rs"]
mod tests;
