const PHARMACY_PASS_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appointment {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
    pub location: Option<&'static str>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub medication: &'static str,
    pub indication: &'static str,
    pub dosage: &'static str,
    pub duration: &'static str,
    pub pharmacy: &'static str,
    pub pass_code: &'static str,
}

impl Prescription {
    /// Label/value rows shown on the prescription card.
    pub fn details(&self) -> [(&'static str, &'static str); 3] {
        [
            ("Dosage", self.dosage),
            ("Duration", self.duration),
            ("Pharmacy", self.pharmacy),
        ]
    }

    /// QR image for the pharmacy pass.
    pub fn pharmacy_pass_url(&self) -> String {
        format!(
            "{PHARMACY_PASS_ENDPOINT}?size=150x150&data={}",
            self.pass_code
        )
    }
}

pub const APPOINTMENTS: [Appointment; 2] = [
    Appointment {
        title: "Dr. Sarah Jenkins",
        subtitle: "Senior Cardiologist",
        date: Some("Sept 28, 2024"),
        time: Some("10:30 AM"),
        location: Some("Telehealth Video Consultation"),
        status: AppointmentStatus::Confirmed,
    },
    Appointment {
        title: "Routine Physical Exam",
        subtitle: "General Practice Clinic",
        date: None,
        time: None,
        location: None,
        status: AppointmentStatus::Completed,
    },
];

pub const PRESCRIPTION: Prescription = Prescription {
    medication: "Lisinopril 10mg",
    indication: "For Hypertension",
    dosage: "Once daily (Morning)",
    duration: "30 Days Supply",
    pharmacy: "CVS Caremark #2934",
    pass_code: "MEDIBOT-PRESCRIPTION-123456",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pharmacy_pass_url_embeds_code() {
        assert_eq!(
            PRESCRIPTION.pharmacy_pass_url(),
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=MEDIBOT-PRESCRIPTION-123456"
        );
    }

    #[test]
    fn one_confirmed_and_one_completed() {
        let statuses: Vec<_> = APPOINTMENTS.iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![AppointmentStatus::Confirmed, AppointmentStatus::Completed]
        );
    }
}
