use super::upload::{UploadSimulation, UploadTiming};
use crate::utils::format_size;
use std::time::Instant;

/// Name of the record produced by a simulated upload.
pub const UPLOAD_FILE_NAME: &str = "Scan_Result_New.pdf";
const UPLOAD_FILE_BYTES: u64 = 1_572_864;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Jpg,
    Png,
}

impl FileKind {
    pub fn badge(self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Jpg => "JPG",
            FileKind::Png => "PNG",
        }
    }

    pub fn is_image(self) -> bool {
        matches!(self, FileKind::Jpg | FileKind::Png)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCategory {
    Prescriptions,
    LabReports,
    Scans,
    Others,
}

impl RecordCategory {
    pub const ALL: [RecordCategory; 4] = [
        RecordCategory::Prescriptions,
        RecordCategory::LabReports,
        RecordCategory::Scans,
        RecordCategory::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecordCategory::Prescriptions => "Prescriptions",
            RecordCategory::LabReports => "Lab Reports",
            RecordCategory::Scans => "Scans",
            RecordCategory::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalFileRecord {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    pub display_date: String,
    pub size_label: String,
    pub category: RecordCategory,
}

impl MedicalFileRecord {
    fn literal(
        id: &str,
        name: &str,
        kind: FileKind,
        display_date: &str,
        size_label: &str,
        category: RecordCategory,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            display_date: display_date.to_string(),
            size_label: size_label.to_string(),
            category,
        }
    }

    fn uploaded() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: UPLOAD_FILE_NAME.to_string(),
            kind: FileKind::Pdf,
            display_date: "Just now".to_string(),
            size_label: format_size(UPLOAD_FILE_BYTES),
            category: RecordCategory::Scans,
        }
    }
}

pub fn seed_records() -> Vec<MedicalFileRecord> {
    vec![
        MedicalFileRecord::literal(
            "1",
            "Prescription_Sep12.pdf",
            FileKind::Pdf,
            "2 weeks ago",
            "1.2 MB",
            RecordCategory::Prescriptions,
        ),
        MedicalFileRecord::literal(
            "2",
            "Chest_XRay_Aug28.jpg",
            FileKind::Jpg,
            "Aug 28, 2024",
            "4.5 MB",
            RecordCategory::Scans,
        ),
        MedicalFileRecord::literal(
            "3",
            "Blood_Report_Aug15.pdf",
            FileKind::Pdf,
            "Aug 15, 2024",
            "2.1 MB",
            RecordCategory::LabReports,
        ),
        MedicalFileRecord::literal(
            "4",
            "Vaccination_Record.pdf",
            FileKind::Pdf,
            "Jan 10, 2024",
            "840 KB",
            RecordCategory::Others,
        ),
    ]
}

/// Records panel state: the file list, the category chip, and the
/// simulated upload.
#[derive(Debug, Clone)]
pub struct RecordsState {
    files: Vec<MedicalFileRecord>,
    filter: Option<RecordCategory>,
    upload: UploadSimulation,
}

impl Default for RecordsState {
    fn default() -> Self {
        Self {
            files: seed_records(),
            filter: None,
            upload: UploadSimulation::with_timing(UploadTiming::default()),
        }
    }
}

impl RecordsState {
    pub fn files(&self) -> &[MedicalFileRecord] {
        &self.files
    }

    pub fn filter(&self) -> Option<RecordCategory> {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Option<RecordCategory>) {
        self.filter = filter;
    }

    pub fn upload(&self) -> &UploadSimulation {
        &self.upload
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.is_active()
    }

    pub fn begin_upload(&mut self, now: Instant) -> bool {
        let started = self.upload.start(now);
        if started {
            log::info!("Uploading {UPLOAD_FILE_NAME}");
        }
        started
    }

    /// Advance the upload; prepends the new record when it finishes.
    pub fn advance_upload(&mut self, now: Instant) -> bool {
        if !self.upload.advance(now) {
            return false;
        }
        let record = MedicalFileRecord::uploaded();
        log::info!("Upload finished: {} ({})", record.name, record.size_label);
        self.files.insert(0, record);
        true
    }

    /// Records matching the category chip and a case-insensitive name query.
    pub fn visible<'a>(&'a self, query: &str) -> Vec<&'a MedicalFileRecord> {
        let needle = query.trim().to_lowercase();
        self.files
            .iter()
            .filter(|file| self.filter.map_or(true, |category| file.category == category))
            .filter(|file| needle.is_empty() || file.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
