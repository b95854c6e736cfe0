use iced::widget::image::Handle;
use std::time::Duration;

/// Bytes before the `DICM` magic in a DICOM file.
pub const DICOM_PREAMBLE_LEN: usize = 128;

pub const ANALYSIS_DELAY: Duration = Duration::from_millis(3500);

const SIMULATED_SUMMARY: &str = "Analysis Complete: No fractures or significant abnormalities \
detected in the provided thoracic region. Lung clarity is normal. Recommended follow-up in 6 \
months for routine screening.";
const SIMULATED_CONFIDENCE: f32 = 98.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Dicom,
    Other,
}

impl ImageFormat {
    /// Sniff the container from magic bytes.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            ImageFormat::Png
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            ImageFormat::Jpeg
        } else if bytes.get(DICOM_PREAMBLE_LEN..DICOM_PREAMBLE_LEN + 4) == Some(b"DICM".as_slice()) {
            ImageFormat::Dicom
        } else {
            ImageFormat::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Dicom => "DICOM",
            ImageFormat::Other => "Image",
        }
    }
}

#[derive(Debug, Clone)]
pub struct XRayImage {
    pub file_name: String,
    pub size_bytes: u64,
    pub format: ImageFormat,
    pub preview: Handle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
}

impl RiskLevel {
    pub fn headline(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk Detected",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisFinding {
    pub summary: String,
    pub risk: RiskLevel,
    pub confidence: f32,
}

/// How "Run Diagnostics" produces a finding. Only the simulated mode exists:
/// the same finding is returned for every image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    #[default]
    Simulated,
}

impl AnalysisMode {
    pub fn finding(self, _image: &XRayImage) -> AnalysisFinding {
        match self {
            AnalysisMode::Simulated => AnalysisFinding {
                summary: SIMULATED_SUMMARY.to_string(),
                risk: RiskLevel::Low,
                confidence: SIMULATED_CONFIDENCE,
            },
        }
    }
}

/// Identifies one analysis cycle. Completions carrying an older ticket are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Clone, Default)]
pub enum XRayState {
    #[default]
    Empty,
    ImageSelected(XRayImage),
    Analyzing {
        image: XRayImage,
        ticket: AnalysisTicket,
    },
    ResultReady {
        image: XRayImage,
        finding: AnalysisFinding,
    },
}

#[derive(Debug, Clone, Default)]
pub struct XRayAnalysis {
    state: XRayState,
    mode: AnalysisMode,
    generation: u64,
}

impl XRayAnalysis {
    pub fn state(&self) -> &XRayState {
        &self.state
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn image(&self) -> Option<&XRayImage> {
        match &self.state {
            XRayState::Empty => None,
            XRayState::ImageSelected(image)
            | XRayState::Analyzing { image, .. }
            | XRayState::ResultReady { image, .. } => Some(image),
        }
    }

    pub fn finding(&self) -> Option<&AnalysisFinding> {
        match &self.state {
            XRayState::ResultReady { finding, .. } => Some(finding),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, XRayState::Analyzing { .. })
    }

    pub fn can_run(&self) -> bool {
        matches!(
            self.state,
            XRayState::ImageSelected(_) | XRayState::ResultReady { .. }
        )
    }

    /// Replace the current image, dropping any finding. Rejected while an
    /// analysis is running.
    pub fn select_image(&mut self, image: XRayImage) -> bool {
        if self.is_analyzing() {
            return false;
        }
        self.generation += 1;
        self.state = XRayState::ImageSelected(image);
        true
    }

    pub fn run_diagnostics(&mut self) -> Option<AnalysisTicket> {
        let image = match std::mem::take(&mut self.state) {
            XRayState::ImageSelected(image) | XRayState::ResultReady { image, .. } => image,
            other => {
                self.state = other;
                return None;
            }
        };

        self.generation += 1;
        let ticket = AnalysisTicket(self.generation);
        log::info!("Running diagnostics on {}", image.file_name);
        self.state = XRayState::Analyzing { image, ticket };
        Some(ticket)
    }

    /// Finish the cycle identified by `ticket`. Returns `false` for stale
    /// tickets.
    pub fn complete(&mut self, ticket: AnalysisTicket) -> bool {
        let image = match std::mem::take(&mut self.state) {
            XRayState::Analyzing {
                image,
                ticket: current,
            } if current == ticket => image,
            other => {
                self.state = other;
                log::debug!("Ignoring stale analysis ticket {:?}", ticket);
                return false;
            }
        };

        let finding = self.mode.finding(&image);
        self.state = XRayState::ResultReady { image, finding };
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = XRayState::Empty;
    }
}

#[cfg(test)]
#[path = "xray_test.rs"]
mod tests;
