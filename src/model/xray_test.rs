use super::*;

fn image(name: &str) -> XRayImage {
    XRayImage {
        file_name: name.to_string(),
        size_bytes: 4,
        format: ImageFormat::Png,
        preview: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
    }
}

fn analyzed(name: &str) -> XRayAnalysis {
    let mut xray = XRayAnalysis::default();
    xray.select_image(image(name));
    let ticket = xray.run_diagnostics().unwrap();
    assert!(xray.complete(ticket));
    xray
}

#[test]
fn detect_formats() {
    assert_eq!(ImageFormat::detect(b"\x89PNG\r\n\x1a\nrest"), ImageFormat::Png);
    assert_eq!(ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]), ImageFormat::Jpeg);

    let mut dicom = vec![0u8; 128];
    dicom.extend_from_slice(b"DICM");
    assert_eq!(ImageFormat::detect(&dicom), ImageFormat::Dicom);

    assert_eq!(ImageFormat::detect(b"GIF89a"), ImageFormat::Other);
    assert_eq!(ImageFormat::detect(&[]), ImageFormat::Other);
}

#[test]
fn full_cycle_produces_simulated_finding() {
    let xray = analyzed("chest.png");
    let finding = xray.finding().unwrap();
    assert!(finding.summary.starts_with("Analysis Complete"));
    assert_eq!(finding.risk, RiskLevel::Low);
    assert!((finding.confidence - 98.4).abs() < f32::EPSILON);
    assert_eq!(xray.image().unwrap().file_name, "chest.png");
}

#[test]
fn run_without_image_is_rejected() {
    let mut xray = XRayAnalysis::default();
    assert!(!xray.can_run());
    assert!(xray.run_diagnostics().is_none());
    assert!(matches!(xray.state(), XRayState::Empty));
}

#[test]
fn run_while_analyzing_is_rejected() {
    let mut xray = XRayAnalysis::default();
    xray.select_image(image("a.png"));
    let ticket = xray.run_diagnostics().unwrap();

    assert!(xray.run_diagnostics().is_none());
    assert!(xray.is_analyzing());
    assert!(xray.complete(ticket));
}

#[test]
fn selecting_new_image_clears_finding() {
    let mut xray = analyzed("first.png");
    assert!(xray.finding().is_some());

    assert!(xray.select_image(image("second.png")));
    assert!(xray.finding().is_none());
    assert!(matches!(xray.state(), XRayState::ImageSelected(img) if img.file_name == "second.png"));
}

#[test]
fn selecting_while_analyzing_is_rejected() {
    let mut xray = XRayAnalysis::default();
    xray.select_image(image("first.png"));
    xray.run_diagnostics().unwrap();

    assert!(!xray.select_image(image("second.png")));
    assert_eq!(xray.image().unwrap().file_name, "first.png");
}

#[test]
fn rerun_from_result_starts_new_cycle() {
    let mut xray = analyzed("chest.png");
    let ticket = xray.run_diagnostics().unwrap();
    assert!(xray.is_analyzing());
    assert!(xray.finding().is_none());
    assert!(xray.complete(ticket));
}

#[test]
fn clear_from_every_state_returns_to_empty() {
    let mut states = Vec::new();

    states.push(XRayAnalysis::default());

    let mut selected = XRayAnalysis::default();
    selected.select_image(image("a.png"));
    states.push(selected);

    let mut analyzing = XRayAnalysis::default();
    analyzing.select_image(image("a.png"));
    analyzing.run_diagnostics().unwrap();
    states.push(analyzing);

    states.push(analyzed("a.png"));

    for mut xray in states {
        xray.clear();
        assert!(matches!(xray.state(), XRayState::Empty));
        assert!(xray.image().is_none());
        assert!(xray.finding().is_none());
    }
}

#[test]
fn stale_ticket_after_clear_is_ignored() {
    let mut xray = XRayAnalysis::default();
    xray.select_image(image("a.png"));
    let ticket = xray.run_diagnostics().unwrap();
    xray.clear();

    assert!(!xray.complete(ticket));
    assert!(matches!(xray.state(), XRayState::Empty));
}

#[test]
fn stale_ticket_does_not_finish_newer_cycle() {
    let mut xray = XRayAnalysis::default();
    xray.select_image(image("a.png"));
    let old = xray.run_diagnostics().unwrap();
    xray.clear();
    xray.select_image(image("b.png"));
    let current = xray.run_diagnostics().unwrap();

    assert!(!xray.complete(old));
    assert!(xray.is_analyzing());
    assert!(xray.complete(current));
    assert_eq!(xray.image().unwrap().file_name, "b.png");
}
