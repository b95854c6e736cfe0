use super::*;
use time::macros::datetime;

#[test]
fn sizes() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(860_160), "840 KB");
    assert_eq!(format_size(1_572_864), "1.5 MB");
    assert_eq!(format_size(4_718_592), "4.5 MB");
}

#[test]
fn clock_is_zero_padded() {
    assert_eq!(format_clock(datetime!(2024-09-28 09:05 UTC)), "09:05");
    assert_eq!(format_clock(datetime!(2024-09-28 22:30 UTC)), "22:30");
}

#[test]
fn short_names_are_untouched() {
    assert_eq!(truncate_name("Chest_XRay_Aug28.jpg"), "Chest_XRay_Aug28.jpg");
}

#[test]
fn long_names_keep_extension() {
    let name = format!("{}.pdf", "a".repeat(60));
    let shortened = truncate_name(&name);
    assert!(shortened.ends_with("….pdf"));
    assert_eq!(shortened.chars().count(), 40);
}
