use super::*;

#[test]
fn stretch_spans_full_range() {
    assert_eq!(stretch_to_u8(&[100, 300, 200]), vec![0, 255, 128]);
}

#[test]
fn stretch_flat_and_empty_inputs() {
    assert_eq!(stretch_to_u8(&[7, 7, 7]), vec![0, 0, 0]);
    assert!(stretch_to_u8(&[]).is_empty());
}

#[test]
fn gray_expands_to_opaque_rgba() {
    assert_eq!(gray_to_rgba(&[10, 200], false), vec![10, 10, 10, 255, 200, 200, 200, 255]);
}

#[test]
fn monochrome1_is_inverted() {
    assert_eq!(gray_to_rgba(&[0, 255], true), vec![255, 255, 255, 255, 0, 0, 0, 255]);
}

#[test]
fn interleaved_rgb() {
    let rgba = rgb_to_rgba(&[1, 2, 3, 4, 5, 6], SampleLayout::Interleaved, 2).unwrap();
    assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn planar_rgb() {
    let rgba = rgb_to_rgba(&[1, 4, 2, 5, 3, 6], SampleLayout::Planar, 2).unwrap();
    assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn short_rgb_buffer_is_an_error() {
    let err = rgb_to_rgba(&[1, 2, 3], SampleLayout::Interleaved, 2).unwrap_err();
    assert!(err.contains("too small"));
}

#[test]
fn frame_size_must_match_dimensions() {
    assert!(RgbaFrame::new(2, 1, vec![0; 8]).is_ok());
    assert!(RgbaFrame::new(2, 2, vec![0; 8]).is_err());
}
