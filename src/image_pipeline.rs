//! First-frame rendering for DICOM radiographs.
//!
//! PNG and JPEG previews are decoded by iced itself; DICOM pixel data has to
//! be turned into 8-bit RGBA here first.

use dicom::object::DefaultDicomObject;
use dicom::pixeldata::{
    DecodedPixelData, PhotometricInterpretation, PixelDecoder, PlanarConfiguration,
};
use iced::widget::image::Handle;

/// Decoded 8-bit RGBA frame ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(format!(
                "Frame is {width}x{height} but holds {} RGBA bytes (expected {expected})",
                pixels.len()
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleLayout {
    Interleaved,
    Planar,
}

pub fn render_first_frame(object: &DefaultDicomObject) -> Result<Option<RgbaFrame>, String> {
    let decoded = object
        .decode_pixel_data()
        .map_err(|err| format!("Failed to decode pixel data: {err}"))?;

    if decoded.number_of_frames() == 0 {
        return Ok(None);
    }

    let frame = match decoded.photometric_interpretation() {
        interpretation if interpretation.is_monochrome() => render_monochrome(&decoded)?,
        PhotometricInterpretation::Rgb => render_rgb(&decoded)?,
        other => render_dynamic(&decoded, other.as_str())?,
    };
    Ok(Some(frame))
}

fn render_monochrome(decoded: &DecodedPixelData<'_>) -> Result<RgbaFrame, String> {
    // MONOCHROME1 stores bone as dark; flip so radiographs read as usual.
    let invert = matches!(
        decoded.photometric_interpretation(),
        PhotometricInterpretation::Monochrome1
    );
    let gray = frame_samples(decoded)?;
    RgbaFrame::new(decoded.columns(), decoded.rows(), gray_to_rgba(&gray, invert))
}

fn render_rgb(decoded: &DecodedPixelData<'_>) -> Result<RgbaFrame, String> {
    let samples = frame_samples(decoded)?;
    let layout = match decoded.planar_configuration() {
        PlanarConfiguration::Standard => SampleLayout::Interleaved,
        PlanarConfiguration::PixelFirst => SampleLayout::Planar,
    };
    let pixel_count = decoded.columns() as usize * decoded.rows() as usize;
    let rgba = rgb_to_rgba(&samples, layout, pixel_count)?;
    RgbaFrame::new(decoded.columns(), decoded.rows(), rgba)
}

fn render_dynamic(decoded: &DecodedPixelData<'_>, interpretation: &str) -> Result<RgbaFrame, String> {
    let image = decoded.to_dynamic_image(0).map_err(|err| {
        format!("Unsupported photometric interpretation `{interpretation}`: {err}")
    })?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    RgbaFrame::new(width, height, rgba.into_raw())
}

/// Samples of frame 0 squeezed into 8 bits.
fn frame_samples(decoded: &DecodedPixelData<'_>) -> Result<Vec<u8>, String> {
    if decoded.bits_allocated() <= 8 {
        return decoded
            .to_vec_frame::<u8>(0)
            .map_err(|err| format!("Failed to read frame samples: {err}"));
    }

    let wide = decoded
        .to_vec_frame::<u16>(0)
        .map_err(|err| format!("Failed to read frame samples: {err}"))?;
    Ok(stretch_to_u8(&wide))
}

/// Linear min/max stretch of 16-bit samples onto 0..=255.
fn stretch_to_u8(samples: &[u16]) -> Vec<u8> {
    let Some((min, max)) = samples.iter().fold(None, |acc: Option<(u16, u16)>, &value| {
        Some(acc.map_or((value, value), |(lo, hi)| (lo.min(value), hi.max(value))))
    }) else {
        return Vec::new();
    };

    if max <= min {
        return vec![0; samples.len()];
    }

    let range = f32::from(max - min);
    samples
        .iter()
        .map(|&value| ((f32::from(value - min) / range) * 255.0).round() as u8)
        .collect()
}

fn gray_to_rgba(gray: &[u8], invert: bool) -> Vec<u8> {
    gray.iter()
        .flat_map(|&value| {
            let value = if invert { 255 - value } else { value };
            [value, value, value, 255]
        })
        .collect()
}

fn rgb_to_rgba(samples: &[u8], layout: SampleLayout, pixel_count: usize) -> Result<Vec<u8>, String> {
    if samples.len() < pixel_count * 3 {
        return Err(format!(
            "RGB buffer of {} bytes is too small for {pixel_count} pixels",
            samples.len()
        ));
    }

    let rgba = match layout {
        SampleLayout::Interleaved => samples[..pixel_count * 3]
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        SampleLayout::Planar => {
            let (red, rest) = samples.split_at(pixel_count);
            let (green, blue) = rest.split_at(pixel_count);
            (0..pixel_count)
                .flat_map(|idx| [red[idx], green[idx], blue[idx], 255])
                .collect()
        }
    };
    Ok(rgba)
}

#[cfg(test)]
#[path = "image_pipeline_test.rs"]
mod tests;
