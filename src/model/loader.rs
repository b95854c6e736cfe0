use super::xray::{ImageFormat, XRayImage, DICOM_PREAMBLE_LEN};
use crate::image_pipeline;
use dicom::object::from_reader;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

pub fn load_xray(path: PathBuf) -> Result<XRayImage, String> {
    log::info!("Loading X-ray image: {}", path.display());
    let bytes = std::fs::read(&path).map_err(|err| {
        let message = format!("{}: failed to read image ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    image_from_bytes(display_name(&path), bytes)
}

/// Build an [`XRayImage`] from file contents already in memory.
pub fn image_from_bytes(file_name: String, bytes: Vec<u8>) -> Result<XRayImage, String> {
    let format = ImageFormat::detect(&bytes);
    let size_bytes = bytes.len() as u64;
    let preview = match format {
        ImageFormat::Dicom => dicom_preview(&file_name, &bytes)?,
        ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Other => Handle::from_bytes(bytes),
    };

    Ok(XRayImage {
        file_name,
        size_bytes,
        format,
        preview,
    })
}

fn dicom_preview(file_name: &str, bytes: &[u8]) -> Result<Handle, String> {
    // `from_reader` expects the stream to start at the DICM magic.
    let object = from_reader(&bytes[DICOM_PREAMBLE_LEN..]).map_err(|err| {
        let message = format!("{file_name}: failed to parse DICOM file ({err})");
        log::error!("{message}");
        message
    })?;

    match image_pipeline::render_first_frame(&object) {
        Ok(Some(frame)) => Ok(frame.into_handle()),
        Ok(None) => Err(format!("{file_name}: DICOM file has no image frames")),
        Err(err) => {
            log::warn!("Unable to build frame preview: {err}");
            Err(format!("{file_name}: {err}"))
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Unknown".to_string())
}
