/// Image loading
///
/// Files are read on tokio's blocking pool and handed to iced as encoded
/// bytes; iced decodes them on upload. Only the header is inspected here, to
/// learn the pixel size and to reject files that are not images at all.
/// Thumbnails are fully decoded and downscaled before they reach the UI.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::io::Cursor;
use tokio::task;

use crate::error::{Error, Result};

/// An image ready for display
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub path: String,
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// A downscaled, decoded preview for the thumbnail strip
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// MIME type guessed from the file extension; PNG when unknown
pub fn mime_type(path: &str) -> &'static str {
    let ext = std::path::Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "image/png",
    }
}

/// Read an image file and return it ready for display.
pub async fn load_image_encoded(path: String) -> Result<EncodedImage> {
    let bytes = read_bytes(&path).await?;
    let (width, height) = probe_dimensions(&path, &bytes)?;

    log::debug!("loaded {} ({}x{}, {} bytes)", path, width, height, bytes.len());

    Ok(EncodedImage {
        mime: mime_type(&path),
        width,
        height,
        handle: Handle::from_bytes(bytes),
        path,
    })
}

/// Read an image file and shrink it to fit in a `size` x `size` square.
pub async fn load_thumbnail(path: String, size: u32) -> Result<Thumbnail> {
    let bytes = read_bytes(&path).await?;

    // Decoding and resampling are CPU-bound
    task::spawn_blocking(move || decode_thumbnail(&path, &bytes, size))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

async fn read_bytes(path: &str) -> Result<Vec<u8>> {
    if path.is_empty() {
        return Err(Error::read(path, "empty path"));
    }
    tokio::fs::read(path).await.map_err(|e| Error::read(path, e))
}

fn probe_dimensions(path: &str, bytes: &[u8]) -> Result<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::decode(path, e))?
        .into_dimensions()
        .map_err(|e| Error::decode(path, e))
}

fn decode_thumbnail(path: &str, bytes: &[u8], size: u32) -> Result<Thumbnail> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::decode(path, e))?;

    let thumbnail = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Thumbnail {
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}
