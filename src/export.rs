//! PNG export.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine;
use image::ImageFormat;

use crate::*;

/// Encodes the canvas as PNG.
pub fn encode_png(canvas: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut buf = Cursor::new(vec![]);
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Encodes the canvas as a `data:image/png;base64,..` URL.
pub fn data_url(canvas: &RgbaImage) -> anyhow::Result<String> {
    let png = encode_png(canvas)?;
    Ok(format!("data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)))
}

/// Writes the canvas to [`FILE_NAME`] in `dir`.
pub fn save(canvas: &RgbaImage, dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(FILE_NAME);
    std::fs::write(&path, encode_png(canvas)?)?;
    log::info!("saved {}x{} image to {}", canvas.width(), canvas.height(), path.display());
    Ok(path)
}
