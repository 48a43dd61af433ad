use anyhow::{anyhow, Result};
use image::ImageFormat;
use rfd::FileDialog;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::Database;

/// Canonical path of the stored profile photo (always .jpg)
pub fn photo_path() -> Result<PathBuf> {
    Ok(Database::data_dir()?.join("profile.jpg"))
}

/// Opens a native file picker dialog to select an image.
/// Returns `None` if the user cancels the dialog.
pub fn pick_image_file() -> Option<String> {
    FileDialog::new()
        .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp"])
        .set_title("Select profile photo")
        .pick_file()
        .map(|p| p.to_string_lossy().to_string())
}

/// Save the profile photo from a source file, validating and converting to
/// JPEG at the canonical path. Returns that path.
pub fn save_photo(source: &Path) -> Result<PathBuf> {
    let dest = photo_path()?;
    save_photo_at(source, &dest)?;
    Ok(dest)
}

fn save_photo_at(source: &Path, dest: &Path) -> Result<()> {
    // Read and validate the image
    let img = image::open(source).map_err(|e| anyhow!("Invalid image file: {}", e))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    // Save as JPEG
    img.save_with_format(dest, ImageFormat::Jpeg)
        .map_err(|e| anyhow!("Failed to save photo: {}", e))?;

    Ok(())
}

/// Delete the stored profile photo if it exists
pub fn delete_photo() {
    if let Ok(path) = photo_path() {
        let _ = fs::remove_file(path);
    }
}
