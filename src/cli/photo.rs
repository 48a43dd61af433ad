use anyhow::{anyhow, Result};
use std::path::Path;

use crate::cli::photo_utils;
use crate::db::Database;

/// Execute the photo command - set or clear the profile photo
///
/// With no path, a native file dialog picks the image; cancelling the
/// dialog is absorbed. The image is validated and stored as JPEG at a
/// canonical path, and the profile keeps only that reference.
pub fn run_photo(db: &Database, path: Option<&str>, clear: bool) -> Result<()> {
    let mut profile = db.load_profile()?.unwrap_or_default();

    if clear {
        photo_utils::delete_photo();
        if profile.photo.take().is_some() {
            db.save_profile(&profile)?;
        }
        println!("Photo cleared.");
        return Ok(());
    }

    let source = match path {
        Some(p) => p.to_string(),
        None => match photo_utils::pick_image_file() {
            Some(p) => p,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        },
    };

    let source_path = Path::new(&source);
    if !source_path.exists() {
        return Err(anyhow!("Image file not found: {}", source));
    }

    let dest = photo_utils::save_photo(source_path)?;
    profile.photo = Some(dest.to_string_lossy().to_string());
    db.save_profile(&profile)?;

    println!("Photo set.");
    Ok(())
}
