use anyhow::{Context, Result};

use crate::cli::photo_utils;
use crate::cli::ui::confirm;
use crate::db::Database;

/// Execute the clear command - wipe all stored data
pub fn run_clear(db: &Database, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = confirm("Clear all data? This action cannot be undone.")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    db.clear().context("Failed to clear data")?;
    photo_utils::delete_photo();
    println!("All data has been cleared");
    Ok(())
}
