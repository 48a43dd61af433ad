use anyhow::Result;

use crate::cli::display::print_card;
use crate::db::Database;

/// Execute the show command
pub fn run_show(db: &Database) -> Result<()> {
    match db.load_profile()? {
        Some(profile) if !profile.is_empty() => {
            print_card(&profile);
        }
        _ => {
            println!("No profile yet. Run `cardcmd edit` to create one.");
        }
    }
    Ok(())
}
