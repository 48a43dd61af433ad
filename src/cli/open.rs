use anyhow::{anyhow, Result};

use crate::db::Database;
use crate::models::Profile;

/// Execute the open command - deep-link a saved contact field
pub fn run_open(db: &Database, target: &str) -> Result<()> {
    let profile = db.load_profile()?.unwrap_or_default();

    let Some(uri) = deep_link(&profile, target)? else {
        println!("Nothing saved for {}.", target);
        return Ok(());
    };

    // Fire and forget; fall back to printing the link
    if webbrowser::open(&uri).is_err() {
        println!("Open this link: {}", uri);
    }

    Ok(())
}

/// Build the deep-link URI for a profile field, or `None` when the field
/// is empty. Websites without a scheme get `https://` prepended.
fn deep_link(profile: &Profile, target: &str) -> Result<Option<String>> {
    let uri = match target {
        "phone" => format!("tel:{}", profile.phone),
        "email" => format!("mailto:{}", profile.email),
        "website" => {
            if profile.website.starts_with("http") {
                profile.website.clone()
            } else {
                format!("https://{}", profile.website)
            }
        }
        _ => return Err(anyhow!("Unknown target: {} (use phone, email, or website)", target)),
    };

    let field = match target {
        "phone" => &profile.phone,
        "email" => &profile.email,
        _ => &profile.website,
    };
    Ok(if field.is_empty() { None } else { Some(uri) })
}
