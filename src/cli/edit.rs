use anyhow::{anyhow, Result};

use crate::card::{validate, Validation};
use crate::cli::ui::{prompt_field, FormResult};
use crate::cli::EditArgs;
use crate::db::Database;
use crate::models::Profile;

/// Execute the edit command
///
/// Field flags apply directly; with no flags an interactive form walks
/// every field. Either way the edits land in a transient draft that is
/// only persisted once validation passes. Cancelling the form discards
/// the draft and leaves the stored profile untouched.
pub fn run_edit(db: &Database, args: EditArgs) -> Result<()> {
    let current = db.load_profile()?.unwrap_or_default();

    let draft = if args.is_empty() {
        match interactive_form(&current)? {
            FormResult::Value(draft) => draft,
            FormResult::Cancelled => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        apply_args(current, args)
    };

    let validation = validate(&draft);
    if !validation.is_valid() {
        print_errors(&validation);
        return Err(anyhow!("Profile not saved."));
    }

    db.save_profile(&draft)?;
    println!("Saved.");
    Ok(())
}

fn apply_args(mut profile: Profile, args: EditArgs) -> Profile {
    if let Some(name) = args.name {
        profile.name = name;
    }
    if let Some(title) = args.title {
        profile.title = title;
    }
    if let Some(company) = args.company {
        profile.company = company;
    }
    if let Some(phone) = args.phone {
        profile.phone = phone;
    }
    if let Some(email) = args.email {
        profile.email = email;
    }
    if let Some(website) = args.website {
        profile.website = website;
    }
    if let Some(linkedin) = args.linkedin {
        profile.linkedin = linkedin;
    }
    if let Some(twitter) = args.twitter {
        profile.twitter = twitter;
    }
    if let Some(instagram) = args.instagram {
        profile.instagram = instagram;
    }
    profile
}

fn interactive_form(current: &Profile) -> Result<FormResult<Profile>> {
    let mut draft = current.clone();

    let fields: [(&str, &mut String); 9] = [
        ("name", &mut draft.name),
        ("title", &mut draft.title),
        ("company", &mut draft.company),
        ("phone", &mut draft.phone),
        ("email", &mut draft.email),
        ("website", &mut draft.website),
        ("linkedin", &mut draft.linkedin),
        ("twitter", &mut draft.twitter),
        ("instagram", &mut draft.instagram),
    ];

    for (label, value) in fields {
        match prompt_field(label, value)? {
            FormResult::Value(input) => *value = input,
            FormResult::Cancelled => return Ok(FormResult::Cancelled),
        }
    }

    Ok(FormResult::Value(draft))
}

fn print_errors(validation: &Validation) {
    for (field, message) in &validation.field_errors {
        println!("  {}: {}", field.as_str(), message);
    }
}
