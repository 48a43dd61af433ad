use crate::models::Profile;

/// Print the card with clean formatting (only non-empty fields)
pub fn print_card(profile: &Profile) {
    let name = if profile.name.is_empty() {
        "(unnamed)"
    } else {
        &profile.name
    };

    // Header - just the name
    println!("{}\n", name);

    // Title and company on one line when both are present
    match (profile.title.is_empty(), profile.company.is_empty()) {
        (false, false) => println!("  {} at {}", profile.title, profile.company),
        (false, true) => println!("  {}", profile.title),
        (true, false) => println!("  {}", profile.company),
        (true, true) => {}
    }

    if !profile.phone.is_empty() {
        println!("  {}", profile.phone);
    }
    if !profile.email.is_empty() {
        println!("  {}", profile.email);
    }
    if !profile.website.is_empty() {
        println!("  {}", profile.website);
    }

    let socials = [
        ("linkedin", &profile.linkedin),
        ("twitter", &profile.twitter),
        ("instagram", &profile.instagram),
    ];
    if socials.iter().any(|(_, handle)| !handle.is_empty()) {
        println!();
        for (network, handle) in socials {
            if !handle.is_empty() {
                println!("  {}: {}", network, handle);
            }
        }
    }

    if let Some(ref photo) = profile.photo {
        println!("\n  photo: {}", photo);
    }
}
