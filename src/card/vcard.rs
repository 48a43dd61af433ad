use crate::models::Profile;

/// Social networks carried as `X-SOCIALPROFILE` entries, in emission order.
const SOCIAL_NETWORKS: [&str; 3] = ["linkedin", "twitter", "instagram"];

/// Serialize the core fields as vCard 3.0 text, lines joined by `\n` with
/// no trailing terminator.
///
/// The line order is fixed and every core directive is always present:
/// an unset field is emitted with an empty value, never dropped, so
/// consumers see a stable shape. Reserved characters (`;`, `,`, `\`) in
/// values are passed through untouched; the unescaped form is the
/// compatibility target for existing readers.
pub fn encode(profile: &Profile) -> String {
    lines(profile, false).join("\n")
}

/// Like [`encode`], plus one `X-SOCIALPROFILE;type=<network>:<handle>` line
/// per non-empty social handle, between URL and END:VCARD. Empty handles
/// are omitted entirely.
pub fn encode_extended(profile: &Profile) -> String {
    lines(profile, true).join("\n")
}

fn lines(profile: &Profile, social: bool) -> Vec<String> {
    let mut out = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", profile.name),
        format!("TITLE:{}", profile.title),
        format!("ORG:{}", profile.company),
        format!("TEL:{}", profile.phone),
        format!("EMAIL:{}", profile.email),
        format!("URL:{}", profile.website),
    ];

    if social {
        let handles = [&profile.linkedin, &profile.twitter, &profile.instagram];
        for (network, handle) in SOCIAL_NETWORKS.iter().zip(handles) {
            if !handle.is_empty() {
                out.push(format!("X-SOCIALPROFILE;type={}:{}", network, handle));
            }
        }
    }

    out.push("END:VCARD".to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> Profile {
        let mut p = Profile::new();
        p.name = "Jane Doe".to_string();
        p.title = "Product Manager".to_string();
        p.company = "Acme Inc.".to_string();
        p.phone = "+1 (555) 123-4567".to_string();
        p.email = "jane@example.com".to_string();
        p.website = "https://example.com".to_string();
        p.linkedin = "linkedin.com/in/janedoe".to_string();
        p.twitter = "@janedoe".to_string();
        p.instagram = "@janedoe".to_string();
        p
    }

    #[test]
    fn test_fixed_line_order() {
        let text = encode(&full_profile());
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:3.0",
                "FN:Jane Doe",
                "TITLE:Product Manager",
                "ORG:Acme Inc.",
                "TEL:+1 (555) 123-4567",
                "EMAIL:jane@example.com",
                "URL:https://example.com",
                "END:VCARD",
            ]
        );
    }

    #[test]
    fn test_empty_fields_keep_their_lines() {
        let mut p = Profile::new();
        p.name = "Jane Doe".to_string();
        p.email = "jane@x.co".to_string();

        let text = encode(&p);
        assert!(text.contains("TEL:\n"));
        assert!(text.contains("URL:\n"));
        assert!(text.contains("TITLE:\n"));
        assert!(text.contains("ORG:\n"));
        assert!(text.contains("FN:Jane Doe\n"));
        assert!(text.contains("EMAIL:jane@x.co\n"));
    }

    #[test]
    fn test_exactly_one_envelope() {
        for text in [encode(&Profile::new()), encode_extended(&full_profile())] {
            assert_eq!(text.matches("BEGIN:VCARD").count(), 1);
            assert_eq!(text.matches("END:VCARD").count(), 1);
            assert!(text.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
            assert!(text.ends_with("END:VCARD"));
        }
    }

    #[test]
    fn test_extended_social_order_and_placement() {
        let text = encode_extended(&full_profile());
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[7], "URL:https://example.com");
        assert_eq!(lines[8], "X-SOCIALPROFILE;type=linkedin:linkedin.com/in/janedoe");
        assert_eq!(lines[9], "X-SOCIALPROFILE;type=twitter:@janedoe");
        assert_eq!(lines[10], "X-SOCIALPROFILE;type=instagram:@janedoe");
        assert_eq!(lines[11], "END:VCARD");
    }

    #[test]
    fn test_extended_omits_empty_handles() {
        let mut p = full_profile();
        p.linkedin.clear();
        p.instagram.clear();

        let text = encode_extended(&p);
        assert_eq!(text.matches("X-SOCIALPROFILE").count(), 1);
        assert!(text.contains("X-SOCIALPROFILE;type=twitter:@janedoe"));
    }

    #[test]
    fn test_extended_without_handles_equals_base() {
        let mut p = full_profile();
        p.linkedin.clear();
        p.twitter.clear();
        p.instagram.clear();

        assert_eq!(encode_extended(&p), encode(&p));
    }

    #[test]
    fn test_reserved_characters_pass_through() {
        let mut p = Profile::new();
        p.company = "Acme; Widgets, Inc\\".to_string();

        let text = encode(&p);
        assert!(text.contains("ORG:Acme; Widgets, Inc\\"));
    }
}
