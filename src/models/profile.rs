use serde::{Deserialize, Serialize};

/// The single business-card profile.
///
/// All text fields use the empty string for "not set" so a partially filled
/// card round-trips through the store unchanged. Serde names match the
/// historical JSON blob, including `profileImage` for the photo reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    /// Opaque reference to image bytes owned by the media layer. Never
    /// decoded here, only stored and handed back.
    #[serde(rename = "profileImage")]
    pub photo: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no card content has been entered. The photo reference does
    /// not count: it never appears in the portable encodings.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.title.is_empty()
            && self.company.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.website.is_empty()
            && self.linkedin.is_empty()
            && self.twitter.is_empty()
            && self.instagram.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_empty() {
        assert!(Profile::new().is_empty());
    }

    #[test]
    fn test_any_field_makes_profile_non_empty() {
        let mut p = Profile::new();
        p.twitter = "@janedoe".to_string();
        assert!(!p.is_empty());
    }

    #[test]
    fn test_photo_alone_keeps_profile_empty() {
        let mut p = Profile::new();
        p.photo = Some("/tmp/profile.jpg".to_string());
        assert!(p.is_empty());
    }

    #[test]
    fn test_serde_blob_field_names() {
        let mut p = Profile::new();
        p.name = "Jane Doe".to_string();
        p.photo = Some("file:///photos/jane.jpg".to_string());

        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"profileImage\":\"file:///photos/jane.jpg\""));
        assert!(json.contains("\"name\":\"Jane Doe\""));

        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let p: Profile = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert_eq!(p.name, "Jane");
        assert_eq!(p.email, "");
        assert_eq!(p.photo, None);
    }
}
