use anyhow::{anyhow, Result};

use crate::card::decode_qr_payload;
use crate::nfc::{NfcError, NfcManager, NfcRadio};

/// What to do with a scanned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAction {
    /// The payload is a link; hand it to the system opener.
    OpenUrl(String),
    /// The payload is one of our QR cards; show the decoded vCard.
    ShowCard(String),
    /// Anything else is shown verbatim.
    ShowText(String),
}

/// Classify a decoded payload from a QR code or NFC tag.
pub fn classify(data: &str) -> ScanAction {
    if data.starts_with("http") {
        ScanAction::OpenUrl(data.to_string())
    } else if let Some(vcard) = decode_qr_payload(data) {
        ScanAction::ShowCard(vcard)
    } else {
        ScanAction::ShowText(data.to_string())
    }
}

/// Execute the scan command
///
/// With `--qr DATA` the already-decoded QR string is processed directly;
/// otherwise a bounded NFC read session supplies the payload.
pub fn run_scan<R: NfcRadio>(nfc: &mut NfcManager<R>, qr: Option<String>) -> Result<()> {
    let data = match qr {
        Some(data) => data,
        None => match nfc.scan() {
            Ok(data) => data,
            // User cancellation is not an error
            Err(NfcError::Cancelled) => {
                println!("Cancelled.");
                return Ok(());
            }
            Err(NfcError::EmptyTag) => {
                return Err(anyhow!("No NDEF message found on the tag"));
            }
            Err(NfcError::TimedOut) => {
                return Err(anyhow!("NFC scan timed out. Please try again."));
            }
            Err(NfcError::Unsupported) => {
                return Err(anyhow!("NFC is not supported on this device"));
            }
            Err(e) => return Err(anyhow!("Failed to scan NFC tag: {}", e)),
        },
    };

    match classify(&data) {
        ScanAction::OpenUrl(url) => {
            if webbrowser::open(&url).is_err() {
                println!("Open this link: {}", url);
            }
        }
        ScanAction::ShowCard(vcard) => {
            println!("Contact info received:");
            for line in vcard.lines() {
                println!("  {}", line);
            }
        }
        ScanAction::ShowText(text) => {
            println!("Contact info received:\n  {}", text);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::qr_payload;
    use crate::models::Profile;

    #[test]
    fn test_classify_urls() {
        assert_eq!(
            classify("https://example.com"),
            ScanAction::OpenUrl("https://example.com".to_string())
        );
        assert_eq!(
            classify("http://example.com"),
            ScanAction::OpenUrl("http://example.com".to_string())
        );
    }

    #[test]
    fn test_classify_card_payload() {
        let mut profile = Profile::new();
        profile.name = "Jane Doe".to_string();
        let payload = qr_payload(&profile);

        match classify(&payload) {
            ScanAction::ShowCard(vcard) => {
                assert!(vcard.starts_with("BEGIN:VCARD\n"));
                assert!(vcard.contains("FN:Jane Doe"));
            }
            other => panic!("expected ShowCard, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(
            classify("call me maybe"),
            ScanAction::ShowText("call me maybe".to_string())
        );
    }
}
