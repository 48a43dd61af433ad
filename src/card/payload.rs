use thiserror::Error;

use crate::card::vcard;
use crate::models::Profile;

/// Prefix of every QR payload. Not a strict data URI (no `charset` or
/// `base64` parameter); readers match on this literal.
pub const QR_PREFIX: &str = "data:text/vcard;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The profile has no content worth sharing.
    #[error("no content to share")]
    NoContent,
}

/// Build the QR payload: the extended vCard behind [`QR_PREFIX`], with
/// every internal newline written as the two characters `\` `n` so the
/// whole payload stays a single QR-encodable line.
pub fn qr_payload(profile: &Profile) -> String {
    let vcard = vcard::encode_extended(profile).replace('\n', "\\n");
    format!("{}{}", QR_PREFIX, vcard)
}

/// Build the payload for an NFC URI record: the QR payload itself.
///
/// An all-empty profile yields [`PayloadError::NoContent`]; callers must
/// not attempt a radio write in that case.
pub fn nfc_uri_payload(profile: &Profile) -> Result<String, PayloadError> {
    if profile.is_empty() {
        return Err(PayloadError::NoContent);
    }
    Ok(qr_payload(profile))
}

/// Recover the vCard text from a payload produced by [`qr_payload`]:
/// strip the prefix and restore real newlines. Returns `None` when the
/// input does not carry the prefix.
pub fn decode_qr_payload(payload: &str) -> Option<String> {
    payload
        .strip_prefix(QR_PREFIX)
        .map(|body| body.replace("\\n", "\n"))
}
