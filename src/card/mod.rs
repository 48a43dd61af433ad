pub mod payload;
pub mod validate;
pub mod vcard;

pub use payload::{decode_qr_payload, nfc_uri_payload, qr_payload, PayloadError, QR_PREFIX};
pub use validate::{validate, Field, Validation};
