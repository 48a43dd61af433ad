//! NFC session handling.
//!
//! The radio itself is an external collaborator behind [`NfcRadio`]; this
//! module owns session discipline: one exchange at a time, a bounded
//! technology request, and a matching release on every exit path.

use std::time::Duration;

use thiserror::Error;

/// Bound on the technology-request step of a session. Expiry is reported
/// as [`NfcError::TimedOut`], distinct from hardware absence.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NfcError {
    /// No NFC hardware. Surfaced once; callers disable NFC affordances.
    #[error("NFC is not supported on this device")]
    Unsupported,
    /// The user cancelled the session. Absorbed silently, never surfaced
    /// as an error.
    #[error("NFC session was cancelled")]
    Cancelled,
    /// The technology request exceeded [`REQUEST_TIMEOUT`].
    #[error("NFC request timed out")]
    TimedOut,
    /// Read, write, or decode failure in the radio stack.
    #[error("NFC transport error: {0}")]
    Transport(String),
    /// The tag carried no NDEF message.
    #[error("no NDEF message found on the tag")]
    EmptyTag,
}

/// The radio collaborator. Implementations wrap a platform NFC stack; the
/// crate ships [`NoRadio`] for hosts without hardware, and tests use
/// scripted doubles.
pub trait NfcRadio {
    /// Capability query, answered without touching the radio.
    fn is_supported(&self) -> bool;

    /// Bring the radio session up. Called once, at manager init.
    fn start(&mut self) -> Result<(), NfcError>;

    /// Acquire the radio for an NDEF exchange, waiting at most `timeout`
    /// for a peer. Acquisition is exclusive per device session.
    fn request_technology(&mut self, timeout: Duration) -> Result<(), NfcError>;

    /// Fetch the current tag and decode its text payload.
    fn read_text(&mut self) -> Result<String, NfcError>;

    /// Encode `uri` as a URI record and write the message to the peer.
    fn write_uri(&mut self, uri: &str) -> Result<(), NfcError>;

    /// Release an acquisition. Safe to call when none is outstanding.
    fn cancel_technology_request(&mut self);

    /// Stop listening for tag events. Safe to call repeatedly.
    fn unregister_tag_event(&mut self);
}

/// Radio stub for hosts without NFC hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRadio;

impl NfcRadio for NoRadio {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&mut self) -> Result<(), NfcError> {
        Err(NfcError::Unsupported)
    }

    fn request_technology(&mut self, _timeout: Duration) -> Result<(), NfcError> {
        Err(NfcError::Unsupported)
    }

    fn read_text(&mut self) -> Result<String, NfcError> {
        Err(NfcError::Unsupported)
    }

    fn write_uri(&mut self, _uri: &str) -> Result<(), NfcError> {
        Err(NfcError::Unsupported)
    }

    fn cancel_technology_request(&mut self) {}

    fn unregister_tag_event(&mut self) {}
}

/// Owns the radio for the life of the process.
///
/// Constructed once by the application entry point and passed by mutable
/// reference into whichever command needs radio access; `&mut self` on the
/// session methods keeps acquisitions exclusive. Teardown happens on drop.
pub struct NfcManager<R: NfcRadio> {
    radio: R,
    supported: bool,
}

impl<R: NfcRadio> NfcManager<R> {
    /// Query support and bring the radio up. A radio that reports support
    /// but fails to start degrades to unsupported.
    pub fn init(mut radio: R) -> Self {
        let supported = radio.is_supported() && radio.start().is_ok();
        Self { radio, supported }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Write `payload` as a URI record to a nearby peer.
    ///
    /// The acquisition is released before returning, whether the exchange
    /// succeeded, was cancelled, timed out, or failed.
    pub fn share(&mut self, payload: &str) -> Result<(), NfcError> {
        if !self.supported {
            return Err(NfcError::Unsupported);
        }

        let result = self
            .radio
            .request_technology(REQUEST_TIMEOUT)
            .and_then(|()| self.radio.write_uri(payload));
        self.radio.cancel_technology_request();
        result
    }

    /// Read the text payload of a nearby tag, with the same release
    /// guarantee as [`share`](Self::share).
    pub fn scan(&mut self) -> Result<String, NfcError> {
        if !self.supported {
            return Err(NfcError::Unsupported);
        }

        let result = self
            .radio
            .request_technology(REQUEST_TIMEOUT)
            .and_then(|()| self.radio.read_text());
        self.radio.cancel_technology_request();
        result
    }
}

impl<R: NfcRadio> Drop for NfcManager<R> {
    fn drop(&mut self) {
        self.radio.cancel_technology_request();
        self.radio.unregister_tag_event();
    }
}
