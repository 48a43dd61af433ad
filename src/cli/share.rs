use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::card::{nfc_uri_payload, qr_payload, vcard, PayloadError};
use crate::db::Database;
use crate::nfc::{NfcError, NfcManager, NfcRadio};

/// Execute the qr command - render the share payload as a terminal QR code
pub fn run_qr(db: &Database) -> Result<()> {
    let profile = db.load_profile()?.unwrap_or_default();
    if profile.is_empty() {
        println!("Add profile info first.");
        return Ok(());
    }

    let payload = qr_payload(&profile);
    let code = qrcode::QrCode::new(payload.as_bytes())
        .map_err(|e| anyhow!("Failed to generate QR code: {}", e))?;
    let image = code.render::<qrcode::render::unicode::Dense1x2>().build();
    println!("{}", image);
    println!("Scan this QR code to share your details");

    Ok(())
}

/// Execute the export command - write the card as a .vcf file
pub fn run_export(db: &Database, output: Option<PathBuf>, open: bool) -> Result<()> {
    let profile = db.load_profile()?.unwrap_or_default();

    let path = match output {
        Some(p) => p,
        None => default_export_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, vcard::encode(&profile))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());

    if open {
        let uri = format!("file://{}", path.display());
        if webbrowser::open(&uri).is_err() {
            println!("Open this file to share it: {}", path.display());
        }
    }

    Ok(())
}

fn default_export_path() -> Result<PathBuf> {
    let cache_dir =
        dirs::cache_dir().ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
    Ok(cache_dir.join("cardcmd").join("contact.vcf"))
}

/// Execute the beam command - write the card to a nearby device over NFC
pub fn run_beam<R: NfcRadio>(db: &Database, nfc: &mut NfcManager<R>) -> Result<()> {
    let profile = db.load_profile()?.unwrap_or_default();

    let payload = match nfc_uri_payload(&profile) {
        Ok(payload) => payload,
        Err(PayloadError::NoContent) => {
            return Err(anyhow!("No content to share via NFC"));
        }
    };

    match nfc.share(&payload) {
        Ok(()) => {
            println!("Ready to share. Hold your phone near another NFC-enabled device.");
            Ok(())
        }
        // User cancellation is not an error
        Err(NfcError::Cancelled) => {
            println!("Cancelled.");
            Ok(())
        }
        Err(NfcError::TimedOut) => Err(anyhow!("NFC request timed out. Please try again.")),
        Err(NfcError::Unsupported) => Err(anyhow!("NFC is not supported on this device")),
        Err(e) => Err(anyhow!("Failed to share via NFC: {}", e)),
    }
}
