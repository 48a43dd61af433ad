use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod clear;
pub mod display;
pub mod edit;
pub mod open;
pub mod photo;
pub mod photo_utils;
pub mod scan;
pub mod share;
pub mod show;
pub mod ui;

pub use clear::run_clear;
pub use edit::run_edit;
pub use open::run_open;
pub use photo::run_photo;
pub use scan::run_scan;
pub use share::{run_beam, run_export, run_qr};
pub use show::run_show;

#[derive(Parser)]
#[command(name = "cardcmd")]
#[command(about = "Digital business card for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show your card
    Show,
    /// Edit card fields (interactive without flags)
    Edit(EditArgs),
    /// Set or clear your profile photo
    Photo(PhotoArgs),
    /// Render your card as a QR code
    Qr,
    /// Write your card to a .vcf file
    Export(ExportArgs),
    /// Share your card with a nearby device over NFC
    Beam,
    /// Receive a card over NFC or from a scanned QR string
    Scan(ScanArgs),
    /// Open a saved contact link (phone, email, or website)
    Open(OpenArgs),
    /// Clear all stored data
    Clear(ClearArgs),
}

#[derive(Args, Default)]
pub struct EditArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub company: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub website: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
}

impl EditArgs {
    /// True when no field flag was given; the command falls back to the
    /// interactive form.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.company.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.website.is_none()
            && self.linkedin.is_none()
            && self.twitter.is_none()
            && self.instagram.is_none()
    }
}

#[derive(Args)]
pub struct PhotoArgs {
    /// Path to image file (jpg, png, gif, webp); omit to pick one
    pub path: Option<String>,
    /// Clear the existing photo
    #[arg(short, long)]
    pub clear: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output path (defaults to contact.vcf in the cache directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Hand the written file to the system opener
    #[arg(long)]
    pub open: bool,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Already-decoded QR string to process instead of reading NFC
    #[arg(long, value_name = "DATA")]
    pub qr: Option<String>,
}

#[derive(Args)]
pub struct OpenArgs {
    /// Which saved link to open: phone, email, or website
    pub target: String,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
