use clap::Parser;

use cardcmd::cli::{
    run_beam, run_clear, run_edit, run_export, run_open, run_photo, run_qr, run_scan, run_show,
    Cli, Commands,
};
use cardcmd::db::Database;
use cardcmd::nfc::{NfcManager, NoRadio};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let db = Database::open()?;

    // Radio lifecycle lives here: brought up once, injected into the
    // commands that need it, torn down when the manager drops.
    let mut nfc = NfcManager::init(NoRadio);

    match cli.command {
        None | Some(Commands::Show) => {
            run_show(&db)?;
        }
        Some(Commands::Edit(args)) => {
            run_edit(&db, args)?;
        }
        Some(Commands::Photo(args)) => {
            run_photo(&db, args.path.as_deref(), args.clear)?;
        }
        Some(Commands::Qr) => {
            run_qr(&db)?;
        }
        Some(Commands::Export(args)) => {
            run_export(&db, args.output, args.open)?;
        }
        Some(Commands::Beam) => {
            run_beam(&db, &mut nfc)?;
        }
        Some(Commands::Scan(args)) => {
            run_scan(&mut nfc, args.qr)?;
        }
        Some(Commands::Open(args)) => {
            run_open(&db, &args.target)?;
        }
        Some(Commands::Clear(args)) => {
            run_clear(&db, args.yes)?;
        }
    }

    Ok(())
}
