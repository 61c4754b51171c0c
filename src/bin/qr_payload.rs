use clap::Parser;
use qr_payload::{Reporter, ScanError, scan_file};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "qr-payload",
    version,
    about = "Print the base64 payload carried by a QR code image"
)]
struct Cli {
    /// Image file containing the QR code (PNG, JPEG, BMP, GIF)
    image: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli.image) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(image: &Path) -> Result<(), ScanError> {
    let scan = scan_file(image)?;
    let mut reporter = Reporter::new(io::stdout().lock());
    reporter.emit(&scan.outcomes)?;
    Ok(())
}
