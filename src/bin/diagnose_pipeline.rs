// Diagnostic tool to trace every stage of a payload scan
use clap::Parser;
use qr_payload::detector::{RqrrDetector, SymbolDetector};
use qr_payload::loader::load_raster;
use qr_payload::preprocess::{to_grayscale, upscale};
use qr_payload::report::{classify, render};
use qr_payload::utils::grayscale::grayscale_stats;
use qr_payload::validate::{Validation, validate_all};
use qr_payload::{Outcome, PreprocessConfig, ScanError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "diagnose-pipeline",
    version,
    about = "Trace each stage of a QR payload scan"
)]
struct Cli {
    /// Image file to diagnose
    image: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    println!("============================================================");
    println!("DIAGNOSING: {}", cli.image.display());
    println!("============================================================\n");

    match diagnose_image(&cli.image) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn diagnose_image(path: &Path) -> Result<(), ScanError> {
    let config = PreprocessConfig::default();
    let factor = config.upscale_factor();

    let source = load_raster(path)?;
    println!(
        "Step 1: Image loaded - {}x{} pixels, {:?}",
        source.width(),
        source.height(),
        source.mode()
    );

    let gray = to_grayscale(&source)?;
    let stats = grayscale_stats(gray.samples());
    println!(
        "Step 2: Grayscale - range {}-{}, average {}",
        stats.min, stats.max, stats.avg
    );

    let scaled = upscale(&gray, factor, config.max_pixels())?;
    println!(
        "Step 3: Upscaled x{} - {}x{} pixels",
        factor,
        scaled.width(),
        scaled.height()
    );

    let start = Instant::now();
    let raws = RqrrDetector::new().detect(&scaled)?;
    println!(
        "\nStep 4: Detection - {} symbols ({:.2?})",
        raws.len(),
        start.elapsed()
    );
    for (i, raw) in raws.iter().enumerate() {
        let region = raw.region.scaled_down(factor);
        let bb = region.bounding_box();
        println!(
            "  [{:2}] {} bytes, source box=({:.1}, {:.1})-({:.1}, {:.1}), side={:.1}px",
            i,
            raw.data.len(),
            bb.min_x,
            bb.min_y,
            bb.max_x,
            bb.max_y,
            region.mean_side()
        );
        if let Some(info) = raw.info {
            println!(
                "       version={} ({}x{} modules), ec={:?}, mask={}",
                info.version,
                info.size(),
                info.size(),
                info.ec_level,
                info.mask
            );
        }
    }

    let validations = validate_all(raws);
    println!("\nStep 5: Validation");
    for (i, validation) in validations.iter().enumerate() {
        match validation {
            Validation::Validated(payload) => println!(
                "  [{:2}] valid: {} base64 chars -> {} bytes",
                i,
                payload.encoded().len(),
                payload.decoded().len()
            ),
            Validation::Invalid { raw, cause } => println!(
                "  [{:2}] discarded: {} ({:?})",
                i,
                cause,
                String::from_utf8_lossy(&raw.data)
            ),
        }
    }

    let outcomes = classify(&validations);
    println!("\nStep 6: Outcomes");
    for outcome in &outcomes {
        match outcome.diagnostic() {
            Some(text) => println!("  diagnostic: {}", text),
            None => println!("  {}", outcome_label(outcome)),
        }
    }
    let output = render(&outcomes);
    println!(
        "\nOutput ({} bytes): {:?}",
        output.len(),
        String::from_utf8_lossy(&output)
    );

    Ok(())
}

fn outcome_label(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Decoded(payload) => format!("decoded: {}", payload.text()),
        _ => "no valid payload".to_string(),
    }
}
