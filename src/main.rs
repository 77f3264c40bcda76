// Gift-envelope name scanner demo: normalize a photo, run OCR, report the
// extracted name.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use clap::Parser;
use neimscan::extraction::NameExtractor;
use neimscan::models::ExtractionOutcome;
use neimscan::processing::progress::HEARTBEAT_INTERVAL;
use neimscan::processing::{ProgressEvent, ProgressHeartbeat, TesseractOcr};
use neimscan::EnvelopeScanner;

#[derive(Parser)]
#[command(
    name = "envelope_demo",
    about = "Scan a gift-envelope photo and extract the sender's name"
)]
struct Args {
    /// Path to the envelope photo
    image: PathBuf,

    /// Tesseract language packs, joined with '+'
    #[arg(long, default_value = "kor+eng+chi_tra")]
    languages: String,

    /// Emit the outcome as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn print_report(outcome: &ExtractionOutcome) {
    println!("\n===============================================");
    println!("          ENVELOPE SCAN REPORT");
    println!("===============================================\n");

    println!("RECOGNIZED TEXT:");
    for line in outcome.recognized_text.lines().filter(|l| !l.trim().is_empty()) {
        println!("  {}", line.trim());
    }

    println!("\nCONFIDENCE: {:.1}%", outcome.confidence);
    match &outcome.extracted_name {
        Some(name) => println!("EXTRACTED NAME: {}", name),
        None => println!("EXTRACTED NAME: (no name detected)"),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let languages: Vec<&str> = args.languages.split('+').collect();
    let scanner = EnvelopeScanner::with_engine(
        TesseractOcr::with_languages(&languages),
        NameExtractor::with_default_tables(),
    );

    // Synthetic heartbeat while recognition is outstanding; estimates stay
    // below 100 until the real result arrives.
    let done = Arc::new(AtomicBool::new(false));
    let ticker = if args.json {
        None
    } else {
        let done = Arc::clone(&done);
        let heartbeat = ProgressHeartbeat::start();
        Some(thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                if let ProgressEvent::Estimate(percent) = heartbeat.estimate() {
                    eprint!("\r  recognizing... ~{}%", percent);
                }
                thread::sleep(HEARTBEAT_INTERVAL);
            }
            eprintln!("\r  recognizing... 100%");
        }))
    };

    let result = scanner.scan_file(&args.image);
    done.store(true, Ordering::Relaxed);
    if let Some(handle) = ticker {
        let _ = handle.join();
    }

    match result {
        Ok(outcome) => {
            if args.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize outcome: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_report(&outcome);
            }
        }
        Err(err) => {
            eprintln!("Error scanning envelope: {}", err);
            std::process::exit(1);
        }
    }
}
