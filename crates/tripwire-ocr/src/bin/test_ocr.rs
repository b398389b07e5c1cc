//! Capture a region once and print what tesseract reads.
//!
//! Usage: cargo run -p tripwire-ocr --bin test_ocr -- <left> <top> <width> <height> [psm]

use anyhow::{Context, Result};
use tripwire_types::CaptureRegion;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let number = |i: usize| -> Result<i64> {
        args.get(i)
            .with_context(|| format!("missing argument {}", i + 1))?
            .parse()
            .with_context(|| format!("argument {} is not a number", i + 1))
    };

    let region = CaptureRegion::new(
        number(0)? as i32,
        number(1)? as i32,
        number(2)? as u32,
        number(3)? as u32,
    );
    let mode = format!("--psm {}", args.get(4).map(String::as_str).unwrap_or("4"));

    let start = std::time::Instant::now();
    let image = tripwire_ocr::capture_screen_region(region)?;
    tracing::debug!("Captured {region} in {:?}", start.elapsed());

    tripwire_ocr::save_png(&image, std::path::Path::new("test_capture.png"))?;
    tracing::debug!("Saved to test_capture.png");

    let language = std::env::var("TRIPWIRE_OCR_LANG").unwrap_or_else(|_| "eng".into());
    let recognizer = tripwire_ocr::TesseractRecognizer::new(language, None);

    let start = std::time::Instant::now();
    let text = recognizer.recognize_text(&image, &mode)?;
    tracing::debug!("Recognized {} chars in {:?}", text.len(), start.elapsed());

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        println!("> {line}");
    }

    Ok(())
}
