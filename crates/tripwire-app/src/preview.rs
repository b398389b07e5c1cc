use std::path::PathBuf;

use anyhow::{Context, Result};
use tripwire_config::ocr::{MAX_SCALE, MIN_SCALE, PAGE_SEG_MODES, clamp_scale, page_seg_mode, psm_config};
use tripwire_ocr::{capture_screen_region, save_png};
use tripwire_types::AreaKind;

use crate::io::prompt;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewCommand {
    Scale(f64),
    PageSegMode(String),
    Refresh,
    Save,
    Quit,
}

impl PreviewCommand {
    /// `s <scale>`, `p <mode>`, `r`, `w` or `q`
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("r");
        let arg = parts.next();

        match (command, arg) {
            ("s", Some(value)) => value.parse().ok().map(|v| Self::Scale(clamp_scale(v))),
            ("p", Some(mode)) => psm_config(mode).map(|_| Self::PageSegMode(mode.to_string())),
            ("r", None) => Some(Self::Refresh),
            ("w", None) => Some(Self::Save),
            ("q", None) => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Try scale and page segmentation mode candidates against the live message area
pub fn optimize_ocr(state: &mut AppState) -> Result<()> {
    let mut scale = state.config.ocr_resolution;
    let mut mode = page_seg_mode(&state.config.ocr_config)
        .unwrap_or("4")
        .to_string();

    println!("\nOCR tuning for the message area");
    println!("  s <scale>  set scale ({MIN_SCALE} to {MAX_SCALE})");
    println!("  p <mode>   set page segmentation mode ({})", PAGE_SEG_MODES.join(", "));
    println!("  r          read again");
    println!("  w          save current settings");
    println!("  q          back to main menu");

    loop {
        let config = psm_config(&mode).unwrap_or_else(|| state.config.ocr_config.clone());

        println!("\n--- scale {scale:.2}, {config} ---");
        match state
            .watcher
            .read_region(state.config.message_area, scale, &config)
        {
            Ok(text) => println!("{}", text.trim_end()),
            Err(e) => println!("Recognition failed: {e}"),
        }

        loop {
            let input = prompt("\n> ")?;
            match PreviewCommand::parse(&input) {
                Some(PreviewCommand::Scale(value)) => scale = value,
                Some(PreviewCommand::PageSegMode(value)) => mode = value,
                Some(PreviewCommand::Refresh) => {}
                Some(PreviewCommand::Save) => {
                    state.update(|c| {
                        c.ocr_resolution = scale;
                        c.ocr_config = config.clone();
                    })?;
                    tracing::info!("Saved OCR settings: scale {scale}, {config}");
                    println!("OCR settings saved");
                    continue;
                }
                Some(PreviewCommand::Quit) => return Ok(()),
                None => {
                    println!("Unknown command");
                    continue;
                }
            }
            break;
        }
    }
}

/// `x1 y1 x2 y2` in image coordinates
pub fn parse_crop(input: &str) -> Option<((u32, u32), (u32, u32))> {
    let values: Vec<u32> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match values.as_slice() {
        &[x1, y1, x2, y2] => Some(((x1, y1), (x2, y2))),
        _ => None,
    }
}

/// Save a capture of an area for inspection, then optionally crop it
pub fn view_area(state: &mut AppState) -> Result<()> {
    let kind = match prompt("\nArea to view (1 = message, 2 = username): ")?.as_str() {
        "1" => AreaKind::Message,
        "2" => AreaKind::Username,
        _ => {
            println!("Unknown area");
            return Ok(());
        }
    };

    let region = state.config.area(kind);
    let image = capture_screen_region(region)
        .with_context(|| format!("Failed to capture {} area", kind.label()))?;

    let path = PathBuf::from(format!("tripwire_{}_area.png", kind.label()));
    save_png(&image, &path)?;
    println!("Saved {region} capture to {}", path.display());

    let input = prompt("\nCrop as x1 y1 x2 y2 in image pixels (empty keeps the area): ")?;
    if input.is_empty() {
        return Ok(());
    }

    let Some((a, b)) = parse_crop(&input) else {
        println!("Invalid crop. Expected four non-negative numbers.");
        return Ok(());
    };

    let cropped = region.crop(a, b);
    if cropped.is_empty() {
        println!("Crop has no area, {} area unchanged", kind.label());
        return Ok(());
    }

    state.update(|c| c.set_area(kind, cropped))?;
    tracing::info!("Cropped {} area from {region} to {cropped}", kind.label());
    println!("{} area is now {cropped}", kind.label());
    Ok(())
}
