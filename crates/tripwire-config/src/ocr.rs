//! Bounds used when the operator tunes recognition parameters.

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 2.0;

/// Page segmentation modes offered for tuning
pub const PAGE_SEG_MODES: &[&str] = &[
    "0", "1", "3", "4", "6", "7", "8", "9", "10", "11", "12", "13",
];

pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Recognition mode string for a page segmentation mode, `None` if unsupported
pub fn psm_config(mode: &str) -> Option<String> {
    let mode = mode.trim();
    PAGE_SEG_MODES
        .contains(&mode)
        .then(|| format!("--psm {mode}"))
}

/// Page segmentation mode named in a recognition mode string
pub fn page_seg_mode(ocr_config: &str) -> Option<&str> {
    let mut tokens = ocr_config.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "--psm" {
            return tokens.next();
        }
    }
    None
}
