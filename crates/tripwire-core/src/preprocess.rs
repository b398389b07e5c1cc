use std::borrow::Cow;

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Applies the configured case policy to recognized text
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    pub case_sensitive: bool,
}

impl TextNormalizer {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }

    /// Both sides normalized then compared for equality
    pub fn same(&self, a: &str, b: &str) -> bool {
        self.normalize(a) == self.normalize(b)
    }
}

/// Non-empty, trimmed lines of recognized text
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Dimensions after scaling, `None` when either would be zero
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> Option<(u32, u32)> {
    let w = (width as f64 * scale) as i64;
    let h = (height as f64 * scale) as i64;
    if w <= 0 || h <= 0 || w > u32::MAX as i64 || h > u32::MAX as i64 {
        return None;
    }
    Some((w as u32, h as u32))
}

/// Resize for recognition, returning the input untouched when scaling is a no-op or impossible
pub fn rescale(image: RgbaImage, scale: f64) -> RgbaImage {
    match scaled_dimensions(image.width(), image.height(), scale) {
        Some((w, h)) if (w, h) != image.dimensions() => {
            imageops::resize(&image, w, h, FilterType::Lanczos3)
        }
        Some(_) => image,
        None => {
            tracing::debug!(
                "Skipping rescale by {scale}: {}x{} would collapse",
                image.width(),
                image.height()
            );
            image
        }
    }
}
