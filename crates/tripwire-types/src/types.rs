use std::fmt;

use serde::{Deserialize, Serialize};

/// Screen rectangle in absolute screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle spanned by two opposite corners, in any order
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            left: a.0.min(b.0),
            top: a.1.min(b.1),
            width: a.0.abs_diff(b.0),
            height: a.1.abs_diff(b.1),
        }
    }

    /// Saturates at `i32::MAX`, which no monitor reaches
    pub fn right(&self) -> i32 {
        self.left.saturating_add(to_coord(self.width))
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(to_coord(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Sub-rectangle given by two corners relative to this region's origin.
    ///
    /// Corners are clamped to the region bounds.
    pub fn crop(&self, a: (u32, u32), b: (u32, u32)) -> Self {
        let clamp = |(x, y): (u32, u32)| (to_coord(x.min(self.width)), to_coord(y.min(self.height)));
        let inner = Self::from_corners(clamp(a), clamp(b));

        Self {
            left: self.left.saturating_add(inner.left),
            top: self.top.saturating_add(inner.top),
            width: inner.width,
            height: inner.height,
        }
    }
}

fn to_coord(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

impl fmt::Display for CaptureRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.left, self.top
        )
    }
}

/// Which configured screen region an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    Message,
    Username,
}

impl AreaKind {
    pub fn label(&self) -> &'static str {
        match self {
            AreaKind::Message => "message",
            AreaKind::Username => "username",
        }
    }
}

/// Chat service credentials
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub channel_id: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            channel_id: channel_id.into(),
        }
    }

    /// Both token and channel id are present
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.channel_id.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"*".repeat(self.token.chars().count()))
            .field("channel_id", &self.channel_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_in_any_order_give_same_region() {
        let a = CaptureRegion::from_corners((10, 20), (110, 70));
        let b = CaptureRegion::from_corners((110, 70), (10, 20));
        let c = CaptureRegion::from_corners((10, 70), (110, 20));

        assert_eq!(a, CaptureRegion::new(10, 20, 100, 50));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn crop_is_relative_to_origin_and_clamped() {
        let region = CaptureRegion::new(300, 800, 200, 100);

        let cropped = region.crop((150, 90), (20, 10));
        assert_eq!(cropped, CaptureRegion::new(320, 810, 130, 80));

        let clamped = region.crop((0, 0), (999, 999));
        assert_eq!(clamped, region);
    }

    #[test]
    fn edges_saturate_instead_of_wrapping() {
        let wide = CaptureRegion::new(0, 0, 3_000_000_000, 3_000_000_000);
        assert_eq!(wide.right(), i32::MAX);
        assert_eq!(wide.bottom(), i32::MAX);

        let far = CaptureRegion::new(i32::MAX - 5, i32::MAX - 5, 100, 100);
        assert_eq!(far.right(), i32::MAX);

        let cropped = far.crop((50, 0), (60, 10));
        assert_eq!(cropped, CaptureRegion::new(i32::MAX, i32::MAX - 5, 10, 10));
    }

    #[test]
    fn region_serializes_with_screen_field_names() {
        let json = serde_json::to_value(CaptureRegion::new(312, 865, 1365, 177)).unwrap();
        assert_eq!(json["left"], 312);
        assert_eq!(json["top"], 865);
        assert_eq!(json["width"], 1365);
        assert_eq!(json["height"], 177);
    }

    #[test]
    fn credentials_debug_masks_token() {
        let creds = Credentials::new("secret", "42");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("******"));
        assert!(creds.is_complete());
        assert!(!Credentials::new("", "42").is_complete());
        assert!(!Credentials::new("secret", "").is_complete());
    }

    #[test]
    fn token_mask_counts_characters() {
        let rendered = format!("{:?}", Credentials::new("тöken", "42"));
        assert!(rendered.contains("\"*****\""));
        assert!(!rendered.contains("******"));
    }
}
