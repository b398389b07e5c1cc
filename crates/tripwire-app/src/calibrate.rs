use std::time::Duration;

use anyhow::Result;
use tripwire_ocr::{KeyWatcher, Keycode};
use tripwire_types::{AreaKind, CaptureRegion};

use crate::io::prompt;
use crate::state::AppState;

const POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickStep {
    Waiting,
    FirstCorner((i32, i32)),
    Done(CaptureRegion),
}

/// Two presses of the capture key at opposite corners define a region
#[derive(Debug, Default)]
pub struct CornerPicker {
    first: Option<(i32, i32)>,
    key_was_down: bool,
}

impl CornerPicker {
    /// Feed one poll of key and cursor state. Only key-down edges count.
    pub fn observe(&mut self, key_down: bool, cursor: (i32, i32)) -> PickStep {
        let pressed = key_down && !self.key_was_down;
        self.key_was_down = key_down;

        if !pressed {
            return PickStep::Waiting;
        }

        match self.first.take() {
            None => {
                self.first = Some(cursor);
                PickStep::FirstCorner(cursor)
            }
            Some(first) => PickStep::Done(CaptureRegion::from_corners(first, cursor)),
        }
    }
}

pub fn calibrate_area(state: &mut AppState, kind: AreaKind) -> Result<()> {
    println!("\nCalibrating {} area...", kind.label());
    println!("1. Move your mouse to the top-left corner of the {} area", kind.label());
    println!("2. Press 'C' to capture the first point");
    println!("3. Move your mouse to the bottom-right corner");
    println!("4. Press 'C' again to capture the second point");
    prompt("\nPress Enter to start calibration (ESC to cancel)")?;

    let keys = KeyWatcher::new();
    let mut picker = CornerPicker::default();

    let region = loop {
        if keys.is_pressed(Keycode::Escape) {
            println!("\nCalibration cancelled");
            return Ok(());
        }

        match picker.observe(keys.is_pressed(Keycode::C), keys.cursor_position()) {
            PickStep::Waiting => {}
            PickStep::FirstCorner(pos) => println!("Start position captured: {pos:?}"),
            PickStep::Done(region) => break region,
        }

        std::thread::sleep(POLL);
    };

    if region.is_empty() {
        println!("\nSelected area has no size, calibration discarded");
        return Ok(());
    }

    state.update(|config| config.set_area(kind, region))?;
    tracing::info!("Calibrated {} area to {region}", kind.label());
    println!("\n{} area calibrated and saved: {region}", capitalized(kind));
    Ok(())
}

fn capitalized(kind: AreaKind) -> &'static str {
    match kind {
        AreaKind::Message => "Message",
        AreaKind::Username => "Username",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_presses_define_region() {
        let mut picker = CornerPicker::default();

        assert_eq!(picker.observe(false, (0, 0)), PickStep::Waiting);
        assert_eq!(picker.observe(true, (500, 400)), PickStep::FirstCorner((500, 400)));
        assert_eq!(picker.observe(false, (300, 200)), PickStep::Waiting);
        assert_eq!(
            picker.observe(true, (300, 200)),
            PickStep::Done(CaptureRegion::new(300, 200, 200, 200))
        );
    }

    #[test]
    fn held_key_counts_once() {
        let mut picker = CornerPicker::default();

        assert_eq!(picker.observe(true, (10, 10)), PickStep::FirstCorner((10, 10)));
        assert_eq!(picker.observe(true, (50, 50)), PickStep::Waiting);
        assert_eq!(picker.observe(true, (90, 90)), PickStep::Waiting);
        assert_eq!(picker.observe(false, (90, 90)), PickStep::Waiting);
        assert_eq!(
            picker.observe(true, (90, 90)),
            PickStep::Done(CaptureRegion::new(10, 10, 80, 80))
        );
    }
}
