use std::time::{Duration, Instant, SystemTime};

use image::RgbaImage;
use tripwire_types::{CaptureRegion, Credentials};

use crate::error::{NotifyError, WatchError};

/// Grabs a screen rectangle as a bitmap
pub trait ScreenCapture {
    fn capture(&self, region: CaptureRegion) -> Result<RgbaImage, WatchError>;
}

/// Turns a bitmap into text
pub trait TextRecognizer {
    /// `mode` is the engine-specific recognition mode, passed through untouched
    fn recognize(&self, image: &RgbaImage, mode: &str) -> Result<String, WatchError>;
}

/// Delivers a message to the chat service
pub trait Notifier {
    fn send(&self, message: &str, credentials: &Credentials) -> Result<(), NotifyError>;
}

/// Time source for the monitoring loop
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration);

    fn wall_time(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Cooperative stop request, polled once per tick
pub trait StopSignal {
    fn should_stop(&mut self) -> bool;
}

impl<F> StopSignal for F
where
    F: FnMut() -> bool,
{
    fn should_stop(&mut self) -> bool {
        self()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
