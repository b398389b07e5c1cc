//! Scripted collaborators shared by the watcher and monitor tests

mod monitor_tests;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use image::RgbaImage;
use tripwire_config::Config;
use tripwire_types::{CaptureRegion, Credentials};

use crate::error::{NotifyError, WatchError};
use crate::traits::{Clock, Notifier, ScreenCapture, TextRecognizer};
use crate::watcher::MessageWatcher;

#[derive(Default)]
pub struct FakeScreen {
    pub regions: RefCell<Vec<CaptureRegion>>,
    pub fail: Cell<bool>,
}

impl ScreenCapture for FakeScreen {
    fn capture(&self, region: CaptureRegion) -> Result<RgbaImage, WatchError> {
        self.regions.borrow_mut().push(region);
        if self.fail.get() {
            return Err(WatchError::Capture("region is off screen".into()));
        }
        Ok(RgbaImage::new(region.width.max(1), region.height.max(1)))
    }
}

/// Hands out queued recognition results in order, empty text once drained
#[derive(Default)]
pub struct ScriptedText {
    queue: RefCell<VecDeque<Result<String, String>>>,
    pub modes: RefCell<Vec<String>>,
    pub dimensions: RefCell<Vec<(u32, u32)>>,
}

impl ScriptedText {
    pub fn push(&self, text: &str) {
        self.queue.borrow_mut().push_back(Ok(text.to_string()));
    }

    pub fn push_err(&self, message: &str) {
        self.queue.borrow_mut().push_back(Err(message.to_string()));
    }
}

impl TextRecognizer for ScriptedText {
    fn recognize(&self, image: &RgbaImage, mode: &str) -> Result<String, WatchError> {
        self.modes.borrow_mut().push(mode.to_string());
        self.dimensions.borrow_mut().push(image.dimensions());
        match self.queue.borrow_mut().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(WatchError::Recognition(message)),
            None => Ok(String::new()),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<(String, Credentials)>>,
    pub fail: Cell<bool>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|(m, _)| m.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, message: &str, credentials: &Credentials) -> Result<(), NotifyError> {
        self.sent
            .borrow_mut()
            .push((message.to_string(), credentials.clone()));
        if self.fail.get() {
            return Err(NotifyError::Status {
                status: 500,
                body: "server error".into(),
            });
        }
        Ok(())
    }
}

/// Clock that only moves when slept on
pub struct FakeClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }

    fn sleep(&self, duration: Duration) {
        self.offset.set(self.offset.get() + duration);
    }
}

pub type TestWatcher = MessageWatcher<FakeScreen, ScriptedText, RecordingNotifier>;

pub fn watcher() -> TestWatcher {
    MessageWatcher::new(
        FakeScreen::default(),
        ScriptedText::default(),
        RecordingNotifier::default(),
    )
}

pub fn config(keywords: &[&str], response: &str) -> Config {
    Config {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        response: response.to_string(),
        discord_token: "token".into(),
        channel_id: "1234".into(),
        ..Config::default()
    }
}
