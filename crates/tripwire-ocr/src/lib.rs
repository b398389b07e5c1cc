mod capture;
mod hotkey;
mod recognize;

pub use capture::{ScreenGrabber, capture_screen_region, save_png};
pub use device_query::Keycode;
pub use hotkey::{EscapeStop, KeyWatcher};
pub use recognize::{RecognitionMode, RecognitionModeError, TesseractRecognizer};
