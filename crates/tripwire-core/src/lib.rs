pub mod error;
pub mod monitor;
pub mod preprocess;
pub mod session;
pub mod traits;
pub mod watcher;

pub use error::{NotifyError, WatchError};
pub use monitor::{Monitor, MonitorState, SessionReport, SessionStatus};
pub use session::{Fingerprint, SessionState};
pub use traits::{Clock, Notifier, ScreenCapture, StopSignal, SystemClock, TextRecognizer};
pub use watcher::{MessageWatcher, ScanOutcome};

#[cfg(test)]
mod tests;
