use std::time::Duration;

use serde::{Deserialize, Serialize};
use tripwire_types::{AreaKind, CaptureRegion, Credentials};

pub use self::display::settings_rows;
pub use self::env::RuntimeSettings;
pub use self::history::SessionRecord;
pub use self::store::{ConfigStore, Loaded};

pub mod display;
pub mod env;
pub mod history;
pub mod ocr;
pub mod store;

/// Oldest entries are dropped past this many recorded sessions
pub const MAX_SESSION_HISTORY: usize = 50;

/// Monitor configuration as stored on disk.
///
/// Every field except `session_history` is required: a stored record missing
/// any of them fails to deserialize and is replaced by [`Config::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Trigger vocabulary
    pub keywords: Vec<String>,
    /// Message posted verbatim on trigger
    pub response: String,
    /// Seconds between capture attempts
    pub scan_interval: f64,
    pub message_area: CaptureRegion,
    pub username_area: CaptureRegion,
    pub case_sensitive: bool,
    pub discord_token: String,
    pub channel_id: String,
    /// Scale applied to captured bitmaps before recognition
    pub ocr_resolution: f64,
    /// Recognition mode, tesseract CLI style (`--psm 4`)
    pub ocr_config: String,
    /// Restricts triggering to this on-screen username when non-empty
    pub target_username: String,
    #[serde(default)]
    pub session_history: Vec<SessionRecord>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InvalidConfig {
    #[error("scan_interval must be a positive number of seconds, got {0}")]
    ScanInterval(f64),

    #[error("ocr_resolution must be a positive scale factor, got {0}")]
    Resolution(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            response: String::new(),
            scan_interval: 0.01,
            message_area: CaptureRegion::new(312, 865, 1365, 177),
            username_area: CaptureRegion::new(100, 865, 200, 30),
            case_sensitive: false,
            discord_token: String::new(),
            channel_id: String::new(),
            ocr_resolution: 1.0,
            ocr_config: "--psm 4".to_string(),
            target_username: String::new(),
            session_history: Vec::new(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if !(self.scan_interval.is_finite() && self.scan_interval > 0.0) {
            return Err(InvalidConfig::ScanInterval(self.scan_interval));
        }

        if !(self.ocr_resolution.is_finite() && self.ocr_resolution > 0.0) {
            return Err(InvalidConfig::Resolution(self.ocr_resolution));
        }

        Ok(())
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs_f64(self.scan_interval)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.discord_token.clone(), self.channel_id.clone())
    }

    pub fn area(&self, kind: AreaKind) -> CaptureRegion {
        match kind {
            AreaKind::Message => self.message_area,
            AreaKind::Username => self.username_area,
        }
    }

    pub fn set_area(&mut self, kind: AreaKind, region: CaptureRegion) {
        match kind {
            AreaKind::Message => self.message_area = region,
            AreaKind::Username => self.username_area = region,
        }
    }

    /// Replace keywords from comma separated operator input
    pub fn set_keywords_from_csv(&mut self, input: &str) {
        self.keywords = input
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();
    }

    /// Returns false and leaves the interval untouched when `seconds` is not positive
    pub fn set_scan_interval(&mut self, seconds: f64) -> bool {
        if seconds.is_finite() && seconds > 0.0 {
            self.scan_interval = seconds;
            true
        } else {
            false
        }
    }

    pub fn toggle_case_sensitive(&mut self) -> bool {
        self.case_sensitive = !self.case_sensitive;
        self.case_sensitive
    }

    pub fn record_session(&mut self, record: SessionRecord) {
        self.session_history.push(record);
        if self.session_history.len() > MAX_SESSION_HISTORY {
            let excess = self.session_history.len() - MAX_SESSION_HISTORY;
            self.session_history.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn record_missing_a_field_does_not_deserialize() {
        let result = serde_json::from_str::<Config>(r#"{"keywords": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn session_history_is_optional_and_extra_keys_are_ignored() {
        let mut value = serde_json::to_value(Config::default()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("session_history");
        object.insert("legacy".into(), serde_json::json!(1));

        let config: Config = serde_json::from_value(value).unwrap();
        assert!(config.session_history.is_empty());
    }

    #[test]
    fn rejects_non_positive_interval_and_scale() {
        let mut config = Config {
            scan_interval: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(InvalidConfig::ScanInterval(0.0)));

        config.scan_interval = 1.0;
        config.ocr_resolution = -1.0;
        assert_eq!(config.validate(), Err(InvalidConfig::Resolution(-1.0)));
    }

    #[test]
    fn keywords_from_csv_are_trimmed_and_empties_dropped() {
        let mut config = Config::default();
        config.set_keywords_from_csv(" sale , ,deal,  ");
        assert_eq!(config.keywords, vec!["sale", "deal"]);
    }

    #[test]
    fn interval_edit_rejects_zero() {
        let mut config = Config::default();
        assert!(!config.set_scan_interval(0.0));
        assert!(!config.set_scan_interval(f64::NAN));
        assert_eq!(config.scan_interval, 0.01);
        assert!(config.set_scan_interval(2.5));
        assert_eq!(config.scan_interval(), Duration::from_millis(2500));
    }

    #[test]
    fn history_keeps_most_recent_sessions() {
        let mut config = Config::default();
        for i in 0..(MAX_SESSION_HISTORY as u64 + 5) {
            config.record_session(SessionRecord {
                started_at: i,
                ended_at: i + 1,
                messages_detected: 0,
                messages_sent: 0,
            });
        }

        assert_eq!(config.session_history.len(), MAX_SESSION_HISTORY);
        assert_eq!(config.session_history[0].started_at, 5);
    }
}
