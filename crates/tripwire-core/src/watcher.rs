use std::collections::HashSet;

use tripwire_config::Config;
use tripwire_types::CaptureRegion;

use crate::error::WatchError;
use crate::preprocess::{TextNormalizer, rescale, split_lines};
use crate::session::{Fingerprint, SessionState};
use crate::traits::{Notifier, ScreenCapture, TextRecognizer};

/// Result of one detection cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// First cycle of a session, nothing captured
    InitialScan,
    /// Session already produced its notification
    AlreadyResponded,
    /// Username region did not read as the target username
    UsernameMismatch { seen: String },
    NoMatch,
    Matched {
        keyword: String,
        line: String,
        /// Whether the notifier accepted the response
        delivered: bool,
    },
    /// Capture or recognition failed, counted as no match
    Failed,
}

impl ScanOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, ScanOutcome::Matched { .. })
    }
}

/// Detect-and-respond cycle over a capture, a recognizer and a notifier
pub struct MessageWatcher<S, R, N> {
    capture: S,
    recognizer: R,
    notifier: N,
}

impl<S, R, N> MessageWatcher<S, R, N>
where
    S: ScreenCapture,
    R: TextRecognizer,
    N: Notifier,
{
    pub fn new(capture: S, recognizer: R, notifier: N) -> Self {
        Self {
            capture,
            recognizer,
            notifier,
        }
    }

    pub fn capture(&self) -> &S {
        &self.capture
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one cycle. Capture and recognition failures never escape.
    pub fn check_once(&self, config: &Config, session: &mut SessionState) -> ScanOutcome {
        match self.scan(config, session) {
            Ok(outcome) => outcome,
            Err(e @ WatchError::Capture(_)) => {
                tracing::error!("Error checking message: {e}");
                ScanOutcome::Failed
            }
            Err(e @ WatchError::Recognition(_)) => {
                tracing::error!("Error reading message: {e}");
                ScanOutcome::Failed
            }
        }
    }

    /// Capture `region`, scale it and recognize its text
    pub fn read_region(
        &self,
        region: CaptureRegion,
        scale: f64,
        mode: &str,
    ) -> Result<String, WatchError> {
        let image = self.capture.capture(region)?;
        let image = rescale(image, scale);
        self.recognizer.recognize(&image, mode)
    }

    /// Deliver `message` with the configured credentials.
    ///
    /// Returns false without contacting the notifier when credentials are incomplete.
    pub fn send_response(&self, config: &Config, session: &mut SessionState, message: &str) -> bool {
        let credentials = config.credentials();
        if !credentials.is_complete() {
            tracing::error!("Token or channel ID not configured");
            return false;
        }

        match self.notifier.send(message, &credentials) {
            Ok(()) => {
                session.sent_count += 1;
                tracing::info!("Message sent successfully");
                true
            }
            Err(e) => {
                tracing::error!("Failed to send message: {e}");
                false
            }
        }
    }

    fn scan(&self, config: &Config, session: &mut SessionState) -> Result<ScanOutcome, WatchError> {
        if session.is_initial_scan {
            session.is_initial_scan = false;
            session.seen_matches.clear();
            session.has_responded = false;
            tracing::debug!("Initial scan, ignoring content already on screen");
            return Ok(ScanOutcome::InitialScan);
        }

        if session.has_responded {
            return Ok(ScanOutcome::AlreadyResponded);
        }

        let normalizer = TextNormalizer::new(config.case_sensitive);

        if !config.target_username.is_empty() {
            let text = self.read_region(
                config.username_area,
                config.ocr_resolution,
                &config.ocr_config,
            )?;
            let seen = text.trim();
            if !normalizer.same(seen, &config.target_username) {
                tracing::trace!("Username region reads '{seen}', skipping cycle");
                return Ok(ScanOutcome::UsernameMismatch {
                    seen: seen.to_string(),
                });
            }
        }

        let text = self.read_region(
            config.message_area,
            config.ocr_resolution,
            &config.ocr_config,
        )?;
        let lines = split_lines(&text);

        let visible: HashSet<Fingerprint> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| Fingerprint::of(line, index))
            .collect();

        // Empty keywords would match every line
        let keywords: Vec<_> = config
            .keywords
            .iter()
            .filter(|k| !k.is_empty())
            .map(|k| (k, normalizer.normalize(k)))
            .collect();

        let mut outcome = ScanOutcome::NoMatch;

        'lines: for (index, line) in lines.iter().enumerate() {
            let check = normalizer.normalize(line);

            for (keyword, needle) in &keywords {
                if !check.contains(&**needle) {
                    continue;
                }

                let fingerprint = Fingerprint::of(line, index);
                if session.seen_matches.contains(&fingerprint) {
                    continue;
                }

                session.detected_count += 1;
                session.seen_matches.insert(fingerprint);
                tracing::info!("New keyword '{keyword}' found in: {line}");

                let delivered = self.send_response(config, session, &config.response);
                session.has_responded = true;

                outcome = ScanOutcome::Matched {
                    keyword: (*keyword).clone(),
                    line: line.clone(),
                    delivered,
                };
                break 'lines;
            }
        }

        session.retain_visible(&visible);
        Ok(outcome)
    }
}
