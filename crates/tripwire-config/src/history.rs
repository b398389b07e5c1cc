use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Summary of one finished monitoring session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unix seconds
    pub started_at: u64,
    /// Unix seconds
    pub ended_at: u64,
    pub messages_detected: u64,
    pub messages_sent: u64,
}

impl SessionRecord {
    pub fn new(started: SystemTime, ended: SystemTime, detected: u64, sent: u64) -> Self {
        Self {
            started_at: unix_seconds(started),
            ended_at: unix_seconds(ended),
            messages_detected: detected,
            messages_sent: sent,
        }
    }

    pub fn duration_secs(&self) -> u64 {
        self.ended_at.saturating_sub(self.started_at)
    }
}

fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
