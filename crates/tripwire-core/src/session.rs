use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Identity of a recognized line at a position within one capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    pub fn of(line: &str, index: usize) -> Self {
        let mut hasher = DefaultHasher::new();
        line.hash(&mut hasher);
        index.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// In-memory state of one monitoring run
#[derive(Debug)]
pub struct SessionState {
    pub(crate) seen_matches: HashSet<Fingerprint>,
    pub(crate) has_responded: bool,
    pub(crate) detected_count: u64,
    pub(crate) sent_count: u64,
    pub(crate) is_initial_scan: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            seen_matches: HashSet::new(),
            has_responded: false,
            detected_count: 0,
            sent_count: 0,
            is_initial_scan: true,
        }
    }

    /// Back to the state of a fresh run
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn has_responded(&self) -> bool {
        self.has_responded
    }

    pub fn is_initial_scan(&self) -> bool {
        self.is_initial_scan
    }

    pub fn detected_count(&self) -> u64 {
        self.detected_count
    }

    pub fn sent_count(&self) -> u64 {
        self.sent_count
    }

    pub fn seen_count(&self) -> usize {
        self.seen_matches.len()
    }

    pub fn has_seen(&self, fingerprint: &Fingerprint) -> bool {
        self.seen_matches.contains(fingerprint)
    }

    /// Forget fingerprints that are no longer on screen
    pub(crate) fn retain_visible(&mut self, visible: &HashSet<Fingerprint>) {
        self.seen_matches.retain(|fp| visible.contains(fp));
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
