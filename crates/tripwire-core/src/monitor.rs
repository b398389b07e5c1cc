use std::time::{Duration, Instant, SystemTime};

use tripwire_config::{Config, SessionRecord};

use crate::session::SessionState;
use crate::traits::{Clock, Notifier, ScreenCapture, StopSignal, TextRecognizer};
use crate::watcher::MessageWatcher;

/// Polling granularity of the loop, bounding stop latency
pub const TICK: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Idle,
    Running,
    Stopped,
}

/// Live figures handed to the status callback every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub runtime: Duration,
    pub scans: u64,
    pub detected: u64,
    pub sent: u64,
}

/// Summary of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub started_at: SystemTime,
    pub ended_at: SystemTime,
    pub runtime: Duration,
    pub scans: u64,
    pub detected: u64,
    pub sent: u64,
}

impl SessionReport {
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord::new(self.started_at, self.ended_at, self.detected, self.sent)
    }
}

/// Fixed-interval loop driving [`MessageWatcher::check_once`]
pub struct Monitor<C> {
    clock: C,
    tick: Duration,
    state: MonitorState,
    session: SessionState,
}

impl<C: Clock> Monitor<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            tick: TICK,
            state: MonitorState::Idle,
            session: SessionState::new(),
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Start a fresh session and block until `stop` fires.
    ///
    /// Session state is reset on every call, so a stopped monitor never resumes
    /// where it left off.
    pub fn run<S, R, N, T>(
        &mut self,
        watcher: &MessageWatcher<S, R, N>,
        config: &Config,
        stop: &mut T,
        mut on_status: impl FnMut(&SessionStatus),
    ) -> SessionReport
    where
        S: ScreenCapture,
        R: TextRecognizer,
        N: Notifier,
        T: StopSignal,
    {
        self.session.reset();
        self.state = MonitorState::Running;

        let started_at = self.clock.wall_time();
        let started = self.clock.now();
        let interval = config.scan_interval();
        let mut last_scan: Option<Instant> = None;
        let mut scans = 0;

        tracing::info!(
            "Monitoring started, scanning every {:?} for {} keyword(s)",
            interval,
            config.keywords.len()
        );

        loop {
            if stop.should_stop() {
                break;
            }

            let due = last_scan.is_none_or(|at| self.clock.now().duration_since(at) >= interval);
            if due {
                let outcome = watcher.check_once(config, &mut self.session);
                tracing::trace!("Scan {scans}: {outcome:?}");
                scans += 1;
                last_scan = Some(self.clock.now());
            }

            on_status(&SessionStatus {
                runtime: self.clock.now().duration_since(started),
                scans,
                detected: self.session.detected_count(),
                sent: self.session.sent_count(),
            });

            self.clock.sleep(self.tick);
        }

        self.state = MonitorState::Stopped;

        let report = SessionReport {
            started_at,
            ended_at: self.clock.wall_time(),
            runtime: self.clock.now().duration_since(started),
            scans,
            detected: self.session.detected_count(),
            sent: self.session.sent_count(),
        };

        tracing::info!(
            "Monitoring stopped after {:?}: {} scans, {} detected, {} sent",
            report.runtime,
            report.scans,
            report.detected,
            report.sent
        );

        report
    }
}
