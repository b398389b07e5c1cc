use std::time::Duration;

use super::{FakeClock, config, watcher};
use crate::monitor::{Monitor, MonitorState, SessionStatus};

/// Stop signal that lets `ticks` iterations run
fn stop_after(ticks: u32) -> impl FnMut() -> bool {
    let mut seen = 0;
    move || {
        seen += 1;
        seen > ticks
    }
}

#[test]
fn scans_follow_the_configured_interval() {
    let w = watcher();
    let mut cfg = config(&["sale"], "noted");
    cfg.scan_interval = 0.05;

    let mut monitor = Monitor::new(FakeClock::new()).with_tick(Duration::from_millis(10));
    let report = monitor.run(&w, &cfg, &mut stop_after(20), |_| {});

    // t = 0, 50, 100, 150 ms
    assert_eq!(report.scans, 4);
    assert_eq!(report.runtime, Duration::from_millis(200));
}

#[test]
fn start_resets_session_and_stop_ends_it() {
    let w = watcher();
    let mut cfg = config(&["sale"], "noted");
    cfg.scan_interval = 0.001;

    let mut monitor = Monitor::new(FakeClock::new());
    assert_eq!(monitor.state(), MonitorState::Idle);

    w.recognizer().push("Flash sale now");
    let first = monitor.run(&w, &cfg, &mut stop_after(3), |_| {});
    assert_eq!(monitor.state(), MonitorState::Stopped);
    assert_eq!(first.scans, 3);
    assert_eq!(first.detected, 1);
    assert_eq!(first.sent, 1);

    // A fresh start discards the first frame again and re-arms the trigger
    w.recognizer().push("Flash sale now");
    let second = monitor.run(&w, &cfg, &mut stop_after(3), |_| {});
    assert_eq!(second.detected, 1);
    assert_eq!(second.sent, 1);
    assert_eq!(w.notifier().messages(), vec!["noted", "noted"]);
}

#[test]
fn immediate_stop_performs_no_scan() {
    let w = watcher();
    let cfg = config(&["sale"], "noted");

    let mut monitor = Monitor::new(FakeClock::default());
    let report = monitor.run(&w, &cfg, &mut || true, |_| {});

    assert_eq!(report.scans, 0);
    assert!(w.capture().regions.borrow().is_empty());
    assert_eq!(monitor.state(), MonitorState::Stopped);
}

#[test]
fn status_is_reported_every_tick() {
    let w = watcher();
    let mut cfg = config(&["sale"], "noted");
    cfg.scan_interval = 1.0;

    let mut statuses: Vec<SessionStatus> = Vec::new();
    let mut monitor = Monitor::new(FakeClock::new()).with_tick(Duration::from_millis(10));
    monitor.run(&w, &cfg, &mut stop_after(5), |s| statuses.push(*s));

    assert_eq!(statuses.len(), 5);
    assert!(statuses.windows(2).all(|p| p[0].runtime < p[1].runtime));
    assert!(statuses.iter().all(|s| s.scans == 1));
}

#[test]
fn report_converts_to_history_record() {
    let w = watcher();
    let mut cfg = config(&["sale"], "noted");
    cfg.scan_interval = 0.001;

    w.recognizer().push("Flash sale now");
    let mut monitor = Monitor::new(FakeClock::new());
    let report = monitor.run(&w, &cfg, &mut stop_after(2), |_| {});

    let record = report.to_record();
    assert_eq!(record.messages_detected, 1);
    assert_eq!(record.messages_sent, 1);
    assert!(record.ended_at >= record.started_at);
}
