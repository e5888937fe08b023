/*!
 * Engine Tests
 * Session-level behavior across both components
 */

use energy_scheduler::{Engine, EngineConfig, EngineError, SchedulerError};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

#[test]
fn test_components_are_independent() {
    let engine = Engine::default();
    engine.add_process(1, 2, 30).unwrap();
    engine.record_allocation(1, ["R1"], ["R2"]);
    engine.record_allocation(2, ["R2"], ["R1"]);

    assert!(engine.detect_deadlock().deadlocked);

    // Draining the queue does not touch the allocation tables
    assert_eq!(engine.schedule().pids(), vec![1]);
    assert!(engine.detect_deadlock().deadlocked);
}

#[test]
fn test_config_limits_apply() {
    let config = EngineConfig {
        max_queue_len: 2,
        allow_negative_energy: true,
        ..EngineConfig::default()
    };
    let engine = Engine::new(config);

    engine.add_process(1, 1, -10).unwrap();
    engine.add_process(2, 1, 10).unwrap();
    assert_eq!(
        engine.add_process(3, 1, 0),
        Err(EngineError::Scheduler(SchedulerError::QueueFull(2)))
    );

    let schedule = engine.schedule();
    assert_eq!(schedule.pids(), vec![1, 2]);
    assert_eq!(schedule.total_energy, 0);
}

#[test]
fn test_snapshot_tracks_session() {
    let engine = Engine::default();
    engine.add_process(1, 1, 5).unwrap();
    engine.add_process(2, 1, 6).unwrap();
    engine.record_allocation(7, ["R1"], ["R2"]);

    let before = engine.snapshot();
    assert_eq!(before.pending, 2);
    assert_eq!(before.recorded_processes, 1);
    assert_eq!(before.queue.pending, 2);

    engine.schedule();
    let after = engine.snapshot();
    assert_eq!(after.session_id, before.session_id);
    assert_eq!(after.pending, 0);
    assert_eq!(after.queue.energy_drained, 11);
}

#[test]
fn test_separate_sessions_do_not_share_state() {
    let first = Engine::default();
    let second = Engine::default();
    first.add_process(1, 1, 1).unwrap();

    assert_ne!(first.session_id(), second.session_id());
    assert!(second.schedule().is_empty());
    assert_eq!(first.schedule().len(), 1);
}

#[test]
fn test_concurrent_recording_and_detection() {
    let engine = Arc::new(Engine::default());

    let writers: Vec<_> = (0..8u32)
        .map(|pid| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let held = format!("R{}", pid);
                let wanted = format!("R{}", (pid + 1) % 8);
                engine.record_allocation(pid, [held], [wanted]);
                engine.detect_deadlock();
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    // Eight processes in a ring
    let report = engine.detect_deadlock();
    assert!(report.deadlocked);
    assert_eq!(report.cycle.len(), 16);
}
