use dsviz_playback_core::{
    OperationKind, OperationStep, PlaybackConfig, PlaybackError, PlaybackEvent, Sequencer,
};

fn abc_history() -> Vec<OperationStep> {
    ["A", "B", "C"]
        .into_iter()
        .map(|d| OperationStep::new(OperationKind::Insert).with_description(d))
        .collect()
}

fn step_indices(events: &[PlaybackEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            PlaybackEvent::StepChanged { step_index, .. } => Some(*step_index),
            _ => None,
        })
        .collect()
}

fn drive(seq: &mut Sequencer, ticks: usize, dt_ms: f32) -> Vec<PlaybackEvent> {
    let mut events = seq.drain_events();
    for _ in 0..ticks {
        seq.tick(dt_ms);
        events.extend(seq.drain_events());
    }
    events
}

/// it should emit A, B, C in order followed by exactly one completion
#[test]
fn plays_history_in_order_with_single_completion() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 10.0 });
    seq.set_operation_history(abc_history());
    seq.play();

    let events = drive(&mut seq, 10, 10.0);
    assert_eq!(step_indices(&events), vec![0, 1, 2]);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, PlaybackEvent::Completed))
            .count(),
        1
    );
    // Completion comes after the last step notification.
    assert!(matches!(events.last(), Some(PlaybackEvent::Completed)));

    assert!(!seq.is_playing());
    assert_eq!(seq.current_step_index(), 2);

    // Nothing further ever fires.
    assert!(drive(&mut seq, 10, 10.0).is_empty());
}

/// it should carry step payload and totals in every notification
#[test]
fn notifications_carry_step_payload() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 5.0 });
    seq.set_operation_history(abc_history());
    seq.play();

    match seq.drain_events().as_slice() {
        [PlaybackEvent::StepChanged {
            step_index,
            total_steps,
            step,
        }] => {
            assert_eq!(*step_index, 0);
            assert_eq!(*total_steps, 3);
            assert_eq!(step.description, "A");
        }
        other => panic!("unexpected events {other:?}"),
    }
}

/// it should never notify again after pause, even across long ticks
#[test]
fn pause_is_exact() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 10.0 });
    seq.set_operation_history(abc_history());
    seq.play();
    assert_eq!(step_indices(&seq.drain_events()), vec![0]);

    seq.pause();
    assert!(!seq.is_playing());
    assert!(drive(&mut seq, 100, 10.0).is_empty());
}

/// it should resume from the paused position, not from the start
#[test]
fn resume_continues_where_pause_left_off() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 10.0 });
    seq.set_operation_history(abc_history());
    seq.play();
    seq.drain_events();
    seq.pause();

    seq.resume();
    let events = drive(&mut seq, 10, 10.0);
    assert_eq!(step_indices(&events), vec![1, 2]);
}

/// it should wrap to the first step when played again after completing
#[test]
fn play_after_completion_wraps_to_start() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 10.0 });
    seq.set_operation_history(abc_history());
    seq.play();
    drive(&mut seq, 10, 10.0);

    seq.play();
    match seq.drain_events().as_slice() {
        [PlaybackEvent::StepChanged { step_index, .. }] => assert_eq!(*step_index, 0),
        other => panic!("unexpected events {other:?}"),
    }
}

/// it should reset the index on stop but keep the history
#[test]
fn stop_resets_index() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 10.0 });
    seq.set_operation_history(abc_history());
    seq.jump_to_step(2);
    seq.drain_events();

    seq.stop();
    assert_eq!(seq.current_step_index(), 0);
    assert_eq!(seq.total_steps(), 3);
    assert!(seq.drain_events().is_empty());
}

/// it should notify synchronously on an in-range jump and ignore the rest
#[test]
fn jump_bounds_are_enforced_silently() {
    let mut seq = Sequencer::default();
    seq.set_operation_history(abc_history());

    seq.jump_to_step(1);
    assert_eq!(step_indices(&seq.drain_events()), vec![1]);
    assert_eq!(seq.current_step_index(), 1);

    seq.jump_to_step(3);
    assert!(seq.drain_events().is_empty());
    assert_eq!(seq.current_step_index(), 1);
}

/// it should step forward and back with silent boundary no-ops
#[test]
fn manual_stepping_respects_boundaries() {
    let mut seq = Sequencer::default();
    seq.set_operation_history(abc_history());

    seq.previous_step();
    assert!(seq.drain_events().is_empty());

    seq.next_step();
    seq.next_step();
    assert_eq!(step_indices(&seq.drain_events()), vec![1, 2]);

    seq.next_step();
    assert!(seq.drain_events().is_empty());
    assert_eq!(seq.current_step_index(), 2);

    seq.previous_step();
    assert_eq!(step_indices(&seq.drain_events()), vec![1]);
}

/// it should reject non-positive speeds and keep the pending advance as is
#[test]
fn speed_validation_and_future_only_rescheduling() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 100.0 });
    seq.set_operation_history(abc_history());

    assert_eq!(
        seq.set_speed(0.0),
        Err(PlaybackError::InvalidSpeed { speed_ms: 0.0 })
    );
    assert!(seq.set_speed(-5.0).is_err());
    assert!(seq.set_speed(f32::NAN).is_err());
    assert_eq!(seq.speed_ms(), 100.0);

    seq.play();
    seq.drain_events();

    // Slowing down must not stretch the advance already scheduled at 100ms.
    seq.set_speed(10_000.0).unwrap();
    let events = drive(&mut seq, 1, 100.0);
    assert_eq!(step_indices(&events), vec![1]);
}

/// it should replace history atomically and silence stale advances
#[test]
fn set_history_cancels_inflight_advance() {
    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 10.0 });
    seq.set_operation_history(abc_history());
    seq.play();
    seq.drain_events();

    seq.set_operation_history(vec![OperationStep::default().with_description("fresh")]);
    assert!(!seq.is_playing());
    assert_eq!(seq.current_step_index(), 0);
    assert!(drive(&mut seq, 50, 10.0).is_empty());
}

/// it should replay a recorded backend history fixture end to end
#[test]
fn fixture_history_replays_completely() {
    let steps: Vec<OperationStep> = dsviz_test_fixtures::load_history("bst_insert").unwrap();
    let total = steps.len();
    assert!(total > 0);

    let mut seq = Sequencer::new(PlaybackConfig { speed_ms: 1.0 });
    seq.set_operation_history(steps);
    seq.play();

    let events = drive(&mut seq, total + 1, 1.0);
    assert_eq!(step_indices(&events), (0..total).collect::<Vec<_>>());
    assert!(matches!(events.last(), Some(PlaybackEvent::Completed)));
}
