use objexclude_core::{thread_safe, Position, ThreadSafe};
use objexclude_filter::{ExcludeObjectTransform, JobState, MoveTransform};

/// Pipeline stage that records every move it receives.
struct Recorder {
    position: Position,
    log: ThreadSafe<Vec<(Position, f64)>>,
}

impl Recorder {
    fn new(log: ThreadSafe<Vec<(Position, f64)>>) -> Self {
        Self {
            position: Position::origin(),
            log,
        }
    }
}

impl MoveTransform for Recorder {
    fn get_position(&mut self) -> Position {
        self.position
    }

    fn move_to(&mut self, target: Position, speed: f64) {
        self.position = target;
        self.log.lock().push((target, speed));
    }
}

fn build_filter() -> (
    ExcludeObjectTransform,
    ThreadSafe<JobState>,
    ThreadSafe<Vec<(Position, f64)>>,
) {
    let log = thread_safe(Vec::new());
    let state = thread_safe(JobState::new());
    let filter = ExcludeObjectTransform::install(state.clone(), Box::new(Recorder::new(log.clone())));
    (filter, state, log)
}

#[test]
fn test_passthrough_forwards_unchanged() {
    let (mut filter, state, log) = build_filter();
    state.lock().start_object("a");

    let p = Position::new(10.0, 10.0, 0.0, 5.0);
    filter.move_to(p, 1500.0);

    assert_eq!(log.lock().as_slice(), &[(p, 1500.0)]);
    let state = state.lock();
    assert_eq!(state.tracker.last_position, p);
    assert_eq!(state.tracker.last_extruded, p);
    assert!(!state.region.in_excluded_region);
}

#[test]
fn test_enter_suppresses_and_sets_sticky_flag() {
    let (mut filter, state, log) = build_filter();
    {
        let mut state = state.lock();
        state.start_object("a");
        state.exclude_object("a");
    }

    let p = Position::new(15.0, 15.0, 0.0, 6.0);
    filter.move_to(p, 1500.0);

    assert!(log.lock().is_empty());
    let state = state.lock();
    assert!(state.region.in_excluded_region);
    assert_eq!(state.tracker.last_position, p);
    assert_eq!(state.tracker.last_excluded, p);
}

#[test]
fn test_ignore_keeps_suppressing() {
    let (mut filter, state, log) = build_filter();
    {
        let mut state = state.lock();
        state.start_object("a");
        state.exclude_object("a");
    }

    filter.move_to(Position::new(15.0, 15.0, 0.0, 6.0), 1500.0);
    let p = Position::new(20.0, 20.0, 0.0, 7.0);
    filter.move_to(p, 1500.0);

    assert!(log.lock().is_empty());
    let state = state.lock();
    assert!(state.region.in_excluded_region);
    assert_eq!(state.tracker.last_position, p);
    assert_eq!(state.tracker.last_excluded, p);
}

/// The four-move walkthrough: print, cancel, skip, resume.
#[test]
fn test_exit_reconciles_position_and_extrusion() {
    let (mut filter, state, log) = build_filter();

    state.lock().start_object("a");
    filter.move_to(Position::new(10.0, 10.0, 0.0, 5.0), 1500.0);

    state.lock().exclude_object("a");
    filter.move_to(Position::new(15.0, 15.0, 0.0, 6.0), 1500.0);
    filter.move_to(Position::new(20.0, 20.0, 0.0, 7.0), 1500.0);

    state.lock().end_object();
    filter.move_to(Position::new(20.0, 20.0, 0.0, 8.0), 1500.0);

    // X/Y snapped back to the last printed point, E collapsed: 8 - 7 + 5 = 6.
    let expected = Position::new(10.0, 10.0, 0.0, 6.0);
    assert_eq!(
        log.lock().as_slice(),
        &[(Position::new(10.0, 10.0, 0.0, 5.0), 1500.0), (expected, 1500.0)]
    );
    let state = state.lock();
    assert!(!state.region.in_excluded_region);
    assert_eq!(state.tracker.last_position, expected);
    assert_eq!(state.tracker.last_extruded, expected);
}

#[test]
fn test_exit_with_real_travel_keeps_target_xy() {
    let (mut filter, state, log) = build_filter();

    state.lock().start_object("a");
    filter.move_to(Position::new(10.0, 10.0, 0.0, 5.0), 1500.0);
    state.lock().exclude_object("a");
    filter.move_to(Position::new(20.0, 20.0, 0.0, 7.0), 1500.0);
    state.lock().end_object();

    // Target moved since the last recorded position: no snap, only the E rewrite.
    filter.move_to(Position::new(30.0, 5.0, 0.0, 8.0), 2400.0);

    let forwarded = log.lock().last().copied().unwrap();
    assert_eq!(forwarded, (Position::new(30.0, 5.0, 0.0, 6.0), 2400.0));
}

#[test]
fn test_last_position_updated_on_every_branch() {
    let (mut filter, state, _log) = build_filter();
    let targets = [
        Position::new(1.0, 1.0, 0.0, 1.0), // passthrough
        Position::new(2.0, 2.0, 0.0, 2.0), // enter
        Position::new(3.0, 3.0, 0.0, 3.0), // ignore
        Position::new(4.0, 4.0, 0.0, 4.0), // exit
    ];

    state.lock().start_object("a");
    filter.move_to(targets[0], 100.0);
    assert_eq!(state.lock().tracker.last_position, targets[0]);

    state.lock().exclude_object("a");
    filter.move_to(targets[1], 100.0);
    assert_eq!(state.lock().tracker.last_position, targets[1]);

    filter.move_to(targets[2], 100.0);
    assert_eq!(state.lock().tracker.last_position, targets[2]);

    // On exit the reconciled position is what gets recorded: X/Y differ from
    // the last recorded point so they stand, but E collapses to 4 - 3 + 1 = 2.
    state.lock().end_object();
    filter.move_to(targets[3], 100.0);
    assert_eq!(
        state.lock().tracker.last_position,
        Position::new(4.0, 4.0, 0.0, 2.0)
    );
}

#[test]
fn test_get_position_delegates_and_records() {
    let log = thread_safe(Vec::new());
    let mut inner = Recorder::new(log.clone());
    inner.position = Position::new(7.0, 8.0, 9.0, 1.0);

    let state = thread_safe(JobState::new());
    let mut filter = ExcludeObjectTransform::install(state.clone(), Box::new(inner));

    let pos = filter.get_position();
    assert_eq!(pos, Position::new(7.0, 8.0, 9.0, 1.0));
    assert_eq!(state.lock().tracker.last_position, pos);
}

#[test]
fn test_excluding_unknown_object_suppresses_its_moves() {
    let (mut filter, state, log) = build_filter();

    // Excluded before ever being defined or started.
    state.lock().exclude_object("ghost");
    state.lock().start_object("ghost");
    filter.move_to(Position::new(5.0, 5.0, 0.0, 1.0), 1500.0);

    assert!(log.lock().is_empty());
    assert!(state.lock().region.in_excluded_region);
}

#[test]
fn test_status_snapshot() {
    let (filter, state, _log) = build_filter();
    {
        let mut state = state.lock();
        state.start_object("tower");
        state.exclude_object("benchy");
    }

    let status = filter.status();
    assert_eq!(status.current_object, "TOWER");
    assert_eq!(status.excluded_objects, vec!["BENCHY".to_string()]);
    assert_eq!(status.objects.len(), 1);
    assert_eq!(status.objects[0].name, "TOWER");
}
