use super::*;
use crate::animation::ops::{create, parallel, sequence, stagger, wait};
use crate::scene::primitive::PrimitiveKey;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn sequential_children_start_back_to_back() {
    let s = sequence(vec![wait(0.25), wait(1.0), wait(0.25)]).schedule();
    let starts: Vec<f64> = s.entries.iter().map(|e| e.start).collect();
    assert_eq!(starts, vec![0.0, 0.25, 1.25]);
    assert_eq!(s.duration, 1.5);
}

#[test]
fn staggered_children_start_at_lag_multiples() {
    let s = stagger(vec![wait(1.0), wait(1.0), wait(1.0)], 0.5).schedule();
    let starts: Vec<f64> = s.entries.iter().map(|e| e.start).collect();
    assert_eq!(starts, vec![0.0, 0.5, 1.0]);
    assert!(approx(s.duration, 2.0));
}

#[test]
fn nested_schedule_matches_duration() {
    let d = sequence(vec![
        parallel(vec![
            create(PrimitiveKey::new("a"), 1.0),
            create(PrimitiveKey::new("b"), 2.0),
        ]),
        wait(0.5),
        stagger(vec![wait(1.0), wait(1.0)], 0.25),
    ]);
    let s = d.schedule();
    assert!(approx(s.duration, d.duration()));
    assert!(approx(s.duration, 3.75));
    // The wait follows the longest parallel child.
    assert!(approx(s.entries[2].start, 2.0));
}

#[test]
fn active_at_filters_by_time() {
    let s = sequence(vec![wait(1.0), wait(1.0)]).schedule();
    assert_eq!(s.active_at(0.5).count(), 1);
    assert_eq!(s.active_at(1.0).count(), 2);
    assert_eq!(s.active_at(5.0).count(), 0);
}

#[test]
fn progress_is_eased_and_clamped() {
    let s = create(PrimitiveKey::new("a"), 2.0).schedule();
    let e = &s.entries[0];
    assert_eq!(e.local_time(-1.0), 0.0);
    assert_eq!(e.local_time(1.0), 0.5);
    assert_eq!(e.local_time(9.0), 1.0);
    assert_eq!(e.progress(1.0), 0.5);
    assert!(e.progress(0.5) < 0.25);
}

#[test]
fn zero_length_effect_jumps() {
    let s = wait(0.0).schedule();
    let e = &s.entries[0];
    assert_eq!(e.local_time(-0.1), 0.0);
    assert_eq!(e.local_time(0.0), 1.0);
}
