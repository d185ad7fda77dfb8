use {
    base::Vec2,
    posture::{CalibrationTracker, FaceObservation},
};

fn face() -> FaceObservation {
    FaceObservation::new(Vec2::new(0.5, 0.4), 0.1)
}

#[test]
fn test_converges_on_nth_observation() {
    let mut tracker = CalibrationTracker::new(30);
    for _ in 0..29 {
        tracker.observe(&face());
        assert!(!tracker.is_calibrated());
    }
    tracker.observe(&face());
    assert!(tracker.is_calibrated());

    let baseline = tracker.baseline();
    assert!(baseline.is_calibrated);
    assert!((baseline.center.x - 0.5).abs() < 1e-5);
    assert!((baseline.center.y - 0.4).abs() < 1e-5);
    assert!((baseline.size - 0.1).abs() < 1e-5);
}

#[test]
fn test_ignores_missing_faces() {
    let mut tracker = CalibrationTracker::new(3);
    tracker.observe(&face());
    for _ in 0..10 {
        tracker.observe(&FaceObservation::missing());
    }
    assert!(!tracker.is_calibrated());
    assert!((tracker.progress() - 1.0 / 3.0).abs() < 1e-6);
    tracker.observe(&face());
    tracker.observe(&face());
    assert!(tracker.is_calibrated());
}

#[test]
fn test_baseline_is_mean() {
    let mut tracker = CalibrationTracker::new(2);
    tracker.observe(&FaceObservation::new(Vec2::new(0.2, 0.2), 0.1));
    tracker.observe(&FaceObservation::new(Vec2::new(0.4, 0.6), 0.3));
    let baseline = tracker.baseline();
    assert!((baseline.center.x - 0.3).abs() < 1e-6);
    assert!((baseline.center.y - 0.4).abs() < 1e-6);
    assert!((baseline.size - 0.2).abs() < 1e-6);
}

#[test]
fn test_frozen_once_calibrated() {
    let mut tracker = CalibrationTracker::new(1);
    tracker.observe(&face());
    tracker.observe(&FaceObservation::new(Vec2::new(0.9, 0.9), 0.4));
    assert!((tracker.baseline().center.x - 0.5).abs() < 1e-6);
}

#[test]
fn test_reset_discards_baseline() {
    let mut tracker = CalibrationTracker::new(2);
    tracker.observe(&face());
    tracker.observe(&face());
    assert!(tracker.is_calibrated());

    tracker.reset();
    assert!(!tracker.is_calibrated());
    assert_eq!(tracker.progress(), 0.0);
    assert!(!tracker.baseline().is_calibrated);

    let moved = FaceObservation::new(Vec2::new(0.3, 0.3), 0.2);
    tracker.observe(&moved);
    tracker.observe(&moved);
    assert!(tracker.is_calibrated());
    assert!((tracker.baseline().center.x - 0.3).abs() < 1e-6);
}
