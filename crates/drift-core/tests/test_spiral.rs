use std::collections::HashSet;

use drift_core::track::spiral::SpiralScan;
use drift_core::track::Shift;

#[test]
fn test_origin_comes_first() {
    let first = SpiralScan::new(8, 8).next().unwrap();
    assert_eq!(first, Shift::new(0, 0));

    let first = SpiralScan::new(1, 1).next().unwrap();
    assert_eq!(first, Shift::new(0, 0));
}

#[test]
fn test_rings_are_visited_in_order() {
    let radii: Vec<i32> = SpiralScan::new(8, 8).map(|s| s.radius()).collect();
    for pair in radii.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "ring {} visited after ring {}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn test_square_window_is_covered_exactly_once() {
    let shifts: Vec<Shift> = SpiralScan::new(8, 6).collect();
    assert_eq!(shifts.len(), 8 * 6);

    let unique: HashSet<(i32, i32)> = shifts.iter().map(|s| (s.dx, s.dy)).collect();
    assert_eq!(unique.len(), shifts.len(), "no shift may repeat");

    for dx in -4..4 {
        for dy in -3..3 {
            assert!(unique.contains(&(dx, dy)), "missing shift ({dx}, {dy})");
        }
    }
}

#[test]
fn test_narrow_window_is_covered() {
    // Far taller than wide: the walk has to skip most of the outer rings.
    let shifts: Vec<Shift> = SpiralScan::new(2, 10).collect();
    assert_eq!(shifts.len(), 2 * 10);

    let unique: HashSet<(i32, i32)> = shifts.iter().map(|s| (s.dx, s.dy)).collect();
    for dx in -1..1 {
        for dy in -5..5 {
            assert!(unique.contains(&(dx, dy)), "missing shift ({dx}, {dy})");
        }
    }

    let radii: Vec<i32> = shifts.iter().map(|s| s.radius()).collect();
    for pair in radii.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_odd_window_dimensions() {
    let shifts: Vec<Shift> = SpiralScan::new(5, 3).collect();
    assert_eq!(shifts.len(), 5 * 3);

    let unique: HashSet<(i32, i32)> = shifts.iter().map(|s| (s.dx, s.dy)).collect();
    for dx in -2..3 {
        for dy in -1..2 {
            assert!(unique.contains(&(dx, dy)), "missing shift ({dx}, {dy})");
        }
    }
}

#[test]
fn test_empty_window_yields_nothing() {
    assert_eq!(SpiralScan::new(0, 8).count(), 0);
    assert_eq!(SpiralScan::new(8, 0).count(), 0);
    assert_eq!(SpiralScan::new(0, 0).count(), 0);
}
