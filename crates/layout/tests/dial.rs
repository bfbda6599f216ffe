use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use strandwheel_calendar::{Strand, compose, decompose};
use strandwheel_layout::{
    DialState, Fill, LayoutConfig, RingKind, cyclic_window, layout_dial, normalize_degrees,
    strand_ring,
};
use strandwheel_strands::{NO_STRAND, StrandDirectory};

fn directory() -> StrandDirectory {
    StrandDirectory::from_json_str(
        r##"{
            "1": {"Name": "Ember", "outer_color": "#a00", "inner_color": "#f88"},
            "2": {"Name": "Secret", "Hidden": "YES"},
            "96": {"Name": "Tide"}
        }"##,
    )
    .unwrap()
}

#[test]
fn strand_window_centres_on_current_strand() {
    let dir = StrandDirectory::new();
    let cfg = LayoutConfig::new();
    for week in 0..96u64 {
        let date = decompose(week * 7);
        let ring = strand_ring(&date, &dir, &cfg);
        assert_eq!(ring.segments.len(), 15);
        let focused = ring.current().unwrap();
        assert!(focused.focused);
        assert_eq!(focused.value, Some(u64::from(date.strand().index() as u16 + 1)));

        let ids: HashSet<_> = ring.segments.iter().map(|s| s.value.unwrap()).collect();
        assert_eq!(ids.len(), 15, "duplicate strand ids in window at week {week}");
        assert!(ids.iter().all(|&id| (1..=96).contains(&id)));
    }
}

#[test]
fn cyclic_window_slots_distinct_mod_96() {
    for center in 0..96 {
        let slots = cyclic_window(center, 15, 96);
        assert_eq!(slots[7], center);
        let unique: HashSet<_> = slots.iter().collect();
        assert_eq!(unique.len(), 15);
    }
}

#[test]
fn strand_labels_and_fills_come_from_directory() {
    let dir = directory();
    let ring = strand_ring(&decompose(0), &dir, &LayoutConfig::new());
    let current = ring.current().unwrap();
    assert_eq!(current.label, "Ember");
    assert_eq!(
        current.fill,
        Fill::Gradient {
            outer: "#a00".to_string(),
            inner: "#f88".to_string(),
        }
    );
    // Neighbours: strand 96 before, strand 2 (hidden) after.
    assert_eq!(ring.segments[6].label, "Tide");
    assert_eq!(ring.segments[6].fill, Fill::None);
    assert_eq!(ring.segments[8].label, NO_STRAND);
    assert_eq!(ring.segments[9].label, NO_STRAND);
}

#[test]
fn bounded_rings_rotate_current_under_pointer() {
    let cfg = LayoutConfig::new();
    let dir = StrandDirectory::new();
    for abs in [0u64, 59, 200, 366, 1_000, 5_432] {
        let date = decompose(abs);
        let dial = layout_dial(&DialState::new(date, 0), &dir, &cfg).unwrap();

        let checks = [
            (RingKind::Month, usize::from(date.month()), 12),
            (RingKind::Season, date.season().index(), 4),
            (RingKind::Magic, date.magic_phase().index(), 3),
            (RingKind::Day, usize::from(date.day() - 1), usize::from(date.days_in_month())),
        ];
        for (kind, current, count) in checks {
            let ring = dial.ring(kind).unwrap();
            assert_eq!(ring.segments.len(), count, "{kind} at {abs}");
            assert_eq!(ring.current_index, current, "{kind} at {abs}");
            assert_abs_diff_eq!(
                ring.rotation,
                -(current as f64) * 360.0 / count as f64,
                epsilon = 1e-9
            );
            let mid = ring.current().unwrap().mid_angle;
            assert_abs_diff_eq!(
                normalize_degrees(mid + ring.rotation),
                270.0,
                epsilon = 1e-6
            );
            assert_eq!(ring.segments.iter().filter(|s| s.focused).count(), 1);
        }
    }
}

#[test]
fn labels_render_upright_whatever_the_rotation() {
    let cfg = LayoutConfig::new();
    let dir = StrandDirectory::new();
    for abs in (0..800u64).step_by(37) {
        let dial = layout_dial(&DialState::new(decompose(abs), 0), &dir, &cfg).unwrap();
        for ring in &dial.rings {
            for seg in &ring.segments {
                let rendered = normalize_degrees(seg.text_rotation + ring.rotation);
                // Upright labels never point between 90° and 270°.
                assert!(
                    !(rendered > 90.0 + 1e-6 && rendered < 270.0 - 1e-6),
                    "{} label {:?} renders at {rendered}",
                    ring.kind,
                    seg.label
                );
            }
        }
    }
}

#[test]
fn windowed_rings_do_not_rotate() {
    let cfg = LayoutConfig::new();
    let dir = StrandDirectory::new();
    let dial = layout_dial(&DialState::new(decompose(9_999), 3), &dir, &cfg).unwrap();
    for kind in [RingKind::Strand, RingKind::Year] {
        let ring = dial.ring(kind).unwrap();
        assert_abs_diff_eq!(ring.rotation, 0.0, epsilon = f64::EPSILON);
        assert_abs_diff_eq!(ring.current().unwrap().mid_angle, 270.0, epsilon = 1e-9);
    }
    let year = dial.ring(RingKind::Year).unwrap();
    assert_eq!(year.segments.len(), 7);
    assert_eq!(year.current().unwrap().value, Some(decompose(9_999).year()));
}

#[test]
fn hub_and_pointers() {
    let mut state = DialState::new(decompose(0), 7);
    assert_abs_diff_eq!(state.hub_rotation, 105.0, epsilon = f64::EPSILON);
    state.hub_rotation = 465.0;
    let dial = layout_dial(&state, &StrandDirectory::new(), &LayoutConfig::new()).unwrap();
    assert_eq!(dial.hub.hour, 7);
    assert_eq!(dial.hub.time_label, "07:00");
    assert_abs_diff_eq!(dial.hub.rotation, 465.0, epsilon = f64::EPSILON);
    assert_eq!(dial.pointers.len(), dial.rings.len());
    for (pointer, ring) in dial.pointers.iter().zip(&dial.rings) {
        assert_eq!(pointer.ring, ring.kind);
        assert!(pointer.radius < ring.radius && pointer.radius > ring.radius - ring.thickness);
    }
}

#[test]
fn strand_transition_crosses_cycle_boundary_the_short_way() {
    let cfg = LayoutConfig::new();
    let last_week = decompose(95 * 7);
    let first_week = decompose(96 * 7);
    assert_eq!(first_week.strand().number(), 1);

    let state = DialState {
        previous_strand: Some(last_week.strand()),
        ..DialState::new(first_week, 0)
    };
    let dial = layout_dial(&state, &StrandDirectory::new(), &cfg).unwrap();
    assert_abs_diff_eq!(dial.strand_transition_start, 12.0, epsilon = 1e-9);

    let state = DialState {
        previous_strand: Some(Strand::from_number(49).unwrap()),
        ..DialState::new(first_week, 0)
    };
    let dial = layout_dial(&state, &StrandDirectory::new(), &cfg).unwrap();
    assert_abs_diff_eq!(dial.strand_transition_start, 48.0 * 12.0, epsilon = 1e-9);
}

#[test]
fn leap_day_appears_only_in_leap_years() {
    let cfg = LayoutConfig::new();
    let dir = StrandDirectory::new();
    let leap = decompose(compose(8, 2, 29).unwrap());
    let dial = layout_dial(&DialState::new(leap, 0), &dir, &cfg).unwrap();
    let day = dial.ring(RingKind::Day).unwrap();
    assert_eq!(day.segments.len(), 29);
    assert!(day.current().unwrap().leap_day);

    let common = decompose(compose(9, 2, 28).unwrap());
    let dial = layout_dial(&DialState::new(common, 0), &dir, &cfg).unwrap();
    let day = dial.ring(RingKind::Day).unwrap();
    assert_eq!(day.segments.len(), 28);
    assert!(day.segments.iter().all(|s| !s.leap_day));
}
