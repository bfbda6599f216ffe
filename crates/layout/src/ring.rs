//! Ring, segment and pointer descriptors handed to the renderer.

use serde::Serialize;

use crate::angle::{normalize_degrees, polar_to_xy, upright_text_rotation};
use crate::palette::ColorPair;

/// The six concentric rings, listed from the outside in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RingKind {
    Day,
    Strand,
    Month,
    Magic,
    Season,
    Year,
}

impl RingKind {
    /// All rings, outermost first.
    pub const ALL: [RingKind; 6] = [
        Self::Day,
        Self::Strand,
        Self::Month,
        Self::Magic,
        Self::Season,
        Self::Year,
    ];

    /// Returns the ring's position counting inwards from the outermost ring.
    pub fn position(self) -> usize {
        self as usize
    }

    /// Returns the lowercase key used in configuration and output.
    pub fn key(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Strand => "strand",
            Self::Month => "month",
            Self::Magic => "magic",
            Self::Season => "season",
            Self::Year => "year",
        }
    }
}

impl std::fmt::Display for RingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// How a segment cell is filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fill {
    /// Outline only.
    None,
    /// Single colour.
    Solid { color: String },
    /// Two-stop gradient running across the cell.
    Gradient { outer: String, inner: String },
}

impl From<&ColorPair> for Fill {
    fn from(pair: &ColorPair) -> Self {
        Fill::Gradient {
            outer: pair.outer.clone(),
            inner: pair.inner.clone(),
        }
    }
}

/// Label and identity of one slot, before angles are assigned.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SlotContent {
    pub value: Option<u64>,
    pub label: String,
    pub fill: Fill,
    pub leap_day: bool,
}

impl SlotContent {
    pub(crate) fn plain(value: Option<u64>, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            fill: Fill::None,
            leap_day: false,
        }
    }

    pub(crate) fn filled(value: u64, label: impl Into<String>, fill: Fill) -> Self {
        Self {
            value: Some(value),
            label: label.into(),
            fill,
            leap_day: false,
        }
    }
}

/// One annular cell of a ring.
///
/// Angles are in the ring's own frame (before [`Ring::rotation`] is applied)
/// and `end_angle - start_angle` always equals the ring's step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Numeric identity: day of month, 1-based strand number, 1-based month
    /// number, cycle index for magic phases and seasons, or the year.
    /// `None` for slots that name nothing, such as years before the epoch.
    pub value: Option<u64>,
    pub label: String,
    pub fill: Fill,
    /// `true` only for the segment under the pointer.
    pub focused: bool,
    /// `true` for the leap day of a leap year.
    pub leap_day: bool,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Label rotation in the ring's frame; see
    /// [`upright_text_rotation`](crate::upright_text_rotation).
    pub text_rotation: f64,
}

impl Segment {
    /// Returns the four corners of the cell as `(x, y)` pairs: outer start,
    /// outer end, inner end, inner start.
    pub fn outline(&self, outer_radius: f64, inner_radius: f64) -> [(f64, f64); 4] {
        [
            polar_to_xy(outer_radius, self.start_angle),
            polar_to_xy(outer_radius, self.end_angle),
            polar_to_xy(inner_radius, self.end_angle),
            polar_to_xy(inner_radius, self.start_angle),
        ]
    }
}

/// Layout of one ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    pub kind: RingKind,
    /// Outer radius.
    pub radius: f64,
    pub thickness: f64,
    /// Angular width of every segment.
    pub step: f64,
    pub segments: Vec<Segment>,
    /// Index into `segments` of the focused segment.
    pub current_index: usize,
    /// Rotation the renderer applies to the whole ring.
    pub rotation: f64,
}

impl Ring {
    /// Lays out a ring showing every value of its cycle.
    ///
    /// Segment `i` sits at `pointer_angle + i * step` and the ring is turned
    /// by `-current * step` so the current value lands under the pointer.
    pub(crate) fn full_cycle(
        kind: RingKind,
        radius: f64,
        thickness: f64,
        slots: Vec<SlotContent>,
        current: usize,
        pointer_angle: f64,
    ) -> Self {
        let step = if slots.is_empty() {
            0.0
        } else {
            360.0 / slots.len() as f64
        };
        let rotation = -(current as f64) * step;
        let segments = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                let mid = normalize_degrees(pointer_angle + i as f64 * step);
                build_segment(slot, i == current, mid, step, rotation)
            })
            .collect();
        Self {
            kind,
            radius,
            thickness,
            step,
            segments,
            current_index: current,
            rotation,
        }
    }

    /// Lays out a ring showing a window of its cycle.
    ///
    /// The ring is not turned; the window content slides instead. Slot `k`
    /// sits at `pointer_angle + (k - width / 2) * step`, so the middle slot
    /// is under the pointer.
    pub(crate) fn windowed(
        kind: RingKind,
        radius: f64,
        thickness: f64,
        slots: Vec<SlotContent>,
        step: f64,
        pointer_angle: f64,
    ) -> Self {
        let current = slots.len() / 2;
        let segments = slots
            .into_iter()
            .enumerate()
            .map(|(k, slot)| {
                let offset = k as f64 - current as f64;
                let mid = normalize_degrees(pointer_angle + offset * step);
                build_segment(slot, k == current, mid, step, 0.0)
            })
            .collect();
        Self {
            kind,
            radius,
            thickness,
            step,
            segments,
            current_index: current,
            rotation: 0.0,
        }
    }

    /// Returns the focused segment.
    pub fn current(&self) -> Option<&Segment> {
        self.segments.get(self.current_index)
    }

    /// Returns the radius of the ring's centre line.
    pub fn mid_radius(&self) -> f64 {
        self.radius - self.thickness / 2.0
    }
}

fn build_segment(slot: SlotContent, focused: bool, mid: f64, step: f64, rotation: f64) -> Segment {
    let screen_mid = normalize_degrees(mid + rotation);
    Segment {
        value: slot.value,
        label: slot.label,
        fill: slot.fill,
        focused,
        leap_day: slot.leap_day,
        start_angle: mid - step / 2.0,
        end_angle: mid + step / 2.0,
        mid_angle: mid,
        text_rotation: upright_text_rotation(screen_mid, rotation),
    }
}

/// The fixed triangular marker over one ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pointer {
    pub ring: RingKind,
    pub angle: f64,
    /// Distance of the marker centre from the dial centre.
    pub radius: f64,
    /// Half-width of the triangle.
    pub size: f64,
}

impl Pointer {
    /// Returns the triangle's vertices: the tip (pointing away from the dial
    /// centre) followed by the two base corners.
    pub fn triangle(&self) -> [(f64, f64); 3] {
        let tip = polar_to_xy(self.radius + self.size, self.angle);
        let (bx, by) = polar_to_xy(self.radius - self.size, self.angle);
        let (px, py) = polar_to_xy(self.size, self.angle + 90.0);
        [tip, (bx - px, by - py), (bx + px, by + py)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn slots(n: usize) -> Vec<SlotContent> {
        (0..n)
            .map(|i| SlotContent::plain(Some(i as u64), i.to_string()))
            .collect()
    }

    #[test]
    fn full_cycle_rotation_formula() {
        let ring = Ring::full_cycle(RingKind::Month, 100.0, 20.0, slots(12), 5, 270.0);
        assert_abs_diff_eq!(ring.step, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring.rotation, -150.0, epsilon = 1e-9);
        assert_eq!(ring.current_index, 5);
        assert!(ring.segments[5].focused);
        assert_eq!(ring.segments.iter().filter(|s| s.focused).count(), 1);
        // After rotation the current segment sits under the pointer.
        let on_screen = normalize_degrees(ring.segments[5].mid_angle + ring.rotation);
        assert_abs_diff_eq!(on_screen, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn segment_spans_are_one_step() {
        let ring = Ring::full_cycle(RingKind::Season, 100.0, 20.0, slots(4), 0, 270.0);
        for seg in &ring.segments {
            assert_abs_diff_eq!(seg.end_angle - seg.start_angle, 90.0, epsilon = 1e-9);
            assert_abs_diff_eq!(
                (seg.start_angle + seg.end_angle) / 2.0,
                seg.mid_angle,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn focused_label_is_level() {
        for current in 0..12 {
            let ring = Ring::full_cycle(RingKind::Month, 100.0, 20.0, slots(12), current, 270.0);
            let seg = ring.current().unwrap();
            let rendered = normalize_degrees(seg.text_rotation + ring.rotation);
            assert_abs_diff_eq!(rendered, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn windowed_ring_centres_middle_slot() {
        let ring = Ring::windowed(RingKind::Strand, 100.0, 20.0, slots(15), 12.0, 270.0);
        assert_eq!(ring.current_index, 7);
        assert_abs_diff_eq!(ring.rotation, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring.segments[7].mid_angle, 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring.segments[0].mid_angle, 270.0 - 84.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring.segments[14].mid_angle, normalize_degrees(270.0 + 84.0), epsilon = 1e-9);
    }

    #[test]
    fn empty_ring_has_zero_step() {
        let ring = Ring::full_cycle(RingKind::Day, 100.0, 20.0, Vec::new(), 0, 270.0);
        assert!(ring.segments.is_empty());
        assert!(ring.current().is_none());
    }

    #[test]
    fn pointer_triangle_at_top() {
        let pointer = Pointer {
            ring: RingKind::Day,
            angle: 270.0,
            radius: 100.0,
            size: 4.0,
        };
        let [tip, left, right] = pointer.triangle();
        assert_abs_diff_eq!(tip.0, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tip.1, -104.0, epsilon = 1e-9);
        assert_abs_diff_eq!(left.1, -96.0, epsilon = 1e-9);
        assert_abs_diff_eq!(right.1, -96.0, epsilon = 1e-9);
        assert_abs_diff_eq!((left.0 - right.0).abs(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn outline_corners_lie_on_radii() {
        let ring = Ring::full_cycle(RingKind::Month, 100.0, 20.0, slots(12), 0, 270.0);
        for (x, y) in ring.segments[3].outline(100.0, 80.0) {
            let r = (x * x + y * y).sqrt();
            assert!((r - 100.0).abs() < 1e-9 || (r - 80.0).abs() < 1e-9);
        }
    }

    #[test]
    fn ring_kind_keys() {
        let keys: Vec<_> = RingKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["day", "strand", "month", "magic", "season", "year"]);
        assert_eq!(RingKind::Year.position(), 5);
    }
}
