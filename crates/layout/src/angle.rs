//! Angle helpers.
//!
//! All angles are in degrees in screen orientation: 0° points along +x and
//! angles grow clockwise, matching an SVG `rotate()` transform. The top of
//! the dial is therefore 270°.

/// Wraps an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Returns the label rotation, in the ring's own frame, that keeps a label
/// upright on screen.
///
/// `screen_mid` is the segment's mid-angle after the ring rotation has been
/// applied. The label runs tangentially (mid-angle + 90°) and is flipped by
/// 180° when that would leave it upside down, i.e. strictly between 90° and
/// 270°. The ring's own rotation is then subtracted, so once the renderer
/// applies the ring transform the label ends up at the same orientation no
/// matter how far the ring has spun.
pub fn upright_text_rotation(screen_mid: f64, ring_rotation: f64) -> f64 {
    let mut orientation = normalize_degrees(screen_mid + 90.0);
    if orientation > 90.0 && orientation < 270.0 {
        orientation = normalize_degrees(orientation + 180.0);
    }
    normalize_degrees(orientation - ring_rotation)
}

/// Returns the signed step count from `previous` to `current` on a cycle of
/// length `cycle`, choosing the short way round.
///
/// The result lies in `(-cycle/2, cycle/2]`, so a move of exactly half the
/// cycle is reported as positive.
pub fn shortest_cycle_delta(current: usize, previous: usize, cycle: usize) -> i64 {
    if cycle == 0 {
        return 0;
    }
    let cycle = cycle as i64;
    let half = cycle / 2;
    let forward = (current as i64 - previous as i64).rem_euclid(cycle);
    if forward > half { forward - cycle } else { forward }
}

/// Converts polar coordinates around the dial centre to `(x, y)` screen
/// coordinates, with y growing downwards.
pub fn polar_to_xy(radius: f64, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (radius * rad.cos(), radius * rad.sin())
}
