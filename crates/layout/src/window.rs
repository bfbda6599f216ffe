//! Sliding windows over cyclic and linear value ranges.
//!
//! A window has an odd width so that exactly one slot, the middle one, sits
//! under the pointer. Offsets run from `-(width / 2)` to `+(width / 2)`.

/// Returns the signed offsets of each slot in a window of `width` slots.
pub fn window_offsets(width: usize) -> impl Iterator<Item = i64> {
    let half = (width / 2) as i64;
    (0..width as i64).map(move |i| i - half)
}

/// Returns the cycle positions covered by a window centred on `center`.
///
/// Each slot maps to `(center + offset) mod cycle`, so the window wraps
/// across the cycle boundary.
pub fn cyclic_window(center: usize, width: usize, cycle: usize) -> Vec<usize> {
    if cycle == 0 {
        return Vec::new();
    }
    window_offsets(width)
        .map(|o| (center as i64 + o).rem_euclid(cycle as i64) as usize)
        .collect()
}

/// Returns the values covered by a window centred on `center` on an
/// unbounded non-negative axis.
///
/// Slots that would fall below zero are `None`.
pub fn linear_window(center: u64, width: usize) -> Vec<Option<u64>> {
    window_offsets(width)
        .map(|o| center.checked_add_signed(o))
        .collect()
}

/// Returns the day numbers covered by a window centred on `day` within a
/// month of `month_length` days.
///
/// Days wrap within the month, modulo its actual length, so a window wider
/// than a short month repeats days rather than inventing a 30th or 31st.
pub fn month_day_window(day: u8, month_length: u8, width: usize) -> Vec<u8> {
    if month_length == 0 {
        return Vec::new();
    }
    let length = i64::from(month_length);
    window_offsets(width)
        .map(|o| ((i64::from(day) - 1 + o).rem_euclid(length) + 1) as u8)
        .collect()
}
