//! Scalar helpers shared by the controller and smoothing code

/// Tolerant float comparison
///
/// Relative tolerance of 1e-6 scaled by the larger magnitude, with an absolute
/// floor of a few ULPs around 1.0 so that tiny input jitter compares equal to zero.
#[inline]
pub fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}

/// Loop `t` into the range `[0, length]`
#[inline]
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Shortest signed difference from `current` to `target`, in degrees
///
/// Result lies in `(-180, 180]`.
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}
