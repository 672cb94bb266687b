//! Critically damped smoothing ("smooth-damp")
//!
//! Spring-damper toward a moving target using the rational approximation of
//! `exp(-omega * dt)` from Game Programming Gems 4, ch. 1.10. The velocity is
//! owned by the caller and carried across frames, which makes convergence
//! independent of the frame rate. There is no speed limit.
//!
//! A `dt` of zero (or less) reports no progress: the current value is
//! returned and the velocity is left untouched.

use crate::scalar::delta_angle;
use crate::vec3::Vec3;

/// Smallest accepted smoothing time, keeps `omega` finite
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Returns `(omega, decay)` for one step
#[inline]
fn damping(smooth_time: f32, dt: f32) -> (f32, f32) {
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    (omega, decay)
}

/// Smooth `current` toward `target` over roughly `smooth_time` seconds
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let (omega, decay) = damping(smooth_time, dt);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    // Snap instead of overshooting
    if (target - current) * (output - target) > 0.0 {
        *velocity = 0.0;
        return target;
    }
    output
}

/// [`smooth_damp`] for angles in degrees, taking the shortest way around
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// [`smooth_damp`] applied to a whole vector with a shared overshoot test
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }
    let (omega, decay) = damping(smooth_time, dt);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * decay;
    let output = target + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec3::ZERO;
        return target;
    }
    output
}
