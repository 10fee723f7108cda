//! Basic vector math helper functions.
//! Small helpers for clamped stepping, lag-filter fractions, and planar
//! distances used by the motion controllers.
use glam::Vec3;

/// Steps `current` toward `target` by at most `max_step`, never overshooting.
///
/// A non-positive `max_step` leaves `current` unchanged. When the remaining
/// distance is within `max_step` the target is returned exactly, so repeated
/// calls converge without oscillation.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use strider::vector_math::step_towards;
/// let stepped = step_towards(Vec3::ZERO, Vec3::new(0.0, 0.0, 6.0), 7.0);
/// assert_eq!(stepped, Vec3::new(0.0, 0.0, 6.0));
/// let partial = step_towards(Vec3::ZERO, Vec3::new(0.0, 0.0, 6.0), 2.0);
/// assert!((partial.z - 2.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn step_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    if max_step <= 0.0 {
        return current;
    }
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_step {
        return target;
    }
    current + offset / distance * max_step
}

/// Returns the per-tick blend fraction for a first-order lag filter.
///
/// The fraction is `rate * delta_time` saturated to `[0, 1]`, so large
/// timesteps snap to the goal instead of overshooting past it.
///
/// # Examples
/// ```
/// use strider::vector_math::blend_fraction;
/// assert!((blend_fraction(10.0, 0.016) - 0.16).abs() < 1e-6);
/// assert_eq!(blend_fraction(10.0, 0.5), 1.0);
/// ```
#[must_use]
pub fn blend_fraction(rate: f32, delta_time: f32) -> f32 {
    (rate * delta_time).clamp(0.0, 1.0)
}

/// Returns the distance between two points projected onto a fixed-Y plane.
///
/// Both points are flattened to `plane_y` before measuring, so vertical
/// drift of either point never affects the result.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use strider::vector_math::planar_distance;
/// let a = Vec3::new(0.0, 0.0, 0.0);
/// let b = Vec3::new(3.0, 9.0, 4.0);
/// assert!((planar_distance(a, b, 0.0) - 5.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn planar_distance(a: Vec3, b: Vec3, plane_y: f32) -> f32 {
    let flat_a = Vec3::new(a.x, plane_y, a.z);
    let flat_b = Vec3::new(b.x, plane_y, b.z);
    flat_a.distance(flat_b)
}
