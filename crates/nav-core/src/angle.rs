//! Angle arithmetic in degrees.
//!
//! Raw device headings can arrive negative or ≥ 360°; both helpers here are
//! total over finite input, so every other operation in the crate funnels
//! its output through one of them instead of assuming anything about its
//! inputs.

/// Wrap any angle into `[0, 360)`.
///
/// `-90 → 270`, `450 → 90`, `360 → 0`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Wrap any angle into `(-180, 180]`, the shortest signed rotation.
///
/// `190 → -170`, `-190 → 170`, `180 → 180`.
#[inline]
pub fn wrap_degrees_signed(angle: f64) -> f64 {
    let a = normalize_degrees(angle);
    if a > 180.0 { a - 360.0 } else { a }
}
