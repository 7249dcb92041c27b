/// Add one step of acceleration plus jitter to a velocity component.
///
/// Computed wide; the result is only narrowed after the cap is applied.
#[inline(always)]
pub fn accelerate(v: i16, accel: i32, jitter: i32) -> i32 {
    v as i32 + accel + jitter
}

/// Limit the 2-D speed to `cap`, keeping the heading.
///
/// Components are scaled by `cap / speed` and truncated toward zero, so the
/// capped speed never exceeds `cap`.
pub fn cap_velocity(vx: i32, vy: i32, cap: i32) -> (i16, i16) {
    let cap = cap.max(0) as i64;
    let (wx, wy) = (vx as i64, vy as i64);
    let speed_sq = wx * wx + wy * wy;

    if speed_sq <= cap * cap {
        return (saturate(wx), saturate(wy));
    }

    let speed = (speed_sq as f64).sqrt();
    let sx = (wx * cap) as f64 / speed;
    let sy = (wy * cap) as f64 / speed;
    (saturate(sx as i64), saturate(sy as i64))
}

#[inline(always)]
fn saturate(v: i64) -> i16 {
    v.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}
