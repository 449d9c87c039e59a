use glam::Vec2;
use std::f32::consts::TAU;

/// Exponential approach of `current` toward `target` with time constant
/// `tau_sec`. Frame-rate independent; a non-positive `tau_sec` snaps.
#[inline]
pub fn smooth_toward(current: Vec2, target: Vec2, dt_sec: f32, tau_sec: f32) -> Vec2 {
    if !current.is_finite() || tau_sec <= 0.0 {
        return target;
    }
    let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
    let alpha = 1.0 - (-dt / tau_sec).exp();
    current.lerp(target, alpha)
}

/// Idle vertical bob: a sine of `period_sec`, shifted by `phase` in turns.
#[inline]
pub fn float_bob(t_sec: f32, amplitude: f32, period_sec: f32, phase: f32) -> f32 {
    if period_sec <= 0.0 || !t_sec.is_finite() {
        return 0.0;
    }
    amplitude * ((t_sec / period_sec + phase) * TAU).sin()
}
