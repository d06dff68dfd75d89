// Host-side tests for scroll progress and smoothing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod keyframes {
    include!("../src/core/keyframes.rs");
}
mod theme {
    include!("../src/core/theme.rs");
}
mod progress {
    include!("../src/core/progress.rs");
}

use progress::*;
use theme::SmoothingKind;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn scroll_progress_spans_container_height() {
    assert_eq!(scroll_progress(0.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(-500.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(-1000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_and_guards() {
    assert_eq!(scroll_progress(120.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(-4000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-10.0, 0.0), 0.0);
    assert_eq!(scroll_progress(-10.0, -5.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 1000.0), 0.0);
    assert_eq!(scroll_progress(-10.0, f64::NAN), 0.0);
}

#[test]
fn default_spring_does_not_overshoot() {
    assert!(SpringConfig::default().damping_ratio() >= 1.0);
}

#[test]
fn first_sample_seeds_the_spring() {
    let mut spring = Spring::new(SpringConfig::default());
    assert_eq!(spring.step(0.3, FRAME), 0.3);
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn spring_settles_on_constant_input() {
    let mut spring = Spring::new(SpringConfig::default());
    spring.step(0.0, FRAME);
    for _ in 0..600 {
        spring.step(0.75, FRAME);
    }
    assert!((spring.value() - 0.75).abs() < 1e-3);
    assert!(spring.is_at_rest(0.75));
}

#[test]
fn spring_output_is_monotonic_and_lags_input() {
    let mut spring = Spring::new(SpringConfig::default());
    spring.step(0.0, FRAME);
    let first = spring.step(1.0, FRAME);
    assert!(first > 0.0 && first < 1.0);
    let mut prev = first;
    for _ in 0..300 {
        let v = spring.step(1.0, FRAME);
        assert!(v >= prev - 1e-6, "went backwards: {prev} -> {v}");
        assert!(v <= 1.0 + 1e-6, "overshot: {v}");
        prev = v;
    }
}

#[test]
fn spring_tracks_a_rising_ramp() {
    let mut spring = Spring::new(SpringConfig::default());
    spring.step(0.0, FRAME);
    let mut prev = 0.0;
    for i in 1..=120 {
        let target = i as f32 / 120.0;
        let v = spring.step(target, FRAME);
        assert!(v >= prev - 1e-6);
        assert!(v <= target + 1e-6);
        prev = v;
    }
    for _ in 0..600 {
        spring.step(1.0, FRAME);
    }
    assert!((spring.value() - 1.0).abs() < 1e-3);
}

#[test]
fn long_frames_are_capped() {
    let mut spring = Spring::new(SpringConfig::default());
    spring.step(0.0, FRAME);
    let v = spring.step(1.0, 10.0);
    assert!(v > 0.0 && v < 0.5, "dt was not capped: {v}");
}

#[test]
fn invalid_dt_does_not_move_the_spring() {
    let mut spring = Spring::new(SpringConfig::default());
    spring.step(0.0, FRAME);
    assert_eq!(spring.step(1.0, f32::NAN), 0.0);
    assert_eq!(spring.step(1.0, -1.0), 0.0);
}

#[test]
fn exponential_smoother_converges() {
    let mut ema = ExpSmoother::new(0.12, 0.001);
    assert_eq!(ema.step(0.2, FRAME), 0.2);
    let mut prev = 0.2;
    for _ in 0..240 {
        let v = ema.step(0.9, FRAME);
        assert!(v >= prev && v <= 0.9);
        prev = v;
    }
    assert_eq!(ema.value(), 0.9);
}

#[test]
fn zero_tau_passes_input_through() {
    let mut ema = ExpSmoother::new(0.0, 0.001);
    ema.step(0.0, FRAME);
    assert_eq!(ema.step(0.6, FRAME), 0.6);
}

#[test]
fn progress_smoother_dispatches_by_kind() {
    for kind in [SmoothingKind::Spring, SmoothingKind::Exponential] {
        let mut smoother = ProgressSmoother::for_kind(kind);
        smoother.step(0.0, FRAME);
        for _ in 0..600 {
            smoother.step(0.4, FRAME);
        }
        assert!((smoother.value() - 0.4).abs() < 1e-3, "{kind:?}");
    }
    assert!(matches!(
        ProgressSmoother::for_kind(SmoothingKind::Spring),
        ProgressSmoother::Spring(_)
    ));
}

#[test]
fn progress_smoother_ignores_non_finite_targets() {
    let mut smoother = ProgressSmoother::for_kind(SmoothingKind::Spring);
    smoother.step(0.25, FRAME);
    assert_eq!(smoother.step(f32::NAN, FRAME), 0.25);
    assert_eq!(smoother.step(f32::INFINITY, FRAME), 0.25);
}

#[test]
fn first_frame_always_writes_styles() {
    assert!(needs_style_write(None, 0.0, 0.0));
    assert!(needs_style_write(None, 0.42, 0.9));
}

#[test]
fn sub_epsilon_progress_change_skips_write() {
    assert!(!needs_style_write(Some(0.5), 0.5, 0.8));
    assert!(!needs_style_write(Some(0.5), 0.50005, 0.8));
    assert!(!needs_style_write(Some(0.5), 0.49995, 0.0));
    assert!(needs_style_write(Some(0.5), 0.501, 0.8));
    assert!(needs_style_write(Some(0.5), 0.499, 0.0));
}

#[test]
fn landing_on_target_writes_even_below_epsilon() {
    assert!(needs_style_write(Some(0.49995), 0.5, 0.5));
    assert!(!needs_style_write(Some(0.5), 0.5, 0.5));
}

#[test]
fn settled_spring_value_is_written() {
    let mut smoother = ProgressSmoother::for_kind(SmoothingKind::Spring);
    let mut last_written = None;
    let mut writes = 0;
    for frame in 0..2000 {
        let target = if frame == 0 { 0.0 } else { 0.5 };
        let smoothed = smoother.step(target, FRAME);
        if needs_style_write(last_written, smoothed, target) {
            last_written = Some(smoothed);
            writes += 1;
        }
    }
    assert_eq!(smoother.value(), 0.5);
    assert_eq!(last_written, Some(0.5));
    // settled frames stop producing writes
    assert!(writes < 2000);
}
