// Scroll progress and its smoothing filters.

use super::constants::{
    EXP_SMOOTHING_TAU_SEC, MAX_FRAME_DT_SEC, MAX_SUBSTEP_SEC, SPRING_DAMPING, SPRING_MASS,
    SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_STIFFNESS, STYLE_WRITE_EPSILON,
};
use super::theme::SmoothingKind;

/// Fraction of a tall container that has scrolled past the viewport top.
///
/// `rect_top` is the container's top edge relative to the viewport (negative
/// once scrolled past) and `rect_height` its full height. Progress is 0 with
/// the container top at the viewport top and 1 with its bottom there.
#[inline]
pub fn scroll_progress(rect_top: f64, rect_height: f64) -> f32 {
    if rect_height.is_nan() || rect_height <= 0.0 || !rect_top.is_finite() {
        return 0.0;
    }
    (-rect_top / rect_height).clamp(0.0, 1.0) as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

impl SpringConfig {
    /// Damping ratio ζ; 1 is critical, above 1 never overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Mass-spring-damper chasing a moving target.
#[derive(Clone, Debug)]
pub struct Spring {
    pub config: SpringConfig,
    value: f32,
    velocity: f32,
    initialized: bool,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            value: 0.0,
            velocity: 0.0,
            initialized: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_at_rest(&self, target: f32) -> bool {
        (self.value - target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        if !self.initialized {
            self.value = target;
            self.velocity = 0.0;
            self.initialized = true;
            return self.value;
        }
        let dt = sanitize_dt(dt_sec);
        let cfg = self.config;
        let mass = cfg.mass.max(1e-3);
        let steps = (dt / MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            let accel = (-cfg.stiffness * (self.value - target) - cfg.damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if self.is_at_rest(target) {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// First-order low-pass: `x += (target - x) * (1 - e^(-dt/tau))`.
#[derive(Clone, Debug)]
pub struct ExpSmoother {
    pub tau_sec: f32,
    pub rest_delta: f32,
    value: f32,
    initialized: bool,
}

impl ExpSmoother {
    pub fn new(tau_sec: f32, rest_delta: f32) -> Self {
        Self {
            tau_sec,
            rest_delta,
            value: 0.0,
            initialized: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        if !self.initialized {
            self.value = target;
            self.initialized = true;
            return self.value;
        }
        let dt = sanitize_dt(dt_sec);
        let alpha = if self.tau_sec > 0.0 {
            1.0 - (-dt / self.tau_sec).exp()
        } else {
            1.0
        };
        self.value += (target - self.value) * alpha;
        if (self.value - target).abs() < self.rest_delta {
            self.value = target;
        }
        self.value
    }
}

/// Smoother selected by the active theme.
#[derive(Clone, Debug)]
pub enum ProgressSmoother {
    Spring(Spring),
    Exponential(ExpSmoother),
}

impl ProgressSmoother {
    pub fn for_kind(kind: SmoothingKind) -> Self {
        match kind {
            SmoothingKind::Spring => ProgressSmoother::Spring(Spring::new(SpringConfig::default())),
            SmoothingKind::Exponential => ProgressSmoother::Exponential(ExpSmoother::new(
                EXP_SMOOTHING_TAU_SEC,
                SPRING_REST_DELTA,
            )),
        }
    }

    pub fn value(&self) -> f32 {
        match self {
            ProgressSmoother::Spring(s) => s.value(),
            ProgressSmoother::Exponential(e) => e.value(),
        }
    }

    /// Advance by `dt_sec` toward `target`; non-finite targets are ignored.
    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        if !target.is_finite() {
            return self.value();
        }
        match self {
            ProgressSmoother::Spring(s) => s.step(target, dt_sec),
            ProgressSmoother::Exponential(e) => e.step(target, dt_sec),
        }
    }
}

/// Whether smoothed progress moved enough since the last DOM write to
/// warrant another one. The first frame always writes, and so does the frame
/// on which the smoother lands exactly on `target`.
#[inline]
pub fn needs_style_write(last_written: Option<f32>, current: f32, target: f32) -> bool {
    match last_written {
        Some(prev) => {
            (current - prev).abs() > STYLE_WRITE_EPSILON || (current == target && prev != target)
        }
        None => true,
    }
}

#[inline]
fn sanitize_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
    } else {
        0.0
    }
}
