// Keyframe tables: piecewise interpolation over an ordered list of
// `(position, value)` pairs.
//
// Sampling clamps outside the table's range, so a card that has not started
// (or has finished) its animation sits on the first (or last) value.

use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub position: f32,
    pub value: f32,
}

/// Curve applied inside each segment of a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    Smoothstep,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeyframeError {
    #[error("keyframe table is empty")]
    Empty,
    #[error("keyframe {index} is not finite (position {position}, value {value})")]
    NotFinite {
        index: usize,
        position: f32,
        value: f32,
    },
    #[error("keyframe {index} at {position} comes before the previous position {previous}")]
    OutOfOrder {
        index: usize,
        position: f32,
        previous: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTable {
    frames: SmallVec<[Keyframe; 4]>,
    easing: Easing,
}

impl KeyframeTable {
    pub fn new(points: &[(f32, f32)], easing: Easing) -> Result<Self, KeyframeError> {
        if points.is_empty() {
            return Err(KeyframeError::Empty);
        }
        let mut frames: SmallVec<[Keyframe; 4]> = SmallVec::with_capacity(points.len());
        for (index, &(position, value)) in points.iter().enumerate() {
            if !position.is_finite() || !value.is_finite() {
                return Err(KeyframeError::NotFinite {
                    index,
                    position,
                    value,
                });
            }
            if let Some(prev) = frames.last() {
                if position < prev.position {
                    return Err(KeyframeError::OutOfOrder {
                        index,
                        position,
                        previous: prev.position,
                    });
                }
            }
            frames.push(Keyframe { position, value });
        }
        Ok(Self { frames, easing })
    }

    #[inline]
    pub fn linear(points: &[(f32, f32)]) -> Result<Self, KeyframeError> {
        Self::new(points, Easing::Linear)
    }

    /// A table that yields `value` everywhere.
    pub fn constant(value: f32) -> Result<Self, KeyframeError> {
        Self::linear(&[(0.0, value)])
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn sample(&self, at: f32) -> f32 {
        // `new` guarantees at least one frame
        let first = self.frames[0];
        let last = self.frames[self.frames.len() - 1];
        if at.is_nan() || at <= first.position {
            return first.value;
        }
        if at >= last.position {
            return last.value;
        }
        for pair in self.frames.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if at > b.position {
                continue;
            }
            let span = b.position - a.position;
            if span <= 0.0 {
                return b.value;
            }
            let t = self.easing.apply(((at - a.position) / span).clamp(0.0, 1.0));
            return a.value + (b.value - a.value) * t;
        }
        last.value
    }
}
