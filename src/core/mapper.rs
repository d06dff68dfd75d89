// Global scroll progress to per-card style.
//
// The [0, 1] progress range is sliced into `total` equal sub-ranges; card `i`
// animates only while progress crosses its own slice and saturates outside
// it. Everything here is a pure function of its arguments.

use super::constants::{INDICATOR_BOUNCE_PX, INDICATOR_PERIOD_SEC, STACK_PEEK_PX};
use super::keyframes::{Easing, KeyframeError, KeyframeTable};
use super::theme::Theme;

/// Per-frame visual parameters of one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub opacity: f32,
    pub rotate_x_deg: f32,
    pub translate_y_px: f32,
    pub scale: f32,
    pub z_index: i32,
    pub stack_offset_px: f32,
}

impl CardStyle {
    /// CSS `transform` value (translate, then scale, then rotate).
    pub fn css_transform(&self) -> String {
        format!(
            "translateY({:.2}px) scale({:.4}) rotateX({:.2}deg)",
            self.translate_y_px, self.scale, self.rotate_x_deg
        )
    }
}

/// Slice of global progress owned by card `index`, or `None` when the index
/// is not part of a deck of `total` cards.
#[inline]
pub fn card_range(index: usize, total: usize) -> Option<(f32, f32)> {
    if total == 0 || index >= total {
        return None;
    }
    let n = total as f32;
    Some((index as f32 / n, (index + 1) as f32 / n))
}

/// Re-normalize global progress onto card `index`'s slice, clamped to [0, 1].
pub fn card_progress(progress: f32, index: usize, total: usize) -> Option<f32> {
    let (start, end) = card_range(index, total)?;
    let p = if progress.is_finite() { progress } else { 0.0 };
    Some(((p - start) / (end - start)).clamp(0.0, 1.0))
}

#[inline]
pub fn stack_z_index(index: usize, total: usize) -> i32 {
    total as i32 - index as i32
}

#[inline]
pub fn stack_offset_px(index: usize) -> f32 {
    -(index as f32) * STACK_PEEK_PX
}

pub fn map_card(progress: f32, index: usize, total: usize, theme: &Theme) -> Option<CardStyle> {
    let local = card_progress(progress, index, total)?;
    Some(CardStyle {
        opacity: theme.opacity.sample(local).clamp(0.0, 1.0),
        rotate_x_deg: theme.rotate_x_deg.sample(local),
        translate_y_px: theme.translate_y_px.sample(local),
        scale: theme.scale.sample(local),
        z_index: stack_z_index(index, total),
        stack_offset_px: stack_offset_px(index),
    })
}

/// Styles for every card of a `total`-card deck at `progress`.
pub fn map_deck(progress: f32, total: usize, theme: &Theme) -> Vec<CardStyle> {
    (0..total)
        .filter_map(|i| map_card(progress, i, total, theme))
        .collect()
}

/// Up-and-back bounce of the scroll hint, one cycle per period.
pub fn indicator_bounce() -> Result<KeyframeTable, KeyframeError> {
    KeyframeTable::new(
        &[(0.0, 0.0), (0.5, INDICATOR_BOUNCE_PX), (1.0, 0.0)],
        Easing::Smoothstep,
    )
}

pub fn indicator_offset_px(elapsed_sec: f32, bounce: &KeyframeTable) -> f32 {
    let phase = (elapsed_sec.max(0.0) / INDICATOR_PERIOD_SEC).fract();
    bounce.sample(phase)
}
