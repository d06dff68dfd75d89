// Visual themes for the domino stack.
//
// A theme is plain data: one keyframe table per animated property, the hinge
// edge cards rotate about, the page palette and the progress smoother. The
// two built-in themes differ only in that data.

use super::keyframes::{Easing, KeyframeError, KeyframeTable};

/// Edge a card is anchored on while it rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hinge {
    /// Card tips backward, away from the viewer.
    TopCenter,
    /// Card tips forward, toward the viewer.
    BottomCenter,
}

impl Hinge {
    pub fn css_origin(self) -> &'static str {
        match self {
            Hinge::TopCenter => "top center",
            Hinge::BottomCenter => "bottom center",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothingKind {
    Spring,
    Exponential,
}

impl SmoothingKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(SmoothingKind::Spring),
            "exp" | "exponential" => Some(SmoothingKind::Exponential),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub stage_background: &'static str,
    pub title_color: &'static str,
    pub card_border: &'static str,
    pub indicator_color: &'static str,
}

/// Static description of a theme; validated into a [`Theme`] by
/// [`Theme::from_spec`].
#[derive(Clone, Copy, Debug)]
pub struct ThemeSpec {
    pub name: &'static str,
    pub opacity: &'static [(f32, f32)],
    pub rotate_x_deg: &'static [(f32, f32)],
    pub translate_y_px: &'static [(f32, f32)],
    pub scale: &'static [(f32, f32)],
    pub easing: Easing,
    pub hinge: Hinge,
    pub palette: Palette,
    pub smoothing: SmoothingKind,
}

pub const FALL_BACKWARD: ThemeSpec = ThemeSpec {
    name: "fall-backward",
    opacity: &[(0.0, 1.0), (0.1, 1.0), (0.9, 1.0), (1.0, 0.0)],
    rotate_x_deg: &[(0.0, 0.0), (1.0, 90.0)],
    translate_y_px: &[(0.0, 0.0), (1.0, 200.0)],
    scale: &[(0.0, 1.0), (1.0, 1.0)],
    easing: Easing::Linear,
    hinge: Hinge::TopCenter,
    palette: Palette {
        page_background: "linear-gradient(to bottom right, #f9fafb, #ffffff, #f3f4f6)",
        stage_background: "linear-gradient(to bottom, rgba(243,244,246,0.5), rgba(255,255,255,0.3))",
        title_color: "#111827",
        card_border: "rgba(229,231,235,0.2)",
        indicator_color: "rgba(75,85,99,0.7)",
    },
    smoothing: SmoothingKind::Spring,
};

pub const FALL_FORWARD: ThemeSpec = ThemeSpec {
    name: "fall-forward",
    opacity: &[(0.0, 0.0), (0.3, 1.0), (0.7, 1.0), (1.0, 0.0)],
    rotate_x_deg: &[(0.0, 0.0), (1.0, -90.0)],
    translate_y_px: &[(0.0, 0.0), (0.5, 30.0), (1.0, 60.0)],
    scale: &[(0.0, 1.0), (0.5, 0.8), (1.0, 1.0)],
    easing: Easing::Linear,
    hinge: Hinge::BottomCenter,
    palette: Palette {
        page_background: "linear-gradient(to bottom right, #0f172a, #1e293b, #020617)",
        stage_background: "linear-gradient(to bottom, rgba(30,41,59,0.5), rgba(2,6,23,0.3))",
        title_color: "#f1f5f9",
        card_border: "rgba(148,163,184,0.2)",
        indicator_color: "rgba(203,213,225,0.7)",
    },
    smoothing: SmoothingKind::Spring,
};

pub static BUILTIN_THEMES: [ThemeSpec; 2] = [FALL_BACKWARD, FALL_FORWARD];

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub opacity: KeyframeTable,
    pub rotate_x_deg: KeyframeTable,
    pub translate_y_px: KeyframeTable,
    pub scale: KeyframeTable,
    pub hinge: Hinge,
    pub palette: Palette,
    pub smoothing: SmoothingKind,
}

impl Theme {
    pub fn from_spec(spec: &ThemeSpec) -> Result<Self, KeyframeError> {
        Ok(Self {
            name: spec.name,
            opacity: KeyframeTable::new(spec.opacity, spec.easing)?,
            rotate_x_deg: KeyframeTable::new(spec.rotate_x_deg, spec.easing)?,
            translate_y_px: KeyframeTable::new(spec.translate_y_px, spec.easing)?,
            scale: KeyframeTable::new(spec.scale, spec.easing)?,
            hinge: spec.hinge,
            palette: spec.palette,
            smoothing: spec.smoothing,
        })
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn spec_by_name(name: &str) -> Option<&'static ThemeSpec> {
        BUILTIN_THEMES
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn default_spec() -> &'static ThemeSpec {
        &BUILTIN_THEMES[0]
    }
}
