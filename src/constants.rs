// Page layout constants used by the DOM renderer.

// Element ids
pub const APP_ROOT_ID: &str = "app";
pub const SCROLL_CONTAINER_ID: &str = "domino-scroll";
pub const DECK_ID: &str = "domino-deck";
pub const INDICATOR_ID: &str = "scroll-indicator";

pub const HERO_TITLE: &str = "Domino Effect";

// Scroll container height as a multiple of the viewport height
pub const CONTAINER_VIEWPORT_MULTIPLE: u32 = 5;

// Stage geometry
pub const STAGE_HEIGHT_PX: u32 = 600;
pub const STAGE_MAX_WIDTH_PX: u32 = 896;
pub const PERSPECTIVE_PX: u32 = 1000;
pub const CARD_RADIUS_PX: u32 = 12;

// Per-card drop shadow grows with depth in the stack
pub const SHADOW_OFFSET_BASE_PX: u32 = 20;
pub const SHADOW_OFFSET_STEP_PX: u32 = 5;
pub const SHADOW_BLUR_BASE_PX: u32 = 30;
pub const SHADOW_BLUR_STEP_PX: u32 = 10;

// Theme selection
pub const THEME_QUERY_PARAM: &str = "theme";
pub const SMOOTHING_QUERY_PARAM: &str = "smoothing";
pub const THEME_DATA_ATTR: &str = "data-theme";

#[inline]
pub fn card_shadow_filter(index: usize) -> String {
    let i = index as u32;
    format!(
        "drop-shadow(0 {}px {}px rgba(0, 0, 0, 0.3))",
        SHADOW_OFFSET_BASE_PX + i * SHADOW_OFFSET_STEP_PX,
        SHADOW_BLUR_BASE_PX + i * SHADOW_BLUR_STEP_PX
    )
}

#[inline]
pub fn card_alt_text(index: usize) -> String {
    format!("Domino card {}", index + 1)
}
