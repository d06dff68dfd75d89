// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    // Spring parameters should be positive
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(SPRING_MASS > 0.0);

    // Rest thresholds should be small relative to the [0, 1] progress range
    assert!(SPRING_REST_DELTA > 0.0 && SPRING_REST_DELTA < 0.01);
    assert!(SPRING_REST_SPEED > 0.0 && SPRING_REST_SPEED < 0.1);
    assert!(STYLE_WRITE_EPSILON < SPRING_REST_DELTA);

    assert!(EXP_SMOOTHING_TAU_SEC > 0.0);
    assert!(INDICATOR_PERIOD_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn integration_step_is_finer_than_frame_cap() {
    assert!(MAX_SUBSTEP_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > MAX_SUBSTEP_SEC);
    // Explicit integration stays stable while h * omega is well below 2
    let omega = (SPRING_STIFFNESS / SPRING_MASS).sqrt();
    assert!(MAX_SUBSTEP_SEC * omega < 0.5);
}

#[test]
fn deck_has_distinct_https_images() {
    assert!(!DOMINO_IMAGES.is_empty());
    for (i, a) in DOMINO_IMAGES.iter().enumerate() {
        assert!(a.starts_with("https://"), "image {i} is not https");
        for b in DOMINO_IMAGES.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_have_logical_relationships() {
    assert!(CONTAINER_VIEWPORT_MULTIPLE > 1);
    assert!(PERSPECTIVE_PX > STAGE_HEIGHT_PX);
    // Peeking cards must stay within the card's own shadow offset
    assert!((STACK_PEEK_PX as u32) < SHADOW_OFFSET_BASE_PX);
}

#[test]
fn card_decorations_grow_with_depth() {
    assert_eq!(
        card_shadow_filter(0),
        "drop-shadow(0 20px 30px rgba(0, 0, 0, 0.3))"
    );
    assert_eq!(
        card_shadow_filter(2),
        "drop-shadow(0 30px 50px rgba(0, 0, 0, 0.3))"
    );
    assert_eq!(card_alt_text(0), "Domino card 1");
    assert_eq!(card_alt_text(4), "Domino card 5");
}
