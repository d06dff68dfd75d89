// Motion and layout tuning shared by the mapper, smoother and renderer.

// Card deck
pub const DOMINO_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1418065460487-3e41a6c84dc5?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1501594907352-04cda38ebc29?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=600&fit=crop",
];
pub const STACK_PEEK_PX: f32 = 4.0; // static downward pre-offset per card index

// Progress spring (mass-spring-damper on normalized progress)
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.001; // snap when this close to target...
pub const SPRING_REST_SPEED: f32 = 0.01; // ...and moving slower than this

// Exponential smoothing alternative
pub const EXP_SMOOTHING_TAU_SEC: f32 = 0.12;

// Integration limits
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // tab switches produce huge dt
pub const MAX_SUBSTEP_SEC: f32 = 1.0 / 120.0;

// Renderer
pub const STYLE_WRITE_EPSILON: f32 = 1e-4; // skip DOM writes below this progress change
pub const INDICATOR_PERIOD_SEC: f32 = 2.0;
pub const INDICATOR_BOUNCE_PX: f32 = 10.0;
