//! Application-level configuration constants.

// Strip geometry
pub const ITEM_WIDTH_PX: f64 = 280.0;
pub const ITEM_GAP_PX: f64 = 24.0;
/// Copies of the item set laid out in the strip. Four copies leave a full
/// replica of headroom on the left and two on the right of the home window,
/// which is more than a single fling can travel.
pub const REPLICA_COUNT: usize = 4;

// Drag & momentum
pub const TAP_THRESHOLD_PX: f64 = 10.0;
pub const VELOCITY_DAMPING: f64 = 0.3;
pub const MAX_VELOCITY: f64 = 2.0; // px/ms
pub const MIN_VELOCITY: f64 = 0.02; // px/ms
pub const FRICTION: f64 = 0.95;
pub const MOMENTUM_GAIN: f64 = 16.0; // ms per frame at 60 Hz

// Timing
pub const AUTO_SCROLL_PERIOD_MS: u32 = 20;
pub const AUTO_SCROLL_STEP_PX: f64 = 1.0;
pub const ANIMATION_DURATION_MS: f64 = 300.0;
pub const DRAG_COOLDOWN_MS: f64 = 2000.0;
pub const TAP_COOLDOWN_MS: f64 = 500.0;
pub const NAVIGATE_COOLDOWN_MS: f64 = 2000.0;
pub const PULSE_MS: u32 = 150;

// Panel reversion window
pub const REVERSION_MIN_MS: u32 = 30_000;
pub const REVERSION_MAX_MS: u32 = 40_000;

/// Tunables for the looping carousel, injected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub item_width: f64,
    pub gap: f64,
    pub replicas: usize,
    pub tap_threshold: f64,
    pub velocity_damping: f64,
    pub max_velocity: f64,
    pub min_velocity: f64,
    pub friction: f64,
    pub momentum_gain: f64,
    pub auto_scroll_step: f64,
    pub animation_duration_ms: f64,
    pub drag_cooldown_ms: f64,
    pub tap_cooldown_ms: f64,
    pub navigate_cooldown_ms: f64,
}

impl CarouselConfig {
    /// Item width plus gap: the unit of snapping and wrapping.
    pub fn pitch(&self) -> f64 {
        self.item_width + self.gap
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: ITEM_WIDTH_PX,
            gap: ITEM_GAP_PX,
            replicas: REPLICA_COUNT,
            tap_threshold: TAP_THRESHOLD_PX,
            velocity_damping: VELOCITY_DAMPING,
            max_velocity: MAX_VELOCITY,
            min_velocity: MIN_VELOCITY,
            friction: FRICTION,
            momentum_gain: MOMENTUM_GAIN,
            auto_scroll_step: AUTO_SCROLL_STEP_PX,
            animation_duration_ms: ANIMATION_DURATION_MS,
            drag_cooldown_ms: DRAG_COOLDOWN_MS,
            tap_cooldown_ms: TAP_COOLDOWN_MS,
            navigate_cooldown_ms: NAVIGATE_COOLDOWN_MS,
        }
    }
}

/// Inactivity window after which a non-home panel reverts to home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitcherConfig {
    pub reversion_min_ms: u32,
    pub reversion_max_ms: u32,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            reversion_min_ms: REVERSION_MIN_MS,
            reversion_max_ms: REVERSION_MAX_MS,
        }
    }
}
