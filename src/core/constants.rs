/// Navigation timing and trigger tuning.
///
/// Defaults for [`super::NavConfig`]; hosts override them per navigator root.
// Animated scroll to a panel's start offset
pub const SCROLL_DURATION_MS: u64 = 800;

// Quiet period after the last scroll notification before the position counts as settled
pub const SETTLE_DELAY_MS: u64 = 150;

// Added to a panel's left edge before comparing against the viewport center.
// Pages in the wild use both `left center` (0) and `left+=10 center` (10).
pub const TRIGGER_OFFSET_PX: f64 = 0.0;

// Wheel stepping
pub const WHEEL_COOLDOWN_MS: u64 = 600;
pub const WHEEL_THRESHOLD_PX: f64 = 4.0;

// Fraction of a section that must intersect the viewport before it fades in
pub const REVEAL_THRESHOLD: f64 = 0.1;
