use instant::Instant;
use std::time::Duration;

/// A navigation request coming from the keyboard, wheel or a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
}

#[inline]
pub fn nav_action_for_key(key: &str) -> Option<NavAction> {
    match key {
        "ArrowLeft" | "PageUp" => Some(NavAction::Previous),
        "ArrowRight" | "PageDown" => Some(NavAction::Next),
        "Home" => Some(NavAction::First),
        "End" => Some(NavAction::Last),
        _ => None,
    }
}

/// Arrow keys inside form fields move the caret, not the panels.
#[inline]
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || tag_name.eq_ignore_ascii_case("input")
        || tag_name.eq_ignore_ascii_case("textarea")
        || tag_name.eq_ignore_ascii_case("select")
}

/// Turns a stream of wheel deltas into discrete panel steps.
///
/// The dominant axis decides the direction. Deltas below `threshold` are
/// trackpad noise; after a step, further deltas are swallowed until
/// `cooldown` has elapsed so one flick moves one panel.
#[derive(Clone, Debug)]
pub struct WheelGate {
    cooldown: Duration,
    threshold: f64,
    last_step: Option<Instant>,
}

impl WheelGate {
    pub fn new(cooldown: Duration, threshold: f64) -> Self {
        Self {
            cooldown,
            threshold,
            last_step: None,
        }
    }

    pub fn step(&mut self, delta_x: f64, delta_y: f64, now: Instant) -> Option<NavAction> {
        let delta = if delta_x.abs() > delta_y.abs() {
            delta_x
        } else {
            delta_y
        };
        if !delta.is_finite() || delta.abs() < self.threshold {
            return None;
        }
        if let Some(last) = self.last_step {
            if now < last + self.cooldown {
                return None;
            }
        }
        self.last_step = Some(now);
        Some(if delta > 0.0 {
            NavAction::Next
        } else {
            NavAction::Previous
        })
    }
}
