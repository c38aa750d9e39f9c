//! Horizontal panel navigation.
//!
//! [`PanelNavigator`] owns the current panel index, derives it from observed
//! scroll positions and turns navigation requests into animated scrolls
//! through injected collaborators. All entry points take `&self` so event
//! handlers can share one instance through an `Rc` and re-enter freely from
//! animation callbacks.

use super::coalesce::FrameCoalescer;
use super::config::NavConfig;
use super::easing::Easing;
use super::error::NavError;
use super::input::NavAction;
use super::layout::{LayoutSource, PanelSet, ScrollSample};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Handle returned by [`ScrollAnimator::animate_to`].
///
/// Animators that cannot stop a running scroll hand back [`CancelToken::noop`];
/// the navigator ignores stale completions either way.
pub struct CancelToken(Option<Box<dyn FnOnce()>>);

impl CancelToken {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(cancel)))
    }

    pub fn noop() -> Self {
        Self(None)
    }

    pub fn cancel(self) {
        if let Some(f) = self.0 {
            f();
        }
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CancelToken")
            .field(&if self.0.is_some() { "cancellable" } else { "noop" })
            .finish()
    }
}

/// Performs the smooth scroll to a horizontal offset.
pub trait ScrollAnimator {
    fn animate_to(
        &self,
        offset: f64,
        duration: Duration,
        easing: Easing,
        on_complete: Box<dyn FnOnce()>,
    ) -> CancelToken;
}

/// Highlights exactly one indicator; clearing the others is the view's job.
pub trait IndicatorView {
    fn set_active(&self, index: usize);
}

/// Runs a callback before the host's next paint.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Collaborators a navigator drives.
#[derive(Clone)]
pub struct NavigatorWiring {
    pub animator: Rc<dyn ScrollAnimator>,
    pub indicator: Rc<dyn IndicatorView>,
    pub frames: Rc<dyn FrameScheduler>,
}

// State reachable from animation and frame callbacks
struct Shared {
    panels: PanelSet,
    indicator: Rc<dyn IndicatorView>,
    current: Cell<usize>,
    // Bumped by every go_to and by a settle that ends one; completions
    // carrying an older value are stale
    generation: Cell<u64>,
    in_flight: Cell<bool>,
    active: Cell<Option<usize>>,
    ticks: FrameCoalescer<ScrollSample>,
}

impl Shared {
    fn activate(&self, index: usize) {
        self.active.set(Some(index));
        self.indicator.set_active(index);
    }

    fn complete(&self, generation: u64, target: usize) {
        if self.generation.get() != generation {
            log::debug!(
                "[nav] ignoring superseded completion for panel {} (gen {} < {})",
                target,
                generation,
                self.generation.get()
            );
            return;
        }
        self.in_flight.set(false);
        self.current.set(target);
        self.activate(target);
    }

    // A resolved settle supersedes any request still in flight, so an animator
    // that never reports completion cannot freeze tick tracking.
    fn settle(&self, sample: ScrollSample) {
        match self.panels.index_at(sample) {
            Some(index) => {
                if self.in_flight.replace(false) {
                    self.generation.set(self.generation.get().wrapping_add(1));
                }
                self.current.set(index);
                self.activate(index);
            }
            None => log::debug!("[nav] settled center {:.1} misses every panel", sample.center()),
        }
    }

    fn evaluate_tick(&self) {
        let Some(sample) = self.ticks.take() else {
            return;
        };
        if self.in_flight.get() {
            return;
        }
        if let Some(index) = self.panels.index_at(sample) {
            if index != self.current.get() {
                self.current.set(index);
                self.activate(index);
            }
        }
    }
}

pub struct PanelNavigator {
    shared: Rc<Shared>,
    animator: Rc<dyn ScrollAnimator>,
    frames: Rc<dyn FrameScheduler>,
    config: NavConfig,
    cancel: RefCell<Option<CancelToken>>,
}

impl PanelNavigator {
    /// Capture the panel layout and seed the current index.
    ///
    /// Fails when the layout is empty or malformed. With an `initial` scroll
    /// position the nearest panel becomes current, otherwise panel 0. The
    /// matching indicator is activated before returning.
    pub fn new(
        layout: &dyn LayoutSource,
        wiring: NavigatorWiring,
        config: NavConfig,
        initial: Option<ScrollSample>,
    ) -> Result<Self, NavError> {
        let panels = PanelSet::from_source(layout)?;
        let start = initial.and_then(|s| panels.index_at(s)).unwrap_or(0);
        log::debug!("[nav] {} panels, starting at {}", panels.len(), start);
        let shared = Rc::new(Shared {
            panels,
            indicator: wiring.indicator,
            current: Cell::new(start),
            generation: Cell::new(0),
            in_flight: Cell::new(false),
            active: Cell::new(None),
            ticks: FrameCoalescer::new(),
        });
        shared.activate(start);
        Ok(Self {
            shared,
            animator: wiring.animator,
            frames: wiring.frames,
            config,
            cancel: RefCell::new(None),
        })
    }

    pub fn current_index(&self) -> usize {
        self.shared.current.get()
    }

    pub fn panel_count(&self) -> usize {
        self.shared.panels.len()
    }

    pub fn panels(&self) -> &PanelSet {
        &self.shared.panels
    }

    /// Index last handed to the indicator view.
    pub fn active_indicator(&self) -> Option<usize> {
        self.shared.active.get()
    }

    /// True between a `go_to` and its (non-superseded) completion.
    pub fn is_animating(&self) -> bool {
        self.shared.in_flight.get()
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Scroll to the panel at `index`, clamped into range.
    ///
    /// The current index changes immediately; the indicator follows once the
    /// animation reports completion, and only if no later request replaced
    /// this one.
    pub fn go_to(&self, index: i64) {
        let shared = &self.shared;
        let target = shared.panels.clamp_index(index);
        let generation = shared.generation.get().wrapping_add(1);
        shared.generation.set(generation);
        shared.current.set(target);
        shared.in_flight.set(true);

        let previous = self.cancel.borrow_mut().take();
        if let Some(token) = previous {
            token.cancel();
        }

        let offset = shared.panels.offset_of(target as i64);
        log::debug!("[nav] go_to {} -> panel {} @ {:.1}px", index, target, offset);
        let weak: Weak<Shared> = Rc::downgrade(shared);
        let token = self.animator.animate_to(
            offset,
            self.config.scroll_duration,
            self.config.easing,
            Box::new(move || {
                if let Some(s) = weak.upgrade() {
                    s.complete(generation, target);
                }
            }),
        );
        // A go_to issued from inside animate_to owns the slot by now
        if shared.generation.get() == generation {
            *self.cancel.borrow_mut() = Some(token);
        }
    }

    pub fn next(&self) {
        self.go_to(self.current_index() as i64 + 1);
    }

    pub fn previous(&self) {
        self.go_to(self.current_index() as i64 - 1);
    }

    pub fn first(&self) {
        self.go_to(0);
    }

    pub fn last(&self) {
        self.go_to(self.shared.panels.last_index() as i64);
    }

    pub fn apply(&self, action: NavAction) {
        match action {
            NavAction::Previous => self.previous(),
            NavAction::Next => self.next(),
            NavAction::First => self.first(),
            NavAction::Last => self.last(),
            NavAction::GoTo(i) => self.go_to(i64::try_from(i).unwrap_or(i64::MAX)),
        }
    }

    pub fn index_from_scroll_offset(&self, scroll_left: f64, viewport_width: f64) -> Option<usize> {
        self.shared
            .panels
            .index_from_scroll_offset(scroll_left, viewport_width)
    }

    /// Scrolling paused: adopt the panel under the viewport center, if any.
    ///
    /// When the center resolves, a pending navigation is treated as finished
    /// and its completion, should it still arrive, is ignored.
    pub fn on_scroll_settled(&self, scroll_left: f64, viewport_width: f64) {
        self.shared
            .settle(ScrollSample::new(scroll_left, viewport_width));
    }

    /// High-frequency scroll notification. At most one evaluation runs per
    /// frame and it sees the latest position submitted before the frame.
    pub fn on_scroll_tick(&self, scroll_left: f64, viewport_width: f64) {
        let sample = ScrollSample::new(scroll_left, viewport_width);
        if self.shared.ticks.submit(sample) {
            let weak = Rc::downgrade(&self.shared);
            self.frames.request_frame(Box::new(move || {
                if let Some(s) = weak.upgrade() {
                    s.evaluate_tick();
                }
            }));
        }
    }
}

impl fmt::Debug for PanelNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelNavigator")
            .field("panels", &self.shared.panels.len())
            .field("current", &self.shared.current.get())
            .field("generation", &self.shared.generation.get())
            .field("in_flight", &self.shared.in_flight.get())
            .finish()
    }
}
