// Host-side tests for the panel navigator, driven through recording fakes in
// place of the browser collaborators.

use panels_web::core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct RecordingAnimator {
    requests: RefCell<Vec<(f64, Duration, Easing)>>,
    pending: RefCell<Vec<Box<dyn FnOnce()>>>,
    cancels: Rc<RefCell<usize>>,
}

impl RecordingAnimator {
    fn offsets(&self) -> Vec<f64> {
        self.requests.borrow().iter().map(|r| r.0).collect()
    }

    // Fire the completion of the request at `i` (in issue order)
    fn complete(&self, i: usize) {
        let cb = {
            let mut pending = self.pending.borrow_mut();
            std::mem::replace(&mut pending[i], Box::new(|| {}))
        };
        cb();
    }

    fn complete_all(&self) {
        let n = self.pending.borrow().len();
        for i in 0..n {
            self.complete(i);
        }
    }
}

impl ScrollAnimator for RecordingAnimator {
    fn animate_to(
        &self,
        offset: f64,
        duration: Duration,
        easing: Easing,
        on_complete: Box<dyn FnOnce()>,
    ) -> CancelToken {
        self.requests.borrow_mut().push((offset, duration, easing));
        self.pending.borrow_mut().push(on_complete);
        let cancels = self.cancels.clone();
        CancelToken::new(move || *cancels.borrow_mut() += 1)
    }
}

// Completes inside animate_to, like an animator asked for a zero-length scroll
struct InstantAnimator;

impl ScrollAnimator for InstantAnimator {
    fn animate_to(
        &self,
        _offset: f64,
        _duration: Duration,
        _easing: Easing,
        on_complete: Box<dyn FnOnce()>,
    ) -> CancelToken {
        on_complete();
        CancelToken::noop()
    }
}

#[derive(Default)]
struct RecordingIndicator {
    calls: RefCell<Vec<usize>>,
}

impl RecordingIndicator {
    fn calls(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }
    fn last(&self) -> Option<usize> {
        self.calls.borrow().last().copied()
    }
    fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl IndicatorView for RecordingIndicator {
    fn set_active(&self, index: usize) {
        self.calls.borrow_mut().push(index);
    }
}

#[derive(Default)]
struct ManualFrames {
    queue: RefCell<Vec<Box<dyn FnOnce()>>>,
    requested: RefCell<usize>,
}

impl ManualFrames {
    fn run_frame(&self) {
        let callbacks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for cb in callbacks {
            cb();
        }
    }
    fn requested(&self) -> usize {
        *self.requested.borrow()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        *self.requested.borrow_mut() += 1;
        self.queue.borrow_mut().push(callback);
    }
}

struct Harness {
    nav: PanelNavigator,
    animator: Rc<RecordingAnimator>,
    indicator: Rc<RecordingIndicator>,
    frames: Rc<ManualFrames>,
}

fn five_panels() -> Vec<Panel> {
    (0..5).map(|i| Panel::new(i as f64 * 100.0, 100.0)).collect()
}

fn harness_with(panels: Vec<Panel>, initial: Option<ScrollSample>) -> Harness {
    let animator = Rc::new(RecordingAnimator::default());
    let indicator = Rc::new(RecordingIndicator::default());
    let frames = Rc::new(ManualFrames::default());
    let wiring = NavigatorWiring {
        animator: animator.clone(),
        indicator: indicator.clone(),
        frames: frames.clone(),
    };
    let nav = PanelNavigator::new(&panels, wiring, NavConfig::default(), initial)
        .expect("valid layout");
    Harness {
        nav,
        animator,
        indicator,
        frames,
    }
}

fn harness() -> Harness {
    harness_with(five_panels(), None)
}

#[test]
fn construction_rejects_empty_panel_set() {
    let wiring = NavigatorWiring {
        animator: Rc::new(RecordingAnimator::default()),
        indicator: Rc::new(RecordingIndicator::default()),
        frames: Rc::new(ManualFrames::default()),
    };
    let err = PanelNavigator::new(&Vec::<Panel>::new(), wiring, NavConfig::default(), None).unwrap_err();
    assert_eq!(err, NavError::EmptyPanelSet);
}

#[test]
fn starts_at_zero_and_activates_first_indicator() {
    let h = harness();
    assert_eq!(h.nav.current_index(), 0);
    assert_eq!(h.nav.panel_count(), 5);
    assert_eq!(h.indicator.calls(), vec![0]);
    assert_eq!(h.nav.active_indicator(), Some(0));
    assert!(!h.nav.is_animating());
}

#[test]
fn initial_scroll_offset_seeds_current_index() {
    let h = harness_with(five_panels(), Some(ScrollSample::new(250.0, 100.0)));
    assert_eq!(h.nav.current_index(), 3);
    assert_eq!(h.indicator.calls(), vec![3]);
}

#[test]
fn unresolvable_initial_offset_falls_back_to_zero() {
    let h = harness_with(five_panels(), Some(ScrollSample::new(900.0, 100.0)));
    assert_eq!(h.nav.current_index(), 0);
}

#[test]
fn go_to_clamps_out_of_range_requests() {
    let h = harness();
    h.nav.go_to(-1);
    assert_eq!(h.nav.current_index(), 0);
    h.nav.go_to(99);
    assert_eq!(h.nav.current_index(), 4);
    h.nav.go_to(i64::MIN);
    assert_eq!(h.nav.current_index(), 0);
    h.nav.go_to(i64::MAX);
    assert_eq!(h.nav.current_index(), 4);
    assert_eq!(h.animator.offsets(), vec![0.0, 400.0, 0.0, 400.0]);
}

#[test]
fn go_to_always_lands_in_range_for_any_panel_count() {
    for n in 1..=6usize {
        let panels: Vec<Panel> = (0..n).map(|i| Panel::new(i as f64 * 50.0, 50.0)).collect();
        let h = harness_with(panels, None);
        for i in -10i64..=10 {
            h.nav.go_to(i);
            assert!(h.nav.current_index() < n, "n={n} i={i}");
        }
    }
}

#[test]
fn go_to_requests_scroll_with_configured_duration_and_easing() {
    let h = harness();
    h.nav.go_to(2);
    let requests = h.animator.requests.borrow().clone();
    assert_eq!(
        requests,
        vec![(200.0, NavConfig::default().scroll_duration, Easing::CubicOut)]
    );
}

#[test]
fn go_to_is_idempotent() {
    let h = harness();
    h.nav.go_to(3);
    let once = h.nav.current_index();
    h.nav.go_to(3);
    assert_eq!(h.nav.current_index(), once);
}

#[test]
fn indicator_waits_for_completion() {
    let h = harness();
    h.indicator.clear();
    h.nav.go_to(2);
    assert_eq!(h.nav.current_index(), 2);
    assert!(h.nav.is_animating());
    assert!(h.indicator.calls().is_empty());

    h.animator.complete(0);
    assert_eq!(h.indicator.calls(), vec![2]);
    assert_eq!(h.nav.active_indicator(), Some(2));
    assert!(!h.nav.is_animating());
}

#[test]
fn superseded_completion_never_updates_indicator() {
    let h = harness();
    h.indicator.clear();
    h.nav.go_to(2);
    h.nav.go_to(4);

    // Late completion of the first request arrives after the second one
    h.animator.complete(1);
    h.animator.complete(0);
    assert_eq!(h.indicator.calls(), vec![4]);
    assert_eq!(h.nav.current_index(), 4);
    assert_eq!(h.nav.active_indicator(), Some(4));
}

#[test]
fn superseded_completion_in_issue_order_still_ends_on_last_target() {
    let h = harness();
    h.indicator.clear();
    h.nav.go_to(2);
    h.nav.go_to(4);
    h.animator.complete_all();
    assert_eq!(h.indicator.calls(), vec![4]);
}

#[test]
fn new_request_cancels_previous_animation() {
    let h = harness();
    h.nav.go_to(1);
    assert_eq!(*h.animator.cancels.borrow(), 0);
    h.nav.go_to(2);
    assert_eq!(*h.animator.cancels.borrow(), 1);
    h.nav.go_to(3);
    assert_eq!(*h.animator.cancels.borrow(), 2);
}

#[test]
fn synchronous_completion_updates_indicator_immediately() {
    let indicator = Rc::new(RecordingIndicator::default());
    let wiring = NavigatorWiring {
        animator: Rc::new(InstantAnimator),
        indicator: indicator.clone(),
        frames: Rc::new(ManualFrames::default()),
    };
    let nav = PanelNavigator::new(&five_panels(), wiring, NavConfig::default(), None).unwrap();
    nav.go_to(3);
    assert_eq!(indicator.last(), Some(3));
    assert!(!nav.is_animating());
    nav.next();
    assert_eq!(nav.current_index(), 4);
    assert_eq!(indicator.last(), Some(4));
}

#[test]
fn next_then_previous_round_trips_from_interior() {
    let h = harness();
    h.nav.go_to(2);
    h.nav.next();
    assert_eq!(h.nav.current_index(), 3);
    h.nav.previous();
    assert_eq!(h.nav.current_index(), 2);
}

#[test]
fn next_and_previous_saturate_at_the_ends() {
    let h = harness();
    h.nav.previous();
    assert_eq!(h.nav.current_index(), 0);
    h.nav.last();
    h.nav.next();
    assert_eq!(h.nav.current_index(), 4);
    h.nav.first();
    assert_eq!(h.nav.current_index(), 0);
}

#[test]
fn next_uses_index_at_call_time_not_settled_indicator() {
    let h = harness();
    h.nav.next();
    h.nav.next();
    h.nav.next();
    assert_eq!(h.nav.current_index(), 3);
    assert_eq!(h.animator.offsets(), vec![100.0, 200.0, 300.0]);
}

#[test]
fn apply_dispatches_actions() {
    let h = harness();
    h.nav.apply(NavAction::GoTo(3));
    assert_eq!(h.nav.current_index(), 3);
    h.nav.apply(NavAction::Previous);
    assert_eq!(h.nav.current_index(), 2);
    h.nav.apply(NavAction::Last);
    assert_eq!(h.nav.current_index(), 4);
    h.nav.apply(NavAction::First);
    assert_eq!(h.nav.current_index(), 0);
    h.nav.apply(NavAction::Next);
    assert_eq!(h.nav.current_index(), 1);
    h.nav.apply(NavAction::GoTo(usize::MAX));
    assert_eq!(h.nav.current_index(), 4);
}

#[test]
fn settled_scroll_adopts_panel_under_center() {
    let h = harness();
    h.indicator.clear();
    h.nav.on_scroll_settled(250.0, 100.0);
    assert_eq!(h.nav.current_index(), 3);
    assert_eq!(h.indicator.calls(), vec![3]);
}

#[test]
fn settled_scroll_miss_leaves_state_alone() {
    let h = harness();
    h.nav.on_scroll_settled(150.0, 100.0);
    h.indicator.clear();
    h.nav.on_scroll_settled(460.0, 100.0); // center 510, past the last panel
    assert_eq!(h.nav.current_index(), 2);
    assert!(h.indicator.calls().is_empty());
}

#[test]
fn ticks_within_one_frame_evaluate_once_with_last_value() {
    let h = harness();
    h.indicator.clear();
    for i in 0..10 {
        // Centers walk across panels 0..=4; the last one sits in panel 3
        h.nav.on_scroll_tick(i as f64 * 30.0, 100.0);
    }
    assert_eq!(h.frames.requested(), 1);
    assert!(h.indicator.calls().is_empty());

    h.frames.run_frame();
    // Last sample: scroll_left 270, center 320
    assert_eq!(h.nav.current_index(), 3);
    assert_eq!(h.indicator.calls(), vec![3]);
}

#[test]
fn tick_matching_current_index_is_a_no_op() {
    let h = harness();
    h.indicator.clear();
    h.nav.on_scroll_tick(10.0, 100.0);
    h.frames.run_frame();
    assert!(h.indicator.calls().is_empty());
    assert_eq!(h.nav.current_index(), 0);
}

#[test]
fn each_frame_gets_its_own_evaluation() {
    let h = harness();
    h.nav.on_scroll_tick(100.0, 100.0);
    h.frames.run_frame();
    assert_eq!(h.nav.current_index(), 1);
    h.nav.on_scroll_tick(200.0, 100.0);
    h.frames.run_frame();
    assert_eq!(h.nav.current_index(), 2);
    assert_eq!(h.frames.requested(), 2);
}

#[test]
fn ticks_during_animation_do_not_move_indicator() {
    let h = harness();
    h.indicator.clear();
    h.nav.go_to(4);
    h.nav.on_scroll_tick(150.0, 100.0);
    h.frames.run_frame();
    assert_eq!(h.nav.current_index(), 4);
    assert!(h.indicator.calls().is_empty());

    h.animator.complete(0);
    h.nav.on_scroll_tick(350.0, 100.0);
    h.frames.run_frame();
    assert_eq!(h.indicator.calls(), vec![4]);
}

#[test]
fn settle_unblocks_ticks_when_animation_never_completes() {
    let h = harness();
    h.nav.go_to(2);
    h.nav.on_scroll_settled(150.0, 100.0);
    assert!(!h.nav.is_animating());

    for left in [0.0, 50.0, 350.0] {
        h.nav.on_scroll_tick(left, 100.0);
        h.frames.run_frame();
    }
    assert_eq!(h.nav.current_index(), 4);
    assert_eq!(h.indicator.calls(), vec![0, 2, 0, 1, 4]);
}

#[test]
fn completion_arriving_after_settle_is_ignored() {
    let h = harness();
    h.nav.go_to(2);
    h.nav.on_scroll_settled(350.0, 100.0);
    assert_eq!(h.nav.current_index(), 4);

    h.indicator.clear();
    h.animator.complete(0);
    assert_eq!(h.nav.current_index(), 4);
    assert!(h.indicator.calls().is_empty());
    assert_eq!(h.nav.active_indicator(), Some(4));
}

#[test]
fn missed_settle_keeps_animation_pending() {
    let h = harness();
    h.nav.go_to(3);
    h.nav.on_scroll_settled(460.0, 100.0);
    assert!(h.nav.is_animating());
    h.animator.complete(0);
    assert!(!h.nav.is_animating());
    assert_eq!(h.indicator.last(), Some(3));
}

#[test]
fn dropped_navigator_ignores_late_callbacks() {
    let h = harness();
    h.nav.go_to(2);
    h.nav.on_scroll_tick(300.0, 100.0);
    let Harness {
        nav,
        animator,
        indicator,
        frames,
    } = h;
    drop(nav);
    indicator.clear();
    animator.complete(0);
    frames.run_frame();
    assert!(indicator.calls().is_empty());
}

#[test]
fn index_from_scroll_offset_matches_example() {
    let h = harness();
    assert_eq!(h.nav.index_from_scroll_offset(250.0, 100.0), Some(3));
    assert_eq!(h.nav.index_from_scroll_offset(-100.0, 100.0), None);
}
