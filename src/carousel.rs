//! Looping drag carousel engine.
//!
//! The strip holds `replicas` copies of the same `item_count` items. Only the
//! horizontal offset is mutable; it is kept inside the window covered by the
//! home replica by teleporting one full replica width whenever it leaves it.
//! Nothing here touches the DOM: callers feed pointer positions and
//! timestamps in and read [`StripFrame`]s out.
//!
//! # Motion
//! Exactly one writer owns the offset at any time, tracked by [`Motion`]:
//! - `Idle`: auto-scroll may drift the strip once the cooldown has elapsed
//! - `Dragging`: the offset follows the pointer 1:1
//! - `Momentum`: inertial decay after a fling, ends in a snap
//! - `Easing`: cubic ease-out toward a target (snap or navigation)
//!
//! Starting any of them replaces whatever was running before.

use crate::config::CarouselConfig;
use log::{debug, info};

/// Direction of a button-driven step. `Left` moves the content left, which
/// brings the next item into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// How a completed pointer sequence was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f64,
    pub start_offset: f64,
    pub last_x: f64,
    pub last_time: f64,
    /// Damped px/ms, sampled on every move.
    pub velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    pub from: f64,
    pub target: f64,
    pub started_at: f64,
    /// Auto-scroll cooldown applied once the target is reached.
    pub resume_after_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Idle,
    Dragging(DragSession),
    Momentum { velocity: f64 },
    Easing(Easing),
}

/// What the view needs to position the strip for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripFrame {
    pub offset: f64,
    /// False while dragging and for the single frame following a teleport.
    pub animate: bool,
}

/// `1 - (1 - p)^3`, with `p` clamped to `[0, 1]`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

pub struct Carousel {
    config: CarouselConfig,
    item_count: usize,
    offset: f64,
    motion: Motion,
    teleported: bool,
    hovered: bool,
    resume_at: f64,
    last_gesture: Option<Gesture>,
}

impl Carousel {
    pub fn new(config: CarouselConfig, item_count: usize) -> Self {
        let mut carousel = Self {
            config,
            item_count,
            offset: 0.0,
            motion: Motion::Idle,
            teleported: false,
            hovered: false,
            resume_at: 0.0,
            last_gesture: None,
        };
        carousel.offset = carousel.bounds().1;
        info!(
            "Carousel ready: {} items x {} replicas, pitch {}px, home offset {}px",
            item_count,
            carousel.config.replicas,
            carousel.config.pitch(),
            carousel.offset
        );
        carousel
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging(_))
    }

    pub fn frame(&self) -> StripFrame {
        StripFrame {
            offset: self.offset,
            animate: !self.teleported && !self.is_dragging(),
        }
    }

    /// Width of one replica of the item set.
    pub fn set_width(&self) -> f64 {
        self.item_count as f64 * self.config.pitch()
    }

    fn home_replica(&self) -> usize {
        (self.config.replicas.max(1) - 1) / 2
    }

    /// `(lower, upper)` of the home window; valid offsets satisfy
    /// `lower < offset <= upper`.
    pub fn bounds(&self) -> (f64, f64) {
        let width = self.set_width();
        let upper = -(self.home_replica() as f64) * width;
        (upper - width, upper)
    }

    pub fn in_bounds(&self, offset: f64) -> bool {
        let (lower, upper) = self.bounds();
        self.set_width() <= 0.0 || (offset > lower && offset <= upper)
    }

    /// Shift `offset` by whole replica widths until it lies in the home window.
    pub fn wrap_value(&self, offset: f64) -> f64 {
        let width = self.set_width();
        if width <= 0.0 {
            return offset;
        }
        let (lower, upper) = self.bounds();
        if offset > upper {
            offset - ((offset - upper) / width).ceil() * width
        } else if offset <= lower {
            offset + (((lower - offset) / width).floor() + 1.0) * width
        } else {
            offset
        }
    }

    /// Boundary check. Teleports the offset into the home window unless a
    /// drag is in progress; returns whether a teleport happened.
    pub fn wrap_offset(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        let wrapped = self.wrap_value(self.offset);
        let delta = wrapped - self.offset;
        if delta == 0.0 {
            return false;
        }
        self.teleport(delta);
        true
    }

    fn teleport(&mut self, delta: f64) {
        debug!("Teleport {:+}px from offset {}", delta, self.offset);
        self.offset += delta;
        if let Motion::Easing(easing) = &mut self.motion {
            easing.from += delta;
            easing.target += delta;
        }
        self.teleported = true;
    }

    /// Nearest item position counted from the start of the strip.
    fn nearest_slot(&self) -> f64 {
        (-self.offset / self.config.pitch()).round()
    }

    /// Logical index (modulo the item count) of the item nearest the left edge.
    pub fn current_index(&self) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        (self.nearest_slot() as i64).rem_euclid(self.item_count as i64) as usize
    }

    pub fn pointer_down(&mut self, x: f64, now: f64) {
        if self.set_width() <= 0.0 {
            return;
        }
        self.motion = Motion::Dragging(DragSession {
            start_x: x,
            start_offset: self.offset,
            last_x: x,
            last_time: now,
            velocity: 0.0,
        });
        self.last_gesture = None;
    }

    /// Returns whether the offset moved.
    pub fn pointer_move(&mut self, x: f64, now: f64) -> bool {
        if self.set_width() <= 0.0 {
            return false;
        }
        let Motion::Dragging(drag) = &mut self.motion else {
            return false;
        };
        let dt = now - drag.last_time;
        if dt > 0.0 {
            drag.velocity = (x - drag.last_x) / dt * self.config.velocity_damping;
        }
        drag.last_x = x;
        drag.last_time = now;
        self.offset = drag.start_offset + (x - drag.start_x);
        true
    }

    /// Ends a drag. Returns `None` when no drag was in progress.
    pub fn pointer_up(&mut self, now: f64) -> Option<Gesture> {
        let Motion::Dragging(drag) = self.motion else {
            return None;
        };
        self.motion = Motion::Idle;

        let displacement = (drag.last_x - drag.start_x).abs();
        if displacement < self.config.tap_threshold {
            self.resume_at = now + self.config.tap_cooldown_ms;
            self.last_gesture = Some(Gesture::Tap);
            return Some(Gesture::Tap);
        }

        self.last_gesture = Some(Gesture::Drag);
        self.wrap_offset();
        let velocity = drag
            .velocity
            .clamp(-self.config.max_velocity, self.config.max_velocity);
        debug!(
            "Drag released after {:.0}px at {:.3}px/ms",
            displacement, velocity
        );
        // An empty strip has nothing to coast over.
        if velocity.abs() < self.config.min_velocity || self.set_width() <= 0.0 {
            self.snap_to_nearest(now);
        } else {
            self.motion = Motion::Momentum { velocity };
        }
        Some(Gesture::Drag)
    }

    /// The pointer left the strip or the browser cancelled it.
    pub fn pointer_cancel(&mut self, now: f64) -> Option<Gesture> {
        self.pointer_up(now)
    }

    /// True when the last completed pointer sequence was a tap, so an item
    /// under it may be activated.
    pub fn allows_activation(&self) -> bool {
        self.last_gesture == Some(Gesture::Tap)
    }

    /// Ease to the nearest pitch multiple, teleporting first when that
    /// multiple falls outside the home window.
    pub fn snap_to_nearest(&mut self, now: f64) {
        if self.set_width() <= 0.0 {
            self.motion = Motion::Idle;
            return;
        }
        let target = self.nearest_slot() * -self.config.pitch();
        let wrapped = self.wrap_value(target);
        if wrapped != target {
            self.teleport(wrapped - target);
        }
        self.animate_to(wrapped, now, self.config.drag_cooldown_ms);
    }

    pub fn animate_to(&mut self, target: f64, now: f64, resume_after_ms: f64) {
        self.motion = Motion::Easing(Easing {
            from: self.offset,
            target,
            started_at: now,
            resume_after_ms,
        });
    }

    pub fn navigate(&mut self, direction: Direction, now: f64) {
        if self.item_count == 0 || self.is_dragging() {
            return;
        }
        let slot = match direction {
            Direction::Left => self.nearest_slot() + 1.0,
            Direction::Right => self.nearest_slot() - 1.0,
        };
        self.animate_to(
            slot * -self.config.pitch(),
            now,
            self.config.navigate_cooldown_ms,
        );
    }

    /// Ease to the copy of logical item `index` closest to the current
    /// position. Out-of-range indices are ignored.
    pub fn navigate_to(&mut self, index: usize, now: f64) {
        if index >= self.item_count || self.is_dragging() {
            return;
        }
        let count = self.item_count as i64;
        let mut step = (index as i64 - self.current_index() as i64).rem_euclid(count);
        if step > count / 2 {
            step -= count;
        }
        let slot = self.nearest_slot() + step as f64;
        self.animate_to(
            slot * -self.config.pitch(),
            now,
            self.config.navigate_cooldown_ms,
        );
    }

    /// Whether the next animation frame has work: a running momentum or
    /// easing, or a teleport frame whose transition must be re-enabled.
    pub fn needs_frame(&self) -> bool {
        self.teleported || matches!(self.motion, Motion::Momentum { .. } | Motion::Easing(_))
    }

    /// Per-frame driver for momentum and easing. Returns whether anything
    /// visible changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = std::mem::take(&mut self.teleported);
        match self.motion {
            Motion::Momentum { velocity } => {
                self.offset += velocity * self.config.momentum_gain;
                let velocity = velocity * self.config.friction;
                self.motion = Motion::Momentum { velocity };
                self.wrap_offset();
                if velocity.abs() < self.config.min_velocity {
                    self.snap_to_nearest(now);
                }
                changed = true;
            }
            Motion::Easing(easing) => {
                let duration = self.config.animation_duration_ms;
                let progress = if duration > 0.0 {
                    (now - easing.started_at) / duration
                } else {
                    1.0
                };
                if progress >= 1.0 {
                    self.offset = easing.target;
                    self.motion = Motion::Idle;
                    self.wrap_offset();
                    self.resume_at = now + easing.resume_after_ms;
                } else {
                    self.offset =
                        easing.from + (easing.target - easing.from) * ease_out_cubic(progress);
                }
                changed = true;
            }
            Motion::Idle | Motion::Dragging(_) => {}
        }
        changed
    }

    /// Idle drift. Returns whether the strip moved.
    pub fn auto_scroll_tick(&mut self, now: f64) -> bool {
        if self.item_count == 0
            || self.hovered
            || self.motion != Motion::Idle
            || now < self.resume_at
        {
            return false;
        }
        self.offset -= self.config.auto_scroll_step;
        self.wrap_offset();
        true
    }

    pub fn set_hovered(&mut self, hovered: bool, now: f64) {
        self.hovered = hovered;
        if !hovered {
            self.resume_at = self.resume_at.max(now + self.config.tap_cooldown_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn config() -> CarouselConfig {
        CarouselConfig {
            item_width: 90.0,
            gap: 10.0,
            ..CarouselConfig::default()
        }
    }

    /// Ticks at 16ms intervals until motion is idle; returns the final time.
    fn settle(carousel: &mut Carousel, mut now: f64) -> f64 {
        for _ in 0..10_000 {
            if carousel.motion() == Motion::Idle {
                return now;
            }
            now += 16.0;
            carousel.tick(now);
        }
        panic!("carousel did not settle");
    }

    fn is_pitch_multiple(offset: f64, pitch: f64) -> bool {
        let slots = offset / pitch;
        (slots - slots.round()).abs() < 1e-6
    }

    #[test]
    fn starts_at_middle_replica() {
        let carousel = Carousel::new(config(), 5);
        assert_eq!(carousel.set_width(), 500.0);
        assert_eq!(carousel.bounds(), (-1000.0, -500.0));
        assert_eq!(carousel.offset(), -500.0);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.frame().animate);
    }

    #[test]
    fn two_replicas_start_at_zero() {
        let cfg = CarouselConfig {
            replicas: 2,
            ..config()
        };
        let carousel = Carousel::new(cfg, 4);
        assert_eq!(carousel.bounds(), (-400.0, 0.0));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn wrap_lands_in_window_and_is_idempotent() {
        let carousel = Carousel::new(config(), 5);
        let mut offset = -3200.0;
        while offset <= 1200.0 {
            let wrapped = carousel.wrap_value(offset);
            assert!(carousel.in_bounds(wrapped), "{offset} -> {wrapped}");
            assert_eq!(carousel.wrap_value(wrapped), wrapped);
            let shift = (wrapped - offset) / carousel.set_width();
            assert!((shift - shift.round()).abs() < 1e-9);
            offset += 37.5;
        }
    }

    #[test]
    fn window_is_half_open() {
        let carousel = Carousel::new(config(), 5);
        assert_eq!(carousel.wrap_value(-500.0), -500.0);
        assert_eq!(carousel.wrap_value(-1000.0), -500.0);
        assert_eq!(carousel.wrap_value(-499.0), -999.0);
    }

    #[test]
    fn drag_follows_pointer_without_teleporting() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(400.0, 0.0);
        assert!(carousel.pointer_move(700.0, 16.0));
        // 300px right of the home window's upper edge: left alone mid-drag.
        assert_eq!(carousel.offset(), -200.0);
        assert!(!carousel.wrap_offset());
        assert!(!carousel.frame().animate);

        carousel.pointer_move(650.0, 32.0);
        assert_eq!(carousel.offset(), -250.0);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut carousel = Carousel::new(config(), 5);
        assert!(!carousel.pointer_move(50.0, 10.0));
        assert_eq!(carousel.offset(), -500.0);
        assert_eq!(carousel.pointer_up(20.0), None);
    }

    #[test]
    fn short_sequence_is_a_tap() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(100.0, 0.0);
        carousel.pointer_move(106.0, 30.0);
        assert_eq!(carousel.pointer_up(40.0), Some(Gesture::Tap));
        assert_eq!(carousel.motion(), Motion::Idle);
        assert!(carousel.allows_activation());
    }

    #[test]
    fn threshold_distance_is_a_drag() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(100.0, 0.0);
        carousel.pointer_move(90.0, 30.0);
        assert_eq!(carousel.pointer_up(40.0), Some(Gesture::Drag));
        assert!(!carousel.allows_activation());
        assert_ne!(carousel.motion(), Motion::Idle);
    }

    #[test]
    fn net_displacement_decides_not_path_length() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(100.0, 0.0);
        carousel.pointer_move(160.0, 16.0);
        carousel.pointer_move(103.0, 32.0);
        assert_eq!(carousel.pointer_up(48.0), Some(Gesture::Tap));
    }

    #[test]
    fn fling_settles_on_pitch_inside_window() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(500.0, 0.0);
        carousel.pointer_move(420.0, 16.0);
        carousel.pointer_move(300.0, 32.0);
        assert_eq!(carousel.pointer_up(40.0), Some(Gesture::Drag));
        assert!(matches!(carousel.motion(), Motion::Momentum { .. }));

        settle(&mut carousel, 40.0);
        let offset = carousel.offset();
        assert!(carousel.in_bounds(offset), "{offset}");
        assert!(is_pitch_multiple(offset, 100.0), "{offset}");
    }

    #[test]
    fn drag_release_far_outside_window_wraps_back() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(0.0, 0.0);
        carousel.pointer_move(640.0, 100.0);
        carousel.pointer_move(640.0, 200.0);
        carousel.pointer_up(210.0);
        // -500 + 640 = 140 wraps two replicas back on release.
        assert!(carousel.in_bounds(carousel.offset()));
        assert_eq!(carousel.offset(), -860.0);
        assert!(!carousel.frame().animate);

        settle(&mut carousel, 210.0);
        assert_eq!(carousel.offset(), -900.0);
    }

    #[test]
    fn release_velocity_is_clamped() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(0.0, 0.0);
        carousel.pointer_move(-900.0, 1.0);
        carousel.pointer_up(2.0);
        assert_eq!(
            carousel.motion(),
            Motion::Momentum {
                velocity: -carousel.config().max_velocity
            }
        );
    }

    #[test]
    fn momentum_decay_matches_closed_form() {
        let cfg = config();
        let (v0, f, min, gain) = (-1.5, cfg.friction, cfg.min_velocity, cfg.momentum_gain);
        // Large catalog so no wrap interferes with the sum.
        let mut carousel = Carousel::new(cfg, 1000);
        let start = carousel.offset();
        carousel.motion = Motion::Momentum { velocity: v0 };

        let mut frames = 0;
        let mut now = 0.0;
        while matches!(carousel.motion(), Motion::Momentum { .. }) {
            now += 16.0;
            carousel.tick(now);
            frames += 1;
            assert!(frames < 10_000);
        }

        let expected = ((min / v0.abs()).ln() / f.ln()).ceil() as i32;
        assert_eq!(frames, expected);
        let travelled = carousel.offset() - start;
        let closed_form = v0 * gain * (1.0 - f.powi(frames)) / (1.0 - f);
        assert!((travelled - closed_form).abs() < 1e-6);
        assert!(matches!(carousel.motion(), Motion::Easing(_)));
    }

    #[test]
    fn easing_follows_cubic_curve() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
        assert_eq!(ease_out_cubic(2.0), 1.0);

        let mut carousel = Carousel::new(config(), 5);
        carousel.animate_to(-600.0, 0.0, 0.0);
        carousel.tick(150.0);
        assert!((carousel.offset() - (-587.5)).abs() < EPS);
        carousel.tick(300.0);
        assert_eq!(carousel.offset(), -600.0);
        assert_eq!(carousel.motion(), Motion::Idle);
    }

    #[test]
    fn snap_teleports_before_easing() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.offset = -960.0;
        carousel.snap_to_nearest(0.0);
        // Nearest multiple -1000 is outside the window; both jump one replica.
        assert_eq!(carousel.offset(), -460.0);
        assert!(!carousel.frame().animate);
        match carousel.motion() {
            Motion::Easing(easing) => assert_eq!(easing.target, -500.0),
            other => panic!("unexpected motion {other:?}"),
        }
        carousel.tick(16.0);
        assert!(carousel.frame().animate);
        settle(&mut carousel, 16.0);
        assert_eq!(carousel.offset(), -500.0);
    }

    #[test]
    fn navigate_left_advances_one_item_with_easing() {
        let mut carousel = Carousel::new(config(), 5);
        let mut now = 0.0;
        for _ in 0..2 {
            carousel.navigate(Direction::Left, now);
            now = settle(&mut carousel, now);
        }
        assert_eq!(carousel.current_index(), 2);

        carousel.navigate(Direction::Left, now);
        now += 16.0;
        carousel.tick(now);
        let midway = carousel.offset();
        assert!(midway < -700.0 && midway > -800.0, "{midway}");

        settle(&mut carousel, now);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.offset(), -800.0);
    }

    #[test]
    fn navigate_wraps_past_the_last_item() {
        let mut carousel = Carousel::new(config(), 5);
        let mut now = 0.0;
        for _ in 0..5 {
            carousel.navigate(Direction::Left, now);
            now = settle(&mut carousel, now);
            assert!(carousel.in_bounds(carousel.offset()));
        }
        assert_eq!(carousel.current_index(), 0);

        carousel.navigate(Direction::Right, now);
        settle(&mut carousel, now);
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.offset(), -900.0);
    }

    #[test]
    fn auto_scroll_waits_for_cooldown() {
        let mut carousel = Carousel::new(config(), 5);
        assert!(carousel.auto_scroll_tick(0.0));
        assert_eq!(carousel.offset(), -501.0);

        carousel.pointer_down(10.0, 100.0);
        assert!(!carousel.auto_scroll_tick(120.0));
        carousel.pointer_up(130.0);
        assert!(!carousel.auto_scroll_tick(500.0));
        assert!(carousel.auto_scroll_tick(630.0));
    }

    #[test]
    fn auto_scroll_wraps_at_lower_bound() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.offset = -999.5;
        assert!(carousel.auto_scroll_tick(0.0));
        assert_eq!(carousel.offset(), -500.5);
    }

    #[test]
    fn hover_pauses_auto_scroll() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.set_hovered(true, 0.0);
        assert!(!carousel.auto_scroll_tick(1000.0));
        carousel.set_hovered(false, 1000.0);
        assert!(!carousel.auto_scroll_tick(1200.0));
        assert!(carousel.auto_scroll_tick(1500.0));
    }

    #[test]
    fn new_drag_supersedes_animation() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.navigate(Direction::Left, 0.0);
        carousel.tick(16.0);
        let held = carousel.offset();
        carousel.pointer_down(0.0, 20.0);
        assert!(!carousel.tick(36.0));
        assert_eq!(carousel.offset(), held);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(config(), 0);
        assert_eq!(carousel.offset(), 0.0);
        assert!(!carousel.auto_scroll_tick(0.0));
        carousel.navigate(Direction::Left, 0.0);
        assert_eq!(carousel.motion(), Motion::Idle);
        carousel.navigate_to(0, 0.0);
        assert_eq!(carousel.motion(), Motion::Idle);

        carousel.pointer_down(0.0, 0.0);
        assert!(!carousel.is_dragging());
        assert!(!carousel.pointer_move(-200.0, 10.0));
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.pointer_up(20.0), None);
        assert_eq!(carousel.motion(), Motion::Idle);
        for i in 1..=5 {
            carousel.tick(20.0 + 16.0 * i as f64);
        }
        assert_eq!(carousel.offset(), 0.0);
        assert!(!carousel.needs_frame());
    }

    #[test]
    fn cancelled_drag_settles_like_a_release() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.pointer_down(0.0, 0.0);
        carousel.pointer_move(380.0, 50.0);
        carousel.pointer_move(730.0, 100.0);
        // -500 + 730 = 230: well past the upper bound.
        assert!(!carousel.in_bounds(carousel.offset()));
        assert_eq!(carousel.pointer_cancel(110.0), Some(Gesture::Drag));
        assert!(carousel.in_bounds(carousel.offset()));

        settle(&mut carousel, 110.0);
        let offset = carousel.offset();
        assert!(carousel.in_bounds(offset), "{offset}");
        assert!(is_pitch_multiple(offset, 100.0), "{offset}");
        assert!(!carousel.allows_activation());
    }

    #[test]
    fn cancel_without_drag_is_ignored() {
        let mut carousel = Carousel::new(config(), 5);
        assert_eq!(carousel.pointer_cancel(0.0), None);
        assert_eq!(carousel.motion(), Motion::Idle);
    }

    #[test]
    fn navigate_to_jumps_to_requested_item() {
        let mut carousel = Carousel::new(config(), 5);
        // Going from 0 to 3 backwards is the shorter way round.
        carousel.navigate_to(3, 0.0);
        match carousel.motion() {
            Motion::Easing(easing) => {
                assert_eq!(easing.from, -500.0);
                assert_eq!(easing.target, -300.0);
            }
            other => panic!("unexpected motion {other:?}"),
        }
        let now = settle(&mut carousel, 0.0);
        assert_eq!(carousel.current_index(), 3);
        assert!(carousel.in_bounds(carousel.offset()));
        assert_eq!(carousel.offset(), -800.0);

        carousel.navigate_to(4, now);
        settle(&mut carousel, now);
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.offset(), -900.0);
    }

    #[test]
    fn navigate_to_current_or_invalid_index_stays_put() {
        let mut carousel = Carousel::new(config(), 5);
        carousel.navigate_to(7, 0.0);
        assert_eq!(carousel.motion(), Motion::Idle);

        carousel.navigate_to(0, 0.0);
        settle(&mut carousel, 0.0);
        assert_eq!(carousel.offset(), -500.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn frames_requested_only_while_animating() {
        let mut carousel = Carousel::new(config(), 5);
        assert!(!carousel.needs_frame());
        carousel.navigate(Direction::Left, 0.0);
        assert!(carousel.needs_frame());
        settle(&mut carousel, 0.0);
        assert!(!carousel.needs_frame());

        carousel.offset = -999.5;
        carousel.auto_scroll_tick(1e9);
        assert!(carousel.needs_frame());
        carousel.tick(1e9 + 16.0);
        assert!(!carousel.needs_frame());
    }
}
