//! Mutually exclusive panel visibility with an inactivity reversion to home.
//!
//! The switcher owns the single pending reversion for the whole panel set.
//! Each arming bumps a generation counter, so a timer that fires after a
//! newer navigation is recognised as stale and ignored. The host owns the
//! actual timer and calls [`PanelSwitcher::on_reversion_timer`] when it fires;
//! tests drive [`PanelSwitcher::advance`] with simulated time instead.

use crate::config::SwitcherConfig;
use log::{debug, info, warn};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// A reversion the host should schedule `delay_ms` from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReversion {
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingReversion {
    pub generation: u64,
    pub due_at: f64,
}

pub struct PanelSwitcher<R: Rng> {
    panels: Vec<String>,
    home: String,
    active: Option<String>,
    pending: Option<PendingReversion>,
    generation: u64,
    delay_range: (u32, u32),
    rng: R,
}

impl<R: Rng> PanelSwitcher<R> {
    /// Starts with `home` active. An inverted reversion window is reordered.
    pub fn new(
        panels: Vec<String>,
        home: impl Into<String>,
        config: SwitcherConfig,
        rng: R,
    ) -> Self {
        let home = home.into();
        let low = config.reversion_min_ms.min(config.reversion_max_ms);
        let high = config.reversion_min_ms.max(config.reversion_max_ms);
        let active = panels.iter().find(|p| **p == home).cloned();
        if active.is_none() {
            warn!("Home panel '{}' is not among {} panels", home, panels.len());
        }
        Self {
            panels,
            home,
            active,
            pending: None,
            generation: 0,
            delay_range: (low, high),
            rng,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn pending(&self) -> Option<PendingReversion> {
        self.pending
    }

    /// Makes `id` the only active panel and rearms the reversion.
    ///
    /// An unknown `id` leaves no panel active; the reversion is still armed
    /// so the kiosk finds its way back home.
    pub fn show_panel(&mut self, id: &str, now: f64) -> Option<ScheduledReversion> {
        self.active = self.panels.iter().find(|p| *p == id).cloned();
        match &self.active {
            Some(active) => info!("Showing panel '{}'", active),
            None => warn!("No panel with id '{}', all panels hidden", id),
        }

        self.generation += 1;
        self.pending = None;
        if id == self.home {
            return None;
        }

        let (low, high) = self.delay_range;
        let delay_ms = Uniform::new_inclusive(low, high)
            .map(|window| window.sample(&mut self.rng))
            .unwrap_or(low);
        self.pending = Some(PendingReversion {
            generation: self.generation,
            due_at: now + delay_ms as f64,
        });
        debug!("Reversion #{} armed for {}ms", self.generation, delay_ms);
        Some(ScheduledReversion {
            generation: self.generation,
            delay_ms,
        })
    }

    /// Timer callback. Returns whether the switcher went back to home.
    pub fn on_reversion_timer(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(pending) if pending.generation == generation => {}
            _ => {
                debug!("Ignoring stale reversion #{}", generation);
                return false;
            }
        }
        self.pending = None;
        if self.is_active(&self.home) {
            return false;
        }
        let home = self.home.clone();
        info!("Inactivity timeout, returning to '{}'", home);
        self.show_panel(&home, 0.0);
        true
    }

    /// Fires the pending reversion if its deadline has passed by `now`.
    pub fn advance(&mut self, now: f64) -> bool {
        match self.pending {
            Some(pending) if now >= pending.due_at => self.on_reversion_timer(pending.generation),
            _ => false,
        }
    }
}
