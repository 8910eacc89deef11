//! Hero orbital: the landing page's rotating centerpiece.

use std::time::{Duration, Instant};

use super::rotation::{RotationSchedule, Rotor};

/// A product slot on the orbital ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroProduct {
    /// Stable slug used by the navigation dots (`data-target`).
    pub slug: String,
    pub name: String,
    pub price_display: String,
    pub image: String,
}

/// The orbital system: a ring of products rotating around a centerpiece.
///
/// Auto-rotation advances the ring on a fixed period. Manual selection
/// (dots or orbiting items) resets the interval; while the switch
/// animation is in flight further selections and auto-advances are
/// ignored. Hovering the system pauses rotation, leaving resumes it.
#[derive(Debug)]
pub struct HeroOrbital {
    products: Vec<HeroProduct>,
    rotor: Rotor,
    schedule: RotationSchedule,
    animation: Duration,
    animating_until: Option<Instant>,
}

impl HeroOrbital {
    /// Build an orbital over the given ring.
    #[must_use]
    pub fn new(products: Vec<HeroProduct>, rotation: Duration, animation: Duration) -> Self {
        let rotor = Rotor::new(products.len());
        Self {
            products,
            rotor,
            schedule: RotationSchedule::new(rotation),
            animation,
            animating_until: None,
        }
    }

    /// Start auto-rotation.
    pub fn start(&mut self, now: Instant) {
        self.schedule.arm(now);
    }

    /// The product currently in the center.
    #[must_use]
    pub fn current(&self) -> Option<&HeroProduct> {
        self.products.get(self.rotor.current())
    }

    /// Select a product by slug.
    ///
    /// Returns whether the selection took effect; re-selecting the
    /// current product or selecting mid-animation does nothing. A
    /// successful selection resets the rotation interval.
    pub fn select(&mut self, slug: &str, now: Instant) -> bool {
        if self.is_animating(now) {
            return false;
        }
        let Some(target) = self.products.iter().position(|p| p.slug == slug) else {
            return false;
        };
        if target == self.rotor.current() {
            return false;
        }

        self.rotor.move_to(target);
        self.animating_until = Some(now + self.animation);
        if self.schedule.is_armed() {
            self.schedule.arm(now);
        }
        true
    }

    /// Advance on a timer tick if the rotation deadline has passed.
    ///
    /// Returns whether the center product changed. A tick landing inside
    /// the switch animation is swallowed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.schedule.fire_due(now) {
            return false;
        }
        if self.is_animating(now) || self.products.len() < 2 {
            return false;
        }
        self.rotor.advance();
        self.animating_until = Some(now + self.animation);
        true
    }

    /// Pause rotation (pointer entered the orbital system).
    pub fn pause(&mut self) {
        self.schedule.cancel();
    }

    /// Resume rotation (pointer left).
    pub fn resume(&mut self, now: Instant) {
        if !self.schedule.is_armed() {
            self.schedule.arm(now);
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.animating_until.is_some_and(|until| now < until)
    }
}
