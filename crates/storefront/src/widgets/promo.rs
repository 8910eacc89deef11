//! Promotional spotlight carousel.

use std::time::{Duration, Instant};

use luxtive_core::{CurrencyCode, Price};
use rust_decimal::Decimal;

use super::rotation::{RotationSchedule, Rotor};

/// A promotional slide: a discounted piece with its price pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoSlide {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub original_price: Decimal,
    pub discounted_price: Decimal,
}

impl PromoSlide {
    /// The discount badge, derived from the price pair (e.g., "50% OFF").
    ///
    /// Returns `None` when the discounted price does not actually
    /// undercut the original.
    #[must_use]
    pub fn discount_label(&self) -> Option<String> {
        if self.original_price <= Decimal::ZERO || self.discounted_price >= self.original_price {
            return None;
        }
        let fraction = (self.original_price - self.discounted_price) / self.original_price;
        let percent = (fraction * Decimal::from(100)).round();
        Some(format!("{}% OFF", percent.normalize()))
    }
}

/// Formatted slide data for the spotlight view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoView {
    pub discount_label: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub original_price_display: String,
    pub discounted_price_display: String,
}

/// Project a slide into its formatted view. Pure; no widget state.
#[must_use]
pub fn project_slide(slide: &PromoSlide) -> PromoView {
    PromoView {
        discount_label: slide.discount_label().unwrap_or_default(),
        name: slide.name.clone(),
        description: slide.description.clone(),
        image_url: slide.image_url.clone(),
        original_price_display: Price::new(slide.original_price, CurrencyCode::default()).display(),
        discounted_price_display: Price::new(slide.discounted_price, CurrencyCode::default())
            .display(),
    }
}

/// The spotlight carousel: one slide visible, rotating on a fixed period.
#[derive(Debug)]
pub struct PromoCarousel {
    slides: Vec<PromoSlide>,
    rotor: Rotor,
    schedule: RotationSchedule,
}

impl PromoCarousel {
    /// Build a carousel over the given slides.
    #[must_use]
    pub fn new(slides: Vec<PromoSlide>, rotation: Duration) -> Self {
        let rotor = Rotor::new(slides.len());
        Self {
            slides,
            rotor,
            schedule: RotationSchedule::new(rotation),
        }
    }

    /// Start auto-rotation.
    pub fn start(&mut self, now: Instant) {
        self.schedule.arm(now);
    }

    /// Index of the active slide.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.rotor.current()
    }

    /// Formatted view of the active slide.
    #[must_use]
    pub fn current_view(&self) -> Option<PromoView> {
        self.slides.get(self.rotor.current()).map(project_slide)
    }

    /// Advance to the next slide (manual), resetting the interval.
    pub fn next(&mut self, now: Instant) {
        self.rotor.advance();
        self.reset_timer(now);
    }

    /// Step back to the previous slide (manual), resetting the interval.
    pub fn prev(&mut self, now: Instant) {
        self.rotor.rewind();
        self.reset_timer(now);
    }

    /// Jump to a slide (manual), resetting the interval.
    ///
    /// Out-of-range targets are ignored.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        let moved = self.rotor.move_to(index);
        if moved {
            self.reset_timer(now);
        }
        moved
    }

    /// Advance on a timer tick if the rotation deadline has passed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.schedule.fire_due(now) || self.slides.len() < 2 {
            return false;
        }
        self.rotor.advance();
        true
    }

    /// Pause rotation (pointer entered the spotlight).
    pub fn pause(&mut self) {
        self.schedule.cancel();
    }

    /// Resume rotation (pointer left).
    pub fn resume(&mut self, now: Instant) {
        if !self.schedule.is_armed() {
            self.schedule.arm(now);
        }
    }

    fn reset_timer(&mut self, now: Instant) {
        if self.schedule.is_armed() {
            self.schedule.arm(now);
        }
    }
}
