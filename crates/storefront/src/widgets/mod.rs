//! Merchandising widgets.
//!
//! Self-contained, timer-driven components, independent of catalog state.
//! The rotation concern (a pure index cursor plus a deterministic timer
//! model) is kept separate from data formatting (pure projection
//! functions); the two compose at the view layer.
//!
//! The page shell owns the real clock: it forwards timer ticks, hover,
//! and click events with an explicit `Instant`, which keeps every widget
//! deterministic under test. Each widget holds at most one live rotation
//! deadline at any time.

mod compare;
mod grid;
mod hero;
mod promo;
mod rotation;

pub use compare::{CompareSelection, CompareTray};
pub use grid::GridPager;
pub use hero::{HeroOrbital, HeroProduct};
pub use promo::{PromoCarousel, PromoSlide, PromoView, project_slide};
pub use rotation::{RotationSchedule, Rotor};
