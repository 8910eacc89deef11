//! Compare tray: side-by-side product comparison.

use luxtive_core::ProductId;

use crate::render::CardView;

/// Result of toggling a card in the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSelection {
    /// The card was added to the tray.
    Selected,
    /// The card was already in the tray and has been removed.
    Deselected,
    /// The tray is at capacity; the card was not added.
    TrayFull,
}

/// Selections for the compare modal, capped at a fixed capacity.
///
/// Toggling a selected card removes it. Reaching capacity is the signal
/// to show the comparison; closing the modal clears the tray.
#[derive(Debug)]
pub struct CompareTray {
    capacity: usize,
    cards: Vec<CardView>,
}

impl CompareTray {
    /// An empty tray holding at most `capacity` cards.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cards: Vec::new(),
        }
    }

    /// Toggle a card in or out of the tray.
    pub fn toggle(&mut self, card: CardView) -> CompareSelection {
        if let Some(position) = self.cards.iter().position(|c| c.id == card.id) {
            self.cards.remove(position);
            return CompareSelection::Deselected;
        }
        if self.cards.len() >= self.capacity {
            return CompareSelection::TrayFull;
        }
        self.cards.push(card);
        CompareSelection::Selected
    }

    /// Whether a product is currently selected.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// The selected cards, in selection order.
    #[must_use]
    pub fn selections(&self) -> &[CardView] {
        &self.cards
    }

    /// Whether the tray has reached capacity (time to show the modal).
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// Whether a comparison makes sense (two or more selections).
    #[must_use]
    pub fn is_comparable(&self) -> bool {
        self.cards.len() >= 2
    }

    /// Drop all selections (modal closed).
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
