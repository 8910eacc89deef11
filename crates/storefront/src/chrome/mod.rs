//! Cross-page navigation chrome.
//!
//! Shell behavior shared by every page: the mobile menu and mobile search
//! drawers, the cart/wishlist counter badges, toast notifications, and the
//! back-to-top control. The chrome consumes counters recomputed by the
//! cart controller; it holds no catalog logic of its own.

use std::collections::VecDeque;

/// Scroll offset (px) past which the back-to-top control shows.
const BACK_TO_TOP_THRESHOLD: u32 = 300;

/// A transient user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

/// Navigation chrome state for the current page.
#[derive(Debug, Default)]
pub struct Chrome {
    mobile_menu_open: bool,
    mobile_search_open: bool,
    cart_count: u32,
    wishlist_count: u32,
    toasts: VecDeque<Toast>,
}

impl Chrome {
    /// Fresh chrome with both drawers closed and zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mobile menu ---

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    #[must_use]
    pub const fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    // --- Mobile search ---

    pub fn toggle_mobile_search(&mut self) {
        self.mobile_search_open = !self.mobile_search_open;
    }

    pub fn close_mobile_search(&mut self) {
        self.mobile_search_open = false;
    }

    #[must_use]
    pub const fn mobile_search_open(&self) -> bool {
        self.mobile_search_open
    }

    /// Resizing past the desktop breakpoint closes both drawers.
    pub fn handle_resize(&mut self, viewport_width: u32, desktop_breakpoint: u32) {
        if viewport_width > desktop_breakpoint {
            self.close_mobile_menu();
            self.close_mobile_search();
        }
    }

    // --- Counters ---

    pub fn set_cart_count(&mut self, count: u32) {
        self.cart_count = count;
    }

    pub fn set_wishlist_count(&mut self, count: u32) {
        self.wishlist_count = count;
    }

    #[must_use]
    pub const fn cart_count(&self) -> u32 {
        self.cart_count
    }

    #[must_use]
    pub const fn wishlist_count(&self) -> u32 {
        self.wishlist_count
    }

    /// Summary line shown when the cart badge is activated.
    #[must_use]
    pub fn cart_summary(&self) -> String {
        match self.cart_count {
            0 => "Your cart is empty".to_string(),
            1 => "You have 1 item in your cart".to_string(),
            n => format!("You have {n} items in your cart"),
        }
    }

    // --- Search box ---

    /// Accept a search-box submission.
    ///
    /// Returns the trimmed term, or `None` for a blank submission. A
    /// submission from the mobile drawer closes it.
    pub fn submit_search(&mut self, raw: &str) -> Option<String> {
        let term = raw.trim();
        if term.is_empty() {
            return None;
        }
        self.close_mobile_search();
        Some(term.to_string())
    }

    // --- Toasts ---

    /// Queue a toast for the shell to display.
    pub fn push_toast(&mut self, message: impl Into<String>) {
        self.toasts.push_back(Toast {
            message: message.into(),
        });
    }

    /// Take all queued toasts, oldest first.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }

    // --- Scroll ---

    /// Whether the back-to-top control should be visible.
    #[must_use]
    pub const fn back_to_top_visible(scroll_y: u32) -> bool {
        scroll_y > BACK_TO_TOP_THRESHOLD
    }
}
