//! View rendering.
//!
//! Every fragment is an askama template rendered to a markup string and
//! pushed through a [`Surface`], the page's rendering collaborator.
//! Rendering is idempotent: the same input sequence always yields the same
//! markup, and a render replaces the surface's content wholesale (no
//! incremental diffing). Dynamic product text only ever reaches markup
//! through askama's HTML escaping.
//!
//! Each product card carries the denormalized product data as `data-*`
//! attributes so quick-view, compare, and add-to-cart handlers never need
//! to re-fetch the catalog.

use askama::Template;
use luxtive_core::{CurrencyCode, Price, ProductId, format_metals};
use rust_decimal::Decimal;

use crate::cart::CartLineItem;
use crate::catalog::{FetchError, Product};
use crate::widgets::PromoView;

/// The rendering surface the page shell exposes.
///
/// In the browser embedding this replaces a container element's children;
/// [`BufferSurface`] backs tests.
pub trait Surface {
    /// Replace the surface's entire content with the given markup.
    fn replace_content(&mut self, markup: &str);
}

/// A [`Surface`] that captures markup in memory.
#[derive(Debug, Default)]
pub struct BufferSurface {
    contents: String,
}

impl BufferSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The markup currently on the surface.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Surface for BufferSurface {
    fn replace_content(&mut self, markup: &str) {
        self.contents.clear();
        self.contents.push_str(markup);
    }
}

/// Card display data projected from a catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ProductId,
    pub name: String,
    /// Effective price, formatted for display.
    pub price_display: String,
    /// List price, formatted, when the product is on sale.
    pub original_price_display: Option<String>,
    /// Effective price as a bare number for the `data-price` attribute.
    pub effective_price: String,
    pub image_url: String,
    pub metal: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
}

impl CardView {
    /// Project a catalog product into card display data.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price_display: display_price(product.effective_price()),
            original_price_display: product
                .promo_price
                .is_some()
                .then(|| display_price(product.price)),
            effective_price: product.effective_price().normalize().to_string(),
            image_url: product.image_url.clone(),
            metal: format_metals(&product.metals),
            description: product.description.clone(),
            category: product.category.clone(),
            sub_category: product.sub_category.clone(),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub metal: String,
    pub image_url: String,
    /// Unit price as a bare number for the `data-price` attribute.
    pub unit_price: String,
    pub unit_price_display: String,
    pub quantity: u32,
    pub subtotal_display: String,
}

impl CartLineView {
    /// Project a persisted line item into display data.
    #[must_use]
    pub fn from_line(line: &CartLineItem) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            metal: line.metal.clone(),
            image_url: line.image_url.clone(),
            unit_price: line.unit_price.normalize().to_string(),
            unit_price_display: display_price(line.unit_price),
            quantity: line.quantity,
            subtotal_display: display_price(line.subtotal()),
        }
    }
}

fn display_price(amount: Decimal) -> String {
    Price::new(amount, CurrencyCode::default()).display()
}

// =============================================================================
// Templates
// =============================================================================

#[derive(Template)]
#[template(path = "product_grid.html")]
struct ProductGridTemplate<'a> {
    cards: &'a [CardView],
}

#[derive(Template)]
#[template(path = "empty_state.html")]
struct EmptyStateTemplate;

#[derive(Template)]
#[template(path = "loading_state.html")]
struct LoadingStateTemplate;

#[derive(Template)]
#[template(path = "error_panel.html")]
struct ErrorPanelTemplate {
    message: String,
}

#[derive(Template)]
#[template(path = "cart_list.html")]
struct CartListTemplate<'a> {
    lines: &'a [CartLineView],
    subtotal_display: String,
}

#[derive(Template)]
#[template(path = "empty_cart.html")]
struct EmptyCartTemplate;

#[derive(Template)]
#[template(path = "quick_view.html")]
struct QuickViewTemplate<'a> {
    card: &'a CardView,
}

#[derive(Template)]
#[template(path = "compare_tray.html")]
struct CompareTrayTemplate<'a> {
    cards: &'a [CardView],
}

#[derive(Template)]
#[template(path = "promo_slide.html")]
struct PromoSlideTemplate<'a> {
    view: &'a PromoView,
}

// =============================================================================
// Render entry points
// =============================================================================

/// Render a filtered product sequence, or the explicit empty state.
///
/// # Errors
///
/// Returns `askama::Error` if template rendering fails.
pub fn render_catalog(surface: &mut dyn Surface, products: &[Product]) -> askama::Result<()> {
    if products.is_empty() {
        surface.replace_content(&EmptyStateTemplate.render()?);
        return Ok(());
    }

    let cards: Vec<CardView> = products.iter().map(CardView::from_product).collect();
    let markup = ProductGridTemplate { cards: &cards }.render()?;
    surface.replace_content(&markup);
    Ok(())
}

/// Render the loading state shown while the catalog fetch is in flight.
///
/// # Errors
///
/// Returns `askama::Error` if template rendering fails.
pub fn render_loading(surface: &mut dyn Surface) -> askama::Result<()> {
    surface.replace_content(&LoadingStateTemplate.render()?);
    Ok(())
}

/// Render the fetch-error panel offering a manual reload.
///
/// # Errors
///
/// Returns `askama::Error` if template rendering fails.
pub fn render_fetch_error(surface: &mut dyn Surface, error: &FetchError) -> askama::Result<()> {
    let markup = ErrorPanelTemplate {
        message: error.to_string(),
    }
    .render()?;
    surface.replace_content(&markup);
    Ok(())
}

/// Render the cart page list, or the empty-bag placeholder.
///
/// # Errors
///
/// Returns `askama::Error` if template rendering fails.
pub fn render_cart(surface: &mut dyn Surface, lines: &[CartLineItem]) -> askama::Result<()> {
    if lines.is_empty() {
        surface.replace_content(&EmptyCartTemplate.render()?);
        return Ok(());
    }

    let views: Vec<CartLineView> = lines.iter().map(CartLineView::from_line).collect();
    let subtotal: Decimal = lines.iter().map(CartLineItem::subtotal).sum();
    let markup = CartListTemplate {
        lines: &views,
        subtotal_display: display_price(subtotal),
    }
    .render()?;
    surface.replace_content(&markup);
    Ok(())
}

/// Render the quick-view modal body for one card.
///
/// # Errors
///
/// Returns `askama::Error` if template rendering fails.
pub fn render_quick_view(surface: &mut dyn Surface, card: &CardView) -> askama::Result<()> {
    surface.replace_content(&QuickViewTemplate { card }.render()?);
    Ok(())
}

/// Render the compare modal body for the selected cards.
///
/// # Errors
///
/// Returns `askama::Error` if template rendering fails.
pub fn render_compare(surface: &mut dyn Surface, cards: &[CardView]) -> askama::Result<()> {
    surface.replace_content(&CompareTrayTemplate { cards }.render()?);
    Ok(())
}

/// Render the promo spotlight for the active slide.
///
/// # Errors
///
/// Returns `askama::Error` if template rendering fails.
pub fn render_promo(surface: &mut dyn Surface, view: &PromoView) -> askama::Result<()> {
    surface.replace_content(&PromoSlideTemplate { view }.render()?);
    Ok(())
}
