//! The filter/sort/search engine.
//!
//! [`apply`] is a pure function from the catalog snapshot and a
//! [`FilterState`] to an ordered subset. Filters are conjunctive; the
//! feature filter and the metal filter are each disjunctive internally.
//! Applying the same state twice reaches a fixed point.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::categories::Category;
use super::types::Product;

/// Category constraint: everything, or one category from the taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Feature predicates selectable in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Featured,
    Bestseller,
    Sale,
}

impl Feature {
    /// The slug used in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Bestseller => "bestseller",
            Self::Sale => "sale",
        }
    }

    /// Parse a slug, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "featured" => Some(Self::Featured),
            "bestseller" => Some(Self::Bestseller),
            "sale" => Some(Self::Sale),
            _ => None,
        }
    }

    /// Whether a product satisfies this feature.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::Featured => product.featured,
            Self::Bestseller => product.bestseller,
            Self::Sale => product.on_sale(),
        }
    }
}

/// Sort order for the filtered subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Featured,
    Newest,
    Bestseller,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// The value used by the sort-by select control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Newest => "newest",
            Self::Bestseller => "bestseller",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Parse a select-control value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(Self::Featured),
            "newest" => Some(Self::Newest),
            "bestseller" => Some(Self::Bestseller),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            _ => None,
        }
    }
}

/// The page-session browsing state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Selected metals, normalized lowercase. Empty means no constraint.
    pub metals: BTreeSet<String>,
    /// Selected features. Empty means no constraint.
    pub features: BTreeSet<Feature>,
    /// Ceiling on the effective price.
    pub max_price: Decimal,
    /// Free-text search term. Blank means no constraint.
    pub search: String,
    pub sort: SortKey,
}

impl FilterState {
    /// A fresh state with the given price-slider ceiling.
    #[must_use]
    pub fn with_ceiling(max_price: Decimal) -> Self {
        Self {
            max_price,
            ..Self::default()
        }
    }

    /// Toggle a metal in or out of the selection.
    pub fn toggle_metal(&mut self, metal: &str) {
        let metal = metal.trim().to_lowercase();
        if !self.metals.remove(&metal) {
            self.metals.insert(metal);
        }
    }

    /// Toggle a feature in or out of the selection.
    pub fn toggle_feature(&mut self, feature: Feature) {
        if !self.features.remove(&feature) {
            self.features.insert(feature);
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            metals: BTreeSet::new(),
            features: BTreeSet::new(),
            max_price: Decimal::MAX,
            search: String::new(),
            sort: SortKey::Featured,
        }
    }
}

/// Apply the filter state to a catalog snapshot.
///
/// Filters are conjunctive and applied in a fixed order: category, price
/// ceiling, metal overlap, feature disjunction, then the text search. The
/// sort afterwards is stable, so ties keep their fetched order.
#[must_use]
pub fn apply(products: &[Product], state: &FilterState) -> Vec<Product> {
    let term = state.search.trim().to_lowercase();

    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| matches_category(p, state.category))
        .filter(|p| p.effective_price() <= state.max_price)
        .filter(|p| matches_metals(p, &state.metals))
        .filter(|p| matches_features(p, &state.features))
        .filter(|p| matches_search(p, &term))
        .cloned()
        .collect();

    match state.sort {
        SortKey::PriceAsc => matched.sort_by_key(Product::effective_price),
        SortKey::PriceDesc => {
            matched.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
        }
        SortKey::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Bestseller => matched.sort_by_key(|p| !p.bestseller),
        SortKey::Featured => matched.sort_by_key(|p| !p.featured),
    }

    matched
}

fn matches_category(product: &Product, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => category.covers(&product.sub_category),
    }
}

fn matches_metals(product: &Product, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || product.metals.iter().any(|m| selected.contains(m))
}

fn matches_features(product: &Product, selected: &BTreeSet<Feature>) -> bool {
    selected.is_empty() || selected.iter().any(|f| f.matches(product))
}

fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.sub_category.to_lowercase().contains(term)
        || product.metals.iter().any(|m| m.contains(term))
}
