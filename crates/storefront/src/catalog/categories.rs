//! The fixed category taxonomy.
//!
//! The shop navigation exposes a handful of top-level categories; each
//! maps to the set of product sub-categories it covers. The table is
//! fixed per release, not data-driven.

/// Top-level shop categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Necklaces,
    Rings,
    Bracelets,
    Earrings,
    Watches,
    Anklets,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Necklaces,
        Self::Rings,
        Self::Bracelets,
        Self::Earrings,
        Self::Watches,
        Self::Anklets,
    ];

    /// The slug used in markup and URL query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Necklaces => "necklaces",
            Self::Rings => "rings",
            Self::Bracelets => "bracelets",
            Self::Earrings => "earrings",
            Self::Watches => "watches",
            Self::Anklets => "anklets",
        }
    }

    /// Parse a slug, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "necklaces" => Some(Self::Necklaces),
            "rings" => Some(Self::Rings),
            "bracelets" => Some(Self::Bracelets),
            "earrings" => Some(Self::Earrings),
            "watches" => Some(Self::Watches),
            "anklets" => Some(Self::Anklets),
            _ => None,
        }
    }

    /// The product sub-categories this category covers.
    #[must_use]
    pub const fn sub_categories(self) -> &'static [&'static str] {
        match self {
            Self::Necklaces => &["necklaces", "pendants", "chokers"],
            Self::Rings => &["rings", "bands"],
            Self::Bracelets => &["bracelets", "bangles", "cuffs"],
            Self::Earrings => &["earrings", "studs", "hoops"],
            Self::Watches => &["watches"],
            Self::Anklets => &["anklets"],
        }
    }

    /// Whether a product sub-category belongs to this category.
    #[must_use]
    pub fn covers(self, sub_category: &str) -> bool {
        let sub_category = sub_category.to_lowercase();
        self.sub_categories().contains(&sub_category.as_str())
    }
}
