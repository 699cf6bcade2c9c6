//! Filter and sort state for the product list.

use std::collections::BTreeSet;

use crate::{AppError, Product, ProductId, Result};

/// Minimum-rating choices the page offers, highest first.
pub const RATING_THRESHOLDS: [f64; 4] = [4.5, 4.0, 3.5, 3.0];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (any case) selects every category; anything else is an exact category name.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    #[default]
    None,
    /// Price low to high.
    Asc,
    /// Price high to low.
    Desc,
}

/// The page's filter controls. Filters apply in a fixed order: category, minimum rating,
/// favorites only, then the price sort.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    pub category: CategoryFilter,
    min_rating: Option<f64>,
    pub sort: SortOrder,
    pub favorites_only: bool,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_min_rating(mut self, min_rating: Option<f64>) -> Result<Self> {
        self.set_min_rating(min_rating)?;
        Ok(self)
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    pub fn min_rating(&self) -> Option<f64> {
        self.min_rating
    }

    /// `None` means "all ratings". Negative or NaN thresholds are rejected.
    pub fn set_min_rating(&mut self, min_rating: Option<f64>) -> Result<()> {
        if let Some(r) = min_rating {
            if r.is_nan() || r < 0.0 {
                return Err(AppError::InvalidArgument(format!(
                    "minimum rating must be a non-negative number, got {r}"
                )));
            }
        }
        self.min_rating = min_rating;
        Ok(())
    }

    /// Restores every control to its default ("all", no sort, favorites off).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the products that pass every filter, in display order.
    ///
    /// The price sort is stable: equal prices keep their catalog order.
    pub fn apply<'a>(
        &self,
        products: &'a [Product],
        is_favorite: impl Fn(&ProductId) -> bool,
    ) -> Vec<&'a Product> {
        let mut list: Vec<&Product> = products
            .iter()
            .filter(|p| self.category.matches(&p.category))
            .filter(|p| self.min_rating.is_none_or(|min| p.rating >= min))
            .filter(|p| !self.favorites_only || is_favorite(&p.id))
            .collect();

        match self.sort {
            SortOrder::None => {}
            SortOrder::Asc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::Desc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        list
    }
}

/// Distinct categories present in `products`, sorted ascending.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
