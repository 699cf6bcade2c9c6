//! The product page: load lifecycle, favorites and filters in one owned state object.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::query::categories;
use crate::{CatalogSource, Favorites, KeyValueStore, Product, ProductId, ProductQuery, Result};

#[derive(Debug, Default)]
enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

#[derive(Debug, Default)]
struct LoadSlot {
    generation: u64,
    state: LoadState,
}

/// Permission to publish the result of one catalog fetch.
///
/// The ticket only holds a weak reference to the page, and a page that started a newer load
/// rejects older tickets, so a fetch finishing late never overwrites newer state.
#[derive(Debug)]
#[must_use = "a load ticket does nothing unless completed"]
pub struct LoadTicket {
    slot: Weak<RefCell<LoadSlot>>,
    generation: u64,
}

impl LoadTicket {
    /// Whether completing this ticket would still update its page.
    pub fn is_live(&self) -> bool {
        self.slot
            .upgrade()
            .is_some_and(|slot| slot.borrow().generation == self.generation)
    }

    /// Applies the fetch result. Returns `false` (and changes nothing) for a stale ticket.
    pub fn complete(self, result: Result<Vec<Product>>) -> bool {
        let Some(slot) = self.slot.upgrade() else {
            tracing::debug!(generation = self.generation, "page gone; dropping load result");
            return false;
        };
        let mut slot = slot.borrow_mut();
        if slot.generation != self.generation {
            tracing::debug!(
                generation = self.generation,
                current = slot.generation,
                "superseded load result dropped"
            );
            return false;
        }
        slot.state = match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "products loaded");
                LoadState::Loaded(products)
            }
            Err(err) => {
                tracing::warn!(%err, "catalog load failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }
}

/// What the page shows, in priority order: loading, then error, then results.
#[derive(Clone, Debug, PartialEq)]
pub enum PageView {
    Loading,
    Error(String),
    /// Products are loaded but none pass the current filters.
    NoMatches,
    Products(Vec<Product>),
}

impl PageView {
    /// Number of products shown (0 for every non-product state).
    pub fn product_count(&self) -> usize {
        match self {
            PageView::Products(items) => items.len(),
            _ => 0,
        }
    }

    pub fn showing_label(&self) -> String {
        format!("Showing {} products", self.product_count())
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageView::Loading => f.write_str("Loading..."),
            PageView::Error(message) => write!(f, "Error: {message}"),
            PageView::NoMatches => f.write_str("No products match your filters."),
            PageView::Products(_) => f.write_str(&self.showing_label()),
        }
    }
}

/// Owns everything the product page needs: the catalog load, the favorites and the filters.
#[derive(Debug)]
pub struct ProductPage<S> {
    load: Rc<RefCell<LoadSlot>>,
    favorites: Favorites<S>,
    query: ProductQuery,
}

impl<S: KeyValueStore> ProductPage<S> {
    pub fn new(favorites: Favorites<S>) -> Self {
        Self {
            load: Rc::new(RefCell::new(LoadSlot::default())),
            favorites,
            query: ProductQuery::default(),
        }
    }

    /// Marks the page as loading and returns the ticket the fetch result must be delivered with.
    ///
    /// Starting a new load invalidates every earlier ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        let mut slot = self.load.borrow_mut();
        slot.generation = slot.generation.wrapping_add(1);
        slot.state = LoadState::Loading;
        LoadTicket {
            slot: Rc::downgrade(&self.load),
            generation: slot.generation,
        }
    }

    /// Fetches from `source` and applies the result. Errors end up in the page's error state.
    pub async fn load_from(&mut self, source: &impl CatalogSource) {
        let ticket = self.begin_load();
        tracing::debug!(source = %source.describe(), "loading catalog");
        let result = source.fetch_products().await;
        ticket.complete(result);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load.borrow().state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<String> {
        match &self.load.borrow().state {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Loaded products in catalog order; empty before a successful load.
    pub fn products(&self) -> Vec<Product> {
        match &self.load.borrow().state {
            LoadState::Loaded(products) => products.clone(),
            _ => Vec::new(),
        }
    }

    pub fn categories(&self) -> Vec<String> {
        match &self.load.borrow().state {
            LoadState::Loaded(products) => categories(products),
            _ => Vec::new(),
        }
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut ProductQuery {
        &mut self.query
    }

    pub fn reset_filters(&mut self) {
        self.query.reset();
    }

    pub fn favorites(&self) -> &Favorites<S> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn toggle_favorite(&mut self, id: ProductId) -> Result<bool> {
        self.favorites.toggle(id)
    }

    pub fn clear_favorites(&mut self) -> Result<()> {
        self.favorites.clear()
    }

    /// Products passing the current filters, in display order.
    pub fn visible_products(&self) -> Vec<Product> {
        match &self.load.borrow().state {
            LoadState::Loaded(products) => self
                .query
                .apply(products, |id| self.favorites.contains(id))
                .into_iter()
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn view(&self) -> PageView {
        match &self.load.borrow().state {
            LoadState::Idle | LoadState::Loading => return PageView::Loading,
            LoadState::Failed(message) => return PageView::Error(message.clone()),
            LoadState::Loaded(_) => {}
        }
        let items = self.visible_products();
        if items.is_empty() {
            PageView::NoMatches
        } else {
            PageView::Products(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppError, MemoryStore, query::CategoryFilter};

    fn page() -> ProductPage<MemoryStore> {
        ProductPage::new(Favorites::load(MemoryStore::new()).unwrap())
    }

    fn product(id: u64, category: &str) -> Product {
        Product {
            id: ProductId::Num(id),
            title: format!("p{id}"),
            price: id as f64,
            rating: 4.0,
            category: category.to_string(),
            thumbnail: String::new(),
        }
    }

    #[test]
    fn view_follows_the_load_lifecycle() {
        let mut page = page();
        assert_eq!(page.view(), PageView::Loading);

        let ticket = page.begin_load();
        assert!(page.is_loading());
        assert!(ticket.complete(Ok(vec![product(1, "a"), product(2, "b")])));
        assert!(!page.is_loading());
        assert_eq!(page.view().product_count(), 2);
        assert_eq!(page.view().to_string(), "Showing 2 products");
        assert_eq!(page.categories(), vec!["a", "b"]);

        page.query_mut().category = CategoryFilter::Only("zzz".into());
        assert_eq!(page.view(), PageView::NoMatches);
        page.reset_filters();
        assert_eq!(page.view().product_count(), 2);
    }

    #[test]
    fn failed_load_shows_the_error() {
        let mut page = page();
        let ticket = page.begin_load();
        assert!(ticket.complete(Err(AppError::Status(500))));
        assert_eq!(page.error().as_deref(), Some("Request failed: 500"));
        assert_eq!(page.view().to_string(), "Error: Request failed: 500");
        assert!(page.products().is_empty());
    }

    #[test]
    fn superseded_ticket_is_ignored() {
        let mut page = page();
        let old = page.begin_load();
        let new = page.begin_load();
        assert!(!old.is_live());
        assert!(new.is_live());

        assert!(new.complete(Ok(vec![product(1, "a")])));
        assert!(!old.complete(Ok(vec![product(2, "b"), product(3, "b")])));
        assert_eq!(page.products().len(), 1);
    }

    #[test]
    fn ticket_outliving_its_page_is_harmless() {
        let mut page = page();
        let ticket = page.begin_load();
        drop(page);
        assert!(!ticket.is_live());
        assert!(!ticket.complete(Ok(vec![product(1, "a")])));
    }

    #[test]
    fn favorites_only_tracks_toggles() {
        let mut page = page();
        let ticket = page.begin_load();
        assert!(ticket.complete(Ok(vec![product(1, "a"), product(2, "a")])));
        page.query_mut().favorites_only = true;
        assert_eq!(page.view(), PageView::NoMatches);

        assert!(page.toggle_favorite(ProductId::Num(2)).unwrap());
        assert_eq!(page.view(), PageView::Products(vec![product(2, "a")]));
        assert_eq!(page.favorites().len(), 1);

        page.clear_favorites().unwrap();
        assert_eq!(page.view(), PageView::NoMatches);
    }
}
