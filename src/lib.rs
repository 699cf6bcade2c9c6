//! Browse a product catalog through a virtualized card grid.
//!
//! The catalog is fetched once (HTTP or a local JSON file), filtered and sorted by a
//! [`ProductQuery`], and rendered with the `vgrid` engine so only the cards inside the visible
//! window are ever built. Favorites persist locally through a [`KeyValueStore`].
//!
//! The pieces, leaves first:
//! - [`catalog`]: where products come from
//! - [`store`] and [`favorites`]: local persistence
//! - [`query`]: category, rating, favorites-only and price-sort controls
//! - [`page`]: the load lifecycle and the page's view state
//! - [`render`]: product cards and the windowed [`CardGrid`]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod layout;
pub mod page;
pub mod product;
pub mod query;
pub mod render;
pub mod store;

pub use catalog::{CatalogSource, DEFAULT_CATALOG_URL, FileCatalog, HttpCatalog};
pub use config::Config;
pub use error::{AppError, Result};
pub use favorites::{FAVORITES_KEY, Favorites};
pub use page::{LoadTicket, PageView, ProductPage};
pub use product::{CatalogResponse, Product, ProductId};
pub use query::{CategoryFilter, ProductQuery, RATING_THRESHOLDS, SortOrder, categories};
pub use render::{Card, CardGrid, GridFrame, PlacedCard};
pub use store::{FileStore, KeyValueStore, MemoryStore};
