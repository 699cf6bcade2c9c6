//! Product cards and the windowed card grid.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use vgrid::{Align, GridCell, ScrollOffset, SyncReport, VisibleWindow};
use vgrid_adapter::{GridController, ResizeSource};

use crate::{Product, ProductId, layout};

/// The presentable form of one product.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub rating: String,
    pub category: String,
    pub thumbnail: String,
    pub favorited: bool,
}

impl Card {
    pub fn new(product: &Product, favorited: bool) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: format!("₹ {}", product.price),
            rating: format!("⭐ {}", product.rating),
            category: product.category.clone(),
            thumbnail: product.thumbnail.clone(),
            favorited,
        }
    }

    pub fn marker(&self) -> &'static str {
        if self.favorited { "♥" } else { "♡" }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}  {}  {}  [{}]",
            self.marker(),
            self.title,
            self.price,
            self.rating,
            self.category
        )
    }
}

/// A materialized grid slot: its geometry plus the card in it (`None` for padding slots).
#[derive(Clone, Debug, Serialize)]
pub struct PlacedCard {
    #[serde(flatten)]
    pub cell: GridCell,
    pub card: Option<Card>,
}

/// Serializable snapshot of what the grid currently shows.
#[derive(Clone, Debug, Serialize)]
pub struct GridFrame {
    pub columns: usize,
    pub rows: usize,
    pub total_width: u64,
    pub total_height: u64,
    pub scroll_top: u64,
    pub window: VisibleWindow,
    pub cells: Vec<PlacedCard>,
}

/// The product grid: cards rendered through a [`GridController`] so only the visible window is
/// materialized and only changed cards are rebuilt between frames.
pub struct CardGrid<S: ResizeSource> {
    controller: GridController<S, ProductId, Card>,
}

impl<S: ResizeSource> CardGrid<S> {
    /// Mounts a grid with the page's card layout.
    pub fn mount(source: &Rc<S>) -> Self {
        Self {
            controller: GridController::mount(layout::card_grid_options(), source),
        }
    }

    /// Renders the visible window of `products`.
    pub fn sync(
        &mut self,
        products: &[Product],
        is_favorite: impl Fn(&ProductId) -> bool,
    ) -> SyncReport {
        let report = self.controller.sync(
            products,
            |p| p.id.clone(),
            |p| Card::new(p, is_favorite(&p.id)),
        );
        tracing::debug!(
            rendered = report.rendered,
            reused = report.reused,
            released = report.released,
            "card grid synced"
        );
        report
    }

    pub fn scroll_to(&mut self, top: u64) -> bool {
        self.controller.on_scroll(ScrollOffset::vertical(top))
    }

    pub fn scroll_to_product(&mut self, index: usize) -> u64 {
        self.controller.scroll_to_index(index, Align::Start)
    }

    /// A favorite flag changed outside the item list; its card is rebuilt on the next sync.
    pub fn favorite_changed(&mut self, id: &ProductId) {
        self.controller.invalidate_key(id);
    }

    pub fn frame(&self) -> GridFrame {
        let grid = self.controller.grid();
        let total = grid.total_size();
        GridFrame {
            columns: grid.column_count(),
            rows: grid.row_count(),
            total_width: total.width,
            total_height: total.height,
            scroll_top: grid.scroll_offset().top,
            window: grid.visible_window(),
            cells: self
                .controller
                .cells()
                .iter()
                .map(|(cell, card)| PlacedCard {
                    cell: *cell,
                    card: card.cloned(),
                })
                .collect(),
        }
    }

    pub fn unmount(self) {
        self.controller.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgrid::ViewportSize;
    use vgrid_adapter::ResizeEvents;

    fn products(n: u64) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                id: ProductId::Num(i),
                title: format!("Item {i}"),
                price: 10.0 + i as f64,
                rating: 4.5,
                category: "beauty".into(),
                thumbnail: String::new(),
            })
            .collect()
    }

    #[test]
    fn card_text_matches_the_page() {
        let p = &products(1)[0];
        let card = Card::new(p, false);
        assert_eq!(card.price, "₹ 10");
        assert_eq!(card.rating, "⭐ 4.5");
        assert_eq!(card.to_string(), "♡ Item 0  ₹ 10  ⭐ 4.5  [beauty]");
        assert_eq!(Card::new(p, true).marker(), "♥");
    }

    #[test]
    fn favorite_toggle_rebuilds_only_that_card() {
        let window = Rc::new(ResizeEvents::new(ViewportSize::new(1280, 900)));
        let mut grid = CardGrid::mount(&window);
        let items = products(100);
        let mut favs: Vec<ProductId> = Vec::new();

        let r = grid.sync(&items, |id| favs.contains(id));
        assert_eq!(r.rendered, 24);

        favs.push(ProductId::Num(5));
        grid.favorite_changed(&ProductId::Num(5));
        let r = grid.sync(&items, |id| favs.contains(id));
        assert_eq!((r.rendered, r.reused), (1, 23));

        let frame = grid.frame();
        let fav = frame
            .cells
            .iter()
            .find(|c| c.cell.index == Some(5))
            .and_then(|c| c.card.as_ref())
            .unwrap();
        assert!(fav.favorited);
        assert_eq!(frame.columns, 4);
        assert_eq!(frame.total_height, 25 * 296);

        grid.unmount();
        assert_eq!(window.listener_count(), 0);
    }

    #[test]
    fn frame_serializes_flat_cells() {
        let window = Rc::new(ResizeEvents::new(ViewportSize::new(500, 700)));
        let mut grid = CardGrid::mount(&window);
        grid.sync(&products(3), |_| false);

        let json = serde_json::to_value(grid.frame()).unwrap();
        assert_eq!(json["columns"], 2);
        // 3 items in 2 columns: one padding slot in the last row.
        let cells = json["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1]["x"], 256);
        assert!(cells[3]["card"].is_null());
        assert!(cells[3]["index"].is_null());
    }
}
