//! Card grid geometry used by the product page.

use vgrid::{Breakpoints, DEFAULT_OVERSCAN, GridOptions};

pub const CARD_WIDTH: u32 = 240;
pub const CARD_HEIGHT: u32 = 280;
pub const CARD_GAP: u32 = 16;
/// The page's content column never grows past this width.
pub const MAX_CONTAINER_WIDTH: u32 = 1200;
/// Horizontal page padding subtracted from the window width.
pub const CONTAINER_INSET: u32 = 32;
/// The grid scrolls inside a fixed-height box.
pub const CONTAINER_HEIGHT: u32 = 700;

pub fn card_grid_options() -> GridOptions {
    GridOptions::new(CARD_WIDTH, CARD_HEIGHT)
        .with_gap(CARD_GAP)
        .with_overscan(DEFAULT_OVERSCAN)
        .with_breakpoints(Breakpoints::default())
        .with_max_container_width(Some(MAX_CONTAINER_WIDTH))
        .with_container_inset(CONTAINER_INSET)
        .with_container_height(Some(CONTAINER_HEIGHT))
}
