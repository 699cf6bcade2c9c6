//! A headless, fixed-cell virtualized grid engine.
//!
//! For adapter-level utilities (resize observation, a controller wiring everything together),
//! see the `vgrid-adapter` crate.
//!
//! This crate focuses on the algorithms needed to render large catalogs as a grid at interactive
//! frame rates: responsive column counts, row-major index mapping, overscanned visible windows
//! and delta rendering of the materialized cells.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size (width/height)
//! - scroll offset
//! - the item slice and a render function
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cells;
mod columns;
mod error;
mod grid;
mod index;
mod options;
mod state;
mod types;


pub use cells::{MaterializedCells, SyncReport};
pub use columns::{
    Breakpoint, Breakpoints, DEFAULT_BASE_COLUMNS, DEFAULT_BREAKPOINTS, column_count,
};
pub use error::GridError;
pub use grid::VirtualizedGrid;
pub use index::{GridIndex, row_count};
pub use options::{DEFAULT_OVERSCAN, GridOptions};
pub use state::FrameState;
pub use types::{
    Align, Extent, GridCell, RenderedCell, ScrollDirection, ScrollOffset, ViewportSize,
    VisibleWindow,
};
