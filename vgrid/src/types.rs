use core::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Viewport dimensions in pixels.
///
/// A viewport with a zero dimension is treated as "not measured yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Scroll position of the grid container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub top: u64,
    pub left: u64,
}

impl ScrollOffset {
    pub const fn new(top: u64, left: u64) -> Self {
        Self { top, left }
    }

    pub const fn vertical(top: u64) -> Self {
        Self { top, left: 0 }
    }
}

/// Intrinsic size of the scrollable content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: u64,
    pub height: u64,
}

/// Rows and columns to materialize. Both ranges are half-open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub rows: Range<usize>,
    pub columns: Range<usize>,
}

impl VisibleWindow {
    pub fn empty() -> Self {
        Self {
            rows: 0..0,
            columns: 0..0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.rows.len().saturating_mul(self.columns.len())
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.rows.contains(&row) && self.columns.contains(&column)
    }
}

/// One grid slot at a given row/column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    /// Linear item index, or `None` for the padding slots of the last row.
    pub index: Option<usize>,
    /// Left edge inside the content box.
    pub x: u64,
    /// Top edge inside the content box.
    pub y: u64,
    /// Cell width (excludes `gap`).
    pub width: u32,
    /// Cell height (excludes `gap`).
    pub height: u32,
}

impl GridCell {
    pub fn is_placeholder(&self) -> bool {
        self.index.is_none()
    }

    pub fn right(&self) -> u64 {
        self.x.saturating_add(self.width as u64)
    }

    pub fn bottom(&self) -> u64 {
        self.y.saturating_add(self.height as u64)
    }
}

/// A materialized cell returned by [`crate::VirtualizedGrid::render`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedCell<R> {
    pub cell: GridCell,
    /// `None` for placeholders.
    pub content: Option<R>,
}
