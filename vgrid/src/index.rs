//! Mapping between grid positions and linear item indexes.

use core::num::NonZeroUsize;

use crate::GridError;

/// `ceil(item_count / column_count)`.
///
/// Fails with [`GridError::ZeroColumns`] when `column_count` is 0.
pub fn row_count(item_count: usize, column_count: usize) -> Result<usize, GridError> {
    let columns = NonZeroUsize::new(column_count).ok_or(GridError::ZeroColumns)?;
    Ok(item_count.div_ceil(columns.get()))
}

/// Row-major index mapper for a grid of `item_count` items laid out in `column_count` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridIndex {
    item_count: usize,
    columns: NonZeroUsize,
}

impl GridIndex {
    pub fn new(item_count: usize, column_count: usize) -> Result<Self, GridError> {
        let columns = NonZeroUsize::new(column_count).ok_or(GridError::ZeroColumns)?;
        Ok(Self {
            item_count,
            columns,
        })
    }

    pub fn with_columns(item_count: usize, columns: NonZeroUsize) -> Self {
        Self {
            item_count,
            columns,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.get()
    }

    pub fn row_count(&self) -> usize {
        self.item_count.div_ceil(self.columns.get())
    }

    /// `row * column_count + column`, without bounds checks against `item_count`.
    pub fn index(&self, row: usize, column: usize) -> usize {
        row.saturating_mul(self.columns.get())
            .saturating_add(column)
    }

    /// The item occupying `(row, column)`, or `None` when the slot is empty (final partial row)
    /// or outside the grid.
    pub fn item_at(&self, row: usize, column: usize) -> Option<usize> {
        if column >= self.columns.get() {
            return None;
        }
        let index = self.index(row, column);
        (index < self.item_count).then_some(index)
    }

    /// The `(row, column)` of an item index.
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.item_count {
            return None;
        }
        let columns = self.columns.get();
        Some((index / columns, index % columns))
    }
}
