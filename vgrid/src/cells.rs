//! Delta rendering: keeps the content of the current window and only re-renders what changed.

use alloc::collections::BTreeMap;
use core::mem;

use crate::{GridCell, VirtualizedGrid};

/// Counters describing what a [`MaterializedCells::sync`] pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncReport {
    /// Cells whose render function ran in this pass.
    pub rendered: usize,
    /// Cells that kept their previous content.
    pub reused: usize,
    /// Previously rendered cells whose content was dropped (scrolled out or replaced).
    pub released: usize,
    /// Empty padding slots of the final row.
    pub placeholders: usize,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.rendered == 0 && self.released == 0
    }
}

#[derive(Clone, Debug)]
struct Entry<K, R> {
    cell: GridCell,
    key: Option<K>,
    content: Option<R>,
}

/// The materialized cells of a [`VirtualizedGrid`] window, keyed by `(row, column)` slot.
///
/// A slot keeps its content across syncs while both its geometry and the key of the item it
/// holds are unchanged. Anything else is rendered again, so reordering or filtering the item list
/// needs no explicit invalidation; content that depends on state outside the item (e.g. a
/// "favorited" flag) is refreshed with [`Self::invalidate_key`] or [`Self::invalidate_all`].
#[derive(Clone, Debug)]
pub struct MaterializedCells<K, R> {
    entries: BTreeMap<(usize, usize), Entry<K, R>>,
}

impl<K, R> Default for MaterializedCells<K, R> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: PartialEq, R> MaterializedCells<K, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Brings the materialized set in line with `grid`'s current window.
    ///
    /// `items` must be the slice the grid's item count was taken from; `key_of` returns an item's
    /// stable identity and `render` produces its content.
    pub fn sync<T>(
        &mut self,
        grid: &VirtualizedGrid,
        items: &[T],
        mut key_of: impl FnMut(&T) -> K,
        mut render: impl FnMut(&T) -> R,
    ) -> SyncReport {
        let mut report = SyncReport::default();
        let mut previous = mem::take(&mut self.entries);
        let entries = &mut self.entries;

        grid.for_each_cell(|cell| {
            let slot = (cell.row, cell.column);
            let prev = previous.remove(&slot);

            let Some(item) = cell.index.and_then(|i| items.get(i)) else {
                if prev.as_ref().is_some_and(|e| e.content.is_some()) {
                    report.released += 1;
                }
                report.placeholders += 1;
                entries.insert(
                    slot,
                    Entry {
                        cell,
                        key: None,
                        content: None,
                    },
                );
                return;
            };

            let key = key_of(item);
            if let Some(prev) = prev {
                let unchanged = prev.cell == cell && prev.key.as_ref() == Some(&key);
                if unchanged && prev.content.is_some() {
                    report.reused += 1;
                    entries.insert(slot, prev);
                    return;
                }
                if prev.content.is_some() {
                    report.released += 1;
                }
            }

            report.rendered += 1;
            entries.insert(
                slot,
                Entry {
                    cell,
                    key: Some(key),
                    content: Some(render(item)),
                },
            );
        });

        report.released += previous
            .values()
            .filter(|entry| entry.content.is_some())
            .count();

        vtrace!(
            rendered = report.rendered,
            reused = report.reused,
            released = report.released,
            placeholders = report.placeholders,
            "MaterializedCells::sync"
        );
        report
    }

    /// Drops the content of every cell holding `key`; the next sync renders them again.
    ///
    /// Returns the number of cells invalidated.
    pub fn invalidate_key(&mut self, key: &K) -> usize {
        let mut n = 0usize;
        for entry in self.entries.values_mut() {
            if entry.key.as_ref() == Some(key) && entry.content.take().is_some() {
                n += 1;
            }
        }
        n
    }

    /// Drops the content of every cell; the next sync renders the whole window.
    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.content = None;
        }
    }

    /// Iterates over the materialized cells in row-major order. Placeholders yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&GridCell, Option<&R>)> + '_ {
        self.entries
            .values()
            .map(|entry| (&entry.cell, entry.content.as_ref()))
    }

    /// The content rendered for `(row, column)`, if that slot is materialized and non-empty.
    pub fn get(&self, row: usize, column: usize) -> Option<&R> {
        self.entries
            .get(&(row, column))
            .and_then(|entry| entry.content.as_ref())
    }
}
