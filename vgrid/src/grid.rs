use alloc::vec::Vec;
use core::cmp;
use core::num::NonZeroUsize;
use core::ops::Range;

use crate::{
    Align, Extent, FrameState, GridCell, GridIndex, GridOptions, RenderedCell, ScrollDirection,
    ScrollOffset, ViewportSize, VisibleWindow,
};

/// A headless, fixed-cell virtualized grid.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or the items themselves, only their count.
/// - Your adapter drives it by providing viewport geometry and scroll offsets.
/// - Rendering is exposed via a zero-allocation iteration API (`for_each_cell`) and a
///   convenience `render` that maps items through a caller-supplied function.
///
/// Only the cells inside the visible window (container plus `overscan` rows/columns on each side)
/// are produced, so work is proportional to the container size rather than the item count.
#[derive(Clone, Debug)]
pub struct VirtualizedGrid {
    options: GridOptions,
    item_count: usize,
    viewport: ViewportSize,
    scroll: ScrollOffset,
    columns: NonZeroUsize,
    scroll_direction: Option<ScrollDirection>,
}

impl VirtualizedGrid {
    /// Creates an empty grid with an unmeasured viewport.
    pub fn new(options: GridOptions) -> Self {
        vdebug!(
            cell_width = options.cell_width,
            cell_height = options.cell_height,
            gap = options.gap,
            overscan = options.overscan,
            "VirtualizedGrid::new"
        );
        Self {
            options,
            item_count: 0,
            viewport: ViewportSize::default(),
            scroll: ScrollOffset::default(),
            columns: NonZeroUsize::MIN,
            scroll_direction: None,
        }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Updates the item count. Returns `true` when it changed.
    ///
    /// The scroll offset is clamped so a shrinking list never leaves the window past the end.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        if self.item_count == item_count {
            return false;
        }
        vtrace!(item_count, "VirtualizedGrid::set_item_count");
        self.item_count = item_count;
        self.scroll = self.clamp_scroll_offset(self.scroll);
        true
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Applies a new viewport measurement and recomputes the column count.
    ///
    /// Returns `true` when the viewport changed. Applying the same size twice is a no-op.
    pub fn set_viewport(&mut self, viewport: ViewportSize) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        let columns = self.resolve_columns();
        if columns != self.columns {
            vdebug!(
                width = viewport.width,
                from = self.columns.get(),
                to = columns.get(),
                "column count changed"
            );
            self.columns = columns;
        }
        self.scroll = self.clamp_scroll_offset(self.scroll);
        true
    }

    fn resolve_columns(&self) -> NonZeroUsize {
        if !self.viewport.is_measured() {
            return NonZeroUsize::MIN;
        }
        NonZeroUsize::new(self.options.breakpoints.column_count(self.viewport.width))
            .unwrap_or(NonZeroUsize::MIN)
    }

    pub fn column_count(&self) -> usize {
        self.columns.get()
    }

    pub fn row_count(&self) -> usize {
        self.index_mapper().row_count()
    }

    pub fn index_mapper(&self) -> GridIndex {
        GridIndex::with_columns(self.item_count, self.columns)
    }

    /// The size of the scroll container the window is computed against.
    ///
    /// Width is `min(max_container_width, viewport.width - container_inset)`; height is the fixed
    /// `container_height` or the viewport height. Both are 0 while the viewport is unmeasured.
    pub fn container_size(&self) -> ViewportSize {
        if !self.viewport.is_measured() {
            return ViewportSize::default();
        }
        let mut width = self
            .viewport
            .width
            .saturating_sub(self.options.container_inset);
        if let Some(max) = self.options.max_container_width {
            width = width.min(max);
        }
        let height = self
            .options
            .container_height
            .unwrap_or(self.viewport.height);
        ViewportSize { width, height }
    }

    /// Intrinsic content size: `column_count * (cell_width + gap)` by
    /// `row_count * (cell_height + gap)`.
    pub fn total_size(&self) -> Extent {
        Extent {
            width: (self.column_count() as u64).saturating_mul(self.options.column_stride()),
            height: (self.row_count() as u64).saturating_mul(self.options.row_stride()),
        }
    }

    pub fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Stores a scroll offset as reported by the UI. Returns `true` when it changed.
    ///
    /// Window computations clamp the offset, so an overscrolled value never yields an empty
    /// window for a non-empty grid.
    pub fn set_scroll_offset(&mut self, offset: ScrollOffset) -> bool {
        if self.scroll == offset {
            return false;
        }
        vtrace!(top = offset.top, left = offset.left, "set_scroll_offset");
        self.scroll_direction = match offset.top.cmp(&self.scroll.top) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.scroll = offset;
        true
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: ScrollOffset) -> bool {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped)
    }

    pub fn max_scroll_offset(&self) -> ScrollOffset {
        let total = self.total_size();
        let container = self.container_size();
        ScrollOffset {
            top: total.height.saturating_sub(container.height as u64),
            left: total.width.saturating_sub(container.width as u64),
        }
    }

    pub fn clamp_scroll_offset(&self, offset: ScrollOffset) -> ScrollOffset {
        let max = self.max_scroll_offset();
        ScrollOffset {
            top: offset.top.min(max.top),
            left: offset.left.min(max.left),
        }
    }

    /// Rows intersecting the container, without overscan.
    pub fn visible_rows(&self) -> Range<usize> {
        if !self.viewport.is_measured() || self.item_count == 0 {
            return 0..0;
        }
        let container = self.container_size();
        axis_range(
            self.scroll.top,
            container.height as u64,
            self.options.row_stride(),
            self.row_count(),
        )
    }

    /// Rows and columns to materialize: the visible area expanded by `overscan` on each side and
    /// clamped to the grid bounds.
    pub fn visible_window(&self) -> VisibleWindow {
        if !self.viewport.is_measured() || self.item_count == 0 {
            return VisibleWindow::empty();
        }
        let container = self.container_size();
        let rows = self.visible_rows();
        let columns = axis_range(
            self.scroll.left,
            container.width as u64,
            self.options.column_stride(),
            self.column_count(),
        );
        if rows.is_empty() || columns.is_empty() {
            return VisibleWindow::empty();
        }

        let overscan = self.options.overscan;
        VisibleWindow {
            rows: expand(rows, overscan, self.row_count()),
            columns: expand(columns, overscan, self.column_count()),
        }
    }

    /// The cell at `(row, column)`, or `None` outside the grid bounds.
    ///
    /// Slots in the final row past the last item are returned as placeholders (`index: None`).
    pub fn cell(&self, row: usize, column: usize) -> Option<GridCell> {
        if row >= self.row_count() || column >= self.column_count() {
            return None;
        }
        Some(self.make_cell(row, column))
    }

    fn make_cell(&self, row: usize, column: usize) -> GridCell {
        GridCell {
            row,
            column,
            index: self.index_mapper().item_at(row, column),
            x: (column as u64).saturating_mul(self.options.column_stride()),
            y: (row as u64).saturating_mul(self.options.row_stride()),
            width: self.options.cell_width,
            height: self.options.cell_height,
        }
    }

    /// Visits every cell of the visible window in row-major order.
    pub fn for_each_cell(&self, mut f: impl FnMut(GridCell)) {
        let window = self.visible_window();
        if window.is_empty() {
            return;
        }
        for row in window.rows.clone() {
            for column in window.columns.clone() {
                f(self.make_cell(row, column));
            }
        }
    }

    /// Collects the visible window into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_cell`]. For maximum performance,
    /// prefer `for_each_cell` and reuse a scratch buffer in your adapter.
    pub fn collect_cells(&self, out: &mut Vec<GridCell>) {
        out.clear();
        self.for_each_cell(|cell| out.push(cell));
    }

    /// Renders the visible window: in-bounds cells call `render` with their item, padding slots
    /// come back as placeholders with no content.
    pub fn render<T, R>(&self, items: &[T], mut render: impl FnMut(&T) -> R) -> Vec<RenderedCell<R>> {
        if items.len() != self.item_count {
            vwarn!(
                items = items.len(),
                item_count = self.item_count,
                "render: item slice does not match item_count"
            );
        }
        let mut out = Vec::with_capacity(self.visible_window().cell_count());
        self.for_each_cell(|cell| {
            let content = cell.index.and_then(|i| items.get(i)).map(&mut render);
            out.push(RenderedCell { cell, content });
        });
        out
    }

    /// Computes the vertical offset that brings the row holding `index` into view.
    ///
    /// The result is clamped to the max scroll offset. Indexes past the end map to the last item.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.item_count == 0 {
            return 0;
        }
        let index = index.min(self.item_count - 1);
        let row = index / self.column_count();
        let start = (row as u64).saturating_mul(self.options.row_stride());
        let end = start.saturating_add(self.options.cell_height as u64);
        let view = self.container_size().height as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(self.options.cell_height as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll.top;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        target.min(self.max_scroll_offset().top)
    }

    /// Programmatically scrolls to the row holding `index` (horizontal offset unchanged).
    ///
    /// Returns the applied (clamped) vertical offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let top = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(ScrollOffset {
            top,
            left: self.scroll.left,
        });
        top
    }

    /// Returns a lightweight snapshot of viewport + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport,
            scroll: self.scroll,
        }
    }

    /// Restores viewport geometry and scroll position from a previously captured snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.set_viewport(frame.viewport);
        self.set_scroll_offset_clamped(frame.scroll);
    }
}

/// Indexes along one axis whose span `[i * stride, (i + 1) * stride)` intersects
/// `[offset, offset + view)`, after clamping `offset` to the scrollable range.
fn axis_range(offset: u64, view: u64, stride: u64, count: usize) -> Range<usize> {
    if count == 0 || view == 0 {
        return 0..0;
    }
    if stride == 0 {
        return 0..count;
    }
    let total = (count as u64).saturating_mul(stride);
    let offset = offset.min(total.saturating_sub(view));
    let last = offset.saturating_add(view - 1);

    let first = offset / stride;
    let last = last / stride;
    let start = cmp::min(first, count as u64) as usize;
    let end = cmp::min(last.saturating_add(1), count as u64) as usize;
    start..end
}

fn expand(range: Range<usize>, overscan: usize, count: usize) -> Range<usize> {
    range.start.saturating_sub(overscan)..cmp::min(count, range.end.saturating_add(overscan))
}
