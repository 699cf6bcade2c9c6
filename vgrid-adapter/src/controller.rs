use alloc::rc::Rc;

use vgrid::{
    Align, FrameState, GridOptions, MaterializedCells, ScrollOffset, SyncReport, VirtualizedGrid,
};

use crate::{ResizeSource, WindowSizeObserver};

/// A framework-neutral controller that wires a `vgrid::VirtualizedGrid` to a resize source and
/// keeps a delta-rendered set of cells in step with it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the scroll container reports a new offset
/// - `sync(items, key_of, render)` once per frame, after the item list is final
///
/// Resize events are picked up lazily: the observer only flags a change, and the next `sync` (or
/// an explicit `poll_resize`) applies it to the grid.
pub struct GridController<S: ResizeSource, K, R> {
    grid: VirtualizedGrid,
    cells: MaterializedCells<K, R>,
    observer: WindowSizeObserver<S>,
}

impl<S: ResizeSource, K: PartialEq, R> GridController<S, K, R> {
    /// Subscribes to `source` and sizes the grid from its current viewport.
    pub fn mount(options: GridOptions, source: &Rc<S>) -> Self {
        let observer = WindowSizeObserver::mount(source);
        let mut grid = VirtualizedGrid::new(options);
        grid.set_viewport(observer.size());
        adebug!(
            width = observer.size().width,
            height = observer.size().height,
            columns = grid.column_count(),
            "GridController::mount"
        );
        Self {
            grid,
            cells: MaterializedCells::new(),
            observer,
        }
    }

    pub fn grid(&self) -> &VirtualizedGrid {
        &self.grid
    }

    pub fn cells(&self) -> &MaterializedCells<K, R> {
        &self.cells
    }

    pub fn observer(&self) -> &WindowSizeObserver<S> {
        &self.observer
    }

    /// Applies a pending resize to the grid. Returns `true` if the grid's viewport changed.
    pub fn poll_resize(&mut self) -> bool {
        let Some(size) = self.observer.take_change() else {
            return false;
        };
        let changed = self.grid.set_viewport(size);
        if changed {
            adebug!(
                width = size.width,
                height = size.height,
                columns = self.grid.column_count(),
                "GridController::poll_resize"
            );
        }
        changed
    }

    /// Call this when the UI reports a scroll position change. The offset is clamped to the
    /// scrollable range; returns `true` if the grid's offset changed.
    pub fn on_scroll(&mut self, offset: ScrollOffset) -> bool {
        self.grid.set_scroll_offset_clamped(offset)
    }

    /// Scrolls so that `index` is positioned according to `align`, returning the new top offset.
    ///
    /// Adapters should mirror the returned offset onto the real scroll container.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        self.grid.scroll_to_index(index, align)
    }

    /// Brings the materialized cells in line with the current items, viewport and scroll offset.
    pub fn sync<T>(
        &mut self,
        items: &[T],
        key_of: impl FnMut(&T) -> K,
        render: impl FnMut(&T) -> R,
    ) -> SyncReport {
        self.poll_resize();
        self.grid.set_item_count(items.len());
        self.cells.sync(&self.grid, items, key_of, render)
    }

    /// Forces cells holding `key` to render again on the next sync.
    pub fn invalidate_key(&mut self, key: &K) -> usize {
        self.cells.invalidate_key(key)
    }

    pub fn invalidate_all(&mut self) {
        self.cells.invalidate_all();
    }

    pub fn frame_state(&self) -> FrameState {
        self.grid.frame_state()
    }

    /// Releases the resize subscription and hands back the grid (e.g. to persist its state).
    pub fn unmount(self) -> VirtualizedGrid {
        let Self { grid, observer, .. } = self;
        observer.unmount();
        grid
    }
}

impl<S: ResizeSource, K: core::fmt::Debug, R: core::fmt::Debug> core::fmt::Debug
    for GridController<S, K, R>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridController")
            .field("grid", &self.grid)
            .field("cells", &self.cells)
            .field("observer", &self.observer)
            .finish()
    }
}
