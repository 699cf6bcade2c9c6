use crate::Breakpoints;

/// Default number of extra rows (and columns) materialized on each side of the visible area.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Configuration for [`crate::VirtualizedGrid`].
///
/// Cell geometry is fixed for the lifetime of a grid: every cell is `cell_width` x `cell_height`
/// and cells are `gap` pixels apart, so the row stride is `cell_height + gap` and the column
/// stride is `cell_width + gap`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridOptions {
    pub cell_width: u32,
    pub cell_height: u32,
    /// Space between cells, on both axes.
    pub gap: u32,

    /// Extra rows rendered above and below the visible area. The same margin applies to columns.
    pub overscan: usize,

    /// Viewport width → column count policy.
    pub breakpoints: Breakpoints,

    /// Upper bound for the container width. `None` means the container may be as wide as the
    /// viewport allows.
    pub max_container_width: Option<u32>,
    /// Horizontal space the surrounding page takes away from the viewport width.
    pub container_inset: u32,
    /// Fixed container height. `None` means the container fills the viewport height.
    pub container_height: Option<u32>,
}

impl GridOptions {
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            gap: 0,
            overscan: DEFAULT_OVERSCAN,
            breakpoints: Breakpoints::default(),
            max_container_width: None,
            container_inset: 0,
            container_height: None,
        }
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_max_container_width(mut self, max_container_width: Option<u32>) -> Self {
        self.max_container_width = max_container_width;
        self
    }

    pub fn with_container_inset(mut self, container_inset: u32) -> Self {
        self.container_inset = container_inset;
        self
    }

    pub fn with_container_height(mut self, container_height: Option<u32>) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn row_stride(&self) -> u64 {
        self.cell_height as u64 + self.gap as u64
    }

    pub fn column_stride(&self) -> u64 {
        self.cell_width as u64 + self.gap as u64
    }
}
