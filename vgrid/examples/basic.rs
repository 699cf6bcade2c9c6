// Example: minimal usage and scroll-to helper.
use vgrid::{Align, GridOptions, ScrollOffset, ViewportSize, VirtualizedGrid};

fn main() {
    let mut g = VirtualizedGrid::new(GridOptions::new(240, 280).with_gap(16));
    g.set_viewport(ViewportSize::new(1280, 720));
    g.set_item_count(1_000_000);
    g.set_scroll_offset(ScrollOffset::vertical(123_456));

    let mut cells = Vec::new();
    g.collect_cells(&mut cells);
    println!("columns={} rows={}", g.column_count(), g.row_count());
    println!("total_size={:?}", g.total_size());
    println!("visible_window={:?}", g.visible_window());
    println!("first_cell={:?}", cells.first());

    let off = g.scroll_to_index(999_999, Align::End);
    println!("after scroll_to_index: offset={off}");
}
