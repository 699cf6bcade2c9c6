// Example: materialize a window, scroll, and re-render only the cells that scrolled in.
use vgrid::{GridOptions, MaterializedCells, ScrollOffset, ViewportSize, VirtualizedGrid};

fn main() {
    let names: Vec<String> = (0..500).map(|i| format!("item #{i}")).collect();

    let mut g = VirtualizedGrid::new(GridOptions::new(240, 280).with_gap(16));
    g.set_viewport(ViewportSize::new(900, 700));
    g.set_item_count(names.len());

    let mut cells = MaterializedCells::new();
    let report = cells.sync(&g, &names, |name| name.clone(), |name| name.to_uppercase());
    println!("initial: {report:?}");

    for top in [150u64, 300, 2_000, 2_000] {
        g.set_scroll_offset(ScrollOffset::vertical(top));
        let report = cells.sync(&g, &names, |name| name.clone(), |name| name.to_uppercase());
        println!("top={top}: {report:?} materialized={}", cells.len());
    }
}
