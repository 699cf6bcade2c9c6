// Example: drive a GridController from simulated resize and scroll events.
use std::rc::Rc;

use vgrid::{GridOptions, ScrollOffset, ViewportSize};
use vgrid_adapter::{GridController, ResizeEvents};

fn main() {
    let window = Rc::new(ResizeEvents::new(ViewportSize::new(1280, 720)));
    let items: Vec<String> = (0..500).map(|i| format!("item #{i}")).collect();

    let mut controller = GridController::mount(
        GridOptions::new(240, 280)
            .with_gap(16)
            .with_max_container_width(Some(1200)),
        &window,
    );

    let report = controller.sync(&items, |s| s.clone(), |s| s.to_uppercase());
    println!("first frame: {report:?}");

    controller.on_scroll(ScrollOffset::vertical(900));
    let report = controller.sync(&items, |s| s.clone(), |s| s.to_uppercase());
    println!("after scroll: {report:?}");

    window.emit(ViewportSize::new(700, 720));
    let report = controller.sync(&items, |s| s.clone(), |s| s.to_uppercase());
    println!(
        "after resize: columns={} {report:?}",
        controller.grid().column_count()
    );

    for (cell, content) in controller.cells().iter().take(4) {
        println!("({}, {}) -> {:?}", cell.row, cell.column, content);
    }

    let grid = controller.unmount();
    println!("listeners after unmount={}", window.listener_count());
    println!("frame_state={:?}", grid.frame_state());
}
