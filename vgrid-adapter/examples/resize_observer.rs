// Example: resize subscriptions are released however the observer goes away.
use std::rc::Rc;

use vgrid::ViewportSize;
use vgrid_adapter::{ResizeEvents, WindowSizeObserver, subscribe};

fn main() {
    let window = Rc::new(ResizeEvents::new(ViewportSize::new(1024, 768)));

    let observer = WindowSizeObserver::mount(&window);
    let logger = subscribe(
        &window,
        Box::new(|size: ViewportSize| println!("resized to {}x{}", size.width, size.height)),
    );
    println!("listeners={}", window.listener_count());

    window.emit(ViewportSize::new(800, 600));
    window.emit(ViewportSize::new(800, 600));
    println!(
        "generation={} change={:?}",
        observer.generation(),
        observer.take_change()
    );

    drop(logger);
    {
        let _scoped = WindowSizeObserver::mount(&window);
        println!("listeners while scoped={}", window.listener_count());
    }
    observer.unmount();
    println!("listeners={}", window.listener_count());
}
