use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use vgrid::ViewportSize;

/// Callback invoked with the new viewport size on every resize event.
pub type ResizeListener = Box<dyn FnMut(ViewportSize)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// A source of viewport resize events (the window, a terminal, a test harness).
///
/// Implementations must stop calling a listener once `remove_listener` returned for its id.
pub trait ResizeSource {
    fn current_size(&self) -> ViewportSize;
    fn add_listener(&self, listener: ResizeListener) -> ListenerId;
    /// Returns `false` when `id` was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

type SharedListener = Rc<RefCell<ResizeListener>>;

/// An in-process [`ResizeSource`]: adapters call `emit` from their platform resize hook.
pub struct ResizeEvents {
    size: Cell<ViewportSize>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, SharedListener)>>,
}

impl ResizeEvents {
    pub fn new(initial: ViewportSize) -> Self {
        Self {
            size: Cell::new(initial),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Records `size` and notifies every registered listener.
    ///
    /// Listeners may subscribe or unsubscribe from inside the callback. A listener removed during
    /// the emit is not called afterwards; a listener that re-enters `emit` is skipped by the
    /// nested call.
    pub fn emit(&self, size: ViewportSize) {
        self.size.set(size);
        let snapshot: Vec<(ListenerId, SharedListener)> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            if let Ok(mut f) = listener.try_borrow_mut() {
                f(size);
            }
        }
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(i, _)| *i == id)
    }
}

impl ResizeSource for ResizeEvents {
    fn current_size(&self) -> ViewportSize {
        self.size.get()
    }

    fn add_listener(&self, listener: ResizeListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        adebug!(id = id.0, "resize listener added");
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(i, _)| *i != id);
        let removed = listeners.len() != before;
        if removed {
            adebug!(id = id.0, "resize listener removed");
        }
        removed
    }
}

impl fmt::Debug for ResizeEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeEvents")
            .field("size", &self.size.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registers `listener` on `source` and returns a guard that removes it on drop.
pub fn subscribe<S: ResizeSource>(source: &Rc<S>, listener: ResizeListener) -> Subscription<S> {
    let id = source.add_listener(listener);
    Subscription {
        source: Rc::downgrade(source),
        id: Some(id),
    }
}

/// RAII handle for a registered resize listener.
///
/// Dropping the guard unsubscribes, whatever the teardown path. If the source is already gone
/// there is nothing left to unsubscribe from.
pub struct Subscription<S: ResizeSource> {
    source: Weak<S>,
    id: Option<ListenerId>,
}

impl<S: ResizeSource> Subscription<S> {
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.source.strong_count() > 0
    }

    /// Unsubscribes now. Returns `true` when a listener was actually removed.
    pub fn cancel(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        let Some(id) = self.id.take() else {
            return false;
        };
        match self.source.upgrade() {
            Some(source) => source.remove_listener(id),
            None => false,
        }
    }
}

impl<S: ResizeSource> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: ResizeSource> fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Debug)]
struct ObservedSize {
    size: Cell<ViewportSize>,
    generation: Cell<u64>,
    pending: Cell<bool>,
}

/// Tracks the viewport size reported by a [`ResizeSource`].
///
/// Mounting captures the current size and subscribes; every resize to a *different* size bumps
/// `generation` and flags a pending change for dependents to pick up with `take_change`.
/// Dropping (or `unmount`) releases the subscription.
pub struct WindowSizeObserver<S: ResizeSource> {
    shared: Rc<ObservedSize>,
    subscription: Subscription<S>,
}

impl<S: ResizeSource> WindowSizeObserver<S> {
    pub fn mount(source: &Rc<S>) -> Self {
        let shared = Rc::new(ObservedSize {
            size: Cell::new(source.current_size()),
            generation: Cell::new(0),
            pending: Cell::new(false),
        });
        let listener = {
            let shared = Rc::clone(&shared);
            Box::new(move |size: ViewportSize| {
                if shared.size.get() == size {
                    return;
                }
                shared.size.set(size);
                shared.generation.set(shared.generation.get().wrapping_add(1));
                shared.pending.set(true);
            })
        };
        Self {
            subscription: subscribe(source, listener),
            shared,
        }
    }

    pub fn size(&self) -> ViewportSize {
        self.shared.size.get()
    }

    /// Number of distinct sizes observed since mount.
    pub fn generation(&self) -> u64 {
        self.shared.generation.get()
    }

    pub fn has_pending_change(&self) -> bool {
        self.shared.pending.get()
    }

    /// Returns the new size if it changed since the last call, clearing the pending flag.
    pub fn take_change(&self) -> Option<ViewportSize> {
        self.shared.pending.replace(false).then(|| self.size())
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }

    /// Releases the resize subscription. Equivalent to dropping the observer.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<S: ResizeSource> fmt::Debug for WindowSizeObserver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowSizeObserver")
            .field("size", &self.size())
            .field("generation", &self.generation())
            .field("subscription", &self.subscription)
            .finish()
    }
}
