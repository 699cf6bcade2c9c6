//! Adapter utilities for the `vgrid` crate.
//!
//! The `vgrid` crate is UI-agnostic and focuses on the core math and state. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - Resize observation with guaranteed unsubscription (an RAII [`Subscription`])
//! - A [`GridController`] that keeps the grid and its delta-rendered cells in step with resize and
//!   scroll events
//!
//! Everything here is single-threaded (`Rc`-based), matching how UI event loops deliver events.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod observer;


pub use controller::GridController;
pub use observer::{
    ListenerId, ResizeEvents, ResizeListener, ResizeSource, Subscription, WindowSizeObserver,
    subscribe,
};
