//! A headless one-of-N slide carousel engine.
//!
//! For the browser binding (markup discovery, event wiring, style output), see the
//! `carousel-dom` crate.
//!
//! This crate owns the carousel state: per-slide offsets, the current slide, how many slides
//! fit the viewport, previous/next control enablement, and a debounced re-layout on resize.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the number of slides
//! - the rendered width of a slide and the viewport width (see [`Measurement`])
//! - navigation requests and resize notifications, with a millisecond clock
//!
//! and to apply the resulting state through a [`Presenter`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod debounce;
mod options;
mod state;
mod types;


pub use carousel::Carousel;
pub use debounce::Debouncer;
pub use options::{Breakpoint, Breakpoints, CarouselOptions};
pub use state::{Changes, Frame, Presenter};
pub use types::{
    ControlState, Controls, Direction, Enablement, Measurement, Slide, VisibleRange, enablement,
};
