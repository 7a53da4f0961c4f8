//! Browser binding for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and owns the state. This crate connects it to a page:
//!
//! - Markup discovery ([`Selectors`], [`MountError`])
//! - DOM presentation: slide `left`, track `transform`, the current-slide class, and each
//!   control's `disabled` property and `opacity` ([`DomPresenter`])
//! - Event wiring: control clicks, window `resize` with a `setTimeout` debounce
//!   ([`CarouselWidget`])
//!
//! Nothing registers itself on page load. Call [`initialize`] once the markup exists, or
//! `mountCarousel()` from JS to mount the single `.team-carousel` of the document.
//!
//! Logging goes through `tracing` (target `"carousel_dom"`) behind the default `tracing`
//! feature, which also turns on the engine's logging.
#![deny(unsafe_code)]

#[macro_use]
mod macros;

mod mount;
mod presenter;
mod timer;
mod widget;

#[cfg(test)]
mod tests;

use std::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

pub use carousel::{Carousel, CarouselOptions, Direction};
pub use mount::{MountError, Selectors};
pub use presenter::DomPresenter;
pub use widget::CarouselWidget;

/// Mounts a carousel on `container` with default options and selectors.
///
/// Returns `None` when the markup is incomplete; the failure is logged at `debug` and the page
/// is left untouched.
pub fn initialize(container: &HtmlElement) -> Option<CarouselWidget> {
    try_initialize(container, CarouselOptions::default(), &Selectors::default())
        .inspect_err(|err| {
            ddebug!(%err, "carousel not initialized");
        })
        .ok()
}

/// Mounts a carousel on `container`.
pub fn try_initialize(
    container: &HtmlElement,
    options: CarouselOptions,
    selectors: &Selectors,
) -> Result<CarouselWidget, MountError> {
    CarouselWidget::mount(container, options, selectors)
}

/// Looks up `selectors.container` in `document` and mounts a carousel on it.
pub fn try_mount(
    document: &Document,
    options: CarouselOptions,
    selectors: &Selectors,
) -> Result<CarouselWidget, MountError> {
    let root = document.document_element().ok_or(MountError::NoDocument)?;
    let container = mount::query(&root, &selectors.container)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| MountError::ContainerMissing(selectors.container.clone()))?;
    try_initialize(&container, options, selectors)
}

thread_local! {
    static MOUNTED: RefCell<Option<CarouselWidget>> = const { RefCell::new(None) };
}

/// Mounts the page's carousel with default options and keeps it alive.
///
/// Returns `false` when the page has no (complete) carousel. Calling it again replaces the
/// previously mounted widget.
#[wasm_bindgen(js_name = mountCarousel)]
pub fn mount_default() -> bool {
    let mounted = web_sys::window()
        .ok_or(MountError::NoWindow)
        .and_then(|w| w.document().ok_or(MountError::NoDocument))
        .and_then(|doc| try_mount(&doc, CarouselOptions::default(), &Selectors::default()));
    match mounted {
        Ok(widget) => {
            MOUNTED.with(|m| *m.borrow_mut() = Some(widget));
            true
        }
        Err(err) => {
            ddebug!(%err, "carousel not mounted");
            false
        }
    }
}

/// Drops the widget mounted by [`mount_default`], removing its listeners.
#[wasm_bindgen(js_name = unmountCarousel)]
pub fn unmount_default() {
    MOUNTED.with(|m| m.borrow_mut().take());
}
