//! Markup discovery.
//!
//! Finds the track, slides and the two controls inside a container element, and reports
//! what is missing when the markup does not match.

use carousel::Direction;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlElement, Window};

/// CSS selectors and class names that describe the carousel markup.
///
/// The defaults match:
///
/// ```html
/// <div class="team-carousel">
///   <button class="carousel-button--prev">‹</button>
///   <ul class="team-carousel__track">
///     <li>…</li>
///   </ul>
///   <button class="carousel-button--next">›</button>
/// </div>
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub container: String,
    pub track: String,
    pub prev: String,
    pub next: String,
    /// Class toggled on the current slide (a class name, not a selector).
    pub current_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: ".team-carousel".to_string(),
            track: ".team-carousel__track".to_string(),
            prev: ".carousel-button--prev".to_string(),
            next: ".carousel-button--next".to_string(),
            current_class: "current-slide".to_string(),
        }
    }
}

impl Selectors {
    pub fn control(&self, direction: Direction) -> &str {
        match direction {
            Direction::Prev => &self.prev,
            Direction::Next => &self.next,
        }
    }
}

/// Why a carousel could not be mounted.
///
/// Mount failures are never surfaced to the page: [`crate::initialize`] logs them and leaves
/// the markup untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("carousel container `{0}` not found")]
    ContainerMissing(String),
    #[error("carousel track `{0}` not found")]
    TrackMissing(String),
    #[error("{direction:?} control `{selector}` not found or not a button")]
    ControlMissing {
        direction: Direction,
        selector: String,
    },
    #[error("carousel track has no slides")]
    NoSlides,
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("failed to register `{event}` listener: {message}")]
    Listener {
        event: &'static str,
        message: String,
    },
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn query(root: &Element, selector: &str) -> Result<Option<Element>, MountError> {
    root.query_selector(selector)
        .map_err(|err| MountError::InvalidSelector {
            selector: selector.to_string(),
            message: js_message(&err),
        })
}

/// The DOM nodes a carousel is made of.
pub(crate) struct Structure {
    pub(crate) track: HtmlElement,
    pub(crate) slides: Vec<HtmlElement>,
    pub(crate) prev: HtmlButtonElement,
    pub(crate) next: HtmlButtonElement,
}

impl Structure {
    pub(crate) fn discover(
        container: &HtmlElement,
        selectors: &Selectors,
    ) -> Result<Self, MountError> {
        let track = query(container, &selectors.track)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| MountError::TrackMissing(selectors.track.clone()))?;

        let children = track.children();
        let slides: Vec<HtmlElement> = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        if slides.is_empty() {
            return Err(MountError::NoSlides);
        }

        let prev = control(container, selectors, Direction::Prev)?;
        let next = control(container, selectors, Direction::Next)?;

        Ok(Self {
            track,
            slides,
            prev,
            next,
        })
    }
}

fn control(
    container: &HtmlElement,
    selectors: &Selectors,
    direction: Direction,
) -> Result<HtmlButtonElement, MountError> {
    let selector = selectors.control(direction);
    query(container, selector)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        .ok_or_else(|| MountError::ControlMissing {
            direction,
            selector: selector.to_string(),
        })
}

/// `window.innerWidth`, or 0 when unavailable.
pub(crate) fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
