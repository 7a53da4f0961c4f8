//! DOM presentation.
//!
//! Translates [`Carousel`] state into inline styles, the current-slide class and the
//! controls' `disabled` property, applying only what [`Changes`] asks for.

use carousel::{Carousel, Changes, ControlState, Direction, Measurement, Presenter};
use web_sys::{HtmlButtonElement, HtmlElement, Window};

use crate::mount::{Structure, viewport_width};

/// Applies carousel state to the markup found at mount time.
pub struct DomPresenter {
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    prev: HtmlButtonElement,
    next: HtmlButtonElement,
    current_class: String,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("slides_len", &self.slides.len())
            .field("current_class", &self.current_class)
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    pub(crate) fn new(structure: Structure, current_class: String) -> Self {
        Self {
            track: structure.track,
            slides: structure.slides,
            prev: structure.prev,
            next: structure.next,
            current_class,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Measures the first slide's rendered width and the viewport width.
    pub fn measure(&self, window: &Window) -> Measurement {
        let slide_width = self
            .slides
            .first()
            .map_or(0.0, |slide| slide.get_bounding_client_rect().width());
        Measurement::new(slide_width, viewport_width(window))
    }

    fn set_current(&self, index: usize, current: bool) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        let classes = slide.class_list();
        let _ = if current {
            classes.add_1(&self.current_class)
        } else {
            classes.remove_1(&self.current_class)
        };
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, carousel: &Carousel, changes: &Changes) {
        // 1. Slide positions
        if changes.layout {
            carousel.for_each_slide(|slide| {
                if let Some(el) = self.slides.get(slide.index) {
                    let _ = el.style().set_property("left", &css_px(slide.offset));
                }
            });
        }

        // 2. Markers
        for (index, current) in marker_updates(carousel, changes) {
            self.set_current(index, current);
        }

        // 3. Track
        let _ = self
            .track
            .style()
            .set_property("transform", &css_translate_x(carousel.translate_x()));

        // 4. Controls
        let controls = carousel.controls();
        for (direction, button) in [(Direction::Prev, &self.prev), (Direction::Next, &self.next)] {
            apply_control(button, controls.get(direction));
        }
    }
}

/// Current-slide class writes for `changes`, as `(index, is_current)` in application order.
///
/// A layout rewrites every slide. A plain move clears the slide that held the marker before
/// the first coalesced move, then marks the current one; removal comes first so a round trip
/// back to the original slide leaves it marked.
pub(crate) fn marker_updates(carousel: &Carousel, changes: &Changes) -> Vec<(usize, bool)> {
    if changes.layout {
        let mut updates = Vec::with_capacity(carousel.slide_count());
        carousel.for_each_slide(|slide| updates.push((slide.index, slide.is_current)));
        updates
    } else if let Some(prev) = changes.previous_index {
        vec![(prev, false), (carousel.current_index(), true)]
    } else {
        Vec::new()
    }
}

fn apply_control(button: &HtmlButtonElement, state: ControlState) {
    button.set_disabled(state.disabled);
    let _ = button
        .style()
        .set_property("opacity", &css_opacity(state.opacity));
}

pub(crate) fn css_px(v: f64) -> String {
    // `+ 0.0` folds -0 into 0.
    format!("{}px", v + 0.0)
}

pub(crate) fn css_translate_x(x: f64) -> String {
    format!("translateX({})", css_px(x))
}

pub(crate) fn css_opacity(opacity: f32) -> String {
    format!("{opacity}")
}
