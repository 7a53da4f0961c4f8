use alloc::vec::Vec;

use crate::types::non_negative;
use crate::{
    CarouselOptions, Changes, Controls, Debouncer, Direction, Frame, Measurement, Slide,
    VisibleRange, enablement,
};

/// A headless one-of-N carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with measurements, navigation requests and resize notifications.
/// - Rendering goes through [`crate::Presenter`], guided by [`Changes`].
///
/// The current slide is stored as an index, and slide offsets are stored as numbers. Exactly
/// one slide is current at any time, and the track is always shifted by the current slide's
/// offset.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    offsets: Vec<f64>,
    current: usize,
    slide_width: f64,
    viewport_width: f64,
    slides_to_show: usize,
    track_offset: f64,
    controls: Controls,
    resize: Debouncer,
    changes: Changes,
}

impl Carousel {
    /// Creates a carousel with default options.
    ///
    /// Returns `None` when there are no slides: a carousel without slides never activates.
    pub fn new(slide_count: usize, measurement: Measurement) -> Option<Self> {
        Self::with_options(slide_count, measurement, CarouselOptions::default())
    }

    /// Creates a carousel, lays out every slide and makes slide 0 current.
    pub fn with_options(
        slide_count: usize,
        measurement: Measurement,
        options: CarouselOptions,
    ) -> Option<Self> {
        if slide_count == 0 {
            cdebug!("Carousel::with_options: no slides, not activating");
            return None;
        }
        let m = measurement.sanitized();
        let slides_to_show = options.breakpoints.slides_to_show(m.viewport_width);
        cdebug!(
            slide_count,
            slide_width = m.slide_width,
            viewport_width = m.viewport_width,
            slides_to_show,
            "Carousel::with_options"
        );

        let controls = Controls::from_enablement(
            enablement(0, slide_count, slides_to_show),
            options.disabled_opacity,
            options.enabled_opacity,
        );
        let mut c = Self {
            offsets: Vec::with_capacity(slide_count),
            current: 0,
            slide_width: m.slide_width,
            viewport_width: m.viewport_width,
            slides_to_show,
            track_offset: 0.0,
            controls,
            resize: Debouncer::new(options.resize_debounce_ms),
            changes: Changes::default(),
            options,
        };
        c.offsets.resize(slide_count, 0.0);
        c.layout_offsets();
        c.move_to(0);
        Some(c)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options and re-derives everything that depends on them.
    ///
    /// The current slide is kept.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.resize.set_delay_ms(options.resize_debounce_ms);
        self.options = options;
        self.slides_to_show = self.options.breakpoints.slides_to_show(self.viewport_width);
        self.update_controls();
    }

    pub fn slide_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Updates the viewport width without re-measuring slides.
    ///
    /// Slides-to-show follows the new width only when
    /// [`CarouselOptions::recompute_slides_to_show_on_resize`] is set; control enablement is
    /// refreshed either way. Offsets and the current slide are unchanged.
    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = non_negative(viewport_width);
        if self.options.recompute_slides_to_show_on_resize {
            self.slides_to_show = self.options.breakpoints.slides_to_show(self.viewport_width);
        }
        ctrace!(
            viewport_width = self.viewport_width,
            slides_to_show = self.slides_to_show,
            "set_viewport_width"
        );
        self.update_controls();
    }

    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// The offset the track is shifted left by; equals the current slide's offset.
    pub fn track_offset(&self) -> f64 {
        self.track_offset
    }

    /// The horizontal translation to apply to the track.
    pub fn translate_x(&self) -> f64 {
        -self.track_offset
    }

    pub fn slide_offset(&self, index: usize) -> Option<f64> {
        self.offsets.get(index).copied()
    }

    pub fn slide(&self, index: usize) -> Option<Slide> {
        let offset = self.slide_offset(index)?;
        Some(Slide {
            index,
            offset,
            is_current: index == self.current,
        })
    }

    pub fn for_each_slide(&self, mut f: impl FnMut(Slide)) {
        for (index, &offset) in self.offsets.iter().enumerate() {
            f(Slide {
                index,
                offset,
                is_current: index == self.current,
            });
        }
    }

    /// The slides in view: the current one plus as many followers as fit.
    pub fn visible_range(&self) -> VisibleRange {
        VisibleRange {
            start_index: self.current,
            end_index: self
                .current
                .saturating_add(self.slides_to_show)
                .min(self.slide_count()),
        }
    }

    /// Returns a serializable snapshot of the rendered state.
    pub fn frame(&self) -> Frame {
        Frame {
            current_index: self.current,
            slide_width: self.slide_width,
            slides_to_show: self.slides_to_show,
            track_offset: self.track_offset,
            offsets: self.offsets.clone(),
            controls: self.controls,
        }
    }

    /// The slide adjacent to the current one, if any.
    pub fn adjacent(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Prev => self.current.checked_sub(1),
            Direction::Next => {
                let next = self.current.checked_add(1)?;
                (next < self.slide_count()).then_some(next)
            }
        }
    }

    pub fn can_navigate(&self, direction: Direction) -> bool {
        self.adjacent(direction).is_some()
    }

    /// Moves to the adjacent slide.
    ///
    /// Returns `false` (and changes nothing) when there is no slide in that direction.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(target) = self.adjacent(direction) else {
            ctrace!(?direction, current = self.current, "navigate: at boundary");
            return false;
        };
        ctrace!(?direction, from = self.current, to = target, "navigate");
        self.move_to(target);
        true
    }

    pub fn next(&mut self) -> bool {
        self.navigate(Direction::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.navigate(Direction::Prev)
    }

    /// Makes `index` current and shifts the track to it.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slide_count() {
            ctrace!(index, count = self.slide_count(), "go_to: out of range");
            return false;
        }
        self.move_to(index);
        true
    }

    /// Records a viewport resize event. The re-layout runs once the debounce period has
    /// elapsed without further events (see [`Self::tick`]).
    pub fn notify_resize(&mut self, now_ms: u64) {
        ctrace!(now_ms, "notify_resize");
        self.resize.notify(now_ms);
    }

    pub fn is_resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn resize_due(&self, now_ms: u64) -> bool {
        self.resize.is_due(now_ms)
    }

    /// Milliseconds left before a pending resize is due.
    pub fn resize_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.resize.remaining_ms(now_ms)
    }

    pub fn cancel_resize(&mut self) {
        self.resize.cancel();
    }

    /// Runs the debounced re-layout if it is due.
    ///
    /// `measure` is only called when the re-layout actually runs. Returns `true` if it ran.
    pub fn tick(&mut self, now_ms: u64, measure: impl FnOnce() -> Measurement) -> bool {
        if !self.resize.take_due(now_ms) {
            return false;
        }
        self.relayout(measure());
        true
    }

    /// Re-measures and repositions every slide, keeping the current slide current.
    pub fn relayout(&mut self, measurement: Measurement) {
        let index = self.current;
        let m = measurement.sanitized();
        self.slide_width = m.slide_width;
        self.viewport_width = m.viewport_width;
        if self.options.recompute_slides_to_show_on_resize {
            self.slides_to_show = self.options.breakpoints.slides_to_show(m.viewport_width);
        }
        cdebug!(
            index,
            slide_width = self.slide_width,
            viewport_width = self.viewport_width,
            slides_to_show = self.slides_to_show,
            "relayout"
        );
        self.layout_offsets();
        self.move_to(index);
    }

    /// Returns and clears the changes accumulated since the last call.
    pub fn take_changes(&mut self) -> Changes {
        core::mem::take(&mut self.changes)
    }

    pub fn pending_changes(&self) -> Changes {
        self.changes
    }

    /// Presents pending changes through `presenter`, then clears them.
    pub fn present(&mut self, presenter: &mut impl crate::Presenter) {
        let changes = self.take_changes();
        presenter.apply(self, &changes);
    }

    fn layout_offsets(&mut self) {
        let width = self.slide_width;
        for (i, off) in self.offsets.iter_mut().enumerate() {
            *off = width * i as f64;
        }
        self.changes.layout = true;
    }

    fn move_to(&mut self, target: usize) {
        debug_assert!(target < self.slide_count(), "move_to: index out of range");
        if target != self.current {
            self.changes.merge_move(self.current);
        }
        self.current = target;
        self.track_offset = self.offsets[target];
        self.update_controls();
    }

    fn update_controls(&mut self) {
        self.controls = Controls::from_enablement(
            enablement(self.current, self.slide_count(), self.slides_to_show),
            self.options.disabled_opacity,
            self.options.enabled_opacity,
        );
    }
}
