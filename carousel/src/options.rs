use alloc::vec;
use alloc::vec::Vec;

/// One viewport breakpoint: above `min_width` pixels, show `slides` slides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Exclusive lower bound on the viewport width.
    pub min_width: f64,
    pub slides: usize,
}

impl Breakpoint {
    pub fn new(min_width: f64, slides: usize) -> Self {
        Self { min_width, slides }
    }
}

/// Viewport-width breakpoints that decide how many slides fit side by side.
///
/// The widest matching breakpoint wins; `fallback` applies when none match. The result is
/// never below 1.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    steps: Vec<Breakpoint>,
    fallback: usize,
}

impl Breakpoints {
    pub fn new(steps: impl IntoIterator<Item = Breakpoint>, fallback: usize) -> Self {
        let mut steps: Vec<Breakpoint> = steps.into_iter().collect();
        steps.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));
        Self { steps, fallback }
    }

    /// A single layout regardless of viewport width.
    pub fn fixed(slides: usize) -> Self {
        Self::new([], slides)
    }

    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    pub fn fallback(&self) -> usize {
        self.fallback
    }

    pub fn slides_to_show(&self, viewport_width: f64) -> usize {
        // Deserialized tables may be unsorted, so pick the widest match explicitly.
        self.steps
            .iter()
            .filter(|bp| viewport_width > bp.min_width)
            .max_by(|a, b| a.min_width.total_cmp(&b.min_width))
            .map_or(self.fallback, |bp| bp.slides)
            .max(1)
    }
}

impl Default for Breakpoints {
    /// `> 1024px` → 3, `> 768px` → 2, otherwise 1.
    fn default() -> Self {
        Self {
            steps: vec![Breakpoint::new(1024.0, 3), Breakpoint::new(768.0, 2)],
            fallback: 1,
        }
    }
}

/// Configuration for [`crate::Carousel`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    pub breakpoints: Breakpoints,

    /// Quiet period after the last resize event before the layout is recomputed.
    pub resize_debounce_ms: u64,

    /// Whether a debounced resize also re-derives slides-to-show from the new viewport width.
    ///
    /// When `false`, slides-to-show is fixed at construction and only slide widths and
    /// offsets follow the viewport.
    pub recompute_slides_to_show_on_resize: bool,

    /// Opacity applied to a disabled control.
    pub disabled_opacity: f32,
    /// Opacity applied to an enabled control.
    pub enabled_opacity: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            resize_debounce_ms: 100,
            recompute_slides_to_show_on_resize: true,
            disabled_opacity: 0.3,
            enabled_opacity: 1.0,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_recompute_slides_to_show_on_resize(mut self, recompute: bool) -> Self {
        self.recompute_slides_to_show_on_resize = recompute;
        self
    }

    pub fn with_opacity(mut self, disabled_opacity: f32, enabled_opacity: f32) -> Self {
        self.disabled_opacity = disabled_opacity;
        self.enabled_opacity = enabled_opacity;
        self
    }
}
