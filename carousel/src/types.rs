/// A navigation direction, one per control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Prev,
    Next,
}

/// Rendered geometry reported by the UI layer, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Width of the first slide.
    pub slide_width: f64,
    /// Width of the viewport, used for breakpoint selection.
    pub viewport_width: f64,
}

impl Measurement {
    pub fn new(slide_width: f64, viewport_width: f64) -> Self {
        Self {
            slide_width,
            viewport_width,
        }
    }

    /// Replaces negative or non-finite widths with zero.
    pub(crate) fn sanitized(self) -> Self {
        Self {
            slide_width: non_negative(self.slide_width),
            viewport_width: non_negative(self.viewport_width),
        }
    }
}

pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// A read-only view of one slide.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub index: usize,
    /// Horizontal offset from the start of the track.
    pub offset: f64,
    pub is_current: bool,
}

/// Which controls are disabled for a given index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enablement {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Computes control enablement for `target_index`.
///
/// - previous is disabled iff `target_index == 0`
/// - next is disabled iff `target_index >= slide_count - slides_to_show`
///
/// The subtraction saturates, so when every slide fits the viewport next is disabled
/// everywhere.
pub fn enablement(target_index: usize, slide_count: usize, slides_to_show: usize) -> Enablement {
    Enablement {
        prev_disabled: target_index == 0,
        next_disabled: target_index >= slide_count.saturating_sub(slides_to_show),
    }
}

/// Rendered state of a single control.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlState {
    pub disabled: bool,
    /// Visual emphasis, derived from `disabled`.
    pub opacity: f32,
}

impl ControlState {
    pub fn new(disabled: bool, disabled_opacity: f32, enabled_opacity: f32) -> Self {
        Self {
            disabled,
            opacity: if disabled {
                disabled_opacity
            } else {
                enabled_opacity
            },
        }
    }
}

/// Rendered state of both navigation controls.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controls {
    pub prev: ControlState,
    pub next: ControlState,
}

impl Controls {
    pub fn from_enablement(e: Enablement, disabled_opacity: f32, enabled_opacity: f32) -> Self {
        Self {
            prev: ControlState::new(e.prev_disabled, disabled_opacity, enabled_opacity),
            next: ControlState::new(e.next_disabled, disabled_opacity, enabled_opacity),
        }
    }

    pub fn get(&self, direction: Direction) -> ControlState {
        match direction {
            Direction::Prev => self.prev,
            Direction::Next => self.next,
        }
    }
}

/// Slides shown in the viewport, starting at the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}
