use alloc::vec::Vec;

use crate::{Carousel, Controls};

/// What changed since the presenter last ran.
///
/// UI layers use this to avoid rewriting every slide on each navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    /// Slide offsets were (re)assigned; every slide needs its position and marker rewritten.
    pub layout: bool,
    /// The slide that held the current marker before a navigation.
    pub previous_index: Option<usize>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        !self.layout && self.previous_index.is_none()
    }

    pub(crate) fn merge_move(&mut self, from: usize) {
        // Keep the oldest origin across coalesced moves; that is where the marker still is.
        if self.previous_index.is_none() {
            self.previous_index = Some(from);
        }
    }
}

/// Applies carousel state to a concrete UI.
///
/// Track translation and control states are cheap and should be applied on every call;
/// `changes` tells which per-slide work is needed.
pub trait Presenter {
    fn apply(&mut self, carousel: &Carousel, changes: &Changes);
}

/// A serializable snapshot of everything a presenter renders.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub current_index: usize,
    pub slide_width: f64,
    pub slides_to_show: usize,
    /// The offset the track is shifted left by (the current slide's offset).
    pub track_offset: f64,
    pub offsets: Vec<f64>,
    pub controls: Controls,
}

impl Frame {
    /// The horizontal translation to apply to the track.
    pub fn translate_x(&self) -> f64 {
        -self.track_offset
    }
}
