//! Axis-aligned bounding boxes on the integer pixel grid
//!
//! Every entity reports its extent as a normalized `Rect`, so the overlap
//! test never sees a backwards interval.

use glam::IVec2;

use crate::within;

/// A normalized axis-aligned box: `min.x <= max.x` and `min.y <= max.y`
/// always hold.
///
/// Intervals are inclusive on both ends; a zero-extent axis (a horizontal
/// or vertical line) is the valid degenerate interval `[a, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    /// Build from any two corners, normalizing per axis.
    pub fn from_corners(a: IVec2, b: IVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Build from an anchor and an extent. Negative extent components are
    /// folded into the anchor, so the result is still normalized.
    pub fn from_anchor_size(anchor: IVec2, size: IVec2) -> Self {
        Self::from_corners(anchor, anchor + size)
    }

    /// Width and height as a vector.
    #[inline]
    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    /// Inclusive overlap test on both axes. Partial overlap and full
    /// containment give the same answer; sharing a single edge pixel counts.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let x = within(self.min.x, other.min.x, other.max.x)
            || within(other.min.x, self.min.x, self.max.x);
        let y = within(self.min.y, other.min.y, other.max.y)
            || within(other.min.y, self.min.y, self.max.y);
        x && y
    }
}
