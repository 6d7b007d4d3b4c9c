//! Raw drag samples and the dominant-axis routing test.

use glam::Vec2;

/// How many times larger one axis component must be than its cross-axis
/// counterpart before a drag is attributed to that axis.
pub const AXIS_DOMINANCE_RATIO: f32 = 3.0;

/// One independent drag dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left/right movement; the day axis.
    Horizontal,
    /// Up/down movement; the time-slot axes.
    Vertical,
}

/// A per-frame sample of an in-progress drag.
///
/// `delta` is the cumulative displacement since the gesture began and
/// `velocity` the instantaneous velocity, both in physical pixels with x
/// growing to the right and y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInput {
    /// Displacement since the gesture began.
    pub delta: Vec2,
    /// Instantaneous velocity.
    pub velocity: Vec2,
}

impl DragInput {
    /// Creates a sample from a cumulative delta and an instantaneous velocity.
    pub fn new(delta: Vec2, velocity: Vec2) -> Self {
        Self { delta, velocity }
    }

    /// Returns the axis this sample clearly moves along, if any.
    ///
    /// Both the displacement and the velocity must be predominantly on the
    /// same axis, each component exceeding [`AXIS_DOMINANCE_RATIO`] times its
    /// cross-axis counterpart. An ambiguous sample yields `None` and is
    /// claimed by neither axis, which lets two perpendicular controllers
    /// share a touch target without stealing each other's gestures.
    pub fn dominant_axis(&self) -> Option<Axis> {
        if dominates(self.delta.x, self.delta.y) && dominates(self.velocity.x, self.velocity.y) {
            Some(Axis::Horizontal)
        } else if dominates(self.delta.y, self.delta.x)
            && dominates(self.velocity.y, self.velocity.x)
        {
            Some(Axis::Vertical)
        } else {
            None
        }
    }

    /// Projects the sample onto one axis as `(delta, velocity)`.
    pub fn along(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::Horizontal => (self.delta.x, self.velocity.x),
            Axis::Vertical => (self.delta.y, self.velocity.y),
        }
    }
}

fn dominates(main: f32, cross: f32) -> bool {
    main.abs() > (cross * AXIS_DOMINANCE_RATIO).abs()
}
