//! Generic single-axis drag state machine.
//!
//! Turns a continuous drag along one axis into a discrete item index:
//! velocity-based boundary locking makes the first and last item hard stops,
//! release snaps to the nearest index, and a spring carries the position to
//! its resting place while the commit itself happens synchronously.

use std::time::Duration;

use tracing::trace;

use crate::error::PickerError;

/// Spring and integration constants for the settle animation.
mod motion {
    /// Spring stiffness, 1/s^2.
    pub const STIFFNESS: f32 = 170.0;
    /// Damping coefficient, 1/s. Near critical for this stiffness.
    pub const DAMPING: f32 = 26.0;
    /// Distance to target below which the spring snaps to rest.
    pub const REST_DISTANCE: f32 = 0.5;
    /// Speed below which the spring snaps to rest.
    pub const REST_SPEED: f32 = 0.5;
    /// Largest integration step; longer frames are subdivided for stability.
    pub const MAX_STEP: f32 = 1.0 / 30.0;
}

/// Whether a controller recomputes an implied index on every accepted drag
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveTracking {
    /// Only the committed index exists and the boundary lock reads it. The
    /// day axis works this way.
    Committed,
    /// An implied index follows the finger during the drag, driving both the
    /// in-drag highlight and the boundary lock. The time axes work this way.
    Live,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    /// Position captured when the drag began; deltas apply on top of it.
    origin_offset: f32,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    target: f32,
    speed: f32,
}

/// Drag state machine for one axis of `item_count` items of `item_extent`
/// size each.
///
/// The continuous position is negative-going as the index grows, matching a
/// viewport whose content pans left/up as the selection advances. Between
/// gestures `committed_index` is the single source of truth for the current
/// selection on this axis; the index is always derived from the position by
/// [`AxisController::index_for_position`], never maintained in parallel.
#[derive(Debug, Clone)]
pub struct AxisController {
    item_count: usize,
    item_extent: f32,
    live_tracking: LiveTracking,
    position: f32,
    committed_index: usize,
    live_index: Option<usize>,
    drag: Option<DragState>,
    settle: Option<Settle>,
}

impl AxisController {
    /// Creates a controller over `item_count` items of `item_extent` size.
    ///
    /// Fails fast on an empty axis or a non-positive extent, since neither
    /// admits a valid index.
    pub fn new(
        item_count: usize,
        item_extent: f32,
        live_tracking: LiveTracking,
    ) -> Result<Self, PickerError> {
        if item_count == 0 {
            return Err(PickerError::EmptyAxis);
        }
        if !(item_extent > 0.0) {
            return Err(PickerError::NonPositiveExtent(item_extent));
        }
        Ok(Self {
            item_count,
            item_extent,
            live_tracking,
            position: 0.0,
            committed_index: 0,
            live_index: None,
            drag: None,
            settle: None,
        })
    }

    /// Number of items on the axis.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The continuous position, for rendering transforms.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// The last committed index.
    pub fn committed_index(&self) -> usize {
        self.committed_index
    }

    /// The index the axis currently stands on: the live implied index while
    /// a live-tracking drag is under way, otherwise the committed one.
    pub fn current_index(&self) -> usize {
        self.live_index.unwrap_or(self.committed_index)
    }

    /// Whether a settle spring is still carrying the position to rest.
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Whether a drag is live on this axis.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Resting position of an item.
    pub fn position_for_index(&self, index: usize) -> f32 {
        -(index as f32) * self.item_extent
    }

    /// Nearest index for a continuous position, clamped into bounds.
    pub fn index_for_position(&self, position: f32) -> usize {
        let nearest = (position.abs() / self.item_extent).round() as usize;
        nearest.min(self.item_count - 1)
    }

    /// Starts a drag, capturing the current position as the delta origin.
    ///
    /// Cancels any in-flight settle; the new gesture owns the position from
    /// here on. Calling this while a drag is already live just re-captures
    /// the origin, so no re-entrant drag state can build up.
    pub fn begin_drag(&mut self) {
        self.settle = None;
        self.drag = Some(DragState {
            origin_offset: self.position,
        });
    }

    /// Applies one drag sample: `delta` since the gesture began and the
    /// instantaneous `velocity`, both along this axis.
    ///
    /// Direction comes from the sign of the velocity, not the delta, since
    /// velocity reflects the gesture's instantaneous intent even when the
    /// position briefly overshoots. Movement past either end of the list is
    /// rejected without touching the position, which is what makes the first
    /// and last item feel like hard stops. Without a live drag this is a
    /// no-op.
    pub fn update_drag(&mut self, delta: f32, velocity: f32) {
        let Some(drag) = self.drag else {
            return;
        };
        // Content pans negative as the index grows, so negative velocity
        // heads toward the last item.
        let toward_last = velocity < 0.0;
        let toward_first = velocity > 0.0;
        let index = self.current_index();
        let allowed =
            (toward_last && index + 1 < self.item_count) || (toward_first && index > 0);
        if !allowed {
            trace!(index, velocity, "drag past axis bound rejected");
            return;
        }
        self.position = drag.origin_offset + delta;
        if self.live_tracking == LiveTracking::Live {
            self.live_index = Some(self.index_for_position(self.position));
        }
    }

    /// Ends the drag: snaps to the nearest index, commits it synchronously,
    /// and starts the settle spring toward its resting position.
    ///
    /// Returns the committed index, or `None` when no drag was live (nothing
    /// to settle). The spring is cosmetic; correctness never waits on it.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.drag.take()?;
        let nearest = self.index_for_position(self.position);
        self.committed_index = nearest;
        self.live_index = None;
        self.settle = Some(Settle {
            target: self.position_for_index(nearest),
            speed: 0.0,
        });
        Some(nearest)
    }

    /// Programmatic move without a drag: jumps straight to the index's
    /// resting position and commits it.
    pub fn snap_to(&mut self, index: usize) -> Result<(), PickerError> {
        if index >= self.item_count {
            return Err(PickerError::IndexOutOfBounds {
                index,
                count: self.item_count,
            });
        }
        self.drag = None;
        self.settle = None;
        self.live_index = None;
        self.position = self.position_for_index(index);
        self.committed_index = index;
        Ok(())
    }

    /// Advances the settle spring by `dt`. Returns whether the position
    /// moved, so a host can keep scheduling redraws until rest.
    ///
    /// A live drag owns the position and suspends the spring.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(mut settle) = self.settle else {
            return false;
        };
        let start = self.position;
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let step = remaining.min(motion::MAX_STEP);
            remaining -= step;
            let accel = motion::STIFFNESS * (settle.target - self.position)
                - motion::DAMPING * settle.speed;
            settle.speed += accel * step;
            self.position += settle.speed * step;
        }
        if (settle.target - self.position).abs() < motion::REST_DISTANCE
            && settle.speed.abs() < motion::REST_SPEED
        {
            self.position = settle.target;
            self.settle = None;
        } else {
            self.settle = Some(settle);
        }
        self.position != start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn axis(count: usize) -> AxisController {
        AxisController::new(count, 100.0, LiveTracking::Committed).expect("valid axis")
    }

    fn live_axis(count: usize) -> AxisController {
        AxisController::new(count, 100.0, LiveTracking::Live).expect("valid axis")
    }

    fn settle(axis: &mut AxisController) {
        for _ in 0..600 {
            if !axis.tick(FRAME) {
                break;
            }
        }
    }

    #[test]
    fn empty_axis_is_rejected_at_construction() {
        let err = AxisController::new(0, 100.0, LiveTracking::Committed).unwrap_err();
        assert_eq!(err, PickerError::EmptyAxis);
    }

    #[test]
    fn non_positive_extent_is_rejected_at_construction() {
        assert!(AxisController::new(3, 0.0, LiveTracking::Committed).is_err());
        assert!(AxisController::new(3, -40.0, LiveTracking::Committed).is_err());
    }

    #[test]
    fn committed_index_stays_in_bounds_for_any_drag_sequence() {
        let mut axis = axis(4);
        let sequences: &[&[(f32, f32)]] = &[
            &[(-50.0, -1.0)],
            &[(-350.0, -2.0), (-900.0, -3.0)],
            &[(120.0, 1.0), (-80.0, -0.5), (40.0, 0.7)],
            &[(-5000.0, -4.0)],
            &[(5000.0, 4.0)],
        ];
        for sequence in sequences {
            axis.begin_drag();
            for &(delta, velocity) in *sequence {
                axis.update_drag(delta, velocity);
            }
            let committed = axis.end_drag().expect("drag was live");
            assert!(committed < axis.item_count());
            assert_eq!(committed, axis.committed_index());
            settle(&mut axis);
        }
    }

    #[test]
    fn release_without_movement_commits_the_same_index() {
        let mut axis = axis(6);
        axis.snap_to(3).expect("index in bounds");
        axis.begin_drag();
        assert_eq!(axis.end_drag(), Some(3));
        assert_eq!(axis.position(), axis.position_for_index(3));
    }

    #[test]
    fn first_item_is_a_hard_stop() {
        let mut axis = axis(5);
        axis.begin_drag();
        // Positive velocity heads toward lower indices; at index 0 the
        // update must leave the position untouched.
        axis.update_drag(80.0, 1.5);
        assert_eq!(axis.position(), 0.0);
        assert_eq!(axis.end_drag(), Some(0));
        assert_eq!(axis.committed_index(), 0);
    }

    #[test]
    fn last_item_is_a_hard_stop() {
        let mut axis = axis(3);
        axis.snap_to(2).expect("index in bounds");
        let resting = axis.position();
        axis.begin_drag();
        axis.update_drag(-250.0, -2.0);
        assert_eq!(axis.position(), resting);
        assert_eq!(axis.end_drag(), Some(2));
    }

    #[test]
    fn zero_velocity_has_no_direction_and_is_rejected() {
        let mut axis = axis(5);
        axis.begin_drag();
        axis.update_drag(-120.0, 0.0);
        assert_eq!(axis.position(), 0.0);
    }

    #[test]
    fn end_drag_without_begin_is_a_no_op() {
        let mut axis = axis(5);
        assert_eq!(axis.end_drag(), None);
        assert!(!axis.is_settling());
    }

    #[test]
    fn update_without_begin_is_a_no_op() {
        let mut axis = axis(5);
        axis.update_drag(-120.0, -1.0);
        assert_eq!(axis.position(), 0.0);
    }

    #[test]
    fn live_tracking_updates_the_implied_index_mid_drag() {
        let mut axis = live_axis(8);
        axis.begin_drag();
        axis.update_drag(-310.0, -1.0);
        assert_eq!(axis.current_index(), 3);
        // Committed value is untouched until release.
        assert_eq!(axis.committed_index(), 0);
        assert_eq!(axis.end_drag(), Some(3));
        assert_eq!(axis.current_index(), 3);
    }

    #[test]
    fn committed_tracking_keeps_the_implied_index_private() {
        let mut axis = axis(8);
        axis.begin_drag();
        axis.update_drag(-310.0, -1.0);
        assert_eq!(axis.current_index(), 0);
        assert_eq!(axis.end_drag(), Some(3));
    }

    #[test]
    fn live_boundary_lock_reads_the_implied_index() {
        let mut axis = live_axis(3);
        axis.begin_drag();
        // The implied index reaches the last item mid-drag; further movement
        // toward higher indices must then be rejected.
        axis.update_drag(-200.0, -1.0);
        assert_eq!(axis.current_index(), 2);
        axis.update_drag(-320.0, -1.0);
        assert_eq!(axis.position(), -200.0);
    }

    #[test]
    fn settle_converges_to_the_snapped_resting_position() {
        let mut axis = axis(4);
        axis.begin_drag();
        axis.update_drag(-180.0, -1.0);
        assert_eq!(axis.end_drag(), Some(2));
        assert!(axis.is_settling());
        settle(&mut axis);
        assert!(!axis.is_settling());
        assert_eq!(axis.position(), axis.position_for_index(2));
    }

    #[test]
    fn new_drag_cancels_an_in_flight_settle() {
        let mut axis = axis(4);
        axis.begin_drag();
        axis.update_drag(-180.0, -1.0);
        axis.end_drag();
        axis.tick(FRAME);
        let mid_settle = axis.position();
        axis.begin_drag();
        assert!(!axis.is_settling());
        assert!(!axis.tick(FRAME));
        // The new gesture owns the position from where the spring left it.
        axis.update_drag(-10.0, -1.0);
        assert_eq!(axis.position(), mid_settle - 10.0);
    }

    #[test]
    fn single_item_axis_is_boundary_locked_in_both_directions() {
        let mut axis = axis(1);
        axis.begin_drag();
        axis.update_drag(-50.0, -1.0);
        axis.update_drag(50.0, 1.0);
        assert_eq!(axis.position(), 0.0);
        assert_eq!(axis.end_drag(), Some(0));
    }

    #[test]
    fn snap_to_out_of_bounds_is_an_error() {
        let mut axis = axis(3);
        assert_eq!(
            axis.snap_to(3),
            Err(PickerError::IndexOutOfBounds { index: 3, count: 3 })
        );
    }

    #[test]
    fn position_and_index_derivations_are_inverses_on_resting_points() {
        let axis = axis(10);
        for index in 0..10 {
            assert_eq!(axis.index_for_position(axis.position_for_index(index)), index);
        }
    }
}
