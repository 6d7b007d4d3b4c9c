//! Vertical axis over one day's arrival windows.

use std::time::Duration;

use crate::{
    axis::{AxisController, LiveTracking},
    error::PickerError,
    model::{Day, TimeSlot},
};

/// Drag state for a single day's time-slot list.
///
/// Each day owns one of these, built eagerly when the day picker is
/// constructed. The committed index survives day switches, so coming back to
/// a day restores whatever slot was picked there earlier. The axis tracks a
/// live implied index so the slot under the finger can be highlighted while
/// the drag is still in flight.
#[derive(Debug, Clone)]
pub struct TimeSlotPicker {
    day: Day,
    axis: AxisController,
}

impl TimeSlotPicker {
    /// Builds the vertical axis for `day`, one `slot_height` row per slot.
    pub fn new(day: Day, slot_height: f32) -> Result<Self, PickerError> {
        let axis = AxisController::new(day.time_slots.len(), slot_height, LiveTracking::Live)?;
        Ok(Self { day, axis })
    }

    /// The day this picker belongs to.
    pub fn day(&self) -> &Day {
        &self.day
    }

    /// Last committed slot index; what the owner reads when this day becomes
    /// the active one again.
    pub fn selected_index(&self) -> usize {
        self.axis.committed_index()
    }

    /// Slot index under the finger while a drag is live, falling back to the
    /// committed index between gestures.
    pub fn live_index(&self) -> usize {
        self.axis.current_index()
    }

    /// The committed slot.
    pub fn selected_slot(&self) -> &TimeSlot {
        &self.day.time_slots[self.axis.committed_index()]
    }

    /// Whether the committed slot is marked available. Advisory only; an
    /// unavailable slot can still be committed and this flag merely lets the
    /// presentation dim it.
    pub fn selected_slot_available(&self) -> bool {
        self.selected_slot().available
    }

    /// Vertical content offset, for the rendering transform.
    pub fn position(&self) -> f32 {
        self.axis.position()
    }

    /// Starts a vertical drag on this day's slots.
    pub fn begin_drag(&mut self) {
        self.axis.begin_drag();
    }

    /// Applies one vertical drag sample.
    pub fn update_drag(&mut self, delta: f32, velocity: f32) {
        self.axis.update_drag(delta, velocity);
    }

    /// Ends the drag, committing and returning the nearest slot index.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.axis.end_drag()
    }

    /// Programmatically commits `index` without a gesture.
    pub fn snap_to(&mut self, index: usize) -> Result<(), PickerError> {
        self.axis.snap_to(index)
    }

    /// Advances the settle spring; returns whether the position moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.axis.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn slot(hour: u32, available: bool) -> TimeSlot {
        TimeSlot {
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).expect("valid time"),
            available,
        }
    }

    fn day(slots: usize) -> Day {
        Day {
            date: NaiveDate::from_ymd_opt(2026, 8, 28).expect("valid date"),
            time_slots: (0..slots as u32).map(|h| slot(h, h != 2)).collect(),
        }
    }

    #[test]
    fn day_without_slots_is_rejected() {
        let empty = Day {
            date: NaiveDate::from_ymd_opt(2026, 8, 28).expect("valid date"),
            time_slots: Vec::new(),
        };
        assert_eq!(
            TimeSlotPicker::new(empty, 40.0).unwrap_err(),
            PickerError::EmptyAxis
        );
    }

    #[test]
    fn live_index_follows_the_finger_before_commit() {
        let mut picker = TimeSlotPicker::new(day(6), 40.0).expect("valid day");
        picker.begin_drag();
        picker.update_drag(-130.0, -0.8);
        assert_eq!(picker.live_index(), 3);
        assert_eq!(picker.selected_index(), 0);
        assert_eq!(picker.end_drag(), Some(3));
        assert_eq!(picker.selected_index(), 3);
    }

    #[test]
    fn unavailable_slots_are_still_selectable() {
        let mut picker = TimeSlotPicker::new(day(6), 40.0).expect("valid day");
        picker.begin_drag();
        picker.update_drag(-80.0, -0.8);
        assert_eq!(picker.end_drag(), Some(2));
        assert!(!picker.selected_slot_available());
        assert_eq!(picker.selected_slot().start_time.format("%H").to_string(), "02");
    }
}
