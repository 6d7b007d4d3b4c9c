//! Horizontal day axis, its per-day time-slot pickers, and the composite
//! selection state machine.

use std::{sync::Arc, time::Duration};

use derive_builder::Builder;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{
    axis::{AxisController, LiveTracking},
    error::PickerError,
    gesture::{Axis, DragInput},
    model::{Day, Selection, SelectionDetails},
    time_slot::TimeSlotPicker,
};

/// Day labels pan at this fraction of the content speed, a presentational
/// parallax. Index math never reads it; only the label transform does.
pub const DAY_LABEL_PARALLAX: f32 = 3.0;

/// Callback receiving every committed selection.
pub type OnSelect = Arc<dyn Fn(&SelectionDetails) + Send + Sync>;

fn noop_on_select() -> OnSelect {
    Arc::new(|_| {})
}

/// Arguments for [`DayPicker::new`].
#[derive(Builder, Clone)]
pub struct DayPickerArgs {
    /// Width of one day page; the day axis item extent. Supplied by the
    /// hosting environment, fixed configuration.
    pub viewport_width: f32,
    /// Height of one time-slot row; the time axes' item extent.
    #[builder(default = "40.0")]
    pub slot_height: f32,
    /// Invoked with the composite selection on every day or time commit.
    #[builder(default = "noop_on_select()")]
    pub on_select: OnSelect,
}

/// The composite picker: one horizontal axis over the days and one eagerly
/// built [`TimeSlotPicker`] per day.
///
/// Raw drag samples come in through [`DayPicker::drag_moved`] and
/// [`DayPicker::drag_ended`]. A gesture stays unclaimed until a sample
/// passes the 3:1 dominant-axis test; the winning axis then receives every
/// remaining sample of the gesture. Vertical drags always go to the active
/// day's slot picker, so commits from inactive days cannot occur. On every
/// commit the selected day and slot pair is handed to the `on_select`
/// callback.
pub struct DayPicker {
    day_axis: AxisController,
    slots: Vec<TimeSlotPicker>,
    claim: Option<Axis>,
    on_select: OnSelect,
}

impl DayPicker {
    /// Builds the picker over `days`, failing fast on an empty day list, a
    /// day without slots, or non-positive geometry.
    ///
    /// Initial state selects the first slot of the first day.
    pub fn new(days: Vec<Day>, args: DayPickerArgs) -> Result<Self, PickerError> {
        if days.is_empty() {
            return Err(PickerError::NoDays);
        }
        let day_axis =
            AxisController::new(days.len(), args.viewport_width, LiveTracking::Committed)?;
        let mut slots = Vec::with_capacity(days.len());
        for (day_index, day) in days.into_iter().enumerate() {
            if day.time_slots.is_empty() {
                return Err(PickerError::EmptySlots { day_index });
            }
            slots.push(TimeSlotPicker::new(day, args.slot_height)?);
        }
        Ok(Self {
            day_axis,
            slots,
            claim: None,
            on_select: args.on_select,
        })
    }

    /// Number of days on the horizontal axis.
    pub fn day_count(&self) -> usize {
        self.slots.len()
    }

    /// The committed day index.
    pub fn day_index(&self) -> usize {
        self.day_axis.committed_index()
    }

    /// The day at `day_index`, if in bounds.
    pub fn day(&self, day_index: usize) -> Option<&Day> {
        self.slots.get(day_index).map(TimeSlotPicker::day)
    }

    /// The slot picker for `day_index`, if in bounds.
    pub fn slot_picker(&self, day_index: usize) -> Option<&TimeSlotPicker> {
        self.slots.get(day_index)
    }

    /// The active day's slot picker, the one vertical drags are routed to.
    pub fn active_slots(&self) -> &TimeSlotPicker {
        &self.slots[self.day_index()]
    }

    /// The current composite selection, mirroring the two committed indices.
    pub fn selection(&self) -> Selection {
        Selection {
            day_index: self.day_index(),
            time_index: self.active_slots().selected_index(),
        }
    }

    /// Horizontal content offset of the day pages.
    pub fn day_position(&self) -> f32 {
        self.day_axis.position()
    }

    /// Horizontal offset for the day labels, panning slower than the pages.
    pub fn day_label_position(&self) -> f32 {
        self.day_position() / DAY_LABEL_PARALLAX
    }

    /// Feeds one drag sample into the picker.
    ///
    /// While the gesture is unclaimed, the sample must pass the dominant-axis
    /// test before either axis reacts; ambiguous samples are dropped. The
    /// claiming axis captures its drag origin at claim time and keeps the
    /// gesture until release.
    pub fn drag_moved(&mut self, input: DragInput) {
        let axis = match self.claim {
            Some(axis) => axis,
            None => {
                let Some(axis) = input.dominant_axis() else {
                    trace!(?input, "ambiguous drag sample dropped");
                    return;
                };
                match axis {
                    Axis::Horizontal => self.day_axis.begin_drag(),
                    Axis::Vertical => {
                        let day_index = self.day_index();
                        self.slots[day_index].begin_drag();
                    }
                }
                self.claim = Some(axis);
                axis
            }
        };
        let (delta, velocity) = input.along(axis);
        match axis {
            Axis::Horizontal => self.day_axis.update_drag(delta, velocity),
            Axis::Vertical => {
                let day_index = self.day_index();
                self.slots[day_index].update_drag(delta, velocity);
            }
        }
    }

    /// Releases the current gesture.
    ///
    /// A day-axis release commits the nearest day, re-queries that day's last
    /// committed slot, and emits the pair. A time-axis release commits the
    /// nearest slot on the active day and emits with the day untouched. A
    /// release without a claimed gesture is a no-op.
    pub fn drag_ended(&mut self) {
        let Some(axis) = self.claim.take() else {
            return;
        };
        match axis {
            Axis::Horizontal => {
                if let Some(day_index) = self.day_axis.end_drag() {
                    let time_index = self.slots[day_index].selected_index();
                    self.emit(day_index, time_index);
                }
            }
            Axis::Vertical => {
                let day_index = self.day_index();
                if let Some(time_index) = self.slots[day_index].end_drag() {
                    self.emit(day_index, time_index);
                }
            }
        }
    }

    /// Programmatic day selection without a gesture; commits and emits like
    /// a released swipe.
    pub fn select_day(&mut self, day_index: usize) -> Result<(), PickerError> {
        self.day_axis.snap_to(day_index)?;
        let time_index = self.slots[day_index].selected_index();
        self.emit(day_index, time_index);
        Ok(())
    }

    /// Programmatic slot selection on the active day.
    pub fn select_time_slot(&mut self, time_index: usize) -> Result<(), PickerError> {
        let day_index = self.day_index();
        self.slots[day_index].snap_to(time_index)?;
        self.emit(day_index, time_index);
        Ok(())
    }

    /// Advances every settle spring by `dt`; returns whether any position
    /// moved, so the host can keep scheduling frames until rest.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut moved = self.day_axis.tick(dt);
        for picker in &mut self.slots {
            moved |= picker.tick(dt);
        }
        moved
    }

    fn emit(&self, day_index: usize, time_index: usize) {
        let picker = &self.slots[day_index];
        let details = SelectionDetails {
            selection: Selection {
                day_index,
                time_index,
            },
            date: picker.day().date,
            slot: picker.day().time_slots[time_index],
        };
        debug!(day_index, time_index, "selection committed");
        (self.on_select)(&details);
    }
}

/// Clonable handle sharing one [`DayPicker`] behind a lock, for hosts that
/// route input events and frame ticks from different call sites.
#[derive(Clone)]
pub struct SharedDayPicker {
    inner: Arc<RwLock<DayPicker>>,
}

impl SharedDayPicker {
    /// Wraps a picker in a shared handle.
    pub fn new(picker: DayPicker) -> Self {
        Self {
            inner: Arc::new(RwLock::new(picker)),
        }
    }

    /// See [`DayPicker::drag_moved`].
    pub fn drag_moved(&self, input: DragInput) {
        self.inner.write().drag_moved(input);
    }

    /// See [`DayPicker::drag_ended`].
    pub fn drag_ended(&self) {
        self.inner.write().drag_ended();
    }

    /// See [`DayPicker::tick`].
    pub fn tick(&self, dt: Duration) -> bool {
        self.inner.write().tick(dt)
    }

    /// See [`DayPicker::selection`].
    pub fn selection(&self) -> Selection {
        self.inner.read().selection()
    }

    /// See [`DayPicker::select_day`].
    pub fn select_day(&self, day_index: usize) -> Result<(), PickerError> {
        self.inner.write().select_day(day_index)
    }

    /// See [`DayPicker::select_time_slot`].
    pub fn select_time_slot(&self, time_index: usize) -> Result<(), PickerError> {
        self.inner.write().select_time_slot(time_index)
    }

    /// Runs a closure with read access to the underlying picker.
    pub fn read<R>(&self, f: impl FnOnce(&DayPicker) -> R) -> R {
        f(&self.inner.read())
    }
}
