//! Gesture-driven arrival-window picker.
//!
//! The crate turns raw drag samples into a committed `{day, time slot}`
//! selection. The reusable primitive is [`AxisController`], a single-axis
//! state machine that maps a continuous drag position to the nearest
//! discrete index, locks movement past either end of the list, and snaps to
//! the committed resting position with a spring on release. It is
//! instantiated twice: horizontally over the list of days and vertically
//! over each day's arrival windows, with both axes sharing one touch target
//! through a 3:1 dominant-axis test that drops ambiguous gestures.
//!
//! [`DayPicker`] wires the two together: committing a day re-queries that
//! day's last committed slot, committing a slot reports with the day
//! untouched, and every commit reaches the `on_select` callback as a
//! [`SelectionDetails`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use arrival_picker::{
//!     Day, DayPicker, DayPickerArgsBuilder, DragInput, OnSelect, SelectionDetails, TimeSlot,
//! };
//! use chrono::{NaiveDate, NaiveTime};
//! use glam::Vec2;
//!
//! let days: Vec<Day> = (0..3)
//!     .map(|d| Day {
//!         date: NaiveDate::from_ymd_opt(2026, 9, 1 + d).expect("valid date"),
//!         time_slots: (8..12)
//!             .map(|h| TimeSlot {
//!                 start_time: NaiveTime::from_hms_opt(h, 0, 0).expect("valid time"),
//!                 end_time: NaiveTime::from_hms_opt(h + 1, 0, 0).expect("valid time"),
//!                 available: true,
//!             })
//!             .collect(),
//!     })
//!     .collect();
//!
//! let args = DayPickerArgsBuilder::default()
//!     .viewport_width(375.0)
//!     .on_select(Arc::new(|details: &SelectionDetails| {
//!         println!("{} slot {}", details.date, details.selection.time_index);
//!     }) as OnSelect)
//!     .build()
//!     .expect("complete args");
//! let mut picker = DayPicker::new(days, args).expect("valid input");
//!
//! // Swipe one page to the left and release: day 1 is committed.
//! picker.drag_moved(DragInput::new(Vec2::new(-375.0, 3.0), Vec2::new(-1.3, 0.1)));
//! picker.drag_ended();
//! assert_eq!(picker.selection().day_index, 1);
//! ```

pub mod axis;
pub mod day_picker;
pub mod error;
pub mod gesture;
pub mod model;
pub mod time_slot;

pub use axis::{AxisController, LiveTracking};
pub use day_picker::{
    DAY_LABEL_PARALLAX, DayPicker, DayPickerArgs, DayPickerArgsBuilder, OnSelect, SharedDayPicker,
};
pub use error::PickerError;
pub use gesture::{AXIS_DOMINANCE_RATIO, Axis, DragInput};
pub use model::{Day, Selection, SelectionDetails, TimeSlot};
pub use time_slot::TimeSlotPicker;
