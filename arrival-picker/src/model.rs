//! Immutable input data and the derived composite selection.

use chrono::{NaiveDate, NaiveTime};

/// One selectable arrival window on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// Start of the window.
    pub start_time: NaiveTime,
    /// End of the window.
    pub end_time: NaiveTime,
    /// Advisory flag: unavailable slots stay selectable and are only dimmed
    /// by the presentation layer.
    pub available: bool,
}

/// A calendar day together with its selectable arrival windows.
///
/// Supplied once at construction and read-only afterwards; the position of a
/// day in the input list is its stable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// Calendar date of the day.
    pub date: NaiveDate,
    /// Ordered arrival windows for this day.
    pub time_slots: Vec<TimeSlot>,
}

/// The committed pair of axis indices.
///
/// Recomputed on every commit; it mirrors the two committed indices and is
/// never stored independently of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Committed index on the day axis.
    pub day_index: usize,
    /// Committed slot index on that day's time axis.
    pub time_index: usize,
}

/// Everything the application boundary needs to render a committed
/// selection. String formatting stays on the caller's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionDetails {
    /// The committed index pair.
    pub selection: Selection,
    /// Date of the selected day.
    pub date: NaiveDate,
    /// The selected arrival window.
    pub slot: TimeSlot,
}
