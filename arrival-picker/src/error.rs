use thiserror::Error;

/// Errors raised while constructing or programmatically moving a picker.
///
/// Everything here is a configuration problem caught up front; in-flight
/// boundary conditions (drags past the ends of a list, releases without a
/// drag) are policy no-ops, not errors.
#[derive(Debug, Error, PartialEq)]
pub enum PickerError {
    /// An axis over zero items has no valid index.
    #[error("cannot build an axis over zero items")]
    EmptyAxis,
    /// Item extent must be a positive distance.
    #[error("item extent must be positive, got {0}")]
    NonPositiveExtent(f32),
    /// The picker was given an empty day list.
    #[error("no days supplied to the picker")]
    NoDays,
    /// A day without time slots cannot host a time axis.
    #[error("day {day_index} has no time slots")]
    EmptySlots {
        /// Index of the offending day in the input list.
        day_index: usize,
    },
    /// A programmatic move named an index past the end of its axis.
    #[error("index {index} out of bounds for an axis of {count} items")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of items on the axis.
        count: usize,
    },
}
