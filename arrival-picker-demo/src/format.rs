//! Human-readable labels for days, slots, and the final selection string.
//!
//! Presentation only; the core picker never formats anything.

use arrival_picker::SelectionDetails;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// "Today", "Tomorrow", or the weekday name.
pub fn day_title(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A").to_string(),
    }
}

/// Abbreviated month plus ordinal day, e.g. "Aug 28th".
pub fn day_subtitle(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), ordinal(date.day()))
}

/// Slot label: "Within the hour" when the window closes inside the current
/// hour, otherwise its start and end times.
pub fn slot_label(date: NaiveDate, start: NaiveTime, end: NaiveTime, now: NaiveDateTime) -> String {
    let closes = date.and_time(end);
    if (closes - now).num_hours() == 0 {
        "Within the hour".to_string()
    } else {
        format!("{} - {}", clock(start), clock(end))
    }
}

/// The string handed to the application boundary on every commit.
pub fn selection_summary(details: &SelectionDetails) -> String {
    format!(
        "Selected {} between {} - {}",
        details.date.format("%-m/%-d/%Y"),
        clock(details.slot.start_time),
        clock(details.slot.end_time),
    )
}

fn clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

fn ordinal(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix}")
}

#[cfg(test)]
mod tests {
    use arrival_picker::{Selection, TimeSlot};

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).expect("valid date")
    }

    #[test]
    fn titles_near_today_are_relative() {
        let today = date(28);
        assert_eq!(day_title(date(28), today), "Today");
        assert_eq!(day_title(date(29), today), "Tomorrow");
        assert_eq!(day_title(date(30), today), "Sunday");
    }

    #[test]
    fn subtitles_use_ordinal_days() {
        assert_eq!(day_subtitle(date(1)), "Aug 1st");
        assert_eq!(day_subtitle(date(2)), "Aug 2nd");
        assert_eq!(day_subtitle(date(3)), "Aug 3rd");
        assert_eq!(day_subtitle(date(11)), "Aug 11th");
        assert_eq!(day_subtitle(date(22)), "Aug 22nd");
        assert_eq!(day_subtitle(date(28)), "Aug 28th");
    }

    #[test]
    fn slot_closing_this_hour_is_within_the_hour() {
        let now = date(28).and_hms_opt(12, 30, 0).expect("valid time");
        let start = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
        let end = NaiveTime::from_hms_opt(13, 0, 0).expect("valid time");
        assert_eq!(slot_label(date(28), start, end, now), "Within the hour");

        let later_start = NaiveTime::from_hms_opt(15, 0, 0).expect("valid time");
        let later_end = NaiveTime::from_hms_opt(16, 0, 0).expect("valid time");
        assert_eq!(
            slot_label(date(28), later_start, later_end, now),
            "3:00 PM - 4:00 PM"
        );
    }

    #[test]
    fn summary_matches_the_boundary_format() {
        let details = SelectionDetails {
            selection: Selection {
                day_index: 2,
                time_index: 3,
            },
            date: date(30),
            slot: TimeSlot {
                start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
                end_time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
                available: true,
            },
        };
        assert_eq!(
            selection_summary(&details),
            "Selected 8/30/2026 between 9:00 AM - 10:00 AM"
        );
    }
}
