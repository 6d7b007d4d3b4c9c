//! Mock arrival-time data: the next 30 days, one hour-long window per hour,
//! with a few windows randomly marked unavailable.

use arrival_picker::{Day, TimeSlot};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use rand::Rng;

/// Hours covered by one arrival window.
pub const ARRIVAL_WINDOW_HOURS: i64 = 1;
/// Days of mock data to generate.
pub const MOCK_DAY_COUNT: usize = 30;

/// Generates the mock day list starting at `now`.
pub fn arrival_days(now: NaiveDateTime) -> Vec<Day> {
    let mut rng = rand::rng();
    (0..MOCK_DAY_COUNT)
        .map(|offset| Day {
            date: (now + Duration::days(offset as i64)).date(),
            time_slots: time_slots_from(now, &mut rng),
        })
        .collect()
}

fn time_slots_from(now: NaiveDateTime, rng: &mut impl Rng) -> Vec<TimeSlot> {
    let top_of_hour =
        NaiveTime::from_hms_opt(now.hour(), 0, 0).expect("current hour is a valid time");
    (0..24 - ARRIVAL_WINDOW_HOURS)
        .map(|offset| {
            let start_time = top_of_hour + Duration::hours(offset);
            TimeSlot {
                start_time,
                end_time: start_time + Duration::hours(ARRIVAL_WINDOW_HOURS),
                // Roughly one window in five is unavailable.
                available: rng.random_range(0..5) != 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 28)
            .expect("valid date")
            .and_hms_opt(12, 30, 15)
            .expect("valid time")
    }

    #[test]
    fn generates_thirty_consecutive_days() {
        let days = arrival_days(noon());
        assert_eq!(days.len(), MOCK_DAY_COUNT);
        for (offset, day) in days.iter().enumerate() {
            assert_eq!(day.date, noon().date() + Duration::days(offset as i64));
        }
    }

    #[test]
    fn slots_start_on_the_hour_and_span_the_window() {
        let days = arrival_days(noon());
        for day in &days {
            assert_eq!(day.time_slots.len(), (24 - ARRIVAL_WINDOW_HOURS) as usize);
            for slot in &day.time_slots {
                assert_eq!(slot.start_time.minute(), 0);
                assert_eq!(
                    slot.end_time,
                    slot.start_time + Duration::hours(ARRIVAL_WINDOW_HOURS)
                );
            }
        }
        assert_eq!(
            days[0].time_slots[0].start_time,
            NaiveTime::from_hms_opt(12, 0, 0).expect("valid time")
        );
    }
}
