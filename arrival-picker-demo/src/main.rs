//! Scripted walkthrough of the arrival-window picker.
//!
//! Builds the mock day list, wires the selection callback to stdout, then
//! replays a few gestures: a two-page day swipe, a three-row slot drag, and
//! a diagonal shove that neither axis accepts.

mod format;
mod mock;

use std::{sync::Arc, time::Duration};

use arrival_picker::{
    DayPicker, DayPickerArgsBuilder, DragInput, OnSelect, PickerError, SharedDayPicker,
};
use chrono::Local;
use glam::Vec2;
use tracing::info;

const VIEWPORT_WIDTH: f32 = 375.0;
const SLOT_HEIGHT: f32 = 40.0;
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), PickerError> {
    init_tracing();

    let now = Local::now().naive_local();
    let days = mock::arrival_days(now);
    info!(days = days.len(), "generated mock arrival times");

    let on_select: OnSelect = Arc::new(|details| {
        println!("{}", format::selection_summary(details));
    });
    let args = DayPickerArgsBuilder::default()
        .viewport_width(VIEWPORT_WIDTH)
        .slot_height(SLOT_HEIGHT)
        .on_select(on_select)
        .build()
        .expect("picker args are complete");
    let picker = SharedDayPicker::new(DayPicker::new(days, args)?);

    // Two pages ahead on the day axis.
    swipe(
        &picker,
        Vec2::new(-2.0 * VIEWPORT_WIDTH, 6.0),
        Vec2::new(-1.4, 0.05),
    );
    // Three rows down that day's slot list.
    swipe(
        &picker,
        Vec2::new(2.0, -3.0 * SLOT_HEIGHT),
        Vec2::new(0.02, -0.9),
    );
    // A diagonal shove is claimed by neither axis.
    swipe(&picker, Vec2::new(60.0, 55.0), Vec2::new(0.8, 0.7));

    picker.read(|p| {
        let selection = p.selection();
        let day = p.active_slots().day();
        let slot = p.active_slots().selected_slot();
        info!(
            day = %format::day_title(day.date, now.date()),
            date = %format::day_subtitle(day.date),
            slot = %format::slot_label(day.date, slot.start_time, slot.end_time, now),
            available = slot.available,
            "settled on day {} slot {}",
            selection.day_index,
            selection.time_index,
        );
    });
    Ok(())
}

/// Replays one gesture as a handful of move frames followed by a release,
/// then drives the settle springs to rest.
fn swipe(picker: &SharedDayPicker, delta: Vec2, velocity: Vec2) {
    const FRAMES: u32 = 8;
    for frame in 1..=FRAMES {
        let progress = frame as f32 / FRAMES as f32;
        picker.drag_moved(DragInput::new(delta * progress, velocity));
    }
    picker.drag_ended();
    for _ in 0..600 {
        if !picker.tick(FRAME) {
            break;
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("info,arrival_picker=debug"),
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
