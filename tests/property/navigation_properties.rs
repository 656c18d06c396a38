// Property-based tests for range navigation and slot layout
// Exercises stepping and rendering with random dates and items

use chrono::{Datelike, NaiveDate, TimeZone, Weekday};
use proptest::prelude::*;

use notes_agenda::models::item::ScheduledItem;
use notes_agenda::models::range::{CalendarUnit, Direction, RangeUnit};
use notes_agenda::models::settings::AgendaSettings;
use notes_agenda::services::agenda::slot_grid::slot_timestamp;
use notes_agenda::services::agenda::AgendaController;
use notes_agenda::services::clock::FixedClock;
use notes_agenda::services::navigation::RangeNavigator;

const ZONE: chrono_tz::Tz = chrono_tz::America::Chicago;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn any_week_start() -> impl Strategy<Value = Weekday> {
    prop_oneof![Just(Weekday::Sun), Just(Weekday::Mon), Just(Weekday::Sat)]
}

proptest! {
    /// Property: Fortnight forward then backward returns to the same week start
    #[test]
    fn prop_fortnight_round_trip_on_week_start(date in any_date(), first in any_week_start()) {
        let navigator = RangeNavigator::new(first);
        let week_start = navigator.start_of_period(date, CalendarUnit::Week);

        let forward = navigator.step(week_start, RangeUnit::Fortnight, Direction::Forward).unwrap();
        prop_assert_eq!((forward - week_start).num_days(), 14);
        prop_assert_eq!(forward.weekday(), first);

        let back = navigator.step(forward, RangeUnit::Fortnight, Direction::Backward).unwrap();
        prop_assert_eq!(back, week_start);
    }

    /// Property: Year forward then backward lands on January 1 of the original year
    #[test]
    fn prop_year_round_trip(date in any_date()) {
        let navigator = RangeNavigator::default();
        let forward = navigator.step(date, RangeUnit::Year, Direction::Forward).unwrap();
        let back = navigator.step(forward, RangeUnit::Year, Direction::Backward).unwrap();
        prop_assert_eq!(back, NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap());
    }

    /// Property: Every step result is the start of its step unit's period
    #[test]
    fn prop_step_result_is_period_start(
        date in any_date(),
        unit in prop::sample::select(RangeUnit::ALL.to_vec()),
        forward in any::<bool>(),
    ) {
        let navigator = RangeNavigator::default();
        let direction = if forward { Direction::Forward } else { Direction::Backward };
        let target = navigator.step(date, unit, direction).unwrap();

        prop_assert_eq!(navigator.start_of_period(target, unit.step_unit()), target);
        if forward {
            prop_assert!(target > navigator.start_of_period(date, unit.step_unit()));
        } else {
            prop_assert!(target < date);
        }
    }

    /// Property: Month steps never keep the day of month
    #[test]
    fn prop_month_step_snaps_to_first(date in any_date(), forward in any::<bool>()) {
        let navigator = RangeNavigator::default();
        let direction = if forward { Direction::Forward } else { Direction::Backward };
        let target = navigator.step(date, RangeUnit::Month, direction).unwrap();
        prop_assert_eq!(target.day(), 1);
    }

    /// Property: The layout is always 24 x 4 and each quarter item appears where it starts
    #[test]
    fn prop_layout_shape_and_placement(
        slots in prop::collection::vec((0..24u32, 0..4usize), 0..40),
    ) {
        let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let now = ZONE.with_ymd_and_hms(2024, 6, 12, 10, 0, 0).unwrap();
        let controller =
            AgendaController::new(&AgendaSettings::default(), ZONE, FixedClock::new(now));

        let items: Vec<ScheduledItem<chrono_tz::Tz>> = slots
            .iter()
            .map(|(hour, quarter)| {
                let minute = [0, 15, 30, 45][*quarter];
                let start = slot_timestamp(date, *hour, minute, &ZONE);
                ScheduledItem::event(format!("{hour}:{minute}"), start)
            })
            .collect();

        let layout = controller.render_now(date, &items);
        prop_assert_eq!(layout.hours.len(), 24);
        prop_assert!(layout.hours.iter().all(|h| h.quarter_slots.len() == 4));

        for (hour, quarter) in &slots {
            let minute = [0, 15, 30, 45][*quarter];
            let cell = layout.cell(*hour, minute).unwrap();
            prop_assert!(!cell.is_placeholder);
            prop_assert_eq!(&cell.item.body, &format!("{hour}:{minute}"));
        }
    }
}
