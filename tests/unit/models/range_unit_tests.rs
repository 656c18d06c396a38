// Unit tests for RangeUnit
// Step unit and amount table, name parsing

use test_case::test_case;

use notes_agenda::models::range::{CalendarUnit, RangeUnit};
use notes_agenda::AgendaError;

#[test_case(RangeUnit::Day, CalendarUnit::Day, 1; "day")]
#[test_case(RangeUnit::Week, CalendarUnit::Week, 1; "week")]
#[test_case(RangeUnit::Fortnight, CalendarUnit::Week, 2; "fortnight")]
#[test_case(RangeUnit::Month, CalendarUnit::Month, 1; "month")]
#[test_case(RangeUnit::Quarter, CalendarUnit::Quarter, 1; "quarter")]
#[test_case(RangeUnit::Year, CalendarUnit::Year, 1; "year")]
fn test_step_table(unit: RangeUnit, step_unit: CalendarUnit, amount: u32) {
    assert_eq!(unit.step_unit(), step_unit);
    assert_eq!(unit.step_amount(), amount);
}

#[test_case("Day", RangeUnit::Day; "exact name")]
#[test_case("week", RangeUnit::Week; "lower case")]
#[test_case("FORTNIGHT", RangeUnit::Fortnight; "upper case")]
#[test_case("  Quarter\n", RangeUnit::Quarter; "surrounding whitespace")]
fn test_parse_known_names(raw: &str, expected: RangeUnit) {
    assert_eq!(raw.parse::<RangeUnit>(), Ok(expected));
}

#[test_case("Decade"; "unknown unit")]
#[test_case("d"; "shortcut letter")]
#[test_case("Fort night"; "misspelled")]
fn test_parse_unknown_names(raw: &str) {
    assert_eq!(
        raw.parse::<RangeUnit>(),
        Err(AgendaError::InvalidRangeUnit(raw.to_string()))
    );
}

#[test]
fn test_selector_order() {
    let names: Vec<_> = RangeUnit::ALL.iter().map(|u| u.to_string()).collect();
    assert_eq!(names, ["Day", "Week", "Fortnight", "Month", "Quarter", "Year"]);
}

#[test]
fn test_month_based_units_report_length() {
    assert_eq!(CalendarUnit::Month.months(), Some(1));
    assert_eq!(CalendarUnit::Quarter.months(), Some(3));
    assert_eq!(CalendarUnit::Year.months(), Some(12));
    assert_eq!(CalendarUnit::Week.months(), None);
}
