use chrono::{NaiveDate, Weekday};

use crate::generate::occurrence_dates;
use crate::rule::{Occurrence, RecurrenceRule};
use crate::window::ExpansionWindow;

pub struct RecurrenceCase {
    pub name: &'static str,
    pub rule: RecurrenceRule,
    pub window: (&'static str, &'static str),
    pub expected: &'static [&'static str],
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "weekly_wednesday_july",
            rule: RecurrenceRule::Weekly {
                weekday: Weekday::Wed,
            },
            window: ("2024-07-01", "2024-07-31"),
            expected: &[
                "2024-07-03",
                "2024-07-10",
                "2024-07-17",
                "2024-07-24",
                "2024-07-31",
            ],
        },
        RecurrenceCase {
            name: "weekly_sunday_across_year_end",
            rule: RecurrenceRule::Weekly {
                weekday: Weekday::Sun,
            },
            window: ("2024-12-25", "2025-01-08"),
            expected: &["2024-12-29", "2025-01-05"],
        },
        RecurrenceCase {
            name: "weekly_single_day_window_miss",
            rule: RecurrenceRule::Weekly {
                weekday: Weekday::Fri,
            },
            window: ("2024-07-03", "2024-07-03"),
            expected: &[],
        },
        RecurrenceCase {
            name: "monthly_day_31_non_leap_february",
            rule: RecurrenceRule::MonthlyByDay { day: 31 },
            window: ("2023-02-01", "2023-02-28"),
            expected: &["2023-02-28"],
        },
        RecurrenceCase {
            name: "monthly_day_30_leap_february",
            rule: RecurrenceRule::MonthlyByDay { day: 30 },
            window: ("2024-02-01", "2024-03-31"),
            expected: &["2024-02-29", "2024-03-30"],
        },
        RecurrenceCase {
            name: "monthly_day_15_quarter",
            rule: RecurrenceRule::MonthlyByDay { day: 15 },
            window: ("2024-01-01", "2024-03-31"),
            expected: &["2024-01-15", "2024-02-15", "2024-03-15"],
        },
        RecurrenceCase {
            name: "monthly_last_day_july",
            rule: RecurrenceRule::MonthlyLastDay,
            window: ("2024-07-01", "2024-07-31"),
            expected: &["2024-07-31"],
        },
        RecurrenceCase {
            name: "monthly_last_day_year_end",
            rule: RecurrenceRule::MonthlyLastDay,
            window: ("2024-11-15", "2025-02-15"),
            expected: &["2024-11-30", "2024-12-31", "2025-01-31"],
        },
        RecurrenceCase {
            name: "monthly_last_weekday_july",
            rule: RecurrenceRule::MonthlyLastWeekday,
            window: ("2024-07-01", "2024-07-31"),
            expected: &["2024-07-31"],
        },
        RecurrenceCase {
            name: "monthly_last_weekday_saturday_end",
            rule: RecurrenceRule::MonthlyLastWeekday,
            window: ("2024-08-01", "2024-08-31"),
            expected: &["2024-08-30"],
        },
        RecurrenceCase {
            name: "monthly_last_weekday_sunday_end",
            rule: RecurrenceRule::MonthlyLastWeekday,
            window: ("2024-03-01", "2024-03-31"),
            expected: &["2024-03-29"],
        },
        RecurrenceCase {
            name: "monthly_first_monday",
            rule: RecurrenceRule::MonthlyNthWeekday {
                occurrence: Occurrence::First,
                weekday: Weekday::Mon,
            },
            window: ("2024-07-01", "2024-09-30"),
            expected: &["2024-07-01", "2024-08-05", "2024-09-02"],
        },
        RecurrenceCase {
            name: "monthly_fourth_monday_exactly_four",
            rule: RecurrenceRule::MonthlyNthWeekday {
                occurrence: Occurrence::Fourth,
                weekday: Weekday::Mon,
            },
            window: ("2023-02-01", "2023-02-28"),
            expected: &["2023-02-27"],
        },
        RecurrenceCase {
            name: "monthly_fourth_monday_five_available",
            rule: RecurrenceRule::MonthlyNthWeekday {
                occurrence: Occurrence::Fourth,
                weekday: Weekday::Mon,
            },
            window: ("2024-07-01", "2024-07-31"),
            expected: &["2024-07-22"],
        },
        RecurrenceCase {
            name: "monthly_last_monday_february",
            rule: RecurrenceRule::MonthlyNthWeekday {
                occurrence: Occurrence::Last,
                weekday: Weekday::Mon,
            },
            window: ("2024-02-01", "2024-02-29"),
            expected: &["2024-02-26"],
        },
        RecurrenceCase {
            name: "monthly_second_tuesday_partial_window",
            rule: RecurrenceRule::MonthlyNthWeekday {
                occurrence: Occurrence::Second,
                weekday: Weekday::Tue,
            },
            window: ("2024-07-10", "2024-08-31"),
            expected: &["2024-08-13"],
        },
    ]
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}

pub fn assert_case(case: &RecurrenceCase) {
    let window = ExpansionWindow::new(parse_date(case.window.0), parse_date(case.window.1));
    let actual = occurrence_dates(case.rule, window);
    let expected: Vec<NaiveDate> = case
        .expected
        .iter()
        .map(|value| parse_date(value))
        .collect();

    assert_eq!(actual, expected, "Case {} did not match", case.name);
}
