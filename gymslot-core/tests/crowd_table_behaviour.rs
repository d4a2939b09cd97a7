//! Behavioural coverage for crowd table lookups.
#![expect(
    clippy::float_arithmetic,
    reason = "assertions compare crowd levels with a tolerance"
)]

use std::cell::{Cell, RefCell};

use gymslot_core::{DEFAULT_CROWD_LEVEL, GymTables, Weekday};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn tables() -> RefCell<GymTables> {
    RefCell::new(GymTables::default())
}

#[fixture]
fn level() -> Cell<f64> {
    Cell::new(f64::NAN)
}

#[given("the built-in gym tables")]
fn given_builtin(#[from(tables)] tables: &RefCell<GymTables>) {
    *tables.borrow_mut() = GymTables::builtin();
}

#[given("empty gym tables")]
fn given_empty(#[from(tables)] tables: &RefCell<GymTables>) {
    *tables.borrow_mut() = GymTables::default();
}

#[when("I look up the crowd level for Monday at 18:00")]
fn when_monday_evening(
    #[from(tables)] tables: &RefCell<GymTables>,
    #[from(level)] level: &Cell<f64>,
) {
    level.set(tables.borrow().crowd.level(Weekday::Monday, 18));
}

#[when("I look up the crowd level for Monday at 23:00")]
fn when_monday_closing(
    #[from(tables)] tables: &RefCell<GymTables>,
    #[from(level)] level: &Cell<f64>,
) {
    level.set(tables.borrow().crowd.level(Weekday::Monday, 23));
}

#[when("I look up the crowd level for Saturday at 09:00")]
fn when_saturday_morning(
    #[from(tables)] tables: &RefCell<GymTables>,
    #[from(level)] level: &Cell<f64>,
) {
    level.set(tables.borrow().crowd.level(Weekday::Saturday, 9));
}

#[then("the crowd level is 0.95")]
fn then_peak(#[from(level)] level: &Cell<f64>) {
    assert!((level.get() - 0.95).abs() <= f64::EPSILON);
}

#[then("the crowd level is the neutral default")]
fn then_default(#[from(level)] level: &Cell<f64>) {
    assert!((level.get() - DEFAULT_CROWD_LEVEL).abs() <= f64::EPSILON);
}

#[scenario(path = "tests/features/crowd_table.feature", index = 0)]
fn tabulated_hour(tables: RefCell<GymTables>, level: Cell<f64>) {
    let _ = (tables, level);
}

#[scenario(path = "tests/features/crowd_table.feature", index = 1)]
fn unlisted_hour(tables: RefCell<GymTables>, level: Cell<f64>) {
    let _ = (tables, level);
}

#[scenario(path = "tests/features/crowd_table.feature", index = 2)]
fn missing_day(tables: RefCell<GymTables>, level: Cell<f64>) {
    let _ = (tables, level);
}
