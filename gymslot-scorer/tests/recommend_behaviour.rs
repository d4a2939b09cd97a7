#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for slot ranking.

use std::cell::{Cell, RefCell};

use gymslot_core::{
    GymTables, RecommendationResult, TimeCategory, TimeSlot, UserPreferences, Weekday,
};
use gymslot_scorer::{RECOMMENDATION_LIMIT, RecommendationEngine, SlotScorer};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state threaded through each scenario.
pub struct TestContext {
    tables: RefCell<GymTables>,
    preferences: RefCell<UserPreferences>,
    results: RefCell<Vec<RecommendationResult>>,
    evening_score: Cell<f64>,
    morning_score: Cell<f64>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        tables: RefCell::new(GymTables::default()),
        preferences: RefCell::new(UserPreferences::new()),
        results: RefCell::new(Vec::new()),
        evening_score: Cell::new(f64::NAN),
        morning_score: Cell::new(f64::NAN),
    }
}

#[given("the built-in gym tables")]
fn builtin_tables(context: &TestContext) {
    *context.tables.borrow_mut() = GymTables::builtin();
}

#[given("gym tables with no opening hours")]
fn closed_tables(context: &TestContext) {
    let tables = GymTables {
        hours: gymslot_core::OperatingHours::new(),
        ..GymTables::builtin()
    };
    *context.tables.borrow_mut() = tables;
}

#[given("a visitor who tolerates light crowds")]
fn light_crowds(context: &TestContext) {
    *context.preferences.borrow_mut() = UserPreferences::new().with_crowd_tolerance(0.2);
}

#[given("a visitor who prefers 09:00 and 15:00")]
fn prefers_morning_and_afternoon(context: &TestContext) {
    *context.preferences.borrow_mut() = UserPreferences::new().with_preferred_hours([9, 15]);
}

#[given("a visitor with no preferences")]
fn no_preferences(context: &TestContext) {
    *context.preferences.borrow_mut() = UserPreferences::new();
}

#[given("a visitor who wants the weight room at a neutral crowd level")]
fn weight_room_user(context: &TestContext) {
    *context.preferences.borrow_mut() = UserPreferences::new()
        .with_crowd_tolerance(0.5)
        .with_equipment("weight_room");
}

#[when("I ask for recommendations")]
fn ask_for_recommendations(context: &TestContext) {
    let tables = context.tables.borrow();
    let engine = RecommendationEngine::new(&tables).expect("scenario tables are valid");
    *context.results.borrow_mut() = engine.recommend(&context.preferences.borrow());
}

#[when("I score Monday at 18:00 and Monday at 07:00")]
fn score_monday(context: &TestContext) {
    let tables = context.tables.borrow();
    let engine = RecommendationEngine::new(&tables).expect("scenario tables are valid");
    let preferences = context.preferences.borrow();
    context
        .evening_score
        .set(engine.score(&TimeSlot::new(Weekday::Monday, 18), &preferences));
    context
        .morning_score
        .set(engine.score(&TimeSlot::new(Weekday::Monday, 7), &preferences));
}

#[then("ten slots are returned")]
fn ten_slots(context: &TestContext) {
    assert_eq!(context.results.borrow().len(), RECOMMENDATION_LIMIT);
}

#[then("no slots are returned")]
fn no_slots(context: &TestContext) {
    assert!(context.results.borrow().is_empty());
}

#[then("the slots are ordered best first")]
fn ordered_best_first(context: &TestContext) {
    let results = context.results.borrow();
    let scores: Vec<f64> = results.iter().map(|result| result.score).collect();
    assert!(scores.is_sorted_by(|a, b| a >= b), "unsorted scores: {scores:?}");
}

#[then("no slot is in the evening peak")]
fn avoids_evening_peak(context: &TestContext) {
    assert!(
        context
            .results
            .borrow()
            .iter()
            .all(|result| result.time_category != TimeCategory::EveningPeak)
    );
}

#[then("the best slot is Tuesday at 09:00")]
fn best_is_tuesday_morning(context: &TestContext) {
    let results = context.results.borrow();
    let best = results.first().expect("at least one recommendation");
    assert_eq!(best.day, Weekday::Tuesday);
    assert_eq!(best.time, "09:00");
}

#[then("Monday at 07:00 scores higher")]
fn morning_beats_evening(context: &TestContext) {
    assert!(context.morning_score.get() > context.evening_score.get());
}

#[scenario(path = "tests/features/recommend.feature", index = 0)]
fn light_crowd_visitor(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 1)]
fn preferred_hours_first(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 2)]
fn closed_gym(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 3)]
fn busy_equipment(context: TestContext) {
    let _ = context;
}
