//! Category assignment over the whole week.

use std::collections::BTreeSet;

use gymslot_core::{GymTables, TimeCategory, TimeSlot, Weekday};
use rstest::rstest;

#[rstest]
fn every_hour_maps_to_one_of_six_categories() {
    let seen: BTreeSet<_> = (0..24).map(TimeCategory::from_hour).collect();
    assert_eq!(seen.len(), TimeCategory::ALL.len());
}

#[rstest]
fn category_depends_only_on_the_hour() {
    for hour in 0..24 {
        let expected = TimeCategory::from_hour(hour);
        for day in Weekday::ALL {
            assert_eq!(TimeSlot::new(day, hour).category(), expected);
        }
    }
}

#[rstest]
#[case(Weekday::Monday, 6, TimeCategory::EarlyMorning)]
#[case(Weekday::Saturday, 9, TimeCategory::MidMorning)]
#[case(Weekday::Sunday, 22, TimeCategory::LateEvening)]
fn enumerated_slots_carry_expected_categories(
    #[case] day: Weekday,
    #[case] hour: u8,
    #[case] expected: TimeCategory,
) {
    let tables = GymTables::builtin();
    let slot = tables
        .hours
        .slots()
        .find(|slot| slot.day == day && slot.hour == hour)
        .expect("slot should be enumerated");
    assert_eq!(slot.category(), expected);
}
