//! Sub-score factors combined by the engine.
#![forbid(unsafe_code)]

use gymslot_core::{DemographicTable, EquipmentCatalog, TimeCategory, UserPreferences};

use crate::ScoreWeights;

/// Closeness of two ratios, `1.0` on an exact match.
///
/// Both inputs are expected in `[0.0, 1.0]`; the result is clamped there
/// too, so a factor never flips the sign of the running score.
#[expect(
    clippy::float_arithmetic,
    reason = "fit is one minus the absolute distance between ratios"
)]
pub(crate) fn ratio_fit(actual: f64, target: f64) -> f64 {
    let fit = 1.0 - (actual - target).abs();
    if fit.is_finite() {
        fit.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Product of every demographic factor that applies to `category`.
///
/// Targets compare the tabulated ratio with the requested one. Gender and
/// ethnicity preferences scale by the tabulated ratio directly. Dimensions
/// the table does not list contribute nothing.
#[expect(
    clippy::float_arithmetic,
    reason = "demographic fits compound multiplicatively"
)]
pub(crate) fn demographic_factor(
    table: &DemographicTable,
    category: TimeCategory,
    preferences: &UserPreferences,
) -> f64 {
    let mut factor = 1.0;
    for (dimension, target) in preferences.demographic_targets() {
        match table.ratio(category, dimension) {
            Some(actual) => factor *= ratio_fit(actual, target),
            None => log::debug!("no '{dimension}' ratio during {category}; target ignored"),
        }
    }

    let single_value = [
        preferences.gender_preference().map(|gender| gender.dimension()),
        preferences
            .ethnicity_preference()
            .map(|ethnicity| ethnicity.dimension()),
    ];
    for dimension in single_value.into_iter().flatten() {
        match table.ratio(category, dimension) {
            Some(ratio) => factor *= ratio.clamp(0.0, 1.0),
            None => log::debug!("no '{dimension}' ratio during {category}; preference ignored"),
        }
    }
    factor
}

/// Net bonus from the visitor's equipment list at a given crowd level.
///
/// Every listed item the catalog knows earns the equipment bonus, or the
/// peak penalty when the crowd level exceeds the peak threshold. Unknown
/// names contribute nothing.
#[expect(
    clippy::float_arithmetic,
    reason = "equipment adjustments sum per-item bonuses and penalties"
)]
pub(crate) fn equipment_adjustment(
    catalog: &EquipmentCatalog,
    crowd_level: f64,
    preferences: &UserPreferences,
    weights: ScoreWeights,
) -> f64 {
    let busy = crowd_level > weights.equipment_peak_threshold;
    preferences
        .equipment_priority()
        .iter()
        .filter(|name| {
            let known = catalog.contains(name);
            if !known {
                log::debug!("equipment '{name}' is not in the catalog; ignored");
            }
            known
        })
        .map(|_| {
            if busy {
                -weights.equipment_peak_penalty
            } else {
                weights.equipment_bonus
            }
        })
        .sum()
}
