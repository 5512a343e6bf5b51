use crate::data::BARANGAYS;
use crate::models::{Barangay, MapCategory, Rating};

/// Classify an indicator value into a display rating for `category`.
///
/// Tiers use strict `>` comparisons, so a value sitting exactly on a
/// boundary falls to the lower tier. Hard countermeasures are the exception:
/// the published map singles out `0.5` exactly and uses `>=` for its middle
/// band.
///
/// - FRI / Hazard / Vulnerability: five tiers at 0.8, 0.6, 0.4, 0.2
/// - Exposure: four tiers at 0.7, 0.4, 0.2
/// - Soft countermeasures: uniformly Low
/// - Hard countermeasures: `== 0.5` Moderate, `>= 0.167` Low/Very Low
pub fn classify(category: MapCategory, value: f64) -> Rating {
    match category {
        MapCategory::Fri | MapCategory::Hazard | MapCategory::Vulnerability => {
            five_tier(value)
        }
        MapCategory::Exposure => exposure_tier(value),
        MapCategory::SoftCm => Rating::Low,
        MapCategory::HardCm => hard_cm_tier(value),
    }
}

/// Rating of one record in `category`.
pub fn rate(barangay: &Barangay, category: MapCategory) -> Rating {
    classify(category, barangay.value(category))
}

/// The fixed dataset ordered by descending `category` value.
///
/// `sort_by` is stable, so ties keep their dataset order.
pub fn rank(category: MapCategory) -> Vec<&'static Barangay> {
    let mut ranked: Vec<&'static Barangay> = BARANGAYS.iter().collect();
    ranked.sort_by(|a, b| b.value(category).total_cmp(&a.value(category)));
    ranked
}

fn five_tier(value: f64) -> Rating {
    if value > 0.800 {
        Rating::VeryHigh
    } else if value > 0.600 {
        Rating::High
    } else if value > 0.400 {
        Rating::Moderate
    } else if value > 0.200 {
        Rating::Low
    } else {
        Rating::VeryLow
    }
}

fn exposure_tier(value: f64) -> Rating {
    if value > 0.700 {
        Rating::High
    } else if value > 0.400 {
        Rating::Moderate
    } else if value > 0.200 {
        Rating::Low
    } else {
        Rating::VeryLow
    }
}

fn hard_cm_tier(value: f64) -> Rating {
    if value == 0.500 {
        Rating::Moderate
    } else if value >= 0.167 {
        Rating::LowOrVeryLow
    } else {
        Rating::VeryLow
    }
}
