use crate::core::bmi::effective_bmi;
use crate::models::{BellyShape, FitPreference, Gender, HipShape, Size, UserMeasurements};

/// Category that enables the hip-shape adjustment
pub const PANTS_CATEGORY: &str = "PANTS";

/// Upper BMI bounds (exclusive) for XS..XL; anything above is XXL
const FEMALE_BMI_THRESHOLDS: [f64; 5] = [17.5, 19.0, 22.0, 25.0, 27.0];
const MALE_BMI_THRESHOLDS: [f64; 5] = [18.5, 20.5, 23.0, 25.0, 27.0];

/// Base size index (0 = XS .. 5 = XXL) from BMI alone
#[inline]
pub fn base_size_index(gender: Gender, bmi: f64) -> i32 {
    let thresholds = match gender {
        Gender::Female => &FEMALE_BMI_THRESHOLDS,
        Gender::Male => &MALE_BMI_THRESHOLDS,
    };

    thresholds
        .iter()
        .position(|&upper| bmi < upper)
        .unwrap_or(thresholds.len()) as i32
}

/// Recommend a garment size for a profile
///
/// Adjustments are applied in order and stack linearly:
/// 1. Base index from BMI (per-gender table, non-finite BMI treated as 22)
/// 2. Fit preference: TIGHT -1, LOOSE +1
/// 3. Round belly +1; wide hips +1 for PANTS only
/// 4. Return history +1
///
/// The final index saturates at XS / XXL.
pub fn recommend_size(measurements: &UserMeasurements, category: &str) -> Size {
    let bmi = effective_bmi(measurements.bmi());
    let mut index = base_size_index(measurements.gender, bmi);

    index += match measurements.fit_preference {
        FitPreference::Tight => -1,
        FitPreference::Comfortable => 0,
        FitPreference::Loose => 1,
    };

    if measurements.belly_shape == BellyShape::Round {
        index += 1;
    }

    if category == PANTS_CATEGORY && measurements.hip_shape == Some(HipShape::Wide) {
        index += 1;
    }

    // Size up to cut repeat returns
    if measurements.has_return_history {
        index += 1;
    }

    Size::from_index(index)
}
