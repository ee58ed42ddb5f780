use crate::models::{PlausibilityWarning, UserMeasurements};

/// Plausible BMI band; outside it the profile is probably mistyped
pub const BMI_PLAUSIBLE_RANGE: (f64, f64) = (15.0, 45.0);

/// Waist may exceed hips by at most this many centimetres
const MAX_WAIST_OVER_HIPS_CM: f64 = 20.0;

/// Chest may be smaller than waist by at most this many centimetres
const MAX_CHEST_UNDER_WAIST_CM: f64 = 10.0;

/// Soft plausibility checks on a profile
///
/// Findings are informational. They lower the reported data quality but
/// never change the recommended size.
pub fn plausibility_warnings(measurements: &UserMeasurements) -> Vec<PlausibilityWarning> {
    let mut warnings = Vec::new();

    if let (Some(waist), Some(hips)) = (measurements.waist, measurements.hips) {
        if waist > hips + MAX_WAIST_OVER_HIPS_CM {
            warnings.push(PlausibilityWarning::WaistExceedsHips);
        }
    }

    if let (Some(chest), Some(waist)) = (measurements.chest, measurements.waist) {
        if chest < waist - MAX_CHEST_UNDER_WAIST_CM {
            warnings.push(PlausibilityWarning::ChestBelowWaist);
        }
    }

    if let Some(bmi) = measurements.bmi() {
        let (min, max) = BMI_PLAUSIBLE_RANGE;
        if !(min..=max).contains(&bmi) {
            warnings.push(PlausibilityWarning::BmiOutOfRange);
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitPreference, Gender};

    fn profile(weight: f64) -> UserMeasurements {
        UserMeasurements::builder()
            .gender(Gender::Male)
            .height(175.0)
            .weight(weight)
            .fit_preference(FitPreference::Comfortable)
            .build()
            .unwrap()
    }

    #[test]
    fn test_clean_profile() {
        let mut m = profile(70.0);
        m.chest = Some(96.0);
        m.waist = Some(82.0);
        m.hips = Some(95.0);
        assert!(plausibility_warnings(&m).is_empty());
    }

    #[test]
    fn test_waist_and_chest_checks() {
        let mut m = profile(70.0);
        m.chest = Some(80.0);
        m.waist = Some(120.0);
        m.hips = Some(95.0);
        assert_eq!(
            plausibility_warnings(&m),
            vec![PlausibilityWarning::WaistExceedsHips, PlausibilityWarning::ChestBelowWaist]
        );
    }

    #[test]
    fn test_boundaries_are_allowed() {
        let mut m = profile(70.0);
        m.waist = Some(110.0);
        m.hips = Some(90.0);
        m.chest = Some(100.0);
        assert!(plausibility_warnings(&m).is_empty());
    }

    #[test]
    fn test_bmi_out_of_range() {
        // 175cm / 150kg is BMI ~49
        let m = profile(150.0);
        assert_eq!(plausibility_warnings(&m), vec![PlausibilityWarning::BmiOutOfRange]);
    }
}
