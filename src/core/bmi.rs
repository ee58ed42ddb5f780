/// BMI used when a profile carries none (or a nonsensical one)
pub const DEFAULT_BMI: f64 = 22.0;

/// Calculate body-mass index from height and weight
///
/// # Arguments
/// * `height_cm` - Height in centimetres
/// * `weight_kg` - Weight in kilograms
///
/// # Returns
/// BMI at full precision. Inputs are not guarded; non-positive height yields
/// infinity or NaN.
#[inline]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round a BMI to one decimal place for display
#[inline]
pub fn round_bmi(bmi: f64) -> f64 {
    (bmi * 10.0).round() / 10.0
}

/// BMI to classify with, falling back to [`DEFAULT_BMI`]
#[inline]
pub fn effective_bmi(bmi: Option<f64>) -> f64 {
    match bmi {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => DEFAULT_BMI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi() {
        let bmi = calculate_bmi(170.0, 68.85);
        assert_eq!(round_bmi(bmi), 23.8);
    }

    #[test]
    fn test_full_precision_kept() {
        let bmi = calculate_bmi(170.0, 68.85);
        assert!((bmi - 23.823529).abs() < 1e-5);
    }

    #[test]
    fn test_effective_bmi_defaults() {
        assert_eq!(effective_bmi(None), DEFAULT_BMI);
        assert_eq!(effective_bmi(Some(f64::NAN)), DEFAULT_BMI);
        assert_eq!(effective_bmi(Some(f64::INFINITY)), DEFAULT_BMI);
        assert_eq!(effective_bmi(Some(19.5)), 19.5);
    }
}
