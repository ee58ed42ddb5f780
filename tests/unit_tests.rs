// Unit tests for Fitwise

use fitwise::core::{
    alternatives::select_alternatives,
    bmi::{calculate_bmi, round_bmi},
    classifier::{base_size_index, recommend_size},
    reasoning::{format_reasoning, Language},
    SizeAdvisor,
};
use fitwise::models::{
    BellyShape, ConfidenceWeights, FitPreference, Gender, HipShape, Size, UserMeasurements,
};

/// Male profile at BMI ~22.0, the middle of the M band
fn male_profile() -> UserMeasurements {
    UserMeasurements::builder()
        .gender(Gender::Male)
        .height(175.0)
        .weight(67.4)
        .fit_preference(FitPreference::Comfortable)
        .belly_shape(BellyShape::Normal)
        .has_return_history(false)
        .build()
        .unwrap()
}

#[test]
fn test_bmi_display_rounding() {
    assert_eq!(round_bmi(calculate_bmi(170.0, 68.85)), 23.8);
}

#[test]
fn test_base_index_monotonic_in_bmi() {
    for gender in [Gender::Male, Gender::Female] {
        let mut previous = base_size_index(gender, 10.0);
        let mut bmi = 10.0;
        while bmi <= 50.0 {
            let index = base_size_index(gender, bmi);
            assert!(index >= previous, "{:?}: index fell at BMI {}", gender, bmi);
            assert!((0..=5).contains(&index));
            previous = index;
            bmi += 0.1;
        }
        assert_eq!(previous, 5);
    }
}

#[test]
fn test_comfortable_male_gets_m() {
    assert_eq!(recommend_size(&male_profile(), "TOPS"), Size::M);
}

#[test]
fn test_tight_preference_sizes_down() {
    let mut m = male_profile();
    m.fit_preference = FitPreference::Tight;
    assert_eq!(recommend_size(&m, "TOPS"), Size::S);
}

#[test]
fn test_round_belly_and_returns_size_up_twice() {
    let mut m = male_profile();
    m.belly_shape = BellyShape::Round;
    m.has_return_history = true;
    assert_eq!(recommend_size(&m, "TOPS"), Size::Xl);
}

#[test]
fn test_extreme_adjustments_saturate_at_xxl() {
    let mut m = male_profile();
    m.set_weight(110.0);
    m.fit_preference = FitPreference::Loose;
    m.belly_shape = BellyShape::Round;
    m.has_return_history = true;
    assert_eq!(recommend_size(&m, "PANTS"), Size::Xxl);
}

#[test]
fn test_loaded_profile_classified_by_own_bmi() {
    let json = r#"{"gender":"FEMALE","height":160,"weight":52,"fitPreference":"COMFORTABLE"}"#;
    let m: UserMeasurements = serde_json::from_str(json).unwrap();
    // BMI ~20.3, inside the female M band
    assert_eq!(round_bmi(m.bmi().unwrap()), 20.3);
    assert_eq!(recommend_size(&m, "TOPS"), Size::M);
}

#[test]
fn test_hip_shape_only_matters_for_pants() {
    let mut m = male_profile();
    m.gender = Gender::Female;
    m.hip_shape = Some(HipShape::Wide);
    let dress = recommend_size(&m, "DRESS");
    let pants = recommend_size(&m, "PANTS");
    assert_eq!(pants.index(), dress.index() + 1);
}

#[test]
fn test_alternatives_at_xs() {
    let weights = ConfidenceWeights::default();
    let alts = select_alternatives(Size::Xs, &Size::ALL, &weights);
    assert_eq!(alts.len(), 1);
    assert_eq!(alts[0].size, Size::S);
    assert_eq!(alts[0].confidence, 0.10);
}

#[test]
fn test_alternatives_at_xxl() {
    let weights = ConfidenceWeights::default();
    let alts = select_alternatives(Size::Xxl, &Size::ALL, &weights);
    assert_eq!(alts.len(), 1);
    assert_eq!(alts[0].size, Size::Xl);
    assert_eq!(alts[0].confidence, 0.15);
}

#[test]
fn test_alternatives_filtered_by_stock() {
    let weights = ConfidenceWeights::default();
    assert!(select_alternatives(Size::Xs, &[Size::M], &weights).is_empty());
}

#[test]
fn test_reasoning_without_measurements() {
    let advisor = SizeAdvisor::default();
    let response = advisor.recommend(None, "TOPS", &Size::ALL);

    assert_eq!(
        format_reasoning(&response, Language::En),
        "Add your body measurements to get a personalized size recommendation."
    );
    assert_eq!(
        format_reasoning(&response, Language::Vi),
        "Hãy thêm số đo cơ thể để nhận gợi ý kích cỡ phù hợp với bạn."
    );
}

#[test]
fn test_reasoning_with_full_profile() {
    let advisor = SizeAdvisor::default();
    let mut m = male_profile();
    m.age = Some(30);
    m.chest = Some(96.0);
    m.waist = Some(82.0);
    m.hips = Some(95.0);

    let response = advisor.recommend(Some(&m), "TOPS", &[Size::L]);
    assert_eq!(
        format_reasoning(&response, Language::En),
        "We recommend size M (75% confidence) based on your measurements and fit preference. \
         You could also consider size L."
    );
}
