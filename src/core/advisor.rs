use crate::core::{
    alternatives::select_alternatives,
    bmi::{effective_bmi, round_bmi},
    classifier::recommend_size,
    reasoning::{format_reasoning, Language},
    validation::plausibility_warnings,
};
use crate::models::{
    ConfidenceLevel, ConfidenceWeights, DataQuality, RecommendationMetadata, Size,
    SizeRecommendationResponse, UserMeasurements,
};

/// Confidence at or above which a recommendation is reported as HIGH
const HIGH_CONFIDENCE: f64 = 0.8;
/// Confidence at or above which a recommendation is reported as MEDIUM
const MEDIUM_CONFIDENCE: f64 = 0.6;

/// Size recommendation orchestrator
///
/// # Pipeline Stages
/// 1. BMI (the default when non-finite)
/// 2. Size classification
/// 3. Alternative sizes filtered by stock
/// 4. Metadata for the reasoning formatter
#[derive(Debug, Clone)]
pub struct SizeAdvisor {
    weights: ConfidenceWeights,
}

impl SizeAdvisor {
    pub fn new(weights: ConfidenceWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ConfidenceWeights::default(),
        }
    }

    pub fn weights(&self) -> &ConfidenceWeights {
        &self.weights
    }

    /// Recommend a size for a profile
    ///
    /// # Arguments
    /// * `measurements` - The stored profile, `None` when the user has not saved one
    /// * `category` - Garment category; only `"PANTS"` changes the outcome
    /// * `available` - Sizes currently in stock for the product
    pub fn recommend(
        &self,
        measurements: Option<&UserMeasurements>,
        category: &str,
        available: &[Size],
    ) -> SizeRecommendationResponse {
        let measurements = match measurements {
            Some(m) => m,
            None => {
                return SizeRecommendationResponse {
                    recommended_size: None,
                    confidence: 0.0,
                    alternatives: Vec::new(),
                    has_measurements: false,
                    metadata: None,
                }
            }
        };

        let size = recommend_size(measurements, category);
        let alternatives = select_alternatives(size, available, &self.weights);
        let warnings = plausibility_warnings(measurements);
        let confidence = self.weights.recommended;

        tracing::debug!(
            "Recommended {} for category {:?} ({} alternatives, {} warnings)",
            size,
            category,
            alternatives.len(),
            warnings.len()
        );

        let metadata = RecommendationMetadata {
            bmi: round_bmi(effective_bmi(measurements.bmi())),
            category: category.to_string(),
            confidence_level: confidence_level(confidence),
            data_quality: data_quality(measurements.optional_measurement_count(), !warnings.is_empty()),
            has_close_alternative: !alternatives.is_empty(),
            warnings,
        };

        SizeRecommendationResponse {
            recommended_size: Some(size),
            confidence,
            alternatives,
            has_measurements: true,
            metadata: Some(metadata),
        }
    }

    /// Explanation text for a recommendation
    pub fn explain(&self, response: &SizeRecommendationResponse, language: Language) -> String {
        format_reasoning(response, language)
    }
}

impl Default for SizeAdvisor {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn confidence_level(confidence: f64) -> ConfidenceLevel {
    if confidence >= HIGH_CONFIDENCE {
        ConfidenceLevel::High
    } else if confidence >= MEDIUM_CONFIDENCE {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Grade the profile by optional measurements present, one step lower when
/// any plausibility check fired
fn data_quality(present: usize, has_warnings: bool) -> DataQuality {
    let grades = [
        DataQuality::Limited,
        DataQuality::Fair,
        DataQuality::Good,
        DataQuality::Excellent,
    ];

    let mut grade: usize = match present {
        0 => 0,
        1 => 1,
        2 | 3 => 2,
        _ => 3,
    };
    if has_warnings {
        grade = grade.saturating_sub(1);
    }

    grades[grade]
}
