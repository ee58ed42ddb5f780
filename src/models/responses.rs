use serde::{Deserialize, Serialize};

use crate::core::reasoning::Language;
use crate::models::domain::{PlausibilityWarning, Size, SizeAlternative, UserMeasurements};

/// Categorical confidence attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

/// How much of the profile backs a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataQuality {
    Excellent,
    Good,
    Fair,
    Limited,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationMetadata {
    pub bmi: f64,
    pub category: String,
    pub confidence_level: ConfidenceLevel,
    pub data_quality: DataQuality,
    pub has_close_alternative: bool,
    #[serde(default)]
    pub warnings: Vec<PlausibilityWarning>,
}

/// Size recommendation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecommendationResponse {
    pub recommended_size: Option<Size>,
    pub confidence: f64,
    pub alternatives: Vec<SizeAlternative>,
    pub has_measurements: bool,
    #[serde(default)]
    pub metadata: Option<RecommendationMetadata>,
}

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendSizeResponse {
    #[serde(flatten)]
    pub recommendation: SizeRecommendationResponse,
    pub reasoning: String,
    pub language: Language,
}

/// Stored measurement profile as returned by the measurement endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementsResponse {
    pub profile_id: String,
    pub measurements: UserMeasurements,
    pub warnings: Vec<PlausibilityWarning>,
    pub persisted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistsResponse {
    pub profile_id: String,
    pub exists: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognised_levels_deserialize_as_unknown() {
        let level: ConfidenceLevel = serde_json::from_str("\"VERY_HIGH\"").unwrap();
        assert_eq!(level, ConfidenceLevel::Unknown);

        let quality: DataQuality = serde_json::from_str("\"PERFECT\"").unwrap();
        assert_eq!(quality, DataQuality::Unknown);
    }

    #[test]
    fn test_recommend_response_is_flattened() {
        let response = RecommendSizeResponse {
            recommendation: SizeRecommendationResponse {
                recommended_size: Some(Size::M),
                confidence: 0.75,
                alternatives: vec![],
                has_measurements: true,
                metadata: None,
            },
            reasoning: "ok".to_string(),
            language: Language::En,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["recommendedSize"], "M");
        assert_eq!(json["hasMeasurements"], true);
        assert_eq!(json["language"], "en");
    }
}
