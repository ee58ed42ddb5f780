use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{
    BellyShape, ChestShape, FitPreference, Gender, HipShape, MeasurementsError, UserMeasurements,
};
use crate::services::try_on::TryOnCategory;

/// Request to save a measurement profile
///
/// Ranges here are the canonical ones for the whole service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveMeasurementsRequest {
    #[validate(required)]
    pub gender: Option<Gender>,
    #[validate(range(min = 18, max = 100))]
    pub age: Option<u8>,
    #[validate(required, range(min = 140.0, max = 220.0))]
    pub height: Option<f64>,
    #[validate(required, range(min = 35.0, max = 200.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 60.0, max = 150.0))]
    pub chest: Option<f64>,
    #[validate(range(min = 50.0, max = 150.0))]
    pub waist: Option<f64>,
    #[validate(range(min = 60.0, max = 160.0))]
    pub hips: Option<f64>,
    pub belly_shape: Option<BellyShape>,
    pub hip_shape: Option<HipShape>,
    pub chest_shape: Option<ChestShape>,
    #[validate(required)]
    pub fit_preference: Option<FitPreference>,
    #[serde(default)]
    pub has_return_history: bool,
    #[validate(custom(function = "validate_bra_size"))]
    pub bra_size: Option<String>,
}

impl SaveMeasurementsRequest {
    pub fn into_measurements(self) -> Result<UserMeasurements, MeasurementsError> {
        let mut builder = UserMeasurements::builder().has_return_history(self.has_return_history);

        if let Some(gender) = self.gender {
            builder = builder.gender(gender);
        }
        if let Some(age) = self.age {
            builder = builder.age(age);
        }
        if let Some(height) = self.height {
            builder = builder.height(height);
        }
        if let Some(weight) = self.weight {
            builder = builder.weight(weight);
        }
        if let Some(chest) = self.chest {
            builder = builder.chest(chest);
        }
        if let Some(waist) = self.waist {
            builder = builder.waist(waist);
        }
        if let Some(hips) = self.hips {
            builder = builder.hips(hips);
        }
        if let Some(shape) = self.belly_shape {
            builder = builder.belly_shape(shape);
        }
        if let Some(shape) = self.hip_shape {
            builder = builder.hip_shape(shape);
        }
        if let Some(shape) = self.chest_shape {
            builder = builder.chest_shape(shape);
        }
        if let Some(preference) = self.fit_preference {
            builder = builder.fit_preference(preference);
        }
        if let Some(bra_size) = self.bra_size {
            builder = builder.bra_size(bra_size);
        }

        builder.build()
    }
}

/// Band (2-3 digits) followed by cup (1-3 letters), e.g. "75B" or "34DD"
fn validate_bra_size(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let digits = value.chars().take_while(|c| c.is_ascii_digit()).count();
    let cup = &value[digits..];

    let valid = (2..=3).contains(&digits)
        && (1..=3).contains(&cup.len())
        && cup.chars().all(|c| c.is_ascii_alphabetic());

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("bra_size_format"))
    }
}

/// Request a size recommendation for a stored profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendSizeRequest {
    #[validate(length(min = 1))]
    pub profile_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub available_sizes: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Request to start a virtual try-on task
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTryOnRequest {
    #[validate(length(min = 1))]
    pub model_image_url: String,
    #[validate(length(min = 1))]
    pub garment_image_url: String,
    pub category: TryOnCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SaveMeasurementsRequest {
        SaveMeasurementsRequest {
            gender: Some(Gender::Female),
            age: Some(28),
            height: Some(160.0),
            weight: Some(52.0),
            chest: Some(84.0),
            waist: Some(66.0),
            hips: Some(90.0),
            belly_shape: None,
            hip_shape: Some(HipShape::Wide),
            chest_shape: None,
            fit_preference: Some(FitPreference::Comfortable),
            has_return_history: false,
            bra_size: Some("75B".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = valid_request();
        assert!(req.validate().is_ok());

        let m = req.into_measurements().unwrap();
        assert_eq!(m.hip_shape, Some(HipShape::Wide));
        assert_eq!(m.belly_shape, BellyShape::Normal);
    }

    #[test]
    fn test_height_out_of_range_rejected() {
        let mut req = valid_request();
        req.height = Some(230.0);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("height"));
    }

    #[test]
    fn test_missing_gender_rejected() {
        let mut req = valid_request();
        req.gender = None;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("gender"));
    }

    #[test]
    fn test_underage_rejected() {
        let mut req = valid_request();
        req.age = Some(16);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bra_size_format() {
        assert!(validate_bra_size("75B").is_ok());
        assert!(validate_bra_size("34DD").is_ok());
        assert!(validate_bra_size("B75").is_err());
        assert!(validate_bra_size("7B").is_err());
        assert!(validate_bra_size("75").is_err());
    }

    #[test]
    fn test_recommend_request_defaults() {
        let req: RecommendSizeRequest = serde_json::from_str(r#"{"profileId":"p1"}"#).unwrap();
        assert_eq!(req.category, "");
        assert!(req.available_sizes.is_empty());
        assert!(req.language.is_none());
    }

    #[test]
    fn test_recommend_request_requires_camel_case_id() {
        let result = serde_json::from_str::<RecommendSizeRequest>(r#"{"profile_id":"p1"}"#);
        assert!(result.is_err());
    }
}
