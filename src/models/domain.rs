use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::bmi::calculate_bmi;

/// Errors raised while assembling a measurement profile
#[derive(Debug, Error, PartialEq)]
pub enum MeasurementsError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BellyShape {
    Flat,
    #[default]
    Normal,
    Round,
}

/// Only meaningful for female profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HipShape {
    Narrow,
    #[default]
    Normal,
    Wide,
}

/// Only meaningful for male profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChestShape {
    Slim,
    #[default]
    Normal,
    Broad,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitPreference {
    Tight,
    #[default]
    Comfortable,
    Loose,
}

/// Garment size, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    pub const ALL: [Size; 6] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl, Size::Xxl];

    /// Position in the size sequence (XS = 0 .. XXL = 5)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map an index onto the size sequence, saturating at XS and XXL
    pub fn from_index(index: i32) -> Size {
        let clamped = index.clamp(0, Self::ALL.len() as i32 - 1);
        Self::ALL[clamped as usize]
    }

    pub fn smaller(self) -> Option<Size> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn larger(self) -> Option<Size> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }

    /// Parse a list of size labels, skipping anything unrecognised
    pub fn parse_labels<S: AsRef<str>>(labels: &[S]) -> Vec<Size> {
        labels
            .iter()
            .filter_map(|label| match label.as_ref().parse::<Size>() {
                Ok(size) => Some(size),
                Err(_) => {
                    tracing::debug!("Ignoring unknown size label: {:?}", label.as_ref());
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown size label: {0}")]
pub struct UnknownSize(pub String);

impl FromStr for Size {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        Size::ALL
            .iter()
            .copied()
            .find(|size| size.label() == label)
            .ok_or_else(|| UnknownSize(s.to_string()))
    }
}

/// Body measurement profile, one per storefront profile
///
/// Height, weight and BMI are only reachable through accessors so the BMI
/// always reflects the current height and weight. A `bmi` carried in stored
/// JSON is ignored and recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredMeasurements")]
pub struct UserMeasurements {
    pub gender: Gender,
    pub age: Option<u8>,
    height: f64,
    weight: f64,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    bmi: Option<f64>,
    pub belly_shape: BellyShape,
    pub hip_shape: Option<HipShape>,
    pub chest_shape: Option<ChestShape>,
    pub fit_preference: FitPreference,
    pub has_return_history: bool,
    pub bra_size: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl UserMeasurements {
    pub fn builder() -> MeasurementsBuilder {
        MeasurementsBuilder::default()
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// BMI derived from height and weight
    pub fn bmi(&self) -> Option<f64> {
        self.bmi
    }

    pub fn set_height(&mut self, height_cm: f64) {
        self.height = height_cm;
        self.recompute_bmi();
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight = weight_kg;
        self.recompute_bmi();
    }

    pub fn mark_updated(&mut self, at: DateTime<Utc>) {
        self.last_updated = Some(at);
    }

    /// Number of optional body measurements present (age, chest, waist, hips)
    pub fn optional_measurement_count(&self) -> usize {
        [
            self.age.is_some(),
            self.chest.is_some(),
            self.waist.is_some(),
            self.hips.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    fn recompute_bmi(&mut self) {
        self.bmi = Some(calculate_bmi(self.height, self.weight));
    }
}

/// Wire shape of a stored profile, without the derived BMI
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredMeasurements {
    gender: Gender,
    #[serde(default)]
    age: Option<u8>,
    height: f64,
    weight: f64,
    #[serde(default)]
    chest: Option<f64>,
    #[serde(default)]
    waist: Option<f64>,
    #[serde(default)]
    hips: Option<f64>,
    #[serde(default)]
    belly_shape: BellyShape,
    #[serde(default)]
    hip_shape: Option<HipShape>,
    #[serde(default)]
    chest_shape: Option<ChestShape>,
    fit_preference: FitPreference,
    #[serde(default)]
    has_return_history: bool,
    #[serde(default)]
    bra_size: Option<String>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
}

impl From<StoredMeasurements> for UserMeasurements {
    fn from(stored: StoredMeasurements) -> Self {
        Self {
            gender: stored.gender,
            age: stored.age,
            height: stored.height,
            weight: stored.weight,
            chest: stored.chest,
            waist: stored.waist,
            hips: stored.hips,
            bmi: Some(calculate_bmi(stored.height, stored.weight)),
            belly_shape: stored.belly_shape,
            hip_shape: stored.hip_shape,
            chest_shape: stored.chest_shape,
            fit_preference: stored.fit_preference,
            has_return_history: stored.has_return_history,
            bra_size: stored.bra_size,
            last_updated: stored.last_updated,
        }
    }
}

/// Builder enforcing the fields a profile cannot be classified without
#[derive(Debug, Clone, Default)]
pub struct MeasurementsBuilder {
    gender: Option<Gender>,
    age: Option<u8>,
    height: Option<f64>,
    weight: Option<f64>,
    chest: Option<f64>,
    waist: Option<f64>,
    hips: Option<f64>,
    belly_shape: Option<BellyShape>,
    hip_shape: Option<HipShape>,
    chest_shape: Option<ChestShape>,
    fit_preference: Option<FitPreference>,
    has_return_history: bool,
    bra_size: Option<String>,
}

impl MeasurementsBuilder {
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn height(mut self, height_cm: f64) -> Self {
        self.height = Some(height_cm);
        self
    }

    pub fn weight(mut self, weight_kg: f64) -> Self {
        self.weight = Some(weight_kg);
        self
    }

    pub fn chest(mut self, chest_cm: f64) -> Self {
        self.chest = Some(chest_cm);
        self
    }

    pub fn waist(mut self, waist_cm: f64) -> Self {
        self.waist = Some(waist_cm);
        self
    }

    pub fn hips(mut self, hips_cm: f64) -> Self {
        self.hips = Some(hips_cm);
        self
    }

    pub fn belly_shape(mut self, shape: BellyShape) -> Self {
        self.belly_shape = Some(shape);
        self
    }

    pub fn hip_shape(mut self, shape: HipShape) -> Self {
        self.hip_shape = Some(shape);
        self
    }

    pub fn chest_shape(mut self, shape: ChestShape) -> Self {
        self.chest_shape = Some(shape);
        self
    }

    pub fn fit_preference(mut self, preference: FitPreference) -> Self {
        self.fit_preference = Some(preference);
        self
    }

    pub fn has_return_history(mut self, returned: bool) -> Self {
        self.has_return_history = returned;
        self
    }

    pub fn bra_size(mut self, bra_size: impl Into<String>) -> Self {
        self.bra_size = Some(bra_size.into());
        self
    }

    pub fn build(self) -> Result<UserMeasurements, MeasurementsError> {
        let gender = self.gender.ok_or(MeasurementsError::MissingField("gender"))?;
        let height = self.height.ok_or(MeasurementsError::MissingField("height"))?;
        let weight = self.weight.ok_or(MeasurementsError::MissingField("weight"))?;
        let fit_preference = self
            .fit_preference
            .ok_or(MeasurementsError::MissingField("fitPreference"))?;

        if !height.is_finite() || height <= 0.0 {
            return Err(MeasurementsError::InvalidValue { field: "height", value: height });
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(MeasurementsError::InvalidValue { field: "weight", value: weight });
        }

        let bra_size = match gender {
            Gender::Female => self.bra_size,
            Gender::Male => {
                if self.bra_size.is_some() {
                    tracing::debug!("Discarding bra size on male profile");
                }
                None
            }
        };

        Ok(UserMeasurements {
            gender,
            age: self.age,
            height,
            weight,
            chest: self.chest,
            waist: self.waist,
            hips: self.hips,
            bmi: Some(calculate_bmi(height, weight)),
            belly_shape: self.belly_shape.unwrap_or_default(),
            hip_shape: self.hip_shape,
            chest_shape: self.chest_shape,
            fit_preference,
            has_return_history: self.has_return_history,
            bra_size,
            last_updated: None,
        })
    }
}

/// Soft plausibility findings on a profile; never block a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlausibilityWarning {
    WaistExceedsHips,
    ChestBelowWaist,
    BmiOutOfRange,
}

/// Alternative size suggestion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeAlternative {
    pub size: Size,
    pub confidence: f64,
}

/// Placeholder confidence values attached to suggestions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceWeights {
    pub recommended: f64,
    pub smaller: f64,
    pub larger: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            recommended: 0.75,
            smaller: 0.15,
            larger: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> MeasurementsBuilder {
        UserMeasurements::builder()
            .gender(Gender::Female)
            .height(165.0)
            .weight(55.0)
            .fit_preference(FitPreference::Comfortable)
    }

    #[test]
    fn test_size_neighbours_clamp_at_ends() {
        assert_eq!(Size::Xs.smaller(), None);
        assert_eq!(Size::Xs.larger(), Some(Size::S));
        assert_eq!(Size::Xxl.larger(), None);
        assert_eq!(Size::Xxl.smaller(), Some(Size::Xl));
    }

    #[test]
    fn test_size_from_index_saturates() {
        assert_eq!(Size::from_index(-3), Size::Xs);
        assert_eq!(Size::from_index(2), Size::M);
        assert_eq!(Size::from_index(9), Size::Xxl);
    }

    #[test]
    fn test_size_parse() {
        assert_eq!(" xl ".parse::<Size>(), Ok(Size::Xl));
        assert_eq!("XXL".parse::<Size>(), Ok(Size::Xxl));
        assert!("XXXL".parse::<Size>().is_err());
        assert_eq!(Size::parse_labels(&["S", "huge", "m"]), vec![Size::S, Size::M]);
    }

    #[test]
    fn test_size_serde_labels() {
        assert_eq!(serde_json::to_string(&Size::Xxl).unwrap(), "\"XXL\"");
        assert_eq!(serde_json::from_str::<Size>("\"XS\"").unwrap(), Size::Xs);
    }

    #[test]
    fn test_builder_requires_core_fields() {
        let err = UserMeasurements::builder()
            .height(170.0)
            .weight(60.0)
            .fit_preference(FitPreference::Loose)
            .build()
            .unwrap_err();
        assert_eq!(err, MeasurementsError::MissingField("gender"));

        let err = UserMeasurements::builder()
            .gender(Gender::Male)
            .height(170.0)
            .weight(60.0)
            .build()
            .unwrap_err();
        assert_eq!(err, MeasurementsError::MissingField("fitPreference"));
    }

    #[test]
    fn test_builder_rejects_non_positive_height() {
        let err = base_builder().height(0.0).build().unwrap_err();
        assert!(matches!(err, MeasurementsError::InvalidValue { field: "height", .. }));
    }

    #[test]
    fn test_bmi_follows_height_and_weight() {
        let mut m = base_builder().build().unwrap();
        let initial = m.bmi().unwrap();
        assert!((initial - 20.2).abs() < 0.05);

        m.set_weight(70.0);
        assert!((m.bmi().unwrap() - calculate_bmi(165.0, 70.0)).abs() < 1e-9);

        m.set_height(180.0);
        assert!((m.bmi().unwrap() - calculate_bmi(180.0, 70.0)).abs() < 1e-9);
    }

    #[test]
    fn test_bra_size_dropped_for_male() {
        let m = base_builder().gender(Gender::Male).bra_size("75B").build().unwrap();
        assert_eq!(m.bra_size, None);

        let f = base_builder().bra_size("75B").build().unwrap();
        assert_eq!(f.bra_size.as_deref(), Some("75B"));
    }

    #[test]
    fn test_json_field_names() {
        let m = base_builder().belly_shape(BellyShape::Round).build().unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["gender"], "FEMALE");
        assert_eq!(json["bellyShape"], "ROUND");
        assert_eq!(json["fitPreference"], "COMFORTABLE");
        assert_eq!(json["hasReturnHistory"], false);
        assert!(json["bmi"].is_number());
    }

    #[test]
    fn test_missing_bmi_is_recomputed_on_load() {
        let json = r#"{"gender":"MALE","height":175,"weight":70,"fitPreference":"LOOSE"}"#;
        let m: UserMeasurements = serde_json::from_str(json).unwrap();
        assert!((m.bmi().unwrap() - calculate_bmi(175.0, 70.0)).abs() < 1e-9);
        assert_eq!(m.belly_shape, BellyShape::Normal);
    }

    #[test]
    fn test_stale_bmi_is_ignored_on_load() {
        let json = r#"{"gender":"MALE","height":175,"weight":70,"bmi":30.0,"fitPreference":"LOOSE"}"#;
        let m: UserMeasurements = serde_json::from_str(json).unwrap();
        assert!((m.bmi().unwrap() - 22.86).abs() < 0.01);

        // Serialized form carries the recomputed value
        let json = serde_json::to_value(&m).unwrap();
        assert!((json["bmi"].as_f64().unwrap() - 22.86).abs() < 0.01);
    }
}
