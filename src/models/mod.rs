// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BellyShape, ChestShape, ConfidenceWeights, FitPreference, Gender, HipShape, MeasurementsBuilder,
    MeasurementsError, PlausibilityWarning, Size, SizeAlternative, UserMeasurements,
};
pub use requests::{CreateTryOnRequest, RecommendSizeRequest, SaveMeasurementsRequest};
pub use responses::{
    ConfidenceLevel, DataQuality, ErrorResponse, ExistsResponse, HealthResponse, MeasurementsResponse,
    RecommendSizeResponse, RecommendationMetadata, SizeRecommendationResponse,
};
