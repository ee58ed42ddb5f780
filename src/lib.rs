//! Fitwise - size recommendation service for the fashion storefront
//!
//! This library provides the rule-based size recommendation pipeline, the
//! measurement profile store that feeds it, and a thin virtual try-on vendor
//! client.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_bmi, format_reasoning, recommend_size, select_alternatives, Language, SizeAdvisor};
pub use crate::models::{Size, SizeRecommendationResponse, UserMeasurements};
pub use crate::services::MeasurementStore;
