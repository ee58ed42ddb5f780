// Core algorithm exports
pub mod advisor;
pub mod alternatives;
pub mod bmi;
pub mod classifier;
pub mod reasoning;
pub mod validation;

pub use advisor::SizeAdvisor;
pub use alternatives::select_alternatives;
pub use bmi::{calculate_bmi, round_bmi, DEFAULT_BMI};
pub use classifier::{base_size_index, recommend_size, PANTS_CATEGORY};
pub use reasoning::{format_reasoning, Language};
pub use validation::plausibility_warnings;
