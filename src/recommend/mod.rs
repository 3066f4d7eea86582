mod advice;
mod factor;
mod scorer;
mod types;

pub use advice::Advice;
pub use scorer::{format_cost, recommend};
pub use types::{Constraints, FallbackOption, Recommendation, RecommendationOutcome};
