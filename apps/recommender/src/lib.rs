//! Career-match recommendation engine.
//!
//! Scores a user's self-assessment against a catalog of careers on five
//! dimensions (personality, skills, values, work style, market demand),
//! ranks the results and explains each match.

pub mod config;
pub mod db;
pub mod errors;
pub mod insights;
pub mod matching;
pub mod models;
pub mod recommender;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use errors::{RecommendError, Result};
pub use matching::aggregator::rank_careers;
pub use models::assessment::AssessmentProfile;
pub use models::career::CareerDefinition;
pub use models::recommendation::{
    CareerMatchResult, RecommendationOptions, ScoringWeights, SubScores,
};
pub use recommender::Recommender;
