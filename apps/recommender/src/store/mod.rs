//! Store seams: where assessments and the career catalog come from.
//!
//! The facade holds both as `Arc<dyn _>` so backends can be swapped without
//! touching the ranking code. `memory` serves tests and callers that already
//! hold the data; `postgres` reads JSON documents through sqlx.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::assessment::AssessmentProfile;
use crate::models::career::CareerDefinition;

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryAssessmentStore, InMemoryCareerCatalog};
pub use postgres::{PgAssessmentStore, PgCareerCatalog};

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Latest completed assessment for `user_id`. `Ok(None)` means the user
    /// has not taken the assessment yet.
    async fn get_assessment(&self, user_id: Uuid) -> Result<Option<AssessmentProfile>>;
}

#[async_trait]
pub trait CareerCatalog: Send + Sync {
    /// One page of career definitions, at most `page_size` long, in a stable order.
    async fn list_careers(&self, page_size: usize) -> Result<Vec<CareerDefinition>>;
}
