//! Recommendation facade: the single entry point the UI layer calls.
//!
//! Fetches the user's assessment and one catalog page, then ranks. A missing
//! assessment is an ordinary outcome and yields `[]`. Store failures are
//! logged and also yield `[]` through `get_recommendations`; callers that want
//! the error use `try_recommendations`.

use std::sync::Arc;

use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::config::Config;
use crate::db::create_pool;
use crate::errors::Result;
use crate::matching::aggregator::rank_careers;
use crate::models::recommendation::{CareerMatchResult, RecommendationOptions, ScoringWeights};
use crate::store::{AssessmentStore, CareerCatalog, PgAssessmentStore, PgCareerCatalog};

#[derive(Clone)]
pub struct Recommender {
    assessments: Arc<dyn AssessmentStore>,
    catalog: Arc<dyn CareerCatalog>,
    weights: ScoringWeights,
    catalog_page_size: usize,
}

impl Recommender {
    pub fn new(assessments: Arc<dyn AssessmentStore>, catalog: Arc<dyn CareerCatalog>) -> Self {
        Self {
            assessments,
            catalog,
            weights: ScoringWeights::default(),
            catalog_page_size: Config::default().catalog_page_size,
        }
    }

    pub fn from_config(
        config: &Config,
        assessments: Arc<dyn AssessmentStore>,
        catalog: Arc<dyn CareerCatalog>,
    ) -> Self {
        Self::new(assessments, catalog).with_page_size(config.catalog_page_size)
    }

    /// Builds a recommender over the Postgres-backed stores.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let pool = create_pool(
            config.require_database_url()?,
            config.database_max_connections,
        )
        .await?;

        Ok(Self::from_config(
            config,
            Arc::new(PgAssessmentStore::new(pool.clone())),
            Arc::new(PgCareerCatalog::new(pool)),
        ))
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_page_size(mut self, catalog_page_size: usize) -> Self {
        self.catalog_page_size = catalog_page_size;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Ranked recommendations for `user_id`, sorted by overall match.
    /// Never fails: store errors are logged and produce an empty list.
    pub async fn get_recommendations(
        &self,
        user_id: Uuid,
        options: RecommendationOptions,
    ) -> Vec<CareerMatchResult> {
        match self.try_recommendations(user_id, options).await {
            Ok(results) => results,
            Err(e) => {
                error!(%user_id, "Career recommendation failed: {e}");
                Vec::new()
            }
        }
    }

    /// Same as `get_recommendations` but propagates store errors.
    #[instrument(
        skip(self),
        fields(limit = options.limit, min_confidence = options.min_confidence)
    )]
    pub async fn try_recommendations(
        &self,
        user_id: Uuid,
        options: RecommendationOptions,
    ) -> Result<Vec<CareerMatchResult>> {
        let Some(profile) = self.assessments.get_assessment(user_id).await? else {
            info!(%user_id, "No completed assessment; nothing to recommend");
            return Ok(Vec::new());
        };
        let profile = profile.normalized();

        let careers = self.catalog.list_careers(self.catalog_page_size).await?;
        let results = rank_careers(&profile, &careers, &options, &self.weights);

        info!(
            %user_id,
            careers = careers.len(),
            returned = results.len(),
            "Generated career recommendations"
        );
        Ok(results)
    }
}
