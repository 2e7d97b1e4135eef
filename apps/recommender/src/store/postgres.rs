//! sqlx-backed stores. Both tables hold opaque JSONB documents; only the
//! lookup columns are known here.
//!
//! ```sql
//! career_assessments (user_id UUID, profile JSONB, completed_at TIMESTAMPTZ)
//! careers            (id TEXT, title TEXT, definition JSONB)
//! ```
//!
//! Career rows are decoded one at a time; a row that does not decode is
//! logged and skipped so the rest of the page still ranks.

use async_trait::async_trait;
use sqlx::types::Json;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::Result;
use crate::models::assessment::AssessmentProfile;
use crate::models::career::CareerDefinition;
use crate::store::{AssessmentStore, CareerCatalog};

#[derive(Debug, Clone)]
pub struct PgAssessmentStore {
    pool: PgPool,
}

impl PgAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgAssessmentStore {
    async fn get_assessment(&self, user_id: Uuid) -> Result<Option<AssessmentProfile>> {
        let row: Option<Json<Value>> = sqlx::query_scalar(
            r#"
            SELECT profile
            FROM career_assessments
            WHERE user_id = $1 AND completed_at IS NOT NULL
            ORDER BY completed_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        debug!(%user_id, found = row.is_some(), "Fetched career assessment");
        row.map(|Json(document)| decode_assessment(document)).transpose()
    }
}

#[derive(Debug, Clone)]
pub struct PgCareerCatalog {
    pool: PgPool,
}

impl PgCareerCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerCatalog for PgCareerCatalog {
    async fn list_careers(&self, page_size: usize) -> Result<Vec<CareerDefinition>> {
        let limit = i64::try_from(page_size).unwrap_or(i64::MAX);
        let rows: Vec<Json<Value>> =
            sqlx::query_scalar("SELECT definition FROM careers ORDER BY title, id LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        debug!(rows = rows.len(), page_size, "Fetched career catalog page");
        Ok(decode_careers(rows.into_iter().map(|Json(document)| document)))
    }
}

fn decode_assessment(document: Value) -> Result<AssessmentProfile> {
    Ok(serde_json::from_value(document)?)
}

fn decode_careers(documents: impl IntoIterator<Item = Value>) -> Vec<CareerDefinition> {
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document.get("id").cloned();
            match serde_json::from_value::<CareerDefinition>(document) {
                Ok(career) => Some(career),
                Err(e) => {
                    warn!(?id, "Skipping undecodable career definition: {e}");
                    None
                }
            }
        })
        .collect()
}
