use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::assessment::AssessmentProfile;
use crate::models::career::CareerDefinition;
use crate::store::{AssessmentStore, CareerCatalog};

/// Assessments held in process, keyed by user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    assessments: HashMap<Uuid, AssessmentProfile>,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assessment(mut self, user_id: Uuid, profile: AssessmentProfile) -> Self {
        self.assessments.insert(user_id, profile);
        self
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn get_assessment(&self, user_id: Uuid) -> Result<Option<AssessmentProfile>> {
        Ok(self.assessments.get(&user_id).cloned())
    }
}

/// A fixed catalog held in process, served in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCareerCatalog {
    careers: Vec<CareerDefinition>,
}

impl InMemoryCareerCatalog {
    pub fn new(careers: Vec<CareerDefinition>) -> Self {
        Self { careers }
    }
}

#[async_trait]
impl CareerCatalog for InMemoryCareerCatalog {
    async fn list_careers(&self, page_size: usize) -> Result<Vec<CareerDefinition>> {
        Ok(self.careers.iter().take(page_size).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_assessment_is_none() {
        let store = InMemoryAssessmentStore::new();
        assert!(store.get_assessment(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stored_assessment_is_returned() {
        let user_id = Uuid::new_v4();
        let mut profile = AssessmentProfile::default();
        profile.personality_traits.openness = 6;
        let store = InMemoryAssessmentStore::new().with_assessment(user_id, profile.clone());
        assert_eq!(store.get_assessment(user_id).await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_catalog_page_respects_size_and_order() {
        let catalog = InMemoryCareerCatalog::new(vec![
            CareerDefinition::new("a", "A"),
            CareerDefinition::new("b", "B"),
            CareerDefinition::new("c", "C"),
        ]);
        let page = catalog.list_careers(2).await.unwrap();
        let ids: Vec<&str> = page.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(catalog.list_careers(100).await.unwrap().len(), 3);
    }
}
