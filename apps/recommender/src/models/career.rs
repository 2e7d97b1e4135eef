use serde::{Deserialize, Serialize};

/// Industry classification tags attached to a career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryField {
    Information,
    HealthcareSocialAssistance,
    ProfessionalScientificTechnical,
    FinanceInsurance,
    EducationalServices,
    ManagementOfCompanies,
    PublicAdministration,
    RetailTrade,
    AccommodationFoodServices,
    Manufacturing,
    Construction,
    ArtsEntertainment,
    #[serde(other)]
    Other,
}

/// A skill the career asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkill {
    pub skill_id: String,
    /// Required proficiency, 1–5.
    #[serde(default = "default_proficiency")]
    pub proficiency: i32,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub estimated_hours: Option<u32>,
}

fn default_proficiency() -> i32 {
    3
}

impl RequiredSkill {
    pub fn required_level(&self) -> f64 {
        f64::from(self.proficiency.clamp(1, 5))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

/// A catalog entry describing one career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry_fields: Vec<IndustryField>,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
}

impl CareerDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            industry_fields: Vec::new(),
            required_skills: Vec::new(),
            salary_range: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_fields(mut self, fields: &[IndustryField]) -> Self {
        self.industry_fields = fields.to_vec();
        self
    }

    pub fn with_salary(mut self, min: u32, max: u32) -> Self {
        self.salary_range = Some(SalaryRange { min, max });
        self
    }

    pub fn with_skill(mut self, skill_id: impl Into<String>, proficiency: i32) -> Self {
        self.required_skills.push(RequiredSkill {
            skill_id: skill_id.into(),
            proficiency,
            required: true,
            estimated_hours: None,
        });
        self
    }

    pub fn has_field(&self, field: IndustryField) -> bool {
        self.industry_fields.contains(&field)
    }

    pub fn has_any_field(&self, fields: &[IndustryField]) -> bool {
        self.industry_fields.iter().any(|f| fields.contains(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_without_proficiency_defaults_to_middle_level() {
        let json = r#"[
            {"id": "a", "title": "Analyst", "requiredSkills": [{"skillId": "sql"}]},
            {"id": "b", "title": "Baker"}
        ]"#;
        let careers: Vec<CareerDefinition> = serde_json::from_str(json).unwrap();
        assert_eq!(careers.len(), 2);
        assert_eq!(careers[0].required_skills[0].proficiency, 3);
        assert_eq!(careers[0].required_skills[0].required_level(), 3.0);
    }

    #[test]
    fn test_catalog_json_deserializes_with_defaults() {
        let json = r#"{
            "id": "swe",
            "title": "Software Developer",
            "industryFields": ["information", "space_mining"],
            "requiredSkills": [{"skillId": "rust", "proficiency": 4}],
            "salaryRange": {"min": 90000, "max": 150000}
        }"#;
        let career: CareerDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(career.description, "");
        assert_eq!(
            career.industry_fields,
            vec![IndustryField::Information, IndustryField::Other]
        );
        assert!(!career.required_skills[0].required);
        assert_eq!(career.salary_range.unwrap().midpoint(), 120_000.0);
    }

    #[test]
    fn test_required_level_is_clamped_to_five() {
        let career = CareerDefinition::new("x", "X").with_skill("sql", 9);
        assert_eq!(career.required_skills[0].required_level(), 5.0);
    }
}
