//! Market demand: static estimate from industry growth tiers and title keywords.

use crate::matching::keywords::{finish_score, CareerText};
use crate::models::career::{CareerDefinition, IndustryField};

const BASE_SCORE: f64 = 60.0;
const FLOOR: f64 = 20.0;

const HIGH_GROWTH: &[IndustryField] = &[
    IndustryField::Information,
    IndustryField::HealthcareSocialAssistance,
    IndustryField::ProfessionalScientificTechnical,
];
const MEDIUM_GROWTH: &[IndustryField] = &[
    IndustryField::FinanceInsurance,
    IndustryField::EducationalServices,
    IndustryField::ManagementOfCompanies,
];
const STABLE: &[IndustryField] = &[
    IndustryField::PublicAdministration,
    IndustryField::RetailTrade,
    IndustryField::AccommodationFoodServices,
];

const REMOTE_FRIENDLY: &[&str] = &[
    "remote",
    "developer",
    "software",
    "designer",
    "writer",
    "analyst",
    "consultant",
];

/// 0–100 demand estimate for `career`.
pub fn market_demand(career: &CareerDefinition) -> u32 {
    let text = CareerText::new(career);
    let mut score = BASE_SCORE;

    // best tier wins
    if career.has_any_field(HIGH_GROWTH) {
        score += 25.0;
    } else if career.has_any_field(MEDIUM_GROWTH) {
        score += 15.0;
    } else if career.has_any_field(STABLE) {
        score += 5.0;
    }

    if text.title_has_word(&["ai", "ml"])
        || text.title_has_any(&["machine learning", "artificial intelligence", "data scientist"])
    {
        score += 20.0;
    } else if text.title_has_any(&["cloud", "devops", "cybersecurity"]) {
        score += 15.0;
    } else if text.title_has_any(&["developer", "software", "programmer"]) {
        score += 12.0;
    }

    if text.title_has_any(REMOTE_FRIENDLY) {
        score += 8.0;
    }

    finish_score(score, FLOOR)
}
