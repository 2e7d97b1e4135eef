//! Strength and development-area analysis for a single career match.

use serde::{Deserialize, Serialize};

use crate::matching::keywords::{normalize_phrase, CareerText};
use crate::models::assessment::{likert, AssessmentProfile};
use crate::models::career::CareerDefinition;
use crate::models::recommendation::{Dimension, SubScores};

const STRENGTH_THRESHOLD: u32 = 80;
const DEVELOPMENT_THRESHOLD: u32 = 60;
/// Extraversion below this counts as a leadership gap in management roles.
const LEADERSHIP_EXTRAVERSION: f64 = 5.0;

const MANAGEMENT_TITLES: &[&str] = &["manager", "lead", "director", "supervisor", "head of"];
const PROGRAMMING_TITLES: &[&str] = &["developer", "engineer"];
const PROGRAMMING_INTERESTS: &[&str] = &["software", "programming", "coding", "development"];

pub const LEADERSHIP_GAP: &str = "Develop leadership and communication skills";
pub const PROGRAMMING_GAP: &str = "Gain programming and software development skills";

/// Ordered, de-duplicated strength and development areas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub development_areas: Vec<String>,
    pub strength_areas: Vec<String>,
}

impl GapAnalysis {
    fn add_strength(&mut self, item: &str) {
        if !self.strength_areas.iter().any(|s| s == item) {
            self.strength_areas.push(item.to_string());
        }
    }

    fn add_development(&mut self, item: &str) {
        if !self.development_areas.iter().any(|s| s == item) {
            self.development_areas.push(item.to_string());
        }
    }
}

/// Dimensions that feed strength/development classification. Market demand
/// describes the field, not the user, so it is left out.
const CLASSIFIED: [Dimension; 4] = [
    Dimension::Personality,
    Dimension::Skills,
    Dimension::Values,
    Dimension::WorkStyle,
];

fn strength_statement(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Personality => "Strong personality fit for this role",
        Dimension::Skills => "Relevant skills and interests",
        Dimension::Values => "Strong alignment with your career values",
        Dimension::WorkStyle => "Compatible work style",
        Dimension::MarketDemand => "High market demand",
    }
}

fn development_statement(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Personality => "Adapt to the personality demands of this role",
        Dimension::Skills => "Build skills in key areas for this career",
        Dimension::Values => "Reflect on how this career fits your core values",
        Dimension::WorkStyle => "Adjust to this role's work style",
        Dimension::MarketDemand => "Research job availability in this field",
    }
}

/// Classifies sub-scores into strengths and gaps, then adds career-specific gaps.
pub fn analyze_gaps(
    career: &CareerDefinition,
    profile: &AssessmentProfile,
    scores: &SubScores,
) -> GapAnalysis {
    let mut analysis = GapAnalysis::default();

    for dimension in CLASSIFIED {
        let score = scores.get(dimension);
        if score >= STRENGTH_THRESHOLD {
            analysis.add_strength(strength_statement(dimension));
        } else if score < DEVELOPMENT_THRESHOLD {
            analysis.add_development(development_statement(dimension));
        }
    }

    let text = CareerText::new(career);

    let extraversion = likert(profile.personality_traits.extraversion);
    if text.title_has_any(MANAGEMENT_TITLES) && extraversion < LEADERSHIP_EXTRAVERSION {
        analysis.add_development(LEADERSHIP_GAP);
    }

    if text.title_has_any(PROGRAMMING_TITLES) && !has_programming_interest(profile) {
        analysis.add_development(PROGRAMMING_GAP);
    }

    analysis
}

fn has_programming_interest(profile: &AssessmentProfile) -> bool {
    profile
        .skills_and_interests
        .technical_interests
        .iter()
        .map(|i| normalize_phrase(i))
        .any(|i| PROGRAMMING_INTERESTS.iter().any(|k| i.contains(k)))
}
