//! Narrative generator: turns sub-scores into a short reasoning paragraph.

use crate::matching::keywords::CareerText;
use crate::models::assessment::{AssessmentProfile, ExperienceLevel};
use crate::models::career::CareerDefinition;
use crate::models::recommendation::{Dimension, SubScores};

/// Returned when no dimension clears the lowest band.
pub const DEFAULT_REASONING: &str =
    "This career offers opportunities for growth based on your overall profile.";

const ENTRY_LEVEL_TITLES: &[&str] = &["junior", "entry", "trainee", "apprentice"];

/// Band a sub-score falls into for narrative purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Strong,
    Good,
    Moderate,
    Weak,
}

impl Band {
    pub fn of(score: u32) -> Self {
        match score {
            s if s >= 80 => Band::Strong,
            s if s >= 70 => Band::Good,
            s if s >= 60 => Band::Moderate,
            _ => Band::Weak,
        }
    }
}

fn sentence(dimension: Dimension, band: Band) -> Option<&'static str> {
    let phrase = match (dimension, band) {
        (_, Band::Weak) => return None,
        (Dimension::Personality, Band::Strong) => {
            "Your personality traits are an exceptional match for this role"
        }
        (Dimension::Personality, Band::Good) => "Your personality aligns well with this role",
        (Dimension::Personality, Band::Moderate) => {
            "Your personality shows potential for success in this role"
        }
        (Dimension::Skills, Band::Strong) => {
            "Your skills and interests strongly match what this career requires"
        }
        (Dimension::Skills, Band::Good) => "Your skills provide a good foundation for this career",
        (Dimension::Skills, Band::Moderate) => "You have some relevant skills to build on",
        (Dimension::Values, Band::Strong) => "This career strongly reflects what you value most",
        (Dimension::Values, Band::Good) => "This career aligns well with your values",
        (Dimension::Values, Band::Moderate) => {
            "This career offers moderate alignment with your values"
        }
        (Dimension::WorkStyle, Band::Strong) => {
            "The way this role works suits you exceptionally well"
        }
        (Dimension::WorkStyle, Band::Good) => {
            "The working style of this role is a good fit for you"
        }
        (Dimension::WorkStyle, Band::Moderate) => {
            "You could adapt well to this role's working style"
        }
        (Dimension::MarketDemand, Band::Strong) => "This field is in strong demand",
        (Dimension::MarketDemand, Band::Good) => "This field has good job market prospects",
        (Dimension::MarketDemand, Band::Moderate) => "This field has steady demand",
    };
    Some(phrase)
}

/// Sentence about the gap between the user's seniority and the title's, if any.
fn seniority_sentence(text: &CareerText, level: ExperienceLevel) -> Option<&'static str> {
    if level == ExperienceLevel::EntryLevel && text.title_has_any(&["senior"]) {
        Some("This could be a great long-term goal as you build experience")
    } else if level.is_senior() && text.title_has_any(ENTRY_LEVEL_TITLES) {
        Some("This could be a lateral move that lets you explore a new field")
    } else {
        None
    }
}

/// Builds the reasoning text for one career. Never empty.
pub fn build_reasoning(
    career: &CareerDefinition,
    profile: &AssessmentProfile,
    scores: &SubScores,
) -> String {
    let text = CareerText::new(career);

    let mut sentences: Vec<&str> = Dimension::ALL
        .iter()
        .filter_map(|&d| sentence(d, Band::of(scores.get(d))))
        .collect();
    sentences.extend(seniority_sentence(
        &text,
        profile.experience_and_goals.experience_level,
    ));

    if sentences.is_empty() {
        return DEFAULT_REASONING.to_string();
    }
    format!("{}.", sentences.join(". "))
}
