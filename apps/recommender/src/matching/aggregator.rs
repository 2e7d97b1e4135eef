//! Aggregator: scores every career in a catalog, filters by confidence and
//! returns the top matches with their narrative, gaps and readiness estimate.
//!
//! Algorithm:
//! 1. Optionally drop the user's current role
//! 2. Score the five dimensions per career (in parallel; calculators are pure)
//! 3. overall = Σ(sub_score × weight), rounded
//! 4. Keep overall ≥ min_confidence
//! 5. Stable sort descending by overall (ties keep catalog order), truncate to limit
//! 6. Attach reasoning, strength/development areas and time to readiness

use std::cmp::Reverse;

use rayon::prelude::*;
use tracing::debug;

use crate::insights::gaps::analyze_gaps;
use crate::insights::narrative::build_reasoning;
use crate::insights::readiness::estimate_readiness;
use crate::matching::market_demand::market_demand;
use crate::matching::personality::personality_fit;
use crate::matching::skills::skills_alignment;
use crate::matching::values::values_alignment;
use crate::matching::work_style::work_style_fit;
use crate::models::assessment::AssessmentProfile;
use crate::models::career::CareerDefinition;
use crate::models::recommendation::{
    CareerMatchResult, RecommendationOptions, ScoringWeights, SubScores,
};

/// Computes all five sub-scores for one career.
pub fn score_career(career: &CareerDefinition, profile: &AssessmentProfile) -> SubScores {
    SubScores {
        personality_fit: personality_fit(career, &profile.personality_traits),
        skills_alignment: skills_alignment(career, &profile.skills_and_interests),
        values_alignment: values_alignment(career, &profile.career_values),
        work_style_fit: work_style_fit(career, &profile.work_style_preferences),
        market_demand: market_demand(career),
    }
}

/// Builds the full result for one career from its sub-scores.
pub fn build_match(
    career: &CareerDefinition,
    profile: &AssessmentProfile,
    sub_scores: SubScores,
    overall_match: u32,
) -> CareerMatchResult {
    let reasoning = build_reasoning(career, profile, &sub_scores);
    let gaps = analyze_gaps(career, profile, &sub_scores);
    let goals = &profile.experience_and_goals;
    let time_to_readiness = estimate_readiness(
        goals.experience_level,
        goals.timeline_goal,
        gaps.development_areas.len(),
    );

    CareerMatchResult {
        career_id: career.id.clone(),
        career_title: career.title.clone(),
        overall_match,
        sub_scores,
        reasoning,
        development_areas: gaps.development_areas,
        strength_areas: gaps.strength_areas,
        time_to_readiness,
    }
}

/// True when `career` is the role the user already holds.
pub fn is_current_role(career: &CareerDefinition, current_role: Option<&str>) -> bool {
    current_role
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .is_some_and(|role| career.title.trim().eq_ignore_ascii_case(role))
}

/// Scores, filters, ranks and truncates `careers` for `profile`.
pub fn rank_careers(
    profile: &AssessmentProfile,
    careers: &[CareerDefinition],
    options: &RecommendationOptions,
    weights: &ScoringWeights,
) -> Vec<CareerMatchResult> {
    let current_role = profile.experience_and_goals.current_role.as_deref();

    let mut scored: Vec<(&CareerDefinition, SubScores, u32)> = careers
        .par_iter()
        .filter(|career| options.include_current_role || !is_current_role(career, current_role))
        .map(|career| {
            let sub_scores = score_career(career, profile);
            let overall = sub_scores.weighted_overall(weights);
            (career, sub_scores, overall)
        })
        .filter(|(_, _, overall)| *overall >= options.min_confidence)
        .collect();

    // stable: equal scores keep catalog order
    scored.sort_by_key(|&(_, _, overall)| Reverse(overall));
    scored.truncate(options.limit);

    debug!(
        careers = careers.len(),
        qualifying = scored.len(),
        min_confidence = options.min_confidence,
        "Ranked career catalog"
    );

    scored
        .into_iter()
        .map(|(career, sub_scores, overall)| build_match(career, profile, sub_scores, overall))
        .collect()
}
