//! Personality fit: how closely the user's Big Five traits match a career.
//!
//! Well-known careers carry an ideal trait vector. Anything else goes through
//! a keyword heuristic around a neutral base.

use crate::matching::keywords::{centered, finish_score, CareerText};
use crate::models::assessment::Trait::{
    Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness,
};
use crate::models::assessment::{PersonalityTraits, Trait};
use crate::models::career::CareerDefinition;

/// Score used when a career has no trait expectations at all.
pub const NEUTRAL_SCORE: f64 = 70.0;
const HEURISTIC_FLOOR: f64 = 20.0;
/// Widest possible gap on a 1–7 scale.
const MAX_TRAIT_DISTANCE: f64 = 6.0;

/// Ideal traits for a known career plus how much they dominate the score.
/// `weight` blends the trait match against the neutral score.
#[derive(Debug, Clone, Copy)]
pub struct TraitProfile {
    pub title: &'static str,
    pub ideal: &'static [(Trait, f64)],
    pub weight: f64,
}

pub const CAREER_TRAIT_PROFILES: &[TraitProfile] = &[
    TraitProfile {
        title: "software developer",
        ideal: &[(Openness, 5.0), (Conscientiousness, 6.0), (Extraversion, 3.0)],
        weight: 0.8,
    },
    TraitProfile {
        title: "data scientist",
        ideal: &[(Openness, 6.0), (Conscientiousness, 6.0), (Extraversion, 3.0)],
        weight: 0.85,
    },
    TraitProfile {
        title: "graphic designer",
        ideal: &[(Openness, 7.0), (Conscientiousness, 4.0), (Neuroticism, 4.0)],
        weight: 0.85,
    },
    TraitProfile {
        title: "ux designer",
        ideal: &[(Openness, 6.0), (Agreeableness, 5.0), (Conscientiousness, 5.0)],
        weight: 0.8,
    },
    TraitProfile {
        title: "sales representative",
        ideal: &[(Extraversion, 7.0), (Agreeableness, 5.0)],
        weight: 0.9,
    },
    TraitProfile {
        title: "marketing manager",
        ideal: &[(Extraversion, 6.0), (Openness, 6.0), (Conscientiousness, 5.0)],
        weight: 0.85,
    },
    TraitProfile {
        title: "project manager",
        ideal: &[(Conscientiousness, 7.0), (Extraversion, 5.0), (Agreeableness, 5.0)],
        weight: 0.85,
    },
    TraitProfile {
        title: "teacher",
        ideal: &[(Agreeableness, 6.0), (Extraversion, 5.0), (Conscientiousness, 6.0)],
        weight: 0.85,
    },
    TraitProfile {
        title: "registered nurse",
        ideal: &[(Agreeableness, 7.0), (Conscientiousness, 6.0), (Neuroticism, 2.0)],
        weight: 0.9,
    },
    TraitProfile {
        title: "accountant",
        ideal: &[(Conscientiousness, 7.0), (Openness, 3.0)],
        weight: 0.85,
    },
    TraitProfile {
        title: "financial analyst",
        ideal: &[(Conscientiousness, 6.0), (Openness, 5.0), (Extraversion, 3.0)],
        weight: 0.8,
    },
    TraitProfile {
        title: "mechanical engineer",
        ideal: &[(Conscientiousness, 6.0), (Openness, 5.0)],
        weight: 0.8,
    },
    TraitProfile {
        title: "writer",
        ideal: &[(Openness, 7.0), (Extraversion, 3.0)],
        weight: 0.8,
    },
    TraitProfile {
        title: "human resources specialist",
        ideal: &[(Agreeableness, 6.0), (Extraversion, 5.0)],
        weight: 0.8,
    },
];

/// Looks up the ideal trait profile for a career title (case-insensitive, exact).
pub fn trait_profile(title: &str) -> Option<&'static TraitProfile> {
    let title = title.trim().to_lowercase();
    CAREER_TRAIT_PROFILES.iter().find(|p| p.title == title)
}

/// 0–100 personality fit of `traits` for `career`.
pub fn personality_fit(career: &CareerDefinition, traits: &PersonalityTraits) -> u32 {
    match trait_profile(&career.title) {
        Some(profile) => mapped_fit(profile, traits),
        None => heuristic_fit(&CareerText::new(career), traits),
    }
}

/// 100 at an exact match, falling linearly to 0 at the widest gap.
fn trait_match(user: f64, ideal: f64) -> f64 {
    (100.0 - (user - ideal).abs() / MAX_TRAIT_DISTANCE * 100.0).max(0.0)
}

fn mapped_fit(profile: &TraitProfile, traits: &PersonalityTraits) -> u32 {
    if profile.ideal.is_empty() {
        return NEUTRAL_SCORE as u32;
    }

    let total: f64 = profile
        .ideal
        .iter()
        .map(|&(t, ideal)| trait_match(traits.get(t), ideal))
        .sum();
    let average = total / profile.ideal.len() as f64;

    let weight = profile.weight.clamp(0.0, 1.0);
    let blended = average * weight + NEUTRAL_SCORE * (1.0 - weight);
    blended.clamp(0.0, 100.0).round() as u32
}

fn heuristic_fit(text: &CareerText, traits: &PersonalityTraits) -> u32 {
    let openness = traits.get(Openness);
    let conscientiousness = traits.get(Conscientiousness);
    let extraversion = traits.get(Extraversion);
    let agreeableness = traits.get(Agreeableness);
    let neuroticism = traits.get(Neuroticism);

    let mut score = NEUTRAL_SCORE;

    if text.text_has_any(&["manager", "lead"]) {
        score += centered(extraversion, 4.0);
        score += centered(conscientiousness, 3.0);
    }
    if text.text_has_any(&["designer", "creative"]) {
        score += centered(openness, 5.0);
        score -= centered(neuroticism, 2.0);
    }
    if text.text_has_any(&["analyst", "scientist"]) {
        score += centered(openness, 3.0);
        score += centered(conscientiousness, 4.0);
    }
    if text.text_has_any(&["sales", "marketing"]) {
        score += centered(extraversion, 5.0);
        score += centered(agreeableness, 3.0);
    }

    finish_score(score, HEURISTIC_FLOOR)
}
