//! Skills alignment: technical interests, preferred activities and rated
//! proficiencies against what a career asks for.

use crate::matching::keywords::{finish_score, normalize_phrase, CareerText};
use crate::models::assessment::SkillsAndInterests;
use crate::models::career::CareerDefinition;

const BASE_SCORE: f64 = 50.0;
const FLOOR: f64 = 20.0;
const INTEREST_BONUS: f64 = 15.0;
const SKILL_MATCH_BONUS: f64 = 8.0;
/// A user may sit this many levels under the requirement and still count.
const PROFICIENCY_TOLERANCE: f64 = 1.0;

/// A preferred-activity keyword and the title families it pays off in.
struct ActivityAffinity {
    activity: &'static str,
    titles: &'static [&'static str],
    bonus: f64,
}

const ACTIVITY_AFFINITIES: &[ActivityAffinity] = &[
    ActivityAffinity {
        activity: "problem solving",
        titles: &["developer", "analyst", "engineer"],
        bonus: 12.0,
    },
    ActivityAffinity {
        activity: "creative",
        titles: &["designer", "marketing"],
        bonus: 10.0,
    },
    ActivityAffinity {
        activity: "leadership",
        titles: &["manager", "lead", "director"],
        bonus: 10.0,
    },
    ActivityAffinity {
        activity: "data analysis",
        titles: &["analyst", "scientist", "researcher"],
        bonus: 12.0,
    },
];

/// 0–100 skills alignment of `skills` for `career`.
pub fn skills_alignment(career: &CareerDefinition, skills: &SkillsAndInterests) -> u32 {
    let text = CareerText::new(career);
    let mut score = BASE_SCORE;

    score += skills
        .technical_interests
        .iter()
        .filter(|interest| text.text_contains(interest))
        .count() as f64
        * INTEREST_BONUS;

    let activities: Vec<String> = skills
        .preferred_activities
        .iter()
        .map(|a| normalize_phrase(a))
        .collect();
    for affinity in ACTIVITY_AFFINITIES {
        let prefers = activities.iter().any(|a| a.contains(affinity.activity));
        if prefers && text.title_has_any(affinity.titles) {
            score += affinity.bonus;
        }
    }

    score += career
        .required_skills
        .iter()
        .filter(|req| {
            skills
                .proficiency(&req.skill_id)
                .is_some_and(|p| p >= req.required_level() - PROFICIENCY_TOLERANCE)
        })
        .count() as f64
        * SKILL_MATCH_BONUS;

    finish_score(score, FLOOR)
}
