//! Work-style fit: team orientation, structure, creativity, risk and
//! independence preferences against what a title implies.

use crate::matching::keywords::{centered, finish_score, CareerText};
use crate::models::assessment::{likert, WorkStylePreferences};
use crate::models::career::CareerDefinition;

const BASE_SCORE: f64 = 70.0;
const FLOOR: f64 = 20.0;

/// 0–100 work-style fit of `prefs` for `career`.
pub fn work_style_fit(career: &CareerDefinition, prefs: &WorkStylePreferences) -> u32 {
    let text = CareerText::new(career);

    let team = likert(prefs.team_orientation);
    let flexibility = likert(prefs.structure_vs_flexibility);
    let creative = likert(prefs.analytical_vs_creative);
    let risk = likert(prefs.risk_tolerance);
    let independence = likert(prefs.independence_vs_supervision);

    let mut score = BASE_SCORE;

    // team orientation
    if text.title_has_any(&["manager", "coordinator", "director", "supervisor"]) {
        score += centered(team, 3.0);
    } else if text.title_has_any(&["developer", "writer", "analyst"]) {
        score -= centered(team, 2.0);
    }

    // structure vs flexibility
    if text.title_has_any(&["consultant", "creative", "entrepreneur"]) {
        score += centered(flexibility, 3.0);
    } else if text.title_has_any(&["administrative", "clerk", "clerical"]) {
        score -= centered(flexibility, 3.0);
    }

    // analytical vs creative
    if text.title_has_any(&["designer", "artist", "creative"]) {
        score += centered(creative, 4.0);
    } else if text.title_has_any(&["analyst", "scientist", "researcher"]) {
        score -= centered(creative, 4.0);
    }

    // risk tolerance
    if text.title_has_any(&["entrepreneur", "sales", "trader", "trading"]) {
        score += centered(risk, 3.0);
    }

    // independence vs supervision
    if text.title_has_any(&["freelance", "consultant", "remote"]) {
        score += centered(independence, 3.0);
    } else if text.title_has_any(&["entry", "junior", "assistant"]) {
        score -= centered(independence, 2.0);
    }

    finish_score(score, FLOOR)
}
