//! Values alignment: importance-weighted average of how well a career
//! serves each of the user's twelve career values.

use crate::matching::keywords::CareerText;
use crate::models::assessment::{CareerValue, CareerValues};
use crate::models::career::{CareerDefinition, IndustryField};

/// Alignment assumed for any value the career gives no signal about.
const DEFAULT_ALIGNMENT: f64 = 70.0;

/// 0–100 values alignment of `values` for `career`.
pub fn values_alignment(career: &CareerDefinition, values: &CareerValues) -> u32 {
    let text = CareerText::new(career);

    let mut weighted = 0.0;
    let mut total_importance = 0.0;
    for value in CareerValue::ALL {
        let importance = values.importance(value);
        weighted += value_alignment(value, career, &text) * importance;
        total_importance += importance;
    }

    // importance is clamped to ≥ 1, so the total is never zero
    (weighted / total_importance).clamp(0.0, 100.0).round() as u32
}

/// How well `career` serves a single value, 0–100.
pub fn value_alignment(value: CareerValue, career: &CareerDefinition, text: &CareerText) -> f64 {
    match value {
        CareerValue::Compensation => compensation_alignment(career),
        CareerValue::WorkLifeBalance => {
            let mut score = DEFAULT_ALIGNMENT;
            if text.text_has_any(&["startup", "sales"]) {
                score -= 20.0;
            }
            if text.title_has_any(&["teacher", "librarian"]) {
                score += 15.0;
            }
            score
        }
        CareerValue::JobSecurity => {
            let mut score = DEFAULT_ALIGNMENT;
            if career.has_any_field(&[
                IndustryField::PublicAdministration,
                IndustryField::HealthcareSocialAssistance,
            ]) {
                score += 20.0;
            }
            if text.text_has_any(&["startup", "freelance"]) {
                score -= 20.0;
            }
            score
        }
        CareerValue::CareerGrowth => {
            let mut score = DEFAULT_ALIGNMENT;
            if text.title_has_any(&["manager", "senior", "lead"]) {
                score += 15.0;
            }
            if career.has_any_field(&[
                IndustryField::Information,
                IndustryField::HealthcareSocialAssistance,
            ]) {
                score += 10.0;
            }
            score.min(100.0)
        }
        CareerValue::Creativity => {
            if text.title_has_any(&["designer", "creative", "architect"]) {
                95.0
            } else if text.title_has_any(&["marketing", "product"]) {
                75.0
            } else if text.title_has_any(&["developer", "engineer"]) {
                60.0
            } else {
                DEFAULT_ALIGNMENT
            }
        }
        CareerValue::Autonomy
        | CareerValue::SocialImpact
        | CareerValue::IntellectualChallenge
        | CareerValue::Recognition
        | CareerValue::Leadership
        | CareerValue::Variety
        | CareerValue::Stability => DEFAULT_ALIGNMENT,
    }
}

fn compensation_alignment(career: &CareerDefinition) -> f64 {
    let Some(range) = career.salary_range else {
        return DEFAULT_ALIGNMENT;
    };
    let midpoint = range.midpoint();
    if midpoint > 120_000.0 {
        95.0
    } else if midpoint > 80_000.0 {
        85.0
    } else if midpoint < 50_000.0 {
        50.0
    } else {
        DEFAULT_ALIGNMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(value: CareerValue) -> CareerValues {
        // every other value at the scale minimum
        let mut v = CareerValues {
            compensation: 1,
            work_life_balance: 1,
            job_security: 1,
            career_growth: 1,
            creativity: 1,
            autonomy: 1,
            social_impact: 1,
            intellectual_challenge: 1,
            recognition: 1,
            leadership: 1,
            variety: 1,
            stability: 1,
        };
        match value {
            CareerValue::Compensation => v.compensation = 7,
            CareerValue::Creativity => v.creativity = 7,
            CareerValue::WorkLifeBalance => v.work_life_balance = 7,
            _ => unreachable!("not used in tests"),
        }
        v
    }

    #[test]
    fn test_no_signals_scores_default() {
        let career = CareerDefinition::new("x", "Clerk");
        assert_eq!(values_alignment(&career, &CareerValues::default()), 70);
    }

    #[test]
    fn test_compensation_thresholds() {
        let text = |c: &CareerDefinition| CareerText::new(c);
        let cases = [
            (130_000, 150_000, 95.0),
            (80_000, 100_000, 85.0),
            (30_000, 40_000, 50.0),
            (60_000, 70_000, 70.0),
        ];
        for (min, max, expected) in cases {
            let career = CareerDefinition::new("x", "Role").with_salary(min, max);
            let got = value_alignment(CareerValue::Compensation, &career, &text(&career));
            assert_eq!(got, expected, "salary {min}-{max}");
        }
    }

    #[test]
    fn test_missing_salary_is_neutral() {
        let career = CareerDefinition::new("x", "Role");
        let got = value_alignment(CareerValue::Compensation, &career, &CareerText::new(&career));
        assert_eq!(got, 70.0);
    }

    #[test]
    fn test_high_importance_pulls_toward_that_value() {
        let rich = CareerDefinition::new("x", "Surgeon").with_salary(200_000, 400_000);
        // (95*7 + 70*11) / 18 = 1435 / 18 = 79.7
        assert_eq!(values_alignment(&rich, &only(CareerValue::Compensation)), 80);
    }

    #[test]
    fn test_designer_serves_creativity() {
        let designer = CareerDefinition::new("x", "Graphic Designer");
        let engineer = CareerDefinition::new("y", "Civil Engineer");
        let values = only(CareerValue::Creativity);
        assert!(values_alignment(&designer, &values) > values_alignment(&engineer, &values));
    }

    #[test]
    fn test_work_life_balance_signals() {
        let teacher = CareerDefinition::new("x", "High School Teacher");
        let sales = CareerDefinition::new("y", "Inside Sales Associate");
        let t = value_alignment(CareerValue::WorkLifeBalance, &teacher, &CareerText::new(&teacher));
        let s = value_alignment(CareerValue::WorkLifeBalance, &sales, &CareerText::new(&sales));
        assert_eq!(t, 85.0);
        assert_eq!(s, 50.0);
    }

    #[test]
    fn test_job_security_fields_and_keywords() {
        let gov = CareerDefinition::new("x", "Policy Advisor")
            .with_fields(&[IndustryField::PublicAdministration]);
        let freelance = CareerDefinition::new("y", "Freelance Photographer");
        let g = value_alignment(CareerValue::JobSecurity, &gov, &CareerText::new(&gov));
        let f = value_alignment(CareerValue::JobSecurity, &freelance, &CareerText::new(&freelance));
        assert_eq!(g, 90.0);
        assert_eq!(f, 50.0);
    }

    #[test]
    fn test_career_growth_capped() {
        let career = CareerDefinition::new("x", "Senior Engineering Manager")
            .with_fields(&[IndustryField::Information]);
        let got = value_alignment(CareerValue::CareerGrowth, &career, &CareerText::new(&career));
        assert_eq!(got, 95.0);
    }

    #[test]
    fn test_out_of_range_importance_is_clamped() {
        let career = CareerDefinition::new("x", "Surgeon").with_salary(200_000, 400_000);
        let mut wild = only(CareerValue::Compensation);
        wild.compensation = 700;
        assert_eq!(
            values_alignment(&career, &wild),
            values_alignment(&career, &only(CareerValue::Compensation))
        );
    }
}
