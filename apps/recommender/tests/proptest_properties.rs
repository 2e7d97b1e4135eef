//! Property-based tests for the ranking invariants.
//!
//! Profiles are generated with out-of-range scale values on purpose: the
//! engine has to clamp them rather than fail.

use proptest::prelude::*;
use recommender::insights::readiness::estimate_readiness;
use recommender::matching::aggregator::{rank_careers, score_career};
use recommender::matching::personality::{personality_fit, CAREER_TRAIT_PROFILES};
use recommender::models::assessment::{
    AssessmentProfile, CareerValues, ExperienceLevel, PersonalityTraits, Trait, TimelineGoal,
    WorkStylePreferences,
};
use recommender::models::career::{CareerDefinition, IndustryField};
use recommender::{RecommendationOptions, ScoringWeights};

const TITLES: &[&str] = &[
    "Software Developer",
    "Sales Representative",
    "Registered Nurse",
    "Senior Data Scientist",
    "Junior Graphic Designer",
    "Operations Manager",
    "Freelance Creative Consultant",
    "Administrative Clerk",
    "AI Research Scientist",
    "Cloud DevOps Engineer",
    "High School Teacher",
    "Florist",
];

const FIELDS: &[IndustryField] = &[
    IndustryField::Information,
    IndustryField::HealthcareSocialAssistance,
    IndustryField::FinanceInsurance,
    IndustryField::PublicAdministration,
    IndustryField::RetailTrade,
    IndustryField::Construction,
];

const SKILLS: &[&str] = &["programming", "sql", "design", "sales", "care"];
const INTERESTS: &[&str] = &["software", "design", "machine learning", "crm", "health"];
const ACTIVITIES: &[&str] = &["problem_solving", "creative", "leadership", "data_analysis"];

fn scale() -> impl Strategy<Value = i32> {
    -2..=10i32
}

fn experience() -> impl Strategy<Value = ExperienceLevel> {
    prop_oneof![
        Just(ExperienceLevel::EntryLevel),
        Just(ExperienceLevel::SomeExperience),
        Just(ExperienceLevel::MidCareer),
        Just(ExperienceLevel::Senior),
        Just(ExperienceLevel::Executive),
    ]
}

fn timeline() -> impl Strategy<Value = TimelineGoal> {
    prop_oneof![
        Just(TimelineGoal::Immediate),
        Just(TimelineGoal::OneToTwoYears),
        Just(TimelineGoal::ThreeToFiveYears),
        Just(TimelineGoal::LongTerm),
    ]
}

fn profile() -> impl Strategy<Value = AssessmentProfile> {
    (
        prop::collection::vec(scale(), 5),
        prop::collection::vec(scale(), 6),
        prop::collection::vec(scale(), 12),
        prop::collection::vec((prop::sample::select(SKILLS), scale()), 0..4),
        prop::collection::vec(prop::sample::select(INTERESTS), 0..3),
        prop::collection::vec(prop::sample::select(ACTIVITIES), 0..3),
        experience(),
        timeline(),
        prop::option::of(prop::sample::select(TITLES)),
    )
        .prop_map(
            |(p, w, v, skills, interests, activities, level, goal, current_role)| {
                let mut profile = AssessmentProfile {
                    personality_traits: PersonalityTraits {
                        openness: p[0],
                        conscientiousness: p[1],
                        extraversion: p[2],
                        agreeableness: p[3],
                        neuroticism: p[4],
                    },
                    work_style_preferences: WorkStylePreferences {
                        team_orientation: w[0],
                        structure_vs_flexibility: w[1],
                        analytical_vs_creative: w[2],
                        detail_orientation: w[3],
                        risk_tolerance: w[4],
                        independence_vs_supervision: w[5],
                    },
                    career_values: CareerValues {
                        compensation: v[0],
                        work_life_balance: v[1],
                        job_security: v[2],
                        career_growth: v[3],
                        creativity: v[4],
                        autonomy: v[5],
                        social_impact: v[6],
                        intellectual_challenge: v[7],
                        recognition: v[8],
                        leadership: v[9],
                        variety: v[10],
                        stability: v[11],
                    },
                    ..AssessmentProfile::default()
                };
                let s = &mut profile.skills_and_interests;
                s.skills = skills.into_iter().map(|(k, p)| (k.to_string(), p)).collect();
                s.technical_interests = interests.into_iter().map(str::to_string).collect();
                s.preferred_activities = activities.into_iter().map(str::to_string).collect();
                let g = &mut profile.experience_and_goals;
                g.experience_level = level;
                g.timeline_goal = goal;
                g.current_role = current_role.map(str::to_string);
                profile
            },
        )
}

fn career(index: usize) -> impl Strategy<Value = CareerDefinition> {
    (
        prop::sample::select(TITLES),
        prop::sample::subsequence(FIELDS, 0..3),
        prop::option::of((20_000u32..150_000, 0u32..100_000)),
        prop::collection::vec((prop::sample::select(SKILLS), -1..=7i32), 0..3),
    )
        .prop_map(move |(title, fields, salary, skills)| {
            let mut career = CareerDefinition::new(format!("career-{index}"), title)
                .with_description("Work with software, design and people at a startup")
                .with_fields(&fields);
            if let Some((min, spread)) = salary {
                career = career.with_salary(min, min + spread);
            }
            for (skill, level) in skills {
                career = career.with_skill(skill, level);
            }
            career
        })
}

fn catalog() -> impl Strategy<Value = Vec<CareerDefinition>> {
    (0usize..25).prop_flat_map(|len| (0..len).map(career).collect::<Vec<_>>())
}

fn options() -> impl Strategy<Value = RecommendationOptions> {
    (0usize..12, any::<bool>(), 0u32..=100).prop_map(|(limit, include_current_role, min)| {
        RecommendationOptions {
            limit,
            include_current_role,
            min_confidence: min,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sub_scores_and_overall_stay_in_bounds(profile in profile(), careers in catalog()) {
        let weights = ScoringWeights::default();
        for career in &careers {
            let scores = score_career(career, &profile);
            for s in [
                scores.personality_fit,
                scores.skills_alignment,
                scores.values_alignment,
                scores.work_style_fit,
                scores.market_demand,
            ] {
                prop_assert!(s <= 100, "sub-score {} out of range for {}", s, career.title);
            }
            prop_assert!(scores.weighted_overall(&weights) <= 100);
        }
    }

    #[test]
    fn ranking_is_deterministic(profile in profile(), careers in catalog(), options in options()) {
        let weights = ScoringWeights::default();
        let first = rank_careers(&profile, &careers, &options, &weights);
        let second = rank_careers(&profile, &careers, &options, &weights);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn results_respect_limit_threshold_and_order(
        profile in profile(),
        careers in catalog(),
        options in options(),
    ) {
        let results = rank_careers(&profile, &careers, &options, &ScoringWeights::default());
        prop_assert!(results.len() <= options.limit);
        for r in &results {
            prop_assert!(r.overall_match >= options.min_confidence);
            prop_assert!(r.time_to_readiness >= 1);
            prop_assert!(!r.reasoning.is_empty());
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].overall_match >= pair[1].overall_match);
        }
    }

    #[test]
    fn no_qualifying_career_is_dropped(
        profile in profile(),
        careers in catalog(),
        min in 0u32..=100,
    ) {
        let weights = ScoringWeights::default();
        let options = RecommendationOptions {
            limit: usize::MAX,
            include_current_role: true,
            min_confidence: min,
        };
        let qualifying = careers
            .iter()
            .filter(|c| score_career(c, &profile).weighted_overall(&weights) >= min)
            .count();
        let results = rank_careers(&profile, &careers, &options, &weights);
        prop_assert_eq!(results.len(), qualifying);
    }

    #[test]
    fn closer_trait_never_lowers_personality_fit(
        profile_index in 0..CAREER_TRAIT_PROFILES.len(),
        base in prop::collection::vec(1..=7i32, 5),
        a in 1..=7i32,
        b in 1..=7i32,
    ) {
        let entry = &CAREER_TRAIT_PROFILES[profile_index];
        let career = CareerDefinition::new("mapped", entry.title);
        let (t, ideal) = entry.ideal[0];

        let with = |value: i32| {
            let mut traits = PersonalityTraits {
                openness: base[0],
                conscientiousness: base[1],
                extraversion: base[2],
                agreeableness: base[3],
                neuroticism: base[4],
            };
            match t {
                Trait::Openness => traits.openness = value,
                Trait::Conscientiousness => traits.conscientiousness = value,
                Trait::Extraversion => traits.extraversion = value,
                Trait::Agreeableness => traits.agreeableness = value,
                Trait::Neuroticism => traits.neuroticism = value,
            }
            personality_fit(&career, &traits)
        };

        let (near, far) = if (f64::from(a) - ideal).abs() <= (f64::from(b) - ideal).abs() {
            (a, b)
        } else {
            (b, a)
        };
        prop_assert!(with(near) >= with(far));
    }

    #[test]
    fn readiness_has_a_one_month_floor(
        level in experience(),
        goal in timeline(),
        gaps in 0usize..10,
    ) {
        prop_assert!(estimate_readiness(level, goal, gaps) >= 1);
    }
}

#[test]
fn default_weights_sum_to_one() {
    let sum = ScoringWeights::default().sum();
    assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
}

#[test]
fn high_threshold_over_modest_catalog_is_empty() {
    let careers: Vec<CareerDefinition> = TITLES
        .iter()
        .enumerate()
        .map(|(i, t)| CareerDefinition::new(format!("c{i}"), *t))
        .collect();
    let profile = AssessmentProfile::default();
    let weights = ScoringWeights::default();
    assert!(careers
        .iter()
        .all(|c| score_career(c, &profile).weighted_overall(&weights) <= 90));

    let options = RecommendationOptions {
        min_confidence: 95,
        ..RecommendationOptions::default()
    };
    assert!(rank_careers(&profile, &careers, &options, &weights).is_empty());
}

#[test]
fn limit_three_over_fifty_returns_top_three() {
    let careers: Vec<CareerDefinition> = (0..50)
        .map(|i| {
            CareerDefinition::new(format!("c{i}"), TITLES[i % TITLES.len()])
                .with_fields(&[FIELDS[i % FIELDS.len()]])
                .with_salary(40_000 + (i as u32) * 2_000, 90_000 + (i as u32) * 2_000)
        })
        .collect();
    let profile = AssessmentProfile::default();
    let weights = ScoringWeights::default();
    let everything = RecommendationOptions {
        limit: 50,
        include_current_role: true,
        min_confidence: 0,
    };
    let all = rank_careers(&profile, &careers, &everything, &weights);
    assert_eq!(all.len(), 50);

    let top = rank_careers(
        &profile,
        &careers,
        &RecommendationOptions { limit: 3, ..everything },
        &weights,
    );
    assert_eq!(top.len(), 3);
    assert_eq!(top[..], all[..3]);
}
