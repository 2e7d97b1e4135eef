//! Assessment profile: the user's structured self-assessment.
//!
//! Every Likert-style field is stored as the raw integer the intake flow
//! produced. Values outside 1–7 are tolerated on the way in and clamped on the
//! way out (`likert`, `normalized`), so a single bad field never breaks scoring.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest point on every self-assessment scale.
pub const SCALE_MIN: i32 = 1;
/// Highest point on every self-assessment scale.
pub const SCALE_MAX: i32 = 7;
/// Midpoint of the 1–7 scale, used wherever a value is missing.
pub const SCALE_NEUTRAL: i32 = 4;

/// Clamps a raw scale value into 1–7 and widens it for arithmetic.
pub fn likert(value: i32) -> f64 {
    f64::from(value.clamp(SCALE_MIN, SCALE_MAX))
}

fn neutral() -> i32 {
    SCALE_NEUTRAL
}

fn clamp_scale(value: i32) -> i32 {
    value.clamp(SCALE_MIN, SCALE_MAX)
}

// ────────────────────────────────────────────────────────────────────────────
// Personality
// ────────────────────────────────────────────────────────────────────────────

/// Big Five traits, each 1–7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalityTraits {
    pub openness: i32,
    pub conscientiousness: i32,
    pub extraversion: i32,
    pub agreeableness: i32,
    /// Emotional sensitivity (neuroticism).
    pub neuroticism: i32,
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            openness: SCALE_NEUTRAL,
            conscientiousness: SCALE_NEUTRAL,
            extraversion: SCALE_NEUTRAL,
            agreeableness: SCALE_NEUTRAL,
            neuroticism: SCALE_NEUTRAL,
        }
    }
}

/// Identifies one of the five personality traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTraits {
    /// Clamped value of a single trait.
    pub fn get(&self, t: Trait) -> f64 {
        let raw = match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        };
        likert(raw)
    }

    fn normalized(&self) -> Self {
        Self {
            openness: clamp_scale(self.openness),
            conscientiousness: clamp_scale(self.conscientiousness),
            extraversion: clamp_scale(self.extraversion),
            agreeableness: clamp_scale(self.agreeableness),
            neuroticism: clamp_scale(self.neuroticism),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Work style and environment
// ────────────────────────────────────────────────────────────────────────────

/// Work-style preferences, each 1–7. For the bipolar scales the high end is
/// the second named pole (7 = flexible, creative, independent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkStylePreferences {
    pub team_orientation: i32,
    pub structure_vs_flexibility: i32,
    pub analytical_vs_creative: i32,
    pub detail_orientation: i32,
    pub risk_tolerance: i32,
    pub independence_vs_supervision: i32,
}

impl Default for WorkStylePreferences {
    fn default() -> Self {
        Self {
            team_orientation: SCALE_NEUTRAL,
            structure_vs_flexibility: SCALE_NEUTRAL,
            analytical_vs_creative: SCALE_NEUTRAL,
            detail_orientation: SCALE_NEUTRAL,
            risk_tolerance: SCALE_NEUTRAL,
            independence_vs_supervision: SCALE_NEUTRAL,
        }
    }
}

impl WorkStylePreferences {
    fn normalized(&self) -> Self {
        Self {
            team_orientation: clamp_scale(self.team_orientation),
            structure_vs_flexibility: clamp_scale(self.structure_vs_flexibility),
            analytical_vs_creative: clamp_scale(self.analytical_vs_creative),
            detail_orientation: clamp_scale(self.detail_orientation),
            risk_tolerance: clamp_scale(self.risk_tolerance),
            independence_vs_supervision: clamp_scale(self.independence_vs_supervision),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePreference {
    Remote,
    Hybrid,
    Onsite,
    #[default]
    #[serde(other)]
    NoPreference,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySizePreference {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
    #[default]
    #[serde(other)]
    NoPreference,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacePreference {
    Fast,
    Moderate,
    Steady,
    #[default]
    #[serde(other)]
    NoPreference,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelWillingness {
    #[serde(rename = "none")]
    NoTravel,
    Occasional,
    Frequent,
    #[default]
    #[serde(other)]
    NoPreference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkEnvironmentPreferences {
    pub remote: RemotePreference,
    pub company_size: CompanySizePreference,
    pub pace: PacePreference,
    pub travel: TravelWillingness,
    pub work_life_balance: i32,
}

impl Default for WorkEnvironmentPreferences {
    fn default() -> Self {
        Self {
            remote: RemotePreference::default(),
            company_size: CompanySizePreference::default(),
            pace: PacePreference::default(),
            travel: TravelWillingness::default(),
            work_life_balance: SCALE_NEUTRAL,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career values
// ────────────────────────────────────────────────────────────────────────────

/// Importance (1–7) the user places on each of the twelve career values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerValues {
    pub compensation: i32,
    pub work_life_balance: i32,
    pub job_security: i32,
    pub career_growth: i32,
    pub creativity: i32,
    pub autonomy: i32,
    pub social_impact: i32,
    pub intellectual_challenge: i32,
    pub recognition: i32,
    pub leadership: i32,
    pub variety: i32,
    pub stability: i32,
}

impl Default for CareerValues {
    fn default() -> Self {
        Self {
            compensation: SCALE_NEUTRAL,
            work_life_balance: SCALE_NEUTRAL,
            job_security: SCALE_NEUTRAL,
            career_growth: SCALE_NEUTRAL,
            creativity: SCALE_NEUTRAL,
            autonomy: SCALE_NEUTRAL,
            social_impact: SCALE_NEUTRAL,
            intellectual_challenge: SCALE_NEUTRAL,
            recognition: SCALE_NEUTRAL,
            leadership: SCALE_NEUTRAL,
            variety: SCALE_NEUTRAL,
            stability: SCALE_NEUTRAL,
        }
    }
}

/// Identifies one of the twelve career values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerValue {
    Compensation,
    WorkLifeBalance,
    JobSecurity,
    CareerGrowth,
    Creativity,
    Autonomy,
    SocialImpact,
    IntellectualChallenge,
    Recognition,
    Leadership,
    Variety,
    Stability,
}

impl CareerValue {
    pub const ALL: [CareerValue; 12] = [
        CareerValue::Compensation,
        CareerValue::WorkLifeBalance,
        CareerValue::JobSecurity,
        CareerValue::CareerGrowth,
        CareerValue::Creativity,
        CareerValue::Autonomy,
        CareerValue::SocialImpact,
        CareerValue::IntellectualChallenge,
        CareerValue::Recognition,
        CareerValue::Leadership,
        CareerValue::Variety,
        CareerValue::Stability,
    ];
}

impl CareerValues {
    /// Clamped importance of a single value.
    pub fn importance(&self, value: CareerValue) -> f64 {
        let raw = match value {
            CareerValue::Compensation => self.compensation,
            CareerValue::WorkLifeBalance => self.work_life_balance,
            CareerValue::JobSecurity => self.job_security,
            CareerValue::CareerGrowth => self.career_growth,
            CareerValue::Creativity => self.creativity,
            CareerValue::Autonomy => self.autonomy,
            CareerValue::SocialImpact => self.social_impact,
            CareerValue::IntellectualChallenge => self.intellectual_challenge,
            CareerValue::Recognition => self.recognition,
            CareerValue::Leadership => self.leadership,
            CareerValue::Variety => self.variety,
            CareerValue::Stability => self.stability,
        };
        likert(raw)
    }

    fn normalized(&self) -> Self {
        Self {
            compensation: clamp_scale(self.compensation),
            work_life_balance: clamp_scale(self.work_life_balance),
            job_security: clamp_scale(self.job_security),
            career_growth: clamp_scale(self.career_growth),
            creativity: clamp_scale(self.creativity),
            autonomy: clamp_scale(self.autonomy),
            social_impact: clamp_scale(self.social_impact),
            intellectual_challenge: clamp_scale(self.intellectual_challenge),
            recognition: clamp_scale(self.recognition),
            leadership: clamp_scale(self.leadership),
            variety: clamp_scale(self.variety),
            stability: clamp_scale(self.stability),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills and interests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemSolvingStyle {
    Creative,
    Collaborative,
    Systematic,
    Intuitive,
    #[default]
    #[serde(other)]
    Analytical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsAndInterests {
    /// skill-id → self-rated proficiency (1–7).
    pub skills: HashMap<String, i32>,
    pub technical_interests: Vec<String>,
    pub preferred_activities: Vec<String>,
    pub problem_solving_style: ProblemSolvingStyle,
}

impl SkillsAndInterests {
    /// Clamped proficiency for a skill the user rated, if any.
    pub fn proficiency(&self, skill_id: &str) -> Option<f64> {
        self.skills.get(skill_id).map(|&p| likert(p))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience and goals
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    SomeExperience,
    MidCareer,
    Senior,
    Executive,
    #[default]
    #[serde(other)]
    EntryLevel,
}

impl ExperienceLevel {
    pub fn is_senior(self) -> bool {
        matches!(self, ExperienceLevel::Senior | ExperienceLevel::Executive)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineGoal {
    Immediate,
    #[serde(alias = "3-5_years")]
    ThreeToFiveYears,
    LongTerm,
    #[default]
    #[serde(alias = "1-2_years")]
    #[serde(other)]
    OneToTwoYears,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryExpectations {
    #[serde(default)]
    pub min: u32,
    #[serde(default)]
    pub max: u32,
    /// How much salary matters relative to other factors (1–7).
    #[serde(default = "neutral")]
    pub priority: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceAndGoals {
    pub experience_level: ExperienceLevel,
    pub current_role: Option<String>,
    pub timeline_goal: TimelineGoal,
    pub salary_expectations: Option<SalaryExpectations>,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// One user's completed career assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssessmentProfile {
    pub personality_traits: PersonalityTraits,
    pub work_style_preferences: WorkStylePreferences,
    pub work_environment_preferences: WorkEnvironmentPreferences,
    pub career_values: CareerValues,
    pub skills_and_interests: SkillsAndInterests,
    pub experience_and_goals: ExperienceAndGoals,
    pub completed_at: Option<DateTime<Utc>>,
}

impl AssessmentProfile {
    /// Returns a copy with every 1–7 field clamped into range.
    pub fn normalized(&self) -> Self {
        let mut skills = self.skills_and_interests.clone();
        for proficiency in skills.skills.values_mut() {
            *proficiency = clamp_scale(*proficiency);
        }

        let mut goals = self.experience_and_goals.clone();
        if let Some(salary) = goals.salary_expectations.as_mut() {
            salary.priority = clamp_scale(salary.priority);
        }

        let mut environment = self.work_environment_preferences.clone();
        environment.work_life_balance = clamp_scale(environment.work_life_balance);

        Self {
            personality_traits: self.personality_traits.normalized(),
            work_style_preferences: self.work_style_preferences.normalized(),
            work_environment_preferences: environment,
            career_values: self.career_values.normalized(),
            skills_and_interests: skills,
            experience_and_goals: goals,
            completed_at: self.completed_at,
        }
    }
}
