//! Readiness estimator: months until a user is ready for a career.

use crate::models::assessment::{ExperienceLevel, TimelineGoal};

const MONTHS_PER_DEVELOPMENT_AREA: u32 = 3;
const IMMEDIATE_REDUCTION: u32 = 6;
const LONG_TERM_EXTENSION: u32 = 12;

fn base_months(level: ExperienceLevel) -> u32 {
    match level {
        ExperienceLevel::EntryLevel => 12,
        ExperienceLevel::SomeExperience => 8,
        ExperienceLevel::MidCareer => 4,
        ExperienceLevel::Senior | ExperienceLevel::Executive => 2,
    }
}

/// Estimated months to readiness. Always ≥ 1.
pub fn estimate_readiness(
    level: ExperienceLevel,
    timeline: TimelineGoal,
    development_areas: usize,
) -> u32 {
    let gaps = u32::try_from(development_areas).unwrap_or(u32::MAX);
    let months =
        base_months(level).saturating_add(gaps.saturating_mul(MONTHS_PER_DEVELOPMENT_AREA));

    let adjusted = match timeline {
        TimelineGoal::Immediate => months.saturating_sub(IMMEDIATE_REDUCTION),
        TimelineGoal::LongTerm => months.saturating_add(LONG_TERM_EXTENSION),
        TimelineGoal::OneToTwoYears | TimelineGoal::ThreeToFiveYears => months,
    };
    adjusted.max(1)
}
