//! Output data models shared by the matcher, the insight generators and callers.

use serde::{Deserialize, Serialize};

/// The five compatibility dimensions scored per career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Personality,
    Skills,
    Values,
    WorkStyle,
    MarketDemand,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Personality,
        Dimension::Skills,
        Dimension::Values,
        Dimension::WorkStyle,
        Dimension::MarketDemand,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Personality => "personality",
            Dimension::Skills => "skills",
            Dimension::Values => "values",
            Dimension::WorkStyle => "work style",
            Dimension::MarketDemand => "market demand",
        }
    }
}

/// Weights applied to each sub-score when computing the overall match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub personality: f64,
    pub skills: f64,
    pub values: f64,
    pub work_style: f64,
    pub market_demand: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            personality: 0.25,
            skills: 0.30,
            values: 0.20,
            work_style: 0.15,
            market_demand: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.personality + self.skills + self.values + self.work_style + self.market_demand
    }
}

/// Per-dimension compatibility scores, each 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub personality_fit: u32,
    pub skills_alignment: u32,
    pub values_alignment: u32,
    pub work_style_fit: u32,
    pub market_demand: u32,
}

impl SubScores {
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Personality => self.personality_fit,
            Dimension::Skills => self.skills_alignment,
            Dimension::Values => self.values_alignment,
            Dimension::WorkStyle => self.work_style_fit,
            Dimension::MarketDemand => self.market_demand,
        }
    }

    /// Weighted composite, rounded and clamped to 0–100.
    pub fn weighted_overall(&self, weights: &ScoringWeights) -> u32 {
        let overall = f64::from(self.personality_fit) * weights.personality
            + f64::from(self.skills_alignment) * weights.skills
            + f64::from(self.values_alignment) * weights.values
            + f64::from(self.work_style_fit) * weights.work_style
            + f64::from(self.market_demand) * weights.market_demand;
        overall.round().clamp(0.0, 100.0) as u32
    }
}

/// One ranked career recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatchResult {
    pub career_id: String,
    pub career_title: String,
    pub overall_match: u32,
    #[serde(flatten)]
    pub sub_scores: SubScores,
    pub reasoning: String,
    pub development_areas: Vec<String>,
    pub strength_areas: Vec<String>,
    /// Estimated months until the user is ready for this career (≥ 1).
    pub time_to_readiness: u32,
}

/// Caller-controlled ranking options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationOptions {
    pub limit: usize,
    pub include_current_role: bool,
    /// Minimum overall match (0–100) a career needs to be returned.
    pub min_confidence: u32,
}

impl Default for RecommendationOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            include_current_role: false,
            min_confidence: 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        assert!((w.sum() - 1.0).abs() < 1e-9, "sum was {}", w.sum());
    }

    #[test]
    fn test_weighted_overall_all_hundred() {
        let scores = SubScores {
            personality_fit: 100,
            skills_alignment: 100,
            values_alignment: 100,
            work_style_fit: 100,
            market_demand: 100,
        };
        assert_eq!(scores.weighted_overall(&ScoringWeights::default()), 100);
    }

    #[test]
    fn test_weighted_overall_mixed() {
        // 80*0.25 + 60*0.30 + 70*0.20 + 80*0.15 + 50*0.10 = 20 + 18 + 14 + 12 + 5 = 69
        let scores = SubScores {
            personality_fit: 80,
            skills_alignment: 60,
            values_alignment: 70,
            work_style_fit: 80,
            market_demand: 50,
        };
        assert_eq!(scores.weighted_overall(&ScoringWeights::default()), 69);
    }

    #[test]
    fn test_result_serializes_camel_case_flat() {
        let result = CareerMatchResult {
            career_id: "swe".to_string(),
            career_title: "Software Developer".to_string(),
            overall_match: 82,
            sub_scores: SubScores::default(),
            reasoning: "Good fit.".to_string(),
            development_areas: vec![],
            strength_areas: vec![],
            time_to_readiness: 6,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overallMatch"], 82);
        assert_eq!(json["personalityFit"], 0);
        assert_eq!(json["timeToReadiness"], 6);
    }

    #[test]
    fn test_default_options() {
        let options = RecommendationOptions::default();
        assert_eq!(options.limit, 10);
        assert!(!options.include_current_role);
        assert_eq!(options.min_confidence, 70);
    }
}
