use serde::Serialize;

/// Share of the composite score driven by skill coverage.
pub const SKILL_WEIGHT: f64 = 0.70;
/// Share of the composite score driven by experience fit.
pub const EXPERIENCE_WEIGHT: f64 = 0.20;
/// Share of the composite score driven by education fit.
pub const EDUCATION_WEIGHT: f64 = 0.10;

/// Education fit when the job asks for a master's and the resume does not mention one.
pub const MASTER_GAP_FIT: f64 = 0.8;
/// Education fit when the job asks for a PhD/doctorate and the resume does not mention one.
pub const PHD_GAP_FIT: f64 = 0.6;

/// Experience ratio below which a candidate counts as heavily under-qualified.
pub const UNDERQUALIFIED_RATIO: f64 = 0.5;
pub const UNDERQUALIFIED_MULTIPLIER: f64 = 0.5;

/// Number of ranked results kept in a report.
pub const TOP_MATCHES: usize = 10;
pub const MISSING_SKILLS_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

/// Skills 70% / Experience 20% / Education 10%.
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    skills: SKILL_WEIGHT,
    experience: EXPERIENCE_WEIGHT,
    education: EDUCATION_WEIGHT,
};

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let w = DEFAULT_WEIGHTS;
        assert!((w.skills + w.experience + w.education - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_matches_named_constants() {
        let w = ScoreWeights::default();
        assert_eq!(w.skills, SKILL_WEIGHT);
        assert_eq!(w.experience, EXPERIENCE_WEIGHT);
        assert_eq!(w.education, EDUCATION_WEIGHT);
    }

    #[test]
    fn skills_dominate_the_composite() {
        assert!(SKILL_WEIGHT > EXPERIENCE_WEIGHT + EDUCATION_WEIGHT);
    }
}
