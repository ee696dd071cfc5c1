//! Match Scoring — deterministic resume-to-job scorer.
//!
//! Default backend: `StatisticalMatchScorer` (pure-Rust, no I/O, fully testable).
//! `AppState` holds an `Arc<dyn MatchScorer>`, so handlers never depend on the backend.
//!
//! Per job:
//! 1. skill_match = |resume ∩ job| / |job|  (0 when the job lists no skills)
//! 2. exp_fit     = min(years / min_experience, 1.0), 1.0 without a floor,
//!                  halved below a 0.5 ratio when the under-qualified penalty is on
//! 3. edu_fit     = 0.8 for a missing master's, 0.6 for a missing PhD, else 1.0
//! 4. score       = 100 × (0.70 × skill_match + 0.20 × exp_fit + 0.10 × edu_fit)

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::matching::models::{
    default_salary, json_kind, JobPosting, MarketStats, MatchReport, MatchResult, ResumeInput,
    ResumeProfile,
};
use crate::matching::visualize::{ascii_bar, DEFAULT_BAR_LENGTH};
use crate::matching::weights::{
    ScoreWeights, MASTER_GAP_FIT, MISSING_SKILLS_LIMIT, PHD_GAP_FIT, TOP_MATCHES,
    UNDERQUALIFIED_MULTIPLIER, UNDERQUALIFIED_RATIO,
};

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Tunables that differ between deployments of the scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerConfig {
    /// Reject an empty `jobs` list instead of returning an empty report.
    /// A non-empty list of malformed records still yields a report.
    pub strict_mode: bool,
    /// Halve the experience fit when the candidate has under half the required years.
    pub apply_underqualified_penalty: bool,
    /// Experience assumed for a raw-text resume. Deployments have used 1 and 5.
    pub raw_text_experience_years: f64,
    pub bar_length: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            apply_underqualified_penalty: true,
            raw_text_experience_years: 1.0,
            bar_length: DEFAULT_BAR_LENGTH,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    /// Scores raw JSON input as received from a tool call.
    fn score(&self, resume: &Value, jobs: &Value) -> Result<MatchReport, MatchError>;

    fn config(&self) -> &ScorerConfig;

    fn backend(&self) -> &'static str;
}

/// Weighted 70/20/10 statistical scorer.
#[derive(Debug, Clone, Default)]
pub struct StatisticalMatchScorer {
    config: ScorerConfig,
}

impl StatisticalMatchScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }
}

impl MatchScorer for StatisticalMatchScorer {
    fn score(&self, resume: &Value, jobs: &Value) -> Result<MatchReport, MatchError> {
        score_value(resume, jobs, &self.config)
    }

    fn config(&self) -> &ScorerConfig {
        &self.config
    }

    fn backend(&self) -> &'static str {
        "statistical"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON boundary
// ────────────────────────────────────────────────────────────────────────────

/// Validates the shape of tool-call input and scores it.
///
/// `jobs` must be an array and `resume` an object or string. Array entries
/// that are not objects, or objects that fail to deserialize, are skipped;
/// they still count toward `total_jobs_analyzed`.
pub fn score_value(
    resume: &Value,
    jobs: &Value,
    config: &ScorerConfig,
) -> Result<MatchReport, MatchError> {
    let Value::Array(raw_jobs) = jobs else {
        return Err(MatchError::InvalidInput(format!(
            "jobs must be a list, got {}",
            json_kind(jobs)
        )));
    };

    if raw_jobs.is_empty() && config.strict_mode {
        return Err(MatchError::InvalidInput("no jobs provided".to_string()));
    }

    let resume = ResumeInput::from_value(resume)?;

    info!(
        resume_kind = resume.kind(),
        jobs = raw_jobs.len(),
        "compute_resume_job_match called"
    );

    let postings: Vec<JobPosting> = raw_jobs
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| parse_posting(index, raw))
        .collect();

    let profile = resume.into_profile(config);
    let mut report = score_jobs(&profile, &postings, config);
    report.market_stats.total_jobs_analyzed = raw_jobs.len();

    info!(
        top_matches = report.top_matches.len(),
        average_match_score = report.market_stats.average_match_score,
        "compute_resume_job_match completed"
    );

    Ok(report)
}

fn parse_posting(index: usize, raw: &Value) -> Option<JobPosting> {
    if !raw.is_object() {
        warn!(index, kind = json_kind(raw), "Skipping job record that is not an object");
        return None;
    }
    match serde_json::from_value::<JobPosting>(raw.clone()) {
        Ok(posting) => Some(posting),
        Err(e) => {
            warn!(index, "Skipping malformed job record: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores every posting against a normalized profile and ranks the results.
///
/// An empty slice yields an empty report; `strict_mode` is enforced by
/// `score_value` on the raw input list.
pub fn score_jobs(
    profile: &ResumeProfile,
    jobs: &[JobPosting],
    config: &ScorerConfig,
) -> MatchReport {
    if jobs.is_empty() {
        debug!("No jobs to score; returning empty report");
        return MatchReport::empty(0);
    }

    let mut scored: Vec<MatchResult> = jobs
        .iter()
        .map(|job| score_job(profile, job, config))
        .collect();

    let average_match_score =
        round1(scored.iter().map(|r| r.score).sum::<f64>() / scored.len() as f64);

    // Vec::sort_by is stable: equal scores keep input order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(TOP_MATCHES);

    MatchReport {
        top_matches: scored,
        market_stats: MarketStats {
            total_jobs_analyzed: jobs.len(),
            average_match_score,
        },
    }
}

/// Scores a single posting. Independent of every other posting.
pub fn score_job(profile: &ResumeProfile, job: &JobPosting, config: &ScorerConfig) -> MatchResult {
    let job_skills = job.required_skills(&profile.skills);
    let skills = skill_match(&profile.skills, &job_skills);
    let exp_fit = experience_fit(
        profile.total_experience_years,
        job.min_experience(),
        config.apply_underqualified_penalty,
    );
    let edu_fit = education_fit(&profile.education_level, &job.education_requirement());

    let score = round1(composite_score(
        skills.fraction,
        exp_fit,
        edu_fit,
        &ScoreWeights::default(),
    ));
    let skill_pct = round1(skills.fraction * 100.0);

    MatchResult {
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        url: job.resolved_url(),
        score,
        match_graph: ascii_bar(score, config.bar_length),
        skill_match_percentage: skill_pct,
        skill_match_graph: ascii_bar(skill_pct, config.bar_length),
        experience_fit: exp_fit,
        education_fit: edu_fit,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        salary: default_salary(job.salary.clone()),
        is_remote: job.is_remote.unwrap_or(false),
        posted_at: job.posted_at.clone().unwrap_or_default(),
        highlights: job.highlights.clone().unwrap_or_else(|| json!({})),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// |resume ∩ job| / |job|, 0.0 – 1.0
    pub fraction: f64,
    /// Lexicographic order.
    pub matched: Vec<String>,
    /// First `MISSING_SKILLS_LIMIT` job skills absent from the resume, lexicographic.
    pub missing: Vec<String>,
}

/// Fraction of the job's required skills the candidate covers (not Jaccard).
pub fn skill_match(resume_skills: &BTreeSet<String>, job_skills: &BTreeSet<String>) -> SkillMatch {
    if job_skills.is_empty() {
        return SkillMatch {
            fraction: 0.0,
            matched: vec![],
            missing: vec![],
        };
    }

    let matched: Vec<String> = job_skills.intersection(resume_skills).cloned().collect();
    let missing: Vec<String> = job_skills
        .difference(resume_skills)
        .take(MISSING_SKILLS_LIMIT)
        .cloned()
        .collect();

    SkillMatch {
        fraction: matched.len() as f64 / job_skills.len() as f64,
        matched,
        missing,
    }
}

/// Capped ratio of candidate experience to the job's floor. No bonus for exceeding it.
pub fn experience_fit(candidate_years: f64, min_experience: f64, underqualified_penalty: bool) -> f64 {
    if min_experience <= 0.0 {
        return 1.0;
    }
    let ratio = (candidate_years.max(0.0) / min_experience).min(1.0);
    if underqualified_penalty && ratio < UNDERQUALIFIED_RATIO {
        ratio * UNDERQUALIFIED_MULTIPLIER
    } else {
        ratio
    }
}

/// Substring checks on lower-cased strings. "master" is checked before "phd".
pub fn education_fit(resume_education: &str, job_requirement: &str) -> f64 {
    let resume_education = resume_education.to_lowercase();
    let job_requirement = job_requirement.to_lowercase();

    if job_requirement.contains("master") && !resume_education.contains("master") {
        MASTER_GAP_FIT
    } else if (job_requirement.contains("phd") || job_requirement.contains("doctorate"))
        && !resume_education.contains("phd")
    {
        PHD_GAP_FIT
    } else {
        1.0
    }
}

/// Weighted composite on a 0–100 scale, unrounded.
pub fn composite_score(skill_match: f64, exp_fit: f64, edu_fit: f64, weights: &ScoreWeights) -> f64 {
    let blended =
        weights.skills * skill_match + weights.experience * exp_fit + weights.education * edu_fit;
    (blended * 100.0).clamp(0.0, 100.0)
}

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
