//! Data model for resume-to-job matching.
//!
//! Inputs arrive as loosely shaped JSON from upstream collaborators (an LLM
//! extracting the resume, a job-search API returning postings), so every
//! field is optional on the way in and defaulted before scoring.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::matching::normalize::{normalize_skills, tokenize};
use crate::matching::scorer::{MatchError, ScorerConfig};

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

/// Structured resume produced by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    pub skills: BTreeSet<String>,
    #[serde(alias = "experience_years")]
    pub total_experience_years: f64,
    pub education_level: String,
}

impl ResumeProfile {
    /// Lower-cases skills and education, clamps experience to `>= 0`.
    pub fn normalized(self) -> Self {
        let total_experience_years = if self.total_experience_years.is_finite() {
            self.total_experience_years.max(0.0)
        } else {
            0.0
        };
        Self {
            skills: normalize_skills(&self.skills),
            total_experience_years,
            education_level: self.education_level.trim().to_lowercase(),
        }
    }
}

/// Resume as handed over by the caller: either structured or a bare text blob.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeInput {
    Structured(ResumeProfile),
    RawText(String),
}

/// Education assumed for a raw-text resume.
pub const RAW_TEXT_EDUCATION: &str = "bachelor";

impl ResumeInput {
    /// Accepts a JSON object (structured profile) or a JSON string (raw text).
    pub fn from_value(value: &Value) -> Result<Self, MatchError> {
        match value {
            Value::Object(_) => serde_json::from_value::<ResumeProfile>(value.clone())
                .map(ResumeInput::Structured)
                .map_err(|e| MatchError::InvalidInput(format!("resume profile is malformed: {e}"))),
            Value::String(text) => Ok(ResumeInput::RawText(text.clone())),
            other => Err(MatchError::InvalidInput(format!(
                "resume must be an object or a string, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResumeInput::Structured(_) => "structured",
            ResumeInput::RawText(_) => "raw_text",
        }
    }

    /// Normalizes either variant into a `ResumeProfile` ready for scoring.
    ///
    /// Raw text is tokenized on whitespace into skills; experience falls back
    /// to `config.raw_text_experience_years` and education to a bachelor's.
    pub fn into_profile(self, config: &ScorerConfig) -> ResumeProfile {
        match self {
            ResumeInput::Structured(profile) => profile.normalized(),
            ResumeInput::RawText(text) => ResumeProfile {
                skills: tokenize(&text),
                total_experience_years: config.raw_text_experience_years,
                education_level: RAW_TEXT_EDUCATION.to_string(),
            }
            .normalized(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Job posting
// ────────────────────────────────────────────────────────────────────────────

/// A job posting as returned by the job-search collaborator.
///
/// Display fields are read leniently: a number where a string is expected is
/// stringified, `{"display_name": ...}` objects are unwrapped, and anything
/// else is treated as absent. Only `skills` and `min_experience` must have
/// the right type for the record to be scored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    /// 0 (or absent) means no experience floor.
    pub min_experience: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub education_level: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub redirect_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    pub salary: Option<Value>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_remote: Option<bool>,
    #[serde(deserialize_with = "lenient_string")]
    pub posted_at: Option<String>,
    pub highlights: Option<Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map
            .get("display_name")
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::Null | Value::Array(_) => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        _ => None,
    })
}

pub const SALARY_NOT_DISCLOSED: &str = "Not Disclosed";

impl JobPosting {
    /// `redirect_url` wins over `url`; empty strings count as absent.
    pub fn resolved_url(&self) -> Option<String> {
        self.redirect_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.url.as_deref().filter(|u| !u.is_empty()))
            .map(str::to_string)
    }

    pub fn min_experience(&self) -> f64 {
        self.min_experience.filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    pub fn education_requirement(&self) -> String {
        self.education_level
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Normalized required skills. When the posting lists none, falls back to
    /// the description tokens that also appear in the resume's skill set.
    pub fn required_skills(&self, resume_skills: &BTreeSet<String>) -> BTreeSet<String> {
        let listed = normalize_skills(self.skills.iter().flatten());
        if !listed.is_empty() {
            return listed;
        }
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => tokenize(description)
                .intersection(resume_skills)
                .cloned()
                .collect(),
            _ => listed,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Score breakdown for a single job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub score: f64, // 0 – 100, one decimal
    pub match_graph: String,
    pub skill_match_percentage: f64, // 0 – 100, one decimal
    pub skill_match_graph: String,
    pub experience_fit: f64, // 0.0 – 1.0
    pub education_fit: f64,  // 0.0 – 1.0
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub salary: Value,
    pub is_remote: bool,
    pub posted_at: String,
    pub highlights: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketStats {
    pub total_jobs_analyzed: usize,
    pub average_match_score: f64,
}

/// Ranked matches plus aggregate statistics over every scored job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub top_matches: Vec<MatchResult>,
    pub market_stats: MarketStats,
}

impl MatchReport {
    pub fn empty(total_jobs_analyzed: usize) -> Self {
        Self {
            top_matches: vec![],
            market_stats: MarketStats {
                total_jobs_analyzed,
                average_match_score: 0.0,
            },
        }
    }
}

pub(crate) fn default_salary(salary: Option<Value>) -> Value {
    match salary {
        Some(Value::Null) | None => json!(SALARY_NOT_DISCLOSED),
        Some(v) => v,
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
