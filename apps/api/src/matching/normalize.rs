use std::collections::BTreeSet;

/// Punctuation stripped from the edges of description tokens. `+` and `#`
/// are left alone so `c++` and `c#` survive.
const EDGE_PUNCTUATION: &[char] = &[
    ',', '.', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Lower-cases, trims and deduplicates a list of skills. Empty entries are dropped.
pub fn normalize_skills<I, S>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace tokenizer used for raw resume text and the job-description fallback.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(EDGE_PUNCTUATION).to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
