//! Job description matching against the extracted skill set

use crate::parsing::resume::JdMatchResult;
use std::collections::BTreeSet;

/// Punctuation stripped from the edges of each job description token.
const EDGE_PUNCTUATION: &[char] = &[',', '.', '(', ')', ':', ';', '-'];

/// Produces the human-readable summary line of a match result. Swapping the
/// strategy changes the message without touching the [`JdMatchResult`]
/// contract.
pub trait SummaryStrategy: Send + Sync {
    fn summarize(&self, result: &ScoreBreakdown) -> String;
}

/// Inputs a summary strategy may draw on.
pub struct ScoreBreakdown<'a> {
    pub score: f64,
    pub matched: &'a BTreeSet<String>,
    pub missing: &'a BTreeSet<String>,
}

/// Emits the same one-line summary regardless of score. Default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSummary;

impl SummaryStrategy for FixedSummary {
    fn summarize(&self, _result: &ScoreBreakdown) -> String {
        "This candidate is a good fit based on the job description.".to_string()
    }
}

/// Score-conditioned alternative to [`FixedSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BandedSummary;

impl SummaryStrategy for BandedSummary {
    fn summarize(&self, result: &ScoreBreakdown) -> String {
        match result.score {
            s if s >= 75.0 => "Strong fit: the resume covers most of the job description.".to_string(),
            s if s >= 40.0 => format!(
                "Partial fit: {} keyword(s) from the job description are missing.",
                result.missing.len()
            ),
            _ => "Weak fit: the resume covers little of the job description.".to_string(),
        }
    }
}

pub struct JdMatcher {
    summary: Box<dyn SummaryStrategy>,
}

impl Default for JdMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl JdMatcher {
    pub fn new() -> Self {
        Self {
            summary: Box::new(FixedSummary),
        }
    }

    pub fn with_summary(summary: Box<dyn SummaryStrategy>) -> Self {
        Self { summary }
    }

    /// Score the extracted skills against a free-text job description.
    ///
    /// Tokens are split on whitespace; raw tokens longer than two characters
    /// are lowercased and stripped of edge punctuation, duplicates collapse.
    /// Score = round(100 * |matched| / |keywords|, 2), and 0 when the keyword
    /// set is empty. Total over any input pair.
    pub fn score(&self, skills: &BTreeSet<String>, job_description: &str) -> JdMatchResult {
        let jd_keywords = Self::jd_keywords(job_description);

        let skills_lower: BTreeSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();

        let matched: BTreeSet<String> = jd_keywords
            .iter()
            .filter(|kw| skills_lower.contains(*kw))
            .cloned()
            .collect();
        let missing: BTreeSet<String> = jd_keywords
            .iter()
            .filter(|kw| !skills_lower.contains(*kw))
            .cloned()
            .collect();

        let score = if jd_keywords.is_empty() {
            0.0
        } else {
            round2(matched.len() as f64 / jd_keywords.len() as f64 * 100.0)
        };

        let summary = self.summary.summarize(&ScoreBreakdown {
            score,
            matched: &matched,
            missing: &missing,
        });

        JdMatchResult {
            score,
            matched_skills: matched,
            missing_skills: missing,
            summary,
        }
    }

    fn jd_keywords(job_description: &str) -> BTreeSet<String> {
        job_description
            .split_whitespace()
            .filter(|word| word.chars().count() > 2)
            .map(|word| word.to_lowercase().trim_matches(EDGE_PUNCTUATION).to_string())
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
