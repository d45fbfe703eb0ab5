//! The structured records produced by the pipeline
//!
//! Field names serialize exactly as the presentation layer renders them.
//! Optional fields are omitted when absent, never null; missing string
//! fields carry the "Not found" sentinel instead.

use serde::Serialize;
use std::collections::BTreeSet;

/// One role's keyword-hit count. The full ranking always holds every
/// taxonomy role exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleScore {
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Score")]
    pub score: usize,
}

/// Overlap between the extracted skills and a job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JdMatchResult {
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Matched Skills")]
    pub matched_skills: BTreeSet<String>,
    #[serde(rename = "Missing Skills")]
    pub missing_skills: BTreeSet<String>,
    #[serde(rename = "JD Summary")]
    pub summary: String,
}

/// Desired-role consistency check: the first ranked role whose name appears
/// in the job description, compared against the predicted role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMatchCheck {
    #[serde(rename = "Desired Role")]
    pub desired_role: String,
    #[serde(rename = "Predicted Role")]
    pub predicted_role: String,
    #[serde(rename = "Match Score")]
    pub match_score: usize,
    #[serde(rename = "Is Match")]
    pub is_match: bool,
}

/// The parsed output record for one document. Constructed once by the
/// pipeline and immutable afterwards; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedResume {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Designation")]
    pub designation: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "GitHub")]
    pub github: String,
    #[serde(rename = "Skills")]
    pub skills: BTreeSet<String>,
    #[serde(rename = "Education")]
    pub education: Vec<String>,
    #[serde(rename = "Achievements")]
    pub achievements: Vec<String>,
    #[serde(rename = "Projects")]
    pub projects: Vec<String>,
    #[serde(rename = "Predicted Role")]
    pub predicted_role: String,
    #[serde(rename = "Role Comparison")]
    pub role_comparison: Vec<RoleScore>,
    #[serde(rename = "Raw Text")]
    pub raw_text: String,
    #[serde(rename = "Filename", skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(rename = "JD Score", skip_serializing_if = "Option::is_none")]
    pub jd_score: Option<JdMatchResult>,
    #[serde(rename = "Role Match Check", skip_serializing_if = "Option::is_none")]
    pub role_match_check: Option<RoleMatchCheck>,
}

impl ParsedResume {
    /// Skills joined for display, in set order.
    pub fn skills_line(&self) -> String {
        self.skills.iter().cloned().collect::<Vec<_>>().join(", ")
    }

    /// The top `n` entries of the role ranking (pie-view support).
    pub fn top_roles(&self, n: usize) -> &[RoleScore] {
        &self.role_comparison[..n.min(self.role_comparison.len())]
    }
}
