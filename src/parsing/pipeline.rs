//! Pipeline: composes extraction, field extraction, role prediction and the
//! optional job description step into one parsed record per document

use crate::error::{ResumeParserError, Result};
use crate::input::manager::InputManager;
use crate::parsing::fields::FieldExtractors;
use crate::parsing::jd_matcher::{JdMatcher, SummaryStrategy};
use crate::parsing::resume::{ParsedResume, RoleMatchCheck};
use crate::parsing::role_predictor::{RolePredictor, UNCATEGORIZED};
use crate::parsing::sections::{extract_section, SectionKind};
use crate::parsing::taxonomy::RoleTaxonomy;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub struct ResumePipeline {
    extractors: FieldExtractors,
    predictor: RolePredictor,
    matcher: JdMatcher,
    preview_chars: usize,
}

impl ResumePipeline {
    pub fn new(taxonomy: RoleTaxonomy) -> Result<Self> {
        Ok(Self {
            extractors: FieldExtractors::new(),
            predictor: RolePredictor::new(taxonomy)?,
            matcher: JdMatcher::new(),
            preview_chars: 500,
        })
    }

    pub fn with_summary(mut self, summary: Box<dyn SummaryStrategy>) -> Self {
        self.matcher = JdMatcher::with_summary(summary);
        self
    }

    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    pub fn taxonomy(&self) -> &RoleTaxonomy {
        self.predictor.taxonomy()
    }

    /// Parse an already-extracted text blob. Deterministic: the same blob and
    /// job description always produce an identical record.
    pub fn parse_text(&self, text: &str, job_description: Option<&str>) -> ParsedResume {
        let role_comparison = self.predictor.predict(text);
        let predicted_role = RolePredictor::best_role(&role_comparison);

        let designation = if predicted_role == UNCATEGORIZED {
            "Not Found".to_string()
        } else {
            format!("Aspiring {}", predicted_role)
        };

        let skills = self.extractors.skills(text);

        let mut parsed = ParsedResume {
            name: self.extractors.name(text),
            designation,
            email: self.extractors.email(text),
            phone: self.extractors.phone(text),
            linkedin: self.extractors.linkedin(text),
            github: self.extractors.github(text),
            skills,
            education: extract_section(text, SectionKind::Education),
            achievements: extract_section(text, SectionKind::Achievements),
            projects: extract_section(text, SectionKind::Projects),
            predicted_role,
            role_comparison,
            raw_text: preview(text, self.preview_chars),
            filename: None,
            jd_score: None,
            role_match_check: None,
        };

        if let Some(jd) = job_description {
            if !jd.trim().is_empty() {
                parsed.jd_score = Some(self.matcher.score(&parsed.skills, jd));
                parsed.role_match_check = self.check_desired_role(&parsed, jd);
            }
        }

        parsed
    }

    /// Extract a document's text and parse it. Extraction is the only
    /// suspension point and runs under the given timeout; a timeout is an
    /// unreadable document, not a hang.
    pub async fn parse_file(
        &self,
        path: &Path,
        job_description: Option<&str>,
        timeout: Duration,
    ) -> Result<ParsedResume> {
        let mut manager = InputManager::new();
        let text = tokio::time::timeout(timeout, manager.extract_text(path))
            .await
            .map_err(|_| {
                ResumeParserError::UnreadableDocument(format!(
                    "Timed out extracting text from '{}'",
                    path.display()
                ))
            })??;

        debug!("Extracted {} characters from {}", text.len(), path.display());

        let mut parsed = self.parse_text(&text, job_description);
        parsed.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string());
        Ok(parsed)
    }

    /// Parse many documents concurrently with a bounded worker pool. Results
    /// come back in input order; one document's failure never aborts its
    /// siblings.
    pub async fn parse_batch(
        self: Arc<Self>,
        paths: &[PathBuf],
        job_description: Option<&str>,
        timeout: Duration,
        max_concurrent: usize,
    ) -> Vec<(PathBuf, Result<ParsedResume>)> {
        let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
        let jd: Option<Arc<str>> = job_description.map(Arc::from);
        let mut tasks = JoinSet::new();

        for (index, path) in paths.iter().cloned().enumerate() {
            let pipeline = Arc::clone(&self);
            let semaphore = Arc::clone(&semaphore);
            let jd = jd.clone();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                let result = pipeline
                    .parse_file(&path, jd.as_deref(), timeout)
                    .await;
                if let Err(ref e) = result {
                    warn!("Failed to parse {}: {}", path.display(), e);
                }
                (index, path, result)
            });
        }

        let mut results: Vec<Option<(PathBuf, Result<ParsedResume>)>> =
            (0..paths.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, path, result)) => results[index] = Some((path, result)),
                Err(e) => warn!("Parse task panicked: {}", e),
            }
        }

        results.into_iter().flatten().collect()
    }

    /// Desired-role consistency check: the first ranked role whose name
    /// appears as a case-insensitive substring of the job description (first
    /// match wins, not best match). Skipped when no role name appears.
    fn check_desired_role(&self, parsed: &ParsedResume, job_description: &str) -> Option<RoleMatchCheck> {
        let jd_lower = job_description.to_lowercase();

        let desired = parsed
            .role_comparison
            .iter()
            .find(|entry| jd_lower.contains(&entry.role.to_lowercase()))?;

        Some(RoleMatchCheck {
            desired_role: desired.role.clone(),
            predicted_role: parsed.predicted_role.clone(),
            match_score: desired.score,
            is_match: desired.role == parsed.predicted_role,
        })
    }
}

/// First `max_chars` characters of the blob with a trailing ellipsis,
/// truncating on character boundaries.
fn preview(text: &str, max_chars: usize) -> String {
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
JOHN DOE
Email: john.doe@example.com
Phone: +91 9876543210
https://www.linkedin.com/in/john-doe
https://github.com/jdoe

worked on flask services, sql tuning and node apis with react frontends

Skills:
Python, SQL, Node, React

Education:
Bachelor of Computer Applications
Tech University 2020 - 2024";

    fn pipeline() -> ResumePipeline {
        ResumePipeline::new(RoleTaxonomy::default()).unwrap()
    }

    #[test]
    fn test_full_record_without_jd() {
        let parsed = pipeline().parse_text(RESUME, None);

        assert_eq!(parsed.name, "JOHN DOE");
        assert_eq!(parsed.email, "john.doe@example.com");
        assert_eq!(parsed.phone, "+91 9876543210");
        assert_eq!(parsed.linkedin, "https://www.linkedin.com/in/john-doe");
        assert_eq!(parsed.github, "https://github.com/jdoe");
        assert!(parsed.skills.contains("PYTHON"));
        assert!(parsed.skills.contains("SQL"));
        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.predicted_role, "Backend Developer");
        assert_eq!(parsed.designation, "Aspiring Backend Developer");
        assert!(parsed.jd_score.is_none());
        assert!(parsed.role_match_check.is_none());
    }

    #[test]
    fn test_empty_blob_yields_sentinels_not_errors() {
        let parsed = pipeline().parse_text("", None);

        assert_eq!(parsed.name, "Not found");
        assert_eq!(parsed.email, "Not found");
        assert!(parsed.skills.is_empty());
        assert!(parsed.education.is_empty());
        assert_eq!(parsed.predicted_role, UNCATEGORIZED);
        assert_eq!(parsed.designation, "Not Found");
        assert!(parsed.role_comparison.iter().all(|r| r.score == 0));
        assert_eq!(parsed.role_comparison.len(), pipeline().taxonomy().len());
    }

    #[test]
    fn test_blank_jd_treated_as_absent() {
        let parsed = pipeline().parse_text(RESUME, Some("   \n  "));
        assert!(parsed.jd_score.is_none());
        assert!(parsed.role_match_check.is_none());
    }

    #[test]
    fn test_jd_scoring_and_desired_role() {
        let jd = "We need a Backend Developer skilled in SQL and Node";
        let parsed = pipeline().parse_text(RESUME, Some(jd));

        let jd_score = parsed.jd_score.as_ref().unwrap();
        assert!(jd_score.matched_skills.contains("sql"));
        assert!(jd_score.matched_skills.contains("node"));
        assert!(jd_score.score > 0.0);

        let check = parsed.role_match_check.as_ref().unwrap();
        assert_eq!(check.desired_role, "Backend Developer");
        assert!(check.is_match);
        assert!(check.match_score > 0);
    }

    #[test]
    fn test_desired_role_check_skipped_when_no_role_named() {
        let parsed = pipeline().parse_text(RESUME, Some("generic engineering position"));
        assert!(parsed.jd_score.is_some());
        assert!(parsed.role_match_check.is_none());
    }

    #[test]
    fn test_idempotent_parsing() {
        let pipeline = pipeline();
        let jd = Some("Backend Developer with sql");
        let first = pipeline.parse_text(RESUME, jd);
        let second = pipeline.parse_text(RESUME, jd);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_raw_text_preview_truncates_on_char_boundary() {
        let pipeline = ResumePipeline::new(RoleTaxonomy::default())
            .unwrap()
            .with_preview_chars(5);
        let parsed = pipeline.parse_text("héllo wörld", None);
        assert_eq!(parsed.raw_text, "héllo...");
    }

    #[tokio::test]
    async fn test_parse_file_records_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("john.txt");
        std::fs::write(&path, RESUME).unwrap();

        let pipeline = pipeline();
        let parsed = pipeline
            .parse_file(&path, None, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(parsed.filename.as_deref(), Some("john.txt"));
        assert_eq!(parsed.name, "JOHN DOE");
    }

    #[tokio::test]
    async fn test_batch_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, RESUME).unwrap();
        let bad = dir.path().join("missing.txt");

        let pipeline = Arc::new(pipeline());
        let results = pipeline
            .parse_batch(
                &[good.clone(), bad.clone()],
                None,
                Duration::from_secs(5),
                2,
            )
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, good);
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0, bad);
        assert!(results[1].1.is_err());
    }
}
