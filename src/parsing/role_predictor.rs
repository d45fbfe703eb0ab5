//! Role prediction: rank taxonomy roles by keyword hits in the text blob
//!
//! Matching is substring containment over the lower-cased blob, not
//! word-boundary tokenization: "ai" hits inside "air". This mirrors the
//! observed scoring and is a known source of false positives.

use crate::error::{ResumeParserError, Result};
use crate::parsing::resume::RoleScore;
use crate::parsing::taxonomy::RoleTaxonomy;
use aho_corasick::AhoCorasick;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Sentinel role when no keyword of any role appears in the blob.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub struct RolePredictor {
    taxonomy: RoleTaxonomy,
    matcher: AhoCorasick,
    /// Pattern id → (taxonomy role index, keyword index within the role).
    pattern_owners: Vec<(usize, usize)>,
}

impl RolePredictor {
    pub fn new(taxonomy: RoleTaxonomy) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_owners = Vec::new();

        for (role_idx, role) in taxonomy.roles().iter().enumerate() {
            for (kw_idx, keyword) in role.keywords.iter().enumerate() {
                patterns.push(keyword.clone());
                pattern_owners.push((role_idx, kw_idx));
            }
        }

        let matcher = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeParserError::InvalidInput(format!("Failed to build role matcher: {}", e))
        })?;

        Ok(Self {
            taxonomy,
            matcher,
            pattern_owners,
        })
    }

    pub fn taxonomy(&self) -> &RoleTaxonomy {
        &self.taxonomy
    }

    /// Score every taxonomy role against the blob: one point per distinct
    /// keyword present. The result always contains every role exactly once,
    /// sorted descending by score; ties keep taxonomy declaration order
    /// (stable sort).
    pub fn predict(&self, text: &str) -> Vec<RoleScore> {
        let lowered = text.to_lowercase();

        // Overlapping search so every keyword occurrence is seen even when
        // keywords nest inside one another ("ai" within "air").
        let mut seen: HashSet<usize> = HashSet::new();
        for mat in self.matcher.find_overlapping_iter(&lowered) {
            seen.insert(mat.pattern().as_usize());
        }

        let mut hits = vec![0usize; self.taxonomy.len()];
        for pattern_id in seen {
            let (role_idx, _) = self.pattern_owners[pattern_id];
            hits[role_idx] += 1;
        }

        let mut scores: Vec<RoleScore> = self
            .taxonomy
            .roles()
            .iter()
            .zip(hits)
            .map(|(role, score)| RoleScore {
                role: role.name.clone(),
                score,
            })
            .collect();
        scores.sort_by_key(|entry| Reverse(entry.score));
        scores
    }

    /// Top-ranked role name, or [`UNCATEGORIZED`] when every count is zero.
    pub fn best_role(scores: &[RoleScore]) -> String {
        match scores.first() {
            Some(top) if top.score > 0 => top.role.clone(),
            _ => UNCATEGORIZED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictor() -> RolePredictor {
        RolePredictor::new(RoleTaxonomy::default()).unwrap()
    }

    #[test]
    fn test_every_role_present_exactly_once() {
        let predictor = predictor();
        let scores = predictor.predict("a resume mentioning docker and react");

        assert_eq!(scores.len(), predictor.taxonomy().len());
        let mut names: Vec<&str> = scores.iter().map(|s| s.role.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), predictor.taxonomy().len());
    }

    #[test]
    fn test_substring_containment_semantics() {
        let predictor = predictor();
        // "ai" matches inside "air"; "sql" inside "mysql".
        let scores = predictor.predict("fresh air and mysql tuning");

        let ai = scores.iter().find(|s| s.role == "AI Engineer").unwrap();
        assert_eq!(ai.score, 1);
        let backend = scores.iter().find(|s| s.role == "Backend Developer").unwrap();
        assert_eq!(backend.score, 1);
    }

    #[test]
    fn test_distinct_keywords_counted_once() {
        let predictor = predictor();
        let scores = predictor.predict("docker docker docker kubernetes");
        let devops = scores.iter().find(|s| s.role == "DevOps Engineer").unwrap();
        assert_eq!(devops.score, 2);
    }

    #[test]
    fn test_stable_tie_break_keeps_taxonomy_order() {
        let predictor = predictor();
        let scores = predictor.predict("");

        assert!(scores.iter().all(|s| s.score == 0));
        let names: Vec<&str> = scores.iter().map(|s| s.role.as_str()).collect();
        let declared: Vec<&str> = predictor
            .taxonomy()
            .roles()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, declared);
    }

    #[test]
    fn test_best_role_uncategorized_iff_all_zero() {
        let predictor = predictor();

        let empty = predictor.predict("nothing relevant here");
        assert_eq!(RolePredictor::best_role(&empty), UNCATEGORIZED);

        let hit = predictor.predict("tensorflow and nlp experience");
        assert_eq!(RolePredictor::best_role(&hit), "AI Engineer");
    }

    #[test]
    fn test_case_insensitive_via_lowered_blob() {
        let predictor = predictor();
        let scores = predictor.predict("DOCKER and KUBERNETES at scale");
        let devops = scores.iter().find(|s| s.role == "DevOps Engineer").unwrap();
        assert_eq!(devops.score, 2);
    }

    #[test]
    fn test_alternate_taxonomy_injection() {
        let taxonomy = RoleTaxonomy::new(vec![
            ("Writer", vec!["prose", "editing"]),
            ("Editor", vec!["editing"]),
        ]);
        let predictor = RolePredictor::new(taxonomy).unwrap();
        let scores = predictor.predict("years of editing and prose work");

        assert_eq!(scores[0].role, "Writer");
        assert_eq!(scores[0].score, 2);
        assert_eq!(scores[1].role, "Editor");
        assert_eq!(scores[1].score, 1);
    }
}
