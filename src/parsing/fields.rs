//! Field extractors: pure pattern searches over the text blob
//!
//! Each extractor derives one field independently of the others and is total
//! over any input, including the empty blob. Missing fields come back as the
//! [`NOT_FOUND`] sentinel or an empty set, never an error.

use regex::Regex;
use std::collections::BTreeSet;

/// Literal sentinel for fields with no match. Serialized as-is, never null.
pub const NOT_FOUND: &str = "Not found";

pub struct FieldExtractors {
    email_regex: Regex,
    phone_regex: Regex,
    skills_regex: Regex,
    linkedin_regex: Regex,
    github_regex: Regex,
}

impl Default for FieldExtractors {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractors {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[\w.-]+@[\w.-]+").expect("Invalid email regex");

        // Indian mobile format: optional +91 prefix, optional separator,
        // ten digits starting with 7, 8 or 9.
        let phone_regex =
            Regex::new(r"(\+91)?[\s\-]?[789]\d{9}").expect("Invalid phone regex");

        let skills_regex = Regex::new(
            r"(?i)\b(?:python|java|html|css|javascript|ml|ai|pandas|flask|react|sql|c\+\+|node|tailwind)\b",
        )
        .expect("Invalid skills regex");

        let linkedin_regex = link_regex("linkedin");
        let github_regex = link_regex("github");

        Self {
            email_regex,
            phone_regex,
            skills_regex,
            linkedin_regex,
            github_regex,
        }
    }

    /// First line that is entirely upper-case and shorter than 40 characters.
    /// A line heuristic, not name-entity recognition: lower- and mixed-case
    /// names are deliberately not found.
    pub fn name(&self, text: &str) -> String {
        for line in text.lines() {
            let trimmed = line.trim();
            if is_upper(trimmed) && trimmed.chars().count() < 40 {
                return trimmed.to_string();
            }
        }
        NOT_FOUND.to_string()
    }

    pub fn email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn phone(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn linkedin(&self, text: &str) -> String {
        first_match(&self.linkedin_regex, text)
    }

    pub fn github(&self, text: &str) -> String {
        first_match(&self.github_regex, text)
    }

    /// Case-insensitive scan for the fixed skill vocabulary, deduplicated and
    /// uppercased.
    pub fn skills(&self, text: &str) -> BTreeSet<String> {
        self.skills_regex
            .find_iter(text)
            .map(|m| m.as_str().to_uppercase())
            .collect()
    }
}

fn link_regex(keyword: &str) -> Regex {
    // Path stops at whitespace and closing brackets so links survive being
    // wrapped in parentheses or markdown.
    Regex::new(&format!(r"https://(www\.)?{}\.com/[^\s)>\]]+", keyword))
        .expect("Invalid link regex")
}

fn first_match(regex: &Regex, text: &str) -> String {
    regex
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// True when the string has at least one cased character and no lowercase
/// ones, mirroring `str.isupper` semantics.
fn is_upper(s: &str) -> bool {
    s.chars().any(|c| c.is_uppercase()) && !s.chars().any(|c| c.is_lowercase())
}
