//! Section extraction for Education, Achievements and Projects
//!
//! Header-driven segmentation: a line naming a known section opens it, the
//! following lines belong to it until the next known header, and blank lines
//! split the collected lines into entries. Blobs without recognizable
//! headers yield empty sequences.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Education,
    Achievements,
    Projects,
    Skills,
    Experience,
    Summary,
    Certifications,
}

impl SectionKind {
    fn header_patterns(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Education => &["education", "academic background", "qualifications"],
            SectionKind::Achievements => &["achievements", "accomplishments", "awards", "honors"],
            SectionKind::Projects => &["projects", "portfolio", "notable projects"],
            SectionKind::Skills => &["skills", "technical skills", "core competencies"],
            SectionKind::Experience => &["experience", "work experience", "employment"],
            SectionKind::Summary => &["summary", "profile", "objective", "about"],
            SectionKind::Certifications => &["certifications", "certificates", "licenses"],
        }
    }

    fn all() -> &'static [SectionKind] {
        &[
            SectionKind::Education,
            SectionKind::Achievements,
            SectionKind::Projects,
            SectionKind::Skills,
            SectionKind::Experience,
            SectionKind::Summary,
            SectionKind::Certifications,
        ]
    }
}

/// Extract the entries of one section from the blob.
pub fn extract_section(text: &str, kind: SectionKind) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(start) = lines.iter().position(|line| header_kind(line) == Some(kind)) else {
        return Vec::new();
    };

    let body: Vec<&str> = lines[start + 1..]
        .iter()
        .take_while(|line| header_kind(line).is_none())
        .copied()
        .collect();

    split_entries(&body)
}

/// Classify a line as a section header, if it is one. Headers are short
/// lines that start with a known section word, optionally ending with ':'.
fn header_kind(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 40 {
        return None;
    }

    let lowered = trimmed.trim_end_matches(':').trim().to_lowercase();
    for kind in SectionKind::all() {
        for pattern in kind.header_patterns() {
            if lowered == *pattern {
                return Some(*kind);
            }
        }
    }
    None
}

/// Group contiguous non-empty lines into entries, splitting on blank lines.
fn split_entries(lines: &[&str]) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                entries.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        entries.push(current.join("\n"));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
JOHN DOE

Education:
Bachelor of Computer Applications
Tech University 2020 - 2024

Higher Secondary Education
City School 2018 - 2020

Projects
Translator App: real-time translation across 100+ languages.
Image Classifier: transfer learning with webcam input.

Skills:
Python, React";

    #[test]
    fn test_education_entries_split_on_blank_lines() {
        let entries = extract_section(RESUME, SectionKind::Education);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("Bachelor of Computer Applications"));
        assert!(entries[1].starts_with("Higher Secondary Education"));
    }

    #[test]
    fn test_projects_stop_at_next_header() {
        let entries = extract_section(RESUME, SectionKind::Projects);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("Translator App"));
        assert!(!entries[0].contains("Python, React"));
    }

    #[test]
    fn test_missing_section_is_empty() {
        let entries = extract_section(RESUME, SectionKind::Achievements);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_blob() {
        assert!(extract_section("", SectionKind::Education).is_empty());
    }

    #[test]
    fn test_header_variants() {
        assert_eq!(header_kind("EDUCATION"), Some(SectionKind::Education));
        assert_eq!(header_kind("Awards:"), Some(SectionKind::Achievements));
        assert_eq!(header_kind("my education journey so far"), None);
    }
}
