//! Formatters rendering a parsed resume for the console or as JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::parsing::resume::ParsedResume;
use colored::Colorize;

/// Trait for rendering parsed records.
pub trait OutputFormatter {
    fn format(&self, resume: &ParsedResume) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self { use_colors }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, resume: &ParsedResume) -> Result<String> {
        let mut out = String::new();

        if let Some(filename) = &resume.filename {
            out.push_str(&format!("{}\n", self.heading(&format!("── {} ──", filename))));
        }

        out.push_str(&format!("{}\n", self.heading("Summary")));
        out.push_str(&format!("  Name:      {}\n", resume.name));
        out.push_str(&format!("  Role:      {}\n", resume.predicted_role));
        out.push_str(&format!("  Email:     {}\n", resume.email));
        out.push_str(&format!("  Phone:     {}\n", resume.phone));
        out.push_str(&format!("  LinkedIn:  {}\n", resume.linkedin));
        out.push_str(&format!("  GitHub:    {}\n", resume.github));

        out.push_str(&format!("\n{}\n", self.heading("Role Compatibility")));
        for entry in &resume.role_comparison {
            out.push_str(&format!("  {:<24} {}\n", entry.role, entry.score));
        }

        out.push_str(&format!("\n{}\n", self.heading("Skills")));
        out.push_str(&format!("  {}\n", resume.skills_line()));

        for (title, entries) in [
            ("Education", &resume.education),
            ("Achievements", &resume.achievements),
            ("Projects", &resume.projects),
        ] {
            if !entries.is_empty() {
                out.push_str(&format!("\n{}\n", self.heading(title)));
                for entry in entries {
                    out.push_str(&format!("  - {}\n", entry.replace('\n', " / ")));
                }
            }
        }

        if let Some(jd) = &resume.jd_score {
            out.push_str(&format!("\n{}\n", self.heading("JD Match")));
            out.push_str(&format!("  Score:   {:.2}\n", jd.score));
            out.push_str(&format!(
                "  Matched: {}\n",
                jd.matched_skills.iter().cloned().collect::<Vec<_>>().join(", ")
            ));
            out.push_str(&format!(
                "  Missing: {}\n",
                jd.missing_skills.iter().cloned().collect::<Vec<_>>().join(", ")
            ));
            out.push_str(&format!("  {}\n", jd.summary));
        }

        if let Some(check) = &resume.role_match_check {
            out.push_str(&format!("\n{}\n", self.heading("Desired Role vs Resume Fit")));
            if check.is_match {
                out.push_str(&format!(
                    "  Resume matches the desired role: {}\n",
                    check.desired_role
                ));
            } else {
                out.push_str(&format!(
                    "  Desired role is {}, but the resume better fits {} (score for '{}': {})\n",
                    check.desired_role, check.predicted_role, check.desired_role, check.match_score
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter for downstream rendering and file export.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, resume: &ParsedResume) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(resume)?
        } else {
            serde_json::to_string(resume)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Download filename derived from the Name field, spaces replaced by
/// underscores.
pub fn suggested_json_filename(resume: &ParsedResume) -> String {
    format!("{}_parsed.json", resume.name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::pipeline::ResumePipeline;
    use crate::parsing::taxonomy::RoleTaxonomy;

    fn sample() -> ParsedResume {
        let pipeline = ResumePipeline::new(RoleTaxonomy::default()).unwrap();
        pipeline.parse_text(
            "JOHN DOE\njohn@example.com\nskilled in python and sql",
            Some("Backend Developer with sql"),
        )
    }

    #[test]
    fn test_console_output_mentions_fields() {
        let formatter = ConsoleFormatter::new(false);
        let rendered = formatter.format(&sample()).unwrap();
        assert!(rendered.contains("JOHN DOE"));
        assert!(rendered.contains("Role Compatibility"));
        assert!(rendered.contains("JD Match"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let formatter = JsonFormatter::new(true);
        let rendered = formatter.format(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["Name"], "JOHN DOE");
        assert!(value["Role Comparison"].is_array());
    }

    #[test]
    fn test_suggested_filename_sanitizes_spaces() {
        assert_eq!(suggested_json_filename(&sample()), "JOHN_DOE_parsed.json");
    }
}
