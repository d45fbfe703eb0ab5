//! Role taxonomy: the fixed role → keyword mapping role prediction runs over
//!
//! The taxonomy is an ordered, read-only value injected into the predictor.
//! Declaration order is observable: it breaks ties in the role ranking.

/// Ordered mapping from role name to lowercase keyword phrases.
#[derive(Debug, Clone)]
pub struct RoleTaxonomy {
    roles: Vec<RoleEntry>,
}

#[derive(Debug, Clone)]
pub struct RoleEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

impl RoleTaxonomy {
    pub fn new(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let roles = entries
            .into_iter()
            .map(|(name, keywords)| RoleEntry {
                name: name.to_string(),
                keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        Self { roles }
    }

    pub fn roles(&self) -> &[RoleEntry] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for RoleTaxonomy {
    fn default() -> Self {
        Self::new(vec![
            (
                "AI Engineer",
                vec!["machine learning", "deep learning", "tensorflow", "pytorch", "nlp", "ai"],
            ),
            (
                "Data Scientist",
                vec![
                    "data analysis",
                    "pandas",
                    "numpy",
                    "statistics",
                    "data visualization",
                    "scikit-learn",
                ],
            ),
            (
                "Frontend Developer",
                vec!["html", "css", "javascript", "react", "vue", "tailwind"],
            ),
            (
                "Backend Developer",
                vec!["django", "flask", "node", "express", "mongodb", "sql"],
            ),
            (
                "Full Stack Developer",
                vec!["mern", "frontend", "backend", "full stack", "api"],
            ),
            (
                "DevOps Engineer",
                vec!["docker", "kubernetes", "jenkins", "ci/cd", "aws"],
            ),
            (
                "Cybersecurity Analyst",
                vec!["penetration", "network security", "firewall", "malware"],
            ),
        ])
    }
}
