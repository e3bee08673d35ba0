//! Skill catalog
//!
//! Read-only list of skills the game hands out as food. The engine only asks
//! it for a uniformly random entry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::RandomSource;

/// A collectible skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl Skill {
    pub fn new(name: &str, icon: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("skill catalog is empty")]
    Empty,
    #[error("malformed skill catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed, ordered, non-empty set of skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Skill>", into = "Vec<Skill>")]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Result<Self, CatalogError> {
        if skills.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { skills })
    }

    /// Parse a JSON array of `{ name, icon, description }`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let skills: Vec<Skill> = serde_json::from_str(json)?;
        Self::new(skills)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn first(&self) -> &Skill {
        &self.skills[0]
    }

    /// Uniformly random skill
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &Skill {
        &self.skills[rng.pick_index(self.skills.len())]
    }

    /// Whether a skill with this name appears in the collected log
    pub fn is_collected(skill: &Skill, collected: &[Skill]) -> bool {
        collected.iter().any(|s| s.name == skill.name)
    }
}

impl TryFrom<Vec<Skill>> for SkillCatalog {
    type Error = CatalogError;

    fn try_from(skills: Vec<Skill>) -> Result<Self, Self::Error> {
        Self::new(skills)
    }
}

impl From<SkillCatalog> for Vec<Skill> {
    fn from(catalog: SkillCatalog) -> Self {
        catalog.skills
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            skills: vec![
                Skill::new(
                    "Java",
                    "☕",
                    "Expert in Java with Spring Boot framework, building scalable backend systems and microservices with 5+ years of experience.",
                ),
                Skill::new(
                    "Python",
                    "🐍",
                    "Proficient in Python development with experience in backend systems, API development, and automation scripting.",
                ),
                Skill::new(
                    "Spring Boot",
                    "🍃",
                    "Advanced experience with Spring ecosystem including Spring MVC, Data JPA, and building RESTful microservices.",
                ),
                Skill::new(
                    "JavaScript",
                    "💛",
                    "Strong JavaScript skills with modern ES6+ features, used for both frontend and backend development.",
                ),
                Skill::new(
                    "SQL",
                    "🗄️",
                    "Expert in SQL databases including PostgreSQL and MySQL, with strong knowledge of database design and optimization.",
                ),
                Skill::new(
                    "AWS",
                    "☁️",
                    "Experienced with AWS cloud services including EC2, S3, Lambda, and containerization with Docker/Kubernetes.",
                ),
                Skill::new(
                    "Docker",
                    "🐳",
                    "Proficient in containerization with Docker and orchestration with Kubernetes for scalable deployments.",
                ),
                Skill::new(
                    "Apache Kafka",
                    "🔄",
                    "Experienced in building high-performance messaging systems and event streaming with Apache Kafka.",
                ),
                Skill::new(
                    "Git",
                    "📋",
                    "Expert in version control with Git, including CI/CD pipelines with Jenkins and GitHub Actions.",
                ),
                Skill::new(
                    "REST APIs",
                    "🌐",
                    "Extensive experience designing and implementing RESTful APIs with proper authentication and documentation.",
                ),
                Skill::new(
                    "TDD",
                    "🧪",
                    "Strong advocate for Test-Driven Development using JUnit, achieving 85%+ test coverage in production systems.",
                ),
                Skill::new(
                    "Agile",
                    "🏃",
                    "Experienced in Agile methodologies including Scrum and sprint planning, with expertise in JIRA for project management.",
                ),
            ],
        }
    }
}

/// First occurrence of each skill name, in collection order.
///
/// The collected log keeps duplicates; this is the view the "collected" panel shows.
pub fn distinct_by_name(collected: &[Skill]) -> Vec<&Skill> {
    let mut seen = std::collections::HashSet::new();
    collected
        .iter()
        .filter(|s| seen.insert(s.name.as_str()))
        .collect()
}
