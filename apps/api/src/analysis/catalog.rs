//! Keyword Catalog — the closed vocabulary of skills the service can detect.
//!
//! The raw table keeps its historical casing and duplicates; `SkillCatalog`
//! lower-cases and deduplicates it and compiles one matcher per term.

use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;

/// A set of detected skills, lower-cased, iterated in sorted order.
pub type SkillSet = BTreeSet<String>;

pub const SKILL_KEYWORDS: &[&str] = &[
    // Languages & web
    "python", "java", "javascript", "c++", "c#", ".net", "ruby", "php",
    "html", "css", "javascript", "frontend development", "backend development",
    "full-stack development", "responsive design", "web services", "REST API",
    // Data
    "sql", "database management", "data modeling", "data analysis", "big data",
    "data warehousing", "ETL", "NoSQL",
    "data structures", "algorithms", "algorithm design",
    // Engineering practice
    "software development", "object-oriented programming", "functional programming",
    "frameworks", "software architecture", "design patterns", "code review",
    "code optimization", "software documentation",
    // DevOps
    "devops", "docker", "kubernetes", "continuous integration", "CI/CD", "git", "Jenkins",
    "Ansible", "Terraform", "Infrastructure as Code (IaC)", "Continuous Delivery",
    // Cloud
    "cloud computing", "AWS", "Azure", "Google Cloud", "Heroku", "AWS Lambda",
    "serverless", "cloud-native", "cloud security", "cloud architecture", "microservices",
    // Testing
    "testing", "automation", "software testing", "Junit", "Selenium", "test strategy",
    "TDD", "BDD", "functional testing", "load testing",
    // ML / AI
    "machine learning", "deep learning", "artificial intelligence",
    "natural language processing", "data mining", "computer vision",
    "algorithm design", "AI", "ML", "Kafka", "TensorFlow",
    // Security
    "security", "penetration testing", "OWASP",
    "version control", "Git", "SVN",
    // Process & soft skills
    "agile methodology", "scrum", "Kanban",
    "leadership", "team building", "technology leadership", "interpersonal skills",
    "problem solving", "critical thinking", "debugging", "root cause analysis",
    "communication", "presentation", "technical writing", "Swagger", "API documentation",
    "collaboration", "teamwork", "cross-functional teams",
    "Linux/Unix", "bash scripting", "system administration", "AWS CLI",
    "networking", "stress management", "decision-making",
    "conflict resolution", "negotiation", "time management", "SCRUM Master",
    "software manager", "technology manager", "DevOps engineer", "Data Engineer",
    "IoT", "blockchain", "chatbots", "Microservice", "Distributed Systems",
    "software testing", "test automation", "unit testing", "integration testing",
    // Systems
    "real-time systems", "low-level programming", "RTOS", "embedded systems", "GPU programming",
    "concurrency", "distributed computing", "scalability", "performance tuning", "memory management",
    "network protocols", "backend architecture", "API design", "microservices architecture",
    "cloud-native", "serverless", "performance monitoring", "continuous delivery", "refactoring",
    "code quality", "code profiling", "dependency management", "software development lifecycle",
    "software design", "architecture patterns", "application security", "encryption",
    "authentication", "authorization", "web security", "vulnerability assessment",
    "secure coding practices", "SAST", "DAST", "agile project management", "sprint planning",
    "agile ceremonies", "sprint review", "sprint retrospective", "pair programming",
    "code collaboration tools", "code versioning tools", "continuous integration/continuous deployment",
    "software development methodologies", "technical debt management", "code reviews",
    "system design", "technical leadership", "coding standards", "software engineering best practices",
    "distributed version control", "architectural design principles", "software estimation",
    "software prototyping", "change management", "business process optimization",
    "root cause analysis", "problem management", "incident response", "release management",
    // Operations
    "Kubernetes", "Docker Swarm", "Continuous Deployment", "Site Reliability Engineering (SRE)",
    "Infrastructure Automation", "Container Orchestration", "Configuration Management",
    "Monitoring and Alerting", "Log Management", "Serverless Computing", "CICD Pipelines",
    "Load Balancing", "GitOps", "Cloud Cost Optimization",
    "AWS", "Azure", "Google Cloud", "Heroku", "Cloud Security", "Serverless Computing",
    "Cloud Architecture", "Microservices", "DevOps in the Cloud",
    "Neural Networks", "Deep Learning Frameworks", "Computer Vision Libraries", "NLP Libraries",
    "AI Model Training", "Model Deployment", "Machine Learning Pipelines", "AI/ML Ethics",
    "Team Building", "Team Leadership", "Team Collaboration", "Conflict Resolution",
    "Team Motivation", "Team Productivity", "Empowering Teams",
    // Frameworks & databases
    "PostgreSQL", "database administration", "SQL queries",
    "spring", "spring boot", "MVC",
];

/// One compiled catalog term.
#[derive(Debug)]
struct SkillMatcher {
    skill: String,
    pattern: Regex,
}

/// The compiled catalog. Built once at startup and shared read-only.
#[derive(Debug)]
pub struct SkillCatalog {
    matchers: Vec<SkillMatcher>,
}

impl SkillCatalog {
    /// Compiles the built-in keyword table.
    pub fn builtin() -> Result<Self, regex::Error> {
        Self::from_keywords(SKILL_KEYWORDS)
    }

    /// Compiles a keyword list. Terms are lower-cased and deduplicated,
    /// keeping the first occurrence's position.
    pub fn from_keywords(keywords: &[&str]) -> Result<Self, regex::Error> {
        let mut seen = BTreeSet::new();
        let mut matchers = Vec::new();

        for keyword in keywords {
            let skill = keyword.trim().to_lowercase();
            if skill.is_empty() || !seen.insert(skill.clone()) {
                continue;
            }
            let pattern = whole_word_pattern(&skill)?;
            matchers.push(SkillMatcher { skill, pattern });
        }

        debug!(terms = matchers.len(), "Skill catalog compiled");
        Ok(Self { matchers })
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Returns every catalog term that occurs in `text` as a whole word,
    /// ignoring case.
    pub fn extract(&self, text: &str) -> SkillSet {
        self.matchers
            .iter()
            .filter(|m| m.pattern.is_match(text))
            .map(|m| m.skill.clone())
            .collect()
    }
}

/// Builds a case-insensitive matcher for the literal `term`, requiring that it
/// is neither preceded nor followed by a word character.
///
/// `\b` is not used: for terms that start or end in punctuation ("c++", ".net")
/// it would demand a word character on the far side.
fn whole_word_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(term)))
}
