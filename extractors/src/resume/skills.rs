use crate::resume::similarity::similarity;
use std::collections::HashSet;

/// Similarity threshold for the fuzzy pass.
const FUZZY_THRESHOLD: f64 = 0.85;

/// Canonical skills vocabulary. The casing here is what goes into the output
/// record, regardless of how the skill appeared in the source text.
const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "C",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
    "Rust",
    "Golang",
    "Perl",
    "Haskell",
    "Dart",
    "Elixir",
    "Objective-C",
    "R",
    "SQL",
    "HTML",
    "CSS",
    "Bash",
    "MATLAB",
    // Frameworks and libraries
    "React",
    "Angular",
    "Vue.js",
    "Next.js",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Rails",
    "Laravel",
    "ASP.NET",
    "Svelte",
    "Flutter",
    "React Native",
    "jQuery",
    "Bootstrap",
    "Tailwind CSS",
    "Redux",
    "GraphQL",
    "REST API",
    // Databases
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "SQLite",
    "Oracle",
    "Cassandra",
    "DynamoDB",
    "Elasticsearch",
    "Firebase",
    "MariaDB",
    "Neo4j",
    "Snowflake",
    // Machine learning and data
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "Scikit-learn",
    "Pandas",
    "NumPy",
    "NLP",
    "Computer Vision",
    "Data Science",
    "Data Analysis",
    "OpenCV",
    "Matplotlib",
    // DevOps
    "Docker",
    "Kubernetes",
    "Jenkins",
    "Terraform",
    "Ansible",
    "CI/CD",
    "Git",
    "GitHub Actions",
    "GitLab",
    "Linux",
    "Nginx",
    "Apache",
    // Cloud
    "AWS",
    "Azure",
    "GCP",
    "Google Cloud",
    "Heroku",
    "Serverless",
    "Lambda",
    "S3",
    "EC2",
    "CloudFormation",
    // Security
    "Cybersecurity",
    "Penetration Testing",
    "Network Security",
    "Encryption",
    "OAuth",
    "Firewalls",
    "Vulnerability Assessment",
    // Testing
    "Selenium",
    "Jest",
    "Cypress",
    "JUnit",
    "Pytest",
    "Mocha",
    "Playwright",
    "Unit Testing",
    "Test Automation",
    // Tools and platforms
    "Jira",
    "Confluence",
    "Postman",
    "Figma",
    "Photoshop",
    "Excel",
    "Power BI",
    "Tableau",
    "Kafka",
    "RabbitMQ",
    "Spark",
    "Hadoop",
    "Airflow",
    "VS Code",
    "IntelliJ",
    // Soft skills
    "Leadership",
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
    "Time Management",
    "Project Management",
    "Agile",
    "Scrum",
    "Kanban",
    "Adaptability",
    "Creativity",
    "Collaboration",
    "Mentoring",
    "Public Speaking",
];

/// Common English function words, used to suppress spurious single-word
/// matches out of the fuzzy pass.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "can", "do", "for", "from", "has",
    "have", "he", "her", "his", "i", "if", "in", "is", "it", "its", "of", "on", "or", "our", "she",
    "so", "that", "the", "their", "they", "this", "to", "was", "we", "will", "with", "you",
];

/// Matches free text against the skills vocabulary: an exact substring pass
/// first, then a fuzzy pass over whitespace tokens for skills the exact pass
/// missed.
pub struct SkillMatcher {
    vocabulary: Vec<String>,
    lowered: Vec<String>,
    stop_words: HashSet<&'static str>,
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self::with_vocabulary(SKILL_VOCABULARY)
    }

    /// Build a matcher over a custom vocabulary. Canonical casing of the
    /// entries is preserved in the output.
    pub fn with_vocabulary(vocabulary: &[&str]) -> Self {
        Self {
            vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
            lowered: vocabulary.iter().map(|s| s.to_lowercase()).collect(),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Deduplicated canonical skill names found in the text, in vocabulary
    /// order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered_text = text.to_lowercase();
        let mut found = vec![false; self.vocabulary.len()];

        // Exact pass: substring match catches multi-word skills whole
        for (i, skill) in self.lowered.iter().enumerate() {
            if lowered_text.contains(skill.as_str()) {
                found[i] = true;
            }
        }

        // Fuzzy pass: tolerate typos and tokens mangled by text extraction
        let tokens: Vec<&str> = lowered_text
            .split_whitespace()
            .filter(|t| t.chars().count() > 2)
            .collect();

        for (i, skill) in self.lowered.iter().enumerate() {
            if found[i] {
                continue;
            }
            if similarity(skill, &lowered_text) >= FUZZY_THRESHOLD {
                found[i] = true;
                continue;
            }
            for token in &tokens {
                if !within_length_bound(skill, token) {
                    continue;
                }
                if similarity(skill, token) >= FUZZY_THRESHOLD {
                    found[i] = true;
                    break;
                }
            }
        }

        let mut result = Vec::new();
        for (i, skill) in self.vocabulary.iter().enumerate() {
            if found[i] && !self.is_spurious(skill) {
                result.push(skill.clone());
            }
        }
        result
    }

    /// Stop words and single characters never count as skills.
    fn is_spurious(&self, skill: &str) -> bool {
        let lowered = skill.to_lowercase();
        self.stop_words.contains(lowered.as_str()) || skill.chars().count() <= 1
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Length pruning: if the lengths differ by more than the threshold allows,
/// the similarity can never reach it, so skip the edit distance entirely.
fn within_length_bound(a: &str, b: &str) -> bool {
    let la = a.chars().count();
    let lb = b.chars().count();
    let longest = la.max(lb);
    (longest - la.min(lb)) as f64 / longest as f64 <= 1.0 - FUZZY_THRESHOLD
}
