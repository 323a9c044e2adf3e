use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Structured candidate record recovered from résumé text.
///
/// Every field defaults to empty/zero when the extractors find nothing;
/// "not found" is never an error condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    /// Comma-joined `EducationCategory` labels, in declaration order.
    pub education: String,
    pub experience_years: u32,
    pub linkedin: String,
    pub github: String,
    pub languages: Vec<String>,
}

impl ParsedResume {
    /// True when no extractor found anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.skills.is_empty()
            && self.education.is_empty()
            && self.experience_years == 0
            && self.linkedin.is_empty()
            && self.github.is_empty()
            && self.languages.is_empty()
    }
}

/// Closed set of normalized degree categories. A résumé may map to zero,
/// one, or several of these; the declaration order here is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum EducationCategory {
    Bachelors,
    Masters,
    Phd,
    Diploma,
    Certification,
    HighSchool,
}

impl EducationCategory {
    /// All categories, in the fixed output order.
    pub const ALL: [EducationCategory; 6] = [
        EducationCategory::Bachelors,
        EducationCategory::Masters,
        EducationCategory::Phd,
        EducationCategory::Diploma,
        EducationCategory::Certification,
        EducationCategory::HighSchool,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationCategory::Bachelors => "Bachelor's Degree",
            EducationCategory::Masters => "Master's Degree",
            EducationCategory::Phd => "PhD",
            EducationCategory::Diploma => "Diploma",
            EducationCategory::Certification => "Certification",
            EducationCategory::HighSchool => "High School",
        }
    }
}

impl fmt::Display for EducationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Boundary error for callers feeding text into the pipeline. The pipeline
/// itself never fails; these cover the payload checks a hosting caller runs
/// before invoking it.
#[derive(Debug, thiserror::Error)]
pub enum ResumeTextError {
    #[error("Payload is not valid UTF-8 text")]
    NotText,

    #[error("Payload of {size} bytes exceeds the {limit} byte cap")]
    TooLarge { size: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_serialization() {
        let resume = ParsedResume {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            experience_years: 3,
            ..Default::default()
        };

        let json = serde_json::to_string(&resume).unwrap();
        assert!(json.contains("\"experienceYears\":3"));

        let deserialized: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, resume);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ParsedResume::default().is_empty());

        let resume = ParsedResume {
            github: "github.com/janedoe".to_string(),
            ..Default::default()
        };
        assert!(!resume.is_empty());
    }

    #[test]
    fn test_category_labels_and_order() {
        assert_eq!(EducationCategory::Bachelors.to_string(), "Bachelor's Degree");
        assert_eq!(EducationCategory::ALL[0], EducationCategory::Bachelors);
        assert_eq!(EducationCategory::ALL[5], EducationCategory::HighSchool);
    }
}
