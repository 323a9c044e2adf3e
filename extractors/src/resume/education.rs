use crate::resume::sections::find_section;
use regex::Regex;
use shared_types::EducationCategory;

const EDUCATION_STARTS: &[&str] = &["education", "academic", "qualification", "educational background"];
const EDUCATION_STOPS: &[&str] = &["experience", "work", "employment", "skills", "projects", "certification"];

/// Maps résumé text to the set of degree categories it mentions, via one
/// regex family per category.
pub struct EducationClassifier {
    families: Vec<(EducationCategory, Regex)>,
}

impl EducationClassifier {
    pub fn new() -> Self {
        Self {
            families: vec![
                (
                    EducationCategory::Bachelors,
                    Regex::new(r"(?i)\b(?:bachelor|b\.?\s*e\.?|b\.?\s*tech\.?|b\.?\s*sc\.?|b\.?\s*com\.?|b\.?\s*c\.?\s*a\.?|b\.?\s*b\.?\s*a\.?)\b").unwrap(),
                ),
                (
                    EducationCategory::Masters,
                    Regex::new(r"(?i)\b(?:master|m\.?\s*e\.?|m\.?\s*tech\.?|m\.?\s*sc\.?|m\.?\s*com\.?|m\.?\s*b\.?\s*a\.?|m\.?\s*c\.?\s*a\.?)\b").unwrap(),
                ),
                (
                    EducationCategory::Phd,
                    Regex::new(r"(?i)\b(?:ph\.?\s*d\.?|doctorate|doctoral)\b").unwrap(),
                ),
                (
                    EducationCategory::Diploma,
                    Regex::new(r"(?i)\b(?:diploma|polytechnic)\b").unwrap(),
                ),
                (
                    EducationCategory::Certification,
                    Regex::new(r"(?i)\b(?:certification|certificate|certified)\b").unwrap(),
                ),
                (
                    EducationCategory::HighSchool,
                    Regex::new(r"(?i)\b(?:high\s*school|secondary\s*school|12th|10th|hsc|ssc)\b").unwrap(),
                ),
            ],
        }
    }

    /// Comma-joined category labels in the fixed declaration order, or empty
    /// when nothing matched.
    ///
    /// The search area is the education section when one is labeled. With no
    /// label, the first half of the document is used on the assumption that
    /// education front-loads résumés; that fallback has no validation and is
    /// a known source of false positives.
    pub fn classify(&self, text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();

        let search_area = find_section(&lines, EDUCATION_STARTS, EDUCATION_STOPS)
            .unwrap_or_else(|| lines[..lines.len().div_ceil(2)].join("\n"));

        let labels: Vec<&str> = self
            .families
            .iter()
            .filter(|(_, re)| re.is_match(&search_area))
            .map(|(category, _)| category.label())
            .collect();

        labels.join(", ")
    }
}

impl Default for EducationClassifier {
    fn default() -> Self {
        Self::new()
    }
}
