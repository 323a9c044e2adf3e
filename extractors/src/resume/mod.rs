mod education;
mod experience;
mod fields;
mod sections;
mod similarity;
mod skills;

pub use education::EducationClassifier;
pub use experience::ExperienceEstimator;
pub use fields::FieldExtractor;
pub use sections::find_section;
pub use similarity::similarity;
pub use skills::SkillMatcher;

use shared_types::ParsedResume;
use tracing::debug;

/// Rule-based résumé parser over plain extracted text.
///
/// Each field is recovered by an independent extractor; a field the
/// extractors cannot determine comes back as its empty/zero default rather
/// than an error. Parsing is a pure computation, so one parser can be shared
/// across documents and calls are safely parallelizable.
pub struct ResumeParser {
    fields: FieldExtractor,
    skills: SkillMatcher,
    education: EducationClassifier,
    experience: ExperienceEstimator,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            fields: FieldExtractor::new(),
            skills: SkillMatcher::new(),
            education: EducationClassifier::new(),
            experience: ExperienceEstimator::new(),
        }
    }

    pub fn parse(&self, text: &str) -> ParsedResume {
        let email = self.fields.email(text);
        let resume = ParsedResume {
            name: self.fields.name(text, &email),
            phone: self.fields.phone(text),
            skills: self.skills.extract(text),
            education: self.education.classify(text),
            experience_years: self.experience.estimate(text),
            linkedin: self.fields.linkedin(text),
            github: self.fields.github(text),
            languages: self.fields.languages(text),
            email,
        };

        debug!(
            name = %resume.name,
            email = %resume.email,
            skills = resume.skills.len(),
            experience_years = resume.experience_years,
            "parsed resume text"
        );

        resume
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
