//! Extractors Crate
//!
//! This crate recovers a structured candidate record from unstructured résumé
//! text. The text is assumed to have already been pulled out of a PDF/DOC/DOCX
//! file by an upstream converter; no binary parsing happens here.
//!
//! # Architecture
//!
//! - **Types**: The `ParsedResume` record and degree categories live in the
//!   `shared-types` crate
//! - **Implementations**: The rule-based extraction pipeline is implemented
//!   in this crate under `resume`
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::ResumeParser;
//!
//! let parser = ResumeParser::new();
//! let resume = parser.parse(&text);
//! println!("{}", serde_json::to_string(&resume)?);
//! ```

pub mod resume;

// Re-export commonly used types
pub use resume::{
    EducationClassifier, ExperienceEstimator, FieldExtractor, ResumeParser, SkillMatcher,
};
