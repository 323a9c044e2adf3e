pub mod resume;

pub use resume::{EducationCategory, ParsedResume, ResumeTextError};
