use crate::resume::sections::find_section;
use chrono::{Datelike, Utc};
use regex::Regex;

const EXPERIENCE_STARTS: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "work history",
    "professional experience",
];
const EXPERIENCE_STOPS: &[&str] = &["education", "academic", "skills", "projects", "certification"];

/// Hard ceiling on any figure the estimator reports.
const MAX_YEARS: u32 = 50;
/// Ranges starting before this year are treated as noise (course years,
/// birth dates, zip-code fragments).
const MIN_START_YEAR: i32 = 1990;

/// Estimates total years of experience, preferring explicit phrases over
/// date-range arithmetic and never guessing a nonzero figure without an
/// explicit signal.
pub struct ExperienceEstimator {
    direct_patterns: Vec<Regex>,
    range_re: Regex,
}

impl ExperienceEstimator {
    pub fn new() -> Self {
        Self {
            direct_patterns: vec![
                Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*years?\s+(?:of\s+)?experience").unwrap(),
                Regex::new(r"(?i)experience\s*:?\s*(\d+(?:\.\d+)?)\s*\+?\s*years?").unwrap(),
                Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*years?\s+in\s+(?:the\s+)?field").unwrap(),
                Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*years?\s+of\s+work").unwrap(),
            ],
            range_re: Regex::new(
                r"(?i)\b(19\d{2}|20\d{2})\s*(?:[-\x{2013}\x{2014}]|to)\s*(19\d{2}|20\d{2}|present|now|current)\b",
            )
            .unwrap(),
        }
    }

    pub fn estimate(&self, text: &str) -> u32 {
        self.estimate_with_year(text, Utc::now().year())
    }

    /// Same as [`estimate`](Self::estimate) with the calendar year pinned,
    /// so date-range arithmetic stays deterministic under test.
    pub fn estimate_with_year(&self, text: &str, current_year: i32) -> u32 {
        if let Some(years) = self.from_direct_phrases(text) {
            return years;
        }

        if let Some(years) = self.from_date_ranges(text, current_year) {
            return years;
        }

        self.from_keyword_fallbacks(text)
    }

    /// First direct phrase that parses to a figure inside [0, 50].
    fn from_direct_phrases(&self, text: &str) -> Option<u32> {
        for pattern in &self.direct_patterns {
            if let Some(caps) = pattern.captures(text) {
                if let Ok(value) = caps[1].parse::<f64>() {
                    let rounded = value.round();
                    if (0.0..=MAX_YEARS as f64).contains(&rounded) {
                        return Some(rounded as u32);
                    }
                }
            }
        }
        None
    }

    /// Sum of merged year ranges found in the experience section, falling
    /// back to the whole document when no section is labeled.
    fn from_date_ranges(&self, text: &str, current_year: i32) -> Option<u32> {
        let lines: Vec<&str> = text.lines().collect();
        let section = find_section(&lines, EXPERIENCE_STARTS, EXPERIENCE_STOPS)
            .unwrap_or_else(|| text.to_string());

        let mut ranges: Vec<(i32, i32)> = Vec::new();
        for caps in self.range_re.captures_iter(&section) {
            let start: i32 = match caps[1].parse() {
                Ok(year) => year,
                Err(_) => continue,
            };
            let end = match caps[2].to_lowercase().as_str() {
                "present" | "now" | "current" => current_year,
                other => match other.parse() {
                    Ok(year) => year,
                    Err(_) => continue,
                },
            };

            if end < start
                || start < MIN_START_YEAR
                || end > current_year + 1
                || end - start > MAX_YEARS as i32
            {
                continue;
            }
            ranges.push((start, end));
        }

        if ranges.is_empty() {
            return None;
        }
        ranges.sort();

        // Merge overlapping/adjacent ranges so concurrent roles count once
        let mut merged: Vec<(i32, i32)> = Vec::new();
        for (start, end) in ranges {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }

        let total: i32 = merged.iter().map(|(start, end)| end - start).sum();
        if total > 0 {
            Some((total as u32).min(MAX_YEARS))
        } else {
            None
        }
    }

    /// Last resort: fresher/student résumés report 0, internships report 1.
    fn from_keyword_fallbacks(&self, text: &str) -> u32 {
        let lowered = text.to_lowercase();

        if lowered.contains("fresher") || lowered.contains("fresh graduate") {
            return 0;
        }
        if lowered.contains("student") && !lowered.contains("experience") {
            return 0;
        }
        if lowered.contains("internship") || lowered.contains("intern") {
            return 1;
        }

        0
    }
}

impl Default for ExperienceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    #[test]
    fn test_direct_phrase() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(
            estimator.estimate_with_year("5+ years of experience in backend development", YEAR),
            5
        );
        assert_eq!(estimator.estimate_with_year("Experience: 3 years", YEAR), 3);
        assert_eq!(estimator.estimate_with_year("8 years in the field", YEAR), 8);
    }

    #[test]
    fn test_direct_phrase_rounds_fractions() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(estimator.estimate_with_year("2.5 years of experience", YEAR), 3);
    }

    #[test]
    fn test_direct_phrase_out_of_bounds_falls_through() {
        let estimator = ExperienceEstimator::new();
        // 99 is rejected; the date ranges below take over
        let text = "99 years of experience\nExperience\n2019-2021 backend role\n";
        assert_eq!(estimator.estimate_with_year(text, YEAR), 2);
    }

    #[test]
    fn test_disjoint_ranges_sum() {
        let estimator = ExperienceEstimator::new();
        let text = "Experience\nWorked 2015-2018\nthen 2020-present\n";
        assert_eq!(
            estimator.estimate_with_year(text, YEAR),
            ((2018 - 2015) + (YEAR - 2020)) as u32
        );
    }

    #[test]
    fn test_overlapping_ranges_merge() {
        let estimator = ExperienceEstimator::new();
        // 2015-2020 and 2018-present merge into one 2015..YEAR span
        let text = "Experience\n2015-2020 at Acme\n2018-present at Globex\n";
        assert_eq!(estimator.estimate_with_year(text, YEAR), (YEAR - 2015) as u32);
    }

    #[test]
    fn test_adjacent_ranges_merge() {
        let estimator = ExperienceEstimator::new();
        let text = "Experience\n2016-2019 first role\n2019-2022 second role\n";
        assert_eq!(estimator.estimate_with_year(text, YEAR), 6);
    }

    #[test]
    fn test_to_and_present_spellings() {
        let estimator = ExperienceEstimator::new();
        let text = "Experience\n2021 to Present\n";
        assert_eq!(estimator.estimate_with_year(text, YEAR), (YEAR - 2021) as u32);
    }

    #[test]
    fn test_ranges_outside_section_ignored() {
        let estimator = ExperienceEstimator::new();
        // Education years sit past the stop keyword and must not count
        let text = "Experience\n2020-2022 at Acme\nEducation\n2010-2014 university\n";
        assert_eq!(estimator.estimate_with_year(text, YEAR), 2);
    }

    #[test]
    fn test_whole_document_fallback_when_unlabeled() {
        let estimator = ExperienceEstimator::new();
        let text = "Jane Doe\nAcme Corp 2019-2023\n";
        assert_eq!(estimator.estimate_with_year(text, YEAR), 4);
    }

    #[test]
    fn test_implausible_ranges_discarded() {
        let estimator = ExperienceEstimator::new();
        // Pre-1990 start, reversed range, and a future end all rejected
        let text = "Experience\n1980-1985\n2022-2019\n2030-2031\n";
        assert_eq!(estimator.estimate_with_year(text, YEAR), 0);
    }

    #[test]
    fn test_fresher_and_student_report_zero() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(estimator.estimate_with_year("Fresher seeking first role", YEAR), 0);
        assert_eq!(estimator.estimate_with_year("final year student at IIT", YEAR), 0);
    }

    #[test]
    fn test_internship_reports_one() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(
            estimator.estimate_with_year("Summer internship at a startup", YEAR),
            1
        );
    }

    #[test]
    fn test_no_signal_reports_zero() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(estimator.estimate_with_year("Jane Doe\njane@example.com\n", YEAR), 0);
    }
}
