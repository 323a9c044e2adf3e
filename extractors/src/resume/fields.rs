use regex::Regex;

/// Section headers that terminate the name scan at the top of a résumé.
const HEADER_KEYWORDS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "objective",
    "summary",
    "profile",
    "contact",
    "projects",
    "certifications",
    "achievements",
    "languages",
    "declaration",
];

/// Spoken languages recognized by the language extractor, in output order.
const SPOKEN_LANGUAGES: &[&str] = &[
    "English",
    "Hindi",
    "Spanish",
    "French",
    "German",
    "Mandarin",
    "Japanese",
    "Korean",
    "Arabic",
    "Portuguese",
    "Russian",
    "Italian",
    "Dutch",
    "Bengali",
    "Tamil",
    "Telugu",
    "Marathi",
    "Urdu",
    "Punjabi",
];

/// Stateless extractors for the simple contact fields: email, phone, name,
/// profile URLs and spoken languages. All patterns are compiled once at
/// construction.
pub struct FieldExtractor {
    email_re: Regex,
    linkedin_re: Regex,
    github_re: Regex,
    indian_phone_res: Vec<Regex>,
    intl_phone_res: Vec<Regex>,
    language_res: Vec<(&'static str, Regex)>,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(r"[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}").unwrap(),
            linkedin_re: Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9._%-]+")
                .unwrap(),
            github_re: Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9._-]+")
                .unwrap(),
            indian_phone_res: vec![
                Regex::new(r"\+91[\s-]?\d{5}[\s-]?\d{5}").unwrap(),
                Regex::new(r"\+91[\s-]?\d{10}").unwrap(),
                Regex::new(r"\b0?[6-9]\d{9}\b").unwrap(),
                Regex::new(r"\b[6-9]\d{4}[\s-]\d{5}\b").unwrap(),
            ],
            intl_phone_res: vec![
                Regex::new(r"(?:\+?\d{1,3}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap(),
                Regex::new(r"\b\d{10,15}\b").unwrap(),
            ],
            language_res: SPOKEN_LANGUAGES
                .iter()
                .map(|lang| {
                    (
                        *lang,
                        Regex::new(&format!(r"(?i)\b{}\b", lang)).unwrap(),
                    )
                })
                .collect(),
        }
    }

    /// First email address in the text, or empty.
    pub fn email(&self, text: &str) -> String {
        self.email_re
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Tiered phone matching: Indian mobile formats first, then generic
    /// international/US formats. The first candidate that survives
    /// normalization wins.
    pub fn phone(&self, text: &str) -> String {
        for pattern in &self.indian_phone_res {
            for m in pattern.find_iter(text) {
                if let Some(number) = normalize_indian(m.as_str()) {
                    return number;
                }
            }
        }

        for pattern in &self.intl_phone_res {
            for m in pattern.find_iter(text) {
                if let Some(number) = normalize_international(m.as_str()) {
                    return number;
                }
            }
        }

        String::new()
    }

    /// Candidate name from the top of the résumé.
    ///
    /// Scans at most the first 5 non-blank lines, stopping early at the first
    /// section header. Accepts the first line of 2-4 words where at least 2
    /// words are capitalized; otherwise derives a name from the email
    /// local-part.
    pub fn name(&self, text: &str, email: &str) -> String {
        for line in text.lines().filter(|l| !l.trim().is_empty()).take(5) {
            let trimmed = line.trim();
            let lowered = trimmed.to_lowercase();

            if HEADER_KEYWORDS.iter().any(|k| lowered.contains(k)) {
                break;
            }

            let words: Vec<&str> = trimmed.split_whitespace().collect();
            if words.len() < 2 || words.len() > 4 {
                continue;
            }

            let capitalized = words
                .iter()
                .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
                .count();
            if capitalized >= 2 {
                return trimmed.to_string();
            }
        }

        name_from_email(email)
    }

    /// LinkedIn profile URL, or empty.
    pub fn linkedin(&self, text: &str) -> String {
        self.linkedin_re
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// GitHub profile URL, or empty.
    pub fn github(&self, text: &str) -> String {
        self.github_re
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Spoken languages mentioned anywhere in the text, reported in the
    /// fixed declaration order rather than text order.
    pub fn languages(&self, text: &str) -> Vec<String> {
        self.language_res
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(lang, _)| lang.to_string())
            .collect()
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip an Indian candidate down to its bare 10 digits. The `+91` country
/// code and a single leading `0` are dropped; the first digit must be 6-9.
fn normalize_indian(candidate: &str) -> Option<String> {
    let mut digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 12 && digits.starts_with("91") {
        digits = digits[2..].to_string();
    } else if digits.len() == 11 && digits.starts_with('0') {
        digits = digits[1..].to_string();
    }

    if digits.len() == 10 && digits.starts_with(['6', '7', '8', '9']) {
        Some(digits)
    } else {
        None
    }
}

/// Strip a generic candidate to digits; a leading US `1` on an 11-digit
/// number is dropped. Anything outside 10-15 digits is rejected.
fn normalize_international(candidate: &str) -> Option<String> {
    let mut digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 11 && digits.starts_with('1') {
        digits = digits[1..].to_string();
    }

    if (10..=15).contains(&digits.len()) {
        Some(digits)
    } else {
        None
    }
}

/// Derive a display name from an email local-part: trailing digits are
/// stripped, separators become spaces and each token is title-cased.
fn name_from_email(email: &str) -> String {
    let local = match email.split('@').next() {
        Some(local) if !local.is_empty() => local,
        _ => return String::new(),
    };

    let stripped = local.trim_end_matches(|c: char| c.is_ascii_digit());
    stripped
        .replace(['.', '_', '-'], " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
