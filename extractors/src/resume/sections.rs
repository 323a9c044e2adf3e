/// Locates a named section within line-oriented résumé text.
///
/// A line starts the section when, after trimming and lower-casing, it equals
/// a start keyword, or begins with `keyword + ":"` or `keyword + " "`. Once
/// inside, lines are trimmed and space-joined into the body until a line
/// matching a stop keyword (excluded) or end of input. Returns `None` when no
/// start keyword is ever seen; callers fall back to their own positional
/// heuristics in that case.
pub fn find_section(lines: &[&str], start_keywords: &[&str], stop_keywords: &[&str]) -> Option<String> {
    let mut inside = false;
    let mut body: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();

        if !inside {
            if matches_keyword(trimmed, start_keywords) {
                inside = true;
            }
            continue;
        }

        if matches_keyword(trimmed, stop_keywords) {
            break;
        }
        if !trimmed.is_empty() {
            body.push(trimmed);
        }
    }

    if inside {
        Some(body.join(" "))
    } else {
        None
    }
}

fn matches_keyword(trimmed: &str, keywords: &[&str]) -> bool {
    let lowered = trimmed.to_lowercase();
    keywords.iter().any(|keyword| {
        lowered == *keyword
            || lowered.starts_with(&format!("{keyword}:"))
            || lowered.starts_with(&format!("{keyword} "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTS: &[&str] = &["education", "academic"];
    const STOPS: &[&str] = &["experience", "skills"];

    #[test]
    fn test_exact_header_line() {
        let lines = vec!["Jane Doe", "Education", "B.Tech CSE", "2015-2019"];
        let body = find_section(&lines, STARTS, STOPS).unwrap();
        assert_eq!(body, "B.Tech CSE 2015-2019");
    }

    #[test]
    fn test_header_with_colon() {
        let lines = vec!["Education:", "MSc Physics"];
        let body = find_section(&lines, STARTS, STOPS).unwrap();
        assert_eq!(body, "MSc Physics");
    }

    #[test]
    fn test_stops_at_next_section() {
        let lines = vec![
            "Education",
            "B.Tech CSE",
            "Skills",
            "Python, SQL",
        ];
        let body = find_section(&lines, STARTS, STOPS).unwrap();
        assert_eq!(body, "B.Tech CSE");
    }

    #[test]
    fn test_case_insensitive_and_padded() {
        let lines = vec!["  EDUCATION BACKGROUND  ", "Diploma in Design"];
        let body = find_section(&lines, STARTS, STOPS).unwrap();
        assert_eq!(body, "Diploma in Design");
    }

    #[test]
    fn test_no_start_keyword() {
        let lines = vec!["Jane Doe", "Python developer"];
        assert!(find_section(&lines, STARTS, STOPS).is_none());
    }

    #[test]
    fn test_keyword_not_matched_mid_line() {
        // "education" has to introduce the line, not merely appear in it
        let lines = vec!["I value education deeply", "B.Tech CSE"];
        assert!(find_section(&lines, STARTS, STOPS).is_none());
    }

    #[test]
    fn test_runs_to_end_of_input() {
        let lines = vec!["Education", "BSc Maths", "", "MSc Stats"];
        let body = find_section(&lines, STARTS, STOPS).unwrap();
        assert_eq!(body, "BSc Maths MSc Stats");
    }
}
