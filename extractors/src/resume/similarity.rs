/// Normalized edit-distance similarity between two strings, in `[0, 1]`.
///
/// Case-insensitive. Identical strings (and two empty strings) score `1.0`;
/// otherwise the score is `1.0 - distance / max(len)` using a standard
/// Levenshtein distance with unit insert/delete/substitute costs.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let longest = a_chars.len().max(b_chars.len());

    1.0 - levenshtein(&a_chars, &b_chars) as f64 / longest as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(similarity("python", "python"), 1.0);
        assert_eq!(similarity("Python", "python"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let ab = similarity("kitten", "sitting");
        let ba = similarity("sitting", "kitten");
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_known_distances() {
        // kitten -> sitting is 3 edits over max length 7
        let score = similarity("kitten", "sitting");
        assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-9);

        // one substitution over length 10
        let score = similarity("kubernetes", "kubernetas");
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_against_nonempty() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_disjoint_strings() {
        let score = similarity("abc", "xyz");
        assert!(score.abs() < 1e-9);
    }
}
