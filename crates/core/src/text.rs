//! Title normalization and matching.
//!
//! Catalogue titles and metadata-source titles disagree on casing,
//! punctuation and partial forms, so comparison only ever happens on a
//! normalized form. Two policies are offered: the substring-tolerant one
//! the index site needs for alternate and truncated titles, and a strict
//! one for callers that would rather miss than over-match.

use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a strict-mode match.
const STRICT_SIMILARITY_THRESHOLD: f64 = 0.92;

/// How aggressively `titles_match` accepts partial titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Equality or either-direction substring containment on the
    /// normalized form.
    ///
    /// Tolerates alternate and truncated titles at the cost of occasional
    /// over-matching on short generic names.
    #[default]
    Loose,

    /// Equality or high Jaro-Winkler similarity on the normalized form.
    Strict,
}

/// Lowercase, trim, and strip every character that is neither alphanumeric
/// nor whitespace.
pub fn normalize(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Compare a query title against a metadata-source title.
///
/// An empty candidate never matches, and neither does a title that
/// normalizes to the empty string.
pub fn titles_match(query: &str, candidate: &str, mode: MatchMode) -> bool {
    if candidate.is_empty() {
        return false;
    }

    let query = normalize(query);
    let candidate = normalize(candidate);
    if query.is_empty() || candidate.is_empty() {
        return false;
    }

    if query == candidate {
        return true;
    }

    match mode {
        MatchMode::Loose => query.contains(&candidate) || candidate.contains(&query),
        MatchMode::Strict => jaro_winkler(&query, &candidate) >= STRICT_SIMILARITY_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Attack on Titan!"), normalize("attack on titan"));
        assert_eq!(normalize("  KONO SUBARASHII!?  "), "kono subarashii");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!?#"), "");
    }

    #[test]
    fn test_normalize_keeps_unicode_letters() {
        assert_eq!(normalize("Saint Seiya: Ômega"), "saint seiya ômega");
    }

    #[test]
    fn test_match_exact_after_normalization() {
        assert!(titles_match("Attack on Titan!", "attack on titan", MatchMode::Loose));
        assert!(titles_match("Attack on Titan!", "attack on titan", MatchMode::Strict));
    }

    #[test]
    fn test_match_substring_either_direction() {
        assert!(titles_match("Naruto", "Naruto: Shippuden", MatchMode::Loose));
        assert!(titles_match("Naruto: Shippuden", "Naruto", MatchMode::Loose));
    }

    #[test]
    fn test_empty_candidate_never_matches() {
        assert!(!titles_match("Naruto", "", MatchMode::Loose));
        assert!(!titles_match("", "", MatchMode::Loose));
        assert!(!titles_match("!!", "??", MatchMode::Loose));
    }

    #[test]
    fn test_strict_rejects_short_substring_false_positive() {
        // Loose over-matches a one-word title against an unrelated franchise entry.
        assert!(titles_match("Naruto", "Boruto: Naruto Next Generations", MatchMode::Loose));
        assert!(!titles_match("Naruto", "Boruto: Naruto Next Generations", MatchMode::Strict));
    }

    #[test]
    fn test_strict_accepts_near_identical_titles() {
        assert!(titles_match("Hunter x Hunter", "Hunter X Hunter!", MatchMode::Strict));
    }
}
