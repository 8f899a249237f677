//! Fuzzy text matching.

/// Mismatch budget for a pattern of `pattern_len` characters:
/// `min(2, pattern_len / 3)`.
#[inline]
pub fn tolerance(pattern_len: usize) -> usize {
    (pattern_len / 3).min(2)
}

/// Check whether `candidate` matches `pattern`, tolerating a few typos.
///
/// Both strings are lower-cased first. A plain substring is always a match.
/// Otherwise the two strings are walked together: equal characters advance
/// both cursors, a differing text character advances only the text cursor and
/// counts as a mismatch. The walk fails as soon as the mismatches exceed
/// [`tolerance`] and succeeds when either cursor runs out.
///
/// The pattern does not have to be consumed completely, so a candidate that
/// ends early is accepted. Search results depend on this leniency.
///
/// Callers skip matching for empty patterns; the result for an empty pattern
/// is not meaningful.
///
/// # Arguments
/// * `candidate` - Text to search in (e.g. a product name)
/// * `pattern` - What the user typed
///
/// # Returns
/// true if the candidate is accepted
pub fn matches(candidate: &str, pattern: &str) -> bool {
    let text = candidate.to_lowercase();
    let pattern = pattern.to_lowercase();

    if text.contains(&pattern) {
        return true;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let max_mismatches = tolerance(pattern.len());
    let mut mismatches = 0;
    let mut p = 0;

    for c in text.chars() {
        if p >= pattern.len() {
            break;
        }
        if pattern[p] == c {
            p += 1;
        } else {
            mismatches += 1;
            if mismatches > max_mismatches {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_steps() {
        assert_eq!(tolerance(0), 0);
        assert_eq!(tolerance(2), 0);
        assert_eq!(tolerance(3), 1);
        assert_eq!(tolerance(5), 1);
        assert_eq!(tolerance(6), 2);
        assert_eq!(tolerance(40), 2);
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        assert!(matches("Milk - Full Cream", "MILK"));
        assert!(matches("Milk - Full Cream", "full"));
    }

    #[test]
    fn test_mild_cheese_rejected_for_milk() {
        // m-i-l match, then 'd' and ' ' are two mismatches against a budget of one
        assert!(!matches("Mild Cheese", "milk"));
    }

    #[test]
    fn test_single_typo_accepted() {
        // the second 'a' in "bananas" is skipped as the only mismatch
        assert!(matches("Bananas", "banans"));
        assert!(matches("Spaghetti", "spagetti"));
    }

    #[test]
    fn test_short_pattern_has_no_budget() {
        assert!(!matches("Beef", "ab"));
        assert!(matches("Beef", "ef"));
    }

    #[test]
    fn test_pattern_need_not_be_consumed() {
        // text runs out after "tea" with no mismatches; the rest of the pattern is ignored
        assert!(matches("Tea", "teapot"));
    }

    #[test]
    fn test_mismatch_budget_is_enforced() {
        // t, o match; 'i' and 'l' are two mismatches against a budget of one
        assert!(!matches("Toilet Paper", "tot"));
        assert!(matches("Toast", "tost"));
    }

    #[test]
    fn test_non_ascii_counts_chars() {
        assert!(matches("Nescafé", "NESCAFÉ"));
        assert!(matches("Tresemmé", "tresemé"));
    }
}
