//! Fuzzy string comparison: edit distance and similarity scoring.
//!
//! The two metrics are deliberately different. [`levenshtein`] counts edit
//! operations; [`similarity_percentage`] is the recursive
//! longest-common-substring measure, whose outputs callers may depend on
//! value-for-value. Do not substitute one for the other.

/// Classic Levenshtein distance over code points: minimum number of
/// single-character inserts, deletes, and substitutions, each costing 1.
/// Symmetric, and zero exactly when the inputs are equal.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Find the first-occurring longest common substring of `a` and `b`.
/// Returns its start in each slice and its length.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let (mut pos_a, mut pos_b, mut max) = (0, 0, 0);
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut k = 0;
            while i + k < a.len() && j + k < b.len() && a[i + k] == b[j + k] {
                k += 1;
            }
            // Strict comparison keeps the first occurrence on ties.
            if k > max {
                pos_a = i;
                pos_b = j;
                max = k;
            }
        }
    }
    (pos_a, pos_b, max)
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (pos_a, pos_b, max) = longest_common_run(a, b);
    if max == 0 {
        return 0;
    }
    max + matched_chars(&a[..pos_a], &b[..pos_b])
        + matched_chars(&a[pos_a + max..], &b[pos_b + max..])
}

/// Number of matching characters between `a` and `b` under the recursive
/// longest-common-substring algorithm: take the longest common substring,
/// recurse on the remainders to its left and right, sum the lengths.
pub fn similar_text(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    matched_chars(&a, &b)
}

/// [`similar_text`] as a percentage of the combined input length:
/// `2 * matched / (len a + len b) * 100`, rounded to one decimal place.
/// Two empty strings compare at 0, matching the reference behavior.
pub fn similarity_percentage(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a + len_b == 0 {
        return 0.0;
    }
    let matched = similar_text(a, b);
    let percent = matched as f64 * 200.0 / (len_a + len_b) as f64;
    (percent * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_reference_vector() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn levenshtein_identity_and_symmetry() {
        assert_eq!(levenshtein("abcdef", "abcdef"), 0);
        assert_eq!(
            levenshtein("flaw", "lawn"),
            levenshtein("lawn", "flaw")
        );
    }

    #[test]
    fn levenshtein_against_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn similar_text_reference_vectors() {
        // Known similar_text outputs.
        assert_eq!(similar_text("World", "Word"), 4);
        assert_eq!(similar_text("Hello", "World"), 1);
        assert_eq!(similar_text("fare", "far"), 3);
        assert_eq!(similar_text("abc", "xyz"), 0);
    }

    #[test]
    fn percentage_identity_and_symmetry() {
        assert_eq!(similarity_percentage("abc", "abc"), 100.0);
        assert_eq!(
            similarity_percentage("Hello", "World"),
            similarity_percentage("World", "Hello")
        );
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        // 4 matched of 9 chars total: 800/9 = 88.88.. -> 88.9
        assert_eq!(similarity_percentage("World", "Word"), 88.9);
    }

    #[test]
    fn percentage_of_two_empties_is_zero() {
        assert_eq!(similarity_percentage("", ""), 0.0);
    }
}
