use crate::catalog::ExerciseRecord;

/// Exact, order-sensitive grading. An attempt is correct iff it equals one of
/// the accepted orderings token-for-token, in order and in length.
///
/// Tokens are compared verbatim. Word order is the grammatical feature under
/// test, so a correct multiset in the wrong order is still wrong.
pub fn is_correct_answer(exercise: &ExerciseRecord, attempt: &[String]) -> bool {
    exercise
        .solutions
        .iter()
        .any(|solution| solution.as_slice() == attempt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record;

    fn attempt(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_match_is_correct() {
        let ex = record("e-1", "C", &["a", "b", "c"], &[&["a", "b", "c"]]);
        assert!(is_correct_answer(&ex, &attempt(&["a", "b", "c"])));
    }

    #[test]
    fn test_any_other_permutation_is_incorrect() {
        let ex = record("e-1", "C", &["a", "b", "c"], &[&["a", "b", "c"]]);
        assert!(!is_correct_answer(&ex, &attempt(&["a", "c", "b"])));
        assert!(!is_correct_answer(&ex, &attempt(&["b", "a", "c"])));
        assert!(!is_correct_answer(&ex, &attempt(&["b", "c", "a"])));
        assert!(!is_correct_answer(&ex, &attempt(&["c", "a", "b"])));
        assert!(!is_correct_answer(&ex, &attempt(&["c", "b", "a"])));
    }

    #[test]
    fn test_length_mismatch_is_incorrect() {
        let ex = record("e-1", "C", &["a", "b"], &[&["a", "b"]]);
        assert!(!is_correct_answer(&ex, &attempt(&["a"])));
        assert!(!is_correct_answer(&ex, &attempt(&["a", "b", "a"])));
        assert!(!is_correct_answer(&ex, &[]));
    }

    #[test]
    fn test_multiple_solutions_all_accepted() {
        let ex = record(
            "e-1",
            "C",
            &["s", "io", "do", "v"],
            &[&["s", "io", "do", "v"], &["s", "do", "io", "v"]],
        );
        assert!(is_correct_answer(&ex, &attempt(&["s", "io", "do", "v"])));
        assert!(is_correct_answer(&ex, &attempt(&["s", "do", "io", "v"])));
        // Verb fronted: same tokens, unlisted order.
        assert!(!is_correct_answer(&ex, &attempt(&["v", "s", "io", "do"])));
    }

    #[test]
    fn test_no_trimming_or_case_folding() {
        let ex = record("e-1", "C", &["Nan", "amma"], &[&["Nan", "amma"]]);
        assert!(!is_correct_answer(&ex, &attempt(&["nan", "amma"])));
        assert!(!is_correct_answer(&ex, &attempt(&["Nan ", "amma"])));
    }
}
