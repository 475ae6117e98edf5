use std::sync::Arc;

use crate::catalog::{ExerciseCatalog, ExerciseRecord};
use crate::engine::filter::{ConceptFilter, filtered_indices};
use crate::engine::grade::is_correct_answer;

/// Grading outcome shown to the learner. `None` until a check has run, and
/// again after any change to the attempt, position, or filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
}

/// One learner's interaction state. The visible session is fully captured by
/// (filter, filtered, position, attempt, feedback, answer_revealed); every
/// transition goes through a method here so the resets stay consistent.
///
/// The catalog is shared read-only; the session never mutates it and nothing
/// is persisted — a session dies with the interaction that created it.
pub struct DrillSession {
    catalog: Arc<ExerciseCatalog>,
    filter: ConceptFilter,
    filtered: Vec<usize>,
    position: usize,
    attempt: Vec<String>,
    feedback: Feedback,
    answer_revealed: bool,
}

impl DrillSession {
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        let filter = ConceptFilter::All;
        let filtered = filtered_indices(&catalog, &filter);
        Self {
            catalog,
            filter,
            filtered,
            position: 0,
            attempt: Vec::new(),
            feedback: Feedback::None,
            answer_revealed: false,
        }
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    pub fn concept_filter(&self) -> &ConceptFilter {
        &self.filter
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of exercises passing the current filter.
    pub fn exercise_count(&self) -> usize {
        self.filtered.len()
    }

    /// The exercise under the cursor, or None when the filter matches nothing.
    pub fn current_exercise(&self) -> Option<&ExerciseRecord> {
        self.filtered
            .get(self.position)
            .and_then(|&idx| self.catalog.get(idx))
    }

    pub fn attempt(&self) -> &[String] {
        &self.attempt
    }

    /// Attempt joined for display.
    pub fn attempt_text(&self) -> String {
        self.attempt.join(" ")
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Append a tile to the attempt. Tiles are a fixed palette: the same word
    /// may be picked any number of times, it is never consumed.
    pub fn select_tile(&mut self, word: &str) {
        self.attempt.push(word.to_string());
        self.feedback = Feedback::None;
        self.answer_revealed = false;
    }

    /// Remove the slot at `index`. Out of range is a no-op.
    pub fn remove_slot(&mut self, index: usize) {
        if index >= self.attempt.len() {
            return;
        }
        self.attempt.remove(index);
        self.feedback = Feedback::None;
        self.answer_revealed = false;
    }

    pub fn clear(&mut self) {
        self.attempt.clear();
        self.feedback = Feedback::None;
        self.answer_revealed = false;
    }

    /// Grade the attempt against the current exercise. An empty attempt is a
    /// no-op, as is checking with no current exercise. Leaves the attempt and
    /// the answer-revealed flag untouched.
    pub fn check(&mut self) {
        if self.attempt.is_empty() {
            return;
        }
        if let Some(exercise) = self.current_exercise() {
            self.feedback = if is_correct_answer(exercise, &self.attempt) {
                Feedback::Correct
            } else {
                Feedback::Incorrect
            };
        }
    }

    /// Advance to the next exercise, wrapping past the end.
    pub fn next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.filtered.len();
        self.reset_interaction();
    }

    /// Retreat to the previous exercise, wrapping before the start.
    pub fn prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.position = (self.position + self.filtered.len() - 1) % self.filtered.len();
        self.reset_interaction();
    }

    /// Switch concept filter, recompute the filtered list, and start over at
    /// the first matching exercise.
    pub fn set_concept_filter(&mut self, filter: ConceptFilter) {
        self.filtered = filtered_indices(&self.catalog, &filter);
        self.filter = filter;
        self.position = 0;
        self.reset_interaction();
    }

    /// Flip answer visibility. The only state-changing action that leaves the
    /// attempt and feedback alone.
    pub fn toggle_answer(&mut self) {
        self.answer_revealed = !self.answer_revealed;
    }

    fn reset_interaction(&mut self) {
        self.attempt.clear();
        self.feedback = Feedback::None;
        self.answer_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record;

    fn session() -> DrillSession {
        let catalog = ExerciseCatalog::from_records(vec![
            record("a-1", "Alpha", &["A", "B"], &[&["A", "B"]]),
            record("b-1", "Beta", &["x", "y"], &[&["x", "y"]]),
            record("a-2", "Alpha", &["p", "q"], &[&["p", "q"]]),
        ])
        .unwrap();
        DrillSession::new(Arc::new(catalog))
    }

    #[test]
    fn test_fresh_session_state() {
        let session = session();
        assert_eq!(*session.concept_filter(), ConceptFilter::All);
        assert_eq!(session.position(), 0);
        assert_eq!(session.exercise_count(), 3);
        assert!(session.attempt().is_empty());
        assert_eq!(session.feedback(), Feedback::None);
        assert!(!session.answer_revealed());
        assert_eq!(session.current_exercise().unwrap().id, "a-1");
    }

    #[test]
    fn test_select_tile_appends_and_allows_reuse() {
        let mut session = session();
        session.select_tile("A");
        session.select_tile("A");
        session.select_tile("B");
        // The palette is never consumed; duplicates are allowed.
        assert_eq!(session.attempt(), ["A", "A", "B"]);
        assert_eq!(session.attempt_text(), "A A B");
    }

    #[test]
    fn test_select_tile_clears_feedback_and_answer() {
        let mut session = session();
        session.select_tile("A");
        session.select_tile("B");
        session.check();
        session.toggle_answer();
        assert_eq!(session.feedback(), Feedback::Correct);
        session.select_tile("A");
        assert_eq!(session.feedback(), Feedback::None);
        assert!(!session.answer_revealed());
    }

    #[test]
    fn test_remove_slot_at_index() {
        let mut session = session();
        session.select_tile("A");
        session.select_tile("B");
        session.select_tile("A");
        session.remove_slot(1);
        assert_eq!(session.attempt(), ["A", "A"]);
        session.remove_slot(0);
        assert_eq!(session.attempt(), ["A"]);
    }

    #[test]
    fn test_remove_slot_out_of_range_is_noop() {
        let mut session = session();
        session.select_tile("A");
        session.select_tile("B");
        session.check();
        session.remove_slot(5);
        assert_eq!(session.attempt(), ["A", "B"]);
        // Nothing removed, nothing reset.
        assert_eq!(session.feedback(), Feedback::Correct);
    }

    #[test]
    fn test_check_empty_attempt_is_noop() {
        let mut session = session();
        session.select_tile("B");
        session.check();
        assert_eq!(session.feedback(), Feedback::Incorrect);
        session.clear();
        assert_eq!(session.feedback(), Feedback::None);
        session.check();
        assert_eq!(session.feedback(), Feedback::None);
    }

    #[test]
    fn test_check_wrong_then_right() {
        let mut session = session();
        session.select_tile("B");
        session.select_tile("A");
        session.check();
        assert_eq!(session.feedback(), Feedback::Incorrect);
        session.clear();
        session.select_tile("A");
        session.select_tile("B");
        session.check();
        assert_eq!(session.feedback(), Feedback::Correct);
    }

    #[test]
    fn test_check_leaves_attempt_and_answer_alone() {
        let mut session = session();
        session.toggle_answer();
        session.select_tile("A");
        session.select_tile("B");
        session.toggle_answer();
        session.check();
        assert_eq!(session.attempt(), ["A", "B"]);
        assert!(session.answer_revealed());
    }

    #[test]
    fn test_navigation_wraps_both_directions() {
        let mut session = session();
        session.next();
        session.next();
        assert_eq!(session.position(), 2);
        session.next();
        assert_eq!(session.position(), 0);
        session.prev();
        assert_eq!(session.position(), 2);
    }

    #[test]
    fn test_navigation_on_single_exercise_stays_put() {
        let catalog =
            ExerciseCatalog::from_records(vec![record("a-1", "Alpha", &["A"], &[&["A"]])]).unwrap();
        let mut session = DrillSession::new(Arc::new(catalog));
        session.next();
        assert_eq!(session.position(), 0);
        session.prev();
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_navigation_resets_interaction() {
        let mut session = session();
        session.select_tile("A");
        session.check();
        session.toggle_answer();
        session.next();
        assert!(session.attempt().is_empty());
        assert_eq!(session.feedback(), Feedback::None);
        assert!(!session.answer_revealed());
    }

    #[test]
    fn test_filter_narrows_and_resets() {
        let mut session = session();
        session.next();
        session.select_tile("x");
        session.set_concept_filter(ConceptFilter::Concept("Alpha".to_string()));
        assert_eq!(session.exercise_count(), 2);
        assert_eq!(session.position(), 0);
        assert!(session.attempt().is_empty());
        assert_eq!(session.feedback(), Feedback::None);
        assert_eq!(session.current_exercise().unwrap().id, "a-1");
        session.next();
        assert_eq!(session.current_exercise().unwrap().id, "a-2");
    }

    #[test]
    fn test_filter_back_to_all_restores_catalog_order() {
        let mut session = session();
        session.set_concept_filter(ConceptFilter::Concept("Beta".to_string()));
        assert_eq!(session.exercise_count(), 1);
        session.set_concept_filter(ConceptFilter::All);
        assert_eq!(session.exercise_count(), 3);
        assert_eq!(session.current_exercise().unwrap().id, "a-1");
    }

    #[test]
    fn test_empty_filter_has_no_current_exercise() {
        let mut session = session();
        session.set_concept_filter(ConceptFilter::Concept("Gamma".to_string()));
        assert_eq!(session.exercise_count(), 0);
        assert!(session.current_exercise().is_none());
        // Every operation stays a no-op rather than panicking.
        session.next();
        session.prev();
        session.select_tile("A");
        session.check();
        assert_eq!(session.feedback(), Feedback::None);
    }

    #[test]
    fn test_toggle_answer_flips() {
        let mut session = session();
        session.toggle_answer();
        assert!(session.answer_revealed());
        session.toggle_answer();
        assert!(!session.answer_revealed());
    }
}
