use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::catalog::ExerciseCatalog;
use crate::config::Config;
use crate::engine::filter::ConceptFilter;
use crate::session::drill::DrillSession;
use crate::ui::components::concept_picker::ConceptPicker;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Drill,
    ConceptPicker,
}

/// Which row the cursor keys act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusArea {
    Palette,
    Slots,
}

pub struct App {
    pub screen: AppScreen,
    pub session: DrillSession,
    pub config: Config,
    pub theme: &'static Theme,
    pub picker: ConceptPicker<'static>,
    pub focus: FocusArea,
    pub palette_selected: usize,
    pub slot_selected: usize,
    pub should_quit: bool,
    // Display order of the current exercise's tiles (indices into `tiles`).
    // Shuffling touches presentation only; grading never sees it.
    palette_order: Vec<usize>,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, catalog: ExerciseCatalog) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let mut session = DrillSession::new(Arc::new(catalog));

        let (entries, start_filter) = {
            let catalog = session.catalog();
            let mut entries = vec![(crate::catalog::ALL_LABEL.to_string(), catalog.len())];
            for concept in catalog.concepts() {
                let count = catalog.count_for_concept(&concept);
                entries.push((concept, count));
            }
            let start_filter = catalog
                .concepts()
                .iter()
                .find(|c| c.eq_ignore_ascii_case(&config.start_concept))
                .map(|c| ConceptFilter::Concept(c.clone()));
            (entries, start_filter)
        };
        let picker = ConceptPicker::new(entries, theme);

        if let Some(filter) = start_filter {
            session.set_concept_filter(filter);
        }

        let mut app = Self {
            screen: AppScreen::Drill,
            session,
            config,
            theme,
            picker,
            focus: FocusArea::Palette,
            palette_selected: 0,
            slot_selected: 0,
            should_quit: false,
            palette_order: Vec::new(),
            rng: SmallRng::from_entropy(),
        };
        app.refresh_palette();
        app
    }

    /// The current exercise's tiles in display order.
    pub fn display_tiles(&self) -> Vec<&str> {
        match self.session.current_exercise() {
            Some(exercise) => self
                .palette_order
                .iter()
                .filter_map(|&i| exercise.tiles.get(i))
                .map(|s| s.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Rebuild the palette display order for the current exercise and put the
    /// cursor back at the start. Called on every exercise change.
    fn refresh_palette(&mut self) {
        let tile_count = self
            .session
            .current_exercise()
            .map(|ex| ex.tiles.len())
            .unwrap_or(0);
        self.palette_order = (0..tile_count).collect();
        if self.config.shuffle_tiles {
            self.palette_order.shuffle(&mut self.rng);
        }
        self.palette_selected = 0;
        self.slot_selected = 0;
        self.focus = FocusArea::Palette;
    }

    pub fn select_tile_at_cursor(&mut self) {
        let word = self
            .display_tiles()
            .get(self.palette_selected)
            .map(|w| w.to_string());
        if let Some(word) = word {
            self.session.select_tile(&word);
        }
    }

    /// Numeric shortcut: place the nth visible tile (1-based).
    pub fn select_tile_number(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let word = self.display_tiles().get(n - 1).map(|w| w.to_string());
        if let Some(word) = word {
            self.session.select_tile(&word);
        }
    }

    pub fn remove_slot_at_cursor(&mut self) {
        self.session.remove_slot(self.slot_selected);
        let len = self.session.attempt().len();
        if len == 0 {
            self.slot_selected = 0;
            self.focus = FocusArea::Palette;
        } else if self.slot_selected >= len {
            self.slot_selected = len - 1;
        }
    }

    /// Backspace: drop the most recently placed tile.
    pub fn remove_last_slot(&mut self) {
        let len = self.session.attempt().len();
        if len == 0 {
            return;
        }
        self.session.remove_slot(len - 1);
        let remaining = self.session.attempt().len();
        if remaining == 0 {
            self.slot_selected = 0;
            self.focus = FocusArea::Palette;
        } else if self.slot_selected >= remaining {
            self.slot_selected = remaining - 1;
        }
    }

    pub fn clear_attempt(&mut self) {
        self.session.clear();
        self.slot_selected = 0;
        self.focus = FocusArea::Palette;
    }

    pub fn check_answer(&mut self) {
        self.session.check();
    }

    pub fn next_exercise(&mut self) {
        self.session.next();
        self.refresh_palette();
    }

    pub fn prev_exercise(&mut self) {
        self.session.prev();
        self.refresh_palette();
    }

    pub fn toggle_answer(&mut self) {
        self.session.toggle_answer();
    }

    pub fn toggle_shuffle(&mut self) {
        self.config.shuffle_tiles = !self.config.shuffle_tiles;
        self.refresh_palette();
    }

    pub fn toggle_explanation(&mut self) {
        self.config.show_explanation = !self.config.show_explanation;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            // Slots can only take focus while there is something to remove.
            FocusArea::Palette if !self.session.attempt().is_empty() => {
                self.slot_selected = self.slot_selected.min(self.session.attempt().len() - 1);
                FocusArea::Slots
            }
            _ => FocusArea::Palette,
        };
    }

    pub fn cursor_left(&mut self) {
        match self.focus {
            FocusArea::Palette => {
                let len = self.display_tiles().len();
                if len > 0 {
                    self.palette_selected = (self.palette_selected + len - 1) % len;
                }
            }
            FocusArea::Slots => {
                let len = self.session.attempt().len();
                if len > 0 {
                    self.slot_selected = (self.slot_selected + len - 1) % len;
                }
            }
        }
    }

    pub fn cursor_right(&mut self) {
        match self.focus {
            FocusArea::Palette => {
                let len = self.display_tiles().len();
                if len > 0 {
                    self.palette_selected = (self.palette_selected + 1) % len;
                }
            }
            FocusArea::Slots => {
                let len = self.session.attempt().len();
                if len > 0 {
                    self.slot_selected = (self.slot_selected + 1) % len;
                }
            }
        }
    }

    pub fn open_concept_picker(&mut self) {
        self.picker.select_label(self.session.concept_filter().label());
        self.screen = AppScreen::ConceptPicker;
    }

    pub fn close_concept_picker(&mut self) {
        self.screen = AppScreen::Drill;
    }

    pub fn apply_concept_picker(&mut self) {
        let label = self.picker.selected_label().to_string();
        self.session.set_concept_filter(ConceptFilter::from_label(&label));
        self.refresh_palette();
        self.screen = AppScreen::Drill;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record;

    fn app_with(config: Config) -> App {
        let catalog = ExerciseCatalog::from_records(vec![
            record("a-1", "Alpha", &["A", "B", "C"], &[&["A", "B", "C"]]),
            record("b-1", "Beta", &["x", "y"], &[&["x", "y"]]),
        ])
        .unwrap();
        App::new(config, catalog)
    }

    #[test]
    fn test_shuffle_preserves_tile_membership() {
        let mut config = Config::default();
        config.shuffle_tiles = true;
        let app = app_with(config);

        // Shuffle reorders the palette, it never adds or drops tiles.
        let mut display = app.display_tiles();
        display.sort_unstable();
        assert_eq!(display, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unshuffled_palette_keeps_authoring_order() {
        let app = app_with(Config::default());
        assert_eq!(app.display_tiles(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_numeric_shortcut_places_tile() {
        let mut app = app_with(Config::default());
        app.select_tile_number(2);
        assert_eq!(app.session.attempt(), ["B"]);
        // Out-of-range shortcuts do nothing.
        app.select_tile_number(9);
        app.select_tile_number(0);
        assert_eq!(app.session.attempt(), ["B"]);
    }

    #[test]
    fn test_focus_requires_filled_slots() {
        let mut app = app_with(Config::default());
        app.toggle_focus();
        assert_eq!(app.focus, FocusArea::Palette);
        app.select_tile_at_cursor();
        app.toggle_focus();
        assert_eq!(app.focus, FocusArea::Slots);
        app.toggle_focus();
        assert_eq!(app.focus, FocusArea::Palette);
    }

    #[test]
    fn test_remove_at_cursor_clamps_and_releases_focus() {
        let mut app = app_with(Config::default());
        app.select_tile_number(1);
        app.select_tile_number(2);
        app.toggle_focus();
        app.cursor_right();
        assert_eq!(app.slot_selected, 1);
        app.remove_slot_at_cursor();
        assert_eq!(app.session.attempt(), ["A"]);
        assert_eq!(app.slot_selected, 0);
        app.remove_slot_at_cursor();
        assert!(app.session.attempt().is_empty());
        assert_eq!(app.focus, FocusArea::Palette);
    }

    #[test]
    fn test_start_concept_applies_filter() {
        let mut config = Config::default();
        config.start_concept = "beta".to_string();
        let app = app_with(config);
        assert_eq!(app.session.concept_filter().label(), "Beta");
        assert_eq!(app.session.exercise_count(), 1);
    }

    #[test]
    fn test_picker_round_trip_changes_filter() {
        let mut app = app_with(Config::default());
        app.open_concept_picker();
        assert_eq!(app.screen, AppScreen::ConceptPicker);
        app.picker.select_label("Beta");
        app.apply_concept_picker();
        assert_eq!(app.screen, AppScreen::Drill);
        assert_eq!(app.session.concept_filter().label(), "Beta");
        assert_eq!(app.display_tiles(), vec!["x", "y"]);
    }

    #[test]
    fn test_exercise_change_resets_palette_cursor() {
        let mut app = app_with(Config::default());
        app.cursor_right();
        assert_eq!(app.palette_selected, 1);
        app.next_exercise();
        assert_eq!(app.palette_selected, 0);
        assert_eq!(app.display_tiles(), vec!["x", "y"]);
    }
}
