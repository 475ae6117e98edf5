use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::catalog::ExerciseRecord;
use crate::ui::theme::Theme;

/// Revealed answer: canonical sentence, alternate accepted orderings, and
/// (optionally) the grammar note.
pub struct AnswerPanel<'a> {
    exercise: &'a ExerciseRecord,
    show_explanation: bool,
    theme: &'a Theme,
}

impl<'a> AnswerPanel<'a> {
    pub fn new(exercise: &'a ExerciseRecord, show_explanation: bool, theme: &'a Theme) -> Self {
        Self {
            exercise,
            show_explanation,
            theme,
        }
    }
}

impl Widget for AnswerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut lines = vec![Line::from(Span::styled(
            self.exercise.target_text.as_str(),
            Style::default()
                .fg(colors.answer_fg())
                .add_modifier(Modifier::BOLD),
        ))];

        for alternate in self.exercise.solutions.iter().skip(1) {
            lines.push(Line::from(Span::styled(
                format!("also accepted: {}", alternate.join(" ")),
                Style::default().fg(colors.text_dim()),
            )));
        }

        if self.show_explanation && !self.exercise.explanation.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.exercise.explanation.as_str(),
                Style::default().fg(colors.fg()),
            )));
        }

        let block = Block::bordered()
            .title(" Answer ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
