use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::catalog::ExerciseRecord;
use crate::ui::theme::Theme;

pub struct PromptPanel<'a> {
    exercise: &'a ExerciseRecord,
    theme: &'a Theme,
}

impl<'a> PromptPanel<'a> {
    pub fn new(exercise: &'a ExerciseRecord, theme: &'a Theme) -> Self {
        Self { exercise, theme }
    }
}

impl Widget for PromptPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let lines = vec![
            Line::from(Span::styled(
                self.exercise.english_prompt.as_str(),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Assemble the Tamil sentence from the tiles below.",
                Style::default().fg(colors.text_dim()),
            )),
        ];

        let block = Block::bordered()
            .title(" English ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
