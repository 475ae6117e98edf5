use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

/// The learner's assembled sentence so far, one span per placed tile.
/// `selected` marks the slot the removal cursor sits on.
pub struct SlotRow<'a> {
    attempt: &'a [String],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> SlotRow<'a> {
    pub fn new(attempt: &'a [String], selected: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            attempt,
            selected,
            theme,
        }
    }
}

impl Widget for SlotRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let line = if self.attempt.is_empty() {
            Line::from(Span::styled(
                "your sentence will appear here…",
                Style::default().fg(colors.text_dim()),
            ))
        } else {
            let mut spans: Vec<Span> = Vec::new();
            for (i, word) in self.attempt.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let style = if self.selected == Some(i) {
                    Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg())
                } else {
                    Style::default().fg(colors.tile_fg()).bg(colors.tile_bg())
                };
                spans.push(Span::styled(format!(" {word} "), style));
            }
            Line::from(spans)
        };

        let border = if self.selected.is_some() {
            colors.border_focused()
        } else {
            colors.border()
        };

        let block = Block::bordered()
            .title(" Your sentence ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
