use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Popup list of concept labels ("All" first) with per-concept exercise
/// counts. Selection state lives in the widget.
pub struct ConceptPicker<'a> {
    pub entries: Vec<(String, usize)>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> ConceptPicker<'a> {
    pub fn new(entries: Vec<(String, usize)>, theme: &'a Theme) -> Self {
        Self {
            entries,
            selected: 0,
            theme,
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.entries.len();
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.entries.len() - 1;
        }
    }

    pub fn select_label(&mut self, label: &str) {
        if let Some(idx) = self.entries.iter().position(|(l, _)| l == label) {
            self.selected = idx;
        }
    }

    pub fn selected_label(&self) -> &str {
        &self.entries[self.selected].0
    }
}

impl Widget for &ConceptPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);

        let block = Block::bordered()
            .title(" Concepts ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, (label, count)) in self.entries.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let text = format!(" {indicator} {label} ({count})");
            let style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });
            lines.push(Line::from(Span::styled(text, style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
