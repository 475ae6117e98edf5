use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

/// The fixed word palette for the current exercise, in display order.
/// Tiles are never consumed; the first nine carry numeric shortcuts.
pub struct TilePalette<'a> {
    tiles: Vec<&'a str>,
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> TilePalette<'a> {
    pub fn new(tiles: Vec<&'a str>, selected: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            tiles,
            selected,
            theme,
        }
    }
}

impl Widget for TilePalette<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans: Vec<Span> = Vec::new();
        for (i, word) in self.tiles.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let (tile_style, shortcut_style) = if self.selected == Some(i) {
                let style = Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg());
                (style, style)
            } else {
                (
                    Style::default().fg(colors.tile_fg()).bg(colors.tile_bg()),
                    Style::default().fg(colors.accent()).bg(colors.tile_bg()),
                )
            };
            if i < 9 {
                spans.push(Span::styled(format!(" {} ", i + 1), shortcut_style));
            } else {
                spans.push(Span::styled(" ", tile_style));
            }
            spans.push(Span::styled(format!("{word} "), tile_style));
        }

        let border = if self.selected.is_some() {
            colors.border_focused()
        } else {
            colors.border()
        };

        let block = Block::bordered()
            .title(" Tiles ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
