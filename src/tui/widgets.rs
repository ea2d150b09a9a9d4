use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;

const PER_ROW: usize = 8;
const SWATCH_WIDTH: usize = 9;

/// Renders a brand palette as rows of colored swatches labelled with their
/// hex value. Highlights the currently selected swatch.
pub struct PaletteWidget<'a> {
    colors: &'a [AppColor],
    selected: Option<usize>,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(colors: &'a [AppColor], selected: Option<usize>) -> Self {
        Self { colors, selected }
    }
}

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Black or white, whichever reads better on `c`.
fn contrast_fg(c: AppColor) -> Color {
    if c.prefers_dark_text() {
        Color::Black
    } else {
        Color::White
    }
}

fn build_swatch_row(colors: &[AppColor], start: usize, selected: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (offset, &c) in colors.iter().enumerate() {
        let mut style = Style::default().bg(to_color(c)).fg(contrast_fg(c));
        if selected == Some(start + offset) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("{:^SWATCH_WIDTH$}", c.to_hex()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn build_index_row(start: usize, len: usize, selected: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in start..start + len {
        let style = if selected == Some(i) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{:^SWATCH_WIDTH$}", i + 1), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!("Palette ({})", self.colors.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.colors.is_empty() {
            Paragraph::new("  (empty palette, press a to add a color)")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        for (row, chunk) in self.colors.chunks(PER_ROW).enumerate() {
            let start = row * PER_ROW;
            lines.push(build_swatch_row(chunk, start, self.selected));
            lines.push(build_index_row(start, chunk.len(), self.selected));
            lines.push(Line::from(""));
        }

        if let Some(c) = self.selected.and_then(|i| self.colors.get(i).copied()) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled("    ", Style::default().bg(to_color(c))),
                Span::raw(format!("  {}  rgb({}, {}, {})", c.to_hex(), c.r, c.g, c.b)),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
