//! The profile card drawn over the sky.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use starcard_core::Theme;
use starcard_fonts::{GLYPH_HEIGHT, build_initials_art, initials_art_width};

/// Horizontal padding inside the card border.
const PADDING: u16 = 3;
const MIN_WIDTH: u16 = 36;

/// Everything the card shows for one frame.
#[derive(Debug, Clone)]
pub struct CardView<'a> {
    pub name: &'a str,
    pub initials: &'a str,
    pub title: &'a str,
    pub tagline: &'a str,
    pub url: &'a str,
    pub theme: Theme,
    pub copy_label: &'a str,
    pub copy_disabled: bool,
    /// Whether the name is being edited.
    pub editing: bool,
}

impl CardView<'_> {
    fn body(&self) -> Vec<Line<'static>> {
        let accent = self.theme.accent();
        let text = self.theme.text();
        let muted = self.theme.muted();

        let mut lines: Vec<Line> = build_initials_art(self.initials)
            .into_iter()
            .map(|row| Line::from(row).style(Style::new().fg(accent)))
            .collect();
        if lines.is_empty() {
            lines.extend((0..GLYPH_HEIGHT).map(|_| Line::from("")));
        }
        lines.push(Line::from(""));

        let name_line = if self.editing {
            Line::from(vec![
                Span::styled(self.name.to_string(), Style::new().fg(text).bold()),
                Span::styled("▏", Style::new().fg(accent).add_modifier(Modifier::SLOW_BLINK)),
            ])
        } else {
            Line::from(Span::styled(self.name.to_string(), Style::new().fg(text).bold()))
        };
        lines.push(name_line);
        lines.push(Line::from(self.title.to_string()).style(Style::new().fg(text)));
        lines.push(Line::from(self.tagline.to_string()).style(Style::new().fg(muted).italic()));
        lines.push(Line::from(""));
        lines.push(
            Line::from(self.url.to_string())
                .style(Style::new().fg(accent).add_modifier(Modifier::UNDERLINED)),
        );
        lines.push(Line::from(""));

        let copy_style = if self.copy_disabled {
            Style::new().fg(muted)
        } else {
            Style::new().fg(text)
        };
        lines.push(Line::from(vec![
            "s".bold().fg(accent),
            Span::styled(" Share   ", Style::new().fg(text)),
            "c".bold().fg(accent),
            Span::styled(format!(" {}", self.copy_label), copy_style),
        ]));
        lines
    }

    /// Size of the card including its border.
    fn size(&self, lines: &[Line]) -> (u16, u16) {
        let content = lines
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or(0)
            .max(initials_art_width(self.initials)) as u16;
        let width = (content + 2 * PADDING + 2).max(MIN_WIDTH);
        let height = lines.len() as u16 + 4;
        (width, height)
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.body();
        let (width, height) = self.size(&lines);
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, card, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .areas(row);

        let backdrop = self.theme.backdrop().color();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(self.theme.muted()))
            .style(Style::new().bg(backdrop))
            .padding(ratatui::widgets::Padding::new(PADDING, PADDING, 1, 1));

        Clear.render(card, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(card, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(name: &'a str, initials: &'a str) -> CardView<'a> {
        CardView {
            name,
            initials,
            title: "Systems programmer",
            tagline: "My business card",
            url: "https://example.com",
            theme: Theme::Dark,
            copy_label: "Copy link",
            copy_disabled: false,
            editing: false,
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_card_shows_profile() {
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        view("Ada Lovelace", "AL").render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("https://example.com"));
        assert!(text.contains("Copy link"));
        assert!(text.contains("█████"));
    }

    #[test]
    fn test_card_shows_flash_label() {
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        let mut card = view("Ada Lovelace", "AL");
        card.copy_label = "Copied";
        card.copy_disabled = true;
        card.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Copied"));
        assert!(!text.contains("Copy link"));
    }

    #[test]
    fn test_card_fits_small_area() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        view("Ada Lovelace", "AL").render(area, &mut buf);
    }

    #[test]
    fn test_card_size_tracks_content() {
        let card = view("Ada Lovelace", "AL");
        let lines = card.body();
        let (width, height) = card.size(&lines);
        assert!(width >= MIN_WIDTH);
        assert_eq!(height, lines.len() as u16 + 4);
    }
}
