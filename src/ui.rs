use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let magenta_style = Style::default().fg(Color::Magenta);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(3), // generator input
                    Constraint::Length(3), // derived password
                    Constraint::Length(2), // sample status
                    Constraint::Min(1),    // hints
                ]
                .as_ref(),
            )
            .split(area);

        // Keep the tail of a long input visible inside the box
        let inner_width = chunks[0].width.saturating_sub(2) as usize;
        let typed = self.generator_value();
        let mut visible = typed;
        while visible.width() + 1 > inner_width && !visible.is_empty() {
            let mut chars = visible.chars();
            chars.next();
            visible = chars.as_str();
        }

        let generator = Paragraph::new(Line::from(vec![
            Span::styled(visible.to_string(), bold_style),
            Span::styled("█", dim_style),
        ]))
        .block(Block::default().borders(Borders::ALL).title("generator"));
        generator.render(chunks[0], buf);

        let password_line = if self.password_value().is_empty() {
            Line::from(Span::styled("—", dim_style))
        } else {
            Line::from(Span::styled(
                self.password_value().to_string(),
                green_bold_style,
            ))
        };
        let password =
            Paragraph::new(password_line).block(Block::default().borders(Borders::ALL).title("password"));
        password.render(chunks[1], buf);

        let needed = self.settings.password_length();
        let samples = self.sample_count();
        let mut status = format!("timing samples: {samples}/{needed}");
        if self.generator_value().chars().count() < self.settings.min_input_length() {
            status.push_str(&format!(
                " / keep typing (min input {} chars)",
                self.settings.min_input_length()
            ));
        }
        if let Some(at) = self.last_derived {
            status.push_str(&format!(" / derived at {}", at.format("%H:%M:%S")));
        }
        Paragraph::new(Span::styled(status, magenta_style))
            .alignment(Alignment::Left)
            .render(chunks[2], buf);

        let hints = Paragraph::new(Span::styled(
            "type to feed keystroke timing / clear the field to start over / (esc) quit",
            italic_style,
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        hints.render(chunks[3], buf);
    }
}
