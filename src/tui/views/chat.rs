use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::content;
use crate::script::Message;
use crate::tui::app::App;
use crate::tui::views::{render_footer, render_view_tabs};

const TYPING_FRAMES: &[&str] = &["\u{00b7}", "\u{00b7}\u{00b7}", "\u{00b7}\u{00b7}\u{00b7}"];

pub fn render_chat_view(frame: &mut Frame, app: &App) {
    let group = content::policy_group(app.policy);
    let title = format!("{}: Ask Claire ({})", content::BUSINESS_NAME, group.kind);

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    // Layout: tabs (top) | messages | key hints (bottom)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    render_view_tabs(frame, chunks[0], app);
    render_messages(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_messages(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    // Bubbles take at most ~70% of the width, like the phone mockup does.
    let bubble_width = (width * 7 / 10).max(20);

    let mut lines: Vec<Line> = vec![];

    for message in app.player.messages() {
        let (body_style, align) = match message {
            Message::Incoming { .. } => (Style::default().fg(Color::White), Alignment::Left),
            Message::Outgoing { .. } => (Style::default().fg(Color::Cyan), Alignment::Right),
        };

        if message.is_typing() {
            let dots = TYPING_FRAMES[(app.anim_tick / 4) as usize % TYPING_FRAMES.len()];
            lines.push(
                Line::from(Span::styled(dots.to_string(), Style::default().fg(Color::DarkGray)))
                    .alignment(align),
            );
        } else {
            for wrapped in wrap_text(message.text(), bubble_width) {
                lines.push(Line::from(Span::styled(wrapped, body_style)).alignment(align));
            }
        }

        if let Some(emoji) = message.reaction() {
            lines.push(
                Line::from(Span::styled(emoji.to_string(), Style::default().fg(Color::Yellow)))
                    .alignment(align),
            );
        }

        // Blank line between bubbles
        lines.push(Line::default());
    }

    // Keep the tail of the conversation visible
    let visible = area.height as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    let mut paragraph = Paragraph::new(lines);
    if app.player.is_fading() {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }

    frame.render_widget(paragraph, area);
}

/// Greedy word wrap. Long words overflow their line rather than being split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::wrap_text;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.iter().all(|l| l.len() <= 15));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn preserves_explicit_newlines() {
        let lines = wrap_text("first\nsecond", 80);
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }
}
