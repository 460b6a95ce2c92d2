pub mod chat;
pub mod coverage;

pub use chat::render_chat_view;
pub use coverage::render_coverage_view;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, DemoView};

/// Render the view tabs (Chat, Coverage)
pub fn render_view_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let tabs = [("Chat", DemoView::Chat), ("Coverage", DemoView::Coverage)];
    let mut spans = vec![];

    for (idx, (tab_name, tab_view)) in tabs.iter().enumerate() {
        if *tab_view == app.current_view {
            // Active tab - highlight it
            spans.push(Span::styled(
                format!(" {} ", tab_name),
                Style::default().bg(Color::Blue).fg(Color::White).bold(),
            ));
        } else {
            // Inactive tab
            spans.push(Span::styled(
                format!(" {} ", tab_name),
                Style::default().fg(Color::Gray),
            ));
        }

        if idx < tabs.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }

    let tab_bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::White));

    frame.render_widget(tab_bar, area);
}

/// Render the key hints plus the current mode/policy/cycle status.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = Span::styled(
        " q quit \u{00b7} Tab view \u{00b7} m mode \u{00b7} p policy ",
        Style::default().fg(Color::DarkGray),
    );
    let status = Span::styled(
        format!(
            " {}/{} \u{00b7} cycle {} ",
            app.mode,
            app.policy,
            app.player.cycle()
        ),
        Style::default().fg(Color::Gray),
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(status.width() as u16)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[1]);
}
