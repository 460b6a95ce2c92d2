use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::content;
use crate::dates;
use crate::tui::app::App;
use crate::tui::views::{render_footer, render_view_tabs};

pub fn render_coverage_view(frame: &mut Frame, app: &App) {
    let title = format!("{}: Coverage Summary", content::BUSINESS_NAME);

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    render_view_tabs(frame, chunks[0], app);
    render_policies(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_policies(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    for group in content::POLICY_GROUPS {
        let (effective, expires) = dates::term_dates(app.today, group.term);
        let number = dates::policy_number(group.number_prefix, effective, group.number_suffix);
        let selected = group.id == app.policy;

        let title_style = if selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White).bold()
        };

        let mut header = vec![Span::styled(
            format!("{} \u{2014} {} \u{00b7} {}", group.kind, group.carrier, number),
            title_style,
        )];
        if dates::is_expiring_soon(app.today, expires) {
            header.push(Span::raw("  "));
            header.push(Span::styled(
                format!("renews in {} days", dates::days_until(app.today, expires)),
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(header));

        lines.push(Line::from(Span::styled(
            format!(
                "  Effective {} \u{00b7} Expires {}",
                dates::format_policy_date(effective),
                dates::format_policy_date(expires)
            ),
            Style::default().fg(Color::DarkGray),
        )));

        for coverage in group.coverages {
            lines.push(Line::from(Span::styled(
                format!(
                    "  {:<28} {:>16} {:>16}",
                    coverage.name, coverage.limit, coverage.deductible
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Sources",
        Style::default().fg(Color::White).bold(),
    )));
    // The lease is the one evergreen source: its expiry tracks today.
    let lease_expires = dates::format_month_year(app.today + chrono::Months::new(4));

    for source in content::CONTEXT_SOURCES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<18}", source.label),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("via {}", source.integration),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let details = if source.label == "Lease" {
            format!("    {} \u{00b7} Expires {}", source.details, lease_expires)
        } else {
            format!("    {}", source.details)
        };
        lines.push(Line::from(Span::styled(
            details,
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(
            "Questions? Text Claire at {} or email {}",
            content::CTA_PHONE,
            content::CTA_EMAIL
        ),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
