use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::state::LoadState;
use crate::app::App;
use crate::ui::widgets::hours_chart::render_hours_chart;
use crate::ui::widgets::listings::render_listings;
use crate::ui::widgets::popup::render_help_popup;

pub fn render_timetable(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    if app.show_help {
        render_help_popup(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Day title
            Constraint::Min(10),   // Chart and listings
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    render_day_title(app, f, chunks[0]);
    render_content(app, f, chunks[1]);
    render_status(app, f, chunks[2]);
    render_hint(f, chunks[3]);
}

fn render_day_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = TextLine::from(vec![
        Span::styled(
            app.day.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.region.as_deref().unwrap_or("(no region)").to_string(),
            Style::default().fg(Color::White),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .block(title_block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_content(app: &App, f: &mut Frame<'_>, area: Rect) {
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let chart_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(horizontal_split[0]);

    render_hours_chart(app, f, chart_split[0]);
    render_selected_detail(app, f, chart_split[1]);
    render_listings(app, f, horizontal_split[1]);
}

/// Detail line for the selected chart row, the tooltip of the original page.
fn render_selected_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(schedule) = app.selected_schedule() else {
        return;
    };

    let line = TextLine::from(vec![
        Span::styled(
            schedule.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            schedule.open_hours_label(),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = area.inner(Margin::new(1, 1));
    f.render_widget(status_block, area);

    if app.load_state == LoadState::Loading {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Fetching timetable...")
            .style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        f.render_stateful_widget(throbber, inner, &mut app.throbber_state);
        return;
    }

    let style = match app.load_state {
        LoadState::Failed(_) => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Gray),
    };
    let paragraph = Paragraph::new(app.status_message.clone()).style(style);
    f.render_widget(paragraph, inner);
}

fn render_hint(f: &mut Frame<'_>, area: Rect) {
    let hint = TextLine::from(vec![
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Day   "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Location   "),
        Span::styled(
            "l",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Reload   "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Region   "),
        Span::styled(
            "F1",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Help   "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Quit"),
    ]);

    let paragraph = Paragraph::new(hint).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
