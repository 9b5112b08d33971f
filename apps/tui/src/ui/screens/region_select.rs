use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::popup::render_help_popup;

pub fn render_region_select(app: &App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    if app.show_help {
        render_help_popup(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Title area
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    render_title(f, chunks[0]);
    render_input(app, f, chunks[1]);
    render_status(app, f, chunks[2]);
    render_hint(f, chunks[3]);
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Study Center Timetable ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let intro = Paragraph::new(Text::from(vec![
        TextLine::from(""),
        TextLine::from("Pick a region to browse its study centers' opening hours."),
        TextLine::from("The timetable shows one bar per center on a 24-hour scale."),
    ]))
    .block(title_block)
    .alignment(Alignment::Center);

    f.render_widget(intro, area);
}

fn render_input(app: &App, f: &mut Frame<'_>, area: Rect) {
    let input_block = Block::default()
        .title(" Region ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let cursor = if (app.animation_counter * 2.0).sin() > 0.0 {
        "█"
    } else {
        " "
    };

    let input_line = TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::styled(
            app.region_input.clone(),
            Style::default().fg(Color::White),
        ),
        Span::styled(cursor, Style::default().fg(Color::Green)),
    ]);

    let paragraph = Paragraph::new(Text::from(vec![
        TextLine::from(Span::styled(
            "Enter region name:",
            Style::default().fg(Color::Green),
        )),
        input_line,
    ]))
    .block(input_block);

    f.render_widget(paragraph, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let paragraph = Paragraph::new(app.status_message.clone()).block(status_block);
    f.render_widget(paragraph, area);
}

fn render_hint(f: &mut Frame<'_>, area: Rect) {
    let hint = TextLine::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Confirm   "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Back / Quit   "),
        Span::styled(
            "F1",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Help"),
    ]);

    let paragraph = Paragraph::new(hint).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
