use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::state::LoadState;
use crate::app::App;
use crate::domain::{format_hour_padded, RegionSchedule};
use crate::ui::widgets::color::{random_series_color, SeriesColor};

/// One chart series per location. Keeping each location its own series
/// gives it an independent color and its own row label.
#[derive(Debug)]
pub struct ChartRow {
    pub name: String,
    pub points: [(f64, f64); 2],
    pub color: SeriesColor,
}

/// Builds the series for the hours chart, one horizontal segment per
/// location spanning `[start, end]`. Input order is row order, top to
/// bottom. Pure apart from the color sampling.
pub fn build_chart_rows(schedules: &[RegionSchedule]) -> Vec<ChartRow> {
    let total = schedules.len();
    schedules
        .iter()
        .enumerate()
        .map(|(index, schedule)| {
            #[allow(clippy::cast_precision_loss)]
            let y = (total - index) as f64;
            ChartRow {
                name: schedule.name.clone(),
                points: [
                    (f64::from(schedule.start), y),
                    (f64::from(schedule.end), y),
                ],
                color: random_series_color(),
            }
        })
        .collect()
}

/// Tick labels for the fixed 0-24 axis, zero-padded 24-hour clock values.
/// The step widens until the labels fit the available width; hourly ticks
/// whenever the terminal is wide enough.
pub fn hour_axis_labels(width: u16) -> Vec<String> {
    let step = hour_label_step(width);
    (0..=24_u8)
        .step_by(step)
        .map(format_hour_padded)
        .collect()
}

const fn hour_label_step(width: u16) -> usize {
    // Each label is "HH:00" plus a separating space.
    let mut i = 0;
    let steps = [1, 2, 3, 6];
    while i < steps.len() {
        let labels = 24 / steps[i] + 1;
        if labels * 6 <= width as usize {
            return steps[i];
        }
        i += 1;
    }
    6
}

pub fn render_hours_chart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Opening Hours - {} ", app.day.as_str()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let placeholder = match &app.load_state {
        LoadState::Failed(message) => Some(format!("Request failed: {message}")),
        LoadState::Loading if app.schedules.is_empty() => Some("Loading timetable...".to_string()),
        _ if app.schedules.is_empty() => Some("No locations open on this day.".to_string()),
        _ => None,
    };

    if let Some(text) = placeholder {
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let rows = build_chart_rows(&app.schedules);
    let datasets = rows
        .iter()
        .map(|row| {
            Dataset::default()
                .name(row.name.clone())
                .marker(Marker::HalfBlock)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(row.color.to_color()))
                .data(&row.points)
        })
        .collect::<Vec<_>>();

    let x_labels = hour_axis_labels(area.width)
        .into_iter()
        .map(Span::raw)
        .collect::<Vec<_>>();

    // Bottom-to-top, so the first response row lands on the top line.
    let y_labels = app
        .schedules
        .iter()
        .rev()
        .map(|schedule| Span::raw(schedule.name.clone()))
        .collect::<Vec<_>>();

    #[allow(clippy::cast_precision_loss)]
    let y_max = (rows.len() + 1) as f64;

    let chart = Chart::new(datasets)
        .block(block)
        // Row names label every series already; the legend would repeat them.
        .hidden_legend_constraints((Constraint::Ratio(0, 1), Constraint::Ratio(0, 1)))
        .x_axis(
            Axis::default()
                .title("Hours (24-hour format)")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 24.0])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
