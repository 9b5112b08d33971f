use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::state::LoadState;
use crate::app::App;
use crate::domain::RegionSchedule;

/// Lines of one listing card. Text spans only, so field contents are never
/// interpreted as markup no matter what the backend serves.
pub fn card_lines(schedule: &RegionSchedule) -> Vec<String> {
    vec![
        schedule.name.clone(),
        format!("Address: {}", schedule.address),
        format!("Postal Code: {}", schedule.postal_code),
        schedule.listing_hours_label(),
    ]
}

/// Card height including the separating blank line.
pub const CARD_HEIGHT: usize = 5;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    selected_index
}

pub fn render_listings(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Listings ({}) ",
            app.region.as_deref().unwrap_or("no region")
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if app.schedules.is_empty() {
        let text = match &app.load_state {
            LoadState::Failed(_) => "Nothing to list.",
            LoadState::Loading => "Loading...",
            _ => "No locations found.",
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let total_cards = app.schedules.len();
    let max_visible_cards = (area.height.saturating_sub(2) as usize / CARD_HEIGHT).max(1);
    let offset = scroll_offset(total_cards, max_visible_cards, app.selected_row);

    let mut lines: Vec<TextLine<'_>> = Vec::new();
    for (index, schedule) in app
        .schedules
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_cards)
    {
        let is_selected = index == app.selected_row;
        let heading_style = if is_selected {
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };

        let [heading, address, postal_code, hours] = match card_lines(schedule).try_into() {
            Ok(lines) => lines,
            Err(_) => continue,
        };

        lines.push(TextLine::from(Span::styled(heading, heading_style)));
        lines.push(TextLine::from(address));
        lines.push(TextLine::from(postal_code));
        lines.push(TextLine::from(Span::styled(
            hours,
            Style::default().fg(Color::Yellow),
        )));
        lines.push(TextLine::from(""));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(name: &str, start: u8, end: u8) -> RegionSchedule {
        RegionSchedule {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            postal_code: "00001".to_string(),
            start,
            end,
        }
    }

    #[test]
    fn card_shows_name_address_postal_code_and_unpadded_hours() {
        let lines = card_lines(&schedule("Center A", 9, 18));
        assert_eq!(
            lines,
            [
                "Center A",
                "Address: 1 Main St",
                "Postal Code: 00001",
                "Hours: 9:00 - 18:00",
            ]
        );
    }

    #[test]
    fn one_card_per_location_in_input_order() {
        let schedules = vec![
            schedule("Center B", 10, 20),
            schedule("Center A", 9, 18),
        ];
        let headings: Vec<String> = schedules
            .iter()
            .map(|s| card_lines(s)[0].clone())
            .collect();
        assert_eq!(headings, ["Center B", "Center A"]);
    }

    #[test]
    fn markup_significant_characters_stay_verbatim_text() {
        let mut tricky = schedule("<b>Center</b>", 9, 18);
        tricky.address = "1 & 2 <Main> St".to_string();
        let lines = card_lines(&tricky);
        assert_eq!(lines[0], "<b>Center</b>");
        assert_eq!(lines[1], "Address: 1 & 2 <Main> St");
    }

    #[test]
    fn scrolling_keeps_the_selection_visible() {
        assert_eq!(scroll_offset(3, 5, 2), 0);
        assert_eq!(scroll_offset(10, 4, 1), 1);
        assert_eq!(scroll_offset(10, 4, 7), 4);
        assert_eq!(scroll_offset(10, 4, 9), 6);
    }
}
