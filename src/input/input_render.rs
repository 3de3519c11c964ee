//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::InputState;

const PROMPT: &str = ":";

/// Render the command input and place the terminal cursor in it
pub fn render_field(input: &mut InputState, frame: &mut Frame, area: Rect, focused: bool) {
    let prompt_width = PROMPT.chars().count();
    let viewport_width = (area.width.saturating_sub(2) as usize).saturating_sub(prompt_width);
    input.calculate_scroll_offset(viewport_width.max(1));

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Command ")
        .border_style(Style::default().fg(border_color));

    let visible: String = input
        .text()
        .chars()
        .skip(input.scroll_offset)
        .take(viewport_width)
        .collect();

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Color::Yellow)),
        Span::raw(visible),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && area.width > 2 && area.height > 2 {
        let cursor_in_viewport = input.cursor().saturating_sub(input.scroll_offset);
        let x = area.x + 1 + (prompt_width + cursor_in_viewport) as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
