//! Screen layout of the terminal host
//!
//! The page area lists what the background received. The command line and
//! its completion popups appear only while the frame is visible.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::CommandFrame;
use crate::completion::completion_render;
use crate::input::input_render;

const HIDDEN_HELP: &str = " :: Command line | q: Quit";
const VISIBLE_HELP: &str =
    " Enter: Run | Tab/Shift+Tab: Complete | ↑/↓: History | Ctrl+W: Delete Word | Esc: Close";

impl CommandFrame {
    /// Draw the page, the help line and, when visible, the command line
    pub fn render(&mut self, frame: &mut Frame, received: &[String]) {
        let visible = self.is_visible();

        let (page_area, input_area, help_area) = if visible {
            let layout = Layout::vertical([
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());
            (layout[0], Some(layout[1]), layout[2])
        } else {
            let layout =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
            (layout[0], None, layout[1])
        };

        render_page(frame, page_area, received);
        render_help_line(frame, help_area, visible);

        if let Some(input_area) = input_area {
            let focused = self.view.is_focused();
            input_render::render_field(&mut self.input, frame, input_area, focused);
            completion_render::render_popups(&self.registry, frame, input_area);
        }
    }
}

fn render_page(frame: &mut Frame, area: Rect, received: &[String]) {
    let rows = area.height.saturating_sub(2) as usize;
    let skip = received.len().saturating_sub(rows);
    let lines: Vec<Line> = received
        .iter()
        .skip(skip)
        .map(|command| Line::from(command.as_str()))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Background ")
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help_line(frame: &mut Frame, area: Rect, visible: bool) {
    let text = if visible { VISIBLE_HELP } else { HIDDEN_HELP };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "frame_render_tests.rs"]
mod frame_render_tests;
