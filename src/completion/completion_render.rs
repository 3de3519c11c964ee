//! Completion popup rendering
//!
//! Every showing source gets its own list, stacked upwards from the input
//! field in registry order so the authoritative source sits closest to it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::registry::CompletionRegistry;
use super::source::SourceState;
use crate::widgets::popup;

const MAX_VISIBLE_OPTIONS: usize = 8;
const MAX_POPUP_WIDTH: usize = 72;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const SELECTION_MARKER: &str = "► ";

/// A source's options as they will be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl Section {
    fn width(&self) -> u16 {
        let title_width = self.title.width() + 2;
        let widest = self
            .options
            .iter()
            .map(|option| option.width() + SELECTION_MARKER.width())
            .max()
            .unwrap_or(0);

        widest.max(title_width).clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH) as u16 + POPUP_PADDING
    }

    fn height(&self) -> u16 {
        self.options.len().min(MAX_VISIBLE_OPTIONS) as u16 + POPUP_BORDER_HEIGHT
    }
}

/// Sections for the active sources that are showing something
pub fn sections(registry: &CompletionRegistry) -> Vec<Section> {
    registry
        .sources()
        .iter()
        .filter(|source| source.state() == SourceState::Normal)
        .filter_map(|source| {
            let options = source.options();
            if options.is_empty() {
                return None;
            }
            Some(Section {
                title: source.title().to_string(),
                options,
                selected: source.selected(),
            })
        })
        .collect()
}

/// Render the completion popups above the input field
pub fn render_popups(registry: &CompletionRegistry, frame: &mut Frame, input_area: Rect) {
    let mut anchor = input_area;

    for section in sections(registry) {
        let area = popup::popup_above_anchor(anchor, section.width(), section.height(), POPUP_OFFSET_X);
        if area.height <= POPUP_BORDER_HEIGHT {
            break;
        }

        render_section(&section, frame, area);
        anchor = Rect { y: area.y, ..anchor };
    }
}

fn render_section(section: &Section, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = section
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let line = if section.selected == Some(i) {
                Line::from(Span::styled(
                    format!("{}{}", SELECTION_MARKER, option),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", option),
                    Style::default().fg(Color::White),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", section.title))
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    let mut state = ListState::default().with_selected(section.selected);
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
#[path = "completion_render_tests.rs"]
mod completion_render_tests;
