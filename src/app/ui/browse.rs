#[cfg(test)]
#[path = "browse_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Padding},
};
use ratatui_macros::span;
use tui_textarea::Key;

use crate::models::Event;

use super::utils;

/// Read-only list popup used to browse a filtered goal view. The cursor
/// position is discarded on close; nothing here mutates state.
pub struct BrowseScreen {
    showing: bool,
    title: String,
    items: Vec<String>,
    list_state: ListState,
}

impl BrowseScreen {
    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn open(&mut self, title: impl Into<String>, items: Vec<String>) {
        self.title = title.into();
        self.items = items;
        self.list_state = ListState::default().with_selected(Some(0));
        self.showing = true;
    }

    fn next_row(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn prev_row(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns true when the view was closed.
    pub fn handle_key_event(&mut self, event: &Event) -> bool {
        match event {
            Event::UiScrollUp => self.prev_row(),
            Event::UiScrollDown => self.next_row(),
            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('j') => self.next_row(),
                Key::Char('k') => self.prev_row(),
                Key::Char('q') => {
                    self.showing = false;
                    return true;
                }
                _ => {}
            },
            Event::KeyboardEnter => {
                self.showing = false;
                return true;
            }
            _ => {}
        }
        false
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        let instructions: Vec<Span> = vec![
            " ".into(),
            span!("Enter").green().bold(),
            span!(" or ").white(),
            span!("q").green().bold(),
            span!(" to close ").white(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::new(1, 1, 0, 0))
            .title(Line::from(self.title.clone()).bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(instructions));

        let max_width = block.inner(area).width.saturating_sub(2) as usize;
        let items = self
            .items
            .iter()
            .map(|item| ListItem::new(Text::from(utils::split_to_lines(item, max_width))))
            .collect::<Vec<_>>();

        f.render_widget(Clear, area);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for BrowseScreen {
    fn default() -> Self {
        Self {
            showing: false,
            title: String::new(),
            items: vec![],
            list_state: ListState::default(),
        }
    }
}
