#[cfg(test)]
#[path = "multi_select_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Padding},
};
use ratatui_macros::span;
use tui_textarea::Key;

use crate::models::Event;

/// An entry offered for selection. `done` is display metadata only; every
/// entry is offered unchecked regardless of it.
#[derive(Debug, Clone)]
pub struct Choice {
    pub description: String,
    pub done: bool,
}

impl Choice {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// Checkbox-list popup: space toggles the entry under the cursor, enter
/// submits the checked set (possibly empty) in display order.
pub struct MultiSelectScreen {
    showing: bool,
    title: String,
    choices: Vec<Choice>,
    checked: Vec<bool>,
    list_state: ListState,
}

impl MultiSelectScreen {
    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn open(&mut self, title: impl Into<String>, choices: Vec<Choice>) {
        self.title = title.into();
        self.checked = vec![false; choices.len()];
        self.choices = choices;
        self.list_state = ListState::default().with_selected(Some(0));
        self.showing = true;
    }

    fn next_row(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.choices.len() - 1),
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

    fn toggle_selected(&mut self) {
        if let Some(i) = self.list_state.selected() {
            if i < self.checked.len() {
                self.checked[i] = !self.checked[i];
            }
        }
    }

    /// Descriptions of the checked entries, in display order.
    pub fn selections(&self) -> Vec<String> {
        self.choices
            .iter()
            .zip(self.checked.iter())
            .filter(|(_, checked)| **checked)
            .map(|(choice, _)| choice.description.clone())
            .collect()
    }

    /// Returns the submitted selection when the user confirms with enter.
    pub fn handle_key_event(&mut self, event: &Event) -> Option<Vec<String>> {
        match event {
            Event::UiScrollUp => self.prev_row(),
            Event::UiScrollDown => self.next_row(),
            Event::KeyboardCharInput(input) => match input.key {
                Key::Char(' ') => self.toggle_selected(),
                Key::Char('j') => self.next_row(),
                Key::Char('k') => self.prev_row(),
                _ => {}
            },
            Event::KeyboardEnter => {
                self.showing = false;
                return Some(self.selections());
            }
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        let instructions: Vec<Span> = vec![
            " ".into(),
            span!("Space").green().bold(),
            span!(" to select, ").white(),
            span!("Enter").green().bold(),
            span!(" to confirm ").white(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::new(1, 1, 0, 0))
            .title(Line::from(self.title.clone()).bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(instructions));

        let items = self
            .choices
            .iter()
            .zip(self.checked.iter())
            .map(|(choice, checked)| {
                let mut spans = vec![
                    if *checked {
                        span!("[x] ").green().bold()
                    } else {
                        span!("[ ] ").white()
                    },
                    Span::from(choice.description.clone()),
                ];
                if choice.done {
                    spans.push(span!(" (done)").dim().italic());
                }
                ListItem::new(Line::from(spans))
            })
            .collect::<Vec<_>>();

        f.render_widget(Clear, area);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for MultiSelectScreen {
    fn default() -> Self {
        Self {
            showing: false,
            title: String::new(),
            choices: vec![],
            checked: vec![],
            list_state: ListState::default(),
        }
    }
}
