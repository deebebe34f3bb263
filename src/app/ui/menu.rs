#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding},
};
use ratatui_macros::span;
use tui_textarea::Key;

use crate::models::{Event, MenuAction};

/// The main menu: a single-select list over the six fixed actions.
pub struct MenuScreen {
    list_state: ListState,
}

impl MenuScreen {
    pub fn new() -> MenuScreen {
        MenuScreen {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> MenuAction {
        let i = self
            .list_state
            .selected()
            .unwrap_or(0)
            .min(MenuAction::ALL.len() - 1);
        MenuAction::ALL[i]
    }

    fn next_row(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(MenuAction::ALL.len() - 1),
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

    /// Returns the chosen action when the user submits the menu.
    pub fn handle_key_event(&mut self, event: &Event) -> Option<MenuAction> {
        match event {
            Event::UiScrollUp => self.prev_row(),
            Event::UiScrollDown => self.next_row(),
            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('j') => self.next_row(),
                Key::Char('k') => self.prev_row(),
                _ => {}
            },
            Event::KeyboardEnter => return Some(self.selected()),
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let instructions: Vec<Span> = vec![
            " ".into(),
            span!("↑/↓").green().bold(),
            span!(" to navigate, ").white(),
            span!("Enter").green().bold(),
            span!(" to select ").white(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::new(1, 1, 0, 0))
            .title(Line::from(" Menu ").bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(instructions));

        let items = MenuAction::ALL
            .iter()
            .map(|action| ListItem::new(action.label()))
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
