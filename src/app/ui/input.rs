use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
};
use ratatui_macros::span;
use tui_textarea::TextArea;

use crate::models::Event;

/// One-line free-text prompt for a new goal, rendered as a popup.
pub struct InputScreen<'a> {
    showing: bool,
    input: TextArea<'a>,

    title: String,
    placeholder: String,
}

impl<'a> InputScreen<'a> {
    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn open(&mut self) {
        self.input = self.build_input();
        self.showing = true;
    }

    /// Close the prompt and return its text. Returns None if the prompt
    /// was not open.
    pub fn close(&mut self) -> Option<String> {
        if !self.showing {
            return None;
        }
        self.showing = false;
        Some(self.input.lines().join(" "))
    }

    pub fn handle_key_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardCharInput(input) => {
                self.input.input(input.clone());
            }
            Event::KeyboardPaste(text) => {
                // The prompt is single-line; flatten pasted newlines.
                self.input.insert_str(text.replace(['\r', '\n'], " "));
            }
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }
        f.render_widget(Clear, area);
        f.render_widget(&self.input, area);
    }

    fn build_input(&self) -> TextArea<'a> {
        let instructions: Vec<Span> = vec![
            " ".into(),
            span!("Enter").green().bold(),
            span!(" to confirm ").white(),
        ];

        let mut input = TextArea::default();
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightBlue))
                .title(Line::from(self.title.clone()).bold())
                .title_alignment(Alignment::Center)
                .title_bottom(Line::from(instructions)),
        );
        input.set_placeholder_text(self.placeholder.clone());
        input.set_cursor_line_style(Style::default());
        input
    }
}

impl Default for InputScreen<'_> {
    fn default() -> Self {
        Self {
            showing: false,
            input: TextArea::default(),
            title: " New Goal ".to_string(),
            placeholder: "What do you want to achieve?".to_string(),
        }
    }
}

pub fn build_area(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height.saturating_sub(3)) / 3;
    Rect::new(x, y, width, 3)
}
