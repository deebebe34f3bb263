pub mod browse;
pub mod input;
pub mod menu;
pub mod multi_select;
pub mod utils;

pub use browse::BrowseScreen;
pub use input::InputScreen;
pub use menu::MenuScreen;
pub use multi_select::{Choice, MultiSelectScreen};

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Block,
};

pub trait Dim {
    fn dim_bg(&mut self);
}

impl Dim for ratatui::Frame<'_> {
    fn dim_bg(&mut self) {
        self.render_widget(
            Block::default().style(
                Style::default()
                    .bg(Color::Rgb(0, 0, 0))
                    .add_modifier(Modifier::DIM),
            ),
            self.area(),
        );
    }
}
