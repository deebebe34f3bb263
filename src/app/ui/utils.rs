#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
};
use unicode_width::UnicodeWidthStr;

pub fn popup_area(area: Rect, percent_width: u16, percent_height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Word-wrap plain text into lines no wider than max_width cells. A single
/// word wider than the limit keeps its own overlong line.
pub fn split_to_lines(text: &str, max_width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![];
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_inclusive(' ') {
        let word_width = word.width();
        if line_width + word.trim_end().width() > max_width && !line.is_empty() {
            lines.push(Line::from(line.trim_end().to_string()));
            line = String::new();
            line_width = 0;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if !line.trim_end().is_empty() {
        lines.push(Line::from(line.trim_end().to_string()));
    }
    lines
}
