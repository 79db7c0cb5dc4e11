//! Query text area and result-count selector.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Multi-line text input for the query.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    value: String,
    /// Cursor position (byte index, always on a char boundary)
    cursor: usize,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.len();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Characters typed so far, whitespace included.
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Backspace.
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete key.
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(" Query or job description ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let text = if self.value.is_empty() {
            vec![Line::from(Span::styled(
                "e.g. Looking for a Java developer who can collaborate with business teams",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            // Thin bar at the cursor position.
            let (before, after) = self.value.split_at(self.cursor);
            let with_cursor = if focused {
                format!("{before}▏{after}")
            } else {
                self.value.clone()
            };
            with_cursor.lines().map(|l| Line::from(l.to_string())).collect()
        };

        frame.render_widget(
            Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

/// Result counts the selector offers.
pub const TOP_K_CHOICES: &[u32] = &[5, 6, 7, 8, 9, 10];

/// Selector for the number of results, stepping through [`TOP_K_CHOICES`].
#[derive(Debug, Clone)]
pub struct TopKSelector {
    index: usize,
}

impl TopKSelector {
    /// Starts at the closest offered value to `initial`.
    pub fn new(initial: u32) -> Self {
        let index = TOP_K_CHOICES
            .iter()
            .enumerate()
            .min_by_key(|(_, k)| k.abs_diff(initial))
            .map(|(i, _)| i)
            .unwrap_or(0);
        Self { index }
    }

    pub fn value(&self) -> u32 {
        TOP_K_CHOICES[self.index]
    }

    pub fn increase(&mut self) {
        if self.index + 1 < TOP_K_CHOICES.len() {
            self.index += 1;
        }
    }

    pub fn decrease(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}
