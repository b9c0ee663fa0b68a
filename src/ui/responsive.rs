//! Terminal size classification.
//!
//! A `LayoutContext` is built once per frame and decides how the arcade
//! panels are arranged.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Terminal size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    TooSmall,
    /// Arcade panels stack vertically.
    Narrow,
    /// Arcade panels sit side by side.
    Wide,
}

const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 16;
const WIDE_MIN_COLS: u16 = 90;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub tier: SizeTier,
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }

    pub fn from_size(cols: u16, rows: u16) -> Self {
        let tier = if cols < MIN_COLS || rows < MIN_ROWS {
            SizeTier::TooSmall
        } else if cols < WIDE_MIN_COLS {
            SizeTier::Narrow
        } else {
            SizeTier::Wide
        };
        Self { tier, cols, rows }
    }

    pub fn arcade_side_by_side(&self) -> bool {
        self.tier == SizeTier::Wide
    }
}

/// Render a "terminal too small" message.
pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
