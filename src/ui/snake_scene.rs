//! Snake panel rendering.
//!
//! Half-block pixel rendering: each grid cell is one "pixel" and two vertical
//! pixels share a terminal row through `▀` (fg = top, bg = bottom), which
//! keeps cells roughly square.

use super::game_common::{create_game_layout, render_status_bar};
use crate::games::snake::{RunState, SnakeGame, SnakeStatus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀

const SNAKE_GREEN: Color = Color::Rgb(76, 175, 80);
const HEAD_COLOR: Color = Color::Rgb(139, 195, 74);
const FOOD_COLOR: Color = Color::Rgb(255, 82, 82);
const EMPTY_BG: Color = Color::Rgb(0, 0, 0);
const PROMPT_YELLOW: Color = Color::Rgb(255, 235, 59);

/// Render the Snake panel.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, game: &SnakeGame, focused: bool) {
    let layout = create_game_layout(frame, area, " 🐍 Classic Snake 🍎 ", SNAKE_GREEN, focused);
    if layout.content.height < 3 {
        return;
    }

    // Score/status header, board, prompt.
    let header = Rect { height: 1, ..layout.content };
    render_header(frame, header, game);

    let board_area = Rect {
        y: layout.content.y + 1,
        height: layout.content.height - 1,
        ..layout.content
    };
    let used = render_board(frame, board_area, game);

    if let Some(prompt) = game.prompt() {
        let prompt_area = Rect {
            y: board_area.y + used,
            height: board_area.height.saturating_sub(used),
            ..board_area
        };
        if prompt_area.height > 0 {
            let text = Paragraph::new(prompt)
                .style(Style::default().fg(PROMPT_YELLOW))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(text, prompt_area);
        }
    }

    let controls: &[(&str, &str)] = if focused {
        &[("[Arrows/WASD]", "Steer"), ("[Tab]", "Match-Up")]
    } else {
        &[("[Tab]", "Play Snake")]
    };
    let status_color = match game.status {
        SnakeStatus::Snake => SNAKE_GREEN,
        SnakeStatus::SpeedUp => PROMPT_YELLOW,
        SnakeStatus::GameOver => Color::Red,
    };
    let detail = match game.run_state {
        RunState::Running => format!("{}ms per step", game.tick_interval_ms),
        RunState::NotStarted => "Ready".to_string(),
        RunState::GameOver if game.board_filled => "Board full!".to_string(),
        RunState::GameOver => format!("Final score {}", game.score),
    };
    render_status_bar(frame, layout.status_bar, &detail, status_color, controls);
}

fn render_header(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let status_color = if game.status == SnakeStatus::GameOver {
        Color::Red
    } else {
        SNAKE_GREEN
    };
    let score = game.score_text();
    let status = game.status.text();
    let gap = (area.width as usize).saturating_sub(score.len() + status.len());
    let line = Line::from(vec![
        Span::styled(score, Style::default().fg(SNAKE_GREEN).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::styled(status, Style::default().fg(status_color).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the grid; returns how many terminal rows it used.
fn render_board(frame: &mut Frame, area: Rect, game: &SnakeGame) -> u16 {
    let size = game.grid_size as usize;
    if area.width < 4 || area.height < 2 {
        return 0;
    }

    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; size]; size];
    let (fx, fy) = (game.food.x as usize, game.food.y as usize);
    if game.run_state == RunState::Running && fx < size && fy < size {
        pixels[fy][fx] = Some(FOOD_COLOR);
    }
    for (i, seg) in game.snake.iter().enumerate() {
        let (sx, sy) = (seg.x as usize, seg.y as usize);
        if sx < size && sy < size {
            pixels[sy][sx] = Some(if i == 0 { HEAD_COLOR } else { SNAKE_GREEN });
        }
    }

    let rows = (size.div_ceil(2) as u16).min(area.height);
    let width = (size as u16).min(area.width);
    let x_off = area.x + (area.width - width) / 2;
    let empty_row: Vec<Option<Color>> = vec![None; size];

    for term_row in 0..rows as usize {
        let top = pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bottom = pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        // Batch runs of identical colors into one span.
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();
        for (&t, &b) in top.iter().zip(bottom.iter()).take(width as usize) {
            let style = Style::default()
                .fg(t.unwrap_or(EMPTY_BG))
                .bg(b.unwrap_or(EMPTY_BG));
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(HALF_TOP);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, area.y + term_row as u16, width, 1),
        );
    }
    rows
}
