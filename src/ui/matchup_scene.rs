//! Match-Up panel rendering.

use super::game_common::{create_game_layout, render_modal, render_status_bar};
use crate::games::matchup::{CardStatus, MatchUpGame, PerformanceTier};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PARTY_PINK: Color = Color::Rgb(236, 64, 122);
const CARD_BACK: Color = Color::Rgb(103, 58, 183);
const CURSOR_COLOR: Color = Color::Rgb(255, 235, 59);

/// Width of one card cell including its gap.
const CELL_WIDTH: u16 = 7;
/// Height of one card cell including its gap.
const CELL_HEIGHT: u16 = 3;

/// Render the Match-Up panel.
pub fn render_matchup_scene(frame: &mut Frame, area: Rect, game: &MatchUpGame, focused: bool) {
    let layout = create_game_layout(frame, area, " 🎉 Party Match-Up 🎁 ", PARTY_PINK, focused);

    render_grid(frame, layout.content, game, focused);

    let status = format!(
        "Moves: {}   Pairs: {}/{}",
        game.moves,
        game.pairs_found(),
        game.total_pairs()
    );
    let controls: &[(&str, &str)] = if focused {
        &[("[Arrows]", "Move"), ("[Enter]", "Flip"), ("[R]", "Restart")]
    } else {
        &[("[Tab]", "Play Match-Up")]
    };
    render_status_bar(frame, layout.status_bar, &status, PARTY_PINK, controls);

    if let Some(completion) = &game.completion {
        let accent = match completion.tier {
            PerformanceTier::Excellent => Color::Rgb(255, 215, 0),
            PerformanceTier::Good => Color::Rgb(76, 175, 80),
            PerformanceTier::KeepPracticing => PARTY_PINK,
        };
        render_modal(
            frame,
            area,
            &completion.title,
            &completion.message,
            "[Enter] Play Again",
            accent,
        );
    }
}

fn render_grid(frame: &mut Frame, area: Rect, game: &MatchUpGame, focused: bool) {
    let columns = game.columns();
    let rows = game.rows();
    let grid_w = columns as u16 * CELL_WIDTH;
    let mut grid_h = rows as u16 * CELL_HEIGHT;
    let compact = grid_h > area.height;
    if compact {
        grid_h = rows as u16;
    }
    let x_off = area.x + area.width.saturating_sub(grid_w) / 2;
    let y_off = area.y + area.height.saturating_sub(grid_h) / 2;

    for (index, symbol) in game.deck.iter().enumerate() {
        let col = (index % columns) as u16;
        let row = (index / columns) as u16;
        let x = x_off + col * CELL_WIDTH;
        let cell_h = if compact { 1 } else { CELL_HEIGHT };
        let y = y_off + row * cell_h;
        if x + CELL_WIDTH > area.x + area.width || y + cell_h > area.y + area.height {
            continue;
        }

        let status = game.status(index);
        let under_cursor = focused && index == game.cursor && game.completion.is_none();
        let (face, face_style) = match status {
            CardStatus::Hidden => (
                "?".to_string(),
                Style::default().fg(Color::White).bg(CARD_BACK),
            ),
            CardStatus::Flipped => (
                symbol.glyph().to_string(),
                Style::default().bg(Color::White),
            ),
            CardStatus::Matched => (
                symbol.glyph().to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
        };
        let frame_style = if under_cursor {
            Style::default().fg(CURSOR_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if compact {
            let label = match status {
                CardStatus::Hidden => " ?? ",
                _ => symbol.name(),
            };
            let line = Line::from(vec![
                Span::styled("[", frame_style),
                Span::styled(label, face_style),
                Span::styled("]", frame_style),
            ]);
            frame.render_widget(Paragraph::new(line), Rect::new(x, y, CELL_WIDTH - 1, 1));
            continue;
        }

        let lines = vec![
            Line::from(Span::styled("╭────╮", frame_style)),
            Line::from(vec![
                Span::styled("│", frame_style),
                Span::styled(pad_face(&face), face_style),
                Span::styled("│", frame_style),
            ]),
            Line::from(Span::styled("╰────╯", frame_style)),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Left),
            Rect::new(x, y, CELL_WIDTH - 1, CELL_HEIGHT),
        );
    }
}

/// Center a card face in the four-column interior. Emoji glyphs are two
/// columns wide.
fn pad_face(face: &str) -> String {
    if face.is_ascii() {
        format!(" {:^2} ", face)
    } else {
        format!(" {} ", face)
    }
}
