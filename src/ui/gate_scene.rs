//! Gate screen: the dancing figure and the name form.

use super::game_common::centered_rect;
use super::throbber::spinner_char;
use crate::gate::{DancerPose, GatePhase, NameGate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const DANCER_WIDTH: usize = 15;
const DANCER_HEIGHT: usize = 9;

const DANCE_PURPLE: Color = Color::Rgb(186, 104, 200);
const FORM_ACCENT: Color = Color::Rgb(255, 193, 7);

/// Draw the whole gate screen.
pub fn render_gate_scene(frame: &mut Frame, gate: &NameGate) {
    let area = frame.size();
    let panel = centered_rect(area, 44, (DANCER_HEIGHT + 9) as u16);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DANCE_PURPLE))
        .title(" 🎉 Frolic ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DANCER_HEIGHT as u16),
            Constraint::Min(0),
        ])
        .split(inner);

    let dancer: Vec<Line> = dancer_canvas(&gate.current_pose())
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(DANCE_PURPLE))))
        .collect();
    frame.render_widget(
        Paragraph::new(dancer).alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(form_lines(gate))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn form_lines(gate: &NameGate) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    match gate.phase {
        GatePhase::Dancing => {
            lines.push(Line::from(Span::styled(
                "Getting the party started...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        GatePhase::NameEntry => {
            lines.push(Line::from(Span::styled(
                "Who's coming to the party?",
                Style::default().fg(FORM_ACCENT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(FORM_ACCENT)),
                Span::styled(gate.name_input.clone(), Style::default().fg(Color::White)),
                Span::styled("_", Style::default().fg(FORM_ACCENT).add_modifier(Modifier::SLOW_BLINK)),
            ]));
            lines.push(Line::from(Span::styled(
                "[Enter] Submit  [Esc] Quit",
                Style::default().fg(Color::DarkGray),
            )));
        }
        GatePhase::Submitting => {
            lines.push(Line::from(Span::styled(
                format!("Checking name... {}", spinner_char(gate.elapsed_ms)),
                Style::default().fg(FORM_ACCENT),
            )));
        }
        GatePhase::Retrying => {
            lines.push(Line::from(Span::styled(
                "Hang on...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        GatePhase::Admitted => {
            lines.push(Line::from(Span::styled(
                "Come on in!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
    }
    if let Some(message) = &gate.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

/// Rasterize a pose as a stick figure, one string per row.
pub fn dancer_canvas(pose: &DancerPose) -> Vec<String> {
    let mut grid = vec![vec![' '; DANCER_WIDTH]; DANCER_HEIGHT];

    let cx = DANCER_WIDTH as i32 / 2 + (pose.sway * 2.0).round() as i32;
    let head_y = 1 + (pose.bob * 5.0).round() as i32;
    let shoulder_y = head_y + 1;
    let hip_y = head_y + 3;

    plot(&mut grid, cx, head_y, 'O');
    for y in shoulder_y..=hip_y {
        plot(&mut grid, cx, y, '|');
    }

    // Arm angle 0 is horizontal; positive raises the hand.
    for (side, angle) in [(-1, pose.left_arm), (1, pose.right_arm)] {
        let dx = side * (3.0 * angle.cos()).round() as i32;
        let dy = -(3.0 * angle.sin()).round() as i32;
        draw_limb(&mut grid, cx, shoulder_y, dx, dy);
    }

    // Leg angle 0 is a slight stance; positive kicks outward.
    for (side, angle) in [(-1, pose.left_leg), (1, pose.right_leg)] {
        let dx = side * (1.0 + 2.0 * angle.sin()).round() as i32;
        draw_limb(&mut grid, cx + side, hip_y, dx, 3);
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn draw_limb(grid: &mut [Vec<char>], x0: i32, y0: i32, dx: i32, dy: i32) {
    let ch = match (dx, dy) {
        (_, 0) => '-',
        (0, _) => '|',
        (dx, dy) if (dx > 0) == (dy > 0) => '\\',
        _ => '/',
    };
    let steps = dx.abs().max(dy.abs());
    for i in 1..=steps {
        let x = x0 + (dx as f64 * i as f64 / steps as f64).round() as i32;
        let y = y0 + (dy as f64 * i as f64 / steps as f64).round() as i32;
        plot(grid, x, y, ch);
    }
}

fn plot(grid: &mut [Vec<char>], x: i32, y: i32, ch: char) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(cell) = grid
        .get_mut(y as usize)
        .and_then(|row| row.get_mut(x as usize))
    {
        *cell = ch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_dimensions() {
        let rows = dancer_canvas(&DancerPose::at(1234));
        assert_eq!(rows.len(), DANCER_HEIGHT);
        assert!(rows.iter().all(|r| r.chars().count() == DANCER_WIDTH));
    }

    #[test]
    fn test_rest_pose_is_symmetric() {
        let rows = dancer_canvas(&DancerPose::at(0));
        assert!(rows[1].contains('O'));
        for row in &rows {
            let mirrored: String = row
                .chars()
                .rev()
                .map(|c| match c {
                    '/' => '\\',
                    '\\' => '/',
                    other => other,
                })
                .collect();
            assert_eq!(row, &mirrored);
        }
    }

    #[test]
    fn test_pose_changes_over_time() {
        assert_ne!(dancer_canvas(&DancerPose::at(0)), dancer_canvas(&DancerPose::at(400)));
    }
}
