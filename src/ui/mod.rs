//! Terminal rendering for the gate and the site.

pub mod game_common;
pub mod gate_scene;
pub mod matchup_scene;
pub mod responsive;
pub mod site_scene;
pub mod snake_scene;
mod throbber;

use crate::games::{Arcade, ArcadeFocus};
use crate::gate::NameGate;
use crate::site::{Page, Site};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use responsive::{render_too_small, LayoutContext, SizeTier};

/// Draw the gate screen.
pub fn draw_gate(frame: &mut Frame, gate: &NameGate) {
    let ctx = LayoutContext::from_frame(frame);
    if ctx.tier == SizeTier::TooSmall {
        render_too_small(frame, &ctx);
        return;
    }
    gate_scene::render_gate_scene(frame, gate);
}

/// Draw the site: navbar, optional greeting, current page, footer.
pub fn draw_site(frame: &mut Frame, site: &Site, year: i32) {
    let ctx = LayoutContext::from_frame(frame);
    if ctx.tier == SizeTier::TooSmall {
        render_too_small(frame, &ctx);
        return;
    }

    let greeting_height = if site.visitor.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),               // Navbar
            Constraint::Length(greeting_height), // Greeting banner
            Constraint::Min(0),                  // Page
            Constraint::Length(3),               // Footer
        ])
        .split(frame.size());

    site_scene::render_navbar(frame, chunks[0], site, !ctx.arcade_side_by_side());
    if let Some(visitor) = &site.visitor {
        site_scene::render_greeting(frame, chunks[1], visitor);
    }

    match site.page {
        Page::Home => site_scene::render_home(frame, chunks[2]),
        Page::Gifts => site_scene::render_gifts(frame, chunks[2]),
        Page::Frolic => draw_arcade(frame, chunks[2], &site.arcade, &ctx),
    }

    site_scene::render_footer(frame, chunks[3], year);

    if site.menu_open {
        let below_navbar = Rect {
            y: chunks[1].y,
            height: chunks[1].height + chunks[2].height,
            ..chunks[1]
        };
        site_scene::render_menu(frame, below_navbar, site);
    }
}

/// Both games side by side, or stacked on narrow terminals.
fn draw_arcade(frame: &mut Frame, area: Rect, arcade: &Arcade, ctx: &LayoutContext) {
    let direction = if ctx.arcade_side_by_side() {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let panels = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    matchup_scene::render_matchup_scene(
        frame,
        panels[0],
        &arcade.matchup,
        arcade.focus == ArcadeFocus::MatchUp,
    );
    snake_scene::render_snake_scene(
        frame,
        panels[1],
        &arcade.snake,
        arcade.focus == ArcadeFocus::Snake,
    );
}
