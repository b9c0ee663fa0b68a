//! Site chrome and the static pages: navbar, menu, greeting, footer, home
//! hero and gift gallery.

use super::game_common::centered_rect;
use crate::gate::{GateRoute, Visitor};
use crate::site::content::{footer_lines, GiftCard, GIFTS, HERO_LINES, MENU_ITEMS};
use crate::site::{Page, Site};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const BRAND: Color = Color::Rgb(255, 112, 67);
const INERT: Color = Color::DarkGray;
const GIFT_CARD_WIDTH: u16 = 26;
const GIFT_CARD_HEIGHT: u16 = 8;

/// Navbar: title, then every menu item (or just the toggle when narrow).
pub fn render_navbar(frame: &mut Frame, area: Rect, site: &Site, compact: bool) {
    let mut spans = vec![Span::styled(
        " 🎈 Frolic ",
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
    )];

    if compact {
        spans.push(Span::styled("  ☰ [m] Menu", Style::default().fg(Color::White)));
    } else {
        for item in MENU_ITEMS {
            spans.push(Span::raw("  "));
            let style = match Page::for_menu_item(item) {
                Some(page) if page == site.page => Style::default()
                    .fg(BRAND)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                Some(_) => Style::default().fg(Color::White),
                None => Style::default().fg(INERT),
            };
            spans.push(Span::styled(item, style));
        }
        spans.push(Span::styled("   ☰ [m]", Style::default().fg(INERT)));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(INERT)),
    );
    frame.render_widget(bar, area);
}

/// The collapsible menu, dropped down under the navbar.
pub fn render_menu(frame: &mut Frame, area: Rect, site: &Site) {
    let width = 20.min(area.width);
    let height = (MENU_ITEMS.len() as u16 + 2).min(area.height);
    let menu_area = Rect::new(area.x + area.width - width, area.y, width, height);
    frame.render_widget(Clear, menu_area);

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .map(|item| {
            let style = if Page::for_menu_item(item).is_some() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(INERT)
            };
            ListItem::new(Span::styled(*item, style))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND))
                .title(" ☰ "),
        )
        .highlight_style(Style::default().fg(BRAND).add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(site.menu_selected));
    frame.render_stateful_widget(list, menu_area, &mut state);
}

/// One-line banner for an admitted visitor.
pub fn render_greeting(frame: &mut Frame, area: Rect, visitor: &Visitor) {
    let color = match visitor.route {
        GateRoute::Birthday => Color::Rgb(255, 215, 0),
        GateRoute::Wishers => Color::Rgb(129, 212, 250),
    };
    let banner = Paragraph::new(Span::styled(
        visitor.greeting(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, year: i32) {
    let [made_with, copyright] = footer_lines(year);
    let lines = vec![
        Line::from(Span::styled(made_with, Style::default().fg(BRAND))),
        Line::from(Span::styled(copyright, Style::default().fg(INERT))),
    ];
    let footer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(INERT)),
    );
    frame.render_widget(footer, area);
}

pub fn render_home(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = HERO_LINES
        .iter()
        .map(|text| {
            Line::from(Span::styled(
                *text,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[2] Gifts   [3] Frolic arcade",
        Style::default().fg(INERT),
    )));

    let hero_area = centered_rect(area, area.width, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        hero_area,
    );
}

/// Polaroid cards, as many per row as fit.
pub fn render_gifts(frame: &mut Frame, area: Rect) {
    let per_row = (area.width / GIFT_CARD_WIDTH).clamp(1, GIFTS.len() as u16) as usize;
    let rows = GIFTS.len().div_ceil(per_row);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(GIFT_CARD_HEIGHT); rows])
        .split(area);

    for (row_index, chunk) in GIFTS.chunks(per_row).enumerate() {
        let Some(row_area) = row_areas.get(row_index) else {
            break;
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(*row_area);
        for (card, col_area) in chunk.iter().zip(cols.iter()) {
            render_gift_card(frame, *col_area, card);
        }
    }
}

fn render_gift_card(frame: &mut Frame, area: Rect, card: &GiftCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled("📷", Style::default())),
        Line::from(Span::styled(
            card.title,
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.description, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
