//! Integration test: site navigation and the arcade page
//!
//! Feeds key events through the same dispatch the binary uses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use frolic::games::{Arcade, ArcadeFocus, MatchUpConfig, SnakeConfig};
use frolic::gate::{GateRoute, Visitor};
use frolic::input::{handle_site_input, InputResult};
use frolic::site::content::MENU_ITEMS;
use frolic::site::{Page, Site};

fn press(site: &mut Site, code: KeyCode) -> InputResult {
    handle_site_input(KeyEvent::new(code, KeyModifiers::NONE), site)
}

fn new_site() -> Site {
    let visitor = Visitor {
        name: "Ayush".to_string(),
        route: GateRoute::Birthday,
    };
    Site::new(
        Arcade::new(MatchUpConfig::default(), SnakeConfig::default(), Some(11)),
        Some(visitor),
    )
}

#[test]
fn test_site_opens_on_home_with_greeting() {
    let site = new_site();
    assert_eq!(site.page, Page::Home);
    let greeting = site.visitor.as_ref().map(|v| v.greeting());
    assert_eq!(greeting.as_deref(), Some("Happy Birthday, Ayush! 🎂"));
}

#[test]
fn test_arcade_is_paused_off_page() {
    let mut site = new_site();
    press(&mut site, KeyCode::Char('3'));
    press(&mut site, KeyCode::Tab);
    press(&mut site, KeyCode::Up);
    assert!(site.arcade.snake.is_running());
    let head = site.arcade.snake.head();

    press(&mut site, KeyCode::Char('1'));
    site.tick(1_000);
    assert_eq!(site.arcade.snake.head(), head);

    press(&mut site, KeyCode::Char('3'));
    site.tick(150);
    assert_ne!(site.arcade.snake.head(), head);
}

#[test]
fn test_focus_routes_arrows_to_one_game() {
    let mut site = new_site();
    press(&mut site, KeyCode::Char('3'));
    assert_eq!(site.arcade.focus, ArcadeFocus::MatchUp);

    press(&mut site, KeyCode::Right);
    assert_eq!(site.arcade.matchup.cursor, 1);
    assert!(!site.arcade.snake.is_running());

    press(&mut site, KeyCode::Tab);
    press(&mut site, KeyCode::Right);
    assert_eq!(site.arcade.matchup.cursor, 1);
    assert!(site.arcade.snake.is_running());
}

#[test]
fn test_menu_navigation_to_frolic() {
    let mut site = new_site();
    press(&mut site, KeyCode::Char('m'));
    assert!(site.menu_open);
    for _ in 0..MENU_ITEMS.len() {
        press(&mut site, KeyCode::Down);
    }
    press(&mut site, KeyCode::Enter);
    assert!(!site.menu_open);
    assert_eq!(site.page, Page::Frolic);
}

#[test]
fn test_quit_and_shutdown() {
    let mut site = new_site();
    press(&mut site, KeyCode::Char('3'));
    press(&mut site, KeyCode::Enter);
    press(&mut site, KeyCode::Right);
    press(&mut site, KeyCode::Enter);
    assert_eq!(press(&mut site, KeyCode::Char('q')), InputResult::Quit);

    site.shutdown();
    assert_eq!(site.arcade.matchup.pending_timers(), 0);
}
