//! Keyboard dispatch for the gate and site screens.
//!
//! Maps crossterm key events onto typed engine inputs. Keys with no meaning
//! for the current screen map to nothing and are dropped here.

use crate::games::{ArcadeFocus, ArcadeInput, Direction, MatchUpInput, SnakeInput};
use crate::gate::NameGate;
use crate::site::{Page, Site};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

fn is_quit_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

fn arrow_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Gate screen: typing goes to the name form.
pub fn handle_gate_input(key: KeyEvent, gate: &mut NameGate) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }
    if is_quit_chord(&key) || key.code == KeyCode::Esc {
        return InputResult::Quit;
    }
    match key.code {
        KeyCode::Char(c) => gate.handle_char(c),
        KeyCode::Backspace => gate.handle_backspace(),
        KeyCode::Enter => gate.submit(),
        _ => {}
    }
    InputResult::Continue
}

/// Map a key to an arcade input for the focused game.
pub fn map_arcade_key(code: KeyCode, focus: ArcadeFocus) -> Option<ArcadeInput> {
    if code == KeyCode::Tab || code == KeyCode::BackTab {
        return Some(ArcadeInput::SwitchFocus);
    }
    match focus {
        ArcadeFocus::MatchUp => {
            let input = match code {
                KeyCode::Up => MatchUpInput::Up,
                KeyCode::Down => MatchUpInput::Down,
                KeyCode::Left => MatchUpInput::Left,
                KeyCode::Right => MatchUpInput::Right,
                KeyCode::Enter | KeyCode::Char(' ') => MatchUpInput::Select,
                KeyCode::Char('r') | KeyCode::Char('R') => MatchUpInput::Restart,
                _ => return None,
            };
            Some(ArcadeInput::MatchUp(input))
        }
        ArcadeFocus::Snake => {
            let direction = arrow_direction(code).or(match code {
                KeyCode::Char('w') => Some(Direction::Up),
                KeyCode::Char('s') => Some(Direction::Down),
                KeyCode::Char('a') => Some(Direction::Left),
                KeyCode::Char('d') => Some(Direction::Right),
                _ => None,
            })?;
            Some(ArcadeInput::Snake(SnakeInput::Turn(direction)))
        }
    }
}

/// Site screen: navbar keys first, then the arcade when it is showing.
pub fn handle_site_input(key: KeyEvent, site: &mut Site) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }
    if is_quit_chord(&key) {
        return InputResult::Quit;
    }

    // Open menu captures navigation keys.
    if site.menu_open {
        match key.code {
            KeyCode::Up => site.menu_up(),
            KeyCode::Down => site.menu_down(),
            KeyCode::Enter => site.menu_activate(),
            KeyCode::Esc | KeyCode::Char('m') => site.toggle_menu(),
            _ => {}
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return InputResult::Quit,
        KeyCode::Char('m') => site.toggle_menu(),
        KeyCode::Char('1') => site.go_to(Page::Home),
        KeyCode::Char('2') => site.go_to(Page::Gifts),
        KeyCode::Char('3') => site.go_to(Page::Frolic),
        code if site.page == Page::Frolic => {
            if let Some(input) = map_arcade_key(code, site.arcade.focus) {
                site.arcade.handle_input(input);
            }
        }
        _ => {}
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Arcade, MatchUpConfig, SnakeConfig};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn site() -> Site {
        Site::new(
            Arcade::new(MatchUpConfig::default(), SnakeConfig::default(), Some(9)),
            None,
        )
    }

    #[test]
    fn test_arrow_routing_follows_focus() {
        assert_eq!(
            map_arcade_key(KeyCode::Left, ArcadeFocus::MatchUp),
            Some(ArcadeInput::MatchUp(MatchUpInput::Left))
        );
        assert_eq!(
            map_arcade_key(KeyCode::Left, ArcadeFocus::Snake),
            Some(ArcadeInput::Snake(SnakeInput::Turn(Direction::Left)))
        );
        assert_eq!(
            map_arcade_key(KeyCode::Char('d'), ArcadeFocus::Snake),
            Some(ArcadeInput::Snake(SnakeInput::Turn(Direction::Right)))
        );
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        assert_eq!(map_arcade_key(KeyCode::Char('x'), ArcadeFocus::Snake), None);
        assert_eq!(map_arcade_key(KeyCode::F(5), ArcadeFocus::MatchUp), None);
    }

    #[test]
    fn test_number_keys_switch_pages() {
        let mut site = site();
        handle_site_input(key(KeyCode::Char('3')), &mut site);
        assert_eq!(site.page, Page::Frolic);
        handle_site_input(key(KeyCode::Char('2')), &mut site);
        assert_eq!(site.page, Page::Gifts);
    }

    #[test]
    fn test_arcade_keys_ignored_off_page() {
        let mut site = site();
        handle_site_input(key(KeyCode::Enter), &mut site);
        assert!(site.arcade.matchup.flipped.is_empty());
    }

    #[test]
    fn test_tab_then_arrow_starts_snake() {
        let mut site = site();
        site.go_to(Page::Frolic);
        handle_site_input(key(KeyCode::Tab), &mut site);
        handle_site_input(key(KeyCode::Up), &mut site);
        assert!(site.arcade.snake.is_running());
    }

    #[test]
    fn test_menu_captures_arrows() {
        let mut site = site();
        site.go_to(Page::Frolic);
        handle_site_input(key(KeyCode::Char('m')), &mut site);
        handle_site_input(key(KeyCode::Enter), &mut site);
        assert!(!site.menu_open);
        assert!(site.arcade.matchup.flipped.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut site = site();
        assert_eq!(
            handle_site_input(key(KeyCode::Char('q')), &mut site),
            InputResult::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_site_input(ctrl_c, &mut site), InputResult::Quit);
    }
}
