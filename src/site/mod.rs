//! Site shell: navbar, pages, footer, and the arcade they wrap.

pub mod content;

use crate::games::Arcade;
use crate::gate::Visitor;
use content::MENU_ITEMS;

/// A page reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Gifts,
    Frolic,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Gifts, Page::Frolic];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gifts => "Gift",
            Self::Frolic => "Frolic",
        }
    }

    /// Page behind a navbar entry; `None` for entries with no page yet.
    pub fn for_menu_item(item: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.title() == item)
    }
}

/// Everything shown after the gate.
#[derive(Debug, Clone)]
pub struct Site {
    pub page: Page,
    /// Collapsible menu (the "☰" toggle).
    pub menu_open: bool,
    pub menu_selected: usize,
    pub visitor: Option<Visitor>,
    pub arcade: Arcade,
}

impl Site {
    pub fn new(arcade: Arcade, visitor: Option<Visitor>) -> Self {
        Self {
            page: Page::Home,
            menu_open: false,
            menu_selected: 0,
            visitor,
            arcade,
        }
    }

    pub fn go_to(&mut self, page: Page) {
        self.page = page;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_selected = MENU_ITEMS
                .iter()
                .position(|item| *item == self.page.title())
                .unwrap_or(0);
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        self.menu_selected = (self.menu_selected + 1).min(MENU_ITEMS.len() - 1);
    }

    /// Activate the highlighted menu entry. The menu closes either way.
    pub fn menu_activate(&mut self) {
        if let Some(page) = MENU_ITEMS
            .get(self.menu_selected)
            .and_then(|item| Page::for_menu_item(item))
        {
            self.page = page;
        }
        self.menu_open = false;
    }

    /// Advance the arcade. Games only run while their page is showing.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        if self.page == Page::Frolic {
            self.arcade.advance(dt_ms)
        } else {
            false
        }
    }

    pub fn shutdown(&mut self) {
        self.arcade.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{MatchUpConfig, SnakeConfig};

    fn site() -> Site {
        Site::new(
            Arcade::new(MatchUpConfig::default(), SnakeConfig::default(), Some(1)),
            None,
        )
    }

    #[test]
    fn test_menu_items_map_to_pages() {
        assert_eq!(Page::for_menu_item("Home"), Some(Page::Home));
        assert_eq!(Page::for_menu_item("Gift"), Some(Page::Gifts));
        assert_eq!(Page::for_menu_item("Frolic"), Some(Page::Frolic));
        assert_eq!(Page::for_menu_item("Party"), None);
    }

    #[test]
    fn test_menu_toggle_highlights_current_page() {
        let mut site = site();
        site.go_to(Page::Frolic);
        site.toggle_menu();
        assert!(site.menu_open);
        assert_eq!(MENU_ITEMS[site.menu_selected], "Frolic");
    }

    #[test]
    fn test_inert_entry_closes_menu_without_navigating() {
        let mut site = site();
        site.toggle_menu();
        site.menu_down(); // Surprise
        site.menu_activate();
        assert!(!site.menu_open);
        assert_eq!(site.page, Page::Home);
    }

    #[test]
    fn test_menu_selection_clamped() {
        let mut site = site();
        site.toggle_menu();
        site.menu_up();
        assert_eq!(site.menu_selected, 0);
        for _ in 0..20 {
            site.menu_down();
        }
        assert_eq!(site.menu_selected, MENU_ITEMS.len() - 1);
        site.menu_activate();
        assert_eq!(site.page, Page::Frolic);
    }

    #[test]
    fn test_arcade_paused_off_page() {
        let mut site = site();
        site.arcade.snake.start();
        assert!(!site.tick(1000));
        assert_eq!(site.arcade.snake.tick_count, 0);
        site.go_to(Page::Frolic);
        assert!(site.tick(200));
        assert_eq!(site.arcade.snake.tick_count, 1);
    }
}
