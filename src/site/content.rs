//! Static copy for the site pages.

/// Navbar entries, in display order.
pub const MENU_ITEMS: [&str; 6] = ["Home", "Surprise", "Wishes", "Gift", "Party", "Frolic"];

pub const HERO_LINES: [&str; 3] = [
    "the future is too far, we",
    "are obsessed with",
    "making today better",
];

/// A card in the gift gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiftCard {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

pub const GIFTS: [GiftCard; 4] = [
    GiftCard {
        id: 1,
        title: "Birthday Surprise",
        description: "Make their birthday unforgettable with a Polaroid gift set!",
    },
    GiftCard {
        id: 2,
        title: "Wedding Memories",
        description: "Capture precious moments and cherish them forever.",
    },
    GiftCard {
        id: 3,
        title: "Custom Photo Pack",
        description: "Create a personalized photo pack for your loved ones.",
    },
    GiftCard {
        id: 4,
        title: "Custom Photo Pack",
        description: "Create a personalized photo pack for your loved ones.",
    },
];

pub const FOOTER_AUTHOR: &str = "Ayush";

/// Footer lines for a given year.
pub fn footer_lines(year: i32) -> [String; 2] {
    [
        format!("Made with ♥ by {}", FOOTER_AUTHOR),
        format!("© {} {}. All rights reserved.", year, FOOTER_AUTHOR),
    ]
}
