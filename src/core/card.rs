// Card
// Host-owned deck element restyled by the toggler

use super::element::{ClassList, Element, ACTIVE_CLASS, COLLAPSED_WIDTH};

/// Class every card carries regardless of state
pub const CARD_CLASS: &str = "card";

/// A single card in the deck
#[derive(Debug, Clone)]
pub struct Card {
    /// Stable identifier from the deck file
    pub id: String,

    /// Heading shown on the card at every width
    pub title: String,

    /// Text shown only while the card is expanded
    pub body: String,

    /// Current width in host units
    pub width: u16,

    /// Class names interpreted by the renderer
    pub classes: ClassList,
}

impl Card {
    /// Create a collapsed, inactive card
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        let mut classes = ClassList::new();
        classes.add(CARD_CLASS);

        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            width: COLLAPSED_WIDTH,
            classes,
        }
    }

    pub fn is_active(&self) -> bool {
        self.classes.contains(ACTIVE_CLASS)
    }
}

impl Element for Card {
    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn set_active(&mut self, active: bool) {
        if active {
            self.classes.add(ACTIVE_CLASS);
        } else {
            self.classes.remove(ACTIVE_CLASS);
        }
    }
}
