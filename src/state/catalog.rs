/// Character catalog
///
/// Static, read-only reference list of the characters a booth photo can be
/// decorated with. Identifiers are unique and ascending starting at 1; the
/// selection store's sentinel 0 means "no character". `reset()` on the
/// selection store never touches this table.

/// How a character renders over the photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterKind {
    /// A plain sticker overlay.
    Normal,
    /// A speech bubble that frames the caption text.
    SpeechBubble,
}

impl CharacterKind {
    pub fn label(self) -> &'static str {
        match self {
            CharacterKind::Normal => "Sticker",
            CharacterKind::SpeechBubble => "Speech bubble",
        }
    }
}

/// One selectable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: &'static str,
    pub kind: CharacterKind,
}

/// Every selectable character, in display order.
pub const CHARACTER_CATALOG: [Character; 12] = [
    Character { id: 1, name: "Bear", kind: CharacterKind::Normal },
    Character { id: 2, name: "Bunny", kind: CharacterKind::Normal },
    Character { id: 3, name: "Cat", kind: CharacterKind::Normal },
    Character { id: 4, name: "Dino", kind: CharacterKind::Normal },
    Character { id: 5, name: "Duck", kind: CharacterKind::Normal },
    Character { id: 6, name: "Fox", kind: CharacterKind::Normal },
    Character { id: 7, name: "Panda", kind: CharacterKind::Normal },
    Character { id: 8, name: "Penguin", kind: CharacterKind::Normal },
    Character { id: 9, name: "Round Bubble", kind: CharacterKind::SpeechBubble },
    Character { id: 10, name: "Cloud Bubble", kind: CharacterKind::SpeechBubble },
    Character { id: 11, name: "Star Bubble", kind: CharacterKind::SpeechBubble },
    Character { id: 12, name: "Shout Bubble", kind: CharacterKind::SpeechBubble },
];

/// Look up a catalog entry by its identifier. Returns `None` for the
/// sentinel 0 and for anything outside the table.
pub fn character_by_id(id: u32) -> Option<&'static Character> {
    CHARACTER_CATALOG.iter().find(|c| c.id == id)
}
