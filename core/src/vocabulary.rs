use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Identifier of one symbol kind, an index into the board's [`Vocabulary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolKind(pub u16);

impl SymbolKind {
    /// Fallback kind used when a board is generated from an empty vocabulary.
    pub const DEFAULT: SymbolKind = SymbolKind(0);
}

const CLASSIC_NAMES: [&str; 50] = [
    "star",
    "diamond",
    "dollar",
    "heart",
    "bolt",
    "leaf",
    "sun",
    "moon",
    "flame",
    "hare",
    "tortoise",
    "pawprint",
    "ant",
    "car",
    "airplane",
    "bicycle",
    "bus",
    "tram",
    "cloud",
    "umbrella",
    "forward",
    "backward",
    "magnifier",
    "clock",
    "alarm",
    "bell",
    "message",
    "bubble",
    "envelope",
    "document",
    "folder",
    "scissors",
    "bag",
    "cart",
    "creditcard",
    "bookmark",
    "book",
    "globe",
    "house",
    "building",
    "map",
    "flag",
    "pencil",
    "eyeglasses",
    "music-note",
    "guitar",
    "walker",
    "play",
    "stop",
    "record",
];

/// Ordered list of symbol kind names a board draws from. The kind id of a
/// name is its position in the list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    names: Vec<String>,
}

impl Vocabulary {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The 50-icon vocabulary of the classic scratch card.
    pub fn classic() -> Self {
        Self::new(CLASSIC_NAMES.iter().map(ToString::to_string).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn kind_count(&self) -> u16 {
        self.names.len().try_into().unwrap()
    }

    pub fn name(&self, kind: SymbolKind) -> Option<&str> {
        self.names.get(usize::from(kind.0)).map(String::as_str)
    }

    pub fn contains(&self, kind: SymbolKind) -> bool {
        usize::from(kind.0) < self.names.len()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::classic()
    }
}
