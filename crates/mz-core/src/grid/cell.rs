//! Map cell tags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Tag set carried by a grid cell
    ///
    /// An empty set is an open, passable cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellTags: u8 {
        const WALL = 0x01;
        const DOOR = 0x02;
        const ENTRANCE = 0x04;
        const EXIT = 0x08;
        const HAZARD = 0x10;
        const COLLECTIBLE = 0x20;
    }
}

// Manual serde impl for CellTags
impl Serialize for CellTags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(CellTags::from_bits_truncate(bits))
    }
}

/// Tag names in the order a renderer joins them into class names
const TAG_NAMES: [(CellTags, &str); 6] = [
    (CellTags::DOOR, "door"),
    (CellTags::ENTRANCE, "entrance"),
    (CellTags::EXIT, "exit"),
    (CellTags::HAZARD, "hazard"),
    (CellTags::COLLECTIBLE, "collectible"),
    (CellTags::WALL, "wall"),
];

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell {
    pub tags: CellTags,
}

impl Cell {
    /// Open cell with no tags
    pub const fn open() -> Self {
        Self {
            tags: CellTags::empty(),
        }
    }

    pub const fn wall() -> Self {
        Self {
            tags: CellTags::WALL,
        }
    }

    /// Door marking the way in (bottom boundary)
    pub const fn entrance() -> Self {
        Self {
            tags: CellTags::DOOR.union(CellTags::ENTRANCE),
        }
    }

    /// Door marking the way out (top boundary)
    pub const fn exit() -> Self {
        Self {
            tags: CellTags::DOOR.union(CellTags::EXIT),
        }
    }

    /// Hazards are obstacles too, hence the wall tag.
    pub const fn hazard() -> Self {
        Self {
            tags: CellTags::HAZARD.union(CellTags::WALL),
        }
    }

    pub const fn collectible() -> Self {
        Self {
            tags: CellTags::COLLECTIBLE,
        }
    }

    pub const fn is_open(&self) -> bool {
        self.tags.is_empty()
    }

    pub const fn has(&self, tags: CellTags) -> bool {
        self.tags.contains(tags)
    }

    /// Whether a walker may step onto this cell.
    ///
    /// Doors always pass. Otherwise any tag except `COLLECTIBLE` blocks.
    pub const fn is_passable(&self) -> bool {
        self.tags.contains(CellTags::DOOR)
            || self.tags.difference(CellTags::COLLECTIBLE).is_empty()
    }

    /// Tag names joined by spaces, e.g. `"door exit"`; empty for open cells
    pub fn class_names(&self) -> String {
        TAG_NAMES
            .iter()
            .filter(|(tag, _)| self.tags.contains(*tag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get the display character for this cell
    pub const fn symbol(&self) -> char {
        let t = self.tags;
        if t.contains(CellTags::ENTRANCE) {
            '>'
        } else if t.contains(CellTags::EXIT) {
            '<'
        } else if t.contains(CellTags::DOOR) {
            '+'
        } else if t.contains(CellTags::HAZARD) {
            '&'
        } else if t.contains(CellTags::COLLECTIBLE) {
            '*'
        } else if t.contains(CellTags::WALL) {
            '#'
        } else {
            '.'
        }
    }
}
