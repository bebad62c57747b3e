use serde::{Deserialize, Serialize};
use std::fmt;

/// Color of a single vertex.
///
/// `Reusable(1)` is the distinguished cheap color (reusable at any distance
/// >= 2); `Reusable(c)` for larger `c` demands distance > `c` between
/// same-colored vertices. `Unique` marks a vertex that gave up on reuse and
/// consumed a uniquely used color — those are counted globally rather than
/// materialized as ever-growing numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Uncolored,
    Reusable(u32),
    Unique,
}

impl Color {
    pub fn is_colored(self) -> bool {
        !matches!(self, Color::Uncolored)
    }

    /// Numeric id of a reusable color, `None` otherwise.
    pub fn reusable_id(self) -> Option<u32> {
        match self {
            Color::Reusable(id) => Some(id),
            _ => None,
        }
    }

    /// Id this color contributes to a conflict probe: the uncolored sentinel
    /// maps to 0, reusable colors to their id, and unique colors to nothing
    /// (a color used exactly once can never collide).
    pub fn conflict_id(self) -> Option<u32> {
        match self {
            Color::Uncolored => Some(0),
            Color::Reusable(id) => Some(id),
            Color::Unique => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Uncolored => write!(f, "0"),
            Color::Reusable(id) => write!(f, "{}", id),
            Color::Unique => write!(f, "unique"),
        }
    }
}
