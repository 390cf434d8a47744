//! Named seed patterns.
//!
//! Offsets are `(dx, dy)` relative to the placement origin; see
//! [`Grid::place_pattern`](crate::Grid::place_pattern).

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

/// Diagonal spaceship, moves (+1, +1) every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLOCK, BLINKER, TOAD, BEACON];

/// Case-insensitive lookup by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
