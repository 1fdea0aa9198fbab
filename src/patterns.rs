use crate::WorldOffset;

/// A hardcoded starting pattern, as a list of live cells. `y` grows downwards.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(WorldOffset, WorldOffset)],
}

/// Used when no pattern file is given. A small methuselah that keeps evolving for a while.
pub const DEFAULT_SEED: Pattern = Pattern {
    name: "Default seed",
    cells: &[
        (0, 0),
        (4, 0),
        (5, 0),
        (6, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (5, 1),
        (1, 2),
    ],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Horizontal phase, centered on the origin
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(-1, 0), (0, 0), (1, 0)],
};

/// Travels by `(+1, +1)` every 4 generations
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};
