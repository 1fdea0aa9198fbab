use crate::WorldOffset;

/// Offsets of the 8 Chebyshev neighbors, row by row, skipping the center.
const NEIGHBOR_OFFSETS: [(WorldOffset, WorldOffset); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell position on the unbounded plane.
///
/// Equality and hashing are by exact value. Neighbor arithmetic wraps at the edges of the
/// `WorldOffset` range, which keeps every grid operation total.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: WorldOffset,
    pub y: WorldOffset,
}

impl Coord {
    pub const fn new(x: WorldOffset, y: WorldOffset) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`, wrapping at the extremes.
    pub const fn offset(&self, dx: WorldOffset, dy: WorldOffset) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The Moore neighborhood of this coordinate, excluding itself.
    pub fn neighbors(&self) -> [Coord; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(WorldOffset, WorldOffset)> for Coord {
    fn from((x, y): (WorldOffset, WorldOffset)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (WorldOffset, WorldOffset) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

/// State attached to a tracked [`Coord`].
///
/// A dead `Cell` only ever exists as a frontier placeholder; coordinates that aren't tracked at all
/// are dead too.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const fn alive() -> Self {
        Self { alive: true }
    }

    pub const fn dead() -> Self {
        Self { alive: false }
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }
}
