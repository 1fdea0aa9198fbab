use std::io::Read;

use tracing::debug;
use tracing::trace;

use crate::WorldOffset;
use crate::cell::Coord;
use crate::grid::SparseGrid;
use crate::life106;
use crate::life106::LoadError;
use crate::render::Drawable;
use crate::render::cell_color;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// A Game of Life universe on the unbounded plane.
///
/// Only live cells and their immediate neighbors are ever stored, so both memory and the cost of
/// [`World::update`] scale with the population rather than with the area it spans.
#[derive(Debug, Default)]
pub struct World {
    grid: SparseGrid,

    /// Life rules
    rules: RuleSet,

    /// Number of generations computed since the world was seeded
    generation: u64,

    // Scratch space for `update`, kept around to reuse the allocations
    births: Vec<Coord>,
    deaths: Vec<Coord>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            grid: SparseGrid::new(),
            rules: B3S23,
            generation: 0,
            births: Vec::new(),
            deaths: Vec::new(),
        }
    }

    /// Create a world whose first generation is made of `cells`.
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        let mut world = Self::new();
        world.seed(cells);

        world
    }

    fn set(&mut self, x: WorldOffset, y: WorldOffset) {
        self.grid.mark_alive(x, y);
    }

    /// Replace the current generation with `cells`.
    pub fn seed<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        self.grid.discard_pending();

        for c in cells {
            let Coord { x, y } = c.into();
            self.set(x, y);
        }

        self.grid.commit();
        self.generation = 0;

        debug!(population = self.population(), "Seeded world");
    }

    /// Replace the current generation with the pattern read from `reader`.
    ///
    /// On failure the world is left exactly as it was. Returns the number of cells read.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<usize, LoadError> {
        let cells = life106::read_from(reader)?;
        let n = cells.len();

        self.seed(cells);

        Ok(n)
    }

    /// Forget every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Advance the world by one generation.
    pub fn update(&mut self) {
        // All reads go to the current buffer and all writes to the next one, so the order in which
        // cells are visited doesn't matter.
        let mut births = std::mem::take(&mut self.births);
        let mut deaths = std::mem::take(&mut self.deaths);
        births.clear();
        deaths.clear();

        // The next generation is built from the rule alone
        self.grid.discard_pending();

        for (c, cell) in self.grid.tracked() {
            let alive = cell.is_alive();
            let next = self.rules.next_state(alive, self.live_neighbors(c));

            match (alive, next) {
                (_, true) => births.push(c),
                (true, false) => deaths.push(c),

                // Placeholders with nothing going on around them are dropped here. They come back
                // if a live neighbor touches them.
                (false, false) => {}
            }
        }

        for &Coord { x, y } in &births {
            self.grid.mark_alive(x, y);
        }

        for &Coord { x, y } in &deaths {
            self.grid.touch_neighbors(x, y);
        }

        self.grid.commit();
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = births.len(),
            tracked = self.grid.tracked_len(),
            "Stepped"
        );

        self.births = births;
        self.deaths = deaths;
    }

    /// Advance the world by `n` generations.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.update();
        }
    }

    fn live_neighbors(&self, c: Coord) -> u8 {
        c.neighbors()
            .into_iter()
            .filter(|n| self.grid.query(n.x, n.y))
            .count() as u8
    }

    /// Whether `(x, y)` is alive in the current generation.
    pub fn query(&self, x: WorldOffset, y: WorldOffset) -> bool {
        self.grid.query(x, y)
    }

    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// One [`Drawable`] per live cell of the current generation. Dead cells are never emitted;
    /// they are the background.
    pub fn drawables(&self) -> impl Iterator<Item = Drawable> + '_ {
        self.grid.live_cells().map(|position| Drawable {
            position,
            color: cell_color(true),
        })
    }
}
