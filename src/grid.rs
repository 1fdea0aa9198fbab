use std::collections::HashMap;

use crate::WorldOffset;
use crate::cell::Cell;
use crate::cell::Coord;

type Buffer = HashMap<Coord, Cell>;

/// Double-buffered sparse store of the cells worth looking at.
///
/// The current buffer holds every live cell of the current generation plus a dead placeholder for
/// each of their 8 neighbors. Anything not in it is dead. Writes only ever go to the next buffer,
/// which becomes current on [`SparseGrid::commit`].
#[derive(Debug, Default)]
pub struct SparseGrid {
    buffers: [Buffer; 2],

    /// Index of the current buffer in `buffers`. The other one is the next buffer.
    current: usize,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> &Buffer {
        &self.buffers[self.current]
    }

    fn next_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[1 - self.current]
    }

    /// Whether `(x, y)` is alive in the current generation. Untracked coordinates are dead.
    pub fn query(&self, x: WorldOffset, y: WorldOffset) -> bool {
        self.current()
            .get(&Coord::new(x, y))
            .is_some_and(Cell::is_alive)
    }

    /// Whether `(x, y)` is tracked in the current buffer, alive or as a placeholder.
    pub fn contains(&self, x: WorldOffset, y: WorldOffset) -> bool {
        self.current().contains_key(&Coord::new(x, y))
    }

    /// Set `(x, y)` alive in the next buffer, and make sure its neighbors are tracked there too.
    pub fn mark_alive(&mut self, x: WorldOffset, y: WorldOffset) {
        let c = Coord::new(x, y);

        self.next_mut().insert(c, Cell::alive());
        self.touch_neighbors(x, y);
    }

    /// Make sure the neighbors of `(x, y)` are tracked in the next buffer, without touching
    /// `(x, y)` itself. Neighbors that are already present keep their state.
    pub fn touch_neighbors(&mut self, x: WorldOffset, y: WorldOffset) {
        let next = self.next_mut();

        for n in Coord::new(x, y).neighbors() {
            next.entry(n).or_insert_with(Cell::dead);
        }
    }

    /// Publish the next buffer as the current one.
    ///
    /// The stale buffer is cleared but keeps its allocation, so the next generation can reuse it.
    pub fn commit(&mut self) {
        self.current = 1 - self.current;
        self.next_mut().clear();
    }

    /// Drop whatever was written to the next buffer since the last commit.
    pub fn discard_pending(&mut self) {
        self.next_mut().clear();
    }

    /// Forget every cell, in both buffers.
    pub fn clear(&mut self) {
        for buf in &mut self.buffers {
            buf.clear();
        }
    }

    /// Live cells of the current generation, in no particular order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.current()
            .iter()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(&c, _)| c)
    }

    /// Every tracked coordinate of the current generation, live or placeholder.
    pub fn tracked(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.current().iter().map(|(&c, &cell)| (c, cell))
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current().values().filter(|c| c.is_alive()).count()
    }

    /// Number of tracked coordinates in the current generation.
    pub fn tracked_len(&self) -> usize {
        self.current().len()
    }

    /// True when the current generation has no live cell.
    pub fn is_empty(&self) -> bool {
        self.current().values().all(|c| !c.is_alive())
    }

    /// Number of entries already written to the next buffer.
    pub fn pending_len(&self) -> usize {
        self.buffers[1 - self.current].len()
    }
}

#[cfg(test)]
mod test {
    use super::SparseGrid;

    #[test]
    fn empty_grid_is_dead_everywhere() {
        let grid = SparseGrid::new();

        assert!(!grid.query(0, 0));
        assert!(!grid.contains(0, 0));
        assert!(grid.is_empty());
        assert_eq!(grid.tracked_len(), 0);
    }

    #[test]
    fn mark_alive_is_invisible_until_commit() {
        let mut grid = SparseGrid::new();
        grid.mark_alive(1, 2);

        assert!(!grid.query(1, 2));
        assert_eq!(grid.pending_len(), 9);

        grid.commit();

        assert!(grid.query(1, 2));
        assert_eq!(grid.population(), 1);
        assert_eq!(grid.tracked_len(), 9);
        assert_eq!(grid.pending_len(), 0);
    }

    #[test]
    fn mark_alive_tracks_the_whole_neighborhood() {
        let mut grid = SparseGrid::new();
        grid.mark_alive(0, 0);
        grid.commit();

        for x in -1..=1 {
            for y in -1..=1 {
                assert!(grid.contains(x, y), "({x}, {y}) should be tracked");
                assert_eq!(grid.query(x, y), (x, y) == (0, 0));
            }
        }

        assert!(!grid.contains(2, 0));
    }

    #[test]
    fn neighbor_insertion_never_kills_a_live_cell() {
        let mut grid = SparseGrid::new();
        grid.mark_alive(0, 0);
        grid.mark_alive(1, 0);
        grid.touch_neighbors(0, 1);
        grid.commit();

        assert!(grid.query(0, 0));
        assert!(grid.query(1, 0));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn touch_neighbors_leaves_the_center_out() {
        let mut grid = SparseGrid::new();
        grid.touch_neighbors(5, 5);
        grid.commit();

        assert!(!grid.contains(5, 5));
        assert_eq!(grid.tracked_len(), 8);
        assert!(grid.is_empty());
    }

    #[test]
    fn commit_discards_the_old_generation() {
        let mut grid = SparseGrid::new();
        grid.mark_alive(0, 0);
        grid.commit();

        grid.mark_alive(10, 10);
        grid.commit();

        assert!(!grid.query(0, 0));
        assert!(!grid.contains(0, 0));
        assert!(grid.query(10, 10));
        assert_eq!(grid.live_cells().count(), 1);
    }

    #[test]
    fn discard_pending_keeps_the_current_generation() {
        let mut grid = SparseGrid::new();
        grid.mark_alive(0, 0);
        grid.commit();
        grid.mark_alive(5, 5);

        grid.discard_pending();
        assert_eq!(grid.pending_len(), 0);

        grid.commit();
        assert!(!grid.query(5, 5));
        assert_eq!(grid.tracked_len(), 0);
    }

    #[test]
    fn clear_drops_both_buffers() {
        let mut grid = SparseGrid::new();
        grid.mark_alive(0, 0);
        grid.commit();
        grid.mark_alive(3, 3);

        grid.clear();

        assert_eq!(grid.tracked_len(), 0);
        assert_eq!(grid.pending_len(), 0);
    }
}
