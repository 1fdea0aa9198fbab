/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// Bit `i` of either half is set if `i` live neighbors cause a birth (resp. survival).
///
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
/// ```
///
/// Only [`B3S23`] is exposed.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub const fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub const fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a cell is alive in the next generation, given its current state and its number of
    /// live neighbors.
    pub const fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        if live_neighbors > 8 {
            return false;
        }

        let n = 1 << live_neighbors;
        let mask = if alive {
            self.survivals()
        } else {
            self.births()
        };

        mask & n == n
    }
}

#[cfg(test)]
mod test {
    use super::B3S23;

    #[test]
    fn b3s23_table() {
        for n in 0..=8 {
            assert_eq!(B3S23.next_state(false, n), n == 3, "birth with {n} neighbors");
            assert_eq!(
                B3S23.next_state(true, n),
                n == 2 || n == 3,
                "survival with {n} neighbors"
            );
        }
    }

    #[test]
    fn masks() {
        assert_eq!(B3S23.births(), 0b1000);
        assert_eq!(B3S23.survivals(), 0b1100);
    }
}
