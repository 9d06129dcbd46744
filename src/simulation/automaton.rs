use std::fmt;
use std::mem;

use rand::Rng;

use crate::rules::RuleSet;
use crate::simulation::cell::{CellState, ALIVE, DEAD, FADE_STEP};
use crate::simulation::grid::Grid;
use crate::simulation::topology::Topology;

/// A generalized life automaton on a fixed tessellation.
///
/// Owns the authoritative `current` grid and a `next` scratch buffer.
/// [`advance_generation`](Self::advance_generation) computes `next` from
/// `current` cell by cell, promotes it, and starts a fresh all-dead scratch
/// buffer. The rule set and topology are fixed for the automaton's lifetime.
///
/// Not reentrant: every mutating operation takes `&mut self`, so access is
/// serialized structurally. The engine has no timing of its own; an external
/// driver calls `advance_generation` once per tick.
pub struct Automaton {
    height: usize,
    width: usize,
    rules: RuleSet,
    topology: Topology,
    current: Grid,
    next: Grid,
    fading: bool,
}

impl Automaton {
    /// Create an all-dead automaton. Dimensions must be positive.
    pub fn new(topology: Topology, rules: RuleSet, height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be positive");
        Self {
            height,
            width,
            rules,
            topology,
            current: Grid::dead(height, width),
            next: Grid::dead(height, width),
            fading: false,
        }
    }

    /// Square-grid automaton with the 8-neighbor Moore neighborhood.
    pub fn square(rules: RuleSet, height: usize, width: usize) -> Self {
        Self::new(Topology::Square, rules, height, width)
    }

    /// Triangular-grid automaton with the orientation-dependent 12-neighbor
    /// neighborhood.
    pub fn triangle(rules: RuleSet, height: usize, width: usize) -> Self {
        Self::new(Topology::Triangle, rules, height, width)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// State of the cell at `(x, y)` in the current generation. Out-of-range
    /// coordinates panic.
    pub fn state(&self, x: usize, y: usize) -> CellState {
        self.current.get(x, y)
    }

    /// Number of fully alive cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Alive-neighbor count of `(x, y)` under this automaton's topology.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> usize {
        self.topology.count_alive_neighbors(&self.current, x, y)
    }

    /// Toggle a cell between fully alive and fully dead; a mid-fade cell
    /// toggles to fully alive. The write goes to both buffers so an edit made
    /// between ticks survives until the next full computation overwrites it.
    pub fn toggle(&mut self, x: usize, y: usize) {
        let state = if self.current.get(x, y) == ALIVE {
            DEAD
        } else {
            ALIVE
        };
        self.current.set(x, y, state);
        self.next.set(x, y, state);
    }

    /// Set every cell to alive or dead with equal probability. Some rules
    /// never get going from a hand-drawn seed, so this is the usual start.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Seeded variant of [`randomize`](Self::randomize).
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        self.current.randomize(rng);
    }

    /// Advance one generation: compute `next` from `current` under the
    /// active mode, promote it, and start a fresh all-dead scratch buffer.
    pub fn advance_generation(&mut self) {
        if self.fading {
            self.step_fading();
        } else {
            self.step_instant();
        }
        self.current = mem::replace(&mut self.next, Grid::dead(self.height, self.width));
    }

    /// Binary transition: cells are born, survive, or die outright.
    fn step_instant(&mut self) {
        for x in 0..self.height {
            for y in 0..self.width {
                let state = self.current.get(x, y);
                if state == DEAD {
                    if self.rules.is_born(self.count_alive_neighbors(x, y)) {
                        self.next.set(x, y, ALIVE);
                    }
                } else if state == ALIVE {
                    let next = if self.rules.survives(self.count_alive_neighbors(x, y)) {
                        ALIVE
                    } else {
                        DEAD
                    };
                    self.next.set(x, y, next);
                }
            }
        }
    }

    /// Fading transition: a dying cell steps down the fade scale by ten per
    /// generation instead of dropping straight to dead, and a mid-fade cell
    /// whose neighbor count matches the born rule jumps back to fully alive.
    fn step_fading(&mut self) {
        for x in 0..self.height {
            for y in 0..self.width {
                let state = self.current.get(x, y);
                let count = self.count_alive_neighbors(x, y);
                let next = if state == ALIVE {
                    if self.rules.survives(count) {
                        ALIVE
                    } else {
                        ALIVE - FADE_STEP
                    }
                } else if self.rules.is_born(count) {
                    ALIVE
                } else if state == DEAD {
                    DEAD
                } else {
                    state - FADE_STEP
                };
                self.next.set(x, y, next);
            }
        }
    }

    /// Kill every cell; rules, topology and dimensions are preserved.
    pub fn reset(&mut self) {
        self.current = Grid::dead(self.height, self.width);
        self.next = Grid::dead(self.height, self.width);
    }

    /// Switch between instant death and ten-step fading. Turning fading off
    /// snaps every mid-fade cell to dead in both buffers, so later
    /// generations run on purely binary states.
    pub fn set_fading(&mut self, enabled: bool) {
        self.fading = enabled;
        if !enabled {
            self.delete_non_binary();
        }
    }

    fn delete_non_binary(&mut self) {
        for x in 0..self.height {
            for y in 0..self.width {
                let state = self.current.get(x, y);
                if state != ALIVE && state != DEAD {
                    self.current.set(x, y, DEAD);
                    self.next.set(x, y, DEAD);
                }
            }
        }
    }
}

/// Diagnostic dump: per-cell alive-neighbor counts, row-major, one row per
/// line. Counts, not states.
impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.height {
            for y in 0..self.width {
                write!(f, "{}", self.count_alive_neighbors(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conway(height: usize, width: usize) -> Automaton {
        Automaton::square(RuleSet::conway(), height, width)
    }

    #[test]
    fn test_new_automaton_is_dead_and_instant() {
        let automaton = conway(4, 6);
        assert_eq!(automaton.height(), 4);
        assert_eq!(automaton.width(), 6);
        assert_eq!(automaton.population(), 0);
        assert!(!automaton.is_fading());
        assert_eq!(automaton.topology(), Topology::Square);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_zero_dimension_panics() {
        conway(0, 5);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut automaton = conway(3, 3);
        automaton.toggle(1, 1);
        assert_eq!(automaton.state(1, 1), ALIVE);
        automaton.toggle(1, 1);
        assert_eq!(automaton.state(1, 1), DEAD);
        automaton.toggle(1, 1);
        assert_eq!(automaton.state(1, 1), ALIVE);
    }

    #[test]
    fn test_toggle_mid_fade_goes_fully_alive() {
        let mut automaton = conway(3, 3);
        automaton.set_fading(true);
        automaton.toggle(1, 1);
        // A lone cell never survives under B3/S23, so it starts fading.
        automaton.advance_generation();
        assert_eq!(automaton.state(1, 1), 90);
        automaton.toggle(1, 1);
        assert_eq!(automaton.state(1, 1), ALIVE);
    }

    #[test]
    fn test_reset_preserves_configuration() {
        let mut automaton = conway(4, 4);
        automaton.toggle(0, 0);
        automaton.toggle(2, 3);
        automaton.reset();
        assert_eq!(automaton.population(), 0);
        assert_eq!(automaton.height(), 4);
        assert_eq!(automaton.width(), 4);
        assert_eq!(automaton.rules().born(), &[3]);
        assert_eq!(automaton.rules().survive(), &[2, 3]);
    }

    #[test]
    fn test_display_dumps_neighbor_counts() {
        let mut automaton = conway(3, 3);
        automaton.toggle(1, 1);
        // Every cell around the center sees one alive neighbor; the center
        // itself sees none.
        assert_eq!(automaton.to_string(), "111\n101\n111\n");
    }

    #[test]
    fn test_underpopulated_cell_dies_instantly() {
        let mut automaton = conway(3, 3);
        automaton.toggle(1, 1);
        automaton.advance_generation();
        assert_eq!(automaton.state(1, 1), DEAD);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let mut automaton = conway(4, 4);
        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            automaton.toggle(x, y);
        }
        automaton.advance_generation();
        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(automaton.state(x, y), ALIVE);
        }
        assert_eq!(automaton.population(), 4);
    }
}
