/// Cell state on the fading life scale.
///
/// A cell holds a value in `{0, 10, ..., 100}`: 0 is fully dead, 100 fully
/// alive, and the intermediate multiples of ten are fade steps reachable only
/// while fading mode is on.
pub type CellState = u8;

/// Fully dead cell.
pub const DEAD: CellState = 0;

/// Fully alive cell.
pub const ALIVE: CellState = 100;

/// Amount a fading cell loses per generation.
pub const FADE_STEP: CellState = 10;

/// Whether a cell counts as alive. Only an exactly-100 cell does; a fading
/// cell is considered dead for neighbor counting and rule matching.
#[inline(always)]
pub fn is_alive(state: CellState) -> bool {
    state == ALIVE
}
