mod automaton;
pub mod cell;
mod grid;
mod topology;

pub use automaton::Automaton;
pub use grid::Grid;
pub use topology::{points_up, Topology};
