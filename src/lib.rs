//! Generalized B/S cellular automata on square and triangular grids.
//!
//! The engine advances a fixed-size grid of cells one generation at a time
//! under a user-supplied birth/survival rule set. Two tessellations are
//! supported: an orthogonal square grid with the 8-neighbor Moore
//! neighborhood and a packed triangular grid where each cell's 12-neighbor
//! set depends on which way its triangle points. An optional fading mode
//! replaces instant death with a ten-step decay gradient.

pub mod config;
pub mod rules;
pub mod simulation;

pub use rules::{ParseRuleError, RuleSet};
pub use simulation::{Automaton, Topology};
