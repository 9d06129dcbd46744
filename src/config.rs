//! Terminal-driver defaults and the predefined rule catalog.

/// Default grid dimensions for the terminal driver.
pub const DEFAULT_HEIGHT: usize = 32;
pub const DEFAULT_WIDTH: usize = 64;

/// Default rule and run length for the terminal driver.
pub const DEFAULT_RULE: &str = "B3/S23";
pub const DEFAULT_GENERATIONS: u32 = 50;

/// Predefined rules for the square grid.
pub const SQUARE_RULES: [&str; 12] = [
    "B3/S23", "B3678/S34678", "B36/S23", "B2/S", "B3/S012345678",
    "B1/S1", "B1357/S1357", "B4678/S35678", "B234/S", "B3/S12345",
    "B37/S12345", "B678/S345678",
];

/// Predefined rules for the triangular grid.
pub const TRIANGLE_RULES: [&str; 4] = ["B2/S23", "B3/S23", "B2/S123", "B1/S"];
