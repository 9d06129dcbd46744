//! Birth/survival rule sets in B/S notation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A rule string did not match `B<digits>/S<digits>`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid rule format: {0:?} (expected B<digits>/S<digits>, e.g. \"B3/S23\")")]
pub struct ParseRuleError(pub String);

/// Immutable birth/survival neighbor-count sets.
///
/// `born` holds the neighbor counts that bring a dead cell to life, `survive`
/// those that keep a live cell alive. Members are stored sorted and
/// deduplicated. The B/S string notation parses digit by digit, so it cannot
/// express counts above 9 even though the triangular topology can produce up
/// to 12 neighbors; such rules can still be built through [`RuleSet::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    born: Vec<u8>,
    survive: Vec<u8>,
}

impl RuleSet {
    pub fn new(born: impl IntoIterator<Item = u8>, survive: impl IntoIterator<Item = u8>) -> Self {
        let mut born: Vec<u8> = born.into_iter().collect();
        let mut survive: Vec<u8> = survive.into_iter().collect();
        born.sort_unstable();
        born.dedup();
        survive.sort_unstable();
        survive.dedup();
        Self { born, survive }
    }

    /// Conway's classic B3/S23.
    pub fn conway() -> Self {
        Self::new([3], [2, 3])
    }

    pub fn born(&self) -> &[u8] {
        &self.born
    }

    pub fn survive(&self) -> &[u8] {
        &self.survive
    }

    /// Whether a dead cell with `count` alive neighbors comes to life.
    pub fn is_born(&self, count: usize) -> bool {
        self.born.iter().any(|&n| usize::from(n) == count)
    }

    /// Whether a live cell with `count` alive neighbors stays alive.
    pub fn survives(&self, count: usize) -> bool {
        self.survive.iter().any(|&n| usize::from(n) == count)
    }
}

impl FromStr for RuleSet {
    type Err = ParseRuleError;

    /// Parse `B<digits>/S<digits>`; either digit run may be empty, as in
    /// `B2/S`. Each digit character independently becomes one rule member.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseRuleError(s.to_owned());
        let rest = s.strip_prefix('B').ok_or_else(bad)?;
        let (born, survive) = rest.split_once("/S").ok_or_else(bad)?;

        let digits = |run: &str| -> Result<Vec<u8>, ParseRuleError> {
            run.chars()
                .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(bad))
                .collect()
        };

        Ok(Self::new(digits(born)?, digits(survive)?))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in &self.born {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in &self.survive {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
