//! Core type definitions for the ocean grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A cell coordinate in the ocean
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Location {
    row: usize,
    col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Shift by a signed offset. Returns `None` if either coordinate would go negative
    /// or overflow; the upper bounds are the grid's concern.
    pub fn offset(&self, row_offset: isize, col_offset: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_offset)?,
            col: self.col.checked_add_signed(col_offset)?,
        })
    }

    /// Row-major linear index
    pub fn index(&self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The role a fish plays in the food chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Species {
    Predator,
    Prey,
}

impl Species {
    pub fn is_predator(&self) -> bool {
        matches!(self, Species::Predator)
    }

    pub fn is_prey(&self) -> bool {
        matches!(self, Species::Prey)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Predator => write!(f, "predator"),
            Species::Prey => write!(f, "prey"),
        }
    }
}

/// Unique identifier for a fish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FishId(pub Uuid);

impl FishId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FishId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for a fish living in the organism layer. The decision logic keeps the
/// full state (age, hunger) elsewhere, keyed by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fish {
    pub id: FishId,
    pub species: Species,
}

impl Fish {
    pub fn new(species: Species) -> Self {
        Self {
            id: FishId::new(),
            species,
        }
    }

    pub fn predator() -> Self {
        Self::new(Species::Predator)
    }

    pub fn prey() -> Self {
        Self::new(Species::Prey)
    }
}

/// Stationary food source in the resource layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Algae {
    /// Food value gained by the prey that eats it
    pub energy: u32,
}

impl Algae {
    pub fn new(energy: u32) -> Self {
        Self { energy }
    }
}
