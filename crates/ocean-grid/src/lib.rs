//! Spatial index for the ocean.
//!
//! The grid holds two independent layers, fish and algae, and answers the
//! neighborhood questions organisms ask before they move, feed or breed.

pub mod grid;
pub mod neighbors;
pub mod organism;

pub use grid::Grid;
pub use neighbors::Vicinity;
pub use organism::Organism;
