//! Neighborhood queries.
//!
//! Every list returned here comes out of [`Grid::neighbors_of`], which shuffles
//! exactly once per call. Callers that need a single cell take the first element
//! and get a uniform pick among the qualifying cells.

use crate::grid::Grid;
use crate::organism::Organism;
use ocean_core::{Location, Species};
use rand::seq::SliceRandom;
use tracing::trace;

/// Row and column offsets of the eight surrounding cells
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How a two-hop query treats candidates that border a given species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vicinity {
    /// Drop candidates bordering the species
    Avoid,
    /// Keep only candidates bordering the species
    Seek,
}

impl<O, R> Grid<O, R> {
    /// In-bounds cells around `loc`, in fixed order
    fn adjacent(&self, loc: Location) -> impl Iterator<Item = Location> + '_ {
        OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| loc.offset(dr, dc))
            .filter(move |&next| self.contains(next))
    }

    /// The up to eight cells surrounding `loc`, clipped at the edges and shuffled
    pub fn neighbors_of(&mut self, loc: Location) -> Vec<Location> {
        self.assert_contains(loc);
        let mut neighbors: Vec<Location> = self.adjacent(loc).collect();
        neighbors.shuffle(&mut self.rng);
        neighbors
    }

    /// Neighbors of `loc` with no organism in them
    pub fn free_neighbors(&mut self, loc: Location) -> Vec<Location> {
        let mut neighbors = self.neighbors_of(loc);
        neighbors.retain(|&next| self.is_free(next));
        neighbors
    }

    pub fn first_free_neighbor(&mut self, loc: Location) -> Option<Location> {
        self.free_neighbors(loc).into_iter().next()
    }

    /// Any neighbor, occupied or not. `None` only on a 1x1 grid.
    pub fn random_neighbor(&mut self, loc: Location) -> Option<Location> {
        self.neighbors_of(loc).into_iter().next()
    }
}

impl<O: Organism, R> Grid<O, R> {
    /// Free neighbors of `loc`, filtered by whether they border `species`.
    ///
    /// A candidate borders `species` if any of its own neighbors other than
    /// `loc` holds an organism of that species. `loc` itself never counts, so
    /// the organism asking does not disqualify (or qualify) its own surroundings.
    pub fn free_neighbors_near(
        &mut self,
        loc: Location,
        species: Species,
        vicinity: Vicinity,
    ) -> Vec<Location> {
        let candidates = self.free_neighbors(loc);
        let total = candidates.len();
        let selected: Vec<Location> = candidates
            .into_iter()
            .filter(|&candidate| {
                let borders = self.borders_species(candidate, loc, species);
                match vicinity {
                    Vicinity::Avoid => !borders,
                    Vicinity::Seek => borders,
                }
            })
            .collect();
        trace!(%loc, %species, ?vicinity, total, selected = selected.len(), "Two-hop query");
        selected
    }

    fn borders_species(&self, cell: Location, origin: Location, species: Species) -> bool {
        self.adjacent(cell)
            .filter(|&next| next != origin)
            .any(|next| {
                self.organism_at(next)
                    .is_some_and(|organism| organism.species() == species)
            })
    }

    /// Free neighbors of `loc` that no predator other than one at `loc` can reach
    pub fn predator_free_neighbors(&mut self, loc: Location) -> Vec<Location> {
        self.free_neighbors_near(loc, Species::Predator, Vicinity::Avoid)
    }

    pub fn first_predator_free_neighbor(&mut self, loc: Location) -> Option<Location> {
        self.predator_free_neighbors(loc).into_iter().next()
    }

    /// Free neighbors of `loc` next to prey other than any at `loc`
    pub fn prey_adjacent_neighbors(&mut self, loc: Location) -> Vec<Location> {
        self.free_neighbors_near(loc, Species::Prey, Vicinity::Seek)
    }

    pub fn first_prey_adjacent_neighbor(&mut self, loc: Location) -> Option<Location> {
        self.prey_adjacent_neighbors(loc).into_iter().next()
    }
}
