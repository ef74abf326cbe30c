//! Fixed-size ocean grid with separate fish and algae layers.

use ocean_core::{Algae, Error, Fish, GridConfig, Location, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace};

/// A bounded `height x width` grid. Each cell has an organism slot and a
/// resource slot, stored as two row-major layers so a resource survives
/// any number of organisms passing over it.
#[derive(Debug, Clone)]
pub struct Grid<O = Fish, R = Algae> {
    height: usize,
    width: usize,
    organisms: Vec<Option<O>>,
    resources: Vec<Option<R>>,
    pub(crate) rng: ChaCha8Rng,
}

impl<O, R> Grid<O, R> {
    /// Create a grid whose neighbor shuffle is seeded from OS entropy.
    ///
    /// Panics if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_rng(height, width, ChaCha8Rng::from_entropy())
    }

    /// Create a grid with a reproducible neighbor shuffle
    pub fn with_seed(height: usize, width: usize, seed: u64) -> Self {
        Self::with_rng(height, width, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(height: usize, width: usize, rng: ChaCha8Rng) -> Self {
        if let Err(err) = GridConfig::new(height, width, 0).validate() {
            panic!("{err}");
        }
        Self::build(height, width, rng)
    }

    /// Create a grid from configuration
    #[instrument(skip_all, fields(height = config.height, width = config.width, seed = config.seed))]
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(
            config.height,
            config.width,
            ChaCha8Rng::seed_from_u64(config.seed),
        ))
    }

    fn build(height: usize, width: usize, rng: ChaCha8Rng) -> Self {
        let size = height * width;
        debug!(height, width, "Creating grid");
        Self {
            height,
            width,
            organisms: std::iter::repeat_with(|| None).take(size).collect(),
            resources: std::iter::repeat_with(|| None).take(size).collect(),
            rng,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, loc: Location) -> bool {
        loc.row() < self.height && loc.col() < self.width
    }

    /// Non-panicking bounds check for coordinates that did not come from the grid
    pub fn check(&self, loc: Location) -> Result<()> {
        if self.contains(loc) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                location: loc,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Out-of-range locations are caller bugs
    pub(crate) fn assert_contains(&self, loc: Location) {
        if let Err(err) = self.check(loc) {
            panic!("{err}");
        }
    }

    fn index(&self, loc: Location) -> usize {
        self.assert_contains(loc);
        loc.index(self.width)
    }

    pub fn organism_at(&self, loc: Location) -> Option<&O> {
        self.organisms[self.index(loc)].as_ref()
    }

    pub fn resource_at(&self, loc: Location) -> Option<&R> {
        self.resources[self.index(loc)].as_ref()
    }

    pub fn is_free(&self, loc: Location) -> bool {
        self.organism_at(loc).is_none()
    }

    /// Put `organism` at `loc`, returning whatever was there before
    pub fn place(&mut self, organism: O, loc: Location) -> Option<O> {
        let index = self.index(loc);
        trace!(%loc, "Placing organism");
        self.organisms[index].replace(organism)
    }

    /// Put `resource` at `loc`, returning whatever was there before
    pub fn place_resource(&mut self, resource: R, loc: Location) -> Option<R> {
        let index = self.index(loc);
        trace!(%loc, "Placing resource");
        self.resources[index].replace(resource)
    }

    /// Remove the organism at `loc`. The resource layer is untouched.
    pub fn clear_organism(&mut self, loc: Location) -> Option<O> {
        let index = self.index(loc);
        self.organisms[index].take()
    }

    /// Remove the resource at `loc`. The organism layer is untouched.
    pub fn clear_resource(&mut self, loc: Location) -> Option<R> {
        let index = self.index(loc);
        self.resources[index].take()
    }

    /// Empty the whole organism layer, e.g. when a run is reset
    pub fn clear_all_organisms(&mut self) {
        let cleared = self.organisms.iter_mut().filter_map(Option::take).count();
        debug!(cleared, "Cleared organism layer");
    }

    /// Uniformly random cell, drawn from the grid's random source
    pub fn random_location(&mut self) -> Location {
        let row = self.rng.gen_range(0..self.height);
        let col = self.rng.gen_range(0..self.width);
        Location::new(row, col)
    }

    /// The grid's random source, for collaborators that want their choices
    /// reproducible under the same seed
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Iterator over all locations in row-major order
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.organisms.len()).map(move |i| Location::from_index(i, self.width))
    }

    /// Iterator over occupied organism cells
    pub fn organisms(&self) -> impl Iterator<Item = (Location, &O)> + '_ {
        self.organisms.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref()
                .map(|organism| (Location::from_index(i, self.width), organism))
        })
    }

    /// Iterator over occupied resource cells
    pub fn resources(&self) -> impl Iterator<Item = (Location, &R)> + '_ {
        self.resources.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref()
                .map(|resource| (Location::from_index(i, self.width), resource))
        })
    }

    pub fn organism_count(&self) -> usize {
        self.organisms.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.iter().filter(|slot| slot.is_some()).count()
    }
}
