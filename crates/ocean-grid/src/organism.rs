//! What the grid needs to know about an occupant.

use ocean_core::{Fish, Species};
use std::rc::Rc;

/// An occupant of the organism layer. Species-aware queries only look at
/// `species()`; everything else about the organism belongs to the caller.
pub trait Organism {
    fn species(&self) -> Species;
}

impl Organism for Fish {
    fn species(&self) -> Species {
        self.species
    }
}

impl<T: Organism + ?Sized> Organism for &T {
    fn species(&self) -> Species {
        (**self).species()
    }
}

impl<T: Organism + ?Sized> Organism for Box<T> {
    fn species(&self) -> Species {
        (**self).species()
    }
}

impl<T: Organism + ?Sized> Organism for Rc<T> {
    fn species(&self) -> Species {
        (**self).species()
    }
}
