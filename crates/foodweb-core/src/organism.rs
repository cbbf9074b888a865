//! Organism (node) records

use crate::limits::cap_organism_name;
use serde::Serialize;

/// An organism in the food web (a node)
///
/// An organism has no identity of its own: it is known only by its
/// position in the owning [`FoodWeb`](crate::FoodWeb).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organism {
    /// Display name, at most 19 characters
    name: String,

    /// Indices of the organisms this one eats, in insertion order
    prey: Vec<usize>,
}

impl Organism {
    /// Create an organism that eats nothing
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: cap_organism_name(name),
            prey: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prey indices, valid only until the next removal from the web
    pub fn prey(&self) -> &[usize] {
        &self.prey
    }

    pub fn num_prey(&self) -> usize {
        self.prey.len()
    }

    /// A producer eats nothing
    pub fn is_producer(&self) -> bool {
        self.prey.is_empty()
    }

    pub fn eats(&self, index: usize) -> bool {
        self.prey.contains(&index)
    }

    pub(crate) fn push_prey(&mut self, index: usize) {
        self.prey.push(index);
    }

    /// Drop edges to `removed` and shift edges above it down by one
    pub(crate) fn relink_after_removal(&mut self, removed: usize) {
        self.prey.retain(|&p| p != removed);
        for p in self.prey.iter_mut() {
            if *p > removed {
                *p -= 1;
            }
        }
    }
}
