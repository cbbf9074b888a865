//! Food web store and mutation engine
//!
//! # Indices are ephemeral
//!
//! An organism is identified only by its position in the web. Every
//! successful [`FoodWeb::remove_organism`] compacts the sequence, so any
//! index at or above the removed position now names a different organism
//! (or nothing). Callers must re-fetch indices after a removal; nothing in
//! this crate hands out stable handles.

use crate::error::{Error, Result};
use crate::organism::Organism;
use serde::Serialize;

/// An ordered collection of organisms and their prey edges
///
/// Invariants kept by every operation:
/// - every prey index is `< organism_count()`
/// - no organism eats itself
/// - no organism lists the same prey twice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FoodWeb {
    organisms: Vec<Organism>,
}

impl FoodWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organism_count(&self) -> usize {
        self.organisms.len()
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Name of the organism at `index`
    pub fn name_of(&self, index: usize) -> Result<&str> {
        self.organism(index).map(Organism::name)
    }

    pub fn organism(&self, index: usize) -> Result<&Organism> {
        self.organisms.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.organisms.len(),
        })
    }

    pub fn prey_of(&self, index: usize) -> Result<&[usize]> {
        self.organism(index).map(Organism::prey)
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    /// Iterate organisms with their current index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Organism)> {
        self.organisms.iter().enumerate()
    }

    /// Iterate every `(predator, prey)` edge in storage order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .flat_map(|(i, org)| org.prey().iter().map(move |&p| (i, p)))
    }

    /// Number of distinct predators that eat each organism
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut eaten_by = vec![0; self.organisms.len()];
        for (_, prey) in self.edges() {
            eaten_by[prey] += 1;
        }
        eaten_by
    }

    /// Check the index, self-loop and duplicate invariants
    pub fn is_valid(&self) -> bool {
        let count = self.organisms.len();
        self.iter().all(|(i, org)| {
            let prey = org.prey();
            prey.iter().all(|&p| p < count && p != i)
                && prey
                    .iter()
                    .enumerate()
                    .all(|(j, p)| !prey[..j].contains(p))
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an organism that eats nothing and return its index
    ///
    /// Names are not checked for uniqueness. Names over 19 characters are
    /// truncated.
    pub fn add_organism(&mut self, name: impl Into<String>) -> usize {
        let organism = Organism::new(name);
        let index = self.organisms.len();
        tracing::debug!("Adding organism {} at index {}", organism.name(), index);
        self.organisms.push(organism);
        index
    }

    /// Record that `predator` eats `prey`
    ///
    /// Fails without touching the web if either index is out of range, the
    /// two are equal, or the edge already exists.
    pub fn add_relation(&mut self, predator: usize, prey: usize) -> Result<()> {
        self.check_index(predator)?;
        self.check_index(prey)?;
        if predator == prey {
            return Err(Error::SelfLoop(predator));
        }

        let organism = &mut self.organisms[predator];
        if organism.eats(prey) {
            return Err(Error::DuplicateEdge { predator, prey });
        }
        organism.push_prey(prey);

        tracing::debug!("Added relation: {} eats {}", predator, prey);
        Ok(())
    }

    /// Remove the organism at `index` and relink every remaining edge
    ///
    /// Edges that pointed at `index` are dropped, edges above it shift down
    /// by one, and later organisms move down one position. All previously
    /// held indices `>= index` are invalid afterwards. Returns the removed
    /// organism.
    pub fn remove_organism(&mut self, index: usize) -> Result<Organism> {
        if self.organisms.is_empty() {
            return Err(Error::EmptyWeb);
        }
        self.check_index(index)?;

        let removed = self.organisms.remove(index);
        for organism in self.organisms.iter_mut() {
            organism.relink_after_removal(index);
        }

        tracing::debug!(
            "Removed organism {} from index {}, {} remain",
            removed.name(),
            index,
            self.organisms.len()
        );
        debug_assert!(self.is_valid());
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.organisms.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                count: self.organisms.len(),
            })
        }
    }
}
