//! Foodweb Core - Graph engine for food web analysis
//!
//! This crate provides the organism store, the mutation engine that keeps
//! prey indices consistent across removals, and the read-only analyses
//! (apex predators, producers, heights, vore classes) over a [`FoodWeb`].

pub mod analysis;
pub mod error;
pub mod limits;
pub mod organism;
pub mod web;

pub use analysis::{analyze_all, NamedReport, VoreClasses, WebReport};
pub use error::{Error, Result};
pub use limits::MAX_ORGANISM_NAME_LEN;
pub use organism::Organism;
pub use web::FoodWeb;
