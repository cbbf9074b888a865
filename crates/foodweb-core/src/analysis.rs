//! Read-only analyses over a food web
//!
//! Every list produced here is in ascending organism index order. Reports
//! hold indices; resolve them to names with [`WebReport::named`] while the
//! web they came from is still unmodified.

use crate::error::{Error, Result};
use crate::web::FoodWeb;
use serde::Serialize;

/// Organisms nobody eats
pub fn apex_predators(web: &FoodWeb) -> Vec<usize> {
    let mut is_eaten = vec![false; web.len()];
    for (_, prey) in web.edges() {
        is_eaten[prey] = true;
    }
    (0..web.len()).filter(|&i| !is_eaten[i]).collect()
}

/// Organisms that eat nothing
pub fn producers(web: &FoodWeb) -> Vec<usize> {
    web.iter()
        .filter(|(_, org)| org.is_producer())
        .map(|(i, _)| i)
        .collect()
}

/// Organisms with the most prey
///
/// The maximum starts at zero, so a web without edges lists everyone and
/// an empty web lists nobody.
pub fn most_flexible_eaters(web: &FoodWeb) -> Vec<usize> {
    let counts: Vec<usize> = web.organisms().iter().map(|o| o.num_prey()).collect();
    all_at_max(&counts)
}

/// Organisms eaten by the most predators
pub fn tastiest_food(web: &FoodWeb) -> Vec<usize> {
    all_at_max(&web.in_degrees())
}

fn all_at_max(values: &[usize]) -> Vec<usize> {
    let max = values.iter().copied().max().unwrap_or(0);
    (0..values.len()).filter(|&i| values[i] == max).collect()
}

/// Length of the longest prey chain from each organism down to a producer
///
/// Iterative relaxation: raise a predator above any prey at or above it
/// until a full pass over the edges changes nothing. In an acyclic web no
/// height can reach the organism count, so reaching it means a cycle and
/// yields [`Error::Cycle`].
pub fn heights(web: &FoodWeb) -> Result<Vec<usize>> {
    let n = web.len();
    let mut heights = vec![0usize; n];
    let mut passes = 0usize;

    let mut changed = true;
    while changed {
        changed = false;
        passes += 1;
        for (predator, prey) in web.edges() {
            if heights[predator] <= heights[prey] {
                heights[predator] = heights[prey] + 1;
                if heights[predator] >= n {
                    tracing::debug!(
                        "Height relaxation exceeded {} at organism {}",
                        n,
                        predator
                    );
                    return Err(Error::Cycle);
                }
                changed = true;
            }
        }
    }

    tracing::debug!("Heights converged after {} passes", passes);
    Ok(heights)
}

/// Organisms grouped by what they eat relative to the producers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoreClasses<T> {
    /// Eat nothing
    pub producers: Vec<T>,
    /// Eat only producers
    pub herbivores: Vec<T>,
    /// Eat producers and non-producers
    pub omnivores: Vec<T>,
    /// Eat no producers
    pub carnivores: Vec<T>,
}

impl<T> VoreClasses<T> {
    fn map<U>(&self, f: impl Fn(&T) -> U) -> VoreClasses<U> {
        VoreClasses {
            producers: self.producers.iter().map(&f).collect(),
            herbivores: self.herbivores.iter().map(&f).collect(),
            omnivores: self.omnivores.iter().map(&f).collect(),
            carnivores: self.carnivores.iter().map(&f).collect(),
        }
    }
}

/// Classify every organism as exactly one of producer, herbivore,
/// omnivore or carnivore
pub fn vore_classes(web: &FoodWeb) -> VoreClasses<usize> {
    let is_producer: Vec<bool> = web.organisms().iter().map(|o| o.is_producer()).collect();
    let mut classes = VoreClasses::default();

    for (i, org) in web.iter() {
        if org.is_producer() {
            classes.producers.push(i);
            continue;
        }
        let eats_producers = org.prey().iter().any(|&p| is_producer[p]);
        let eats_others = org.prey().iter().any(|&p| !is_producer[p]);
        match (eats_producers, eats_others) {
            (true, false) => classes.herbivores.push(i),
            (true, true) => classes.omnivores.push(i),
            _ => classes.carnivores.push(i),
        }
    }

    classes
}

/// Every derived characteristic of a web, by index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebReport {
    pub apex_predators: Vec<usize>,
    pub producers: Vec<usize>,
    pub most_flexible_eaters: Vec<usize>,
    pub tastiest_food: Vec<usize>,
    /// `heights[i]` is the height of organism `i`
    pub heights: Vec<usize>,
    pub vore_classes: VoreClasses<usize>,
}

/// Run every analysis over `web`
pub fn analyze_all(web: &FoodWeb) -> Result<WebReport> {
    tracing::debug!("Analyzing food web of {} organisms", web.len());

    Ok(WebReport {
        apex_predators: apex_predators(web),
        producers: producers(web),
        most_flexible_eaters: most_flexible_eaters(web),
        tastiest_food: tastiest_food(web),
        heights: heights(web)?,
        vore_classes: vore_classes(web),
    })
}

/// A height entry resolved to its organism name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedHeight {
    pub name: String,
    pub height: usize,
}

/// A [`WebReport`] with every index replaced by the organism name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedReport {
    pub apex_predators: Vec<String>,
    pub producers: Vec<String>,
    pub most_flexible_eaters: Vec<String>,
    pub tastiest_food: Vec<String>,
    pub heights: Vec<NamedHeight>,
    pub vore_classes: VoreClasses<String>,
}

impl WebReport {
    /// Resolve indices against the web this report was computed from
    pub fn named(&self, web: &FoodWeb) -> Result<NamedReport> {
        let names = |indices: &[usize]| -> Result<Vec<String>> {
            indices
                .iter()
                .map(|&i| web.name_of(i).map(str::to_string))
                .collect()
        };

        let heights = self
            .heights
            .iter()
            .enumerate()
            .map(|(i, &height)| {
                Ok(NamedHeight {
                    name: web.name_of(i)?.to_string(),
                    height,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // All vore indices are checked before the infallible map below
        let vc = &self.vore_classes;
        for &i in vc
            .producers
            .iter()
            .chain(&vc.herbivores)
            .chain(&vc.omnivores)
            .chain(&vc.carnivores)
        {
            web.organism(i)?;
        }
        let vore_classes = vc.map(|&i| web.organisms()[i].name().to_string());

        Ok(NamedReport {
            apex_predators: names(&self.apex_predators)?,
            producers: names(&self.producers)?,
            most_flexible_eaters: names(&self.most_flexible_eaters)?,
            tastiest_food: names(&self.tastiest_food)?,
            heights,
            vore_classes,
        })
    }
}

impl NamedReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
