use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Filter state: the two user-controlled parameters
// ---------------------------------------------------------------------------

/// Current slider value and checkbox selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Rows must weigh strictly less than this (grams).
    pub mass_threshold: f64,
    /// Species labels to keep. Empty keeps nothing.
    pub selected_species: BTreeSet<String>,
}

impl FilterState {
    pub fn new<I, S>(mass_threshold: f64, species: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterState {
            mass_threshold,
            selected_species: species.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Rows of a shared dataset that passed the filter, in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView {
    dataset: Arc<PenguinDataset>,
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn dataset(&self) -> &Arc<PenguinDataset> {
        &self.dataset
    }

    /// Dataset row indices, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Penguin> + '_ {
        self.indices.iter().map(|&i| &self.dataset.rows()[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Two views are equal when they select the same rows of the same dataset.
impl PartialEq for FilteredView {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dataset, &other.dataset) && self.indices == other.indices
    }
}

/// Select the rows whose species is in `selected_species` and whose body mass
/// is strictly below `mass_threshold`.
///
/// No validation is done on either parameter: out-of-range thresholds keep all
/// or no rows, unknown species labels match nothing, and a missing body mass
/// never passes the mass check.
pub fn compute_filtered_view(
    dataset: &Arc<PenguinDataset>,
    mass_threshold: f64,
    selected_species: &BTreeSet<String>,
) -> FilteredView {
    let indices = dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, p)| selected_species.contains(&p.species))
        .filter(|(_, p)| p.body_mass_g.is_some_and(|m| m < mass_threshold))
        .map(|(i, _)| i)
        .collect();

    FilteredView {
        dataset: Arc::clone(dataset),
        indices,
    }
}

// ---------------------------------------------------------------------------
// Engine: filter state plus a cached view
// ---------------------------------------------------------------------------

/// Owns the filter parameters and recomputes the view lazily after either
/// one changes.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    dataset: Arc<PenguinDataset>,
    state: FilterState,
    /// `None` while stale.
    cache: Option<FilteredView>,
    recomputations: usize,
}

impl FilterEngine {
    pub fn new(dataset: Arc<PenguinDataset>, state: FilterState) -> Self {
        FilterEngine {
            dataset,
            state,
            cache: None,
            recomputations: 0,
        }
    }

    pub fn dataset(&self) -> &Arc<PenguinDataset> {
        &self.dataset
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_mass_threshold(&mut self, mass_threshold: f64) {
        if self.state.mass_threshold.to_bits() != mass_threshold.to_bits() {
            self.state.mass_threshold = mass_threshold;
            self.cache = None;
        }
    }

    /// Add or remove one species label from the selection.
    pub fn set_species_selected(&mut self, species: &str, selected: bool) {
        let changed = if selected {
            self.state.selected_species.insert(species.to_string())
        } else {
            self.state.selected_species.remove(species)
        };
        if changed {
            self.cache = None;
        }
    }

    pub fn set_selected_species(&mut self, species: BTreeSet<String>) {
        if self.state.selected_species != species {
            self.state.selected_species = species;
            self.cache = None;
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.cache.is_some()
    }

    /// How many times the view has been rebuilt.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// The current view, rebuilt first if a parameter changed since the last call.
    pub fn view(&mut self) -> &FilteredView {
        let FilterEngine {
            dataset,
            state,
            cache,
            recomputations,
        } = self;
        cache.get_or_insert_with(|| {
            let view = compute_filtered_view(dataset, state.mass_threshold, &state.selected_species);
            *recomputations += 1;
            log::debug!(
                "Recomputed view: mass < {}, species {:?} -> {} rows",
                state.mass_threshold,
                state.selected_species,
                view.len()
            );
            view
        })
    }
}
